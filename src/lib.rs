pub mod shared {
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod event;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod list_events {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod append_event {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
