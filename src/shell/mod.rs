// Composition root for the events service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory event store and wire it into the use case handlers.
// - Expose the HTTP router and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
