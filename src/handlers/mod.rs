pub mod graphql_handler;
pub mod health_handler;

pub use graphql_handler::{graphiql, graphql};
pub use health_handler::health_check;
