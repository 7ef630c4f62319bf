//! Protected profile endpoint.

pub mod handlers;
pub mod routes;
