//! HTTP handlers: glue between the router and the service layer.

pub mod health;
pub mod messages;
pub mod models;
pub mod participants;
pub mod status;
