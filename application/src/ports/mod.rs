//! Ports (interfaces) for the application layer

pub mod answer_gateway;
pub mod query_logger;
