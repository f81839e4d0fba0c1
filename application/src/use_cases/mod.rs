//! Use cases for the application layer

pub mod query_controller;
