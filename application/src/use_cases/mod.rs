//! Application use cases

pub mod fetch_rounds;
pub mod quiz_controller;
