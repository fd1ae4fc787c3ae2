//! HTTP surface: the generation proxy

mod generate;
mod server;

pub use generate::{GenerateBody, generate};
pub use server::{AppState, router, serve};
