mod auth;
pub mod client;
pub mod types;
mod version;

pub use client::*;
pub use types::*;
