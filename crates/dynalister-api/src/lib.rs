#![doc = include_str!("../README.md")]

mod backend;
pub mod client;
pub mod error;
pub mod types;

pub use client::{Client, ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use types::{Action, Change, Code, Response};
