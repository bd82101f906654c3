pub mod chat;
pub mod config;
pub mod error;
pub mod listings;
pub mod models;
pub mod notify;
pub mod session;
pub mod store;
pub mod workflow;

pub use error::{DeskError, DeskResult, StoreError};
