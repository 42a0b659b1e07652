//! Request handlers.

pub mod auth;
pub mod bids;
pub mod health;
pub mod jobs;

pub use auth::*;
pub use bids::*;
pub use health::*;
pub use jobs::*;
