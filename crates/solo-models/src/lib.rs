//! Shared data models for the SoloSphere backend.
//!
//! This crate provides Serde-serializable types for:
//! - Job postings and their embedded buyer
//! - Bids and their status values
//! - Request payloads accepted at the API boundary

pub mod bid;
pub mod job;

// Re-export common types
pub use bid::{Bid, BidPayload, BidStatus, StatusUpdate};
pub use job::{Buyer, Job, JobPayload, JobUpdate};
