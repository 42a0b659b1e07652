//! MongoDB access layer for the SoloSphere backend.
//!
//! This crate provides:
//! - Client bootstrap from environment configuration
//! - Typed repositories over the `jobs` and `bids` collections
//! - Store error types shared with the API layer

pub mod bids;
pub mod client;
pub mod error;
pub mod jobs;

pub use bids::BidRepository;
pub use client::{DbConfig, MongoStore};
pub use error::{DbError, DbResult};
pub use jobs::{JobRepository, JobSearch, SortOrder};

use mongodb::bson::oid::ObjectId;

/// Parse a client-supplied identifier into an `ObjectId`.
///
/// Malformed identifiers surface as a client error before any query runs.
pub fn parse_object_id(id: &str) -> DbResult<ObjectId> {
    id.parse().map_err(|_| DbError::InvalidId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_hex_id() {
        assert!(parse_object_id("64b0c8f2a1d2e3f4a5b6c7d8").is_ok());
    }

    #[test]
    fn rejects_malformed_ids() {
        for bad in ["", "not-an-id", "64b0c8f2", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
            assert!(
                matches!(parse_object_id(bad), Err(DbError::InvalidId(_))),
                "expected InvalidId for {bad:?}"
            );
        }
    }
}
