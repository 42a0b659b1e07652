//! Bid models.

use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a bid.
///
/// The value set is closed at the boundary, but any status may overwrite
/// any other: no transition graph is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BidStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Complete,
    Rejected,
}

impl BidStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BidStatus::Pending => "Pending",
            BidStatus::InProgress => "In Progress",
            BidStatus::Complete => "Complete",
            BidStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for BidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored bid.
///
/// `job_id` is kept as the hex string the client submitted; it references
/// a job's identifier but is not a database-enforced foreign key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub job_id: String,

    /// The bidder
    pub email: String,

    /// The job owner's email, denormalized at bid time
    pub buyer: String,

    pub price: f64,

    pub deadline: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(default)]
    pub status: BidStatus,
}

/// Body of a bid submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidPayload {
    pub job_id: String,
    pub email: String,
    pub buyer: String,
    pub price: f64,
    pub deadline: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub status: BidStatus,
}

impl BidPayload {
    /// Materialize a storable bid.
    pub fn into_bid(self) -> Bid {
        Bid {
            id: None,
            job_id: self.job_id,
            email: self.email,
            buyer: self.buyer,
            price: self.price,
            deadline: self.deadline,
            comment: self.comment,
            status: self.status,
        }
    }
}

/// Body of a bid status update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: BidStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_display_strings() {
        assert_eq!(
            serde_json::to_value(BidStatus::InProgress).unwrap(),
            serde_json::json!("In Progress")
        );
        assert_eq!(
            serde_json::from_value::<BidStatus>(serde_json::json!("Rejected")).unwrap(),
            BidStatus::Rejected
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_value::<BidStatus>(serde_json::json!("Cancelled")).is_err());
    }

    #[test]
    fn payload_uses_camel_case_job_id() {
        let payload: BidPayload = serde_json::from_value(serde_json::json!({
            "jobId": "64b0c8f2a1d2e3f4a5b6c7d8",
            "email": "bidder@example.com",
            "buyer": "buyer@example.com",
            "price": 150.0,
            "deadline": "2026-10-15"
        }))
        .unwrap();

        assert_eq!(payload.job_id, "64b0c8f2a1d2e3f4a5b6c7d8");
        // Absent status defaults to Pending
        assert_eq!(payload.status, BidStatus::Pending);

        let bid = payload.into_bid();
        let value = serde_json::to_value(&bid).unwrap();
        assert!(value.get("jobId").is_some());
        assert!(value.get("job_id").is_none());
    }
}
