//! Job posting models.

use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// The account that posted a job, embedded in each job document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buyer {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// A stored job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Database-assigned identifier
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub title: String,

    pub category: String,

    /// Stored as an ISO `YYYY-MM-DD` string, so lexicographic order is
    /// date order.
    pub deadline: NaiveDate,

    /// Minimum budget
    pub min_price: f64,

    /// Maximum budget
    pub max_price: f64,

    pub description: String,

    /// The posting account
    pub buyer: Buyer,

    /// Number of bids placed against this job. Incremented only by a
    /// successful bid submission.
    #[serde(default)]
    pub bid_count: i64,
}

/// Body of a job-creation request.
///
/// `bid_count` is deliberately absent: new jobs start at zero no matter
/// what the client sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPayload {
    pub title: String,
    pub category: String,
    pub deadline: NaiveDate,
    pub min_price: f64,
    pub max_price: f64,
    pub description: String,
    pub buyer: Buyer,
}

impl JobPayload {
    /// Materialize a storable job with the counter zeroed.
    pub fn into_job(self) -> Job {
        Job {
            id: None,
            title: self.title,
            category: self.category,
            deadline: self.deadline,
            min_price: self.min_price,
            max_price: self.max_price,
            description: self.description,
            buyer: self.buyer,
            bid_count: 0,
        }
    }
}

/// Body of a job-update request.
///
/// Fields left out of the request are left untouched in the stored
/// document (merge-set semantics).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer: Option<Buyer>,
}
