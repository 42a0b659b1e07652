//! Typed repository for the `bids` collection.

use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::results::{InsertOneResult, UpdateResult};
use tracing::info;

use solo_models::{Bid, BidPayload, BidStatus};

use crate::client::MongoStore;
use crate::error::{DbError, DbResult};
use crate::parse_object_id;

/// Filter selecting the bids a party is involved in: the ones placed
/// against their jobs when acting as buyer, otherwise the ones they
/// placed themselves.
fn party_filter(email: &str, as_buyer: bool) -> Document {
    if as_buyer {
        doc! { "buyer": email }
    } else {
        doc! { "email": email }
    }
}

/// Repository for bid documents.
#[derive(Clone)]
pub struct BidRepository {
    store: MongoStore,
}

impl BidRepository {
    pub fn new(store: MongoStore) -> Self {
        Self { store }
    }

    /// Insert a bid and bump the target job's counter.
    ///
    /// At most one bid may exist per `(email, jobId)` pair. The pre-check
    /// answers the common case; the unique index catches concurrent
    /// submissions that slip past it, and both paths report the same
    /// duplicate error. The counter bump is a single atomic `$inc`, but
    /// it is not transactional with the insert: an insert that lands
    /// without its increment leaves a recoverable inconsistency.
    pub async fn insert(&self, payload: BidPayload) -> DbResult<InsertOneResult> {
        let job_id = parse_object_id(&payload.job_id)?;

        let existing = self
            .store
            .bids()
            .find_one(doc! { "email": payload.email.as_str(), "jobId": payload.job_id.as_str() })
            .await?;
        if existing.is_some() {
            return Err(DbError::DuplicateBid);
        }

        let bid = payload.into_bid();
        let result = match self.store.bids().insert_one(&bid).await {
            Ok(r) => r,
            Err(e) if DbError::is_duplicate_key(&e) => return Err(DbError::DuplicateBid),
            Err(e) => return Err(e.into()),
        };

        self.store
            .jobs()
            .update_one(doc! { "_id": job_id }, doc! { "$inc": { "bid_count": 1 } })
            .await?;
        info!(job_id = %bid.job_id, email = %bid.email, "Recorded bid");

        Ok(result)
    }

    /// Bids involving the given party.
    pub async fn list_for_party(&self, email: &str, as_buyer: bool) -> DbResult<Vec<Bid>> {
        let filter = party_filter(email, as_buyer);
        Ok(self.store.bids().find(filter).await?.try_collect().await?)
    }

    /// Overwrite a bid's status. No transition rules are enforced and no
    /// caller check is made.
    pub async fn update_status(&self, id: ObjectId, status: BidStatus) -> DbResult<UpdateResult> {
        let result = self
            .store
            .bids()
            .update_one(doc! { "_id": id }, doc! { "$set": { "status": status.as_str() } })
            .await?;
        Ok(result)
    }
}
