//! Typed repository for the `jobs` collection.

use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, to_document, Document};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};

use solo_models::{Job, JobPayload, JobUpdate};

use crate::client::MongoStore;
use crate::error::{DbError, DbResult};

/// Sort order for the public job feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Parse the `sort` query parameter; anything unrecognized means no
    /// sort at all.
    pub fn from_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Ascending),
            "desc" | "descending" => Some(Self::Descending),
            _ => None,
        }
    }

    fn direction(&self) -> i32 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }
}

/// Filters for the public job feed. All clauses combine with AND.
#[derive(Debug, Clone, Default)]
pub struct JobSearch {
    /// Exact category match
    pub category: Option<String>,
    /// Case-insensitive substring match against the title
    pub search: Option<String>,
    /// Optional sort by deadline
    pub sort: Option<SortOrder>,
}

impl JobSearch {
    /// Build the find filter.
    ///
    /// The title clause is always present: absent search text becomes the
    /// empty pattern, which matches every title. Search text is escaped,
    /// so metacharacters match literally.
    fn filter(&self) -> Document {
        let pattern = self
            .search
            .as_deref()
            .map(|s| regex::escape(s))
            .unwrap_or_default();

        let mut filter = doc! {
            "title": { "$regex": pattern, "$options": "i" },
        };
        if let Some(category) = &self.category {
            filter.insert("category", category.clone());
        }
        filter
    }

    fn sort_doc(&self) -> Option<Document> {
        self.sort.map(|order| doc! { "deadline": order.direction() })
    }
}

/// Repository for job documents.
#[derive(Clone)]
pub struct JobRepository {
    store: MongoStore,
}

impl JobRepository {
    pub fn new(store: MongoStore) -> Self {
        Self { store }
    }

    /// Every job, unfiltered and unpaginated.
    pub async fn list_all(&self) -> DbResult<Vec<Job>> {
        Ok(self.store.jobs().find(doc! {}).await?.try_collect().await?)
    }

    /// Jobs posted by the given buyer.
    pub async fn list_by_buyer(&self, email: &str) -> DbResult<Vec<Job>> {
        let filter = doc! { "buyer.email": email };
        Ok(self.store.jobs().find(filter).await?.try_collect().await?)
    }

    /// One job by id, or `None` when nothing matches.
    pub async fn get(&self, id: ObjectId) -> DbResult<Option<Job>> {
        Ok(self.store.jobs().find_one(doc! { "_id": id }).await?)
    }

    /// Insert a new job. The bid counter always starts at zero.
    pub async fn insert(&self, payload: JobPayload) -> DbResult<InsertOneResult> {
        let job = payload.into_job();
        Ok(self.store.jobs().insert_one(&job).await?)
    }

    /// Merge-set the present fields of `patch`; creates the document when
    /// nothing matches (upsert).
    pub async fn update(&self, id: ObjectId, patch: &JobUpdate) -> DbResult<UpdateResult> {
        let set = to_document(patch)?;
        if set.is_empty() {
            return Err(DbError::EmptyUpdate);
        }

        let result = self
            .store
            .jobs()
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .upsert(true)
            .await?;
        Ok(result)
    }

    /// Delete a job. Zero-affected is reported, not an error. Bids that
    /// reference the job are left in place.
    pub async fn delete(&self, id: ObjectId) -> DbResult<DeleteResult> {
        Ok(self.store.jobs().delete_one(doc! { "_id": id }).await?)
    }

    /// Public feed with optional category filter, title search, and
    /// deadline sort.
    pub async fn search(&self, query: &JobSearch) -> DbResult<Vec<Job>> {
        let jobs = self.store.jobs();
        let mut find = jobs.find(query.filter());
        if let Some(sort) = query.sort_doc() {
            find = find.sort(sort);
        }
        Ok(find.await?.try_collect().await?)
    }
}
