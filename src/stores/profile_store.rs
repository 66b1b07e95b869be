use std::future::{Future, IntoFuture};
use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::error::{AppError, Result};
use crate::models::user_profile::UserProfile;

pub const USERS_COLLECTION: &str = "users";

/// Profiles keyed by username.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find(&self, username: &str) -> Result<Option<UserProfile>>;

    /// Create the profile or overwrite its `FirstName` and `Age`.
    /// Other fields already on the document are kept.
    async fn upsert(&self, username: &str, first_name: &str, age: i32) -> Result<()>;

    async fn ping(&self) -> Result<()>;
}

pub struct MongoProfileStore {
    db: Database,
    users: Collection<UserProfile>,
    timeout: Duration,
}

impl MongoProfileStore {
    pub fn new(db: Database, timeout: Duration) -> Self {
        let users = db.collection::<UserProfile>(USERS_COLLECTION);
        Self { db, users, timeout }
    }

    async fn bounded<T, F>(&self, op: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, mongodb::error::Error>>,
    {
        match tokio::time::timeout(self.timeout, op).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(AppError::Timeout(self.timeout.as_millis())),
        }
    }
}

#[async_trait]
impl ProfileStore for MongoProfileStore {
    async fn find(&self, username: &str) -> Result<Option<UserProfile>> {
        self.bounded(self.users.find_one(doc! { "_id": username }).into_future())
            .await
    }

    async fn upsert(&self, username: &str, first_name: &str, age: i32) -> Result<()> {
        let update = doc! {
            "$set": {
                "FirstName": first_name,
                "Age": age,
            }
        };

        self.bounded(
            self.users
                .update_one(doc! { "_id": username }, update)
                .upsert(true)
                .into_future(),
        )
        .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        self.bounded(crate::db::mongodb::ping(&self.db)).await
    }
}
