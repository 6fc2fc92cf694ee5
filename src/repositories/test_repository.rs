use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Test};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TestRepository: Send + Sync {
    /// Full test catalog in catalog order
    async fn find_all(&self) -> AppResult<Vec<Test>>;
}

pub struct MongoTestRepository {
    collection: Collection<Test>,
}

impl MongoTestRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl TestRepository for MongoTestRepository {
    async fn find_all(&self) -> AppResult<Vec<Test>> {
        let tests = self
            .collection
            .find(doc! {})
            .sort(doc! { "id": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(tests)
    }
}
