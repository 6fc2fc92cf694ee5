use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::Group};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Group>>;
}

pub struct MongoGroupRepository {
    collection: Collection<Group>,
}

impl MongoGroupRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl GroupRepository for MongoGroupRepository {
    async fn find_all(&self) -> AppResult<Vec<Group>> {
        let groups = self
            .collection
            .find(doc! {})
            .sort(doc! { "id": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(groups)
    }
}
