use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{GroupId, Student},
    repositories::Fetched,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Roster of a group; `Fetched::Empty` when the group has no students.
    async fn find_by_group(&self, group_id: GroupId) -> AppResult<Fetched<Vec<Student>>>;

    /// Create the indexes the lookups rely on. Sources without indexes
    /// have nothing to do.
    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct MongoStudentRepository {
    collection: Collection<Student>,
}

impl MongoStudentRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl StudentRepository for MongoStudentRepository {
    async fn find_by_group(&self, group_id: GroupId) -> AppResult<Fetched<Vec<Student>>> {
        let students: Vec<Student> = self
            .collection
            .find(doc! { "group_id": group_id })
            .sort(doc! { "last_name": 1, "first_name": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(Fetched::from_records(students))
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for students collection");

        let group_index = IndexModel::builder()
            .keys(doc! { "group_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("group_id".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(group_index).await?;

        log::info!("Successfully created indexes for students collection");
        Ok(())
    }
}
