use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{GroupId, RawResultRecord, TestId},
    repositories::Fetched,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResultRecordRepository: Send + Sync {
    /// Distinct tests with at least one recorded session for the group.
    /// `Fetched::Empty` means the group has no associations at all.
    async fn find_test_ids_by_group(&self, group_id: GroupId) -> AppResult<Fetched<Vec<TestId>>>;

    async fn find_by_test_and_group(
        &self,
        test_id: TestId,
        group_id: GroupId,
    ) -> AppResult<Fetched<Vec<RawResultRecord>>>;

    /// Create the indexes the lookups rely on. Sources without indexes
    /// have nothing to do.
    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct MongoResultRecordRepository {
    collection: Collection<RawResultRecord>,
}

impl MongoResultRecordRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }
}

/// Sessions in the order they were sat. `session_id` is unique, so rows with
/// the same start always come back in the same order.
fn session_order() -> Document {
    doc! { "session_date": 1, "start_time": 1, "session_id": 1 }
}

fn bson_to_test_id(value: &Bson) -> Option<TestId> {
    match value {
        Bson::Int32(v) => Some(i64::from(*v)),
        Bson::Int64(v) => Some(*v),
        Bson::Double(v) if v.fract() == 0.0 => Some(*v as i64),
        other => {
            log::warn!("Ignoring non-integral test_id {:?} in results", other);
            None
        }
    }
}

#[async_trait]
impl ResultRecordRepository for MongoResultRecordRepository {
    async fn find_test_ids_by_group(&self, group_id: GroupId) -> AppResult<Fetched<Vec<TestId>>> {
        let values = self
            .collection
            .distinct("test_id", doc! { "group_id": group_id })
            .await?;

        let test_ids: Vec<TestId> = values.iter().filter_map(bson_to_test_id).collect();
        Ok(Fetched::from_records(test_ids))
    }

    async fn find_by_test_and_group(
        &self,
        test_id: TestId,
        group_id: GroupId,
    ) -> AppResult<Fetched<Vec<RawResultRecord>>> {
        let records: Vec<RawResultRecord> = self
            .collection
            .find(doc! { "test_id": test_id, "group_id": group_id })
            .sort(session_order())
            .await?
            .try_collect()
            .await?;
        Ok(Fetched::from_records(records))
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for results collection");

        let group_test_index = IndexModel::builder()
            .keys(doc! {
                "group_id": 1,
                "test_id": 1,
                "session_date": 1,
                "start_time": 1,
                "session_id": 1,
            })
            .options(
                IndexOptions::builder()
                    .name("group_test_sessions".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(group_test_index).await?;

        log::info!("Successfully created indexes for results collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bson_numeric_ids_are_normalised() {
        assert_eq!(bson_to_test_id(&Bson::Int32(3)), Some(3));
        assert_eq!(bson_to_test_id(&Bson::Int64(9_000_000_000)), Some(9_000_000_000));
        assert_eq!(bson_to_test_id(&Bson::Double(4.0)), Some(4));
    }

    #[test]
    fn test_session_order_ends_on_unique_key() {
        let order = session_order();
        let keys: Vec<&str> = order.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["session_date", "start_time", "session_id"]);
        assert!(session_order().values().all(|v| v == &Bson::Int32(1)));
    }

    #[test]
    fn test_non_integral_ids_are_skipped() {
        assert_eq!(bson_to_test_id(&Bson::Double(4.5)), None);
        assert_eq!(bson_to_test_id(&Bson::String("4".into())), None);
    }
}
