//! Generic CRUD over a Store. One statement per operation; "not found" comes from row counts.

use crate::error::AppError;
use crate::model::{Record, Resource};
use crate::sql::payload_params;
use crate::store::Store;
use serde_json::Value;

pub struct CrudService;

impl CrudService {
    /// All rows of `R`, ordered by id.
    pub async fn list<R: Resource>(store: &dyn Store) -> Result<Vec<Record<R::Payload>>, AppError> {
        let rows = store.select_all(&R::DEF).await?;
        rows.into_iter().map(decode_row::<R>).collect()
    }

    /// Fetch one row by id, or None.
    pub async fn read<R: Resource>(store: &dyn Store, id: i64) -> Result<Option<Record<R::Payload>>, AppError> {
        store.select_by_id(&R::DEF, id).await?.map(decode_row::<R>).transpose()
    }

    /// Insert one row. Returns the submitted fields with the generated id.
    pub async fn create<R: Resource>(store: &dyn Store, payload: R::Payload) -> Result<Record<R::Payload>, AppError> {
        let params = payload_params(&R::DEF, &payload)?;
        let id = store.insert(&R::DEF, &params).await?;
        tracing::debug!(resource = R::DEF.path_segment, id, "created");
        Ok(Record { id, fields: payload })
    }

    /// Replace every field of row `id`. Returns false when no row matched.
    pub async fn update<R: Resource>(store: &dyn Store, id: i64, payload: &R::Payload) -> Result<bool, AppError> {
        let params = payload_params(&R::DEF, payload)?;
        let affected = store.update(&R::DEF, id, &params).await?;
        Ok(affected > 0)
    }

    /// Delete row `id`. Returns false when no row matched.
    pub async fn delete<R: Resource>(store: &dyn Store, id: i64) -> Result<bool, AppError> {
        let affected = store.delete(&R::DEF, id).await?;
        Ok(affected > 0)
    }
}

fn decode_row<R: Resource>(row: Value) -> Result<Record<R::Payload>, AppError> {
    serde_json::from_value(row)
        .map_err(|e| AppError::Internal(format!("{} row does not match schema: {}", R::DEF.table_name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Movie, MoviePayload};
    use crate::store::MemoryStore;

    fn alien() -> MoviePayload {
        MoviePayload {
            title: "Alien".into(),
            director: "Ridley Scott".into(),
            year: "1979".into(),
            color: "1".into(),
            duration: 117,
        }
    }

    #[tokio::test]
    async fn create_then_read_returns_same_fields() {
        let store = MemoryStore::new();
        let created = CrudService::create::<Movie>(&store, alien()).await.unwrap();
        let read = CrudService::read::<Movie>(&store, created.id).await.unwrap().unwrap();
        assert_eq!(read, created);
    }

    #[tokio::test]
    async fn update_missing_row_reports_false() {
        let store = MemoryStore::new();
        assert!(!CrudService::update::<Movie>(&store, 0, &alien()).await.unwrap());
        assert!(!CrudService::delete::<Movie>(&store, 0).await.unwrap());
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let store = MemoryStore::new();
        for title in ["Alien", "Aliens", "Alien 3"] {
            let mut m = alien();
            m.title = title.into();
            CrudService::create::<Movie>(&store, m).await.unwrap();
        }
        let all = CrudService::list::<Movie>(&store).await.unwrap();
        let ids: Vec<i64> = all.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(all[2].fields.title, "Alien 3");
    }
}
