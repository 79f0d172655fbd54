//! PostgreSQL-backed spot collection
//!
//! Each spot is one row: a UUID key plus the document as JSONB.
//! - update: single CTE statement, partial merge via `doc || patch`
//! - email lookup: compares `doc -> 'email'` against a JSON string

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool, Row};
use uuid::Uuid;

use super::{SpotStore, StoreResult};
use crate::models::{
    strip_id, DeleteAck, Document, InsertAck, OwnerEmail, SpotId, TouristSpot, UpdateAck,
};

/// Spot row from database
#[derive(Debug, FromRow)]
struct SpotRow {
    id: Uuid,
    doc: Json<Document>,
}

impl From<SpotRow> for TouristSpot {
    fn from(row: SpotRow) -> Self {
        TouristSpot::new(SpotId::from(row.id), row.doc.0)
    }
}

/// Spot collection stored in PostgreSQL
#[derive(Clone)]
pub struct PgSpotStore {
    pool: PgPool,
}

impl PgSpotStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SpotStore for PgSpotStore {
    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn find_all(&self) -> StoreResult<Vec<TouristSpot>> {
        let rows: Vec<SpotRow> = sqlx::query_as(
            r#"
            SELECT id, doc
            FROM tourist_spots
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TouristSpot::from).collect())
    }

    async fn find_by_id(&self, id: SpotId) -> StoreResult<Option<TouristSpot>> {
        let row: Option<SpotRow> = sqlx::query_as(
            r#"
            SELECT id, doc
            FROM tourist_spots
            WHERE id = $1
            "#,
        )
        .bind(*id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TouristSpot::from))
    }

    async fn find_by_email(&self, email: &OwnerEmail) -> StoreResult<Vec<TouristSpot>> {
        let rows: Vec<SpotRow> = sqlx::query_as(
            r#"
            SELECT id, doc
            FROM tourist_spots
            WHERE doc -> 'email' = to_jsonb($1::text)
            ORDER BY created_at, id
            "#,
        )
        .bind(email.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TouristSpot::from).collect())
    }

    async fn insert(&self, mut doc: Document) -> StoreResult<InsertAck> {
        strip_id(&mut doc);

        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO tourist_spots (doc)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(Json(doc))
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(%id, "inserted tourist spot");
        Ok(InsertAck::new(SpotId::from(id)))
    }

    async fn update(&self, id: SpotId, mut patch: Document) -> StoreResult<UpdateAck> {
        strip_id(&mut patch);

        // Single statement: matched = row exists, modified = merge changed it
        let row = sqlx::query(
            r#"
            WITH target AS (
                SELECT id, doc FROM tourist_spots WHERE id = $1
            ),
            updated AS (
                UPDATE tourist_spots s
                SET doc = s.doc || $2
                FROM target t
                WHERE s.id = t.id
                  AND (t.doc || $2) IS DISTINCT FROM t.doc
                RETURNING s.id
            )
            SELECT
                (SELECT COUNT(*) FROM target) AS matched,
                (SELECT COUNT(*) FROM updated) AS modified
            "#,
        )
        .bind(*id.as_uuid())
        .bind(Json(patch))
        .fetch_one(&self.pool)
        .await?;

        let matched: i64 = row.get("matched");
        let modified: i64 = row.get("modified");

        Ok(UpdateAck::new(matched as u64, modified as u64))
    }

    async fn delete(&self, id: SpotId) -> StoreResult<DeleteAck> {
        let result = sqlx::query("DELETE FROM tourist_spots WHERE id = $1")
            .bind(*id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(DeleteAck::new(result.rows_affected()))
    }
}
