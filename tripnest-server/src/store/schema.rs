//! Collection schema for the PostgreSQL backend

use sqlx::PgPool;

use super::StoreResult;

/// Create the tourist spot table and its email index if missing.
pub async fn ensure_schema(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Ensuring tourist_spots schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tourist_spots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            doc JSONB NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            CONSTRAINT tourist_spots_doc_is_object CHECK (jsonb_typeof(doc) = 'object')
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS tourist_spots_email_idx
            ON tourist_spots ((doc -> 'email'))
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("tourist_spots schema ready");
    Ok(())
}
