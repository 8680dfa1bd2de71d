// src/db/schema.rs
// DOCUMENTATION: Table definitions for both resources
// PURPOSE: Create the tables at startup when they do not exist yet

use sqlx::PgPool;

const CREATE_PHOTOS: &str = r#"
    CREATE TABLE IF NOT EXISTS "Photos" (
        id SERIAL PRIMARY KEY,
        pseudonyme VARCHAR(255),
        photo BYTEA NOT NULL,
        "createdAt" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        "updatedAt" TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_ADMIN_PHOTOS: &str = r#"
    CREATE TABLE IF NOT EXISTS admin_photos (
        id SERIAL PRIMARY KEY,
        location VARCHAR(255),
        photo BYTEA,
        "createdAt" TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        "updatedAt" TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_PHOTOS_CREATED_AT_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS photos_created_at_idx ON "Photos" ("createdAt" DESC, id DESC)
"#;

/// Apply every table definition, in order
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in [
        CREATE_PHOTOS,
        CREATE_ADMIN_PHOTOS,
        CREATE_PHOTOS_CREATED_AT_INDEX,
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    log::info!("Database schema verified");
    Ok(())
}
