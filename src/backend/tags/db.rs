//! Database operations for tags
//!
//! Names are capitalized on every write.

use sqlx::PgPool;

use crate::backend::db::{DataError, DataResult};
use crate::shared::{capitalize, Tag};

/// All tags, ordered by id
pub async fn select_all(pool: &PgPool) -> DataResult<Vec<Tag>> {
    let mut tx = pool.begin().await?;

    let tags = sqlx::query_as::<_, Tag>(
        r#"
        SELECT id, name
        FROM tag
        ORDER BY id ASC
        "#,
    )
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(tags)
}

pub async fn select_by_id(pool: &PgPool, id: i64) -> DataResult<Option<Tag>> {
    let mut tx = pool.begin().await?;

    let tag = sqlx::query_as::<_, Tag>(
        r#"
        SELECT id, name
        FROM tag
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(tag)
}

/// Insert a tag; the stored name is capitalized
pub async fn insert_one(pool: &PgPool, name: &str) -> DataResult<Tag> {
    let mut tx = pool.begin().await?;

    let tag = sqlx::query_as::<_, Tag>(
        r#"
        INSERT INTO tag (name)
        VALUES ($1)
        RETURNING id, name
        "#,
    )
    .bind(capitalize(name))
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::debug!(tag_id = tag.id, name = %tag.name, "inserted tag");
    Ok(tag)
}

/// Rename a tag; the stored name is capitalized
pub async fn update_one(pool: &PgPool, id: i64, name: &str) -> DataResult<Tag> {
    let mut tx = pool.begin().await?;

    let tag = sqlx::query_as::<_, Tag>(
        r#"
        UPDATE tag
        SET name = $1
        WHERE id = $2
        RETURNING id, name
        "#,
    )
    .bind(capitalize(name))
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| DataError::not_found("tag", id))?;

    tx.commit().await?;
    Ok(tag)
}

/// Delete a tag; its quote_tag rows go with it (ON DELETE CASCADE)
pub async fn delete_one(pool: &PgPool, id: i64) -> DataResult<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM tag WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DataError::not_found("tag", id));
    }

    tx.commit().await?;
    Ok(())
}
