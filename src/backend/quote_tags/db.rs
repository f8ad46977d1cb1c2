//! Database operations for quote-tag associations

use sqlx::PgPool;

use crate::backend::db::{DataError, DataResult};
use crate::shared::QuoteTag;

pub async fn select_all(pool: &PgPool) -> DataResult<Vec<QuoteTag>> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query_as::<_, QuoteTag>(
        r#"
        SELECT quote_id, tag_id
        FROM quote_tag
        ORDER BY quote_id, tag_id
        "#,
    )
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(rows)
}

pub async fn select_by_ids(pool: &PgPool, quote_id: i64, tag_id: i64) -> DataResult<Option<QuoteTag>> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, QuoteTag>(
        r#"
        SELECT quote_id, tag_id
        FROM quote_tag
        WHERE quote_id = $1 AND tag_id = $2
        "#,
    )
    .bind(quote_id)
    .bind(tag_id)
    .fetch_optional(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(row)
}

/// Associations of one quote
pub async fn select_by_quote(pool: &PgPool, quote_id: i64) -> DataResult<Vec<QuoteTag>> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query_as::<_, QuoteTag>(
        r#"
        SELECT quote_id, tag_id
        FROM quote_tag
        WHERE quote_id = $1
        ORDER BY tag_id
        "#,
    )
    .bind(quote_id)
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(rows)
}

/// Associate a quote with a tag
///
/// Fails with `UniqueViolation` when the pair exists and with
/// `ForeignKeyViolation` when either id is unknown.
pub async fn insert_one(pool: &PgPool, quote_id: i64, tag_id: i64) -> DataResult<QuoteTag> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, QuoteTag>(
        r#"
        INSERT INTO quote_tag (quote_id, tag_id)
        VALUES ($1, $2)
        RETURNING quote_id, tag_id
        "#,
    )
    .bind(quote_id)
    .bind(tag_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(row)
}

pub async fn delete_one(pool: &PgPool, quote_id: i64, tag_id: i64) -> DataResult<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        DELETE FROM quote_tag
        WHERE quote_id = $1 AND tag_id = $2
        "#,
    )
    .bind(quote_id)
    .bind(tag_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DataError::not_found("quote_tag", format!("({}, {})", quote_id, tag_id)));
    }

    tx.commit().await?;
    Ok(())
}
