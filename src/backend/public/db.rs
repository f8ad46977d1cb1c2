//! Combined quote/tag views
//!
//! Read-only joins of quote, quote_tag and tag for the public listings and
//! the admin dashboard. Only tagged quotes appear.

use sqlx::PgPool;

use crate::backend::db::DataResult;
use crate::shared::CombinedRow;

/// Joined rows
///
/// With `distinct` each tagged quote appears once and `tag` is `None`;
/// without it there is one row per association.
pub async fn select_all(pool: &PgPool, distinct: bool) -> DataResult<Vec<CombinedRow>> {
    let sql = if distinct {
        r#"
        SELECT DISTINCT q.id AS quote_id, q.body, q.source, NULL::TEXT AS tag
        FROM quote q
        JOIN quote_tag qt ON qt.quote_id = q.id
        JOIN tag t ON t.id = qt.tag_id
        ORDER BY quote_id
        "#
    } else {
        r#"
        SELECT q.id AS quote_id, q.body, q.source, t.name AS tag
        FROM quote q
        JOIN quote_tag qt ON qt.quote_id = q.id
        JOIN tag t ON t.id = qt.tag_id
        ORDER BY q.id, t.name
        "#
    };

    let mut tx = pool.begin().await?;
    let rows = sqlx::query_as::<_, CombinedRow>(sql)
        .fetch_all(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(rows)
}

/// Quotes carrying the named tag, matched case-insensitively, one row each
pub async fn select_by_tag(pool: &PgPool, tag: &str) -> DataResult<Vec<CombinedRow>> {
    let mut tx = pool.begin().await?;

    let rows = sqlx::query_as::<_, CombinedRow>(
        r#"
        SELECT DISTINCT q.id AS quote_id, q.body, q.source, t.name AS tag
        FROM quote q
        JOIN quote_tag qt ON qt.quote_id = q.id
        JOIN tag t ON t.id = qt.tag_id
        WHERE lower(t.name) = lower($1)
        ORDER BY quote_id
        "#,
    )
    .bind(tag)
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(rows)
}
