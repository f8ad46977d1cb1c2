//! Table metadata
//!
//! Admin listings label their columns with the names Postgres reports, so a
//! schema change shows up without touching the handlers.

use sqlx::PgPool;

use crate::backend::db::DataResult;
use crate::shared::TableColumns;

/// Ordered column names of `table` in the current schema
pub async fn table_columns(pool: &PgPool, table: &str) -> DataResult<TableColumns> {
    let mut tx = pool.begin().await?;

    let columns = sqlx::query_scalar::<_, String>(
        r#"
        SELECT column_name::TEXT
        FROM information_schema.columns
        WHERE table_schema = current_schema()
          AND table_name = $1
        ORDER BY ordinal_position
        "#,
    )
    .bind(table)
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(TableColumns {
        table: table.to_string(),
        columns,
    })
}
