//! Admin dashboard
//!
//! `GET /admin`: every association as a joined row, one per quote/tag pair.
//! The table editors live with their tables (`quotes`, `tags`,
//! `quote_tags`).

use axum::{extract::State, Json};
use sqlx::PgPool;

use crate::backend::auth::Principal;
use crate::backend::error::BackendError;
use crate::backend::flash::{self, FlashJar};
use crate::backend::public::db;
use crate::backend::views::DashboardView;

pub async fn dashboard(
    State(pool): State<PgPool>,
    principal: Principal,
    jar: FlashJar,
) -> Result<(FlashJar, Json<DashboardView>), BackendError> {
    let rows = db::select_all(&pool, false).await?;
    let (jar, flashes) = flash::take(jar);
    Ok((
        jar,
        Json(DashboardView {
            username: principal.username,
            rows,
            flashes,
        }),
    ))
}
