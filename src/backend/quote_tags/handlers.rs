//! Quote-tag association handlers
//!
//! Associations have no editable columns: the per-row page shows which
//! quote and tag are linked and its only action removes the link.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use sqlx::PgPool;

use super::db;
use crate::backend::db::schema::table_columns;
use crate::backend::error::BackendError;
use crate::backend::flash::{self, FlashJar, SUCCESSFUL_DELETE, SUCCESSFUL_INSERT};
use crate::backend::views::{FormView, TableRow, TableView};
use crate::backend::{quotes, tags};
use crate::shared::forms::{FormErrors, QuoteTagForm};
use crate::shared::QuoteTag;

pub const LIST_PATH: &str = "/admin/quote_tags";
pub const NEW_PATH: &str = "/admin/quote_tags/new";

pub fn edit_path(quote_id: i64, tag_id: i64) -> String {
    format!("{}/{}/{}", LIST_PATH, quote_id, tag_id)
}

fn form_page(
    jar: FlashJar,
    heading: &str,
    action: &str,
    form: QuoteTagForm,
    errors: Option<FormErrors>,
) -> Response {
    let (jar, flashes) = flash::take(jar);
    let mut view = FormView::new(heading, action, form, flashes);
    if let Some(errors) = errors {
        view = view.with_errors(errors);
    }
    (jar, Json(view)).into_response()
}

/// `GET /admin/quote_tags`
pub async fn list(
    State(pool): State<PgPool>,
    jar: FlashJar,
) -> Result<(FlashJar, Json<TableView<QuoteTag>>), BackendError> {
    let columns = table_columns(&pool, "quote_tag").await?;
    let associations = db::select_all(&pool).await?;

    let rows = associations
        .into_iter()
        .map(|association| TableRow {
            edit_path: edit_path(association.quote_id, association.tag_id),
            record: association,
        })
        .collect();

    let (jar, flashes) = flash::take(jar);
    Ok((
        jar,
        Json(TableView {
            heading: "[quote_tag]".to_string(),
            columns: columns.columns,
            rows,
            new_path: NEW_PATH.to_string(),
            flashes,
        }),
    ))
}

/// `GET /admin/quote_tags/new`
pub async fn new_form(jar: FlashJar) -> Response {
    form_page(jar, "[new quote_tag]", NEW_PATH, QuoteTagForm::default(), None)
}

/// `POST /admin/quote_tags/new`
///
/// Unknown ids and duplicate pairs are rejected by the database and come
/// back as an error flash.
pub async fn create(State(pool): State<PgPool>, jar: FlashJar, Form(form): Form<QuoteTagForm>) -> Response {
    let association = match form.validate() {
        Ok(association) => association,
        Err(errors) => return form_page(jar, "[new quote_tag]", NEW_PATH, form, Some(errors)),
    };

    let result = db::insert_one(&pool, association.quote_id, association.tag_id).await;
    if result.is_ok() {
        tracing::info!(
            quote_id = association.quote_id,
            tag_id = association.tag_id,
            "Quote tagged"
        );
    }
    let jar = flash::outcome(jar, "insert quote_tag", &result, SUCCESSFUL_INSERT);
    (jar, Redirect::to(NEW_PATH)).into_response()
}

/// `GET /admin/quote_tags/{quote_id}/{tag_id}`
pub async fn view(
    State(pool): State<PgPool>,
    Path((quote_id, tag_id)): Path<(i64, i64)>,
    jar: FlashJar,
) -> Result<Response, BackendError> {
    let not_found = || BackendError::not_found(format!("quote_tag ({}, {})", quote_id, tag_id));

    db::select_by_ids(&pool, quote_id, tag_id).await?.ok_or_else(not_found)?;
    let quote = quotes::db::select_by_id(&pool, quote_id).await?.ok_or_else(not_found)?;
    let tag = tags::db::select_by_id(&pool, tag_id).await?.ok_or_else(not_found)?;

    let form = QuoteTagForm::populated(quote_id, tag_id, &quote.body, &tag.name);
    Ok(form_page(jar, "[quote_tag]", &edit_path(quote_id, tag_id), form, None))
}

/// `POST /admin/quote_tags/{quote_id}/{tag_id}`
pub async fn delete(
    State(pool): State<PgPool>,
    Path((quote_id, tag_id)): Path<(i64, i64)>,
    jar: FlashJar,
) -> Result<Response, BackendError> {
    if db::select_by_ids(&pool, quote_id, tag_id).await?.is_none() {
        return Err(BackendError::not_found(format!("quote_tag ({}, {})", quote_id, tag_id)));
    }

    let result = db::delete_one(&pool, quote_id, tag_id).await;
    if result.is_ok() {
        tracing::info!(quote_id, tag_id, "Quote untagged");
    }
    let jar = flash::outcome(jar, "delete quote_tag", &result, SUCCESSFUL_DELETE);
    Ok((jar, Redirect::to(LIST_PATH)).into_response())
}
