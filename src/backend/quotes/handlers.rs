//! Quote admin handlers
//!
//! `GET /admin/quotes` lists the table; `/admin/quotes/new` creates;
//! `/admin/quotes/{id}` shows a populated form that either updates or
//! deletes the row depending on which button was pressed.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use sqlx::PgPool;

use super::db;
use crate::backend::db::schema::table_columns;
use crate::backend::error::BackendError;
use crate::backend::flash::{self, FlashJar, SUCCESSFUL_DELETE, SUCCESSFUL_INSERT, SUCCESSFUL_UPDATE};
use crate::backend::views::{FormView, TableRow, TableView};
use crate::shared::forms::{FormAction, FormErrors, QuoteForm};
use crate::shared::Quote;

pub const LIST_PATH: &str = "/admin/quotes";
pub const NEW_PATH: &str = "/admin/quotes/new";

pub fn edit_path(id: i64) -> String {
    format!("{}/{}", LIST_PATH, id)
}

fn form_page(
    jar: FlashJar,
    heading: &str,
    action: &str,
    form: QuoteForm,
    errors: Option<FormErrors>,
) -> Response {
    let (jar, flashes) = flash::take(jar);
    let view = FormView::new(heading, action, form, flashes);
    let view = match errors {
        Some(errors) => view.with_errors(errors),
        None => view,
    };
    (jar, Json(view)).into_response()
}

async fn require_quote(pool: &PgPool, id: i64) -> Result<Quote, BackendError> {
    db::select_by_id(pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found(format!("quote {}", id)))
}

/// `GET /admin/quotes`
pub async fn list(
    State(pool): State<PgPool>,
    jar: FlashJar,
) -> Result<(FlashJar, Json<TableView<Quote>>), BackendError> {
    let columns = table_columns(&pool, "quote").await?;
    let quotes = db::select_all(&pool).await?;

    let rows = quotes
        .into_iter()
        .map(|quote| TableRow {
            edit_path: edit_path(quote.id),
            record: quote,
        })
        .collect();

    let (jar, flashes) = flash::take(jar);
    Ok((
        jar,
        Json(TableView {
            heading: "[quote]".to_string(),
            columns: columns.columns,
            rows,
            new_path: NEW_PATH.to_string(),
            flashes,
        }),
    ))
}

/// `GET /admin/quotes/new`
pub async fn new_form(jar: FlashJar) -> Response {
    form_page(jar, "[new quote]", NEW_PATH, QuoteForm::default(), None)
}

/// `POST /admin/quotes/new`
pub async fn create(State(pool): State<PgPool>, jar: FlashJar, Form(form): Form<QuoteForm>) -> Response {
    let quote = match form.validate() {
        Ok(quote) => quote,
        Err(errors) => return form_page(jar, "[new quote]", NEW_PATH, form, Some(errors)),
    };
    if quote.action != FormAction::Submit {
        return form_page(jar, "[new quote]", NEW_PATH, form, None);
    }

    let result = db::insert_one(&pool, &quote.body, &quote.source).await;
    if let Ok(inserted) = &result {
        tracing::info!(quote_id = inserted.id, "Quote created");
    }
    let jar = flash::outcome(jar, "insert quote", &result, SUCCESSFUL_INSERT);
    (jar, Redirect::to(NEW_PATH)).into_response()
}

/// `GET /admin/quotes/{id}`
pub async fn edit_form(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    jar: FlashJar,
) -> Result<Response, BackendError> {
    let quote = require_quote(&pool, id).await?;
    let form = QuoteForm::populated(quote.id, &quote.body, &quote.source);
    Ok(form_page(jar, "[edit quote]", &edit_path(id), form, None))
}

/// `POST /admin/quotes/{id}`
///
/// `quote_submit` updates and returns to the same form, `quote_delete`
/// deletes and returns to the listing.
pub async fn update_or_delete(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    jar: FlashJar,
    Form(mut form): Form<QuoteForm>,
) -> Result<Response, BackendError> {
    require_quote(&pool, id).await?;
    form.quote_id = Some(id);

    let quote = match form.validate() {
        Ok(quote) => quote,
        Err(errors) => return Ok(form_page(jar, "[edit quote]", &edit_path(id), form, Some(errors))),
    };

    let response = match quote.action {
        FormAction::Submit => {
            let result = db::update_one(&pool, id, &quote.body, &quote.source).await;
            let jar = flash::outcome(jar, "update quote", &result, SUCCESSFUL_UPDATE);
            (jar, Redirect::to(&edit_path(id))).into_response()
        }
        FormAction::Delete => {
            let result = db::delete_one(&pool, id).await;
            if result.is_ok() {
                tracing::info!(quote_id = id, "Quote deleted");
            }
            let jar = flash::outcome(jar, "delete quote", &result, SUCCESSFUL_DELETE);
            (jar, Redirect::to(LIST_PATH)).into_response()
        }
        FormAction::None => form_page(jar, "[edit quote]", &edit_path(id), form, None),
    };
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(edit_path(12), "/admin/quotes/12");
        assert!(NEW_PATH.starts_with(LIST_PATH));
    }
}
