//! Tag admin handlers
//!
//! Same shape as the quote handlers. Names are capitalized by the data
//! access layer, so `stoic` is stored and displayed as `Stoic`.

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
use crate::shared::forms::{FormAction, FormErrors, TagForm};
use crate::shared::Tag;

pub const LIST_PATH: &str = "/admin/tags";
pub const NEW_PATH: &str = "/admin/tags/new";

pub fn edit_path(id: i64) -> String {
    format!("{}/{}", LIST_PATH, id)
}

fn form_page(jar: FlashJar, heading: &str, action: &str, form: TagForm, errors: Option<FormErrors>) -> Response {
    let (jar, flashes) = flash::take(jar);
    let mut view = FormView::new(heading, action, form, flashes);
    if let Some(errors) = errors {
        view = view.with_errors(errors);
    }
    (jar, Json(view)).into_response()
}

/// `GET /admin/tags`
pub async fn list(
    State(pool): State<PgPool>,
    jar: FlashJar,
) -> Result<(FlashJar, Json<TableView<Tag>>), BackendError> {
    let columns = table_columns(&pool, "tag").await?;
    let tags = db::select_all(&pool).await?;

    let rows = tags
        .into_iter()
        .map(|tag| TableRow {
            edit_path: edit_path(tag.id),
            record: tag,
        })
        .collect();

    let (jar, flashes) = flash::take(jar);
    Ok((
        jar,
        Json(TableView {
            heading: "[tag]".to_string(),
            columns: columns.columns,
            rows,
            new_path: NEW_PATH.to_string(),
            flashes,
        }),
    ))
}

/// `GET /admin/tags/new`
pub async fn new_form(jar: FlashJar) -> Response {
    form_page(jar, "[new tag]", NEW_PATH, TagForm::default(), None)
}

/// `POST /admin/tags/new`
pub async fn create(State(pool): State<PgPool>, jar: FlashJar, Form(form): Form<TagForm>) -> Response {
    let tag = match form.validate() {
        Ok(tag) => tag,
        Err(errors) => return form_page(jar, "[new tag]", NEW_PATH, form, Some(errors)),
    };
    if tag.action != FormAction::Submit {
        return form_page(jar, "[new tag]", NEW_PATH, form, None);
    }

    let result = db::insert_one(&pool, &tag.name).await;
    if let Ok(inserted) = &result {
        tracing::info!(tag_id = inserted.id, "Tag created: {}", inserted.name);
    }
    let jar = flash::outcome(jar, "insert tag", &result, SUCCESSFUL_INSERT);
    (jar, Redirect::to(NEW_PATH)).into_response()
}

/// `GET /admin/tags/{id}`
pub async fn edit_form(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    jar: FlashJar,
) -> Result<Response, BackendError> {
    let tag = db::select_by_id(&pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found(format!("tag {}", id)))?;
    let form = TagForm::populated(tag.id, &tag.name);
    Ok(form_page(jar, "[edit tag]", &edit_path(id), form, None))
}

/// `POST /admin/tags/{id}`
pub async fn update_or_delete(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    jar: FlashJar,
    Form(mut form): Form<TagForm>,
) -> Result<Response, BackendError> {
    if db::select_by_id(&pool, id).await?.is_none() {
        return Err(BackendError::not_found(format!("tag {}", id)));
    }
    form.tag_id = Some(id);

    let tag = match form.validate() {
        Ok(tag) => tag,
        Err(errors) => return Ok(form_page(jar, "[edit tag]", &edit_path(id), form, Some(errors))),
    };

    let response = match tag.action {
        FormAction::Submit => {
            let result = db::update_one(&pool, id, &tag.name).await;
            let jar = flash::outcome(jar, "update tag", &result, SUCCESSFUL_UPDATE);
            (jar, Redirect::to(&edit_path(id))).into_response()
        }
        FormAction::Delete => {
            let result = db::delete_one(&pool, id).await;
            if result.is_ok() {
                tracing::info!(tag_id = id, "Tag deleted");
            }
            let jar = flash::outcome(jar, "delete tag", &result, SUCCESSFUL_DELETE);
            (jar, Redirect::to(LIST_PATH)).into_response()
        }
        FormAction::None => form_page(jar, "[edit tag]", &edit_path(id), form, None),
    };
    Ok(response)
}
