//! Public pages
//!
//! No login required. Everything here is read-only apart from the tag
//! picker, which only redirects.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use sqlx::PgPool;

use super::db;
use crate::backend::error::BackendError;
use crate::backend::flash::{self, FlashJar};
use crate::backend::views::{FormView, IndexView, ListingView, TagPickerView};
use crate::backend::{quotes, tags};
use crate::shared::forms::{FormErrors, TagSelectForm};

pub const TAG_PICKER_PATH: &str = "/tags";

/// Public listing path for a tag
pub fn tag_listing_path(tag: &str) -> String {
    format!("/quotes/{}", urlencoding::encode(tag))
}

/// `GET /`
pub async fn index(
    State(pool): State<PgPool>,
    jar: FlashJar,
) -> Result<(FlashJar, Json<IndexView>), BackendError> {
    let quote = quotes::db::select_random(&pool).await?;
    let (jar, flashes) = flash::take(jar);
    Ok((jar, Json(IndexView { quote, flashes })))
}

/// `GET /quotes`
pub async fn quotes(
    State(pool): State<PgPool>,
    jar: FlashJar,
) -> Result<(FlashJar, Json<ListingView>), BackendError> {
    let rows = db::select_all(&pool, true).await?;
    let (jar, flashes) = flash::take(jar);
    Ok((
        jar,
        Json(ListingView {
            page: "[quotes]".to_string(),
            rows,
            flashes,
        }),
    ))
}

/// `GET /quotes/{tag}`
///
/// An unknown tag is an empty listing, not a 404.
pub async fn quotes_by_tag(
    State(pool): State<PgPool>,
    Path(tag): Path<String>,
    jar: FlashJar,
) -> Result<(FlashJar, Json<ListingView>), BackendError> {
    let rows = db::select_by_tag(&pool, &tag).await?;
    let (jar, flashes) = flash::take(jar);
    Ok((
        jar,
        Json(ListingView {
            page: format!(".[{}]", tag.to_lowercase()),
            rows,
            flashes,
        }),
    ))
}

async fn tag_choices(pool: &PgPool) -> Result<Vec<String>, BackendError> {
    let tags = tags::db::select_all(pool).await?;
    Ok(tags.into_iter().map(|tag| tag.name).collect())
}

fn picker_page(jar: FlashJar, choices: Vec<String>, form: TagSelectForm, errors: Option<FormErrors>) -> Response {
    let (jar, flashes) = flash::take(jar);
    let mut view = FormView::new("[tags]", TAG_PICKER_PATH, form, flashes);
    if let Some(errors) = errors {
        view = view.with_errors(errors);
    }
    (jar, Json(TagPickerView { choices, form: view })).into_response()
}

/// `GET /tags`
pub async fn tag_picker(State(pool): State<PgPool>, jar: FlashJar) -> Result<Response, BackendError> {
    let choices = tag_choices(&pool).await?;
    Ok(picker_page(jar, choices, TagSelectForm::default(), None))
}

/// `POST /tags`
pub async fn pick_tag(
    State(pool): State<PgPool>,
    jar: FlashJar,
    Form(form): Form<TagSelectForm>,
) -> Result<Response, BackendError> {
    let choices = tag_choices(&pool).await?;
    match form.validate(&choices) {
        Ok(tag) => Ok(Redirect::to(&tag_listing_path(&tag)).into_response()),
        Err(errors) => Ok(picker_page(jar, choices, form, Some(errors))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_listing_path_is_encoded() {
        assert_eq!(tag_listing_path("Stoic"), "/quotes/Stoic");
        assert_eq!(tag_listing_path("New york"), "/quotes/New%20york");
    }
}
