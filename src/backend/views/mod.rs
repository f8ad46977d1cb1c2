//! View Models
//!
//! What each page hands to the rendering layer. Handlers return these as
//! JSON; a template engine (or any client) turns them into markup. Every view
//! carries the flash messages drained for that response.

use serde::Serialize;

use crate::backend::flash::FlashMessage;
use crate::shared::forms::FormErrors;
use crate::shared::{CombinedRow, Quote};

/// `GET /`
#[derive(Debug, Serialize)]
pub struct IndexView {
    /// `None` when there are no quotes yet
    pub quote: Option<Quote>,
    pub flashes: Vec<FlashMessage>,
}

/// Public and admin joined listings
#[derive(Debug, Serialize)]
pub struct ListingView {
    /// Page label, e.g. `[quotes]` or `.[stoic]`
    pub page: String,
    pub rows: Vec<CombinedRow>,
    pub flashes: Vec<FlashMessage>,
}

/// `GET /admin`
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub username: String,
    pub rows: Vec<CombinedRow>,
    pub flashes: Vec<FlashMessage>,
}

/// Admin table listing with links to the create and edit forms
#[derive(Debug, Serialize)]
pub struct TableView<T: Serialize> {
    /// Heading, e.g. `[quote]`
    pub heading: String,
    pub columns: Vec<String>,
    pub rows: Vec<TableRow<T>>,
    pub new_path: String,
    pub flashes: Vec<FlashMessage>,
}

#[derive(Debug, Serialize)]
pub struct TableRow<T: Serialize> {
    #[serde(flatten)]
    pub record: T,
    pub edit_path: String,
}

/// Any form page, empty, populated, or redisplayed with errors
#[derive(Debug, Serialize)]
pub struct FormView<F: Serialize> {
    pub heading: String,
    /// Path the form posts to
    pub action: String,
    pub form: F,
    pub errors: FormErrors,
    pub flashes: Vec<FlashMessage>,
}

impl<F: Serialize> FormView<F> {
    pub fn new(heading: impl Into<String>, action: impl Into<String>, form: F, flashes: Vec<FlashMessage>) -> Self {
        Self {
            heading: heading.into(),
            action: action.into(),
            form,
            errors: FormErrors::new(),
            flashes,
        }
    }

    /// Attach validation errors, also surfacing them as error flashes
    pub fn with_errors(mut self, errors: FormErrors) -> Self {
        tracing::debug!(form = %self.action, ?errors, "Form validation failed");
        self.flashes
            .extend(errors.flash_lines().into_iter().map(FlashMessage::error));
        self.errors = errors;
        self
    }
}

/// `GET/POST /tags`
#[derive(Debug, Serialize)]
pub struct TagPickerView {
    pub choices: Vec<String>,
    #[serde(flatten)]
    pub form: FormView<crate::shared::forms::TagSelectForm>,
}
