/**
 * Login Handler
 *
 * `GET /login` shows the form, `POST /login` checks the credentials.
 *
 * # Authentication Process
 *
 * 1. Validate the form (both fields required)
 * 2. Ask the database whether the username/password pair matches
 * 3. Issue a session token valid for the configured lifetime
 * 4. Set the session cookie and redirect to `/admin`
 *
 * # Security
 *
 * - The password comparison happens inside Postgres
 * - Unknown users, wrong passwords and failed lookups get the same
 *   `invalid login` flash
 * - Passwords are never logged or echoed back in a view
 */

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;

use crate::backend::auth::sessions::session_cookie;
use crate::backend::auth::users::verify_password;
use crate::backend::error::BackendError;
use crate::backend::flash::{self, FlashJar, FlashMessage};
use crate::backend::middleware::LOGIN_PATH;
use crate::backend::server::state::AppState;
use crate::backend::views::FormView;
use crate::shared::forms::LoginForm;

/// Where a successful login lands
pub const ADMIN_PATH: &str = "/admin";

pub const INVALID_LOGIN_MESSAGE: &str = "invalid login";

fn login_view(form: LoginForm, flashes: Vec<FlashMessage>) -> FormView<LoginForm> {
    FormView::new("[login]", LOGIN_PATH, form, flashes)
}

/// `GET /login`
pub async fn login_page(flash_jar: FlashJar) -> (FlashJar, Json<FormView<LoginForm>>) {
    let (flash_jar, flashes) = flash::take(flash_jar);
    (flash_jar, Json(login_view(LoginForm::default(), flashes)))
}

/// `POST /login`
///
/// # Responses
///
/// * form view with field errors - a field was empty
/// * 303 to `/admin` with the session cookie set - credentials matched
/// * 303 to `/login` with the `invalid login` flash - credentials did not
///   match, or the lookup itself failed (the cause is only logged)
pub async fn login(
    State(app_state): State<AppState>,
    jar: CookieJar,
    flash_jar: FlashJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let credentials = match form.validate() {
        Ok(credentials) => credentials,
        Err(errors) => {
            let (flash_jar, flashes) = flash::take(flash_jar);
            return (flash_jar, Json(login_view(form, flashes).with_errors(errors))).into_response();
        }
    };

    tracing::info!("Login request for: {}", credentials.username);

    match verify_password(&app_state.pool, &credentials.username, &credentials.password).await {
        Ok(Some(user_id)) => match app_state.sessions.issue(&credentials.username, Utc::now()) {
            Ok((token, principal)) => {
                tracing::info!(
                    user_id,
                    session_id = %principal.session_id,
                    expires_at = %principal.expires_at,
                    "User logged in successfully: {}",
                    principal.username
                );
                let jar = jar.add(session_cookie(token));
                (jar, Redirect::to(ADMIN_PATH)).into_response()
            }
            Err(e) => BackendError::from(e).into_response(),
        },
        Ok(None) => {
            tracing::warn!("Invalid credentials for user: {}", credentials.username);
            let flash_jar = flash::push(flash_jar, FlashMessage::error(INVALID_LOGIN_MESSAGE));
            (flash_jar, Redirect::to(LOGIN_PATH)).into_response()
        }
        Err(e) => {
            tracing::error!(kind = ?e.kind, "Credential check failed: {}", e);
            let flash_jar = flash::push(flash_jar, FlashMessage::error(INVALID_LOGIN_MESSAGE));
            (flash_jar, Redirect::to(LOGIN_PATH)).into_response()
        }
    }
}
