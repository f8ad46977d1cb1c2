/**
 * Flash Messages
 *
 * One-shot notices that survive a redirect. They are kept in a signed cookie
 * as percent-encoded JSON, appended to by the handler that redirects and
 * drained by the next handler that renders a view. A cookie whose signature
 * does not verify reads as no messages.
 *
 * The cookie stays under browser size limits: each message is cut to
 * `MAX_MESSAGE_CHARS` and the oldest pending messages are dropped once the
 * encoded value would pass `MAX_COOKIE_VALUE_LEN`.
 */

use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use serde::{Deserialize, Serialize};

use crate::backend::db::DataResult;
use crate::shared::SharedError;

/// Name of the cookie carrying pending flash messages
pub const FLASH_COOKIE: &str = "quoteshufl_flash";

pub const SUCCESSFUL_INSERT: &str = "Successful INSERT";
pub const SUCCESSFUL_UPDATE: &str = "Successful UPDATE";
pub const SUCCESSFUL_DELETE: &str = "Successful DELETE";

pub const MAX_MESSAGE_CHARS: usize = 200;
pub const MAX_COOKIE_VALUE_LEN: usize = 3000;

/// Cookie jar that carries flash messages, signed with the application key
pub type FlashJar = SignedCookieJar<Key>;

/// Category of a flash message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashLevel {
    Message,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

impl FlashMessage {
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Message,
            message: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: text.into(),
        }
    }

    fn truncated(mut self) -> Self {
        if let Some((cut, _)) = self.message.char_indices().nth(MAX_MESSAGE_CHARS) {
            self.message.truncate(cut);
            self.message.push_str("...");
        }
        self
    }
}

/// Queue a message for the next rendered view
pub fn push(jar: FlashJar, flash: FlashMessage) -> FlashJar {
    let mut pending = jar
        .get(FLASH_COOKIE)
        .map(|cookie| decode(cookie.value()))
        .unwrap_or_default();
    pending.push(flash.truncated());

    match encode(&mut pending) {
        Ok(value) => {
            let cookie = Cookie::build((FLASH_COOKIE, value))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .build();
            jar.add(cookie)
        }
        Err(e) => {
            tracing::error!("Dropping flash messages: {}", e);
            jar
        }
    }
}

/// Drain pending messages, clearing the cookie if one was sent
pub fn take(jar: FlashJar) -> (FlashJar, Vec<FlashMessage>) {
    let pending = jar.get(FLASH_COOKIE).map(|cookie| decode(cookie.value()));
    match pending {
        Some(pending) => {
            let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
            (jar, pending)
        }
        None => (jar, Vec::new()),
    }
}

/// Flash the outcome of a data access call
///
/// Success queues `success` as a message; failure is logged and its text is
/// queued as an error.
pub fn outcome<T>(jar: FlashJar, operation: &str, result: &DataResult<T>, success: &str) -> FlashJar {
    match result {
        Ok(_) => push(jar, FlashMessage::message(success)),
        Err(e) => {
            tracing::warn!(kind = ?e.kind, error = %e, "{} failed", operation);
            push(jar, FlashMessage::error(e.to_string()))
        }
    }
}

/// Encode, dropping the oldest messages until the value fits
///
/// The newest message is always kept; truncation bounds its size.
fn encode(messages: &mut Vec<FlashMessage>) -> Result<String, SharedError> {
    loop {
        let json = serde_json::to_string(messages)?;
        let value = urlencoding::encode(&json).into_owned();
        if value.len() <= MAX_COOKIE_VALUE_LEN || messages.len() <= 1 {
            return Ok(value);
        }
        let dropped = messages.remove(0);
        tracing::debug!(message = %dropped.message, "Flash cookie full, dropping oldest message");
    }
}

/// Malformed values decode to no messages
fn decode(value: &str) -> Vec<FlashMessage> {
    urlencoding::decode(value)
        .ok()
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::db::{DataError, DataErrorKind};
    use axum::http::{header, HeaderMap, HeaderValue};
    use pretty_assertions::assert_eq;

    fn flash_jar() -> FlashJar {
        FlashJar::new(Key::generate())
    }

    #[test]
    fn test_push_then_take() {
        let jar = push(flash_jar(), FlashMessage::message("Successful INSERT"));
        let jar = push(jar, FlashMessage::error("duplicate key"));

        let (jar, messages) = take(jar);
        assert_eq!(
            messages,
            vec![
                FlashMessage::message("Successful INSERT"),
                FlashMessage::error("duplicate key"),
            ]
        );
        assert!(jar.get(FLASH_COOKIE).is_none());
    }

    #[test]
    fn test_take_without_cookie() {
        let (_, messages) = take(flash_jar());
        assert!(messages.is_empty());
    }

    #[test]
    fn test_cookie_value_is_cookie_safe() {
        let jar = push(flash_jar(), FlashMessage::error(r#"value "x"; y, z"#));
        let value = jar.get(FLASH_COOKIE).unwrap().value().to_string();
        assert!(!value.contains(';'));
        assert!(!value.contains('"'));
        assert!(!value.contains(' '));
        assert!(!value.contains(','));
    }

    #[test]
    fn test_tampered_cookie_decodes_to_nothing() {
        assert!(decode("not-json").is_empty());
        assert!(decode("%ZZ").is_empty());
    }

    #[test]
    fn test_outcome() {
        let ok: DataResult<()> = Ok(());
        let jar = outcome(flash_jar(), "insert tag", &ok, "Successful INSERT");
        let failed: DataResult<()> = Err(DataError::new(DataErrorKind::UniqueViolation, "already exists"));
        let jar = outcome(jar, "insert tag", &failed, "Successful INSERT");

        let (_, messages) = take(jar);
        assert_eq!(
            messages,
            vec![
                FlashMessage::message("Successful INSERT"),
                FlashMessage::error("already exists"),
            ]
        );
    }

    #[test]
    fn test_unsigned_cookie_is_ignored() {
        let forged = urlencoding::encode(r#"[{"level":"message","message":"forged"}]"#).into_owned();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("{}={}", FLASH_COOKIE, forged)).unwrap(),
        );

        let (_, messages) = take(FlashJar::from_headers(&headers, Key::generate()));
        assert!(messages.is_empty());
    }

    #[test]
    fn test_long_message_is_truncated() {
        let long = "x".repeat(MAX_MESSAGE_CHARS + 50);
        let (_, messages) = take(push(flash_jar(), FlashMessage::error(long)));

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message, format!("{}...", "x".repeat(MAX_MESSAGE_CHARS)));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let long = "é".repeat(MAX_MESSAGE_CHARS + 1);
        let flash = FlashMessage::error(long).truncated();
        assert_eq!(flash.message.chars().count(), MAX_MESSAGE_CHARS + 3);
    }

    #[test]
    fn test_oldest_messages_dropped_when_full() {
        let mut jar = flash_jar();
        for n in 0..40 {
            jar = push(jar, FlashMessage::error(format!("{:03} {}", n, "y".repeat(MAX_MESSAGE_CHARS))));
        }

        let value_len = jar.get(FLASH_COOKIE).unwrap().value().len();
        assert!(value_len <= MAX_COOKIE_VALUE_LEN);

        let (_, messages) = take(jar);
        assert!(messages.len() < 40);
        assert!(messages.last().unwrap().message.starts_with("039 "));
    }
}
