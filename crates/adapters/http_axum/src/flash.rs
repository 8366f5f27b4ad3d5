//! One-shot flash messages carried across a redirect in a cookie.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, IntoResponseParts, Redirect, Response, ResponseParts};
use serde::{Deserialize, Serialize};

/// Name of the cookie holding the pending flash message.
pub const COOKIE_NAME: &str = "flash";

const EXPIRED_COOKIE: &str = "flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax";

/// Upper bound for the encoded cookie value, well below the 4096 bytes
/// browsers accept for a whole cookie.
const MAX_ENCODED_LEN: usize = 3500;

const ELLIPSIS: char = '\u{2026}';

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Error,
}

/// Message shown once on the page following a redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: Level,
    pub message: String,
}

impl Flash {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    /// CSS class used by the templates.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self.level {
            Level::Success => "flash flash-success",
            Level::Error => "flash flash-error",
        }
    }

    /// Cookie-safe encoding (`application/x-www-form-urlencoded`).
    ///
    /// Messages whose encoding exceeds [`MAX_ENCODED_LEN`] are cut at the
    /// longest prefix that fits and end with an ellipsis.
    fn encode(&self) -> Option<String> {
        let encoded = serde_urlencoded::to_string(self).ok()?;
        if encoded.len() <= MAX_ENCODED_LEN {
            return Some(encoded);
        }
        tracing::warn!(
            message = %self.message,
            encoded_len = encoded.len(),
            "flash message too long for a cookie, truncating"
        );

        let chars: Vec<char> = self.message.chars().collect();
        let (mut lo, mut hi) = (0, chars.len());
        while lo < hi {
            let mid = (lo + hi).div_ceil(2);
            if self.encode_prefix(&chars[..mid]).is_some() {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }
        self.encode_prefix(&chars[..lo])
    }

    fn encode_prefix(&self, prefix: &[char]) -> Option<String> {
        let mut message: String = prefix.iter().collect();
        message.push(ELLIPSIS);
        let truncated = Self {
            level: self.level,
            message,
        };
        serde_urlencoded::to_string(&truncated)
            .ok()
            .filter(|encoded| encoded.len() <= MAX_ENCODED_LEN)
    }

    fn decode(raw: &str) -> Option<Self> {
        serde_urlencoded::from_str(raw).ok()
    }
}

/// Redirect that leaves a flash message for the target page.
pub struct FlashRedirect {
    to: String,
    flash: Flash,
}

impl FlashRedirect {
    pub fn new(to: impl Into<String>, flash: Flash) -> Self {
        Self {
            to: to.into(),
            flash,
        }
    }
}

impl IntoResponse for FlashRedirect {
    fn into_response(self) -> Response {
        let mut response = Redirect::to(&self.to).into_response();
        let cookie = self
            .flash
            .encode()
            .map(|value| format!("{COOKIE_NAME}={value}; Path=/; HttpOnly; SameSite=Lax"))
            .and_then(|cookie| HeaderValue::from_str(&cookie).ok());
        match cookie {
            Some(cookie) => {
                response.headers_mut().append(SET_COOKIE, cookie);
            }
            None => tracing::warn!("dropping flash message that cannot be encoded"),
        }
        response
    }
}

/// Flash message found on the incoming request, if any.
#[derive(Debug, Default)]
pub struct IncomingFlash(Option<Flash>);

impl IncomingFlash {
    /// Consume the message, returning it together with the response part
    /// that clears the cookie.
    #[must_use]
    pub fn take(self) -> (ClearFlash, Option<Flash>) {
        (ClearFlash(self.0.is_some()), self.0)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for IncomingFlash {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let flash = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|header| header.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == COOKIE_NAME)
            .and_then(|(_, value)| Flash::decode(value));
        Ok(Self(flash))
    }
}

/// Response part expiring the flash cookie once its message was shown.
#[derive(Debug, Clone, Copy)]
pub struct ClearFlash(bool);

impl IntoResponseParts for ClearFlash {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if self.0 {
            res.headers_mut()
                .append(SET_COOKIE, HeaderValue::from_static(EXPIRED_COOKIE));
        }
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};

    #[test]
    fn should_encode_message_as_cookie_safe_text() {
        let encoded = Flash::error("Error: {\"name\": [\"bad; value\"]}")
            .encode()
            .unwrap();
        assert!(!encoded.contains(';'));
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('"'));
        assert_eq!(
            Flash::decode(&encoded),
            Some(Flash::error("Error: {\"name\": [\"bad; value\"]}"))
        );
    }

    #[test]
    fn should_truncate_oversized_message_to_fit_cookie() {
        let body = format!("Error: <html>{}</html>", "é<p>x</p>".repeat(700));
        let response =
            FlashRedirect::new("/places/new/", Flash::error(body.clone())).into_response();

        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.len() < 4096, "cookie is {} bytes", cookie.len());

        let value = cookie
            .strip_prefix("flash=")
            .and_then(|rest| rest.split(';').next())
            .unwrap();
        let flash = Flash::decode(value).unwrap();
        assert_eq!(flash.level, Level::Error);
        assert!(flash.message.ends_with(ELLIPSIS));
        let kept = flash.message.trim_end_matches(ELLIPSIS);
        assert!(kept.len() > 100);
        assert!(body.starts_with(kept));
    }

    #[test]
    fn should_keep_short_message_intact() {
        let flash = Flash::error("Error: {\"name\": [\"required\"]}");
        assert_eq!(Flash::decode(&flash.encode().unwrap()), Some(flash));
    }

    #[test]
    fn should_set_cookie_on_redirect() {
        let response =
            FlashRedirect::new("/places/", Flash::success("Successfully deleted!")).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/places/");
        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("flash=level=success&message=Successfully+deleted%21;"));
    }

    #[tokio::test]
    async fn should_read_flash_among_other_cookies() {
        let (mut parts, ()) = Request::builder()
            .header(COOKIE, "theme=dark; flash=level=error&message=Error%3A+nope")
            .body(())
            .unwrap()
            .into_parts();

        let IncomingFlash(flash) = IncomingFlash::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(flash, Some(Flash::error("Error: nope")));
    }

    #[tokio::test]
    async fn should_ignore_undecodable_flash_cookie() {
        let (mut parts, ()) = Request::builder()
            .header(COOKIE, "flash=level=shouting&message=x")
            .body(())
            .unwrap()
            .into_parts();

        let IncomingFlash(flash) = IncomingFlash::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert!(flash.is_none());
    }

    #[test]
    fn should_only_clear_cookie_when_flash_was_present() {
        let (clear, _) = IncomingFlash::default().take();
        let response = (clear, "page").into_response();
        assert!(response.headers().get(SET_COOKIE).is_none());

        let (clear, _) = IncomingFlash(Some(Flash::success("ok"))).take();
        let response = (clear, "page").into_response();
        assert_eq!(response.headers()[SET_COOKIE], EXPIRED_COOKIE);
    }
}
