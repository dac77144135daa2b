use crate::core::flash::FlashCodec;
use crate::domain::model::Notice;
use crate::utils::error::{Result, SiteError};
use axum::http::header::COOKIE;
use axum::http::{HeaderMap, HeaderValue};

pub const FLASH_COOKIE: &str = "aframe_flash";

/// Raw value of the flash cookie, if the request carries one.
pub fn read_flash_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == FLASH_COOKIE)
        .map(|(_, value)| value)
}

fn cookie_attributes(secure: bool) -> &'static str {
    if secure {
        "Path=/; HttpOnly; SameSite=Lax; Secure"
    } else {
        "Path=/; HttpOnly; SameSite=Lax"
    }
}

/// `secure` appends the `Secure` attribute (production).
pub fn set_flash_cookie(token: &str, secure: bool) -> Result<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{}={}; {}",
        FLASH_COOKIE,
        token,
        cookie_attributes(secure)
    ))
    .map_err(|e| SiteError::FlashError {
        message: e.to_string(),
    })
}

pub fn clear_flash_cookie(secure: bool) -> HeaderValue {
    if secure {
        HeaderValue::from_static("aframe_flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax; Secure")
    } else {
        HeaderValue::from_static("aframe_flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
    }
}

/// Pending notice for this request, and whether a cookie must be cleared.
/// Invalid tokens are dropped but still cleared.
pub fn take_notice(codec: &FlashCodec, headers: &HeaderMap) -> (Option<Notice>, bool) {
    let Some(token) = read_flash_cookie(headers) else {
        return (None, false);
    };

    match codec.decode(token) {
        Ok(notice) => (Some(notice), true),
        Err(e) => {
            tracing::debug!("Discarding flash cookie: {}", e);
            (None, true)
        }
    }
}
