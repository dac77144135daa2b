use crate::domain::model::Notice;
use crate::utils::error::{Result, SiteError};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const FLASH_VERSION_V1: &str = "v1";
const MAX_FLASH_TOKEN_LEN: usize = 1024;

fn flash_error(message: impl Into<String>) -> SiteError {
    SiteError::FlashError {
        message: message.into(),
    }
}

/// Signs one-shot notices so they can travel in a client cookie.
///
/// Token layout: `v1.<base64url(json notice)>.<base64url(hmac-sha256)>`.
#[derive(Clone)]
pub struct FlashCodec {
    key: Vec<u8>,
}

impl std::fmt::Debug for FlashCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlashCodec").finish_non_exhaustive()
    }
}

impl FlashCodec {
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self { key: key.into() }
    }

    fn mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(&self.key).map_err(|e| flash_error(e.to_string()))
    }

    pub fn encode(&self, notice: &Notice) -> Result<String> {
        let payload_part = URL_SAFE_NO_PAD.encode(serde_json::to_vec(notice)?);
        let mut mac = self.mac()?;
        mac.update(payload_part.as_bytes());
        let sig_part = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
        Ok(format!("{}.{}.{}", FLASH_VERSION_V1, payload_part, sig_part))
    }

    pub fn decode(&self, token: &str) -> Result<Notice> {
        if token.len() > MAX_FLASH_TOKEN_LEN {
            return Err(flash_error("token exceeds max length"));
        }

        let mut parts = token.split('.');
        let (Some(version), Some(payload_part), Some(sig_part), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(flash_error("token must have three parts"));
        };
        if version != FLASH_VERSION_V1 {
            return Err(flash_error("unsupported token version"));
        }

        let signature = URL_SAFE_NO_PAD
            .decode(sig_part)
            .map_err(|e| flash_error(e.to_string()))?;
        let mut mac = self.mac()?;
        mac.update(payload_part.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| flash_error("signature mismatch"))?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_part)
            .map_err(|e| flash_error(e.to_string()))?;
        Ok(serde_json::from_slice(&payload)?)
    }
}
