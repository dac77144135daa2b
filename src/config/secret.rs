use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_required_field, Validate};
use std::env;

/// Only for local development; production refuses to start without SECRET_KEY.
pub const DEV_SECRET_KEY: &str = "dev-secret-key-change-in-production";
pub const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteEnvironment {
    Development,
    Production,
}

impl SiteEnvironment {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => SiteEnvironment::Production,
            _ => SiteEnvironment::Development,
        }
    }
}

#[derive(Clone)]
pub struct SecretConfig {
    pub environment: SiteEnvironment,
    secret_key: Option<String>,
}

// 不把金鑰印進日誌
impl std::fmt::Debug for SecretConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretConfig")
            .field("environment", &self.environment)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl SecretConfig {
    pub fn new(environment: SiteEnvironment, secret_key: Option<String>) -> Self {
        Self {
            environment,
            secret_key: secret_key.filter(|k| !k.is_empty()),
        }
    }

    /// 從環境變數 SITE_ENV 與 SECRET_KEY 讀取
    pub fn from_env() -> Self {
        let environment = env::var("SITE_ENV")
            .map(|v| SiteEnvironment::parse(&v))
            .unwrap_or(SiteEnvironment::Development);
        Self::new(environment, env::var("SECRET_KEY").ok())
    }

    /// Key used to sign flash cookies.
    pub fn signing_key(&self) -> Result<Vec<u8>> {
        self.validate()?;
        match &self.secret_key {
            Some(key) => Ok(key.as_bytes().to_vec()),
            None => {
                tracing::warn!("⚠️ SECRET_KEY not set, using the insecure development key");
                Ok(DEV_SECRET_KEY.as_bytes().to_vec())
            }
        }
    }
}

impl Validate for SecretConfig {
    fn validate(&self) -> Result<()> {
        if self.environment != SiteEnvironment::Production {
            return Ok(());
        }

        let key = validate_required_field("SECRET_KEY", &self.secret_key)?;
        if key.len() < MIN_SECRET_LEN {
            return Err(SiteError::InvalidConfigValueError {
                field: "SECRET_KEY".to_string(),
                value: "<redacted>".to_string(),
                reason: format!("Secret must be at least {} bytes in production", MIN_SECRET_LEN),
            });
        }
        if key == DEV_SECRET_KEY {
            return Err(SiteError::InvalidConfigValueError {
                field: "SECRET_KEY".to_string(),
                value: "<redacted>".to_string(),
                reason: "The development key cannot be used in production".to_string(),
            });
        }
        Ok(())
    }
}
