pub mod content;
pub mod secret;

#[cfg(feature = "cli")]
use crate::utils::error::{Result, SiteError};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::net::SocketAddr;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "aframe-site")]
#[command(about = "Brochure website and contact intake for a consulting firm")]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:5000")]
    pub bind: String,

    /// Alternative content TOML file (defaults to the built-in content)
    #[arg(long)]
    pub content: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ServeArgs {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .map_err(|e| SiteError::InvalidConfigValueError {
                field: "bind".to_string(),
                value: self.bind.clone(),
                reason: format!("Invalid socket address: {}", e),
            })
    }
}

#[cfg(feature = "cli")]
impl Validate for ServeArgs {
    fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        if let Some(path) = &self.content {
            crate::utils::validation::validate_non_empty_string("content", path)?;
        }
        Ok(())
    }
}
