use aframe_site::utils::error::ErrorSeverity;
use aframe_site::utils::{logger, validation::Validate};
use aframe_site::config::secret::SiteEnvironment;
use aframe_site::{serve, AppState, ContentConfig, ContentStore, SecretConfig, ServeArgs, SiteError};
use anyhow::Context;
use clap::Parser;

fn exit_with(e: &SiteError) -> ! {
    tracing::error!(
        "❌ Startup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn load_content(args: &ServeArgs) -> aframe_site::Result<ContentStore> {
    let config = match &args.content {
        Some(path) => {
            tracing::info!("📁 Loading content from: {}", path);
            ContentConfig::from_file(path)?
        }
        None => ContentConfig::builtin()?,
    };
    ContentStore::from_config(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServeArgs::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting aframe-site");
    if args.verbose {
        tracing::debug!("Serve args: {:?}", args);
    }

    if let Err(e) = args.validate() {
        exit_with(&e);
    }

    let secrets = SecretConfig::from_env();
    let signing_key = match secrets.signing_key() {
        Ok(key) => key,
        Err(e) => exit_with(&e),
    };

    let content = match load_content(&args) {
        Ok(content) => content,
        Err(e) => exit_with(&e),
    };

    let addr = match args.socket_addr() {
        Ok(addr) => addr,
        Err(e) => exit_with(&e),
    };
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    // 正式環境的 flash cookie 只走 HTTPS
    let state = AppState::new(content, signing_key)
        .with_secure_cookies(secrets.environment == SiteEnvironment::Production);

    if let Err(e) = serve(listener, state).await {
        exit_with(&e);
    }

    Ok(())
}
