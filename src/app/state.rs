use crate::adapters::{JsonPresenter, LogNotifier};
use crate::core::catalog::ContentStore;
use crate::core::flash::FlashCodec;
use crate::domain::ports::{ContactNotifier, Presenter};
use std::sync::Arc;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentStore>,
    pub flash: Arc<FlashCodec>,
    pub presenter: Arc<dyn Presenter>,
    pub notifier: Arc<dyn ContactNotifier>,
    /// Adds `Secure` to flash cookies.
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(content: ContentStore, signing_key: Vec<u8>) -> Self {
        Self {
            content: Arc::new(content),
            flash: Arc::new(FlashCodec::new(signing_key)),
            presenter: Arc::new(JsonPresenter),
            notifier: Arc::new(LogNotifier),
            secure_cookies: false,
        }
    }

    pub fn with_presenter(mut self, presenter: Arc<dyn Presenter>) -> Self {
        self.presenter = presenter;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn ContactNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }
}
