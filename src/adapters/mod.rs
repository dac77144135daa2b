// Adapters layer: concrete implementations of the domain ports.

pub mod notifier;
pub mod presenter;

pub use notifier::LogNotifier;
pub use presenter::JsonPresenter;
