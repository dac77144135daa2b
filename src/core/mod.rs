pub mod catalog;
pub mod contact;
pub mod flash;
pub mod lookup;
pub mod pages;

pub use crate::domain::model::{Identified, Notice, Project, Service};
pub use crate::domain::ports::{ContactNotifier, Presenter};
pub use crate::utils::error::Result;
