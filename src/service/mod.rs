//! Business logic services

pub mod redirect;
pub mod settings;

pub use redirect::{resolve, RedirectService};
pub use settings::RedirectSettingsService;
