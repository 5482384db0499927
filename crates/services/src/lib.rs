#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod navigation;
pub mod preferences_service;
pub mod progress_store;

pub use dsa_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, PersistError, PreferencesError, ProgressStoreError};
pub use navigation::{Action, Effect, Persistence, SolveLinkMode, ViewController};
pub use preferences_service::PreferencesService;
pub use progress_store::ProgressStore;
