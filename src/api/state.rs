//! Application state for the Leave Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::ConfigLoader;
use crate::notifications::NotificationStore;

/// Shared application state.
///
/// Holds the loaded leave configuration and the notification store owned
/// by this application instance.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    notifications: Arc<Mutex<NotificationStore>>,
}

impl AppState {
    /// Creates a new application state with an empty notification store.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_notifications(config, NotificationStore::new())
    }

    /// Creates a new application state around an existing notification store.
    pub fn with_notifications(config: ConfigLoader, notifications: NotificationStore) -> Self {
        Self {
            config: Arc::new(config),
            notifications: Arc::new(Mutex::new(notifications)),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the notification store.
    pub fn notifications(&self) -> &Mutex<NotificationStore> {
        &self.notifications
    }
}
