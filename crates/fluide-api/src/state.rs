//! Application state.

use std::sync::Arc;

use fluide_storage::{Log, StorageContext};

use crate::config::ApiConfig;
use crate::dispatcher::Dispatcher;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub dispatcher: Dispatcher,
}

impl AppState {
    /// Create new application state over an explicit storage context.
    pub fn new(config: ApiConfig, ctx: StorageContext, dispatcher_log: Arc<dyn Log>) -> Self {
        Self {
            config,
            dispatcher: Dispatcher::new(ctx, dispatcher_log),
        }
    }
}
