//! Application state for the maternity calculation API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::policy::PolicyRegistry;

/// Shared application state.
///
/// Holds the policy registry, which is immutable after construction and
/// therefore safe to share across request handlers without locking.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<PolicyRegistry>,
}

impl AppState {
    /// Creates a new application state with the given policy registry.
    pub fn new(registry: PolicyRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Returns a reference to the policy registry.
    pub fn registry(&self) -> &PolicyRegistry {
        &self.registry
    }
}
