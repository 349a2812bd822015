//! Latest-request Tracking
//!
//! Views that refetch whenever a filter changes can have several requests in
//! flight; only the most recent one may write its result.

use leptos::prelude::*;

/// Monotonic request counter owned by a view
#[derive(Clone, Copy)]
pub struct Latest(StoredValue<u64>);

impl Latest {
    pub fn new() -> Self {
        Self(StoredValue::new(0))
    }

    /// Start a request and get its ticket
    pub fn begin(&self) -> u64 {
        self.0.update_value(|n| *n += 1);
        self.0.get_value()
    }

    /// False once a newer request started or the view was disposed
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.try_get_value() == Some(ticket)
    }
}

impl Default for Latest {
    fn default() -> Self {
        Self::new()
    }
}
