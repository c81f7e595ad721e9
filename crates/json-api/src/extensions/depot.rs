//! Depot helper extensions.

use std::any::{Any, type_name};

use salvo::prelude::Depot;
use tracing::error;

/// Helpers for mapping depot extraction failures to handler errors.
pub(crate) trait DepotExt {
    fn obtain_or<T: Any + Send + Sync, E>(&self, error: E) -> Result<&T, E>;
}

impl DepotExt for Depot {
    fn obtain_or<T: Any + Send + Sync, E>(&self, error: E) -> Result<&T, E> {
        self.obtain::<T>().map_err(|_ignored| {
            error!("depot is missing {}", type_name::<T>());

            error
        })
    }
}
