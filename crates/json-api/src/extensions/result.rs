//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use tracing::error;

/// Replace any error with a caller-facing one, logging the original.
pub(crate) trait ResultExt<T> {
    fn or_respond<R>(self, context: &str, response: R) -> Result<T, R>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_respond<R>(self, context: &str, response: R) -> Result<T, R> {
        self.map_err(|error| {
            error!("{context}: {error}");

            response
        })
    }
}
