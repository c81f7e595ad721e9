//! Product Errors

use salvo::{
    oapi::{self, Components, Content, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
    writing::Scribe,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use catalog_app::domain::products::ProductsServiceError;

/// Error body returned by the product endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
}

/// Caller-facing product failures.
///
/// Each variant renders as a fixed `{"message": ...}` body; the underlying cause is only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum ProductsApiError {
    #[error("Error retrieving products")]
    Retrieving,

    #[error("Error creating product")]
    Creating,

    #[error("Error deleting product")]
    Deleting,

    #[error("Product not found")]
    NotFound,
}

impl ProductsApiError {
    pub(crate) fn status_code(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Retrieving | Self::Creating | Self::Deleting => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Scribe for ProductsApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status_code());
        res.render(Json(ErrorResponse {
            message: self.to_string(),
        }));
    }
}

impl EndpointOutRegister for ProductsApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        operation.responses.insert(
            StatusCode::INTERNAL_SERVER_ERROR.as_str(),
            oapi::Response::new("Internal Server Error").add_content(
                "application/json",
                Content::new(ErrorResponse::to_schema(components)),
            ),
        );
    }
}

pub(crate) fn into_delete_error(error: ProductsServiceError) -> ProductsApiError {
    match error {
        ProductsServiceError::NotFound => ProductsApiError::NotFound,
        other => {
            error!("failed to delete product: {other}");

            ProductsApiError::Deleting
        }
    }
}
