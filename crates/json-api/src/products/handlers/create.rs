//! Create Product Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::models::{NewProduct, ProductId};

use crate::{
    extensions::*,
    products::{errors::ProductsApiError, models::ProductResponse},
    state::State,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateProductRequest {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub stock_quantity: f64,
    pub rating: f64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            product_id: ProductId::new(request.product_id),
            name: request.name,
            price: request.price,
            stock_quantity: request.stock_quantity,
            rating: request.rating,
        }
    }
}

/// Create Product Handler
///
/// Bodies that fail to parse are reported like any other creation failure.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    request_body = CreateProductRequest,
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Error creating product"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip_all,
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, ProductsApiError> {
    let state = depot.obtain_or::<Arc<State>, _>(ProductsApiError::Creating)?;
    let request = req
        .parse_json::<CreateProductRequest>()
        .await
        .or_respond("failed to parse product body", ProductsApiError::Creating)?;

    tracing::Span::current().record("product_id", request.product_id.as_str());

    let product = state
        .products
        .create_product(request.into())
        .await
        .or_respond("failed to create product", ProductsApiError::Creating)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}
