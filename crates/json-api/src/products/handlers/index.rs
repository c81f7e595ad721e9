//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    products::{errors::ProductsApiError, models::ProductResponse},
    state::State,
};

/// Product Index Handler
///
/// Returns every product, or those whose name contains `search`.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Matching products"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Error retrieving products"),
    ),
)]
#[tracing::instrument(name = "products.index", skip_all, fields(search = tracing::field::Empty), err)]
pub(crate) async fn handler(
    search: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, ProductsApiError> {
    let state = depot.obtain_or::<Arc<State>, _>(ProductsApiError::Retrieving)?;
    let search = search.into_inner();

    if let Some(search) = &search {
        tracing::Span::current().record("search", search.as_str());
    }

    let products = state
        .products
        .list_products(search)
        .await
        .or_respond("failed to fetch products", ProductsApiError::Retrieving)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
