//! Product Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::models::Product;

/// Product representation on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// Client-generated product identifier
    pub product_id: String,

    /// Product name
    pub name: String,

    /// Unit price
    pub price: f64,

    /// Units in stock
    pub stock_quantity: f64,

    /// Rating
    pub rating: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.product_id.into_string(),
            name: product.name,
            price: product.price,
            stock_quantity: product.stock_quantity,
            rating: product.rating,
        }
    }
}
