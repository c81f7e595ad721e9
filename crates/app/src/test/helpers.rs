//! Test Helpers

use crate::domain::products::models::{NewProduct, ProductId};

pub(crate) fn new_product(product_id: &str, name: &str) -> NewProduct {
    NewProduct {
        product_id: ProductId::from(product_id),
        name: name.to_string(),
        price: 9.99,
        stock_quantity: 5.0,
        rating: 4.5,
    }
}
