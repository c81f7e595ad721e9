//! Product Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use uuid::Uuid;

/// Product identifier.
///
/// Identifiers are minted by the client (see [`ProductId::generate`]) and
/// trusted by the service, so any non-empty text is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(String);

impl ProductId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Mint a fresh random (v4) identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<ProductId> for String {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock_quantity: f64,
    pub rating: f64,
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock_quantity: f64,
    pub rating: f64,
}

impl NewProduct {
    /// Whether every numeric field holds a finite value.
    #[must_use]
    pub fn has_finite_values(&self) -> bool {
        [self.price, self.stock_quantity, self.rating]
            .iter()
            .all(|value| value.is_finite())
    }
}
