//! Product creation form.

use std::{num::ParseFloatError, str::FromStr};

use thiserror::Error;
use tracing::trace;

use crate::domain::products::models::{NewProduct, ProductId};

/// Editable field of a [`ProductDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Price,
    StockQuantity,
    Rating,
}

impl ProductField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::StockQuantity => "stockQuantity",
            Self::Rating => "rating",
        }
    }
}

impl FromStr for ProductField {
    type Err = ProductFormError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            "stockQuantity" | "stock_quantity" => Ok(Self::StockQuantity),
            "rating" => Ok(Self::Rating),
            other => Err(ProductFormError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProductFormError {
    #[error("unknown product field \"{0}\"")]
    UnknownField(String),

    #[error("{} must be a number, got \"{value}\"", .field.as_str())]
    NotANumber {
        field: ProductField,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("{} must be a finite number, got \"{value}\"", .field.as_str())]
    NotFinite { field: ProductField, value: String },
}

/// In-progress product payload held by an open [`ProductForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock_quantity: f64,
    pub rating: f64,
}

impl ProductDraft {
    /// Blank draft under a freshly minted identifier.
    #[must_use]
    pub fn fresh() -> Self {
        Self {
            product_id: ProductId::generate(),
            name: String::new(),
            price: 0.0,
            stock_quantity: 0.0,
            rating: 0.0,
        }
    }
}

impl From<ProductDraft> for NewProduct {
    fn from(draft: ProductDraft) -> Self {
        Self {
            product_id: draft.product_id,
            name: draft.name,
            price: draft.price,
            stock_quantity: draft.stock_quantity,
            rating: draft.rating,
        }
    }
}

/// Form controller collecting a [`ProductDraft`] and handing it to a creation callback.
///
/// While closed the form holds no draft: it renders nothing, edits are ignored and
/// submitting does nothing.
#[derive(Debug, Default)]
pub struct ProductForm {
    draft: Option<ProductDraft>,
}

impl ProductForm {
    /// A closed form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the form on a fresh draft, discarding any previous one.
    pub fn open(&mut self) -> &ProductDraft {
        self.draft.insert(ProductDraft::fresh())
    }

    pub fn close(&mut self) {
        self.draft = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// The draft to render, or `None` while closed.
    #[must_use]
    pub fn view(&self) -> Option<&ProductDraft> {
        self.draft.as_ref()
    }

    /// Replace one field of the draft from user-entered text.
    ///
    /// Numeric fields must parse to a finite number; on error the draft is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error when a numeric field is given non-numeric or non-finite text.
    pub fn set_field(&mut self, field: ProductField, value: &str) -> Result<(), ProductFormError> {
        let Some(draft) = self.draft.as_mut() else {
            trace!(field = field.as_str(), "ignoring edit on closed product form");

            return Ok(());
        };

        match field {
            ProductField::Name => draft.name = value.to_string(),
            ProductField::Price => draft.price = parse_number(field, value)?,
            ProductField::StockQuantity => draft.stock_quantity = parse_number(field, value)?,
            ProductField::Rating => draft.rating = parse_number(field, value)?,
        }

        Ok(())
    }

    /// Hand the whole draft to `on_create`, then dismiss the form.
    ///
    /// Returns `None` without calling `on_create` when the form is closed.
    pub fn submit<T, F>(&mut self, on_create: F) -> Option<T>
    where
        F: FnOnce(ProductDraft) -> T,
    {
        let draft = self.draft.take()?;

        Some(on_create(draft))
    }
}

fn parse_number(field: ProductField, value: &str) -> Result<f64, ProductFormError> {
    let number = value
        .trim()
        .parse::<f64>()
        .map_err(|source| ProductFormError::NotANumber {
            field,
            value: value.to_string(),
            source,
        })?;

    if !number.is_finite() {
        return Err(ProductFormError::NotFinite {
            field,
            value: value.to_string(),
        });
    }

    Ok(number)
}
