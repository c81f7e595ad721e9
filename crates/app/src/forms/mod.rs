//! Forms

pub mod product;

pub use product::{ProductDraft, ProductField, ProductForm, ProductFormError};
