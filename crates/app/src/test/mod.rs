//! Shared test infrastructure.

pub(crate) mod helpers;

pub(crate) use db::TestDb;
