//! Shared catalog domain, persistence and form modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod forms;

#[cfg(test)]
mod test;
