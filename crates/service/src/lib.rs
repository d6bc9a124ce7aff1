//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access behind `ClienteRepository`.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod clientes;
#[cfg(test)]
pub mod test_support;

pub use clientes::ClienteService;
