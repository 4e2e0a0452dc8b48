//! Account storage
//!
//! Handlers and services depend on the [`AccountRepository`] trait; the
//! concrete store is picked from configuration at startup.

pub mod account;
pub mod memory;
pub mod postgres;

pub use account::{AccountRepository, NewAccount, RepositoryError};
pub use memory::InMemoryAccountRepository;
pub use postgres::PgAccountRepository;
