//! # holonet-data
//!
//! Record store for the Holonet service, built on SQLx over SQLite.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Entity`] / [`Insertable`] | Table mapping for stored and not-yet-stored records |
//! | [`Filter`] | Column equality predicates |
//! | [`Repository`] / [`SqlxRepository`] | Get-by-id, list, filter, insert, delete on a pool |
//! | [`Tx`] | The same operations inside one transaction, committed explicitly |
//! | [`DatabaseConfig`] / [`connect`] | Pool settings and construction |
//! | [`DataError`] | Store errors, with unique violations surfaced as [`DataError::Conflict`] |

pub mod entity;
pub mod error;
pub mod filter;
mod ops;
pub mod pool;
pub mod repository;
pub mod tx;

pub use entity::{Entity, Insertable, SqlValue};
pub use error::DataError;
pub use filter::Filter;
pub use pool::{connect, DatabaseConfig};
pub use repository::{Repository, SqlxRepository};
pub use tx::{HasPool, Tx};

pub mod prelude {
    pub use crate::{
        DataError, Entity, Filter, HasPool, Insertable, Repository, SqlValue, SqlxRepository, Tx,
    };
}
