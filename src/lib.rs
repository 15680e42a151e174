//! Pagination for raw SQL queries.
//!
//! A raw query is opaque text plus bind parameters. [`RawQueryPaginator`] wraps
//! it in a dialect-specific `COUNT(*)` query (run once, lazily) and in a
//! dialect-specific limit/offset query for each requested page, so callers
//! never materialize the full result set or write pagination syntax by hand.
//!
//! [`Paginator`] is the shared interface; [`DefaultPaginator`] pages an
//! in-memory list and [`AnyPaginator`] picks the right implementation for an
//! [`ObjectList`].

#[macro_use]
extern crate cfg_if;
#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate serde;

mod default;
mod dialect;
mod env;
mod error;
mod executor;
mod factory;
mod options;
mod page;
mod paginator;
mod raw;
mod raw_paginator;

pub use crate::default::*;
pub use crate::dialect::*;
pub use crate::env::*;
pub use crate::error::*;
pub use crate::executor::*;
pub use crate::factory::*;
pub use crate::options::*;
pub use crate::page::*;
pub use crate::paginator::*;
pub use crate::raw::*;
pub use crate::raw_paginator::*;

cfg_if! { if #[cfg(feature = "diesel")] {
    mod diesel;
    pub use crate::diesel::*;
} }
