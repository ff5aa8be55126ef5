//! The `Test` record: its declared shape, validation, display label, admin
//! display metadata, and the stores that persist it.

#[macro_use]
extern crate log;

pub mod admin;
pub mod error;
pub mod model;
pub mod settings;
pub mod store;

pub use crate::error::{Error, Result};
pub use crate::model::{Model, Test, ValidationError};
pub use crate::store::{MemoryStore, PgStore, Store};
