//! Audit metadata for to-one relations.
//!
//! Given the live mapping of a many-to-one or one-to-one property, this crate
//! produces the historical schema fragment that stores the referenced
//! entity's identifier and the value mapper that reads and writes it when
//! audit snapshots are built or restored.

mod config;
pub use config::Config;

mod error;
pub use error::Error;

pub mod entity;
pub mod fragment;
pub mod generator;
pub mod id;
pub mod mapper;
pub mod mapping;
pub mod reader;

pub mod value;
pub use value::{Record, Value};

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
