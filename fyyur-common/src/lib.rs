//! # Fyyur Common Library
//!
//! Shared code for the Fyyur booking directory:
//! - Error type and result alias
//! - Configuration resolution (CLI → ENV → TOML → compiled defaults)
//! - Show time parsing and display formatting
//! - Form input validation
//! - SQLite schema and venue/artist/show queries

pub mod config;
pub mod db;
pub mod error;
pub mod time;
pub mod validation;

pub use error::{Error, Result};
pub use validation::ValidationErrors;
