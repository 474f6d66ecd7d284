//! # Showbill Common Library
//!
//! Shared code for the showbill booking directory:
//! - Error taxonomy and Result alias
//! - Configuration resolution (CLI > env > TOML > default)
//! - Genre text codec (delimited storage encoding)
//! - Timestamp utilities and past/upcoming partitioning

pub mod config;
pub mod error;
pub mod genres;
pub mod time;

pub use error::{Error, Result};
