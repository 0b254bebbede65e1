//! meli-dataset - MercadoLibre search dataset builder CLI
//!
//! Queries the MercadoLibre search API page by page, keeps listings in
//! the target condition, and writes the projected fields to a CSV file.

pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod meli;

pub use config::Config;
pub use error::{MeliError, Result};
pub use meli::models::{Attribute, Item, Record, SearchPage};
pub use meli::sites::Site;
