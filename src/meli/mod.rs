//! MercadoLibre-specific modules for the HTTP client, extraction, and data models.

pub mod client;
pub mod extract;
pub mod models;
pub mod sites;

pub use client::{MeliClient, MeliSearch};
pub use extract::{extract, find_brand};
pub use models::{Attribute, Item, Record, SearchPage};
pub use sites::Site;
