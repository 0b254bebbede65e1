//! Dataset build command: paginates the search and accumulates records.

use crate::config::Config;
use crate::meli::client::{MeliClient, MeliSearch};
use crate::meli::extract::extract;
use crate::meli::models::Record;
use crate::meli::sites::Site;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Collects the dataset for one site.
pub struct BuildCommand {
    config: Config,
}

impl BuildCommand {
    /// Creates a new build command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Collects records for the given site.
    pub async fn execute(&self, site: Site) -> Result<Vec<Record>> {
        let client =
            MeliClient::new(&self.config, site).context("Failed to create HTTP client")?;

        self.execute_with_client(&client).await
    }

    /// Collects records with a provided client (for testing).
    pub async fn execute_with_client(&self, client: &impl MeliSearch) -> Result<Vec<Record>> {
        info!("Collecting '{}' listings on {}", self.config.query, client.site());

        let mut records: Vec<Record> = Vec::new();

        // The offset advances by one per page index, not by page size.
        // Consecutive pages overlap heavily and duplicates are kept as
        // returned.
        for offset in 0..self.config.pages {
            let Some(page) = client.search(offset).await? else {
                debug!("No data at offset {}, skipping", offset);
                continue;
            };

            debug!("Offset {} returned {} listings", offset, page.count());

            for item in &page.results {
                if let Some(record) = extract(item, &self.config.condition) {
                    records.push(record);
                }
            }
        }

        info!("Collected {} records", records.len());
        Ok(records)
    }
}
