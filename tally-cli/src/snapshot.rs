//! Inventory snapshot loading with the fail-open policy

use crate::api::ApiClient;
use crate::output;
use tally_common::normalize::{normalize, InventorySnapshot};
use tracing::{debug, error};

/// Fetch and normalize the inventory. Fetch failures degrade to an empty
/// snapshot so filtering and rendering stay usable; the diagnostic lands
/// on stderr and the exit status stays untouched.
pub async fn load_snapshot(api: &ApiClient) -> InventorySnapshot {
    match api.fetch_inventory().await {
        Ok(document) => {
            debug!(
                "inventory fetched: {} deployments, {} statefulsets, {} replicasets, {} nodes",
                document.deployments.len(),
                document.statefulsets.len(),
                document.replicasets.len(),
                document.nodes.len()
            );
            normalize(&document)
        }
        Err(err) => {
            error!("inventory fetch failed: {}", err);
            output::print_warning("Inventory unavailable, continuing with an empty data set");
            InventorySnapshot::default()
        }
    }
}
