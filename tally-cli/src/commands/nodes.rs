//! Node health command

use anyhow::Result;
use tabled::Tabled;
use tally_cli::api::ApiClient;
use tally_cli::output::{self, OutputFormat};
use tally_common::format::{format_conditions, text_or_placeholder};
use tally_common::NodeHealth;

#[derive(Tabled)]
struct NodeHealthRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Conditions")]
    conditions: String,
}

impl From<&NodeHealth> for NodeHealthRow {
    fn from(node: &NodeHealth) -> Self {
        Self {
            name: text_or_placeholder(node.name.as_deref()),
            status: text_or_placeholder(node.status.as_deref()),
            conditions: text_or_placeholder(Some(&format_conditions(Some(&node.conditions)))),
        }
    }
}

pub async fn handle_nodes(api: &ApiClient, output_format: &str) -> Result<()> {
    let nodes = api.fetch_node_health().await?;

    match OutputFormat::from_str(output_format) {
        OutputFormat::Table => {
            let rows: Vec<NodeHealthRow> = nodes.iter().map(NodeHealthRow::from).collect();
            output::print_table(rows);
        }
        OutputFormat::Json => output::print_json(&nodes)?,
        OutputFormat::Yaml => output::print_yaml(&nodes)?,
    }

    Ok(())
}
