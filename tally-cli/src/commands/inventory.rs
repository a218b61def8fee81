//! Inventory commands: list, namespaces, show and the interactive browser

use anyhow::Result;
use tabled::Tabled;
use tally_cli::api::ApiClient;
use tally_cli::export;
use tally_cli::filter::{FilterController, FilterEvent};
use tally_cli::output::{self, OutputFormat};
use tally_cli::snapshot::load_snapshot;
use tally_cli::view::ConsoleTable;
use tally_common::format::{count_or_placeholder, format_conditions, format_map, text_or_placeholder};
use tally_common::normalize::InventorySnapshot;
use tally_common::{NodeRecord, ResourceKind, WorkloadRecord};

pub async fn handle_list(
    api: &ApiClient,
    resource_type: Option<&str>,
    namespace: Option<&str>,
    output_format: &str,
) -> Result<()> {
    let snapshot = load_snapshot(api).await;

    let mut controller = FilterController::new(ConsoleTable::new());
    controller.load(snapshot.rows);
    if let Some(value) = resource_type {
        controller.handle(FilterEvent::ResourceTypeSelected(value.to_string()));
    }
    if let Some(value) = namespace {
        controller.handle(FilterEvent::NamespaceSelected(value.to_string()));
    }

    match OutputFormat::from_str(output_format) {
        OutputFormat::Table => controller.view().print(),
        OutputFormat::Json => output::print_json(&controller.view().visible())?,
        OutputFormat::Yaml => output::print_yaml(&controller.view().visible())?,
    }

    Ok(())
}

#[derive(Tabled)]
struct NamespaceRow {
    #[tabled(rename = "Namespace")]
    name: String,
}

pub async fn handle_namespaces(api: &ApiClient, output_format: &str) -> Result<()> {
    let snapshot = load_snapshot(api).await;
    let namespaces: Vec<String> = snapshot.namespaces.into_iter().collect();

    match OutputFormat::from_str(output_format) {
        OutputFormat::Table => {
            let rows: Vec<NamespaceRow> = namespaces
                .into_iter()
                .map(|name| NamespaceRow { name })
                .collect();
            output::print_table(rows);
        }
        OutputFormat::Json => output::print_json(&namespaces)?,
        OutputFormat::Yaml => output::print_yaml(&namespaces)?,
    }

    Ok(())
}

pub async fn handle_show(
    api: &ApiClient,
    kind: &str,
    name: &str,
    namespace: Option<&str>,
    output_format: &str,
) -> Result<()> {
    let kind: ResourceKind = kind.parse()?;
    let document = api.fetch_inventory().await?;

    match kind {
        ResourceKind::Deployment => {
            let record = find_workload(&document.deployments, name, namespace)
                .ok_or_else(|| anyhow::anyhow!("Deployment '{}' not found", name))?;
            show_workload(kind, record, output_format)?;
        }
        ResourceKind::StatefulSet => {
            let record = find_workload(&document.statefulsets, name, namespace)
                .ok_or_else(|| anyhow::anyhow!("StatefulSet '{}' not found", name))?;
            show_workload(kind, record, output_format)?;
        }
        ResourceKind::ReplicaSet => {
            let record = find_workload(&document.replicasets, name, namespace)
                .ok_or_else(|| anyhow::anyhow!("ReplicaSet '{}' not found", name))?;
            show_workload(kind, record, output_format)?;
        }
        ResourceKind::Node => {
            let record = document
                .nodes
                .iter()
                .find(|record| record.name.as_deref() == Some(name))
                .ok_or_else(|| anyhow::anyhow!("Node '{}' not found", name))?;
            show_node(record, output_format)?;
        }
    }

    Ok(())
}

fn find_workload<'a>(
    records: &'a [WorkloadRecord],
    name: &str,
    namespace: Option<&str>,
) -> Option<&'a WorkloadRecord> {
    records.iter().find(|record| {
        record.name.as_deref() == Some(name)
            && namespace.map_or(true, |ns| record.namespace.as_deref() == Some(ns))
    })
}

fn show_workload(kind: ResourceKind, record: &WorkloadRecord, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format);
    if format != OutputFormat::Table {
        return output::print_single(record, format);
    }

    println!("{} Details:", kind);
    println!("  Name: {}", text_or_placeholder(record.name.as_deref()));
    println!(
        "  Namespace: {}",
        text_or_placeholder(record.namespace.as_deref())
    );
    println!("  Replicas: {}", count_or_placeholder(record.replicas));
    println!(
        "  Available Replicas: {}",
        count_or_placeholder(record.available_replicas)
    );
    println!(
        "  Created: {}",
        text_or_placeholder(record.creation_timestamp.as_deref())
    );
    println!(
        "  Labels: {}",
        text_or_placeholder(Some(&format_map(record.labels.as_ref())))
    );

    Ok(())
}

fn show_node(record: &NodeRecord, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format);
    if format != OutputFormat::Table {
        return output::print_single(record, format);
    }

    println!("Node Details:");
    println!("  Name: {}", text_or_placeholder(record.name.as_deref()));
    println!(
        "  Created: {}",
        text_or_placeholder(record.creation_timestamp.as_deref())
    );
    println!(
        "  Labels: {}",
        text_or_placeholder(Some(&format_map(record.labels.as_ref())))
    );
    println!(
        "  Annotations: {}",
        text_or_placeholder(Some(&format_map(record.annotations.as_ref())))
    );
    println!(
        "  Capacity: {}",
        text_or_placeholder(Some(&format_map(record.capacity.as_ref())))
    );
    println!(
        "  Allocatable: {}",
        text_or_placeholder(Some(&format_map(record.allocatable.as_ref())))
    );
    println!(
        "  Conditions: {}",
        text_or_placeholder(Some(&format_conditions(record.conditions.as_deref())))
    );

    Ok(())
}

pub async fn handle_browse(api: &ApiClient) -> Result<()> {
    let snapshot = fetch_with_spinner(api).await;
    let mut namespaces: Vec<String> = snapshot.namespaces.iter().cloned().collect();

    let mut controller = FilterController::new(ConsoleTable::new());
    controller.load(snapshot.rows);

    output::print_info(&format!(
        "{} rows loaded at {}",
        controller.view().rows().len(),
        chrono::Local::now().format("%H:%M:%S")
    ));
    controller.view().print();
    output::print_info("Commands: type <kind>, ns [namespace], all, export, reload, table, quit");

    loop {
        let line: String = dialoguer::Input::new()
            .with_prompt("tally")
            .allow_empty(true)
            .interact_text()?;
        let line = line.trim();
        let mut parts = line.splitn(2, ' ');
        let command = parts.next().unwrap_or("");
        let argument = parts.next().unwrap_or("").trim();

        match command {
            "quit" | "exit" | "q" => break,
            "" | "table" => controller.view().print(),
            "all" => {
                controller.handle(FilterEvent::Reset);
                controller.view().print();
            }
            "type" => {
                if argument.is_empty() {
                    let kinds: Vec<&str> =
                        ResourceKind::ALL.iter().map(ResourceKind::label).collect();
                    output::print_info(&format!("Kinds: {}, or 'all'", kinds.join(", ")));
                } else {
                    controller.handle(FilterEvent::ResourceTypeSelected(argument.to_string()));
                    controller.view().print();
                }
            }
            "ns" => {
                let selection = if argument.is_empty() {
                    pick_namespace(&namespaces)?
                } else {
                    argument.to_string()
                };
                controller.handle(FilterEvent::NamespaceSelected(selection));
                controller.view().print();
            }
            "export" => {
                let url = export::export_url(api.base_url(), controller.state());
                output::print_info(&format!("Export URL: {}", url));
            }
            "reload" => {
                let snapshot = fetch_with_spinner(api).await;
                namespaces = snapshot.namespaces.iter().cloned().collect();
                controller.load(snapshot.rows);
                output::print_success(&format!(
                    "Reloaded {} rows at {}",
                    controller.view().rows().len(),
                    chrono::Local::now().format("%H:%M:%S")
                ));
                controller.view().print();
            }
            other => {
                output::print_warning(&format!("Unknown command: {}", other));
            }
        }
    }

    Ok(())
}

async fn fetch_with_spinner(api: &ApiClient) -> InventorySnapshot {
    use indicatif::{ProgressBar, ProgressStyle};
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message("Fetching inventory...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let snapshot = load_snapshot(api).await;

    spinner.finish_and_clear();
    snapshot
}

fn pick_namespace(namespaces: &[String]) -> Result<String> {
    use dialoguer::Select;

    let mut items = vec!["all".to_string()];
    items.extend(namespaces.iter().cloned());

    let selection = Select::new()
        .with_prompt("Namespace")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(items[selection].clone())
}
