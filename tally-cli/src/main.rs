//! Tally CLI
//!
//! Command-line client for the cluster resource inventory service

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tally_cli::api::ApiClient;
use tally_cli::config::Config;
use tally_cli::logging;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Inventory server address
    #[arg(short, long)]
    server: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long)]
    output: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List inventory rows across all tracked kinds
    List {
        /// Filter by resource type (case-insensitive substring)
        #[arg(short = 't', long)]
        resource_type: Option<String>,

        /// Filter by namespace (exact match)
        #[arg(short, long)]
        namespace: Option<String>,
    },
    /// List the namespaces seen across workload records
    Namespaces,
    /// Show per-node health derived from node conditions
    Nodes,
    /// Show one resource in detail
    Show {
        /// Resource kind (deployment, statefulset, replicaset, node)
        kind: String,

        /// Resource name
        name: String,

        /// Narrow the lookup to one namespace
        #[arg(short, long)]
        namespace: Option<String>,
    },
    /// Print the PDF export URL for the given filters
    Export {
        /// Resource type filter carried into the export
        #[arg(short = 't', long)]
        resource_type: Option<String>,

        /// Namespace filter carried into the export
        #[arg(short, long)]
        namespace: Option<String>,
    },
    /// Browse and filter the inventory interactively
    Browse,
    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    // Load config; flags win over configured defaults
    let config = Config::load().unwrap_or_default();
    let server = cli.server.clone().unwrap_or(config.default_server);
    let output = cli.output.clone().unwrap_or(config.default_output);

    // Initialize API client
    let api_client = ApiClient::new(&server);

    // Execute command
    match cli.command {
        Commands::List {
            resource_type,
            namespace,
        } => {
            commands::inventory::handle_list(
                &api_client,
                resource_type.as_deref(),
                namespace.as_deref(),
                &output,
            )
            .await?
        }
        Commands::Namespaces => {
            commands::inventory::handle_namespaces(&api_client, &output).await?
        }
        Commands::Nodes => commands::nodes::handle_nodes(&api_client, &output).await?,
        Commands::Show {
            kind,
            name,
            namespace,
        } => {
            commands::inventory::handle_show(
                &api_client,
                &kind,
                &name,
                namespace.as_deref(),
                &output,
            )
            .await?
        }
        Commands::Export {
            resource_type,
            namespace,
        } => {
            commands::export::handle_export(
                &api_client,
                resource_type.as_deref(),
                namespace.as_deref(),
            )
        }
        Commands::Browse => commands::inventory::handle_browse(&api_client).await?,
        Commands::Completions { shell } => {
            generate_completions(shell);
        }
    }

    Ok(())
}

/// Generate shell completions
fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    generate(shell, &mut cmd, name, &mut io::stdout());
}
