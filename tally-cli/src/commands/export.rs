//! Export link command

use tally_cli::api::ApiClient;
use tally_cli::export;
use tally_cli::filter::FilterState;

/// Print the export URL for the given selections. The URL goes to stdout
/// bare so it can be piped straight into curl or a browser opener.
pub fn handle_export(api: &ApiClient, resource_type: Option<&str>, namespace: Option<&str>) {
    let state = FilterState::from_selections(resource_type, namespace);
    println!("{}", export::export_url(api.base_url(), &state));
}
