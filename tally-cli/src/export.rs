//! Export link construction from filter state

use crate::filter::FilterState;

/// Path of the server-side PDF export endpoint
pub const EXPORT_PATH: &str = "/generate_pdf";

/// Build the export URL for the given filter state. Both query parameters
/// are always present; an unset dimension encodes as an empty value. The
/// URL is only constructed here, never fetched.
pub fn export_url(base_url: &str, state: &FilterState) -> String {
    format!(
        "{}{}?resource_type={}&namespace={}",
        base_url,
        EXPORT_PATH,
        urlencoding::encode(state.resource_type_param()),
        urlencoding::encode(state.namespace_param()),
    )
}
