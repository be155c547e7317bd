use serde::Serialize;

/// Outcome of a detailed redirect resolution.
///
/// `redirect_chain` starts with `original_url` (verbatim) and ends with
/// `final_url`; it always holds `redirect_count + 1` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    /// The input URL, as given
    pub original_url: String,
    /// Where the chain ended
    pub final_url: String,
    /// Number of redirects followed
    pub redirect_count: usize,
    /// Every URL visited, in order
    pub redirect_chain: Vec<String>,
}
