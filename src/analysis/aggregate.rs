/// Combine per-conversation insights into one string, blank-line separated.
///
/// Absent and empty results are dropped; relative order is preserved. No
/// deduplication or ranking happens here; that is left to the downstream
/// consolidation step.
pub fn combine_insights(results: &[Option<String>]) -> String {
    results
        .iter()
        .flatten()
        .filter(|insight| !insight.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n\n")
}
