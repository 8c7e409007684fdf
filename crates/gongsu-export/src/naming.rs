//! Deterministic output filenames.

/// `{label}_{scope}_{year}-{month:02}.xlsx`, with the scope segment and its
/// separator omitted when there is no single project (consolidated scope).
/// No timestamp or randomness: identical input yields an identical name.
pub fn file_name(label: &str, scope: Option<&str>, year: i32, month: u32) -> String {
    match scope {
        Some(project) => format!("{label}_{project}_{year}-{month:02}.xlsx"),
        None => format!("{label}_{year}-{month:02}.xlsx"),
    }
}
