//! Cell-level cleanup for HRIS export values.

/// Strip a leading byte-order mark and collapse runs of whitespace.
pub(crate) fn clean_cell(value: &str) -> String {
    value
        .trim_start_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a `;`-separated multi-value cell into cleaned, non-empty entries.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(clean_cell)
        .filter(|value| !value.is_empty())
        .collect()
}

#[cfg(test)]
pub(crate) fn split_for_tests(raw: &str) -> Vec<String> {
    split_list(raw)
}

#[cfg(test)]
pub(crate) fn clean_for_tests(value: &str) -> String {
    clean_cell(value)
}
