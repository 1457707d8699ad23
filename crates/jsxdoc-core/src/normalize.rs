//! Comparison form of component and symbol names.

/// Canonicalize a name for comparison: drop every `.` and lowercase the rest.
///
/// Only used for matching. Display always goes through the catalog's own
/// spelling of the key.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '.')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Button", "button")]
    #[case("Table.Column", "tablecolumn")]
    #[case("TableColumn", "tablecolumn")]
    #[case("..a.B.", "ab")]
    #[case("", "")]
    #[case("date-picker", "date-picker")]
    fn normalizes(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize(raw), expected);
    }

    #[rstest]
    #[case("Form.Item")]
    #[case("ÄÖÜ.ß")]
    #[case("İstanbul")]
    #[case("already lower")]
    fn idempotent(#[case] raw: &str) {
        let once = normalize(raw);
        assert_eq!(normalize(&once), once);
    }
}
