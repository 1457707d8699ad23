use std::path::PathBuf;

use anyhow::Context;
use jsxdoc_core::{Location, Position};

/// Parse a `path:line:col` location with 1-based line and column.
///
/// Splits from the right so paths containing `:` still parse.
pub fn parse_location(raw: &str) -> anyhow::Result<Location> {
    let mut parts = raw.rsplitn(3, ':');
    let (Some(col), Some(line), Some(path)) = (parts.next(), parts.next(), parts.next()) else {
        anyhow::bail!("invalid location '{raw}': expected path:line:col");
    };
    anyhow::ensure!(!path.is_empty(), "invalid location '{raw}': empty path");

    let line = parse_one_based(line, "line", raw)?;
    let col = parse_one_based(col, "column", raw)?;
    Ok(Location::new(PathBuf::from(path), Position::new(line, col)))
}

fn parse_one_based(value: &str, field: &str, raw: &str) -> anyhow::Result<u32> {
    let parsed: u32 = value
        .parse()
        .with_context(|| format!("invalid {field} in location '{raw}'"))?;
    anyhow::ensure!(parsed >= 1, "invalid {field} in location '{raw}': must be at least 1");
    Ok(parsed - 1)
}

#[cfg(test)]
mod tests {
    use jsxdoc_core::{Location, Position};
    use pretty_assertions::assert_eq;

    use super::parse_location;

    #[test]
    fn parses_one_based_location() {
        let location = parse_location("node_modules/antd/lib/button/index.d.ts:12:3")
            .expect("location should parse");
        assert_eq!(
            location,
            Location::new("node_modules/antd/lib/button/index.d.ts", Position::new(11, 2))
        );
    }

    #[test]
    fn keeps_colons_in_path() {
        let location = parse_location("C:/proj/node_modules/antd/index.d.ts:1:1")
            .expect("location should parse");
        assert_eq!(location.path.to_str(), Some("C:/proj/node_modules/antd/index.d.ts"));
        assert_eq!(location.position, Position::new(0, 0));
    }

    #[test]
    fn errors_on_missing_column() {
        let err = parse_location("index.d.ts:4").expect_err("should fail");
        assert!(err.to_string().contains("expected path:line:col"));
    }

    #[test]
    fn errors_on_zero_line() {
        let err = parse_location("index.d.ts:0:1").expect_err("should fail");
        assert!(err.to_string().contains("must be at least 1"));
    }

    #[test]
    fn errors_on_non_numeric_column() {
        let err = parse_location("index.d.ts:1:x").expect_err("should fail");
        assert!(err.to_string().contains("invalid column"));
    }
}
