use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a response in the requested format.
///
/// `raw` produces the plain-text form; JSON goes through serde.
pub fn render<T, F>(value: &T, format: OutputFormat, raw: F) -> anyhow::Result<String>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(raw(value)),
    }
}

/// Print a response in the requested format.
pub fn output<T, F>(value: &T, format: OutputFormat, raw: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    let rendered = render(value, format, raw)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Sample {
        label: &'static str,
        count: usize,
    }

    const SAMPLE: Sample = Sample {
        label: "onClick",
        count: 2,
    };

    #[test]
    fn json_is_pretty_printed() {
        let rendered = render(&SAMPLE, OutputFormat::Json, |_| String::new()).expect("render");
        assert_eq!(rendered, "{\n  \"label\": \"onClick\",\n  \"count\": 2\n}");
    }

    #[test]
    fn raw_uses_the_text_renderer() {
        let rendered = render(&SAMPLE, OutputFormat::Raw, |s| format!("{}:{}", s.label, s.count))
            .expect("render");
        assert_eq!(rendered, "onClick:2");
    }
}
