use jsxdoc_core::schema::DataFileKind;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;

/// Handle `jsxdoc schema`.
///
/// Always JSON: a schema has no plain-text form.
pub fn handle(args: &SchemaArgs, _flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = DataFileKind::from(args.kind);
    let schema = kind.schema()?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
