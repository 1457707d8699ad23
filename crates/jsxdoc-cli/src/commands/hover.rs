use anyhow::Context;
use jsxdoc_ide::{Hover, HoverRequest, ResolveContext, StaticLookups, provide_hover};
use tokio_util::sync::CancellationToken;

use crate::bootstrap::read_document;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::HoverArgs;
use crate::commands::shared::parse::parse_location;
use crate::output::output;

/// Handle `jsxdoc hover`.
pub async fn handle(
    args: &HoverArgs,
    context: &ResolveContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let lookups = lookups_from_args(args)?;
    let document = read_document(&args.cursor.file)?;
    let position = args.cursor.position();
    document.tree.offset(position)?;

    let request = HoverRequest {
        document: &document,
        position,
    };
    let hover = provide_hover(context, &request, &lookups, &CancellationToken::new())
        .await
        .context("catalog and documentation tables disagree")?;

    output(&hover, flags.format, |hover| {
        hover.as_ref().map(Hover::to_markdown).unwrap_or_default()
    })
}

fn lookups_from_args(args: &HoverArgs) -> anyhow::Result<StaticLookups> {
    let definitions = args
        .definition
        .iter()
        .map(|raw| parse_location(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let type_definitions = args
        .type_definition
        .iter()
        .map(|raw| parse_location(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(StaticLookups {
        definitions,
        type_definitions,
        symbol: args.symbol.clone(),
        kind: args.kind,
    })
}
