use jsxdoc_ide::{CompletionItem, CompletionRequest, ResolveContext, provide_completions};
use tokio_util::sync::CancellationToken;

use crate::bootstrap::read_document;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::CompleteArgs;
use crate::output::output;

/// Handle `jsxdoc complete`.
pub fn handle(args: &CompleteArgs, context: &ResolveContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let document = read_document(&args.cursor.file)?;
    let position = args.cursor.position();
    document.tree.offset(position)?;

    let request = CompletionRequest {
        document: &document,
        position,
        trigger: args.trigger,
    };
    let items = provide_completions(context, &request, &CancellationToken::new());
    tracing::debug!(count = items.len(), "completion candidates");

    output(&items, flags.format, |items| to_lines(items))
}

/// One `label<TAB>insert_text` line per candidate.
fn to_lines(items: &[CompletionItem]) -> String {
    items
        .iter()
        .map(|item| format!("{}\t{}", item.label, item.insert_text))
        .collect::<Vec<_>>()
        .join("\n")
}
