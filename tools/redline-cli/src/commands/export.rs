//! Catalog export command.

use anyhow::{Context as _, Result};

use super::ExportArgs;
use crate::context::Context;

/// Run the export command.
pub fn run(args: ExportArgs, ctx: &Context) -> Result<()> {
    let pretty = args.pretty || ctx.config.output.pretty;
    let json = ctx.catalog().to_json(pretty)?;

    match args.output.as_deref() {
        Some(path) => {
            let path = ctx.resolve_path(path);
            std::fs::write(&path, json.as_bytes())
                .with_context(|| format!("Failed to write catalog: {}", path.display()))?;
            tracing::debug!(path = %path.display(), bytes = json.len(), "exported catalog");
            ctx.output
                .success(&format!("Wrote catalog to {}", path.display()));
        }
        None => println!("{}", json),
    }

    Ok(())
}
