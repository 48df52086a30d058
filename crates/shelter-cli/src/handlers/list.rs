//! List command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Render every dog as a pretty-printed JSON array.
pub async fn render(ctx: &CliContext) -> Result<String> {
    let records = ctx
        .app()
        .dogs()
        .list_records()
        .await
        .map_err(CliError::from)?;
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Execute the list command.
///
/// Prints the same array `GET /api/dogs` returns; an empty shelter
/// prints `[]`.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    println!("{}", render(ctx).await?);
    Ok(())
}
