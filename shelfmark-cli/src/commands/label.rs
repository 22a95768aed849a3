//! Category and tag management commands

use super::Context;
use anyhow::{anyhow, Result};
use clap::Subcommand;
use shelfmark_core::LabelKind;

#[derive(Subcommand)]
pub enum LabelAction {
    /// List entries
    List,

    /// Add a new entry
    Add { name: String },

    /// Rename an entry
    Rename { name: String, new_name: String },

    /// Delete an entry (refused while any book references it)
    Delete { name: String },
}

/// Dispatches one category/tag management action
pub async fn label(ctx: &mut Context, kind: LabelKind, action: LabelAction) -> Result<()> {
    match action {
        LabelAction::List => {
            let labels = match kind {
                LabelKind::Category => ctx.library.categories(),
                LabelKind::Tag => ctx.library.tags(),
            };
            if labels.is_empty() {
                println!("No {kind} entries yet.");
                return Ok(());
            }
            for label in labels {
                println!("{:<7} {}", label.id, label.name);
            }
            Ok(())
        }

        LabelAction::Add { name } => {
            let label = match kind {
                LabelKind::Category => ctx.library.add_category(&name).await?,
                LabelKind::Tag => ctx.library.add_tag(&name).await?,
            };
            println!("Added {kind} '{}' ({})", label.name, label.id);
            Ok(())
        }

        LabelAction::Rename { name, new_name } => {
            let id = find_id(ctx, kind, &name)?;
            let label = match kind {
                LabelKind::Category => ctx.library.rename_category(&id, &new_name).await?,
                LabelKind::Tag => ctx.library.rename_tag(&id, &new_name).await?,
            };
            println!("Renamed {kind} '{name}' to '{}'", label.name);
            Ok(())
        }

        LabelAction::Delete { name } => {
            let id = find_id(ctx, kind, &name)?;
            match kind {
                LabelKind::Category => ctx.library.delete_category(&id).await?,
                LabelKind::Tag => ctx.library.delete_tag(&id).await?,
            }
            println!("Deleted {kind} '{name}'");
            Ok(())
        }
    }
}

fn find_id(ctx: &Context, kind: LabelKind, name: &str) -> Result<shelfmark_core::LabelId> {
    ctx.library
        .find_label(kind, name)
        .map(|label| label.id.clone())
        .ok_or_else(|| anyhow!("unknown {kind} '{name}'"))
}
