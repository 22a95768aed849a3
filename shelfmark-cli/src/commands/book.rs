//! Book add/edit/delete command implementations

use super::Context;
use anyhow::{anyhow, Result};
use shelfmark_core::{BookDraft, BookUpdate, LabelId, LabelKind, Library};

/// Maps label names given on the command line to their ids
fn resolve_label_ids(library: &Library, kind: LabelKind, names: &[String]) -> Result<Vec<LabelId>> {
    names
        .iter()
        .map(|name| {
            library
                .find_label(kind, name)
                .map(|label| label.id.clone())
                .ok_or_else(|| anyhow!("unknown {kind} '{name}'"))
        })
        .collect()
}

/// Add a book
pub async fn add(
    ctx: &mut Context,
    title: String,
    author: String,
    genre: String,
    rating: f32,
    categories: &[String],
    tags: &[String],
) -> Result<()> {
    let mut draft = BookDraft::new(title, author, genre);
    draft.apply(BookUpdate::SetRating(rating));
    draft.apply(BookUpdate::SetCategories(resolve_label_ids(
        &ctx.library,
        LabelKind::Category,
        categories,
    )?));
    draft.apply(BookUpdate::SetTags(resolve_label_ids(
        &ctx.library,
        LabelKind::Tag,
        tags,
    )?));

    let book = ctx.library.add_book(draft).await?;
    println!("Added book {} '{}'", book.id, book.title);
    Ok(())
}

/// Edit a book by applying tagged field updates to its current draft
#[allow(clippy::too_many_arguments)]
pub async fn edit(
    ctx: &mut Context,
    id: u32,
    title: Option<String>,
    author: Option<String>,
    genre: Option<String>,
    rating: Option<f32>,
    categories: Option<Vec<String>>,
    tags: Option<Vec<String>>,
) -> Result<()> {
    let current = ctx
        .library
        .book(id)
        .ok_or_else(|| anyhow!("book {id} not found"))?;
    let mut draft = current.to_draft();

    let mut updates = Vec::new();
    if let Some(title) = title {
        updates.push(BookUpdate::SetTitle(title));
    }
    if let Some(author) = author {
        updates.push(BookUpdate::SetAuthor(author));
    }
    if let Some(genre) = genre {
        updates.push(BookUpdate::SetGenre(genre));
    }
    if let Some(rating) = rating {
        updates.push(BookUpdate::SetRating(rating));
    }
    if let Some(names) = categories {
        updates.push(BookUpdate::SetCategories(resolve_label_ids(
            &ctx.library,
            LabelKind::Category,
            &names,
        )?));
    }
    if let Some(names) = tags {
        updates.push(BookUpdate::SetTags(resolve_label_ids(
            &ctx.library,
            LabelKind::Tag,
            &names,
        )?));
    }

    if updates.is_empty() {
        println!("Nothing to change for book {id}");
        return Ok(());
    }
    for update in updates {
        draft.apply(update);
    }

    let book = ctx.library.edit_book(id, draft).await?;
    println!("Updated book {} '{}'", book.id, book.title);
    Ok(())
}

/// Delete a book
pub async fn delete(ctx: &mut Context, id: u32) -> Result<()> {
    ctx.library.delete_book(id).await?;
    println!("Deleted book {id}");
    Ok(())
}
