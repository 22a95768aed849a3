//! List command implementation

use super::Context;
use anyhow::Result;
use serde::Serialize;

/// One rendered table row; associations are resolved display names, the
/// raw ids never leave the core
#[derive(Serialize)]
struct BookRow {
    id: u32,
    title: String,
    author: String,
    genre: String,
    rating: f32,
    categories: String,
    tags: String,
}

/// List all books with resolved category and tag names
pub fn list(ctx: &Context, json: bool) -> Result<()> {
    let rows: Vec<BookRow> = ctx
        .library
        .books()
        .iter()
        .map(|book| BookRow {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            rating: book.rating,
            categories: ctx.library.category_names(book),
            tags: ctx.library.tag_names(book),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No books yet.");
        return Ok(());
    }

    println!(
        "{:<4} {:<30} {:<22} {:<16} {:<7} {:<24} {}",
        "ID", "Title", "Author", "Genre", "Rating", "Categories", "Tags"
    );
    for row in rows {
        println!(
            "{:<4} {:<30} {:<22} {:<16} {:<7} {:<24} {}",
            row.id, row.title, row.author, row.genre, row.rating, row.categories, row.tags
        );
    }

    Ok(())
}
