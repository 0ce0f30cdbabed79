use crate::app::{AppContext, HisnError, Result};
use crate::domain::{all_book_codes, CollectionGroup, EntityKind, RawHadith, Remembrance, Supplication};

pub struct ListOptions<'a> {
    pub query: Option<&'a str>,
    pub category: Option<&'a str>,
    pub lang: Option<&'a str>,
    pub favorites_only: bool,
}

pub async fn list_duas(ctx: &AppContext, opts: &ListOptions<'_>) -> Result<()> {
    let duas = ctx.query.get_duas(opts.lang).await;
    let duas = ctx.query.filter_duas(&duas, opts.category);
    let mut duas = ctx.query.search_duas(opts.query.unwrap_or(""), &duas);
    if opts.favorites_only {
        duas.retain(|d| d.is_favorite);
    }

    if duas.is_empty() {
        println!("No supplications");
        return Ok(());
    }

    for dua in &duas {
        println!("{}", render_supplication(dua));
    }
    println!("{} supplications", duas.len());
    Ok(())
}

pub async fn list_azkar(ctx: &AppContext, opts: &ListOptions<'_>) -> Result<()> {
    let azkar = ctx.query.get_azkar(opts.lang).await;
    let azkar = ctx.query.filter_azkar(&azkar, opts.category);
    let mut azkar = ctx.query.search_azkar(opts.query.unwrap_or(""), &azkar);
    if opts.favorites_only {
        azkar.retain(|z| z.is_favorite);
    }

    if azkar.is_empty() {
        println!("No remembrances");
        return Ok(());
    }

    for zikr in &azkar {
        println!("{}", render_remembrance(zikr));
    }
    println!("{} remembrances", azkar.len());
    Ok(())
}

pub async fn list_categories(ctx: &AppContext, kind: EntityKind) -> Result<()> {
    let categories = ctx.query.get_categories(kind).await;

    for category in &categories {
        println!("{:>5}  {}  ({})", category.count, category.name, category.id);
    }
    println!("{} categories of {}", categories.len(), kind);
    Ok(())
}

pub async fn show_entry(ctx: &AppContext, id: &str) -> Result<()> {
    let kind = EntityKind::of_entity_id(id).ok_or_else(|| HisnError::UnknownEntity(id.to_string()))?;

    let (text, book, number) = match kind {
        EntityKind::Supplication => {
            let duas = ctx.query.get_duas(None).await;
            let dua = duas
                .into_iter()
                .find(|d| d.id == id)
                .ok_or_else(|| HisnError::UnknownEntity(id.to_string()))?;
            let mut text = render_supplication(&dua);
            if dua.has_benefits() {
                text.push_str(&format!("\n  Benefit: {}", dua.benefits));
            }
            if !dua.tags.is_empty() {
                text.push_str(&format!("\n  Tags: {}", dua.tags.join(", ")));
            }
            (text, dua.book, dua.number)
        }
        EntityKind::Remembrance => {
            let azkar = ctx.query.get_azkar(None).await;
            let zikr = azkar
                .into_iter()
                .find(|z| z.id == id)
                .ok_or_else(|| HisnError::UnknownEntity(id.to_string()))?;
            (render_remembrance(&zikr), zikr.book, zikr.number)
        }
    };

    println!("{}", text);

    // Built-in entries have no source book to consult.
    if book.is_empty() {
        return Ok(());
    }

    let hadith = source_hadith(ctx, &book, &number).await?;
    if let Some(narrator) = hadith.as_ref().and_then(|h| h.narrator.as_deref()) {
        println!("  Narrated by: {}", narrator);
    }
    Ok(())
}

pub async fn toggle_favorite(ctx: &AppContext, id: &str) -> Result<()> {
    let kind = EntityKind::of_entity_id(id).ok_or_else(|| HisnError::UnknownEntity(id.to_string()))?;

    let known = match kind {
        EntityKind::Supplication => ctx.query.get_duas(None).await.iter().any(|d| d.id == id),
        EntityKind::Remembrance => ctx.query.get_azkar(None).await.iter().any(|z| z.id == id),
    };
    if !known {
        return Err(HisnError::UnknownEntity(id.to_string()));
    }

    if ctx.query.toggle_favorite(kind, id) {
        println!("★ {} added to favorites", id);
    } else {
        println!("  {} removed from favorites", id);
    }
    Ok(())
}

pub async fn list_books(ctx: &AppContext) -> Result<()> {
    let mut available = 0;
    let mut errors = 0;

    for code in all_book_codes() {
        let group = CollectionGroup::of(code).map(|g| g.dir()).unwrap_or("");
        match ctx.loader.load_book(code).await {
            Ok(Some(book)) => {
                available += 1;
                println!(
                    "  {:<20} {:<14} {:>6} hadiths  {}",
                    code,
                    group,
                    book.hadiths.len(),
                    book.display_title()
                );
            }
            Ok(None) => println!("- {:<20} {:<14} unavailable", code, group),
            Err(e) => {
                errors += 1;
                eprintln!("! {:<20} {:<14} {}", code, group, e);
            }
        }
    }

    println!(
        "{} of {} books available, {} errors",
        available,
        all_book_codes().count(),
        errors
    );
    Ok(())
}

pub async fn status(ctx: &AppContext) -> Result<()> {
    let duas = ctx.query.get_duas(None).await;
    let azkar = ctx.query.get_azkar(None).await;

    println!(
        "Supplications: {:>6}  from {}",
        duas.len(),
        ctx.query.provenance(EntityKind::Supplication).await
    );
    println!(
        "Remembrances:  {:>6}  from {}",
        azkar.len(),
        ctx.query.provenance(EntityKind::Remembrance).await
    );
    println!(
        "Favorites:     {:>6} duas, {} azkar",
        duas.iter().filter(|d| d.is_favorite).count(),
        azkar.iter().filter(|z| z.is_favorite).count()
    );
    Ok(())
}

async fn source_hadith(ctx: &AppContext, book: &str, number: &str) -> Result<Option<RawHadith>> {
    let raw = ctx
        .loader
        .load_book(book)
        .await?
        .ok_or_else(|| HisnError::BookNotFound(book.to_string()))?;

    Ok(raw.hadiths.iter().find(|h| h.id_in_book == number).cloned())
}

fn favorite_marker(is_favorite: bool) -> &'static str {
    if is_favorite {
        "★"
    } else {
        " "
    }
}

pub fn render_supplication(dua: &Supplication) -> String {
    let mut out = format!(
        "{} {}  {}\n  [{}] {}\n  {}\n  {}",
        favorite_marker(dua.is_favorite),
        dua.id,
        dua.title,
        dua.category,
        dua.reference,
        dua.arabic,
        dua.translation
    );
    if !dua.transliteration.is_empty() {
        out.push_str(&format!("\n  {}", dua.transliteration));
    }
    out
}

pub fn render_remembrance(zikr: &Remembrance) -> String {
    format!(
        "{} {}  x{}\n  [{}] {}\n  {}\n  {}",
        favorite_marker(zikr.is_favorite),
        zikr.id,
        zikr.count,
        zikr.category,
        zikr.reference,
        zikr.arabic,
        zikr.description
    )
}
