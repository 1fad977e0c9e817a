//! CLI output formatting.
//!
//! Each command has a `format_*` function that returns `Vec<String>` and a
//! `print_*` wrapper that writes to stdout. Format functions are pure so tests
//! can assert on exact lines.
//!
//! # Output Format
//!
//! ## List
//!
//! ```text
//! Filter: flowers, search "wedding"
//! 8 photos, 1 favorites, page 1 of 1
//!
//! 001 ♥ Flowers  🌸 bouquets
//!     images/photos/IMG-20250901-WA0018.jpg
//!     Tags: wedding bouquets, bridal bouquets, romantic
//! ...
//!
//! End of results
//! ```
//!
//! ## Counts
//!
//! ```text
//! 🖼️ All Photos  80
//! 🌸 Flowers     16
//! ```

use crate::catalog::{Category, DEFAULT_ICON, Photo};
use crate::favorites::{FavoriteStore, StorageWarning};
use crate::gallery::{CategoryFilter, FavoriteChange, Gallery, PhotoCard, ToggleOutcome};

const CARD_TAG_LIMIT: usize = 3;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a photo id as 3-digit zero-padded.
fn format_id(id: u32) -> String {
    format!("{:0>3}", id)
}

fn photo_header(photo: &Photo, is_favorite: bool) -> String {
    let mark = if is_favorite { "♥" } else { " " };
    match photo.subcategory {
        Some(_) => format!(
            "{} {} {}  {}",
            format_id(photo.id),
            mark,
            photo.display_title,
            photo.badge()
        ),
        None => format!("{} {} {}", format_id(photo.id), mark, photo.display_title),
    }
}

fn card_lines(card: &PhotoCard<'_>) -> Vec<String> {
    let photo = card.photo;
    let tags: Vec<&str> = photo
        .tags
        .iter()
        .take(CARD_TAG_LIMIT)
        .map(String::as_str)
        .collect();
    vec![
        photo_header(photo, card.is_favorite),
        format!("{}{}", indent(1), photo.path),
        format!("{}Tags: {}", indent(1), tags.join(", ")),
    ]
}

fn filter_line(category: CategoryFilter, search: &str) -> String {
    if search.is_empty() {
        format!("Filter: {}", category)
    } else {
        format!("Filter: {}, search \"{}\"", category, search)
    }
}

// ============================================================================
// list
// ============================================================================

/// Format the current page with filter summary and paging status.
pub fn format_list<S: FavoriteStore>(gallery: &Gallery<S>) -> Vec<String> {
    let mut lines = vec![
        filter_line(gallery.active_category(), gallery.search_term()),
        format!(
            "{} photos, {} favorites, page {} of {}",
            gallery.filtered_count(),
            gallery.favorites_count(),
            gallery.current_page() + 1,
            gallery.page_count()
        ),
        String::new(),
    ];

    if gallery.is_empty_result() {
        lines.push("No photos found".to_string());
        lines.push(format!(
            "{}Try adjusting your search or filter criteria (reset with --category all and no --search)",
            indent(1)
        ));
        return lines;
    }

    let cards = gallery.visible_slice();
    if cards.is_empty() {
        lines.push("No photos on this page".to_string());
    }
    for card in &cards {
        lines.extend(card_lines(card));
    }

    lines.push(String::new());
    if gallery.has_more() {
        lines.push(format!(
            "Load More Photos ({} remaining)",
            gallery.remaining()
        ));
    } else {
        lines.push("End of results".to_string());
    }
    lines
}

pub fn print_list<S: FavoriteStore>(gallery: &Gallery<S>) {
    for line in format_list(gallery) {
        println!("{}", line);
    }
}

// ============================================================================
// counts
// ============================================================================

/// Format the category badge counts, names padded to a common width.
pub fn format_counts<S: FavoriteStore>(gallery: &Gallery<S>) -> Vec<String> {
    let counts = gallery.category_counts();
    let active = gallery.active_category();
    let mut rows: Vec<(String, usize, bool)> =
        vec![(format!("{} All Photos", DEFAULT_ICON), counts.all, active == CategoryFilter::All)];
    rows.extend(Category::ALL.into_iter().map(|cat| {
        (
            format!("{} {}", cat.icon(), cat.nav_name()),
            counts.get(cat),
            active == CategoryFilter::Only(cat),
        )
    }));

    let width = rows.iter().map(|(name, _, _)| name.chars().count()).max().unwrap_or(0);
    rows.into_iter()
        .map(|(name, count, is_active)| {
            let pad = width - name.chars().count();
            let marker = if is_active { " *" } else { "" };
            format!("{}{}  {}{}", name, " ".repeat(pad), count, marker)
        })
        .collect()
}

pub fn print_counts<S: FavoriteStore>(gallery: &Gallery<S>) {
    for line in format_counts(gallery) {
        println!("{}", line);
    }
}

// ============================================================================
// favorite / favorites
// ============================================================================

pub fn format_toggle(outcome: &ToggleOutcome) -> Vec<String> {
    let mut lines = vec![match outcome.change {
        FavoriteChange::Added => format!("Added {} to favorites", format_id(outcome.photo_id)),
        FavoriteChange::Removed => {
            format!("Removed {} from favorites", format_id(outcome.photo_id))
        }
        FavoriteChange::UnknownPhoto => {
            format!("No photo with id {}; nothing changed", outcome.photo_id)
        }
    }];
    if let Some(warning) = &outcome.warning {
        lines.push(format_warning(warning));
    }
    lines
}

pub fn print_toggle(outcome: &ToggleOutcome) {
    for line in format_toggle(outcome) {
        println!("{}", line);
    }
}

/// Favorite photos in catalog order.
pub fn format_favorites<S: FavoriteStore>(gallery: &Gallery<S>) -> Vec<String> {
    let photos = gallery.favorite_photos();
    if photos.is_empty() {
        return vec!["No favorites yet".to_string()];
    }
    let mut lines = vec![format!("{} favorites", photos.len())];
    for photo in photos {
        lines.push(photo_header(photo, true));
    }
    lines
}

pub fn print_favorites<S: FavoriteStore>(gallery: &Gallery<S>) {
    for line in format_favorites(gallery) {
        println!("{}", line);
    }
}

// ============================================================================
// show
// ============================================================================

/// Preview details for one photo, every tag included.
pub fn format_preview(card: &PhotoCard<'_>) -> Vec<String> {
    let photo = card.photo;
    vec![
        photo_header(photo, card.is_favorite),
        format!("{}Source: {}", indent(1), photo.path),
        format!("{}Alt: {}", indent(1), photo.alt_text),
        format!("{}Tags: {}", indent(1), photo.tags.join(", ")),
        format!(
            "{}Favorite: {}",
            indent(1),
            if card.is_favorite { "yes" } else { "no" }
        ),
    ]
}

pub fn print_preview(card: &PhotoCard<'_>) {
    for line in format_preview(card) {
        println!("{}", line);
    }
}

// ============================================================================
// warnings
// ============================================================================

pub fn format_warning(warning: &StorageWarning) -> String {
    format!("warning: {}", warning)
}

/// Warnings go to stderr so stdout stays parseable.
pub fn print_warning(warning: &StorageWarning) {
    eprintln!("{}", format_warning(warning));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::MemoryStore;
    use crate::test_helpers::*;

    #[test]
    fn list_first_page_header_and_footer() {
        let gallery = memory_gallery();
        let lines = format_list(&gallery);
        assert_eq!(lines[0], "Filter: all");
        assert_eq!(lines[1], "80 photos, 0 favorites, page 1 of 7");
        assert_eq!(lines.last().unwrap(), "Load More Photos (68 remaining)");
    }

    #[test]
    fn list_card_lines() {
        let gallery = memory_gallery();
        let lines = format_list(&gallery);
        assert_eq!(lines[3], "001   Flowers  🌸 bouquets");
        assert_eq!(lines[4], "    images/photos/IMG-20250901-WA0018.jpg");
        assert_eq!(lines[5], "    Tags: wedding bouquets, bridal bouquets, romantic");
    }

    #[test]
    fn list_marks_favorites() {
        let gallery = gallery_with_store(MemoryStore::with_entry(KEY, "[1]"));
        let lines = format_list(&gallery);
        assert_eq!(lines[3], "001 ♥ Flowers  🌸 bouquets");
    }

    #[test]
    fn list_no_results() {
        let mut gallery = memory_gallery();
        gallery.set_category_filter("flowers");
        gallery.set_search_term("cypress");
        let lines = format_list(&gallery);
        assert_eq!(lines[0], "Filter: flowers, search \"cypress\"");
        assert!(lines.contains(&"No photos found".to_string()));
    }

    #[test]
    fn list_last_page_ends_results() {
        let mut gallery = memory_gallery();
        for _ in 0..6 {
            gallery.advance_page();
        }
        let lines = format_list(&gallery);
        assert_eq!(lines[1], "80 photos, 0 favorites, page 7 of 7");
        assert_eq!(lines.last().unwrap(), "End of results");
    }

    #[test]
    fn list_flat_photo_has_no_badge() {
        let gallery = crate::gallery::Gallery::new(flat_catalog(), MemoryStore::new(), KEY, 12);
        let lines = format_list(&gallery);
        assert_eq!(lines[3], "001   Photo 1");
        assert_eq!(lines[5], "    Tags: creative, green spaces");
    }

    #[test]
    fn counts_are_aligned_and_mark_active() {
        let mut gallery = memory_gallery();
        gallery.set_category_filter("stonework");
        let lines = format_counts(&gallery);
        assert_eq!(lines.len(), 6);
        assert!(lines[0].ends_with("  80"));
        assert!(lines[3].ends_with("16 *"));
        assert!(lines[3].contains("Stonework"));
        let widths: Vec<usize> = lines
            .iter()
            .map(|l| l[..l.rfind("  ").unwrap()].chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{lines:?}");
    }

    #[test]
    fn toggle_messages() {
        let mut gallery = memory_gallery();
        let added = gallery.toggle_favorite(5);
        assert_eq!(format_toggle(&added), vec!["Added 005 to favorites"]);
        let removed = gallery.toggle_favorite(5);
        assert_eq!(format_toggle(&removed), vec!["Removed 005 from favorites"]);
        let unknown = gallery.toggle_favorite(404);
        assert_eq!(
            format_toggle(&unknown),
            vec!["No photo with id 404; nothing changed"]
        );
    }

    #[test]
    fn toggle_with_warning_adds_line() {
        let mut store = MemoryStore::new();
        store.set_fail_writes(true);
        let mut gallery = gallery_with_store(store);
        let outcome = gallery.toggle_favorite(2);
        let lines = format_toggle(&outcome);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("warning: could not save favorites"));
    }

    #[test]
    fn favorites_listing() {
        let mut gallery = memory_gallery();
        assert_eq!(format_favorites(&gallery), vec!["No favorites yet"]);
        gallery.toggle_favorite(22);
        gallery.toggle_favorite(3);
        let lines = format_favorites(&gallery);
        assert_eq!(lines[0], "2 favorites");
        assert!(lines[1].starts_with("003 ♥"));
        assert!(lines[2].starts_with("022 ♥"));
    }

    #[test]
    fn preview_lists_all_tags() {
        let gallery = memory_gallery();
        let card = gallery.preview_card(14).unwrap();
        let lines = format_preview(&card);
        assert_eq!(
            lines[3],
            "    Tags: palm trees, tropical plants, outdoor palms, garden palms"
        );
        assert_eq!(lines[4], "    Favorite: no");
    }
}
