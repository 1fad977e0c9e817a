//! HTML projection of gallery state.
//!
//! A pure function of the engine: nothing here decides what to show, it only
//! draws what [`Gallery`] reports. The markup keeps the class names and data
//! attributes the site's stylesheet and event wiring expect
//! (`data-category`, `data-photo-id`, `favorite-btn`, `load-more-btn`, ...).
//!
//! ## Pieces
//!
//! - **Controls**: search box and category select, reflecting the filter
//! - **Quick nav**: one button per category with its full-catalog count
//! - **Stats**: `"N photos"` for the filtered set, `"N favorites"`
//! - **Grid**: the visible slice, or the "no results" panel when the filter
//!   matches nothing
//! - **Load more**: shown only while more pages remain
//! - **Preview**: the full-screen overlay for one photo, with every tag
//!
//! Uses [maud](https://maud.lambda.xyz/) so all interpolated text is escaped.

use crate::catalog::{Category, DEFAULT_ICON};
use crate::favorites::FavoriteStore;
use crate::gallery::{CategoryFilter, Gallery, PhotoCard};
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unknown photo: {0}")]
    UnknownPhoto(u32),
}

/// Tags shown on a grid card; the preview shows them all.
const CARD_TAG_LIMIT: usize = 3;

/// Render the whole gallery section for the current state.
pub fn render_gallery<S: FavoriteStore>(gallery: &Gallery<S>) -> Markup {
    html! {
        section.gallery {
            (render_controls(gallery))
            (render_quick_nav(gallery))
            (render_stats(gallery))
            (render_grid(gallery))
            (render_load_more(gallery))
        }
    }
}

/// Render a complete standalone document around the gallery section.
pub fn render_document<S: FavoriteStore>(gallery: &Gallery<S>, title: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
            }
            body {
                main.gallery-page {
                    (render_gallery(gallery))
                }
            }
        }
    }
}

/// Write the standalone document to `path`.
pub fn write_document<S: FavoriteStore>(
    gallery: &Gallery<S>,
    title: &str,
    path: &Path,
) -> Result<(), RenderError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_document(gallery, title).into_string())?;
    log::info!("wrote gallery page to {}", path.display());
    Ok(())
}

/// Search input and category select.
fn render_controls<S: FavoriteStore>(gallery: &Gallery<S>) -> Markup {
    let active = gallery.active_category();
    html! {
        div.gallery-controls-container {
            div.gallery-header {
                div.search-container {
                    input #photoSearch .search-input type="text"
                        placeholder="🔍 Search photos..." value=(gallery.search_term());
                    button #clearSearch .clear-search-btn { "×" }
                }
                div.filter-container {
                    select #categoryFilter .category-filter {
                        option value="all" selected[active == CategoryFilter::All] {
                            "All Categories"
                        }
                        @for cat in Category::ALL {
                            option value=(cat.key())
                                selected[active == CategoryFilter::Only(cat)] {
                                (cat.label())
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Category buttons with full-catalog counts and the active one marked.
pub fn render_quick_nav<S: FavoriteStore>(gallery: &Gallery<S>) -> Markup {
    let active = gallery.active_category();
    let counts = gallery.category_counts();
    html! {
        div.quick-category-nav {
            div.category-buttons {
                (category_button("all", DEFAULT_ICON, "All Photos", counts.all, active == CategoryFilter::All))
                @for (cat, count) in counts.iter() {
                    (category_button(cat.key(), cat.icon(), cat.nav_name(), count, active == CategoryFilter::Only(cat)))
                }
            }
        }
    }
}

fn category_button(key: &str, icon: &str, name: &str, count: usize, active: bool) -> Markup {
    html! {
        button.category-btn.active[active] data-category=(key) {
            span.category-icon { (icon) }
            span.category-name { (name) }
            span.category-count { (count) }
        }
    }
}

fn render_stats<S: FavoriteStore>(gallery: &Gallery<S>) -> Markup {
    html! {
        div.gallery-stats {
            span #photoCount { (gallery.filtered_count()) " photos" }
            span #favoritesCount { (gallery.favorites_count()) " favorites" }
        }
    }
}

/// The visible slice, or the no-results panel.
pub fn render_grid<S: FavoriteStore>(gallery: &Gallery<S>) -> Markup {
    let cards = gallery.visible_slice();
    html! {
        div #photoGallery .gallery-grid {
            @if cards.is_empty() {
                (render_no_results())
            } @else {
                @for card in &cards {
                    (render_card(card))
                }
            }
        }
    }
}

/// A single grid card.
pub fn render_card(card: &PhotoCard<'_>) -> Markup {
    let photo = card.photo;
    html! {
        div.gallery-item data-photo-id=(photo.id) {
            div.photo-container {
                img src=(photo.path) alt=(photo.alt_text) loading="lazy";
                div.photo-overlay {
                    div.photo-actions {
                        button.favorite-btn.favorited[card.is_favorite] data-photo-id=(photo.id) {
                            (heart(card.is_favorite))
                        }
                        button.share-btn data-photo-id=(photo.id) { "📤" }
                        button.enlarge-btn data-photo-id=(photo.id) { "🔍" }
                    }
                    div.photo-info {
                        div.photo-category-badge { (photo.badge()) }
                        h4 { (photo.display_title) }
                        p { (photo.alt_text) }
                        div.photo-tags {
                            @for tag in photo.tags.iter().take(CARD_TAG_LIMIT) {
                                span.tag { (tag) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn heart(is_favorite: bool) -> &'static str {
    if is_favorite { "❤️" } else { "🤍" }
}

/// Shown instead of an empty grid, with a way back to everything.
pub fn render_no_results() -> Markup {
    html! {
        div.no-results {
            div.no-results-icon { "🔍" }
            h3 { "No photos found" }
            p { "Try adjusting your search or filter criteria" }
            button.reset-filters-btn { "Reset Filters" }
        }
    }
}

/// The load-more control, or nothing once the last page is showing.
pub fn render_load_more<S: FavoriteStore>(gallery: &Gallery<S>) -> Markup {
    html! {
        @if gallery.has_more() {
            button #loadMoreBtn .load-more-btn {
                "Load More Photos (" (gallery.remaining()) " remaining)"
            }
        }
    }
}

/// The full-screen preview overlay for one photo.
pub fn render_preview<S: FavoriteStore>(
    gallery: &Gallery<S>,
    id: u32,
) -> Result<Markup, RenderError> {
    let card = gallery.preview_card(id).ok_or(RenderError::UnknownPhoto(id))?;
    let photo = card.photo;
    Ok(html! {
        div.lightbox data-photo-id=(photo.id) {
            div.lightbox-content {
                span.close-lightbox { "×" }
                div.lightbox-image-container {
                    img src=(photo.path) alt=(photo.alt_text);
                }
                div.lightbox-info {
                    div.lightbox-category { (photo.badge()) }
                    h3 { (photo.display_title) }
                    p { (photo.alt_text) }
                    div.lightbox-tags {
                        @for tag in &photo.tags {
                            span.tag { (tag) }
                        }
                    }
                    div.lightbox-actions {
                        button.favorite-btn.favorited[card.is_favorite] data-photo-id=(photo.id) {
                            (heart(card.is_favorite))
                        }
                        a.contact-btn href="#contact" { "📞 Get Quote" }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::MemoryStore;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn grid_renders_first_page() {
        let gallery = memory_gallery();
        let html = render_grid(&gallery).into_string();
        assert_eq!(html.matches(r#"class="gallery-item""#).count(), 12);
        assert!(html.contains("images/photos/IMG-20250901-WA0018.jpg"));
        assert!(!html.contains("no-results"));
    }

    #[test]
    fn grid_shows_no_results_panel() {
        let mut gallery = memory_gallery();
        gallery.set_search_term("nothing matches this");
        let html = render_grid(&gallery).into_string();
        assert!(html.contains("No photos found"));
        assert!(html.contains("reset-filters-btn"));
        assert!(!html.contains("gallery-item"));
    }

    #[test]
    fn card_shows_three_tags_and_badge() {
        let gallery = memory_gallery();
        let photo = find_photo(gallery.catalog(), 7);
        let html = render_card(&PhotoCard { photo, is_favorite: false }).into_string();
        assert!(html.contains("🌸 wedding flowers"));
        assert!(html.contains("<h4>Flowers</h4>"));
        assert_eq!(html.matches(r#"class="tag""#).count(), 3);
        assert!(!html.contains("reception flowers"));
        assert!(html.contains("🤍"));
    }

    #[test]
    fn favorite_card_is_marked() {
        let store = MemoryStore::with_entry(KEY, "[1]");
        let gallery = gallery_with_store(store);
        let html = render_grid(&gallery).into_string();
        assert!(html.contains(r#"class="favorite-btn favorited" data-photo-id="1""#));
        assert_eq!(html.matches("❤️").count(), 1);
    }

    #[test]
    fn load_more_shows_remaining() {
        let gallery = memory_gallery();
        let html = render_load_more(&gallery).into_string();
        assert!(html.contains("Load More Photos (68 remaining)"));
    }

    #[test]
    fn load_more_hidden_on_last_page() {
        let mut gallery = memory_gallery();
        for _ in 0..6 {
            gallery.advance_page();
        }
        assert_eq!(render_load_more(&gallery).into_string(), "");
    }

    #[test]
    fn quick_nav_has_counts_and_active_button() {
        let mut gallery = memory_gallery();
        gallery.set_category_filter("decor");
        let html = render_quick_nav(&gallery).into_string();
        assert!(html.contains(r#"class="category-btn active" data-category="decor""#));
        assert!(html.contains(r#"class="category-btn" data-category="all""#));
        assert!(html.contains(r#"<span class="category-count">80</span>"#));
        assert_eq!(html.matches(r#"<span class="category-count">16</span>"#).count(), 5);
    }

    #[test]
    fn controls_reflect_filter() {
        let mut gallery = memory_gallery();
        gallery.set_category_filter("plants");
        gallery.set_search_term(" Palm ");
        let html = render_controls(&gallery).into_string();
        assert!(html.contains(r#"value="palm""#));
        assert!(html.contains(r#"<option value="plants" selected>Plants &amp; Greenery</option>"#));
    }

    #[test]
    fn stats_count_filtered_and_favorites() {
        let mut gallery = memory_gallery();
        gallery.toggle_favorite(1);
        gallery.set_category_filter("gardens");
        let html = render_stats(&gallery).into_string();
        assert!(html.contains("16 photos"));
        assert!(html.contains("1 favorites"));
    }

    #[test]
    fn preview_lists_all_tags() {
        let gallery = memory_gallery();
        let html = render_preview(&gallery, 7).unwrap().into_string();
        assert!(html.contains("lightbox"));
        assert_eq!(html.matches(r#"class="tag""#).count(), 4);
        assert!(html.contains("reception flowers"));
    }

    #[test]
    fn preview_unknown_photo_is_error() {
        let gallery = memory_gallery();
        assert!(matches!(
            render_preview(&gallery, 500),
            Err(RenderError::UnknownPhoto(500))
        ));
    }

    #[test]
    fn document_includes_doctype_and_title() {
        let gallery = memory_gallery();
        let doc = render_document(&gallery, "Our Work").into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Our Work</title>"));
    }

    #[test]
    fn write_document_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let gallery = memory_gallery();
        let path = tmp.path().join("site/gallery.html");
        write_document(&gallery, "Gallery", &path).unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("gallery-grid"));
    }

    #[test]
    fn search_text_is_escaped() {
        let mut gallery = memory_gallery();
        gallery.set_search_term("<script>");
        let html = render_gallery(&gallery).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
