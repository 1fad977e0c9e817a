//! Shared test utilities for the gallery test suite.
//!
//! Provides ready-made catalogs and galleries plus extractors that turn engine
//! output into plain id lists, so assertions read as data.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut gallery = memory_gallery();
//! gallery.set_category_filter("flowers");
//! assert_eq!(visible_ids(&gallery)[..3], [1, 2, 3]);
//! ```

use crate::catalog::{Catalog, CatalogShape, Photo, PhotoId};
use crate::favorites::{FavoriteStore, MemoryStore};
use crate::gallery::Gallery;

pub const KEY: &str = "tullipsFavorites";
pub const SITE: &str = "Tullips Creative Green Spaces";

// =========================================================================
// Fixture setup
// =========================================================================

pub fn categorized_catalog() -> Catalog {
    Catalog::build(CatalogShape::Categorized, SITE, "images/photos")
}

pub fn flat_catalog() -> Catalog {
    Catalog::build(CatalogShape::Flat, SITE, "images/photos")
}

/// Categorized catalog, empty in-memory store, 12 per page.
pub fn memory_gallery() -> Gallery<MemoryStore> {
    gallery_with_store(MemoryStore::new())
}

pub fn gallery_with_store(store: MemoryStore) -> Gallery<MemoryStore> {
    Gallery::new(categorized_catalog(), store, KEY, 12)
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a photo by id. Panics if not found.
pub fn find_photo(catalog: &Catalog, id: PhotoId) -> &Photo {
    catalog.get(id).unwrap_or_else(|| {
        panic!(
            "photo {id} not found. Catalog has {} photos (ids {:?}..={:?})",
            catalog.len(),
            catalog.photos().first().map(|p| p.id),
            catalog.photos().last().map(|p| p.id)
        )
    })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Ids on the current page, in display order.
pub fn visible_ids<S: FavoriteStore>(gallery: &Gallery<S>) -> Vec<PhotoId> {
    gallery.visible_slice().iter().map(|c| c.photo.id).collect()
}

/// Ids of every photo passing the current filter.
pub fn filtered_ids<S: FavoriteStore>(gallery: &Gallery<S>) -> Vec<PhotoId> {
    gallery.filtered_photos().map(|p| p.id).collect()
}

/// Walk every page from the current one to the end, concatenating ids.
///
/// Stops after the first empty page so it terminates even if `has_more`
/// is wrong.
pub fn all_pages<S: FavoriteStore>(gallery: &mut Gallery<S>) -> Vec<PhotoId> {
    let mut ids = Vec::new();
    loop {
        let page = visible_ids(gallery);
        if page.is_empty() {
            break;
        }
        ids.extend(page);
        if !gallery.has_more() {
            break;
        }
        gallery.advance_page();
    }
    ids
}
