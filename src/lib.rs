//! # Tullips Gallery
//!
//! The state engine behind the Tullips Creative Green Spaces photo gallery.
//! A fixed catalog of photos is filtered by category and free-text search,
//! paged in fixed-size slices, and decorated with a persisted favorite set.
//!
//! # Architecture: Catalog → Engine → Projections
//!
//! ```text
//! 1. Catalog   gallery.toml  →  Catalog        (static photo list, tags, alt text)
//! 2. Engine    Catalog + store → Gallery        (filter, paging, favorites)
//! 3. Project   Gallery       →  text / HTML    (CLI output, Maud markup)
//! ```
//!
//! The engine never draws anything. Every user action goes through a
//! [`gallery::Gallery`] method (or an [`gallery::Intent`] via `dispatch`) and
//! the projections read the resulting state. Tests exercise the engine against
//! an in-memory store without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Categories, subcategories, tag table, and the curated photo list |
//! | [`favorites`] | `FavoriteSet`, the `FavoriteStore` port, file and in-memory stores |
//! | [`gallery`] | The engine: filter state, derived filtered list, paging, favorite toggles |
//! | [`render`] | Maud HTML for the quick-nav, grid, cards, load-more control, and preview |
//! | [`config`] | `gallery.toml` loading, validation, and merging over stock defaults |
//! | [`output`] | CLI text formatting for list, counts, favorites, and preview |
//!
//! # Design Decisions
//!
//! ## Derived Filter Result
//!
//! The filtered list is recomputed from the catalog on every filter change and
//! the page resets to the first slice. Paging state can never point into a list
//! that no longer exists.
//!
//! ## Storage Failures Are Warnings
//!
//! A missing or corrupt favorites entry loads as an empty set; a failed write
//! keeps the in-memory change. Both cases surface as a
//! [`favorites::StorageWarning`] on the operation that hit them, never as a
//! hard error.
//!
//! ## Closed Category Set
//!
//! Categories and subcategories are enums. Tags come from a fixed table keyed
//! by (category, subcategory), with a two-tag fallback for anything not in the
//! table.

pub mod catalog;
pub mod config;
pub mod favorites;
pub mod gallery;
pub mod output;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
