//! The gallery state engine.
//!
//! [`Gallery`] owns the catalog, the filter, the page cursor and the favorite
//! set, and is the only thing allowed to change them. Front ends (the CLI, the
//! HTML renderer, tests) call its methods directly or forward user intents
//! through [`Gallery::dispatch`].
//!
//! ## State
//!
//! ```text
//! catalog ──filter(category AND search)──▶ filtered ──page──▶ visible slice
//!                                                              │
//! favorites ──────────────────────── is_favorite(id) ◀─────────┘
//! ```
//!
//! The filtered list is always recomputed from the full catalog, never edited
//! in place, and every filter change moves the cursor back to the first page
//! before the method returns. Catalog order is preserved end to end.
//!
//! ## Storage
//!
//! Favorites are loaded once in [`Gallery::new`] and written back after every
//! toggle. Storage problems are reported as [`StorageWarning`]s and never
//! abort an operation.

use crate::catalog::{Catalog, Category, Photo, PhotoId};
use crate::favorites::{self, FavoriteSet, FavoriteStore, StorageWarning};
use std::fmt;

/// Photos per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// The category half of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a filter key. Anything that is not an exact category key is
    /// treated as "all".
    pub fn from_key(key: &str) -> Self {
        match Category::from_key(key) {
            Some(cat) => CategoryFilter::Only(cat),
            None => {
                if key != "all" {
                    log::debug!("unknown category filter '{key}', showing all");
                }
                CategoryFilter::All
            }
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(cat) => cat.key(),
        }
    }

    pub fn matches(self, photo: &Photo) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(cat) => photo.category == Some(cat),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Current filter: category AND search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategoryFilter,
    /// Lower-case and trimmed.
    pub search: String,
}

impl FilterState {
    pub fn matches(&self, photo: &Photo) -> bool {
        self.category.matches(photo) && photo.matches_search(&self.search)
    }

    pub fn is_default(&self) -> bool {
        self.category == CategoryFilter::All && self.search.is_empty()
    }
}

/// Normalize raw search input: trimmed and lower-cased.
pub fn normalize_search(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Photo counts for the category badges, always over the full catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCounts {
    pub all: usize,
    per_category: [usize; Category::ALL.len()],
}

impl CategoryCounts {
    fn compute(catalog: &Catalog) -> Self {
        let mut per_category = [0; Category::ALL.len()];
        for photo in catalog.photos() {
            if let Some(cat) = photo.category {
                per_category[cat as usize] += 1;
            }
        }
        Self {
            all: catalog.len(),
            per_category,
        }
    }

    pub fn get(&self, category: Category) -> usize {
        self.per_category[category as usize]
    }

    /// Count for a filter key, `all` included.
    pub fn for_filter(&self, filter: CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.all,
            CategoryFilter::Only(cat) => self.get(cat),
        }
    }

    /// `(category, count)` in navigation order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

/// A photo together with its favorite flag, as handed to renderers.
#[derive(Debug, Clone, Copy)]
pub struct PhotoCard<'a> {
    pub photo: &'a Photo,
    pub is_favorite: bool,
}

/// What a toggle did to the favorite set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
    /// The id is not in the catalog; nothing changed and nothing was written.
    UnknownPhoto,
}

#[derive(Debug)]
pub struct ToggleOutcome {
    pub photo_id: PhotoId,
    pub change: FavoriteChange,
    /// Set when the in-memory change could not be persisted.
    pub warning: Option<StorageWarning>,
}

impl ToggleOutcome {
    pub fn is_favorite(&self) -> bool {
        self.change == FavoriteChange::Added
    }
}

/// A user intent, forwarded verbatim from whichever front end received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Search(String),
    ClearSearch,
    SelectCategory(String),
    LoadMore,
    ToggleFavorite(PhotoId),
    Preview(PhotoId),
    ResetFilters,
}

/// What the front end should do after an intent was applied.
#[derive(Debug)]
pub enum Effect {
    /// State changed; redraw the grid, counts and controls.
    Redraw,
    /// A favorite flipped; redraw, and surface the warning if any.
    FavoriteToggled(ToggleOutcome),
    /// Open the preview overlay for this photo.
    OpenPreview(PhotoId),
    /// The intent referred to something that does not exist.
    Ignored,
}

/// The gallery engine.
pub struct Gallery<S: FavoriteStore> {
    catalog: Catalog,
    store: S,
    storage_key: String,
    favorites: FavoriteSet,
    filter: FilterState,
    /// Catalog indices of the photos passing the filter, in catalog order.
    filtered: Vec<usize>,
    page_size: usize,
    page: usize,
    counts: CategoryCounts,
    load_warning: Option<StorageWarning>,
}

impl<S: FavoriteStore> Gallery<S> {
    /// Build the engine: load favorites, show everything, first page.
    ///
    /// A `page_size` of zero is treated as [`DEFAULT_PAGE_SIZE`].
    pub fn new(catalog: Catalog, store: S, storage_key: &str, page_size: usize) -> Self {
        let (mut favorites, load_warning) = favorites::load(&store, storage_key);
        let stale = favorites.retain(|id| catalog.contains(id));
        if !stale.is_empty() {
            log::debug!("dropping favorites not in the catalog: {stale:?}");
        }
        let counts = CategoryCounts::compute(&catalog);
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        let mut gallery = Self {
            catalog,
            store,
            storage_key: storage_key.to_string(),
            favorites,
            filter: FilterState::default(),
            filtered: Vec::new(),
            page_size,
            page: 0,
            counts,
            load_warning,
        };
        gallery.refilter();
        log::info!(
            "gallery ready: {} photos, {} favorites",
            gallery.catalog.len(),
            gallery.favorites.len()
        );
        gallery
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Set the search term (trimmed, case-insensitive) and go to page one.
    pub fn set_search_term(&mut self, term: &str) {
        self.filter.search = normalize_search(term);
        self.refilter();
    }

    /// Set the category by key; unknown keys mean "all". Goes to page one.
    pub fn set_category_filter(&mut self, key: &str) {
        self.set_category(CategoryFilter::from_key(key));
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
        self.refilter();
    }

    /// Clear search and category and go to page one.
    pub fn reset_filters(&mut self) {
        self.filter = FilterState::default();
        self.refilter();
    }

    /// Jump to a 0-based page, clamped to the last page.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    /// Move to the next page. Past the last page the slice is simply empty.
    pub fn advance_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Flip a photo's favorite state and persist the whole set.
    pub fn toggle_favorite(&mut self, id: PhotoId) -> ToggleOutcome {
        if !self.catalog.contains(id) {
            log::debug!("ignoring favorite toggle for unknown photo {id}");
            return ToggleOutcome {
                photo_id: id,
                change: FavoriteChange::UnknownPhoto,
                warning: None,
            };
        }
        let change = if self.favorites.toggle(id) {
            FavoriteChange::Added
        } else {
            FavoriteChange::Removed
        };
        let warning = favorites::save(&mut self.store, &self.storage_key, &self.favorites);
        ToggleOutcome {
            photo_id: id,
            change,
            warning,
        }
    }

    /// Apply a user intent.
    pub fn dispatch(&mut self, intent: Intent) -> Effect {
        match intent {
            Intent::Search(term) => {
                self.set_search_term(&term);
                Effect::Redraw
            }
            Intent::ClearSearch => {
                self.set_search_term("");
                Effect::Redraw
            }
            Intent::SelectCategory(key) => {
                self.set_category_filter(&key);
                Effect::Redraw
            }
            Intent::LoadMore => {
                if !self.has_more() {
                    return Effect::Ignored;
                }
                self.advance_page();
                Effect::Redraw
            }
            Intent::ToggleFavorite(id) => {
                let outcome = self.toggle_favorite(id);
                if outcome.change == FavoriteChange::UnknownPhoto {
                    Effect::Ignored
                } else {
                    Effect::FavoriteToggled(outcome)
                }
            }
            Intent::Preview(id) => {
                if self.catalog.contains(id) {
                    Effect::OpenPreview(id)
                } else {
                    Effect::Ignored
                }
            }
            Intent::ResetFilters => {
                self.reset_filters();
                Effect::Redraw
            }
        }
    }

    fn refilter(&mut self) {
        let filter = &self.filter;
        self.filtered = self
            .catalog
            .photos()
            .iter()
            .enumerate()
            .filter(|(_, photo)| filter.matches(photo))
            .map(|(idx, _)| idx)
            .collect();
        self.page = 0;
        log::debug!(
            "filter category={} search={:?}: {} photos",
            self.filter.category,
            self.filter.search,
            self.filtered.len()
        );
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// The photos on the current page, in catalog order.
    pub fn visible_slice(&self) -> Vec<PhotoCard<'_>> {
        let start = self.page.saturating_mul(self.page_size);
        self.filtered
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&idx| self.card(&self.catalog.photos()[idx]))
            .collect()
    }

    /// Every photo passing the current filter, in catalog order.
    pub fn filtered_photos(&self) -> impl Iterator<Item = &Photo> + '_ {
        self.filtered.iter().map(|&idx| &self.catalog.photos()[idx])
    }

    /// Badge counts over the full catalog, independent of the filter.
    pub fn category_counts(&self) -> &CategoryCounts {
        &self.counts
    }

    /// Whether a "load more" control should be offered.
    pub fn has_more(&self) -> bool {
        (self.page + 1).saturating_mul(self.page_size) < self.filtered.len()
    }

    /// Photos left after the current page.
    pub fn remaining(&self) -> usize {
        self.filtered
            .len()
            .saturating_sub((self.page + 1).saturating_mul(self.page_size))
    }

    /// Number of pages the filtered list spans (at least one).
    pub fn page_count(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size).max(1)
    }

    /// True when the filter leaves nothing to show.
    pub fn is_empty_result(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn favorites_count(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_favorite(&self, id: PhotoId) -> bool {
        self.favorites.contains(id)
    }

    /// Favorite photos in catalog order.
    pub fn favorite_photos(&self) -> Vec<&Photo> {
        self.catalog
            .photos()
            .iter()
            .filter(|p| self.favorites.contains(p.id))
            .collect()
    }

    pub fn photo(&self, id: PhotoId) -> Option<&Photo> {
        self.catalog.get(id)
    }

    /// A single photo with its favorite flag, for the preview overlay.
    pub fn preview_card(&self, id: PhotoId) -> Option<PhotoCard<'_>> {
        self.catalog.get(id).map(|p| self.card(p))
    }

    fn card<'a>(&'a self, photo: &'a Photo) -> PhotoCard<'a> {
        PhotoCard {
            photo,
            is_favorite: self.favorites.contains(photo.id),
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn active_category(&self) -> CategoryFilter {
        self.filter.category
    }

    pub fn search_term(&self) -> &str {
        &self.filter.search
    }

    /// Zero-based page index.
    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The warning from loading favorites at startup, if any.
    pub fn load_warning(&self) -> Option<&StorageWarning> {
        self.load_warning.as_ref()
    }

    /// Take the startup warning so it is reported only once.
    pub fn take_load_warning(&mut self) -> Option<StorageWarning> {
        self.load_warning.take()
    }
}
