//! The static photo catalog.
//!
//! The catalog is a fixed, curated list compiled into the binary. Its order is
//! the display order: nothing downstream ever sorts it.
//!
//! ## Shapes
//!
//! Two catalog shapes share one [`Photo`] type:
//!
//! - **Categorized** (default): every photo carries a [`Category`] and a
//!   [`Subcategory`]. Tags come from a fixed lookup table keyed by the pair.
//! - **Flat**: the same files with no classification. Tags fall back to the
//!   default pair and category filters match nothing but "all".
//!
//! ## Tags
//!
//! Tags are derived from `(category, subcategory)` by [`tag_set`]. A pair the
//! table does not know (either half missing, or a subcategory filed under the
//! wrong category) resolves to [`TagSet::Default`], which is exactly
//! `["creative", "green spaces"]`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable photo identifier. Persisted favorites reference it.
pub type PhotoId = u32;

/// Tags used when the (category, subcategory) pair is not in the table.
pub const DEFAULT_TAGS: [&str; 2] = ["creative", "green spaces"];

/// Icon shown for "all" and for unclassified photos.
pub const DEFAULT_ICON: &str = "🖼️";

/// The closed set of top-level photo categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Flowers,
    Plants,
    Stonework,
    Gardens,
    Decor,
}

impl Category {
    /// All categories in navigation order.
    pub const ALL: [Category; 5] = [
        Category::Flowers,
        Category::Plants,
        Category::Stonework,
        Category::Gardens,
        Category::Decor,
    ];

    /// Lower-case key used in filters, markup attributes and alt text.
    pub fn key(self) -> &'static str {
        match self {
            Category::Flowers => "flowers",
            Category::Plants => "plants",
            Category::Stonework => "stonework",
            Category::Gardens => "gardens",
            Category::Decor => "decor",
        }
    }

    /// Parse an exact category key. Returns `None` for anything else,
    /// including "all".
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Long label used in the category select box.
    pub fn label(self) -> &'static str {
        match self {
            Category::Flowers => "Flowers & Bouquets",
            Category::Plants => "Plants & Greenery",
            Category::Stonework => "Stonework & Tiling",
            Category::Gardens => "Garden Projects",
            Category::Decor => "Decorative Items",
        }
    }

    /// Short name used on the quick-browse buttons.
    pub fn nav_name(self) -> &'static str {
        match self {
            Category::Flowers => "Flowers",
            Category::Plants => "Plants",
            Category::Stonework => "Stonework",
            Category::Gardens => "Gardens",
            Category::Decor => "Decor",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Flowers => "🌸",
            Category::Plants => "🌱",
            Category::Stonework => "🪨",
            Category::Gardens => "🏡",
            Category::Decor => "✨",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Finer classification within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subcategory {
    // flowers
    Bouquets,
    Arrangements,
    PottedFlowers,
    WeddingFlowers,
    GiftFlowers,
    // plants
    Cypress,
    Palms,
    Succulents,
    IndoorPlants,
    OutdoorPlants,
    // stonework
    MazerasStone,
    Tiling,
    Patio,
    Pathways,
    DecorativeStones,
    // gardens
    GardenDesign,
    Landscaping,
    Lawn,
    OutdoorProjects,
    GardenMaintenance,
    // decor
    HomeDecor,
    GardenAccessories,
    Ornaments,
    CreativeDesigns,
    SeasonalDecor,
}

impl Subcategory {
    /// Snake-case key, as it appears in alt text.
    pub fn key(self) -> &'static str {
        match self {
            Subcategory::Bouquets => "bouquets",
            Subcategory::Arrangements => "arrangements",
            Subcategory::PottedFlowers => "potted_flowers",
            Subcategory::WeddingFlowers => "wedding_flowers",
            Subcategory::GiftFlowers => "gift_flowers",
            Subcategory::Cypress => "cypress",
            Subcategory::Palms => "palms",
            Subcategory::Succulents => "succulents",
            Subcategory::IndoorPlants => "indoor_plants",
            Subcategory::OutdoorPlants => "outdoor_plants",
            Subcategory::MazerasStone => "mazeras_stone",
            Subcategory::Tiling => "tiling",
            Subcategory::Patio => "patio",
            Subcategory::Pathways => "pathways",
            Subcategory::DecorativeStones => "decorative_stones",
            Subcategory::GardenDesign => "garden_design",
            Subcategory::Landscaping => "landscaping",
            Subcategory::Lawn => "lawn",
            Subcategory::OutdoorProjects => "outdoor_projects",
            Subcategory::GardenMaintenance => "garden_maintenance",
            Subcategory::HomeDecor => "home_decor",
            Subcategory::GardenAccessories => "garden_accessories",
            Subcategory::Ornaments => "ornaments",
            Subcategory::CreativeDesigns => "creative_designs",
            Subcategory::SeasonalDecor => "seasonal_decor",
        }
    }

    /// The category this subcategory belongs to in the tag table.
    pub fn category(self) -> Category {
        use Subcategory::*;
        match self {
            Bouquets | Arrangements | PottedFlowers | WeddingFlowers | GiftFlowers => {
                Category::Flowers
            }
            Cypress | Palms | Succulents | IndoorPlants | OutdoorPlants => Category::Plants,
            MazerasStone | Tiling | Patio | Pathways | DecorativeStones => Category::Stonework,
            GardenDesign | Landscaping | Lawn | OutdoorProjects | GardenMaintenance => {
                Category::Gardens
            }
            HomeDecor | GardenAccessories | Ornaments | CreativeDesigns | SeasonalDecor => {
                Category::Decor
            }
        }
    }

    /// Human-readable form: underscores become spaces.
    pub fn display_name(self) -> String {
        self.key().replace('_', " ")
    }

    fn tags(self) -> &'static [&'static str] {
        use Subcategory::*;
        match self {
            Bouquets => &["wedding bouquets", "bridal bouquets", "romantic", "elegant"],
            Arrangements => &["flower arrangements", "centerpieces", "table decor", "event flowers"],
            PottedFlowers => &["potted flowers", "indoor flowers", "flowering plants", "home decor"],
            WeddingFlowers => &["wedding flowers", "bridal flowers", "ceremony flowers", "reception flowers"],
            GiftFlowers => &["gift flowers", "birthday flowers", "anniversary flowers", "sympathy flowers"],
            Cypress => &["italian cypress", "cypress trees", "outdoor plants", "landscaping"],
            Palms => &["palm trees", "tropical plants", "outdoor palms", "garden palms"],
            Succulents => &["succulent plants", "drought resistant", "low maintenance", "indoor succulents"],
            IndoorPlants => &["indoor plants", "house plants", "air purifying", "low light plants"],
            OutdoorPlants => &["outdoor plants", "garden plants", "landscape plants", "hardy plants"],
            MazerasStone => &["mazeras stone", "natural stone", "stone supply", "stone tiles"],
            Tiling => &["stone tiling", "floor tiles", "wall tiles", "professional tiling"],
            Patio => &["stone patio", "outdoor patio", "patio design", "stone flooring"],
            Pathways => &["stone pathways", "garden paths", "walkways", "stone paving"],
            DecorativeStones => &["decorative stones", "garden stones", "landscaping stones", "pebbles"],
            GardenDesign => &["garden design", "landscape design", "garden planning", "outdoor design"],
            Landscaping => &["landscaping", "garden landscaping", "outdoor landscaping", "professional landscaping"],
            Lawn => &["lawn installation", "grass planting", "turf installation", "lawn care"],
            OutdoorProjects => &["outdoor projects", "garden projects", "landscape projects", "construction"],
            GardenMaintenance => &["garden maintenance", "lawn care", "plant care", "landscape maintenance"],
            HomeDecor => &["home decor", "interior decor", "decorative items", "home accessories"],
            GardenAccessories => &["garden accessories", "outdoor decor", "garden ornaments", "landscape accessories"],
            Ornaments => &["garden ornaments", "decorative ornaments", "outdoor ornaments", "landscape ornaments"],
            CreativeDesigns => &["creative designs", "custom designs", "unique decor", "artistic pieces"],
            SeasonalDecor => &["seasonal decor", "holiday decor", "festive decorations", "seasonal accessories"],
        }
    }
}

/// Result of the tag lookup: a known table row or the default pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSet {
    Known(&'static [&'static str]),
    Default,
}

impl TagSet {
    pub fn as_slice(&self) -> &'static [&'static str] {
        match self {
            TagSet::Known(tags) => tags,
            TagSet::Default => &DEFAULT_TAGS,
        }
    }
}

/// Look up the tags for a classification pair.
pub fn tag_set(category: Option<Category>, subcategory: Option<Subcategory>) -> TagSet {
    match (category, subcategory) {
        (Some(cat), Some(sub)) if sub.category() == cat => TagSet::Known(sub.tags()),
        _ => TagSet::Default,
    }
}

/// Which catalog definition to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogShape {
    #[default]
    Categorized,
    Flat,
}

/// A single gallery photo. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Photo {
    pub id: PhotoId,
    pub filename: String,
    /// `{image_root}/{filename}`
    pub path: String,
    pub category: Option<Category>,
    pub subcategory: Option<Subcategory>,
    pub tags: Vec<String>,
    pub display_title: String,
    pub alt_text: String,
}

impl Photo {
    fn new(
        id: PhotoId,
        filename: &str,
        category: Option<Category>,
        subcategory: Option<Subcategory>,
        site_name: &str,
        image_root: &str,
    ) -> Self {
        // A subcategory without its category is not a valid classification.
        let subcategory = category.and(subcategory);
        let tags = tag_set(category, subcategory)
            .as_slice()
            .iter()
            .map(|t| t.to_string())
            .collect();
        let (display_title, alt_text) = match category {
            Some(cat) => {
                let alt = match subcategory {
                    Some(sub) => format!("{} - {} {} {}", site_name, cat.key(), sub.key(), id),
                    None => format!("{} - {} {}", site_name, cat.key(), id),
                };
                (capitalize(cat.key()), alt)
            }
            None => (format!("Photo {id}"), format!("{site_name} - Photo {id}")),
        };
        let root = image_root.trim_end_matches('/');
        Self {
            id,
            filename: filename.to_string(),
            path: if root.is_empty() {
                filename.to_string()
            } else {
                format!("{root}/{filename}")
            },
            category,
            subcategory,
            tags,
            display_title,
            alt_text,
        }
    }

    pub fn icon(&self) -> &'static str {
        self.category.map(Category::icon).unwrap_or(DEFAULT_ICON)
    }

    /// Badge shown on cards and in the preview: icon plus subcategory.
    pub fn badge(&self) -> String {
        match self.subcategory {
            Some(sub) => format!("{} {}", self.icon(), sub.display_name()),
            None => self.icon().to_string(),
        }
    }

    /// Case-insensitive substring match against alt text and tags.
    ///
    /// `needle` must already be lower-case and trimmed. An empty needle
    /// matches every photo.
    pub fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.alt_text.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The full ordered photo list, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Catalog {
    shape: CatalogShape,
    photos: Vec<Photo>,
}

impl Catalog {
    /// Build the static catalog for a shape. Cannot fail.
    pub fn build(shape: CatalogShape, site_name: &str, image_root: &str) -> Self {
        let photos = match shape {
            CatalogShape::Categorized => CATEGORIZED
                .iter()
                .map(|&(id, cat, sub, file)| {
                    Photo::new(id, file, Some(cat), Some(sub), site_name, image_root)
                })
                .collect(),
            CatalogShape::Flat => CATEGORIZED
                .iter()
                .map(|&(id, _, _, file)| Photo::new(id, file, None, None, site_name, image_root))
                .collect(),
        };
        Self { shape, photos }
    }

    /// Build a catalog from explicit photos, e.g. for a different site.
    ///
    /// Ids must be unique; the first occurrence of a duplicate id wins.
    pub fn from_entries(
        entries: &[CatalogEntry<'_>],
        site_name: &str,
        image_root: &str,
    ) -> Self {
        let mut seen = std::collections::HashSet::new();
        let photos: Vec<Photo> = entries
            .iter()
            .filter(|e| seen.insert(e.id))
            .map(|e| Photo::new(e.id, e.filename, e.category, e.subcategory, site_name, image_root))
            .collect();
        let shape = if photos.iter().any(|p| p.category.is_some()) {
            CatalogShape::Categorized
        } else {
            CatalogShape::Flat
        };
        Self { shape, photos }
    }

    pub fn shape(&self) -> CatalogShape {
        self.shape
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn get(&self, id: PhotoId) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PhotoId) -> bool {
        self.get(id).is_some()
    }
}

/// Input row for [`Catalog::from_entries`].
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry<'a> {
    pub id: PhotoId,
    pub filename: &'a str,
    pub category: Option<Category>,
    pub subcategory: Option<Subcategory>,
}

use Category as C;
use Subcategory as S;

/// The canonical curated catalog: 80 photos, 10 per pass through the
/// categories plus a mixed tail.
const CATEGORIZED: &[(PhotoId, Category, Subcategory, &str)] = &[
    (1, C::Flowers, S::Bouquets, "IMG-20250901-WA0018.jpg"),
    (2, C::Flowers, S::Bouquets, "IMG-20250901-WA0030.jpg"),
    (3, C::Flowers, S::Bouquets, "IMG-20250901-WA0031.jpg"),
    (4, C::Flowers, S::Arrangements, "IMG-20250901-WA0038.jpg"),
    (5, C::Flowers, S::Arrangements, "IMG-20250901-WA0039.jpg"),
    (6, C::Flowers, S::PottedFlowers, "IMG-20250901-WA0040.jpg"),
    (7, C::Flowers, S::WeddingFlowers, "IMG-20250901-WA0041.jpg"),
    (8, C::Flowers, S::WeddingFlowers, "IMG-20250901-WA0042.jpg"),
    (9, C::Flowers, S::GiftFlowers, "IMG-20250901-WA0043.jpg"),
    (10, C::Flowers, S::GiftFlowers, "IMG-20250901-WA0044.jpg"),
    (11, C::Plants, S::Cypress, "IMG-20250901-WA0045.jpg"),
    (12, C::Plants, S::Cypress, "IMG-20250901-WA0046.jpg"),
    (13, C::Plants, S::Cypress, "IMG-20250901-WA0047.jpg"),
    (14, C::Plants, S::Palms, "IMG-20250901-WA0048.jpg"),
    (15, C::Plants, S::Palms, "IMG-20250901-WA0049.jpg"),
    (16, C::Plants, S::Succulents, "IMG-20250901-WA0050.jpg"),
    (17, C::Plants, S::Succulents, "IMG-20250901-WA0051.jpg"),
    (18, C::Plants, S::IndoorPlants, "IMG-20250901-WA0052.jpg"),
    (19, C::Plants, S::IndoorPlants, "IMG-20250901-WA0053.jpg"),
    (20, C::Plants, S::OutdoorPlants, "IMG-20250901-WA0054.jpg"),
    (21, C::Stonework, S::MazerasStone, "IMG-20250901-WA0055.jpg"),
    (22, C::Stonework, S::MazerasStone, "IMG-20250901-WA0056.jpg"),
    (23, C::Stonework, S::Tiling, "IMG-20250901-WA0057.jpg"),
    (24, C::Stonework, S::Tiling, "IMG-20250901-WA0058.jpg"),
    (25, C::Stonework, S::Patio, "IMG-20250901-WA0059.jpg"),
    (26, C::Stonework, S::Patio, "IMG-20250901-WA0060.jpg"),
    (27, C::Stonework, S::Pathways, "IMG-20250901-WA0061.jpg"),
    (28, C::Stonework, S::Pathways, "IMG-20250901-WA0062.jpg"),
    (29, C::Stonework, S::DecorativeStones, "IMG-20250901-WA0063.jpg"),
    (30, C::Stonework, S::DecorativeStones, "IMG-20250901-WA0064.jpg"),
    (31, C::Gardens, S::GardenDesign, "IMG-20250901-WA0065.jpg"),
    (32, C::Gardens, S::GardenDesign, "IMG-20250901-WA0066.jpg"),
    (33, C::Gardens, S::Landscaping, "IMG-20250901-WA0067.jpg"),
    (34, C::Gardens, S::Landscaping, "IMG-20250901-WA0068.jpg"),
    (35, C::Gardens, S::Lawn, "IMG-20250901-WA0069.jpg"),
    (36, C::Gardens, S::Lawn, "IMG-20250901-WA0070.jpg"),
    (37, C::Gardens, S::OutdoorProjects, "IMG-20250901-WA0071.jpg"),
    (38, C::Gardens, S::OutdoorProjects, "IMG-20250901-WA0072.jpg"),
    (39, C::Gardens, S::GardenMaintenance, "IMG-20250901-WA0073.jpg"),
    (40, C::Gardens, S::GardenMaintenance, "IMG-20250901-WA0074.jpg"),
    (41, C::Decor, S::HomeDecor, "IMG-20250901-WA0075.jpg"),
    (42, C::Decor, S::HomeDecor, "IMG-20250901-WA0076.jpg"),
    (43, C::Decor, S::GardenAccessories, "IMG-20250901-WA0077.jpg"),
    (44, C::Decor, S::GardenAccessories, "IMG-20250901-WA0078.jpg"),
    (45, C::Decor, S::Ornaments, "IMG-20250901-WA0079.jpg"),
    (46, C::Decor, S::Ornaments, "IMG-20250901-WA0080.jpg"),
    (47, C::Decor, S::CreativeDesigns, "IMG-20250901-WA0081.jpg"),
    (48, C::Decor, S::CreativeDesigns, "IMG-20250901-WA0082.jpg"),
    (49, C::Decor, S::SeasonalDecor, "IMG-20250901-WA0083.jpg"),
    (50, C::Decor, S::SeasonalDecor, "IMG-20250901-WA0084.jpg"),
    (51, C::Flowers, S::Bouquets, "IMG-20250901-WA0085.jpg"),
    (52, C::Flowers, S::Arrangements, "IMG-20250901-WA0086.jpg"),
    (53, C::Plants, S::Cypress, "IMG-20250901-WA0087.jpg"),
    (54, C::Plants, S::Palms, "IMG-20250901-WA0088.jpg"),
    (55, C::Stonework, S::MazerasStone, "IMG-20250901-WA0089.jpg"),
    (56, C::Stonework, S::Tiling, "IMG-20250901-WA0090.jpg"),
    (57, C::Gardens, S::GardenDesign, "IMG-20250901-WA0091.jpg"),
    (58, C::Gardens, S::Landscaping, "IMG-20250901-WA0092.jpg"),
    (59, C::Decor, S::HomeDecor, "IMG-20250901-WA0093.jpg"),
    (60, C::Decor, S::GardenAccessories, "IMG-20250901-WA0094.jpg"),
    (61, C::Flowers, S::WeddingFlowers, "IMG-20250901-WA0095.jpg"),
    (62, C::Flowers, S::GiftFlowers, "IMG-20250901-WA0096.jpg"),
    (63, C::Plants, S::Succulents, "IMG-20250901-WA0097.jpg"),
    (64, C::Plants, S::IndoorPlants, "IMG-20250901-WA0098.jpg"),
    (65, C::Stonework, S::Patio, "IMG-20250901-WA0099.jpg"),
    (66, C::Stonework, S::Pathways, "IMG-20250901-WA0100.jpg"),
    (67, C::Gardens, S::Lawn, "IMG-20250901-WA0101.jpg"),
    (68, C::Gardens, S::OutdoorProjects, "IMG-20250901-WA0102.jpg"),
    (69, C::Decor, S::Ornaments, "IMG-20250901-WA0103.jpg"),
    (70, C::Decor, S::CreativeDesigns, "IMG-20250901-WA0104.jpg"),
    (71, C::Flowers, S::PottedFlowers, "IMG-20250901-WA0105.jpg"),
    (72, C::Plants, S::OutdoorPlants, "IMG-20250901-WA0106.jpg"),
    (73, C::Stonework, S::DecorativeStones, "IMG-20250901-WA0107.jpg"),
    (74, C::Gardens, S::GardenMaintenance, "IMG-20250901-WA0108.jpg"),
    (75, C::Decor, S::SeasonalDecor, "IMG-20250901-WA0109.jpg"),
    (76, C::Flowers, S::Bouquets, "IMG-20250901-WA0110.jpg"),
    (77, C::Plants, S::Cypress, "IMG-20250901-WA0114.jpg"),
    (78, C::Stonework, S::MazerasStone, "IMG-20250901-WA0115.jpg"),
    (79, C::Gardens, S::GardenDesign, "IMG-20250901-WA0116.jpg"),
    (80, C::Decor, S::HomeDecor, "IMG-20250901-WA0117.jpg"),
];

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = "Tullips Creative Green Spaces";

    fn categorized() -> Catalog {
        Catalog::build(CatalogShape::Categorized, SITE, "images/photos")
    }

    #[test]
    fn categorized_catalog_has_80_photos_in_id_order() {
        let catalog = categorized();
        assert_eq!(catalog.len(), 80);
        let ids: Vec<PhotoId> = catalog.photos().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=80).collect::<Vec<_>>());
    }

    #[test]
    fn flat_catalog_has_same_files_without_categories() {
        let catalog = Catalog::build(CatalogShape::Flat, SITE, "images/photos");
        assert_eq!(catalog.len(), 80);
        assert!(catalog.photos().iter().all(|p| p.category.is_none()));
        assert!(catalog.photos().iter().all(|p| p.subcategory.is_none()));
        assert_eq!(catalog.photos()[0].filename, "IMG-20250901-WA0018.jpg");
    }

    #[test]
    fn each_category_has_expected_count() {
        let catalog = categorized();
        for cat in Category::ALL {
            let n = catalog.photos().iter().filter(|p| p.category == Some(cat)).count();
            assert_eq!(n, 16, "category {cat}");
        }
    }

    #[test]
    fn photo_path_joins_image_root() {
        let catalog = categorized();
        assert_eq!(
            catalog.get(1).unwrap().path,
            "images/photos/IMG-20250901-WA0018.jpg"
        );
    }

    #[test]
    fn photo_path_tolerates_trailing_slash_and_empty_root() {
        let a = Catalog::build(CatalogShape::Categorized, SITE, "photos/");
        assert_eq!(a.get(1).unwrap().path, "photos/IMG-20250901-WA0018.jpg");
        let b = Catalog::build(CatalogShape::Categorized, SITE, "");
        assert_eq!(b.get(1).unwrap().path, "IMG-20250901-WA0018.jpg");
    }

    #[test]
    fn alt_text_uses_raw_subcategory_key() {
        let catalog = categorized();
        assert_eq!(
            catalog.get(7).unwrap().alt_text,
            "Tullips Creative Green Spaces - flowers wedding_flowers 7"
        );
    }

    #[test]
    fn display_title_is_capitalized_category() {
        let catalog = categorized();
        assert_eq!(catalog.get(21).unwrap().display_title, "Stonework");
    }

    #[test]
    fn flat_photo_display_strings() {
        let catalog = Catalog::build(CatalogShape::Flat, SITE, "images/photos");
        let photo = catalog.get(3).unwrap();
        assert_eq!(photo.display_title, "Photo 3");
        assert_eq!(photo.alt_text, "Tullips Creative Green Spaces - Photo 3");
        assert_eq!(photo.tags, vec!["creative", "green spaces"]);
        assert_eq!(photo.badge(), DEFAULT_ICON);
    }

    #[test]
    fn badge_replaces_underscores() {
        let catalog = categorized();
        assert_eq!(catalog.get(7).unwrap().badge(), "🌸 wedding flowers");
    }

    #[test]
    fn known_pair_uses_table_row() {
        let tags = tag_set(Some(Category::Flowers), Some(Subcategory::Bouquets));
        assert_eq!(
            tags.as_slice(),
            &["wedding bouquets", "bridal bouquets", "romantic", "elegant"]
        );
    }

    #[test]
    fn missing_subcategory_falls_back_to_default_pair() {
        assert_eq!(tag_set(Some(Category::Decor), None), TagSet::Default);
        assert_eq!(TagSet::Default.as_slice(), &["creative", "green spaces"]);
    }

    #[test]
    fn missing_category_falls_back_to_default_pair() {
        assert_eq!(tag_set(None, Some(Subcategory::Lawn)), TagSet::Default);
    }

    #[test]
    fn mismatched_pair_falls_back_to_default_pair() {
        assert_eq!(
            tag_set(Some(Category::Plants), Some(Subcategory::Bouquets)),
            TagSet::Default
        );
    }

    #[test]
    fn subcategory_without_category_is_dropped() {
        let catalog = Catalog::from_entries(
            &[CatalogEntry {
                id: 1,
                filename: "a.jpg",
                category: None,
                subcategory: Some(Subcategory::Lawn),
            }],
            SITE,
            "",
        );
        assert_eq!(catalog.get(1).unwrap().subcategory, None);
        assert_eq!(catalog.shape(), CatalogShape::Flat);
    }

    #[test]
    fn category_without_subcategory_gets_default_tags() {
        let catalog = Catalog::from_entries(
            &[CatalogEntry {
                id: 9,
                filename: "a.jpg",
                category: Some(Category::Gardens),
                subcategory: None,
            }],
            SITE,
            "",
        );
        let photo = catalog.get(9).unwrap();
        assert_eq!(photo.tags, vec!["creative", "green spaces"]);
        assert_eq!(photo.alt_text, "Tullips Creative Green Spaces - gardens 9");
        assert_eq!(catalog.shape(), CatalogShape::Categorized);
    }

    #[test]
    fn from_entries_keeps_first_duplicate() {
        let catalog = Catalog::from_entries(
            &[
                CatalogEntry { id: 1, filename: "a.jpg", category: None, subcategory: None },
                CatalogEntry { id: 1, filename: "b.jpg", category: None, subcategory: None },
            ],
            SITE,
            "",
        );
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(1).unwrap().filename, "a.jpg");
    }

    #[test]
    fn every_subcategory_maps_to_its_own_row() {
        let catalog = categorized();
        for photo in catalog.photos() {
            assert_ne!(photo.tags, vec!["creative", "green spaces"], "photo {}", photo.id);
            assert_eq!(photo.tags.len(), 4);
        }
    }

    #[test]
    fn category_key_roundtrip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_key(cat.key()), Some(cat));
        }
        assert_eq!(Category::from_key("all"), None);
        assert_eq!(Category::from_key("Flowers"), None);
    }

    #[test]
    fn search_matches_tags_and_alt_text() {
        let catalog = categorized();
        let photo = catalog.get(1).unwrap();
        assert!(photo.matches_search("wedding"));
        assert!(photo.matches_search("tullips"));
        assert!(photo.matches_search(""));
        assert!(!photo.matches_search("cypress"));
    }
}
