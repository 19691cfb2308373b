//! The static artwork catalog and its browse operations.

mod seed;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub use seed::{Testimonial, TESTIMONIALS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Family,
    Baby,
    Couple,
    Single,
    #[serde(rename = "Wall Art")]
    WallArt,
    #[serde(rename = "Color Art")]
    ColorArt,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Family,
        Category::Baby,
        Category::Couple,
        Category::Single,
        Category::WallArt,
        Category::ColorArt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Family => "Family",
            Self::Baby => "Baby",
            Self::Couple => "Couple",
            Self::Single => "Single",
            Self::WallArt => "Wall Art",
            Self::ColorArt => "Color Art",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("Invalid category: {}", s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selector for the shop and portfolio views. `All` disables it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "All" => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "price-low")]
    PriceLow,
    #[serde(rename = "price-high")]
    PriceHigh,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub price: u32,
    pub image: String,
    pub description: String,
    pub delivery_time: String,
}

impl Artwork {
    fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BrowseQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

#[derive(Clone, Debug)]
pub struct Catalog {
    artwork: Vec<Artwork>,
}

impl Catalog {
    pub fn new(artwork: Vec<Artwork>) -> Self {
        Self { artwork }
    }

    pub fn seeded() -> Self {
        Self::new(seed::artwork_seed())
    }

    pub fn all(&self) -> &[Artwork] {
        &self.artwork
    }

    pub fn find(&self, id: &str) -> Option<&Artwork> {
        self.artwork.iter().find(|artwork| artwork.id == id)
    }

    /// Shop view: search on title or description, category filter, then sort.
    pub fn browse(&self, query: &BrowseQuery) -> Vec<&Artwork> {
        let needle = query.search.to_lowercase();
        let mut found: Vec<&Artwork> = self
            .artwork
            .iter()
            .filter(|artwork| needle.is_empty() || artwork.mentions(&needle))
            .filter(|artwork| query.category.matches(artwork.category))
            .collect();

        match query.sort {
            SortKey::Name => found.sort_by_cached_key(|artwork| artwork.title.to_lowercase()),
            SortKey::PriceLow => found.sort_by_key(|artwork| artwork.price),
            SortKey::PriceHigh => found.sort_by(|a, b| b.price.cmp(&a.price)),
        }
        found
    }

    /// Portfolio view: category filter only, catalog order.
    pub fn portfolio(&self, filter: CategoryFilter) -> Vec<&Artwork> {
        self.artwork
            .iter()
            .filter(|artwork| filter.matches(artwork.category))
            .collect()
    }

    pub fn category_tags() -> Vec<&'static str> {
        std::iter::once("All")
            .chain(Category::ALL.iter().map(Category::as_str))
            .collect()
    }
}
