use serde::{Deserialize, Serialize};
use strum::Display;

/// Catalog slices the TMDB movie endpoints recognize.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CategoryKey {
    Trending,
    NowPlaying,
    Popular,
    TopRated,
    Upcoming,
}

impl CategoryKey {
    /// Request path relative to the API base URL.
    ///
    /// Trending lives under its own endpoint family; everything else is a
    /// plain movie list.
    pub fn path(&self) -> String {
        match self {
            CategoryKey::Trending => String::from("trending/movie/day"),
            key => format!("movie/{key}"),
        }
    }
}

/// A catalog slice as shown on the home screen: a display label plus the API
/// key that addresses it. Immutable once handed to a widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    label: String,
    key: CategoryKey,
}

impl Category {
    pub fn new(label: impl Into<String>, key: CategoryKey) -> Self {
        Self {
            label: label.into(),
            key,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn key(&self) -> CategoryKey {
        self.key
    }

    /// The fixed set of home screen sections, in page order.
    pub fn sections() -> Vec<Category> {
        vec![
            Category::new("Trending", CategoryKey::Trending),
            Category::new("Top Rated", CategoryKey::TopRated),
            Category::new("Popular", CategoryKey::Popular),
            Category::new("Upcoming Trailers", CategoryKey::Upcoming),
        ]
    }
}

/// One title record, taken verbatim from the API response. Fields the UI does
/// not show are ignored during deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
}

impl Movie {
    /// Address of the card image: the configured base URL concatenated with
    /// the record's backdrop path fragment.
    pub fn backdrop_url(&self, image_base_url: &str) -> Option<String> {
        self.backdrop_path
            .as_ref()
            .map(|path| format!("{image_base_url}{path}"))
    }
}

/// One page of a movie list response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}
