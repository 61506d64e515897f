use serde::{Deserialize, Serialize};

/// Type of content
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Series,
}

/// Represents a movie or TV show in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Show {
    /// Stable identifier (e.g., "stranger-things")
    pub id: String,
    pub title: String,
    /// Genre tags; order carries no meaning
    pub genres: Vec<String>,
    /// Release year
    pub year: i32,
    pub content_type: ContentType,
    /// Ids of the services carrying this title; empty when it streams nowhere
    #[serde(default)]
    pub services: Vec<String>,
    /// Popularity on a 1-10 scale
    #[serde(default)]
    pub popularity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub description: String,
}

impl Show {
    /// Creates a show with no availability, popularity, or rating
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        year: i32,
        content_type: ContentType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            genres: Vec::new(),
            year,
            content_type,
            services: Vec::new(),
            popularity: 0.0,
            rating: None,
            description: String::new(),
        }
    }

    /// Marks the show as available on the given services
    pub fn available_on<I, S>(mut self, service_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.services.extend(service_ids.into_iter().map(Into::into));
        self
    }

    /// Adds genre tags
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres.extend(genres.into_iter().map(Into::into));
        self
    }

    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = popularity;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Checks if the show streams on the given service
    pub fn is_on(&self, service_id: &str) -> bool {
        self.services.iter().any(|s| s == service_id)
    }
}
