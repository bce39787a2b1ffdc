//! Site metadata - author attribution and social handles.
//!
//! Resolved once from configuration and handed to components by value.
//! Nothing here queries or mutates anything.

use serde::{Deserialize, Serialize};

/// Social profile handles (bare usernames, no URL or `@`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Social {
    pub twitter: String,
    pub github: String,
}

impl Social {
    pub fn new(twitter: impl Into<String>, github: impl Into<String>) -> Self {
        Self {
            twitter: twitter.into(),
            github: github.into(),
        }
    }

    /// Twitter profile URL for the handle
    pub fn twitter_url(&self) -> String {
        format!("https://twitter.com/{}", self.twitter)
    }

    /// GitHub profile URL for the handle
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.github)
    }
}

/// Site-wide metadata consumed by the author bio.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteMetadata {
    /// Site title, also the default page title
    #[serde(default)]
    pub title: String,

    /// Author display name
    pub author: String,

    #[serde(default)]
    pub description: String,

    pub social: Social,
}

impl SiteMetadata {
    /// Metadata with just an author and social handles
    pub fn new(author: impl Into<String>, social: Social) -> Self {
        Self {
            author: author.into(),
            social,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
