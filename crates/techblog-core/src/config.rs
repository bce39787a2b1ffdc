//! Site configuration loaded from `site.toml`.
//!
//! ```toml
//! path_prefix = "/tech-blog"
//!
//! [metadata]
//! title = "handeyeco"
//! author = "Matthew Hand"
//!
//! [metadata.social]
//! twitter = "handeyeco"
//! github = "handeyeco"
//!
//! [typography]
//! scale_ratio = 2.5
//! ```
//!
//! Every table except `metadata` is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BlogError, BlogResult};
use crate::metadata::{SiteMetadata, Social};
use crate::typography::TypographyConfig;

/// Links shown in the page footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLinks {
    pub license_url: String,
    pub license_label: String,
    pub issues_url: String,
    pub issues_label: String,
}

impl Default for FooterLinks {
    fn default() -> Self {
        Self {
            license_url: "https://creativecommons.org/licenses/by-nc-sa/4.0/".to_string(),
            license_label: "BY-NC-SA.".to_string(),
            issues_url: "https://github.com/handeyeco/tech-blog".to_string(),
            issues_label: "File a pull request or issue.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Deployment path prefix, empty when served from the domain root
    #[serde(default)]
    pub path_prefix: String,

    pub metadata: SiteMetadata,

    #[serde(default)]
    pub typography: TypographyConfig,

    #[serde(default)]
    pub footer: FooterLinks,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            path_prefix: String::new(),
            metadata: SiteMetadata::new("handeyeco", Social::new("handeyeco", "handeyeco"))
                .with_title("handeyeco tech blog"),
            typography: TypographyConfig::default(),
            footer: FooterLinks::default(),
        }
    }
}

impl SiteConfig {
    /// Read and validate a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> BlogResult<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading site config from {:?}", path);
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> BlogResult<Self> {
        let config: SiteConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would produce broken markup or styles
    pub fn validate(&self) -> BlogResult<()> {
        if self.metadata.author.trim().is_empty() {
            return Err(BlogError::InvalidConfig(
                "metadata.author must not be empty".to_string(),
            ));
        }
        if !self.path_prefix.is_empty() && !self.path_prefix.starts_with('/') {
            return Err(BlogError::InvalidConfig(format!(
                "path_prefix must start with '/': {}",
                self.path_prefix
            )));
        }

        let t = &self.typography;
        let positive = [
            ("base_font_size_px", t.base_font_size_px),
            ("base_line_height", t.base_line_height),
            ("scale_ratio", t.scale_ratio),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(BlogError::InvalidConfig(format!(
                    "typography.{} must be a positive number (got {})",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"
[metadata]
author = "Jane Doe"

[metadata.social]
twitter = "janedoe"
github = "janedoe"
"#;

    #[test]
    fn minimal_config_fills_defaults() {
        let config = SiteConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.path_prefix, "");
        assert_eq!(config.metadata.author, "Jane Doe");
        assert_eq!(config.typography, TypographyConfig::default());
        assert_eq!(config.footer, FooterLinks::default());
    }

    #[test]
    fn full_config_overrides() {
        let raw = r#"
path_prefix = "/tech-blog"

[metadata]
title = "Notes"
author = "Jane Doe"
description = "things"

[metadata.social]
twitter = "jd"
github = "janedoe"

[typography]
scale_ratio = 2.0

[footer]
issues_url = "https://example.com/issues"
"#;
        let config = SiteConfig::from_toml_str(raw).unwrap();
        assert_eq!(config.path_prefix, "/tech-blog");
        assert_eq!(config.metadata.title, "Notes");
        assert_eq!(config.typography.scale_ratio, 2.0);
        assert_eq!(config.typography.base_line_height, 1.75);
        assert_eq!(config.footer.issues_url, "https://example.com/issues");
        assert_eq!(config.footer.license_label, "BY-NC-SA.");
    }

    #[test]
    fn missing_metadata_is_a_parse_error() {
        let err = SiteConfig::from_toml_str("path_prefix = \"\"").unwrap_err();
        assert!(matches!(err, BlogError::ConfigParse(_)));
    }

    #[test]
    fn empty_author_is_rejected() {
        let raw = MINIMAL.replace("Jane Doe", " ");
        let err = SiteConfig::from_toml_str(&raw).unwrap_err();
        assert!(matches!(err, BlogError::InvalidConfig(_)));
    }

    #[test]
    fn relative_prefix_is_rejected() {
        let raw = format!("path_prefix = \"blog\"\n{}", MINIMAL);
        let err = SiteConfig::from_toml_str(&raw).unwrap_err();
        assert!(err.to_string().contains("path_prefix"));
    }

    #[test]
    fn non_positive_typography_is_rejected() {
        let raw = format!("{}\n[typography]\nscale_ratio = 0.0\n", MINIMAL);
        let err = SiteConfig::from_toml_str(&raw).unwrap_err();
        assert!(err.to_string().contains("scale_ratio"));
    }

    #[test]
    fn default_config_is_valid() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();
        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.metadata.social.github, "janedoe");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = SiteConfig::load("/definitely/not/here/site.toml").unwrap_err();
        assert!(matches!(err, BlogError::Io(_)));
    }
}
