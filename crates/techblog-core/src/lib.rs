//! Tech Blog Core Library
//!
//! Framework-free pieces shared by the blog's page components:
//!
//! - [`SiteMetadata`]: author name and social handles for the bio
//! - [`Typography`]: rhythm and type-scale tokens for inline styles
//! - [`Clock`]: the date source for the footer year
//! - [`SiteConfig`]: everything above, loaded from `site.toml`

pub mod clock;
pub mod config;
pub mod error;
pub mod metadata;
pub mod path;
pub mod style;
pub mod typography;

// Re-exports
pub use clock::Clock;
pub use config::{FooterLinks, SiteConfig};
pub use error::{BlogError, BlogResult};
pub use metadata::{SiteMetadata, Social};
pub use path::{is_root, root_path};
pub use style::InlineStyle;
pub use typography::{ScaleStyle, Typography, TypographyConfig};
