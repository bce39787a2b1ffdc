//! Site context provider for page components.
//!
//! Typography, the deployment prefix, footer links and the clock are
//! resolved once per render and injected at the root of the tree.
//!
//! ## Usage
//!
//! ```ignore
//! // At the root of a render
//! let dom = VirtualDom::new(app).with_root_context(SiteContext::from_config(&config, Clock::System));
//!
//! // In child components
//! let site = use_site();
//! let margin = site.typography.rhythm(1.5);
//! ```

use dioxus::prelude::*;
use techblog_core::{Clock, FooterLinks, SiteConfig, Typography};

/// Read-only render configuration shared by all components.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SiteContext {
    /// Deployment path prefix (may be empty)
    pub path_prefix: String,
    pub typography: Typography,
    /// Date source for the footer year
    pub clock: Clock,
    pub footer: FooterLinks,
}

impl SiteContext {
    pub fn from_config(config: &SiteConfig, clock: Clock) -> Self {
        Self {
            path_prefix: config.path_prefix.clone(),
            typography: Typography::new(config.typography.clone()),
            clock,
            footer: config.footer.clone(),
        }
    }

    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = prefix.into();
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

/// Hook to access the site context.
///
/// Falls back to defaults when no context was provided so that a
/// component rendered on its own still produces sensible markup.
pub fn use_site() -> SiteContext {
    try_use_context::<SiteContext>().unwrap_or_else(|| {
        tracing::warn!("No SiteContext provided, rendering with defaults");
        SiteContext::default()
    })
}
