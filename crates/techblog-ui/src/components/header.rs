//! Page Header Component
//!
//! The site title links back home. On the home page it is a large h1;
//! everywhere else a compact h3.

use dioxus::prelude::*;
use techblog_core::{is_root, InlineStyle, Typography};

use crate::context::use_site;

/// Link target for the title on every page
pub const HOME_HREF: &str = "/";

/// Header size variants
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HeaderVariant {
    /// Home page: h1 at scale step 1.5
    Large,
    /// Any other page: h3 in the header font
    Small,
}

impl HeaderVariant {
    /// Pick the variant for a page path under the given deployment prefix
    pub fn for_path(current_path: &str, path_prefix: &str) -> Self {
        if is_root(current_path, path_prefix) {
            HeaderVariant::Large
        } else {
            HeaderVariant::Small
        }
    }

    /// HTML heading level
    pub fn level(&self) -> u8 {
        match self {
            HeaderVariant::Large => 1,
            HeaderVariant::Small => 3,
        }
    }

    /// Inline style for the heading element
    pub fn heading_style(&self, typography: &Typography) -> InlineStyle {
        match self {
            HeaderVariant::Large => typography
                .scale(1.5)
                .apply(InlineStyle::new())
                .with("margin-bottom", typography.rhythm(1.5))
                .with("margin-top", "0"),
            HeaderVariant::Small => InlineStyle::new()
                .with("font-family", typography.header_font_family())
                .with("margin-top", "0"),
        }
    }
}

/// Undecorated link that inherits the heading color
fn title_link_style() -> InlineStyle {
    InlineStyle::new()
        .with("box-shadow", "none")
        .with("text-decoration", "none")
        .with("color", "inherit")
}

#[component]
pub fn SiteHeader(variant: HeaderVariant, title: String) -> Element {
    let site = use_site();
    let heading_style = variant.heading_style(&site.typography).to_string();
    let link_style = title_link_style().to_string();

    let link = rsx! {
        a { style: "{link_style}", href: HOME_HREF, "{title}" }
    };

    match variant {
        HeaderVariant::Large => rsx! {
            h1 { style: "{heading_style}", {link} }
        },
        HeaderVariant::Small => rsx! {
            h3 { style: "{heading_style}", {link} }
        },
    }
}
