//! Page Layout Component
//!
//! Centered column with the site header, the page content and the footer.

use dioxus::prelude::*;
use techblog_core::InlineStyle;

use crate::components::{HeaderVariant, SiteFooter, SiteHeader};
use crate::context::use_site;

/// Properties for the PageLayout component
#[derive(Clone, PartialEq, Props)]
pub struct PageLayoutProps {
    /// Path of the page being rendered, e.g. `/posts/hello/`
    pub current_path: String,
    /// Site title shown in the header
    pub title: String,
    /// Page content, rendered as-is inside `<main>`
    pub children: Element,
}

/// Page shell shared by every page
///
/// The header variant is chosen by comparing `current_path` against the
/// site's root path; see [`HeaderVariant::for_path`].
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PageLayout {
///         current_path: "/".to_string(),
///         title: "handeyeco".to_string(),
///         AuthorBio {}
///         article { "..." }
///     }
/// }
/// ```
#[component]
pub fn PageLayout(props: PageLayoutProps) -> Element {
    let site = use_site();
    let variant = HeaderVariant::for_path(&props.current_path, &site.path_prefix);
    tracing::debug!(
        "Rendering layout for {:?} with {:?} header",
        props.current_path,
        variant
    );

    let t = &site.typography;
    let style = InlineStyle::new()
        .with("margin-left", "auto")
        .with("margin-right", "auto")
        .with("max-width", t.rhythm(24.0))
        .with("padding", format!("{} {}", t.rhythm(1.5), t.rhythm(3.0 / 4.0)))
        .to_string();

    rsx! {
        div { style: "{style}",
            header {
                SiteHeader { variant: variant, title: props.title.clone() }
            }
            main { {props.children} }
            SiteFooter {}
        }
    }
}
