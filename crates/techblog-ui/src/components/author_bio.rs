//! Author Bio Component
//!
//! Short attribution paragraph with links to the author's profiles.
//!
//! With metadata the author name and links are filled in from the social
//! handles. Without it a fixed paragraph is rendered instead, so a missing
//! metadata record never breaks a page.

use dioxus::prelude::*;
use techblog_core::{InlineStyle, SiteMetadata};

use crate::context::use_site;

/// Bio text used when no metadata is supplied
pub const STATIC_BIO_TEXT: &str =
    "Written by handeyeco, a community organizer, artist, and developer in Austin, TX.";

/// Profile link used when no metadata is supplied
pub const STATIC_BIO_LINK: &str = "https://github.com/handeyeco";

/// Properties for the AuthorBio component
#[derive(Clone, PartialEq, Props)]
pub struct AuthorBioProps {
    /// Resolved site metadata; `None` renders the fixed bio
    #[props(default)]
    pub metadata: Option<SiteMetadata>,
}

/// Author attribution block
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     AuthorBio { metadata: Some(config.metadata.clone()) }
///
///     // Fixed text, no interpolation
///     AuthorBio {}
/// }
/// ```
#[component]
pub fn AuthorBio(props: AuthorBioProps) -> Element {
    let site = use_site();
    let style = InlineStyle::new()
        .with("display", "flex")
        .with("margin-bottom", site.typography.rhythm(2.5))
        .to_string();

    match props.metadata {
        Some(metadata) => {
            let author = metadata.author.clone();
            let twitter_url = metadata.social.twitter_url();
            let github_url = metadata.social.github_url();

            rsx! {
                div { class: "author-bio", style: "{style}",
                    p {
                        "Written by {author} - community organizer, artist, and developer in Austin, TX. "
                        "Find me on "
                        a { href: "{twitter_url}", "Twitter" }
                        " and "
                        a { href: "{github_url}", "Github" }
                        "."
                    }
                }
            }
        }
        None => rsx! {
            div { class: "author-bio", style: "{style}",
                p {
                    "{STATIC_BIO_TEXT} "
                    a { href: STATIC_BIO_LINK, "Find me on Github" }
                    "."
                }
            }
        },
    }
}
