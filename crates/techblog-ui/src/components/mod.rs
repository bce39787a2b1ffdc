//! Page components for the blog.
//!
//! All styling is inline and derived from the site's typography tokens.

mod author_bio;
mod footer;
mod header;
mod license_badge;
mod page_layout;

pub use author_bio::{AuthorBio, AuthorBioProps, STATIC_BIO_LINK, STATIC_BIO_TEXT};
pub use footer::SiteFooter;
pub use header::{HeaderVariant, SiteHeader};
pub use license_badge::{license_badge_uri, LicenseBadge};
pub use page_layout::{PageLayout, PageLayoutProps};
