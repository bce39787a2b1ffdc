//! Tech Blog UI Components
//!
//! Dioxus components for the blog's page shell and author bio, rendered
//! to static HTML with `dioxus-ssr`.
//!
//! - [`PageLayout`]: header (large on the home page, compact elsewhere),
//!   content slot and license footer
//! - [`AuthorBio`]: attribution paragraph with social links
//!
//! Components read typography, path prefix and clock from a
//! [`SiteContext`] injected at the root of each render.

#![allow(non_snake_case)]

pub mod components;
pub mod context;
pub mod render;

pub use components::*;
pub use context::{use_site, SiteContext};
pub use render::{
    render_app, render_bio, render_page, render_with_props, BioMode, PageDocument,
    PageDocumentProps, PageRequest,
};
