//! Server-side rendering of components to HTML strings.
//!
//! Each call builds a fresh `VirtualDom` with the [`SiteContext`] as root
//! context, renders it once and serializes it. Nothing is kept between
//! calls.

use dioxus::dioxus_core::ComponentFunction;
use dioxus::prelude::*;
use techblog_core::SiteMetadata;

use crate::components::{AuthorBio, AuthorBioProps, PageLayout};
use crate::context::SiteContext;

/// Whether and how a page shows the author bio
#[derive(Clone, Debug, PartialEq, Default)]
pub enum BioMode {
    #[default]
    Hidden,
    /// Fixed bio text
    Static,
    /// Bio filled in from metadata
    Metadata(SiteMetadata),
}

/// Everything needed to render one page
#[derive(Clone, Debug, PartialEq)]
pub struct PageRequest {
    pub current_path: String,
    pub title: String,
    pub bio: BioMode,
    /// Pre-rendered HTML placed verbatim in the content slot
    pub body_html: String,
}

impl PageRequest {
    pub fn new(current_path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
            title: title.into(),
            bio: BioMode::Hidden,
            body_html: String::new(),
        }
    }

    pub fn with_bio(mut self, bio: BioMode) -> Self {
        self.bio = bio;
        self
    }

    pub fn with_body_html(mut self, html: impl Into<String>) -> Self {
        self.body_html = html.into();
        self
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct PageDocumentProps {
    pub request: PageRequest,
}

/// Full page: layout, optional bio and the raw content body
#[component]
pub fn PageDocument(props: PageDocumentProps) -> Element {
    let PageRequest {
        current_path,
        title,
        bio,
        body_html,
    } = props.request;
    let bio = match bio {
        BioMode::Hidden => None,
        BioMode::Static => Some(None),
        BioMode::Metadata(metadata) => Some(Some(metadata)),
    };

    rsx! {
        PageLayout {
            current_path: current_path,
            title: title,
            if let Some(metadata) = bio {
                AuthorBio { metadata: metadata }
            }
            div { class: "page-content", dangerous_inner_html: "{body_html}" }
        }
    }
}

/// Render a root component that takes no props
pub fn render_app(app: fn() -> Element, site: &SiteContext) -> String {
    let mut dom = VirtualDom::new(app).with_root_context(site.clone());
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render any component with the given props
pub fn render_with_props<P, M>(
    root: impl ComponentFunction<P, M>,
    props: P,
    site: &SiteContext,
) -> String
where
    P: Clone + 'static,
    M: 'static,
{
    let mut dom = VirtualDom::new_with_props(root, props).with_root_context(site.clone());
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a full page
pub fn render_page(site: &SiteContext, request: PageRequest) -> String {
    tracing::debug!("Rendering page {:?}", request.current_path);
    render_with_props(PageDocument, PageDocumentProps { request }, site)
}

/// Render only the author bio
pub fn render_bio(site: &SiteContext, metadata: Option<SiteMetadata>) -> String {
    render_with_props(AuthorBio, AuthorBioProps { metadata }, site)
}
