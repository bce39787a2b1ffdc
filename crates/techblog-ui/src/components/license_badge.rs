//! Creative Commons badge shown in the footer.

use dioxus::prelude::*;

// Embed the badge as a data URI so pages have no asset dependency
const CREATIVE_COMMONS_SVG: &[u8] = include_bytes!("../../assets/creative-commons.svg");

pub fn license_badge_uri() -> String {
    use base64::Engine;
    let base64 = base64::engine::general_purpose::STANDARD.encode(CREATIVE_COMMONS_SVG);
    format!("data:image/svg+xml;base64,{}", base64)
}

#[component]
pub fn LicenseBadge() -> Element {
    rsx! {
        img {
            class: "license-badge",
            style: "height:1rem;width:1rem;",
            src: "{license_badge_uri()}",
            alt: "Creative Commons",
        }
    }
}
