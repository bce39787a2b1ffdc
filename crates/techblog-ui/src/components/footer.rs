//! Page footer: license badge, year, license link and issue link.

use dioxus::prelude::*;
use techblog_core::InlineStyle;

use crate::components::LicenseBadge;
use crate::context::use_site;

const NBSP: &str = "\u{a0}";

#[component]
pub fn SiteFooter() -> Element {
    let site = use_site();
    // One clock read per render
    let year = site.clock.current_year();

    let style = InlineStyle::new()
        .with("display", "flex")
        .with("align-items", "center")
        .with("font-size", "0.8em")
        .to_string();

    let license_url = site.footer.license_url.clone();
    let license_label = site.footer.license_label.clone();
    let issues_url = site.footer.issues_url.clone();
    let issues_label = site.footer.issues_label.clone();

    rsx! {
        footer { style: "{style}",
            LicenseBadge {}
            "{NBSP}{year}{NBSP}"
            a { href: "{license_url}", "{license_label}" }
            "{NBSP}See a typo?{NBSP}"
            a { href: "{issues_url}", "{issues_label}" }
        }
    }
}
