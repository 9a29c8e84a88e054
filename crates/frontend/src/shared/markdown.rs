//! Markdown rendering for offer copy
//!
//! Markdown is converted to HTML with `pulldown-cmark` and then passed through
//! `ammonia`, which strips anything unsafe and rewrites every anchor so that
//! it opens in a new browsing context without leaking referrer or opener.

use leptos::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Attributes forced onto every rendered hyperlink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOverride {
    pub target: &'static str,
    pub rel: &'static str,
    pub class: &'static str,
}

impl Default for LinkOverride {
    fn default() -> Self {
        Self {
            target: "_blank",
            rel: "noopener noreferrer",
            class: "markdown__link",
        }
    }
}

/// Render a Markdown string into sanitized HTML.
pub fn render_markdown(source: &str, links: &LinkOverride) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH);
    let mut raw_html = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut raw_html, parser);

    ammonia::Builder::default()
        .link_rel(Some(links.rel))
        .set_tag_attribute_value("a", "target", links.target)
        .set_tag_attribute_value("a", "class", links.class)
        .clean(&raw_html)
        .to_string()
}

/// Markdown block with the default link override
#[component]
pub fn Markdown(
    /// Markdown source
    #[prop(into)]
    source: String,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let html = render_markdown(&source, &LinkOverride::default());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("markdown {}", additional_class()) inner_html=html></div>
    }
}
