use maud::{DOCTYPE, Markup, html};
use placard::maud::generator;
use placard::route::PageContext;

mod footer;
mod header;

pub use footer::footer;
pub use header::{header, is_current};

use crate::site::Site;

pub const SITE_NAME: &str = "Advisor Consultancy";

pub struct SeoMeta {
    pub title: String,
    pub description: Option<String>,
    pub canonical_url: Option<String>,
}

impl Default for SeoMeta {
    fn default() -> Self {
        Self {
            title: SITE_NAME.to_string(),
            description: Some(
                "Advisor Consultancy is Malaysia's premier financial agency, an authorized agency of Investing Agency Investors Berhad.".to_string(),
            ),
            canonical_url: None,
        }
    }
}

impl SeoMeta {
    pub fn new(title: &str, description: &str, ctx: &PageContext<Site>) -> Self {
        Self {
            title: title.to_string(),
            description: Some(description.to_string()),
            canonical_url: ctx.canonical_url(),
        }
    }

    pub fn formatted_title(&self) -> String {
        if self.title == SITE_NAME {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, SITE_NAME)
        }
    }

    pub fn render(&self) -> Markup {
        let formatted_title = self.formatted_title();

        let description = self
            .description
            .clone()
            .or_else(|| SeoMeta::default().description)
            .unwrap_or_default();

        html! {
            title { (formatted_title) }
            meta name="description" content=(description);

            // Open Graph
            meta property="og:title" content=(formatted_title);
            meta property="og:description" content=(description);
            meta property="og:type" content="website";
            @if let Some(canonical_url) = &self.canonical_url {
                meta property="og:url" content=(canonical_url);
                link rel="canonical" href=(canonical_url);
            }

            meta name="twitter:card" content="summary";
            meta name="twitter:title" content=(formatted_title);
            meta name="twitter:description" content=(description);
        }
    }
}

/// Wraps a page's content with the top bar, the navigation and the footer.
pub fn layout(main: Markup, ctx: &PageContext<Site>, seo: Option<SeoMeta>) -> Markup {
    let seo_data = seo.unwrap_or_default();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (generator())
                link rel="stylesheet" href="/style.css";
                (seo_data.render())
            }
            body {
                (header(ctx))
                main { (main) }
                (footer(ctx))
            }
        }
    }
}

/// The red uppercase label and the heading that open most sections.
pub fn section_heading(label: &str, heading: &str) -> Markup {
    html! {
        h2.eyebrow { (label) }
        h3.section-title { (heading) }
    }
}
