use maud::html;
use placard::route::prelude::*;

use crate::layout::{SeoMeta, layout};
use crate::site::Site;

/// Rendered for every path no other route matches.
pub struct NotFound;

impl Route<Site> for NotFound {
    fn raw_path(&self) -> &str {
        "404.html"
    }

    fn render(&self, ctx: &PageContext<Site>) -> RenderResult {
        layout(
            html! {
                section.section.not-found {
                    div.container {
                        h1 { "404 - Page Not Found" }
                        p.lead { "The page you are looking for does not exist or has been moved." }
                        a.btn.btn-primary href="/" { "Back to Home" }
                    }
                }
            },
            ctx,
            Some(SeoMeta {
                title: "404 - Page Not Found".to_string(),
                description: Some(
                    "The page you are looking for does not exist or has been moved.".to_string(),
                ),
                ..Default::default()
            }),
        )
        .into()
    }

    fn sitemap_metadata(&self) -> RouteSitemapMetadata {
        RouteSitemapMetadata {
            exclude: Some(true),
            ..Default::default()
        }
    }
}
