use maud::{Markup, html};
use placard::route::prelude::*;

use crate::catalog::{ServiceLookup, ServiceRecord};
use crate::layout::{SeoMeta, layout};
use crate::site::Site;

/// Shown in place of a service's content when its identifier is not in the catalog.
pub const SERVICE_NOT_FOUND: &str = "Service not found.";

pub struct ServicesIndex;

impl Route<Site> for ServicesIndex {
    fn raw_path(&self) -> &str {
        "/services"
    }

    fn render(&self, ctx: &PageContext<Site>) -> RenderResult {
        layout(
            html! {
                section.page-hero {
                    div.container {
                        h1 { "Our Financial Products" }
                        p.lead {
                            "Explore our wide range of financial solutions designed to help you build, protect, and manage your wealth effectively."
                        }
                    }
                }
                section.section {
                    div.container.service-list {
                        @for summary in ctx.site.catalog.summaries() {
                            article.service-row {
                                img src=(summary.listing_image) alt=(summary.name) loading="lazy";
                                div {
                                    h2 { (summary.name) }
                                    p { (summary.short_desc) }
                                    a.btn.btn-primary href=(summary.id.url()) { "Learn More" }
                                }
                            }
                        }
                    }
                }
            },
            ctx,
            Some(SeoMeta::new(
                "Our Services",
                "Unit trusts, retirement schemes, insurance, medical coverage, estate planning and corporate solutions.",
                ctx,
            )),
        )
        .into()
    }
}

/// `/services/[service]`. Every catalog entry is prerendered; at runtime any identifier may reach [`Route::render`].
pub struct ServiceDetail;

impl Route<Site> for ServiceDetail {
    fn raw_path(&self) -> &str {
        "/services/[service]"
    }

    fn pages(&self, ctx: &DynamicRouteContext<Site>) -> Pages {
        ctx.site
            .catalog
            .iter()
            .map(|(id, _)| PageParams::single("service", id.as_str()))
            .collect()
    }

    fn render(&self, ctx: &PageContext<Site>) -> RenderResult {
        let identifier = ctx.param("service").unwrap_or_default();

        let page = match ctx.site.catalog.lookup(identifier) {
            ServiceLookup::Found(record) => layout(
                service_page(record),
                ctx,
                Some(SeoMeta::new(&record.title, &record.long_desc, ctx)),
            ),
            ServiceLookup::NotFound => layout(
                html! {
                    section.section {
                        div.container.service-missing { (SERVICE_NOT_FOUND) }
                    }
                },
                ctx,
                Some(SeoMeta::new("Service not found", SERVICE_NOT_FOUND, ctx)),
            ),
        };

        page.into()
    }
}

fn service_page(record: &ServiceRecord) -> Markup {
    html! {
        section.page-hero style={ "background-image: url('" (record.image) "')" } {
            div.container {
                h1 { (record.title) }
            }
        }
        section.section {
            div.container.detail-grid {
                div.detail-main {
                    h2 { "Overview" }
                    p.lead { (record.long_desc) }

                    @for section in record.detailed_sections.iter().flatten() {
                        div.detail-section {
                            h3 { (section.title) }
                            p { (section.content) }
                        }
                    }

                    h2 { "Key Benefits" }
                    ul.checklist {
                        @for benefit in &record.benefits {
                            li { (benefit) }
                        }
                    }

                    @if let Some(gallery) = &record.gallery {
                        h2 { "Product Gallery" }
                        div.grid-3 {
                            @for (idx, image) in gallery.iter().enumerate() {
                                img src=(image) alt={ (record.title) " gallery " (idx + 1) } loading="lazy";
                            }
                        }
                    }
                }
                aside.detail-sidebar {
                    h3 { "Interested in " (record.title) "?" }
                    p { "Our certified advisors are ready to help you tailor a plan that fits your specific needs and goals." }
                    a.btn.btn-primary href="/contact/" { "Consult an Expert" }
                    ul.contact-lines {
                        li { "+60 3-1234 5678" }
                        li { "info@advisorconsultancy.com" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ServiceId};

    fn site() -> Site {
        Site::new(Catalog::builtin().unwrap())
    }

    fn render_detail(site: &Site, identifier: Option<&str>) -> String {
        let params = match identifier {
            Some(identifier) => PageParams::single("service", identifier),
            None => PageParams::default(),
        };
        let ctx = PageContext {
            site,
            params: &params,
            current_path: "/services/test/",
            base_url: None,
        };

        match ServiceDetail.render(&ctx) {
            RenderResult::Text(html) => html,
            _ => panic!("expected HTML"),
        }
    }

    #[test]
    fn prerenders_every_catalog_key() {
        let site = site();
        let pages = ServiceDetail.pages(&DynamicRouteContext { site: &site });

        let keys: Vec<&str> = pages
            .iter()
            .filter_map(|params| params.get("service"))
            .collect();
        assert_eq!(
            keys,
            ServiceId::ALL.iter().map(|id| id.as_str()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn renders_a_found_service() {
        let html = render_detail(&site(), Some("prs"));

        assert!(html.contains("<h1>Private Retirement Schemes (PRS)</h1>"));
        assert!(html.contains("Key Benefits"));
        assert!(html.contains("Product Gallery"));
        assert!(html.contains("alt=\"Private Retirement Schemes (PRS) gallery 3\""));
        assert!(!html.contains(SERVICE_NOT_FOUND));
    }

    #[test]
    fn renders_detailed_sections_in_order() {
        let html = render_detail(&site(), Some("corporate"));

        let first = html.find("Empowering Your Workforce").unwrap();
        let second = html.find("Business Continuity Planning").unwrap();
        assert!(first < second);
    }

    #[test]
    fn unknown_or_missing_identifiers_render_the_fallback() {
        let site = site();

        for identifier in [Some("nonexistent"), Some(""), None] {
            let html = render_detail(&site, identifier);
            assert!(html.contains("<div class=\"container service-missing\">Service not found.</div>"));
            assert!(!html.contains("Key Benefits"));
        }
    }

    #[test]
    fn listing_links_to_every_service() {
        let site = site();
        let params = PageParams::default();
        let ctx = PageContext {
            site: &site,
            params: &params,
            current_path: "/services/",
            base_url: None,
        };

        let RenderResult::Text(html) = ServicesIndex.render(&ctx) else {
            panic!("expected HTML");
        };
        for id in ServiceId::ALL {
            assert!(html.contains(&format!("href=\"/services/{}/\"", id)));
        }
        assert!(html.contains("Our Financial Products"));
        assert!(html.contains("aria-current=\"page\""));
    }
}
