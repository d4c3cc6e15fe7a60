use maud::html;
use placard::route::prelude::*;

use crate::layout::{SeoMeta, layout};
use crate::site::Site;

pub struct JoinUs;

const REASONS: [(&str, &str); 4] = [
    (
        "Institutional Strength",
        "Backed by Investing Agency Investors Berhad, one of Malaysia's leading asset management firms.",
    ),
    (
        "Proven Mentorship",
        "Learn directly from top-tier managers who have built successful careers from scratch.",
    ),
    (
        "Digital-First Tools",
        "Access to cutting-edge CRM and sales platforms to manage your clients efficiently.",
    ),
    (
        "Global Recognition",
        "Qualify for international conventions and industry-leading awards.",
    ),
];

impl Route<Site> for JoinUs {
    fn raw_path(&self) -> &str {
        "/join-us"
    }

    fn render(&self, ctx: &PageContext<Site>) -> RenderResult {
        layout(
            html! {
                section.page-hero.dark {
                    div.container {
                        h1 { "Start Your Journey" }
                        p.lead {
                            "Become a part of Malaysia's fastest-growing financial consultancy agency. We provide the tools, you provide the ambition."
                        }
                    }
                }
                section.section {
                    div.container.split {
                        div {
                            h2.section-title { "Why Advisor Consultancy?" }
                            @for (title, desc) in REASONS {
                                div.feature {
                                    h4 { (title) }
                                    p { (desc) }
                                }
                            }
                        }
                        div.card {
                            h3 { "How to Apply" }
                            p {
                                "Send us your name, phone number, highest qualification and why you want to join us. Our agency managers will get back to you for an introductory session."
                            }
                            a.btn.btn-primary href="mailto:info@advisorconsultancy.com.my?subject=Application" { "Apply by Email" }
                            p { "Prefer to talk first? " a href="/contact/" { "Contact us" } "." }
                        }
                    }
                }
            },
            ctx,
            Some(SeoMeta::new(
                "Join Us",
                "Become a financial consultant with Advisor Consultancy.",
                ctx,
            )),
        )
        .into()
    }
}
