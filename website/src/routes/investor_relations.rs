use maud::html;
use placard::route::prelude::*;

use crate::layout::{SeoMeta, layout};
use crate::site::Site;

pub struct InvestorRelations;

/// (title, size)
const REPORTS: [(&str, &str); 4] = [
    ("Annual Report 2023", "4.5 MB"),
    ("Interim Report Q3 2023", "2.1 MB"),
    ("Sustainability Report 2023", "3.8 MB"),
    ("Corporate Presentation Dec 2023", "5.2 MB"),
];

const POLICIES: [&str; 4] = [
    "Board Charter",
    "Code of Ethics",
    "Whistleblowing Policy",
    "Anti-Bribery & Corruption Policy",
];

impl Route<Site> for InvestorRelations {
    fn raw_path(&self) -> &str {
        "/investor-relations"
    }

    fn render(&self, ctx: &PageContext<Site>) -> RenderResult {
        layout(
            html! {
                section.page-hero {
                    div.container {
                        h1 { "Investor Relations" }
                        p.lead { "Providing transparency and value to our stakeholders through timely and accurate information." }
                    }
                }
                section.section {
                    div.container.grid-2 {
                        div {
                            h2 { "Financial Reports" }
                            ul.documents {
                                @for (title, size) in REPORTS {
                                    li {
                                        strong { (title) }
                                        span.meta { (size) " | PDF" }
                                    }
                                }
                            }
                        }
                        div {
                            h2 { "Corporate Governance" }
                            p {
                                "We are committed to maintaining the highest standards of corporate governance. Our board of directors and management team work together to ensure that our operations are conducted with integrity and transparency."
                            }
                            ul.checklist {
                                @for policy in POLICIES {
                                    li { (policy) }
                                }
                            }
                        }
                    }
                }
            },
            ctx,
            Some(SeoMeta::new(
                "Investor Relations",
                "Financial reports and corporate governance.",
                ctx,
            )),
        )
        .into()
    }
}
