use maud::html;
use placard::route::prelude::*;

use crate::layout::{SeoMeta, layout};
use crate::site::Site;

pub struct Sustainability;

const PILLARS: [(&str, &str); 3] = [
    (
        "Environmental",
        "We prioritize investments in companies that demonstrate strong environmental stewardship, focusing on renewable energy, resource efficiency, and climate resilience.",
    ),
    (
        "Social",
        "We believe in supporting businesses that value human capital, promote diversity and inclusion, and contribute positively to the communities they operate in.",
    ),
    (
        "Governance",
        "Strong corporate governance is essential for long-term value creation. We advocate for transparency, accountability, and ethical leadership in all our portfolio companies.",
    ),
];

const APPROACHES: [&str; 4] = [
    "Negative Screening",
    "Positive Tilting",
    "Active Engagement",
    "Thematic Investing",
];

impl Route<Site> for Sustainability {
    fn raw_path(&self) -> &str {
        "/sustainability"
    }

    fn render(&self, ctx: &PageContext<Site>) -> RenderResult {
        layout(
            html! {
                section.page-hero {
                    div.container {
                        h1 { "Sustainability at Advisor Consultancy" }
                        p.lead {
                            "Our commitment to Environmental, Social, and Governance (ESG) principles drives our investment philosophy and corporate actions."
                        }
                    }
                }
                section.section {
                    div.container {
                        div.grid-3 {
                            @for (title, desc) in PILLARS {
                                div.card {
                                    h3 { (title) }
                                    p { (desc) }
                                }
                            }
                        }
                        div.split {
                            div {
                                h2 { "Our ESG Integration Process" }
                                p {
                                    "ESG factors are not just an \"add-on\" to our investment process; they are deeply integrated into our fundamental analysis. We use a combination of proprietary research and third-party data to assess the sustainability profile of every investment opportunity."
                                }
                                ul.checklist {
                                    @for approach in APPROACHES {
                                        li { (approach) }
                                    }
                                }
                            }
                            img src="https://picsum.photos/seed/esg/800/600" alt="ESG" loading="lazy";
                        }
                    }
                }
            },
            ctx,
            Some(SeoMeta::new(
                "Sustainability",
                "Our Environmental, Social, and Governance commitments.",
                ctx,
            )),
        )
        .into()
    }
}
