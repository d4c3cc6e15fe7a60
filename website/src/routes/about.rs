use maud::{Markup, html};
use placard::route::prelude::*;

use crate::layout::{SeoMeta, layout, section_heading};
use crate::site::Site;

pub struct About;

const VALUES: [(&str, &str); 4] = [
    ("Integrity", "We do what is right, even when no one is looking."),
    ("Innovation", "Always seeking better ways to serve our clients."),
    ("Excellence", "Striving for perfection in everything we do."),
    ("Teamwork", "Collaborating to achieve greater success together."),
];

/// (name, role, portrait)
const LEADERSHIP: [(&str, &str, &str); 3] = [
    (
        "Dato' Ahmad Razali",
        "Agency Manager",
        "https://picsum.photos/seed/leader1/400/400",
    ),
    (
        "Sarah Tan",
        "Senior Unit Manager",
        "https://picsum.photos/seed/leader2/400/400",
    ),
    (
        "Michael Wong",
        "Training Director",
        "https://picsum.photos/seed/leader3/400/400",
    ),
];

const BAND_VALUES: [(&str, &str); 3] = [
    ("Integrity", "Always putting client interests first in every decision."),
    ("Excellence", "Striving for the highest standards in financial consulting."),
    ("Growth", "Continuous learning and development for our team."),
];

/// The agency introduction shown at the bottom of the home page.
pub fn about_band() -> Markup {
    html! {
        section.section.brand {
            div.container {
                (section_heading("About Us", "A Trusted Partner of Investing Agency Investors Berhad"))
                p.lead {
                    "Based in Petaling Jaya and Wangsa Maju, Advisor Consultancy operates as a high-performing agency under the umbrella of Investing Agency Investors Berhad. We leverage decades of institutional expertise to deliver boutique-level service to our clients."
                }
                div.grid-3 {
                    @for (title, desc) in BAND_VALUES {
                        div.card {
                            h4 { (title) }
                            p { (desc) }
                        }
                    }
                }
            }
        }
    }
}

impl Route<Site> for About {
    fn raw_path(&self) -> &str {
        "/about"
    }

    fn render(&self, ctx: &PageContext<Site>) -> RenderResult {
        layout(
            html! {
                section.page-hero {
                    div.container {
                        h1 { "Our Story" }
                        p.lead {
                            "Advisor Consultancy was founded with a simple vision: to bridge the gap between institutional financial expertise and everyday Malaysians."
                        }
                    }
                }
                section.section {
                    div.container {
                        img.wide src="https://picsum.photos/seed/office/1200/500" alt="Office" loading="lazy";
                        div.grid-2 {
                            div {
                                h2 { "Our Mission" }
                                p {
                                    "To empower individuals and families to achieve financial freedom through expert advice, ethical practices, and innovative financial solutions. We strive to be the most trusted financial agency in Malaysia."
                                }
                            }
                            div {
                                h2 { "Our Vision" }
                                p {
                                    "To create a legacy of financial literacy and wealth creation across Malaysia, transforming the lives of our clients and our consultants through excellence and integrity."
                                }
                            }
                        }
                    }
                }
                section.section.muted {
                    div.container {
                        (section_heading("Our Values", "What Drives Us"))
                        div.grid-4 {
                            @for (title, desc) in VALUES {
                                div.card {
                                    h4 { (title) }
                                    p { (desc) }
                                }
                            }
                        }
                    }
                }
                section.section {
                    div.container {
                        h2.section-title { "Leadership Team" }
                        div.grid-3 {
                            @for (name, role, image) in LEADERSHIP {
                                div.person {
                                    img src=(image) alt=(name) loading="lazy";
                                    h4 { (name) }
                                    p { (role) }
                                }
                            }
                        }
                    }
                }
            },
            ctx,
            Some(SeoMeta::new(
                "About Us",
                "Our story, mission, vision, values and leadership team.",
                ctx,
            )),
        )
        .into()
    }
}
