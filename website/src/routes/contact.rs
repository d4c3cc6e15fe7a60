use maud::{Markup, html};
use placard::route::prelude::*;

use crate::layout::{SeoMeta, layout, section_heading};
use crate::site::Site;

pub struct Contact;

/// (name, location, kind)
const LOCATIONS: [(&str, &str, &str); 3] = [
    ("PJ Hub", "Petaling Jaya", "Main Branch"),
    ("Wangsa Maju Center", "Kuala Lumpur", "Regional Office"),
    ("Klang Valley Team", "Selangor", "Mobile Consultants"),
];

const FAQ: [(&str, &str); 4] = [
    (
        "How do I start investing in Unit Trusts?",
        "You can start by scheduling a consultation with one of our certified advisors who will assess your risk profile and goals.",
    ),
    (
        "What are the requirements to join as a consultant?",
        "We look for individuals with a minimum of SPM qualification, a positive attitude, and a strong desire to learn and grow.",
    ),
    (
        "Is there a minimum investment amount?",
        "Minimum investment amounts vary depending on the fund, but some start as low as RM 1,000.",
    ),
    (
        "Where are your offices located?",
        "Our main offices are in Petaling Jaya and Wangsa Maju, but we serve clients throughout the Klang Valley.",
    ),
];

const OPENING_HOURS: [&str; 3] = [
    "Monday - Friday: 9:00 AM - 6:00 PM",
    "Saturday: By Appointment Only",
    "Sunday: Closed",
];

fn channels() -> Markup {
    html! {
        div.grid-3 {
            div.card {
                h4 { "Our Offices" }
                p { "Petaling Jaya & Wangsa Maju, Klang Valley, Malaysia" }
            }
            div.card {
                h4 { "Call Us" }
                p { "+60 3-XXXX XXXX" }
            }
            div.card {
                h4 { "Email" }
                p { a href="mailto:info@advisorconsultancy.com.my" { "info@advisorconsultancy.com.my" } }
            }
        }
    }
}

impl Route<Site> for Contact {
    fn raw_path(&self) -> &str {
        "/contact"
    }

    fn render(&self, ctx: &PageContext<Site>) -> RenderResult {
        layout(
            html! {
                section.page-hero {
                    div.container {
                        h1 { "Contact Us" }
                        p.lead { "Have questions or ready to start? Reach out to us through any of the channels below." }
                    }
                }
                section.section {
                    div.container {
                        (section_heading("Get In Touch", "Ready to start your investment journey or join our elite team?"))
                        p { "Contact us today for a consultation." }
                        (channels())
                    }
                }
                section.section.muted {
                    div.container {
                        (section_heading("Find an Expert", "Locate an Advisor Near You"))
                        p { "Search for our certified consultants by location or expertise to get personalized financial advice." }
                        div.grid-3 {
                            @for (name, location, kind) in LOCATIONS {
                                div.card {
                                    span.badge { (kind) }
                                    h4 { (name) }
                                    p { (location) }
                                }
                            }
                        }
                    }
                }
                section.section {
                    div.container.split {
                        div {
                            h2.section-title { "Frequently Asked Questions" }
                            dl.faq {
                                @for (question, answer) in FAQ {
                                    dt { (question) }
                                    dd { (answer) }
                                }
                            }
                        }
                        div.card.dark {
                            h3 { "Visit Our Office" }
                            p { "We'd love to host you for a coffee and a chat about your financial future." }
                            @for line in OPENING_HOURS {
                                p { (line) }
                            }
                        }
                    }
                }
            },
            ctx,
            Some(SeoMeta::new(
                "Contact Us",
                "Reach Advisor Consultancy in Petaling Jaya and Wangsa Maju.",
                ctx,
            )),
        )
        .into()
    }
}
