use chrono::{Datelike, Utc};
use maud::{Markup, html};
use placard::route::PageContext;

use crate::catalog::ServiceId;
use crate::site::Site;

const CORPORATE_LINKS: [(&str, &str); 5] = [
    ("About Advisor Consultancy", "/about/"),
    ("Investing Agency Investors Berhad", "/investor-relations/"),
    ("Sustainability", "/sustainability/"),
    ("Career Opportunities", "/career/"),
    ("Newsroom", "/newsroom/"),
];

const PRODUCT_LINKS: [(&str, ServiceId); 5] = [
    ("Unit Trust Funds", ServiceId::UnitTrust),
    ("Private Retirement Schemes", ServiceId::Prs),
    ("Life Insurance & Takaful", ServiceId::Insurance),
    ("Medical & Health", ServiceId::Medical),
    ("Estate Planning", ServiceId::Estate),
];

// No pages behind these yet.
const REGULATORY: [&str; 5] = [
    "PDPA Notice",
    "Security & Fraud",
    "Terms of Use",
    "Disclaimer",
    "Client Charter",
];

pub fn footer(_: &PageContext<Site>) -> Markup {
    html! {
        footer.site-footer {
            div.container.footer-grid {
                div {
                    a.logo href="/" {
                        span.logo-main { "ADVISOR" }
                        span.logo-sub { "CONSULTANCY" }
                    }
                    p {
                        "Advisor Consultancy is a high-performing agency under Investing Agency Investors Berhad. We specialize in unit trust investments, financial planning, and wealth management."
                    }
                }
                div {
                    h4 { "Corporate" }
                    ul {
                        @for (label, href) in CORPORATE_LINKS {
                            li { a href=(href) { (label) } }
                        }
                    }
                }
                div {
                    h4 { "Products" }
                    ul {
                        @for (label, id) in PRODUCT_LINKS {
                            li { a href=(id.url()) { (label) } }
                        }
                    }
                }
                div {
                    h4 { "Regulatory" }
                    ul {
                        @for label in REGULATORY {
                            li { (label) }
                        }
                    }
                }
            }
            div.container.footer-bottom {
                p {
                    "© " (Utc::now().year()) " Advisor Consultancy. All rights reserved. Advisor Consultancy is an authorized agency of Investing Agency Investors Berhad."
                }
                a href="/sitemap.xml" { "Sitemap" }
            }
        }
    }
}
