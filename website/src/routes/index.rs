use maud::html;
use placard::route::prelude::*;

use crate::layout::{SeoMeta, layout, section_heading};
use crate::routes::about::about_band;
use crate::site::Site;

pub struct Index;

const STATS: [(&str, &str); 4] = [
    ("500+", "Consultants Trained"),
    ("RM 1B+", "Assets Managed"),
    ("15+", "Years Excellence"),
    ("98%", "Success Rate"),
];

/// (title, date, category, image)
const LATEST_NEWS: [(&str, &str, &str, &str); 3] = [
    (
        "Investing Agency Investors Wins Multiple Awards at Refinitiv Lipper Fund Awards 2024",
        "Feb 15, 2024",
        "Awards",
        "https://picsum.photos/seed/news1/600/400",
    ),
    (
        "Market Outlook: Navigating Global Economic Shifts in Q1 2024",
        "Jan 28, 2024",
        "Insights",
        "https://picsum.photos/seed/news2/600/400",
    ),
    (
        "Advisor Consultancy Expands Mentorship Program to Wangsa Maju Hub",
        "Jan 10, 2024",
        "Agency",
        "https://picsum.photos/seed/news3/600/400",
    ),
];

const REASONS: [(&str, &str); 4] = [
    ("Expert Advice", "Certified consultants with years of experience."),
    ("Custom Solutions", "Tailored plans for your unique goals."),
    ("Proven Results", "A track record of consistent growth."),
    ("Global Reach", "Access to international markets."),
];

/// (award, year, awarding body)
const AWARDS: [(&str, &str, &str); 4] = [
    ("Best Fund House", "2023", "Refinitiv Lipper"),
    ("Top Agency", "2022", "Investing Agency Investors"),
    ("Excellence in PRS", "2023", "FIMM"),
    ("Best Wealth Manager", "2021", "Alpha Southeast Asia"),
];

/// (name, role, quote, portrait)
const TESTIMONIALS: [(&str, &str, &str, &str); 3] = [
    (
        "Tan Sri Dr. Lim",
        "Business Owner",
        "Advisor Consultancy has been instrumental in managing my corporate wealth. Their association with Investing Agency gives me the confidence that my investments are in safe hands.",
        "https://picsum.photos/seed/client1/100/100",
    ),
    (
        "Siti Aminah",
        "Senior Engineer",
        "The PRS and Unit Trust advice I received was top-notch. I finally feel like my retirement is on the right track thanks to their professional guidance.",
        "https://picsum.photos/seed/client2/100/100",
    ),
    (
        "David Richardson",
        "Expatriate",
        "As an expat in Malaysia, navigating the local financial landscape was daunting. The team here made it seamless and helped me secure my family's future.",
        "https://picsum.photos/seed/client3/100/100",
    ),
];

const CAREER_POINTS: [&str; 5] = [
    "Structured Mentorship Program",
    "High Performance Culture",
    "Unlimited Income Potential",
    "Comprehensive Training & Support",
    "Incentive Trips & Recognition",
];

impl Route<Site> for Index {
    fn raw_path(&self) -> &str {
        "/"
    }

    fn render(&self, ctx: &PageContext<Site>) -> RenderResult {
        layout(
            html! {
                section.hero style="background-image: url('https://picsum.photos/seed/corporate/1920/1080')" {
                    div.container {
                        span.badge { "Authorized Agency under Investing Agency Investors" }
                        h1 { "Master Your Wealth, " br; span.accent { "Build Your Future." } }
                        p.lead {
                            "Advisor Consultancy is Malaysia's premier financial agency. We transform individuals into professional consultants while managing wealth with precision and integrity."
                        }
                        div.actions {
                            a.btn.btn-primary href="/contact/" { "Get Started" }
                            a.btn.btn-ghost href="/services/" { "Our Services" }
                        }
                    }
                }

                section.stats {
                    div.container.grid-4 {
                        @for (value, label) in STATS {
                            div.stat {
                                strong { (value) }
                                span { (label) }
                            }
                        }
                    }
                }

                section.section {
                    div.container {
                        (section_heading("Our Expertise", "Comprehensive Financial Solutions"))
                        div.grid-3 {
                            @for summary in ctx.site.catalog.summaries() {
                                article.card {
                                    h4 { (summary.name) }
                                    p { (summary.short_desc) }
                                    a.link href=(summary.id.url()) { "Learn More" }
                                }
                            }
                        }
                    }
                }

                section.section.muted {
                    div.container {
                        div.section-header {
                            (section_heading("Newsroom", "Latest Insights & Updates"))
                            a.link href="/newsroom/" { "View All News" }
                        }
                        div.grid-3 {
                            @for (title, date, category, image) in LATEST_NEWS {
                                article.card {
                                    img src=(image) alt=(title) loading="lazy";
                                    span.badge { (category) }
                                    div.meta { (date) }
                                    h4 { (title) }
                                    a.link href="/newsroom/" { "Read More" }
                                }
                            }
                        }
                    }
                }

                section.section {
                    div.container.split {
                        div {
                            (section_heading("Why Choose Us", "Your Financial Success is Our Mission"))
                            p {
                                "At Advisor Consultancy, we combine the institutional strength of Investing Agency Investors with the personalized touch of a boutique agency. We are committed to helping you navigate the complexities of the financial world."
                            }
                            div.grid-2 {
                                @for (title, desc) in REASONS {
                                    div.feature {
                                        h4 { (title) }
                                        p { (desc) }
                                    }
                                }
                            }
                        }
                        img src="https://picsum.photos/seed/success/800/600" alt="Success" loading="lazy";
                    }
                }

                section.section.dark {
                    div.container {
                        (section_heading("Recognition", "Awards & Accolades"))
                        p { "Our commitment to excellence has been recognized by the industry's most prestigious bodies." }
                        div.grid-4 {
                            @for (title, year, body) in AWARDS {
                                div.award {
                                    h4 { (title) }
                                    p.year { (year) }
                                    p { (body) }
                                }
                            }
                        }
                    }
                }

                section.section {
                    div.container {
                        (section_heading("Testimonials", "What Our Clients Say"))
                        p { "Real stories from individuals and businesses who have achieved financial growth with our help." }
                        div.grid-3 {
                            @for (name, role, quote, image) in TESTIMONIALS {
                                figure.testimonial {
                                    img src=(image) alt=(name) loading="lazy";
                                    figcaption {
                                        strong { (name) }
                                        span { (role) }
                                    }
                                    blockquote { "\"" (quote) "\"" }
                                }
                            }
                        }
                    }
                }

                section.section.muted {
                    div.container.split {
                        img src="https://picsum.photos/seed/mentorship/800/1000" alt="Mentorship" loading="lazy";
                        div {
                            (section_heading("Career Growth", "Transform Your Career Into a Professional Legacy"))
                            p {
                                "We don't just hire consultants; we build leaders. Our mentorship program in Klang Valley is designed to take you from ground zero to a high-performing financial professional."
                            }
                            ul.checklist {
                                @for point in CAREER_POINTS {
                                    li { (point) }
                                }
                            }
                            a.btn.btn-dark href="/join-us/" { "Join Our Agency" }
                        }
                    }
                }

                section.section {
                    div.container.split {
                        img src="https://picsum.photos/seed/sustainability/800/600" alt="Sustainability" loading="lazy";
                        div {
                            (section_heading("Sustainability", "Investing in a Better Tomorrow"))
                            p {
                                "We believe that sustainable growth is the only way forward. Advisor Consultancy is committed to ESG (Environmental, Social, and Governance) principles, ensuring that our investments contribute positively to society and the environment."
                            }
                            a.btn.btn-dark href="/sustainability/" { "Our ESG Commitment" }
                        }
                    }
                }

                section.section.callout {
                    div.container {
                        h3 { "Not sure where to start?" }
                        p { "Take our 2-minute risk assessment to find the investment strategy that matches your personality and goals." }
                        a.btn.btn-primary href="/contact/" { "Start Assessment" }
                    }
                }

                (about_band())
            },
            ctx,
            Some(SeoMeta {
                canonical_url: ctx.canonical_url(),
                ..Default::default()
            }),
        )
        .into()
    }
}
