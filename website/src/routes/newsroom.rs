use maud::html;
use placard::route::prelude::*;

use crate::layout::{SeoMeta, layout};
use crate::site::Site;

pub struct Newsroom;

struct Article {
    title: &'static str,
    date: &'static str,
    category: &'static str,
    image: &'static str,
    content: &'static str,
}

const ARTICLES: [Article; 3] = [
    Article {
        title: "Investing Agency Investors Wins Multiple Awards at Refinitiv Lipper Fund Awards 2024",
        date: "Feb 15, 2024",
        category: "Awards",
        image: "https://picsum.photos/seed/news1/800/500",
        content: "Investing Agency Investors Berhad has once again demonstrated its investment prowess by securing multiple prestigious awards at the Refinitiv Lipper Fund Awards 2024. This recognition underscores our commitment to delivering consistent, risk-adjusted returns for our investors across various asset classes.",
    },
    Article {
        title: "Market Outlook: Navigating Global Economic Shifts in Q1 2024",
        date: "Jan 28, 2024",
        category: "Insights",
        image: "https://picsum.photos/seed/news2/800/500",
        content: "As we enter the first quarter of 2024, global markets continue to face a complex landscape of inflationary pressures, shifting interest rate expectations, and geopolitical developments. Our investment team provides an in-depth analysis of these trends and how they impact portfolio strategies.",
    },
    Article {
        title: "Advisor Consultancy Expands Mentorship Program to Wangsa Maju Hub",
        date: "Jan 10, 2024",
        category: "Agency",
        image: "https://picsum.photos/seed/news3/800/500",
        content: "In line with our mission to transform individuals into professional financial consultants, Advisor Consultancy is proud to announce the expansion of our structured mentorship program to our new hub in Wangsa Maju. This move aims to provide better support for our growing team in the region.",
    },
];

impl Route<Site> for Newsroom {
    fn raw_path(&self) -> &str {
        "/newsroom"
    }

    fn render(&self, ctx: &PageContext<Site>) -> RenderResult {
        layout(
            html! {
                section.page-hero {
                    div.container {
                        h1 { "Newsroom" }
                        p.lead {
                            "Stay updated with the latest news, market insights, and agency developments from Advisor Consultancy and Investing Agency Investors."
                        }
                    }
                }
                section.section {
                    div.container.articles {
                        @for article in &ARTICLES {
                            article.article-row {
                                img src=(article.image) alt=(article.title) loading="lazy";
                                div {
                                    div.meta { (article.category) " | " (article.date) }
                                    h2 { (article.title) }
                                    p { (article.content) }
                                }
                            }
                        }
                    }
                }
            },
            ctx,
            Some(SeoMeta::new(
                "Newsroom",
                "News, market insights and agency developments.",
                ctx,
            )),
        )
        .into()
    }
}
