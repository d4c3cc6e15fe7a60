use maud::html;
use placard::route::prelude::*;

use crate::layout::{SeoMeta, layout, section_heading};
use crate::site::Site;

pub struct Career;

const BENEFITS: [(&str, &str); 6] = [
    ("Unlimited Income", "Your earnings are directly tied to your performance. No income ceiling."),
    ("Flexible Hours", "Be your own boss and manage your own schedule for a better work-life balance."),
    ("Mentorship", "Learn from the best in the industry with our structured training programs."),
    ("Recognition", "Get rewarded with incentive trips, awards, and public recognition."),
    ("Fast Track", "Clear path to management and leadership roles within the agency."),
    ("Impact", "Help people achieve their financial dreams and secure their futures."),
];

const SUPPORT: [&str; 4] = [
    "Weekly training sessions",
    "Digital sales tools and CRM",
    "Marketing support and leads",
    "Professional certification assistance",
];

impl Route<Site> for Career {
    fn raw_path(&self) -> &str {
        "/career"
    }

    fn render(&self, ctx: &PageContext<Site>) -> RenderResult {
        layout(
            html! {
                section.hero style="background-image: url('https://picsum.photos/seed/career-hero/1920/1080')" {
                    div.container {
                        h1 { "Join the Elite Agency" }
                        p.lead {
                            "We are looking for ambitious individuals who want to build a rewarding career in financial consulting. Start your journey with Advisor Consultancy today."
                        }
                        a.btn.btn-primary href="/join-us/" { "Apply Now" }
                    }
                }
                section.section {
                    div.container {
                        (section_heading("Benefits", "Why Join Advisor Consultancy?"))
                        div.grid-3 {
                            @for (title, desc) in BENEFITS {
                                div.card {
                                    h4 { (title) }
                                    p { (desc) }
                                }
                            }
                        }
                    }
                }
                section.section.muted {
                    div.container.split {
                        img src="https://picsum.photos/seed/training/800/600" alt="Training" loading="lazy";
                        div {
                            (section_heading("Training & Support", "We Invest in Your Success"))
                            p {
                                "New consultants undergo a rigorous 90-day onboarding program that covers product knowledge, sales techniques, and financial planning fundamentals. You'll be paired with a senior mentor who will guide you every step of the way."
                            }
                            ul.checklist {
                                @for item in SUPPORT {
                                    li { (item) }
                                }
                            }
                        }
                    }
                }
            },
            ctx,
            Some(SeoMeta::new(
                "Career",
                "Build a rewarding career in financial consulting with Advisor Consultancy.",
                ctx,
            )),
        )
        .into()
    }
}
