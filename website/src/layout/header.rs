use maud::{Markup, html};
use placard::route::PageContext;

use crate::site::Site;

const TOP_LINKS: [(&str, &str); 3] = [
    ("Investor Relations", "/investor-relations/"),
    ("Sustainability", "/sustainability/"),
    ("Newsroom", "/newsroom/"),
];

const NAV_LINKS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("Services", "/services/"),
    ("Career", "/career/"),
    ("About", "/about/"),
    ("Contact", "/contact/"),
];

/// Whether `href` is the page at `current_path`, or the section it belongs to. Trailing slashes are ignored.
pub fn is_current(current_path: &str, href: &str) -> bool {
    let current = current_path.trim_end_matches('/');
    let href = href.trim_end_matches('/');

    if href.is_empty() {
        return current.is_empty();
    }

    current == href
        || current
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn nav_link(ctx: &PageContext<Site>, label: &str, href: &str) -> Markup {
    html! {
        @if is_current(ctx.current_path, href) {
            a.nav-link.active href=(href) aria-current="page" { (label) }
        } @else {
            a.nav-link href=(href) { (label) }
        }
    }
}

pub fn header(ctx: &PageContext<Site>) -> Markup {
    html! {
        div.top-bar {
            div.container {
                span { "Authorized Agency of Investing Agency Investors Berhad" }
                nav aria-label="Corporate" {
                    @for (label, href) in TOP_LINKS {
                        (nav_link(ctx, label, href))
                    }
                }
            }
        }
        header.site-header {
            div.container {
                a.logo href="/" {
                    span.logo-main { "ADVISOR" }
                    span.logo-sub { "CONSULTANCY" }
                }
                nav.main-nav aria-label="Main" {
                    @for (label, href) in NAV_LINKS {
                        @if href == "/services/" {
                            div.dropdown {
                                (nav_link(ctx, label, href))
                                div.dropdown-menu {
                                    p.dropdown-title { "Our Solutions" }
                                    ul {
                                        @for summary in ctx.site.catalog.summaries() {
                                            li {
                                                a href=(summary.id.url()) {
                                                    span.dropdown-name { (summary.name) }
                                                    span.dropdown-desc { (summary.menu_desc) }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        } @else {
                            (nav_link(ctx, label, href))
                        }
                    }
                }
                a.btn.btn-primary href="/join-us/" { "Join Us" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_page_detection() {
        assert!(is_current("/", "/"));
        assert!(!is_current("/about/", "/"));
        assert!(is_current("/about", "/about/"));
        assert!(is_current("/services/prs/", "/services/"));
        assert!(!is_current("/servicesx", "/services/"));
        assert!(!is_current("/career/", "/contact/"));
    }
}
