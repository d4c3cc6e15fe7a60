//! The Advisor Consultancy website: a catalog of financial services and the pages presenting them.
use std::path::{Path, PathBuf};

use placard::errors::RouteError;
use placard::route::Router;
use placard::{BuildOptions, SitemapOptions, routes};

pub mod catalog;
pub mod layout;
pub mod routes;
pub mod site;

use routes::*;
use site::Site;

pub const DEFAULT_BASE_URL: &str = "https://advisorconsultancy.com.my";

/// The stylesheet and other files copied as-is into the build, and served by the live server.
pub fn static_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("static")
}

/// Every page of the website, with [`NotFound`] as the catch-all.
pub fn router() -> Result<Router<Site>, RouteError> {
    Router::new(routes![
        Index,
        ServicesIndex,
        ServiceDetail,
        Career,
        About,
        Contact,
        JoinUs,
        InvestorRelations,
        Sustainability,
        Newsroom
    ])?
    .with_not_found(NotFound)
}

/// Build options for the website. The sitemap is generated whenever a base URL is given.
pub fn build_options(output_dir: PathBuf, base_url: Option<String>) -> BuildOptions {
    BuildOptions {
        sitemap: SitemapOptions {
            enabled: base_url.is_some(),
            ..Default::default()
        },
        base_url,
        output_dir,
        static_dir: static_dir(),
        ..Default::default()
    }
}
