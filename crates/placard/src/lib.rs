#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Modules the end-user will interact directly or indirectly with
pub mod errors;
pub mod logging;
pub mod route;
pub mod sitemap;

mod routing;

// Exports for end-users
pub use build::metadata::{BuildOutput, PageOutput, StaticFileOutput};
pub use build::options::BuildOptions;
pub use routing::{RoutePattern, Segment};
pub use sitemap::SitemapOptions;

mod build;
mod templating;

#[cfg(feature = "maud")]
#[cfg_attr(docsrs, doc(cfg(feature = "maud")))]
pub mod maud {
    //! Helpers for [Maud](https://maud.lambda.xyz), a macro for writing HTML templates.
    //!
    //! ## Example
    //! ```rust
    //! use placard::route::prelude::*;
    //! use maud::html;
    //!
    //! pub struct Index;
    //!
    //! impl Route<()> for Index {
    //!   fn raw_path(&self) -> &str {
    //!     "/"
    //!   }
    //!
    //!   fn render(&self, _ctx: &PageContext<()>) -> RenderResult {
    //!     html! {
    //!       h1 { "Hello, world!" }
    //!     }
    //!     .into()
    //!   }
    //! }
    //! ```
    pub use crate::templating::maud_ext::*;
}

use build::execute_build;
use logging::init_logging;
use route::Router;

#[macro_export]
/// Collects the routes of a website, to be given to [`Router::new`](crate::route::Router::new).
///
/// ## Example
/// ```rust
/// use placard::{coronate, routes, route::Router, BuildOptions};
///
/// # mod routes {
/// #   use placard::route::prelude::*;
/// #   pub struct Index;
/// #   impl Route<()> for Index {
/// #      fn raw_path(&self) -> &str { "/" }
/// #      fn render(&self, _ctx: &PageContext<()>) -> RenderResult {
/// #          "Hello, world!".into()
/// #      }
/// #   }
/// #   pub struct About;
/// #   impl Route<()> for About {
/// #      fn raw_path(&self) -> &str { "/about" }
/// #      fn render(&self, _ctx: &PageContext<()>) -> RenderResult {
/// #          "About us".into()
/// #      }
/// #   }
/// # }
///
/// let router = Router::new(routes![routes::Index, routes::About]).unwrap();
/// assert_eq!(router.entries().len(), 2);
/// ```
macro_rules! routes {
    [$($route:expr),* $(,)?] => {
        vec![$($crate::route::boxed_route($route)),*]
    };
}

/// The version of Placard being used.
///
/// Can be used to create a generator tag in the output HTML.
///
/// ## Example
/// ```rust
/// use placard::GENERATOR;
///
/// format!("<meta name=\"generator\" content=\"{}\">", GENERATOR);
/// ```
pub const GENERATOR: &str = concat!("Placard v", env!("CARGO_PKG_VERSION"));

/// Placard entrypoint. Starts the build process and generates the output files.
///
/// ## Example
/// Should be called from the main function of the binary crate.
/// ```rust,no_run
/// use placard::{coronate, routes, route::Router, BuildOptions};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///   let router: Router<()> = Router::new(routes![])?;
///   coronate(&router, &(), BuildOptions::default())?;
///   Ok(())
/// }
/// ```
pub fn coronate<S: Sync>(
    router: &Router<S>,
    site: &S,
    options: BuildOptions,
) -> Result<BuildOutput, Box<dyn std::error::Error>> {
    init_logging();

    Ok(execute_build(router, site, &options)?)
}
