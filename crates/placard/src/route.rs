//! Core traits and structs to define the pages of your website.
//!
//! Every page must implement the [`Route`] trait. Routes are then collected into a [`Router`], which is used both to build the website with [`coronate()`](crate::coronate) and to resolve request paths at runtime.
use crate::errors::{BoxError, BuildError, RouteError};
use crate::routing::{
    ParameterDef, RoutePattern, extract_params_from_raw_route, get_route_type_from_route_params,
    guess_if_route_is_endpoint,
};
use crate::sitemap::RouteSitemapMetadata;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

/// The result of a page render, can be either text, raw bytes, or an error.
///
/// Typically used through the [`From`] implementations for common types.
///
/// ## Example
/// ```rust
/// use placard::route::prelude::*;
///
/// pub struct Index;
///
/// impl Route<()> for Index {
///   fn raw_path(&self) -> &str {
///     "/"
///   }
///
///   fn render(&self, _ctx: &PageContext<()>) -> RenderResult {
///     "<h1>Hello, world!</h1>".into()
///   }
/// }
/// ```
pub enum RenderResult {
    Text(String),
    Raw(Vec<u8>),
    Err(BoxError),
}

impl<T> From<Result<T, BoxError>> for RenderResult
where
    T: Into<RenderResult>,
{
    fn from(val: Result<T, BoxError>) -> Self {
        match val {
            Ok(s) => s.into(),
            Err(e) => RenderResult::Err(e),
        }
    }
}

impl From<String> for RenderResult {
    fn from(val: String) -> Self {
        RenderResult::Text(val)
    }
}

impl From<&str> for RenderResult {
    fn from(val: &str) -> Self {
        RenderResult::Text(val.to_string())
    }
}

impl From<Vec<u8>> for RenderResult {
    fn from(val: Vec<u8>) -> Self {
        RenderResult::Raw(val)
    }
}

impl From<&[u8]> for RenderResult {
    fn from(val: &[u8]) -> Self {
        RenderResult::Raw(val.to_vec())
    }
}

/// Raw representation of the parameters passed to a page, e.g. `service => unit-trust` for `/services/unit-trust`.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct PageParams(pub FxHashMap<String, String>);

impl PageParams {
    pub fn single(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut params = Self::default();
        params.insert(key, value);
        params
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PageParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = PageParams::default();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// The list of pages a dynamic route should generate, one [`PageParams`] per page.
pub type Pages = Vec<PageParams>;

/// Allows to access the site data and the request information in a [`Route`] implementation.
///
/// `S` is the site state given to [`coronate()`](crate::coronate) or to the server, such as a content catalog.
pub struct PageContext<'a, S> {
    pub site: &'a S,
    pub params: &'a PageParams,
    /// The current path being rendered, e.g. `/services/unit-trust/`.
    pub current_path: &'a str,
    /// The base URL as defined in [`BuildOptions::base_url`](crate::BuildOptions::base_url)
    pub base_url: Option<&'a str>,
}

impl<'a, S> PageContext<'a, S> {
    pub fn param(&self, key: &str) -> Option<&'a str> {
        self.params.get(key)
    }

    /// Returns the canonical URL for the current page. If no base URL is set, this will return `None`.
    pub fn canonical_url(&self) -> Option<String> {
        self.base_url.map(|base| {
            format!(
                "{}/{}",
                base.trim_end_matches('/'),
                self.current_path.trim_start_matches('/')
            )
        })
    }
}

/// Allows to access the site data in the [`Route::pages`] method.
pub struct DynamicRouteContext<'a, S> {
    pub site: &'a S,
}

/// Must be implemented for every page of your website.
///
/// Static routes only implement [`Route::render`]. Dynamic routes (with a `[param]` segment) also list the pages to generate at build time through [`Route::pages`].
/// At runtime, a dynamic route may be rendered with any value for its parameters, so `render` must handle values that `pages` never returned.
pub trait Route<S>: Send + Sync {
    fn raw_path(&self) -> &str;

    fn pages(&self, _ctx: &DynamicRouteContext<S>) -> Pages {
        Vec::new()
    }

    fn render(&self, ctx: &PageContext<S>) -> RenderResult;

    fn sitemap_metadata(&self) -> RouteSitemapMetadata {
        RouteSitemapMetadata::default()
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum RouteType {
    Static,
    Dynamic,
}

/// A route registered in a [`Router`], along with its parsed pattern.
pub struct RouteEntry<S> {
    pattern: RoutePattern,
    params_def: Vec<ParameterDef>,
    is_endpoint: bool,
    route: Box<dyn Route<S>>,
}

impl<S> RouteEntry<S> {
    fn new(route: Box<dyn Route<S>>) -> Result<Self, RouteError> {
        let raw = route.raw_path().to_string();

        Ok(Self {
            pattern: RoutePattern::parse(&raw)?,
            params_def: extract_params_from_raw_route(&raw),
            is_endpoint: guess_if_route_is_endpoint(&raw),
            route,
        })
    }

    pub fn route(&self) -> &dyn Route<S> {
        self.route.as_ref()
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn route_type(&self) -> RouteType {
        get_route_type_from_route_params(&self.params_def)
    }

    pub fn is_endpoint(&self) -> bool {
        self.is_endpoint
    }

    pub fn url(&self, params: &PageParams) -> Result<String, RouteError> {
        build_url_with_params(
            self.pattern.raw(),
            &self.params_def,
            params,
            self.is_endpoint,
        )
    }

    pub fn file_path(&self, params: &PageParams, output_dir: &Path) -> Result<PathBuf, RouteError> {
        build_file_path_with_params(
            self.pattern.raw(),
            &self.params_def,
            params,
            output_dir,
            self.is_endpoint,
        )
    }
}

/// A route matched by [`Router::resolve`], with the parameters captured from the path.
pub struct RouteMatch<'r, S> {
    pub route: &'r dyn Route<S>,
    pub params: PageParams,
}

/// The outcome of resolving a path.
pub enum Resolution<'r, S> {
    Page(RouteMatch<'r, S>),
    /// No route matched. Carries the not-found page, if one was registered with [`Router::with_not_found`].
    NotFound(Option<&'r dyn Route<S>>),
}

/// The route table of a website.
///
/// Routes are tried in priority order: static routes first, then routes with more static segments, then declaration order.
///
/// ## Example
/// ```rust
/// use placard::route::prelude::*;
/// use placard::routes;
///
/// pub struct Index;
///
/// impl Route<()> for Index {
///   fn raw_path(&self) -> &str {
///     "/"
///   }
///
///   fn render(&self, _ctx: &PageContext<()>) -> RenderResult {
///     "<h1>Hello, world!</h1>".into()
///   }
/// }
///
/// let router = Router::new(routes![Index]).unwrap();
/// assert!(matches!(router.resolve("/"), Resolution::Page(_)));
/// ```
pub struct Router<S> {
    entries: Vec<RouteEntry<S>>,
    not_found: Option<RouteEntry<S>>,
}

impl<S> Router<S> {
    pub fn new(routes: Vec<Box<dyn Route<S>>>) -> Result<Self, RouteError> {
        let mut entries = Vec::with_capacity(routes.len());

        for route in routes {
            let entry = RouteEntry::new(route)?;

            // `/about` and `/about/` render to the same file
            if entries.iter().any(|existing: &RouteEntry<S>| {
                existing.pattern.segments() == entry.pattern.segments()
            }) {
                return Err(RouteError::DuplicateRoute {
                    route: entry.pattern.raw().to_string(),
                });
            }

            entries.push(entry);
        }

        // Stable, so routes of equal priority keep their declaration order
        entries.sort_by_key(|entry| {
            (
                entry.route_type() == RouteType::Dynamic,
                std::cmp::Reverse(entry.pattern.static_segment_count()),
            )
        });

        Ok(Self {
            entries,
            not_found: None,
        })
    }

    /// Registers the page rendered when no route matches a path. It is also built, usually as `404.html`.
    pub fn with_not_found(mut self, route: impl Route<S> + 'static) -> Result<Self, RouteError> {
        self.not_found = Some(RouteEntry::new(Box::new(route))?);
        Ok(self)
    }

    pub fn resolve(&self, path: &str) -> Resolution<'_, S> {
        for entry in &self.entries {
            if let Some(params) = entry.pattern.matches(path) {
                return Resolution::Page(RouteMatch {
                    route: entry.route(),
                    params,
                });
            }
        }

        Resolution::NotFound(self.not_found.as_ref().map(|entry| entry.route()))
    }

    /// Every registered route in priority order, without the not-found page.
    pub fn entries(&self) -> &[RouteEntry<S>] {
        &self.entries
    }

    pub fn not_found(&self) -> Option<&RouteEntry<S>> {
        self.not_found.as_ref()
    }
}

pub fn build_url_with_params(
    route_template: &str,
    params_def: &[ParameterDef],
    params: &PageParams,
    is_endpoint: bool,
) -> Result<String, RouteError> {
    let mut result = replace_params(route_template, params_def, params)?;

    // Collapse consecutive slashes
    let parts: Vec<&str> = result.split('/').filter(|s| !s.is_empty()).collect();
    result = parts.join("/");

    // Ensure leading slash
    if !result.starts_with('/') {
        result.insert(0, '/');
    }

    // Ensure trailing slash for non-endpoints
    if !is_endpoint && !result.ends_with('/') {
        result.push('/');
    }

    Ok(result)
}

pub fn build_file_path_with_params(
    route_template: &str,
    params_def: &[ParameterDef],
    params: &PageParams,
    output_dir: &Path,
    is_endpoint: bool,
) -> Result<PathBuf, RouteError> {
    let route = replace_params(route_template, params_def, params)?;

    let mut path = PathBuf::from(output_dir);
    path.extend(route.split('/').filter(|s| !s.is_empty()));

    // Always `<route>/index.html`, most static hosts serve those for `/<route>/` without configuration.
    if !is_endpoint {
        path.push("index.html");
    }

    Ok(path)
}

fn replace_params(
    route_template: &str,
    params_def: &[ParameterDef],
    params: &PageParams,
) -> Result<String, RouteError> {
    let mut result = route_template.to_string();

    // Replace from the end, so earlier indices stay valid when replacements have a different length
    for param_def in params_def.iter().rev() {
        let value = params
            .get(&param_def.key)
            .ok_or_else(|| RouteError::MissingParameter {
                route: route_template.to_string(),
                key: param_def.key.clone(),
            })?;

        result.replace_range(
            param_def.index..param_def.index + param_def.length,
            value,
        );
    }

    Ok(result)
}

/// Boxes a route for a [`Router`], used by the [`routes!`](crate::routes) macro.
pub fn boxed_route<S, R: Route<S> + 'static>(route: R) -> Box<dyn Route<S>> {
    Box::new(route)
}

/// Turns a render result into the bytes written to disk or sent over the wire.
pub fn finish_route(render_result: RenderResult, route: &str) -> Result<Vec<u8>, BuildError> {
    match render_result {
        RenderResult::Text(html) => Ok(html.into_bytes()),
        RenderResult::Raw(content) => Ok(content),
        RenderResult::Err(source) => Err(BuildError::Render {
            route: route.to_string(),
            source,
        }),
    }
}

pub mod prelude {
    //! Re-exports of the most commonly used types and traits for defining routes.
    //!
    //! This module is meant to be glob imported in your routes files.
    //!
    //! ## Example
    //! ```rust
    //! use placard::route::prelude::*;
    //! ```
    pub use super::{
        DynamicRouteContext, PageContext, PageParams, Pages, RenderResult, Resolution, Route,
        RouteMatch, Router,
    };
    pub use crate::errors::BoxError;
    pub use crate::sitemap::{ChangeFreq, RouteSitemapMetadata};
}
