use std::path::PathBuf;

use crate::sitemap::SitemapOptions;

/// Placard build options. Should be passed to [`coronate()`](crate::coronate()).
///
/// ## Examples
/// Custom values:
/// ```rust
/// use placard::{BuildOptions, SitemapOptions};
///
/// let options = BuildOptions {
///   base_url: Some("https://example.com".into()),
///   output_dir: "public".into(),
///   sitemap: SitemapOptions {
///     enabled: true,
///     ..Default::default()
///   },
///   ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Base URL for the site, e.g. `https://example.com` or `https://example.com/subdir`.
    /// This value is used to generate canonical URLs and the sitemap, and is available to pages through [`PageContext::base_url`](crate::route::PageContext::base_url).
    pub base_url: Option<String>,

    pub output_dir: PathBuf,

    /// Files in this directory are copied as-is to the output directory. Skipped if the directory doesn't exist.
    pub static_dir: PathBuf,

    /// Whether to remove the output directory before building.
    pub clean_output_dir: bool,

    /// Options for sitemap generation. See [`SitemapOptions`] for configuration.
    pub sitemap: SitemapOptions,
}

/// Provides default values for [`crate::coronate()`]. Designed to work for most projects.
impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            output_dir: "dist".into(),
            static_dir: "static".into(),
            clean_output_dir: true,
            sitemap: SitemapOptions::default(),
        }
    }
}
