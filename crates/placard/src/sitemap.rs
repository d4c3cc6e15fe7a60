use std::fs;
use std::io;
use std::path::Path;

/// Metadata for sitemap configuration on a specific route.
#[derive(Debug, Clone, Default)]
pub struct RouteSitemapMetadata {
    /// Whether to exclude this route from the sitemap
    pub exclude: Option<bool>,
    /// Change frequency for this route
    pub changefreq: Option<ChangeFreq>,
    /// Priority for this route (0.0 to 1.0)
    pub priority: Option<f32>,
}

/// Options for sitemap generation.
#[derive(Debug, Clone)]
pub struct SitemapOptions {
    /// Whether to generate a sitemap. Requires [`BuildOptions::base_url`](crate::BuildOptions::base_url). Default: `false`
    pub enabled: bool,
    /// The filename of the sitemap. Default: `"sitemap.xml"`
    pub filename: String,
    /// Default change frequency for pages. Default: `None`
    pub default_changefreq: Option<ChangeFreq>,
    /// Default priority for pages. Default: `None`
    pub default_priority: Option<f32>,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            filename: "sitemap.xml".to_string(),
            default_changefreq: None,
            default_priority: None,
        }
    }
}

/// Change frequency values for sitemap entries.
///
/// See: https://www.sitemaps.org/protocol.html#changefreqdef for more details.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    fn as_str(&self) -> &str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

/// Represents a single URL entry in the sitemap.
#[derive(Debug)]
pub struct SitemapEntry {
    pub loc: String,
    pub changefreq: Option<ChangeFreq>,
    pub priority: Option<f32>,
}

impl SitemapEntry {
    /// Builds the entry of a generated page, falling back to the defaults of `options` for anything the route doesn't set.
    pub fn for_page(
        base_url: &str,
        url: &str,
        metadata: &RouteSitemapMetadata,
        options: &SitemapOptions,
    ) -> Option<Self> {
        if metadata.exclude.unwrap_or(false) {
            return None;
        }

        Some(Self {
            loc: format!(
                "{}/{}",
                base_url.trim_end_matches('/'),
                url.trim_start_matches('/')
            ),
            changefreq: metadata.changefreq.or(options.default_changefreq),
            priority: metadata.priority.or(options.default_priority),
        })
    }

    fn to_xml(&self) -> String {
        let mut xml = String::from("<url>");
        xml.push_str(&format!("<loc>{}</loc>", escape_xml(&self.loc)));

        if let Some(changefreq) = self.changefreq {
            xml.push_str(&format!("<changefreq>{}</changefreq>", changefreq.as_str()));
        }

        if let Some(priority) = self.priority {
            xml.push_str(&format!("<priority>{:.1}</priority>", priority));
        }

        xml.push_str("</url>");
        xml
    }
}

/// Escapes XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Writes the sitemap of the given entries to `<output_dir>/<filename>`.
pub fn generate_sitemap(
    mut entries: Vec<SitemapEntry>,
    output_dir: &Path,
    options: &SitemapOptions,
) -> io::Result<()> {
    if !options.enabled || entries.is_empty() {
        return Ok(());
    }

    // Sort entries by URL for consistency
    entries.sort_by(|a, b| a.loc.cmp(&b.loc));

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">");

    for entry in &entries {
        xml.push_str(&entry.to_xml());
    }

    xml.push_str("</urlset>");

    let sitemap_path = output_dir.join(&options.filename);
    fs::write(&sitemap_path, xml)?;

    log::info!(
        target: "sitemap",
        "Generated sitemap with {} URLs at {}",
        entries.len(),
        sitemap_path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled() -> SitemapOptions {
        SitemapOptions {
            enabled: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("a&b"), "a&amp;b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(
            escape_xml("it's \"quoted\""),
            "it&apos;s &quot;quoted&quot;"
        );
    }

    #[test]
    fn test_changefreq_as_str() {
        assert_eq!(ChangeFreq::Always.as_str(), "always");
        assert_eq!(ChangeFreq::Monthly.as_str(), "monthly");
        assert_eq!(ChangeFreq::Never.as_str(), "never");
    }

    #[test]
    fn test_sitemap_entry_to_xml() {
        let entry = SitemapEntry {
            loc: "https://example.com/services/".to_string(),
            changefreq: Some(ChangeFreq::Weekly),
            priority: Some(0.8),
        };

        let xml = entry.to_xml();
        assert!(xml.contains("<loc>https://example.com/services/</loc>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.8</priority>"));
    }

    #[test]
    fn test_entry_for_page_uses_defaults() {
        let options = SitemapOptions {
            default_changefreq: Some(ChangeFreq::Monthly),
            ..enabled()
        };
        let metadata = RouteSitemapMetadata {
            priority: Some(1.0),
            ..Default::default()
        };

        let entry =
            SitemapEntry::for_page("https://example.com/", "/about/", &metadata, &options).unwrap();

        assert_eq!(entry.loc, "https://example.com/about/");
        assert_eq!(entry.changefreq, Some(ChangeFreq::Monthly));
        assert_eq!(entry.priority, Some(1.0));
    }

    #[test]
    fn test_entry_for_excluded_page() {
        let metadata = RouteSitemapMetadata {
            exclude: Some(true),
            ..Default::default()
        };

        assert!(
            SitemapEntry::for_page("https://example.com", "/", &metadata, &enabled()).is_none()
        );
    }

    #[test]
    fn test_generate_sitemap_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![
            SitemapEntry {
                loc: "https://example.com/services/".to_string(),
                changefreq: None,
                priority: None,
            },
            SitemapEntry {
                loc: "https://example.com/about/".to_string(),
                changefreq: None,
                priority: None,
            },
        ];

        generate_sitemap(entries, dir.path(), &enabled()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(content.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(content.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));

        let about = content.find("/about/").unwrap();
        let services = content.find("/services/").unwrap();
        assert!(about < services);
    }

    #[test]
    fn test_generate_sitemap_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![SitemapEntry {
            loc: "https://example.com/".to_string(),
            changefreq: None,
            priority: None,
        }];

        generate_sitemap(entries, dir.path(), &SitemapOptions::default()).unwrap();

        assert!(!dir.path().join("sitemap.xml").exists());
    }
}
