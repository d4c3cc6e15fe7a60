use std::path::PathBuf;
use std::time::Instant;

use crate::route::PageParams;

/// Metadata returned by [`coronate()`](crate::coronate) for a single page after a successful build.
#[derive(Debug)]
pub struct PageOutput {
    pub route: String,
    pub url: String,
    pub file_path: PathBuf,
    pub params: PageParams,
}

/// Metadata returned by [`coronate()`](crate::coronate) for a single static file after a successful build.
///
/// A static file is copied to the output directory without any processing.
#[derive(Debug)]
pub struct StaticFileOutput {
    pub file_path: PathBuf,
    pub original_path: PathBuf,
}

/// Metadata returned by [`coronate()`](crate::coronate) after a successful build.
#[derive(Debug)]
pub struct BuildOutput {
    pub start_time: Instant,
    pub pages: Vec<PageOutput>,
    pub static_files: Vec<StaticFileOutput>,
}

impl BuildOutput {
    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            pages: Vec::new(),
            static_files: Vec::new(),
        }
    }

    /// Returns the output of the page generated at `url`, if any.
    pub fn page(&self, url: &str) -> Option<&PageOutput> {
        self.pages.iter().find(|page| page.url == url)
    }

    pub(crate) fn add_static_file(&mut self, file_path: PathBuf, original_path: PathBuf) {
        self.static_files.push(StaticFileOutput {
            file_path,
            original_path,
        });
    }
}

impl Default for BuildOutput {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}
