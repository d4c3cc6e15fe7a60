use std::{
    fs, io,
    path::Path,
    time::Instant,
};

use crate::{
    BuildOptions, BuildOutput,
    errors::{BuildError, PlacardError},
    logging::{FormatElapsedTimeOptions, format_elapsed_time, print_title},
    route::{
        DynamicRouteContext, PageContext, PageParams, RouteEntry, RouteType, Router, finish_route,
    },
    sitemap::{SitemapEntry, generate_sitemap},
};
use colored::{ColoredString, Colorize};
use log::{info, trace, warn};
use rayon::prelude::*;

pub mod metadata;
pub mod options;

use metadata::PageOutput;

/// A generated page, with its sitemap entry when the sitemap is enabled.
type GeneratedPage = (PageOutput, Option<SitemapEntry>);

pub fn execute_build<S: Sync>(
    router: &Router<S>,
    site: &S,
    options: &BuildOptions,
) -> Result<BuildOutput, PlacardError> {
    let build_start = Instant::now();
    let mut build_metadata = BuildOutput::new(build_start);

    trace!(target: "build", "Setting up required directories...");

    if options.clean_output_dir && options.output_dir.exists() {
        fs::remove_dir_all(&options.output_dir)?;
    }
    fs::create_dir_all(&options.output_dir)?;

    info!(target: "build", "Output directory: {}", options.output_dir.display());

    print_title("generating pages");
    let pages_start = Instant::now();

    let route_format_options = FormatElapsedTimeOptions {
        additional_fn: Some(&|msg: ColoredString| {
            let formatted_msg = format!("(+{})", msg);
            if msg.fgcolor.is_none() {
                formatted_msg.dimmed()
            } else {
                formatted_msg.into()
            }
        }),
        ..Default::default()
    };

    let section_format_options = FormatElapsedTimeOptions {
        sec_red_threshold: 5,
        sec_yellow_threshold: 1,
        millis_red_threshold: None,
        millis_yellow_threshold: None,
        ..Default::default()
    };

    let generated = router
        .entries()
        .par_iter()
        .chain(router.not_found().into_par_iter())
        .map(|entry| -> Result<Vec<GeneratedPage>, PlacardError> {
            match entry.route_type() {
                RouteType::Static => {
                    let page = build_page(
                        entry,
                        PageParams::default(),
                        site,
                        options,
                        &route_format_options,
                    )?;

                    Ok(vec![page])
                }
                RouteType::Dynamic => {
                    let pages = entry.route().pages(&DynamicRouteContext { site });

                    if pages.is_empty() {
                        warn!(target: "build", "{} is a dynamic route, but its implementation of Route::pages returned an empty Vec. No pages will be generated for this route.", entry.pattern().raw().bold());
                        return Ok(Vec::new());
                    }

                    info!(target: "build", "{}", entry.pattern().raw().bold());

                    pages
                        .into_par_iter()
                        .map(|params| build_page(entry, params, site, options, &route_format_options))
                        .collect::<Result<Vec<_>, PlacardError>>()
                }
            }
        })
        .collect::<Result<Vec<Vec<GeneratedPage>>, PlacardError>>()?;

    let mut sitemap_entries = Vec::new();
    for (page, sitemap_entry) in generated.into_iter().flatten() {
        build_metadata.pages.push(page);
        sitemap_entries.extend(sitemap_entry);
    }

    info!(target: "pages", "{}", format!("generated {} pages in {}", build_metadata.pages.len(), format_elapsed_time(pages_start.elapsed(), &section_format_options)).bold());

    if options.static_dir.exists() {
        let assets_start = Instant::now();
        print_title("copying assets");

        copy_recursively(
            &options.static_dir,
            &options.output_dir,
            &mut build_metadata,
        )?;

        info!(target: "build", "{}", format!("Assets copied in {}", format_elapsed_time(assets_start.elapsed(), &FormatElapsedTimeOptions::default())).bold());
    }

    if options.sitemap.enabled {
        if options.base_url.is_some() {
            print_title("generating sitemap");
            generate_sitemap(sitemap_entries, &options.output_dir, &options.sitemap)?;
        } else {
            warn!(target: "sitemap", "Sitemap generation is enabled, but no base URL is set. Skipping.");
        }
    }

    info!(target: "SKIP_FORMAT", "{}", "");
    info!(target: "build", "{}", format!("Build completed in {}", format_elapsed_time(build_start.elapsed(), &section_format_options)).bold());

    Ok(build_metadata)
}

fn build_page<S>(
    entry: &RouteEntry<S>,
    params: PageParams,
    site: &S,
    options: &BuildOptions,
    route_format_options: &FormatElapsedTimeOptions,
) -> Result<GeneratedPage, PlacardError> {
    let route_start = Instant::now();
    let raw = entry.pattern().raw();

    let url = entry.url(&params)?;
    let file_path = entry.file_path(&params, &options.output_dir)?;

    let ctx = PageContext {
        site,
        params: &params,
        current_path: &url,
        base_url: options.base_url.as_deref(),
    };

    let content = finish_route(entry.route().render(&ctx), &url)?;

    write_route_file(&content, &file_path).map_err(|source| BuildError::WriteFailed {
        path: file_path.clone(),
        source,
    })?;

    match entry.route_type() {
        RouteType::Static => {
            info!(target: "pages", "{} -> {} {}", url, file_path.to_string_lossy().dimmed(), format_elapsed_time(route_start.elapsed(), route_format_options))
        }
        RouteType::Dynamic => {
            info!(target: "pages", "├─ {} {}", file_path.to_string_lossy().dimmed(), format_elapsed_time(route_start.elapsed(), route_format_options))
        }
    }

    let sitemap_entry = match options.base_url.as_deref() {
        Some(base_url) if options.sitemap.enabled && !entry.is_endpoint() => SitemapEntry::for_page(
            base_url,
            &url,
            &entry.route().sitemap_metadata(),
            &options.sitemap,
        ),
        _ => None,
    };

    Ok((
        PageOutput {
            route: raw.to_string(),
            url,
            file_path,
            params,
        },
        sitemap_entry,
    ))
}

fn copy_recursively(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    build_metadata: &mut BuildOutput,
) -> Result<(), BuildError> {
    let destination = destination.as_ref();
    let copy_failed = |from: &Path, source: io::Error| BuildError::CopyFailed {
        from: from.to_path_buf(),
        to: destination.to_path_buf(),
        source,
    };

    fs::create_dir_all(destination).map_err(|e| copy_failed(source.as_ref(), e))?;

    let entries = fs::read_dir(source.as_ref()).map_err(|e| copy_failed(source.as_ref(), e))?;
    for entry in entries {
        let entry = entry.map_err(|e| copy_failed(source.as_ref(), e))?;
        let filetype = entry.file_type().map_err(|e| copy_failed(&entry.path(), e))?;
        let target = destination.join(entry.file_name());

        if filetype.is_dir() {
            copy_recursively(entry.path(), &target, build_metadata)?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| copy_failed(&entry.path(), e))?;
            build_metadata.add_static_file(target, entry.path());
        }
    }

    Ok(())
}

fn write_route_file(content: &[u8], file_path: &Path) -> Result<(), io::Error> {
    // Create the parent directories if it doesn't exist
    if let Some(parent_dir) = file_path.parent() {
        fs::create_dir_all(parent_dir)?
    }

    fs::write(file_path, content)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BoxError;
    use crate::route::{Pages, RenderResult, Route};
    use crate::sitemap::{RouteSitemapMetadata, SitemapOptions};

    struct Catalog {
        names: Vec<&'static str>,
    }

    struct Home;

    impl Route<Catalog> for Home {
        fn raw_path(&self) -> &str {
            "/"
        }

        fn render(&self, ctx: &PageContext<Catalog>) -> RenderResult {
            format!("home of {} items", ctx.site.names.len()).into()
        }
    }

    struct Item;

    impl Route<Catalog> for Item {
        fn raw_path(&self) -> &str {
            "/items/[item]"
        }

        fn pages(&self, ctx: &DynamicRouteContext<Catalog>) -> Pages {
            ctx.site
                .names
                .iter()
                .map(|name| PageParams::single("item", *name))
                .collect()
        }

        fn render(&self, ctx: &PageContext<Catalog>) -> RenderResult {
            format!("item {}", ctx.param("item").unwrap_or_default()).into()
        }
    }

    struct Missing;

    impl Route<Catalog> for Missing {
        fn raw_path(&self) -> &str {
            "404.html"
        }

        fn render(&self, _ctx: &PageContext<Catalog>) -> RenderResult {
            "not found".into()
        }

        fn sitemap_metadata(&self) -> RouteSitemapMetadata {
            RouteSitemapMetadata {
                exclude: Some(true),
                ..Default::default()
            }
        }
    }

    struct Broken;

    impl Route<Catalog> for Broken {
        fn raw_path(&self) -> &str {
            "/broken"
        }

        fn render(&self, _ctx: &PageContext<Catalog>) -> RenderResult {
            Err::<String, BoxError>("template exploded".into()).into()
        }
    }

    fn site() -> Catalog {
        Catalog {
            names: vec!["first", "second"],
        }
    }

    fn options(output_dir: &Path) -> BuildOptions {
        BuildOptions {
            output_dir: output_dir.to_path_buf(),
            static_dir: output_dir.join("does-not-exist"),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_writes_static_dynamic_and_not_found_pages() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("dist");
        let router = Router::new(crate::routes![Home, Item])
            .unwrap()
            .with_not_found(Missing)
            .unwrap();

        let output = execute_build(&router, &site(), &options(&output_dir)).unwrap();

        assert_eq!(output.pages.len(), 4);
        assert_eq!(
            fs::read_to_string(output_dir.join("index.html")).unwrap(),
            "home of 2 items"
        );
        assert_eq!(
            fs::read_to_string(output_dir.join("items/second/index.html")).unwrap(),
            "item second"
        );
        assert_eq!(
            fs::read_to_string(output_dir.join("404.html")).unwrap(),
            "not found"
        );

        let page = output.page("/items/first/").unwrap();
        assert_eq!(page.route, "/items/[item]");
        assert_eq!(page.params.get("item"), Some("first"));
    }

    #[test]
    fn test_build_with_empty_pages_generates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let router = Router::new(crate::routes![Item]).unwrap();
        let empty = Catalog { names: vec![] };

        let output = execute_build(&router, &empty, &options(dir.path())).unwrap();

        assert!(output.pages.is_empty());
    }

    #[test]
    fn test_build_surfaces_render_errors() {
        let dir = tempfile::tempdir().unwrap();
        let router = Router::new(crate::routes![Home, Broken]).unwrap();

        let result = execute_build(&router, &site(), &options(dir.path()));

        assert!(matches!(
            result,
            Err(PlacardError::Build(BuildError::Render { route, .. })) if route == "/broken/"
        ));
    }

    #[test]
    fn test_build_cleans_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let stale = dir.path().join("stale.html");
        fs::write(&stale, "old").unwrap();
        let router = Router::new(crate::routes![Home]).unwrap();

        execute_build(&router, &site(), &options(dir.path())).unwrap();

        assert!(!stale.exists());
        assert!(dir.path().join("index.html").exists());
    }

    #[test]
    fn test_build_copies_static_files() {
        let dir = tempfile::tempdir().unwrap();
        let static_dir = dir.path().join("static");
        fs::create_dir_all(static_dir.join("css")).unwrap();
        fs::write(static_dir.join("css/style.css"), "body {}").unwrap();
        let output_dir = dir.path().join("dist");
        let router = Router::new(crate::routes![Home]).unwrap();

        let output = execute_build(
            &router,
            &site(),
            &BuildOptions {
                output_dir: output_dir.clone(),
                static_dir,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(output_dir.join("css/style.css")).unwrap(),
            "body {}"
        );
        assert_eq!(output.static_files.len(), 1);
    }

    #[test]
    fn test_build_sitemap_skips_endpoints_and_excluded_routes() {
        let dir = tempfile::tempdir().unwrap();
        let router = Router::new(crate::routes![Home, Item])
            .unwrap()
            .with_not_found(Missing)
            .unwrap();

        execute_build(
            &router,
            &site(),
            &BuildOptions {
                base_url: Some("https://example.com".into()),
                sitemap: SitemapOptions {
                    enabled: true,
                    ..Default::default()
                },
                ..options(dir.path())
            },
        )
        .unwrap();

        let sitemap = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://example.com/</loc>"));
        assert!(sitemap.contains("<loc>https://example.com/items/first/</loc>"));
        assert!(!sitemap.contains("404"));
    }
}
