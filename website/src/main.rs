use std::path::PathBuf;

use advisor_website::site::Site;
use advisor_website::{DEFAULT_BASE_URL, build_options, router, static_dir};
use clap::{Parser, Subcommand};
use placard::coronate;
use placard_server::{DEFAULT_PORT, ServerOptions, start_live_server, start_preview_web_server};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the website to static files
    Build {
        #[arg(long, default_value = "dist")]
        output: PathBuf,
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
        /// Silence the build output. The build logger reads this flag from the process arguments.
        #[arg(long)]
        quiet: bool,
    },
    /// Render pages on request
    Serve {
        /// Expose the server to the network
        #[arg(long)]
        host: bool,
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Serve a built website
    Preview {
        #[arg(long, default_value = "dist")]
        dist: PathBuf,
        /// Expose the server to the network
        #[arg(long)]
        host: bool,
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            output,
            base_url,
            quiet: _,
        } => {
            let site = Site::load()?;
            coronate(&router()?, &site, build_options(output, Some(base_url)))?;
        }
        Commands::Serve { host, port } => {
            placard_server::logging::init_logging();

            let site = Site::load()?;
            start_live_server(router()?, site, static_dir(), ServerOptions { host, port }).await?;
        }
        Commands::Preview { dist, host, port } => {
            placard_server::logging::init_logging();

            start_preview_web_server(dist, ServerOptions { host, port }).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_flags() {
        let cli = Cli::try_parse_from(["advisor-website", "build", "--quiet"]).unwrap();
        let Commands::Build {
            output,
            base_url,
            quiet,
        } = cli.command
        else {
            panic!("expected the build command");
        };

        assert!(quiet);
        assert_eq!(output, PathBuf::from("dist"));
        assert_eq!(base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn quiet_is_off_by_default() {
        let cli = Cli::try_parse_from(["advisor-website", "build"]).unwrap();

        assert!(matches!(cli.command, Commands::Build { quiet: false, .. }));
    }
}
