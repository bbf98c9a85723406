use clap::{Parser, Subcommand};
use pushio::commands::{frameworks, ops};
use pushio::GlobalOpts;
use pushio_bridge::Platform;
use pushio_logger as logger;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pushio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Push plugin packaging and bridge tooling",
    long_about = "pushio is the packaging companion of the push plugin bridge: it registers \
native framework bundles into the plugin manifest and inspects the bridge call surface."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register packaged framework bundles into the plugin manifest
    Frameworks {
        #[command(subcommand)]
        action: FrameworksAction,
    },
    /// List the bridge operations and their platform support
    Ops {
        /// Only show operations available on this platform (android or ios)
        #[arg(long)]
        platform: Option<Platform>,
    },
}

#[derive(Subcommand)]
enum FrameworksAction {
    /// Insert missing framework entries into plugin.xml
    Register {
        /// Directory containing the packaged .xcframework bundles
        #[arg(long)]
        frameworks_dir: Option<PathBuf>,
        /// Path to the plugin manifest to update
        #[arg(long)]
        plugin_xml: Option<PathBuf>,
    },
    /// Show what a register run would add, without writing
    Check {
        /// Directory containing the packaged .xcframework bundles
        #[arg(long)]
        frameworks_dir: Option<PathBuf>,
        /// Path to the plugin manifest to inspect
        #[arg(long)]
        plugin_xml: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_with_verbosity(cli.global.verbose) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let result = match cli.command {
        Commands::Frameworks { action } => match action {
            FrameworksAction::Register {
                frameworks_dir,
                plugin_xml,
            } => frameworks::register(frameworks_dir, plugin_xml),
            FrameworksAction::Check {
                frameworks_dir,
                plugin_xml,
            } => frameworks::check(frameworks_dir, plugin_xml),
        },
        Commands::Ops { platform } => {
            ops::list(platform);
            Ok(())
        }
    };

    if let Err(e) = result {
        logger::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
