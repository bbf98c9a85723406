//! `pushio frameworks` - plugin manifest registration
//!
//! One-shot packaging step: every `.xcframework` bundle shipped with the
//! plugin gets a `<framework .../>` entry in `plugin.xml`. Paths come from
//! flags, environment variables, or the conventional defaults, in that
//! order.

use anyhow::Result;
use pushio_logger as logger;
use std::env;
use std::path::PathBuf;

/// Environment override for the bundle directory
pub const ENV_FRAMEWORKS_DIR: &str = "PUSHIO_FRAMEWORKS_DIR";
/// Environment override for the plugin manifest path
pub const ENV_PLUGIN_XML: &str = "PUSHIO_PLUGIN_XML";

const DEFAULT_FRAMEWORKS_DIR: &str = "frameworks";
const DEFAULT_PLUGIN_XML: &str = "plugin.xml";

fn resolve(flag: Option<PathBuf>, env_key: &str, default: &str) -> PathBuf {
    flag.or_else(|| env::var_os(env_key).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(default))
}

/// Insert missing framework entries into the plugin manifest
pub fn register(frameworks_dir: Option<PathBuf>, plugin_xml: Option<PathBuf>) -> Result<()> {
    let frameworks_dir = resolve(frameworks_dir, ENV_FRAMEWORKS_DIR, DEFAULT_FRAMEWORKS_DIR);
    let plugin_xml = resolve(plugin_xml, ENV_PLUGIN_XML, DEFAULT_PLUGIN_XML);

    logger::step(&format!(
        "Registering bundles from {} into {}",
        frameworks_dir.display(),
        plugin_xml.display()
    ));
    logger::spinner_start("Updating plugin manifest...");

    match pushio_manifest::register_frameworks(&frameworks_dir, &plugin_xml) {
        Ok(summary) if !summary.platform_block_found => {
            logger::spinner_stop();
            logger::warn(&format!(
                "no iOS platform block in {}, manifest left unchanged",
                plugin_xml.display()
            ));
            Ok(())
        }
        Ok(summary) => {
            logger::spinner_success(&format!(
                "{} framework(s) registered, {} already present",
                summary.appended, summary.skipped
            ));
            Ok(())
        }
        Err(e) => {
            logger::spinner_error("plugin manifest update failed");
            Err(e.into())
        }
    }
}

/// Show what a register run would add, without writing
pub fn check(frameworks_dir: Option<PathBuf>, plugin_xml: Option<PathBuf>) -> Result<()> {
    let frameworks_dir = resolve(frameworks_dir, ENV_FRAMEWORKS_DIR, DEFAULT_FRAMEWORKS_DIR);
    let plugin_xml = resolve(plugin_xml, ENV_PLUGIN_XML, DEFAULT_PLUGIN_XML);

    let plan = pushio_manifest::plan_update(&frameworks_dir, &plugin_xml)?;

    if !plan.platform_block_found {
        logger::warn(&format!(
            "no iOS platform block in {}, register would change nothing",
            plugin_xml.display()
        ));
        return Ok(());
    }

    if plan.missing.is_empty() {
        println!("Manifest is up to date ({} bundle(s) registered)", plan.already_registered.len());
    } else {
        println!("Would register {} bundle(s):", plan.missing.len());
        for bundle in &plan.missing {
            println!("  {}", bundle);
        }
    }
    Ok(())
}
