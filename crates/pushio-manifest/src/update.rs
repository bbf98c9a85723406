//! Manifest update - planning and idempotent insertion
//!
//! The manifest is treated as text, not as a DOM: entries are spliced in
//! immediately before the closing tag of the iOS platform block and every
//! other byte of the document is preserved. A bundle name that appears
//! anywhere in the document counts as already registered, so re-running the
//! updater never duplicates entries.

use crate::discovery::scan_bundles;
use crate::errors::RegistryError;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Pattern locating the iOS platform block of a plugin manifest
const PLATFORM_BLOCK_PATTERN: &str = r#"(?s)<platform\s+name="ios"\s*>.*?</platform>"#;

const CLOSING_TAG: &str = "</platform>";

/// What an update run would change, computed without writing
#[derive(Debug, Default)]
pub struct UpdatePlan {
    /// Bundle names not yet referenced by the manifest
    pub missing: Vec<String>,
    /// Bundle names already referenced, skipped on apply
    pub already_registered: Vec<String>,
    /// Whether the manifest contains an iOS platform block to insert into
    pub platform_block_found: bool,
}

/// Result of an applied update
#[derive(Debug, Default)]
pub struct UpdateSummary {
    /// Entries appended to the manifest
    pub appended: usize,
    /// Bundles skipped because they were already registered
    pub skipped: usize,
    pub platform_block_found: bool,
}

/// One declarative manifest entry for a bundle
fn framework_entry(bundle: &str) -> String {
    format!(
        "    <framework src=\"./frameworks/{}\" custom=\"true\"/>\n",
        bundle
    )
}

/// Byte range of the iOS platform block, if present
fn platform_block(content: &str) -> Option<(usize, usize)> {
    let pattern = Regex::new(PLATFORM_BLOCK_PATTERN).ok()?;
    pattern.find(content).map(|m| (m.start(), m.end()))
}

fn build_plan(content: &str, bundles: Vec<String>) -> UpdatePlan {
    let mut plan = UpdatePlan {
        platform_block_found: platform_block(content).is_some(),
        ..UpdatePlan::default()
    };
    for bundle in bundles {
        if content.contains(&bundle) {
            plan.already_registered.push(bundle);
        } else {
            plan.missing.push(bundle);
        }
    }
    plan
}

/// Compute which bundles would be registered, without touching the manifest
pub fn plan_update(frameworks_dir: &Path, plugin_xml: &Path) -> Result<UpdatePlan, RegistryError> {
    let bundles = scan_bundles(frameworks_dir)?;
    let content = fs::read_to_string(plugin_xml).map_err(|source| RegistryError::Read {
        path: plugin_xml.to_path_buf(),
        source,
    })?;

    Ok(build_plan(&content, bundles))
}

/// Register the missing framework bundles into the manifest.
///
/// Entries land immediately before the `</platform>` of the iOS platform
/// block. A manifest without such a block is left unchanged. The manifest
/// is rewritten only after both the directory scan and the manifest read
/// succeeded, via a temp file and rename, so a failure never leaves a
/// partially written document behind.
pub fn register_frameworks(
    frameworks_dir: &Path,
    plugin_xml: &Path,
) -> Result<UpdateSummary, RegistryError> {
    let bundles = scan_bundles(frameworks_dir)?;
    let content = fs::read_to_string(plugin_xml).map_err(|source| RegistryError::Read {
        path: plugin_xml.to_path_buf(),
        source,
    })?;

    let plan = build_plan(&content, bundles);
    let mut summary = UpdateSummary {
        appended: 0,
        skipped: plan.already_registered.len(),
        platform_block_found: plan.platform_block_found,
    };

    if !plan.platform_block_found {
        debug!("no iOS platform block in {}, nothing to do", plugin_xml.display());
        return Ok(summary);
    }
    if plan.missing.is_empty() {
        debug!("all bundles already registered in {}", plugin_xml.display());
        return Ok(summary);
    }

    let Some((_, block_end)) = platform_block(&content) else {
        return Ok(summary);
    };

    // Splice in just before the closing tag, backing up over its line
    // indentation so the new entries keep their own.
    let mut insert_at = block_end - CLOSING_TAG.len();
    let bytes = content.as_bytes();
    while insert_at > 0 && matches!(bytes[insert_at - 1], b' ' | b'\t') {
        insert_at -= 1;
    }

    let mut entries = String::new();
    for bundle in &plan.missing {
        entries.push_str(&framework_entry(bundle));
    }

    let mut updated = String::with_capacity(content.len() + entries.len());
    updated.push_str(&content[..insert_at]);
    updated.push_str(&entries);
    updated.push_str(&content[insert_at..]);

    write_atomic(plugin_xml, &updated)?;
    summary.appended = plan.missing.len();
    info!(
        "registered {} framework(s) in {}",
        summary.appended,
        plugin_xml.display()
    );
    Ok(summary)
}

/// Atomic write: temp file then rename
fn write_atomic(path: &Path, content: &str) -> Result<(), RegistryError> {
    let temp_path = path.with_extension("xml.tmp");
    fs::write(&temp_path, content).map_err(|source| RegistryError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    fs::rename(&temp_path, path).map_err(|source| RegistryError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
