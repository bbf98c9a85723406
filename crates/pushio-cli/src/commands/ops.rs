//! `pushio ops` - inspect the bridge call surface
//!
//! Prints the capability registry: every operation the bridge forwards,
//! which platforms may call it, and whether its arguments are rewritten per
//! platform. Handy when wiring up the host application.

use colored::Colorize;
use pushio_bridge::platform::Platform;
use pushio_bridge::registry::{Support, OPERATIONS};

fn support_label(support: Support) -> &'static str {
    match support {
        Support::Both => "android, ios",
        Support::AndroidOnly => "android",
        Support::IosOnly => "ios",
    }
}

/// List bridge operations, optionally restricted to one platform
pub fn list(platform: Option<Platform>) {
    let mut shown = 0;
    for descriptor in OPERATIONS {
        if let Some(platform) = platform {
            if !descriptor.support.includes(platform) {
                continue;
            }
        }
        let remap = if descriptor.transform.is_some() {
            " (value remap)".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "{:<55} {}{}",
            descriptor.name,
            support_label(descriptor.support).dimmed(),
            remap
        );
        shown += 1;
    }
    println!("{} operation(s)", shown);
}
