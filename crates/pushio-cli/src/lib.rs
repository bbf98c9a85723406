//! pushio CLI library - expose modules for testing

pub mod commands;

use clap::Args;

/// Flags shared by every subcommand
#[derive(Args, Debug, Default)]
pub struct GlobalOpts {
    /// Increase output verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
