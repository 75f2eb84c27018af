use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "gocheat", version, about = "Go cheatsheet snippets")]
pub struct Cli {
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[arg(long, global = true, help = "Override the configuration directory")]
    pub config_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the cheatsheet banner (the default)
    Snippets,
    /// Create an empty CPU profile file
    Profile(ProfileArgs),
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[arg(help = "Profile output path (defaults to the configured path, then cpu.pprof)")]
    pub path: Option<PathBuf>,
}
