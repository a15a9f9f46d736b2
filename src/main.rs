//! CLI entry point for dirtree

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::debug;

/// The only token that turns on file listing.
const FILES_FLAG: &str = "-f";

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Print a directory hierarchy as a box-drawn tree")]
#[command(override_usage = "dirtree <PATH> [-f]")]
#[command(disable_help_flag = true)]
struct Args {
    /// Directory to display
    #[arg(allow_hyphen_values = true)]
    path: PathBuf,

    /// Pass `-f` to list files with their sizes; anything else is ignored
    #[arg(value_name = "-f", allow_hyphen_values = true)]
    files: Option<String>,
}

impl Args {
    fn include_files(&self) -> bool {
        self.files.as_deref() == Some(FILES_FLAG)
    }
}

fn main() {
    env_logger::init();

    // Wrong argument counts exit with status 2 and the usage line.
    let args = Args::parse();
    let include_files = args.include_files();
    debug!("path={} include_files={}", args.path.display(), include_files);

    let mut stdout = io::stdout().lock();
    if let Err(e) = dirtree::dir_tree(&mut stdout, &args.path, include_files) {
        eprintln!("dirtree: {}", e);
        process::exit(1);
    }
}
