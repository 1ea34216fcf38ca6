mod entry;
mod error;
mod install;
mod renderer;

use clap::Parser;

use entry::LauncherSpec;
use error::{LauncherError, Result};

#[derive(Parser)]
#[command(name = "mkdesktop")]
#[command(about = "Generate a freedesktop .desktop launcher entry", long_about = None)]
struct Cli {
    /// Display name of the application
    name: String,

    /// Command line used to launch the application
    exec: String,

    /// Location of the icon file
    #[arg(short, long, default_value = "")]
    icon: String,

    /// Comment/tooltip for the application
    #[arg(short, long, default_value = "")]
    comment: String,

    /// Categories (comma-separated)
    #[arg(
        short = 'C',
        long,
        default_value = "Application",
        overrides_with = "categories"
    )]
    categories: String,

    /// Whether the app requires a terminal
    #[arg(short, long)]
    terminal: bool,

    /// Install system-wide (requires root)
    #[arg(short, long)]
    system: bool,

    /// Generic name of the application
    #[arg(short, long)]
    generic: Option<String>,
}

/// Turn parsed arguments into an immutable launcher spec, deriving the
/// generic name when none was supplied.
fn build_spec(cli: Cli) -> Result<LauncherSpec> {
    if cli.name.is_empty() || cli.exec.is_empty() {
        return Err(LauncherError::Usage(
            "name and exec must be non-empty".to_string(),
        ));
    }

    let generic_name = match cli.generic {
        Some(generic) => generic,
        None => entry::generic_name(&cli.name),
    };

    Ok(LauncherSpec {
        name: cli.name,
        generic_name,
        exec: cli.exec,
        icon: cli.icon,
        comment: cli.comment,
        categories: cli.categories.split(',').map(str::to_string).collect(),
        terminal: cli.terminal,
        system_wide: cli.system,
    })
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help output exits 0; every parse diagnostic exits 1 rather
            // than clap's default 2. The exit status is part of the CLI
            // contract.
            let failed = e.use_stderr();
            let _ = e.print();
            std::process::exit(if failed { 1 } else { 0 });
        }
    };

    let result = build_spec(cli).and_then(|spec| install::write(&spec));

    match result {
        Ok(path) => println!("Desktop entry created: {}", path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
