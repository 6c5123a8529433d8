//! yba-ctl - installer CLI for the platform management services

use clap::Parser;
use console::Term;
use tracing_subscriber::EnvFilter;

use yba_installer::cli::Cli;
use yba_installer::output::json;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, log_ansi(cli.no_color));

    let json_mode = cli.json;
    if let Err(e) = cli.run().await {
        if json_mode {
            match json::format_error(&format!("{e:#}"), json::error_code(&e)) {
                Ok(out) => eprintln!("{out}"),
                Err(_) => eprintln!("Error: {e:#}"),
            }
        } else {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }
}

/// Colored log lines only on an interactive stderr with color allowed.
fn log_ansi(no_color: bool) -> bool {
    !no_color && std::env::var_os("NO_COLOR").is_none() && Term::stderr().is_term()
}

/// Log to stderr; `RUST_LOG` overrides the `-v` count.
fn init_tracing(verbosity: u8, ansi: bool) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("yba_installer={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .init();
}
