mod answers_cmd;
mod cli;
mod extract_cmd;
mod lookup_cmd;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Extract {
            ref files,
            ref out_dir,
            no_split,
            zoom,
            bold_markers,
        } => extract_cmd::run(files, out_dir, no_split, zoom, bold_markers),
        cli::Commands::Answers {
            ref file,
            ref out,
            ref out_dir,
        } => answers_cmd::run(file, out.as_deref(), out_dir),
        cli::Commands::Lookup {
            ref key,
            ref section,
            number,
        } => lookup_cmd::run(key, section, number),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
