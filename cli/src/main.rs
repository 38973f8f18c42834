use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use apk_summary::{AnalysisResult, summarize};
use clap::Parser;

mod logging;

/// Show package name, version, label and permissions of an apk file and save its icon
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[arg(short, long, default_value = "libertex.apk", help = "Path to the apk file")]
    apk: PathBuf,

    #[arg(
        short,
        long,
        default_value = "libertex_icon.png",
        help = "Where to save the application icon, format follows the extension"
    )]
    icon_out: PathBuf,

    #[arg(short, long, default_value_t = false, help = "Print result as json")]
    json: bool,

    #[arg(short, long, default_value_t = false, help = "Print progress messages")]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let result = match summarize(&cli.apk, &cli.icon_out) {
        Ok(result) => result,
        Err(err) => {
            println!("error: {}", err);
            process::exit(err.exit_code());
        }
    };

    if let Err(err) = print_result(&result, cli.json) {
        eprintln!("{:#}", err);
    }
}

fn print_result(result: &AnalysisResult, json: bool) -> Result<()> {
    let rendered = if json {
        result
            .to_json()
            .with_context(|| format!("can't serialize result for {:?}", result.source_path))?
    } else {
        result.to_string()
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered).context("can't write result to stdout")?;

    Ok(())
}
