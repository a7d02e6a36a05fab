use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use kwsub_cli::pass::rewrite_file;

#[derive(Parser)]
#[command(name = "kwsub")]
#[command(
	author,
	version,
	about = "Rewrite kw(\"...\") keyword calls into generated identifiers"
)]
struct Cli {
	/// Source file to rewrite; the result lands next to it as <stem>_replaced.go
	#[arg(value_name = "input_file.go")]
	input: PathBuf,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let summary = rewrite_file(&cli.input)
		.with_context(|| format!("Failed to rewrite {}", cli.input.display()))?;

	println!(
		"Replaced {} keyword call(s) across {} line(s). Output saved to {}",
		summary.replacements,
		summary.lines,
		summary.output_path.display()
	);

	Ok(ExitCode::SUCCESS)
}
