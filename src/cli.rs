use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tint", about = "A tiny typed arithmetic expression language")]
pub struct Cli {
	/// Print the token list and syntax tree for each input
	#[arg(long)]
	pub debug: bool,
	#[command(subcommand)]
	pub mode:  Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Run a script file, one statement per line
	File { path: PathBuf },
	/// Start the interactive prompt
	Repl,
}
