use clap::Parser;
use tint::cli::*;

fn main() {
	let cli = Cli::parse();
	let mut tint = tint::Tint::new(cli.debug);

	match cli.mode {
		Mode::File { path } => {
			if let Err(e) = tint.run_file(&path) {
				eprintln!("{}", e.report());
			}
		}
		Mode::Repl => tint.run_prompt(),
	}
}
