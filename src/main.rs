use std::path::PathBuf;
use std::process;

use clap::Parser;

use oemlex::lexer::lexer::tokenize;
use oemlex::reader::reader::{read_program, PROGRAMS_DIR};
use oemlex::report::report::print_tokens;

#[derive(Parser)]
#[command(author, version, about = "Lexical analyzer for the OEM language")]
struct Cli {
    /// Name of the program to scan (without the .oem extension)
    program_name: String,

    /// Directory containing the .oem programs
    #[arg(long, default_value = PROGRAMS_DIR)]
    programs_dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let source = match read_program(&cli.programs_dir, &cli.program_name) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    let tokens = tokenize(&source);
    print_tokens(&tokens);
}
