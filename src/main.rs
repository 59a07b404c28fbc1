use std::env::args_os;
use std::process::ExitCode;

use bmp_to_pnm::{convert_bmp_to_pnm, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match convert_bmp_to_pnm(&arguments) {
        Ok(written_files) => {
            for file in written_files {
                println!("Successfully wrote {}", file.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Conversion failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
