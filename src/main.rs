//! CLI tool to detect, inspect, and highlight shell-like scripts.

use std::fs;
use std::process::ExitCode;

use scriptlex::{ScriptLanguage, classify, to_ansi, tokenize};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: scriptlex <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  detect     Print the detected language of each script");
        eprintln!("  highlight  Print each script with ANSI syntax colors");
        eprintln!("  tokens     Dump the token stream of each script");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  scriptlex detect deploy.sh");
        eprintln!("  scriptlex highlight install.ps1");
        eprintln!("  scriptlex tokens cleanup.bat");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "detect" => {
                let language = classify(&content);
                println!("{path}: {language}");
            }
            "highlight" => {
                print!("{}", to_ansi(&tokenize(&content, ScriptLanguage::Auto)));
            }
            "tokens" => {
                let language = classify(&content);
                eprintln!("{path}: {language}");
                for token in tokenize(&content, language) {
                    println!("{:?}\t{:?}", token.kind, token.value);
                }
            }
            _ => {
                eprintln!("Unknown command: {command}");
                return ExitCode::from(2);
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
