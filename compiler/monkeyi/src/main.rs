//! `monkey`: REPL and file runner for the Monkey programming language.

use monkeyi::commands::{lex_file, parse_file, repl, run_file, ShellOptions};

fn main() {
    monkeyi::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        repl(&ShellOptions::default());
        return;
    };

    match command.as_str() {
        "repl" => {
            repl(&parse_options(&args[2..]));
        }
        flag if flag.starts_with("--max-depth=") => {
            repl(&parse_options(&args[1..]));
        }
        "run" => {
            let mut file_path = None;
            let mut flags = Vec::new();
            for arg in args.iter().skip(2) {
                if arg.starts_with('-') {
                    flags.push(arg.clone());
                } else if file_path.is_none() {
                    file_path = Some(arg.as_str());
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: monkey run <file.monkey> [--max-depth=<n>]");
                std::process::exit(1);
            };
            run_file(path, &parse_options(&flags));
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: monkey parse <file.monkey>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: monkey lex <file.monkey>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Monkey {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a file path, try to run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("monkey"))
            {
                run_file(command, &parse_options(&args[2..]));
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn parse_options(flags: &[String]) -> ShellOptions {
    match ShellOptions::parse(flags.iter().map(String::as_str)) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Monkey programming language");
    println!();
    println!("Usage: monkey [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl                 Start an interactive session (default)");
    println!("  run <file.monkey>    Run a Monkey program");
    println!("  parse <file.monkey>  Parse and display each statement");
    println!("  lex <file.monkey>    Tokenize and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options (run, repl):");
    println!("  --max-depth=<n>      Maximum nested function calls (default: 10000)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Log filter, e.g. RUST_LOG=monkey_eval=debug");
}
