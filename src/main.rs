use anyhow::Result;
use env_logger::Env;
use log::info;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use waketime::{parse, supported_languages, Config, ParseOutcome};

/// Command line arguments structure
#[derive(Debug)]
struct CommandArgs {
    expression: String,
    language: Option<String>,
    json: bool,
}

impl CommandArgs {
    fn parse(args: &[String]) -> Self {
        let mut expression_parts = Vec::new();
        let mut language = None;
        let mut json = false;
        let mut i = 0;

        while i < args.len() {
            match args[i].as_str() {
                "--lang" | "-l" => {
                    if i + 1 < args.len() {
                        language = Some(args[i + 1].clone());
                        i += 1;
                    }
                }
                "--json" => json = true,
                other => expression_parts.push(other.to_string()),
            }
            i += 1;
        }

        CommandArgs { expression: expression_parts.join(" "), language, json }
    }
}

fn main() -> Result<()> {
    // Initialize logging with custom format
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let config = Config::load().unwrap_or_default();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = CommandArgs::parse(&args);

    let language = config.language(args.language.as_deref()).to_string();
    let json = args.json || config.terminal.json_output;

    if !args.expression.is_empty() {
        return parse_once(&args.expression, &language, json);
    }

    run_interactive(&language, json)
}

fn parse_once(expression: &str, language: &str, json: bool) -> Result<()> {
    match parse(expression, language) {
        Ok(outcome) => {
            print_outcome(&outcome, json);
            Ok(())
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

fn run_interactive(language: &str, json: bool) -> Result<()> {
    info!("Starting waketime terminal");

    let mut rl = DefaultEditor::new()?;
    let mut language = language.to_string();
    println!("Welcome to waketime! Type a date/time expression, or 'help' for commands.");

    loop {
        let readline = rl.readline("⏰ ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                process_line(line.trim(), &mut language, json);
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

fn process_line(line: &str, language: &mut String, json: bool) {
    match line {
        "" => {}
        "help" => {
            println!("Type any date/time expression to parse it, e.g.:");
            println!("  7pm");
            println!("  tomorrow at 7:30");
            println!("  overmorgen om 9");
            println!("Commands:");
            println!("  lang <code> - Switch language ({})", supported_languages().join(", "));
            println!("  help - Show this help");
            println!("  exit - Exit the application");
        }
        "exit" => {
            std::process::exit(0);
        }
        _ => {
            if let Some(code) = line.strip_prefix("lang ") {
                *language = code.trim().to_string();
                println!("Language set to '{}'", language);
                return;
            }
            match parse(line, language) {
                Ok(outcome) => print_outcome(&outcome, json),
                Err(err) => println!("Error: {}", err),
            }
        }
    }
}

fn print_outcome(outcome: &ParseOutcome, json: bool) {
    if json {
        match serde_json::to_string(outcome) {
            Ok(serialized) => println!("{}", serialized),
            Err(err) => println!("Error: {}", err),
        }
    } else {
        println!("{} {}", outcome.date.format("%Y-%m-%d"), outcome.time.format("%H:%M:%S"));
    }
}
