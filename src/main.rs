mod report;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tessella::{Options, Vocabulary, append_lines, solve_verbose_with, write_lines};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

struct CliConfig {
    vocab_path: Option<PathBuf>,
    words_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    color: bool,
    summary: bool,
}

fn run(config: &CliConfig) -> Result<(), String> {
    let loaded;
    let vocabulary = match &config.vocab_path {
        Some(path) => {
            loaded = Vocabulary::from_json_file(path).map_err(|err| format!("error: {err}"))?;
            &loaded
        }
        None => tessella::default_vocabulary(),
    };

    let lines = read_word_lines(config)?;
    let res = solve_verbose_with(&lines, vocabulary, &Options::default());

    match &config.output_path {
        Some(path) => append_lines(path, &res.spellings)
            .map_err(|err| format!("error: failed to write {}: {err}", path.display()))?,
        None => {
            let stdout = io::stdout().lock();
            write_lines(stdout, &res.spellings).map_err(|err| format!("error: failed to write stdout: {err}"))?;
        }
    }

    if config.summary {
        report::print_run(lines.len(), &res.details, config.color);
    }

    Ok(())
}

fn read_word_lines(config: &CliConfig) -> Result<Vec<String>, String> {
    let text = match &config.words_path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("error: failed to read {}: {err}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("error: failed to read stdin: {err}"))?;
            buffer
        }
    };
    Ok(text.lines().map(str::to_string).collect())
}

fn parse_args() -> Result<CliConfig, String> {
    let mut vocab_path: Option<PathBuf> = None;
    let mut words_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut color = io::stderr().is_terminal();
    let mut summary = false;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("tessella {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--summary" => summary = true,
            "--vocab" => {
                let value = args.next().ok_or_else(|| "error: --vocab expects a path".to_string())?;
                set_once(&mut vocab_path, value, "--vocab")?;
            }
            "--words" | "-w" => {
                let value = args.next().ok_or_else(|| "error: --words expects a path".to_string())?;
                set_once(&mut words_path, value, "--words")?;
            }
            "--output" | "-o" => {
                let value = args.next().ok_or_else(|| "error: --output expects a path".to_string())?;
                set_once(&mut output_path, value, "--output")?;
            }
            _ if arg.starts_with("--vocab=") => {
                set_once(&mut vocab_path, arg.trim_start_matches("--vocab=").to_string(), "--vocab")?;
            }
            _ if arg.starts_with("--words=") => {
                set_once(&mut words_path, arg.trim_start_matches("--words=").to_string(), "--words")?;
            }
            _ if arg.starts_with("--output=") => {
                set_once(&mut output_path, arg.trim_start_matches("--output=").to_string(), "--output")?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                // A bare path is the word list.
                set_once(&mut words_path, arg, "word list")?;
            }
        }
    }

    Ok(CliConfig { vocab_path, words_path, output_path, color, summary })
}

fn set_once(slot: &mut Option<PathBuf>, value: String, what: &str) -> Result<(), String> {
    if slot.is_some() {
        return Err(format!("error: {what} provided multiple times"));
    }
    *slot = Some(PathBuf::from(value));
    Ok(())
}

fn help_text() -> String {
    format!(
        "tessella {version}

Spell words out of a fixed symbol vocabulary (periodic-table elements by
default), one output line per spelling:

  <word> - <symbol1>,<symbol2>,... - <rank1> <rank2> ...

Usage:
  tessella [OPTIONS] [word list]
  tessella [OPTIONS] --words <file>

Options:
  -w, --words <file>    Word list, one word per line. Reads stdin if omitted.
      --vocab <file>    Vocabulary as a JSON array of strings, in rank order.
                        Default: the built-in periodic table.
  -o, --output <file>   Append result lines to <file> instead of stdout.
      --summary         Print a stage-by-stage run summary to stderr.
      --color           Force ANSI color in the summary.
      --no-color        Disable ANSI color in the summary.
  -h, --help            Show this help message.
  -V, --version         Print version information.

Exit codes:
  0  Success.
  1  Internal error (unreadable input, unwritable output).
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
