mod editor;
mod input;
mod screen;

use std::fmt;
use std::path::PathBuf;

use services::{DisplayEffect, SessionController, SourceLoader};
use tracing_subscriber::EnvFilter;
use voca_core::TomlVocaParser;
use voca_core::model::{QuizConfig, QuizConfigDraft};

use editor::LineEditor;
use input::{Command, FILENAME_PROMPT, HELP, PROMPT, parse_filenames};
use screen::Screen;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  voca [--join newline|raw] [--synonyms first|current] [--seed <n>]");
    eprintln!("       [--cycle] [FILE...]");
    eprintln!();
    eprintln!("Without FILE arguments the quiz asks for filenames first.");
    eprintln!("--cycle makes Tab cycle through filename completions instead of fuzzy matching.");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --join newline");
    eprintln!("  --synonyms first");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  VOCA_JOIN, VOCA_SYNONYMS, VOCA_SEED, RUST_LOG");
}

struct Args {
    config: QuizConfigDraft,
    cycle: bool,
    files: Vec<PathBuf>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut config = QuizConfigDraft::new();
        let mut cycle = false;
        let mut files = Vec::new();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--join" => config.join = Some(require_value(args, "--join")?),
                "--synonyms" => {
                    config.synonym_reference = Some(require_value(args, "--synonyms")?);
                }
                "--seed" => config.seed = Some(require_value(args, "--seed")?),
                "--cycle" => cycle = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                flag if flag.starts_with("--") => return Err(ArgsError::UnknownArg(arg)),
                _ => files.push(PathBuf::from(arg)),
            }
        }

        Ok(Self {
            config,
            cycle,
            files,
        })
    }
}

fn env_config() -> QuizConfigDraft {
    QuizConfigDraft {
        join: std::env::var("VOCA_JOIN").ok(),
        synonym_reference: std::env::var("VOCA_SYNONYMS").ok(),
        seed: std::env::var("VOCA_SEED").ok(),
    }
}

fn resolve_config(flags: QuizConfigDraft) -> Result<QuizConfig, voca_core::Error> {
    Ok(flags.or(env_config()).validate()?)
}

/// Adapter between terminal input and the quiz controller.
struct Terminal {
    controller: SessionController,
    loader: SourceLoader,
    parser: TomlVocaParser,
    screen: Screen,
}

impl Terminal {
    fn new(config: QuizConfig) -> Self {
        Self {
            controller: SessionController::new(config),
            loader: SourceLoader::from_config(&config),
            parser: TomlVocaParser::new(),
            screen: Screen::new(),
        }
    }

    async fn load(&mut self, files: &[PathBuf]) -> Result<(), Box<dyn std::error::Error>> {
        let text = self.loader.read_all(files).await?;
        let effects = self.controller.load_text(&self.parser, &text)?;
        tracing::info!(
            files = files.len(),
            entries = self.controller.entry_count(),
            "vocabulary loaded"
        );
        self.show(effects);
        Ok(())
    }

    fn show(&mut self, effects: Vec<DisplayEffect>) {
        self.screen.apply(effects);
        println!("\x1b[2J\x1b[H");
        print!("{}", self.screen.render());
    }

    /// Returns `false` when the user asked to quit.
    async fn handle(&mut self, line: &str) -> bool {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err}");
                return true;
            }
        };

        match command {
            Command::Quit => return false,
            Command::Help => println!("{HELP}"),
            Command::Load(files) => {
                if let Err(err) = self.load(&files).await {
                    eprintln!("{err}");
                }
            }
            Command::Intent(intent) => match self.controller.dispatch(intent) {
                Ok(effects) if effects.is_empty() => {}
                Ok(effects) => self.show(effects),
                Err(err) => eprintln!("{err}"),
            },
        }
        true
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let config = resolve_config(args.config)?;
    tracing::debug!(
        join = %config.join(),
        synonyms = %config.synonym_reference(),
        seed = ?config.seed(),
        "configuration resolved"
    );

    let mut editor = LineEditor::new(args.cycle)?;
    let mut terminal = Terminal::new(config);
    if args.files.is_empty() {
        if !ask_for_files(&mut editor, &mut terminal).await? {
            return Ok(());
        }
    } else {
        terminal.load(&args.files).await?;
    }

    while let Some(line) = editor.read(PROMPT)? {
        println!();
        if !terminal.handle(&line).await {
            break;
        }
    }

    Ok(())
}

/// Prompt until a file set loads. Returns `false` if input ends first.
async fn ask_for_files(
    editor: &mut LineEditor,
    terminal: &mut Terminal,
) -> Result<bool, Box<dyn std::error::Error>> {
    while let Some(line) = editor.read(FILENAME_PROMPT)? {
        let files = parse_filenames(&line);
        if files.is_empty() {
            continue;
        }
        match terminal.load(&files).await {
            Ok(()) => return Ok(true),
            Err(err) => eprintln!("{err}"),
        }
    }
    Ok(false)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voca_core::model::{SourceJoin, SynonymReference};

    fn parse(list: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = list.iter().map(|s| (*s).to_string());
        Args::parse(&mut iter)
    }

    #[test]
    fn flags_and_files_are_split() {
        let args = parse(&["--join", "raw", "a.toml", "--seed", "9", "b.toml"]).unwrap();
        assert_eq!(args.files, [PathBuf::from("a.toml"), PathBuf::from("b.toml")]);

        let config = args.config.validate().unwrap();
        assert_eq!(config.join(), SourceJoin::Raw);
        assert_eq!(config.seed(), Some(9));
        assert_eq!(config.synonym_reference(), SynonymReference::FirstPage);
    }

    #[test]
    fn cycle_flag_is_off_by_default() {
        assert!(!parse(&["a.toml"]).unwrap().cycle);

        let args = parse(&["--cycle", "a.toml"]).unwrap();
        assert!(args.cycle);
        assert_eq!(args.files, [PathBuf::from("a.toml")]);
    }

    #[test]
    fn flag_without_value_fails() {
        assert!(matches!(
            parse(&["--synonyms"]),
            Err(ArgsError::MissingValue { flag: "--synonyms" })
        ));
    }

    #[test]
    fn unknown_flag_fails() {
        assert!(matches!(parse(&["--fast"]), Err(ArgsError::UnknownArg(arg)) if arg == "--fast"));
    }

    #[tokio::test]
    async fn terminal_ignores_actions_before_load() {
        let mut terminal = Terminal::new(QuizConfig::default());
        assert!(terminal.handle("y").await);
        assert!(terminal.handle(">").await);
        assert!(!terminal.handle("q").await);
        assert_eq!(terminal.controller.entry_count(), 0);
    }
}
