use rustyline::Editor;
use rustyline::completion::FilenameCompleter;
use rustyline::config::{CompletionType, Config};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline_derive::{Completer, Helper, Highlighter, Hinter, Validator};

/// Completes file paths anywhere on the line, so `l dem<Tab>` works too.
#[derive(Helper, Completer, Hinter, Validator, Highlighter)]
struct PathHelper {
    #[rustyline(Completer)]
    completer: FilenameCompleter,
}

/// Line editor with history and filename completion.
pub struct LineEditor {
    inner: Editor<PathHelper, DefaultHistory>,
}

/// `Circular` cycles through candidates on repeated Tab; otherwise candidates
/// are fuzzy-matched where the platform supports it.
pub fn editor_config(cycle: bool) -> Config {
    Config::builder()
        .completion_type(completion_type(cycle))
        .auto_add_history(true)
        .build()
}

fn completion_type(cycle: bool) -> CompletionType {
    if cycle {
        return CompletionType::Circular;
    }
    #[cfg(unix)]
    {
        CompletionType::Fuzzy
    }
    #[cfg(not(unix))]
    {
        CompletionType::List
    }
}

impl LineEditor {
    pub fn new(cycle: bool) -> Result<Self, ReadlineError> {
        let mut inner = Editor::with_config(editor_config(cycle))?;
        inner.set_helper(Some(PathHelper {
            completer: FilenameCompleter::new(),
        }));
        Ok(Self { inner })
    }

    /// Read one line; `None` on Ctrl-C or end of input.
    ///
    /// Must run on a multi-threaded runtime: the blocking read is moved off
    /// the async worker with `block_in_place`.
    pub fn read(&mut self, prompt: &str) -> Result<Option<String>, ReadlineError> {
        match tokio::task::block_in_place(|| self.inner.readline(prompt)) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_selects_circular_completion() {
        assert_eq!(editor_config(true).completion_type(), CompletionType::Circular);
    }

    #[cfg(unix)]
    #[test]
    fn default_completion_is_fuzzy() {
        assert_eq!(editor_config(false).completion_type(), CompletionType::Fuzzy);
    }

    #[test]
    fn history_is_recorded() {
        assert!(editor_config(false).auto_add_history());
    }
}
