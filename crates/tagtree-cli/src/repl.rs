//! Interactive outline session

use log::debug;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tagtree::outline;
use tagtree::OutlineOptions;

use crate::output::{print_block, OutputArgs};

const PROMPT: &str = "tagtree> ";

const HELP: &str = "\
Enter an outline on one line, e.g. `table { tr { td; } }`.

Commands:
  :help, :h    Show this help
  :quit, :q    Leave the session";

/// What to do with one line of input.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    /// Nothing to do
    Skip,
    /// End the session
    Quit,
    /// Print to stdout
    Print(String),
    /// Print to stderr and keep going
    Fail(String),
}

/// Run the read-render loop until the user quits.
pub fn run(output: &OutputArgs, options: &OutlineOptions) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                match evaluate(&line, output, options) {
                    Step::Skip => {}
                    Step::Quit => break,
                    Step::Print(text) => print_block(&text),
                    Step::Fail(message) => eprintln!("error: {message}"),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(error) => return Err(error.into()),
        }
    }

    debug!("session closed");
    Ok(())
}

fn evaluate(line: &str, output: &OutputArgs, options: &OutlineOptions) -> Step {
    let line = line.trim();
    match line {
        "" => Step::Skip,
        ":quit" | ":q" => Step::Quit,
        ":help" | ":h" => Step::Print(HELP.to_string()),
        command if command.starts_with(':') => {
            Step::Fail(format!("unknown command `{command}`, try :help"))
        }
        source => match outline::parse_with(source, options) {
            Ok(element) => match output.format_element(&element) {
                Ok(text) => Step::Print(text),
                Err(error) => Step::Fail(error.to_string()),
            },
            Err(error) => Step::Fail(error.to_string()),
        },
    }
}
