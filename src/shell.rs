use std::io::BufRead;

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::calculator::Calculator;

/// Prompt shown before every interactive read.
const PROMPT: &str = "Calculator> ";

/// Width of the ruler lines in the welcome and help screens.
const RULER_WIDTH: usize = 50;

/// The interactive front end around the calculator.
///
/// The shell reads one line at a time, recognizes the control tokens, and
/// renders every other line as a calculation outcome. It drives either an
/// interactive rustyline session or a plain batch reader.
pub struct Shell {
    calculator: Calculator,
}

/// Outcome of processing one line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum Response {
    /// Nothing to print; keep reading.
    Empty,
    /// Text to print before reading the next line.
    Message(String),
    /// The user asked to leave the loop.
    Quit,
}

impl Shell {
    /// Creates a shell with a freshly initialized calculator.
    #[must_use]
    pub fn new() -> Self {
        Self { calculator: Calculator::new() }
    }

    /// Processes one line of input.
    ///
    /// The control tokens `quit`, `exit` and `help` are matched
    /// case-insensitively against the whole trimmed line; an empty line is a
    /// no-op. Everything else is treated as a calculation and rendered as a
    /// result line or a category-labeled error line.
    ///
    /// ## Example
    /// ```
    /// use quadcalc::shell::{Response, Shell};
    ///
    /// let shell = Shell::new();
    ///
    /// assert_eq!(shell.process_line("5 + 3"),
    ///            Response::Message("Result: 8".to_string()));
    /// assert_eq!(shell.process_line("QUIT"), Response::Quit);
    /// ```
    #[must_use]
    pub fn process_line(&self, line: &str) -> Response {
        let cleaned = line.trim();

        if cleaned.eq_ignore_ascii_case("quit") || cleaned.eq_ignore_ascii_case("exit") {
            return Response::Quit;
        }

        if cleaned.eq_ignore_ascii_case("help") {
            return Response::Message(self.help_text());
        }

        if cleaned.is_empty() {
            return Response::Empty;
        }

        Response::Message(self.answer(cleaned))
    }

    /// Builds the banner shown when an interactive session starts.
    #[must_use]
    pub fn welcome_text(&self) -> String {
        let ruler = "=".repeat(RULER_WIDTH);
        let dashes = "-".repeat(RULER_WIDTH);
        let symbols = self.calculator
                          .available_operations()
                          .iter()
                          .map(|(symbol, _)| symbol.as_str())
                          .collect::<Vec<_>>()
                          .join(", ");
        let available = format!("Available operations: {symbols}");

        let lines = [ruler.as_str(),
                     "      QUADCALC - REPL MODE",
                     ruler.as_str(),
                     "Welcome to quadcalc!",
                     available.as_str(),
                     "Instructions:",
                     "• Enter calculations like: 5 + 3, 10 - 2, 7 * 4, 15 / 3",
                     "• Type 'help' for more information",
                     "• Type 'quit' or 'exit' to close the calculator",
                     "• Press Ctrl+C to exit at any time",
                     dashes.as_str()];

        lines.join("\n")
    }

    /// Builds the help screen listing the registered operations.
    #[must_use]
    pub fn help_text(&self) -> String {
        let ruler = "=".repeat(RULER_WIDTH);

        let mut lines = vec![ruler.clone(),
                             "             CALCULATOR HELP".to_string(),
                             ruler.clone(),
                             "Supported Operations:".to_string()];

        for (symbol, name) in self.calculator.available_operations() {
            lines.push(format!("  {symbol} - {name}"));
        }

        lines.push("Input Format: number operation number".to_string());
        lines.push("Examples: 5 + 3, 10.5 - 2.3, 7 * 4, 15 / 3".to_string());
        lines.push("Commands: help, quit, exit".to_string());
        lines.push(ruler);

        lines.join("\n")
    }

    /// Runs the interactive read-eval-print loop.
    ///
    /// The loop prints the welcome banner, then reads lines until the user
    /// quits, the input stream ends, or an interrupt arrives. All three ways
    /// out leave with a farewell message.
    ///
    /// # Errors
    /// Returns any readline failure other than end of input or interrupt.
    pub fn run(&self) -> rustyline::Result<()> {
        let mut editor = DefaultEditor::new()?;

        println!("{}", self.welcome_text());

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }

                    match self.process_line(&line) {
                        Response::Quit => {
                            println!("Thank you for using quadcalc!");
                            break;
                        },
                        Response::Message(text) => println!("{text}"),
                        Response::Empty => {},
                    }
                },
                Err(ReadlineError::Interrupted) => {
                    println!("Calculator interrupted by user. Goodbye!");
                    break;
                },
                Err(ReadlineError::Eof) => {
                    println!("Goodbye!");
                    break;
                },
                Err(error) => return Err(error),
            }
        }

        Ok(())
    }

    /// Processes lines from a reader without a prompt or banner.
    ///
    /// Used for piped input and file evaluation. A `quit` or `exit` line
    /// stops early; everything else prints as in the interactive loop.
    ///
    /// # Errors
    /// Returns the first read failure of the underlying reader.
    pub fn run_batch<R: BufRead>(&self, reader: R) -> std::io::Result<()> {
        for line in reader.lines() {
            match self.process_line(&line?) {
                Response::Quit => break,
                Response::Message(text) => println!("{text}"),
                Response::Empty => {},
            }
        }

        Ok(())
    }

    /// Renders one calculation outcome as a printable line.
    fn answer(&self, line: &str) -> String {
        match self.calculator.evaluate(line) {
            Ok(result) => format!("Result: {result}"),
            Err(error) => format!("{}: {error}", error.category()),
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
