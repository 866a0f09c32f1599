//! # Console I/O
//!
//! Line-oriented prompts over any `BufRead` / `Write` pair. The binary wires
//! it to stdin/stdout; tests feed it a scripted `Cursor`.
//!
//! Every read blocks until the operator answers. End of input surfaces as
//! [`AppError::InputClosed`].

use std::io::{BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use crate::error::{AppError, AppResult};

/// Operator console.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console. Screen clearing starts disabled.
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Enables or disables clearing the terminal between screens.
    pub fn with_screen_clearing(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Prints one line.
    pub fn print(&mut self, text: &str) -> AppResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Shows `message` and reads one line, without its line terminator.
    pub fn prompt(&mut self, message: &str) -> AppResult<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }

    /// Reads an integer. Surrounding whitespace is tolerated.
    pub fn prompt_int(&mut self, message: &str) -> AppResult<i64> {
        let answer = self.prompt(message)?;
        answer
            .trim()
            .parse::<i64>()
            .map_err(|source| AppError::InvalidNumber {
                input: answer.clone(),
                source,
            })
    }

    /// Waits for the operator to acknowledge `message`. The answer is discarded.
    pub fn pause(&mut self, message: &str) -> AppResult<()> {
        self.prompt(message).map(|_| ())
    }

    /// Clears the terminal and homes the cursor, if enabled.
    ///
    /// The control sequence goes through the console's own writer.
    pub fn clear(&mut self) -> AppResult<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Output written so far (used by tests to inspect what was printed).
    pub fn output(&self) -> &W {
        &self.output
    }
}

/// Upper-cases the first character and lower-cases the rest.
///
/// Confirmation prompts compare the capitalised answer, so only `n`/`N`
/// becomes `"N"`; `"no"` becomes `"No"`.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
