//! Drill session orchestration
//!
//! Runs the fixed sequence: value showcase, arithmetic demonstration, trivia
//! quiz, closing message.

use std::io::{BufRead, Write};

use crate::demo::{self, Showcase};
use crate::quiz;
use crate::utils::{AppResult, OutputStyle};

/// A full drill run over a line-based input source and an output sink.
///
/// Generic over the streams so tests can drive a session from in-memory
/// buffers; `main` wires it to locked stdin/stdout.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the whole drill. Completing normally, with any mix of right and
    /// wrong answers, is success; only a console I/O failure is an error.
    pub fn run(&mut self) -> AppResult<()> {
        writeln!(
            self.output,
            "📚 {}",
            OutputStyle::title("Data Types Revision Drill")
        )?;
        writeln!(self.output)?;

        Showcase::default().render(&mut self.output)?;
        writeln!(self.output)?;
        demo::render_arithmetic(&mut self.output)?;

        quiz::run(&mut self.input, &mut self.output)?;

        writeln!(self.output)?;
        writeln!(
            self.output,
            "🎉 {}",
            OutputStyle::success("You just revised data types like a pro!")
        )?;

        Ok(())
    }
}
