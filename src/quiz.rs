//! Trivia questions and answer checking
//!
//! The interactive phase of a drill: three fixed questions, one free-text
//! answer line each, with a feedback line per answer.

use std::io::{BufRead, Write};

use crate::utils::{AppResult, OutputStyle};

/// A single trivia question with its expected answer and feedback lines.
#[derive(Debug, Clone)]
pub struct Question {
    pub prompt: String,
    pub expected: String,
    pub success: String,
    pub correction: String,
}

impl Question {
    pub fn new(prompt: &str, expected: &str, success: &str, correction: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            expected: expected.to_string(),
            success: success.to_string(),
            correction: correction.to_string(),
        }
    }

    /// Check a raw answer line against the expected answer.
    ///
    /// Leading/trailing whitespace is ignored. Matching is ASCII
    /// case-insensitive, which is locale-safe for the fixed English answers.
    pub fn check(&self, answer: &str) -> bool {
        answer.trim().eq_ignore_ascii_case(&self.expected)
    }

    /// Ask the question: write the prompt, read one answer line, write the
    /// feedback line. Returns whether the answer was correct.
    pub fn ask<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> AppResult<bool> {
        write!(output, "{} ", self.prompt)?;
        output.flush()?;

        let answer = read_answer(input)?;
        let correct = self.check(&answer);
        if correct {
            writeln!(output, "✅ {}", OutputStyle::success(&self.success))?;
        } else {
            writeln!(output, "❌ {}", OutputStyle::error(&self.correction))?;
        }

        Ok(correct)
    }
}

/// Read one answer line from the input source.
///
/// End of input counts as an empty (and therefore incorrect) answer, so a
/// drill fed a short script still runs to completion.
fn read_answer<R: BufRead>(input: &mut R) -> AppResult<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

/// The fixed three-question bank, in drill order.
pub fn question_bank() -> Vec<Question> {
    vec![
        Question::new(
            "Q1: What type does this produce? 5 + 2.0 →",
            "double",
            "Correct!",
            "Nope! It's a double.",
        ),
        Question::new(
            "Q2: Can a variable name start with an underscore? (yes/no) →",
            "yes",
            "Correct!",
            "It can! '_score' is a valid identifier.",
        ),
        Question::new(
            "Q3: Is 'loop' a valid variable name? →",
            "no",
            "Correct!",
            "'loop' is a reserved keyword.",
        ),
    ]
}

/// Run the trivia phase: a header line, then each question in order.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> AppResult<()> {
    writeln!(output)?;
    writeln!(output, "🧠 {}", OutputStyle::title("Trivia Time!"))?;

    for question in question_bank() {
        question.ask(input, output)?;
    }

    Ok(())
}
