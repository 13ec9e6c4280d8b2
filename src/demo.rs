//! Primitive value showcase and arithmetic demonstration
//!
//! The first, non-interactive phase of a drill: a fixed record of example
//! values printed one labeled line at a time, followed by the numeric
//! promotion and division demonstrations.

use std::io::Write;

use crate::utils::{AppResult, OutputStyle};

/// The fixed showcase record. Built once per session, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Showcase {
    pub name: &'static str,
    pub age: i32,
    pub height: f64,
    pub is_fun: bool,
    pub initial: char,
}

impl Default for Showcase {
    fn default() -> Self {
        Self {
            name: "Ayush",
            age: 24,
            height: 5.9,
            is_fun: true,
            initial: 'A',
        }
    }
}

impl Showcase {
    /// Write one labeled line per field, in fixed order.
    pub fn render<W: Write>(&self, output: &mut W) -> AppResult<()> {
        writeln!(output, "{} {}", OutputStyle::label("Name:"), self.name)?;
        writeln!(output, "{} {}", OutputStyle::label("Age:"), self.age)?;
        writeln!(output, "{} {}", OutputStyle::label("Height:"), self.height)?;
        writeln!(
            output,
            "{} {}",
            OutputStyle::label("Learning types is fun?"),
            self.is_fun
        )?;
        writeln!(output, "{} {}", OutputStyle::label("Initial:"), self.initial)?;
        Ok(())
    }
}

/// Add an integer and a float, widening the integer first.
pub fn promote_and_add(x: i32, y: f64) -> f64 {
    f64::from(x) + y
}

/// Integer division: discards the remainder, keeps the sign.
pub fn truncating_divide(numerator: i32, divisor: i32) -> i32 {
    numerator / divisor
}

/// Mixed division: the integer numerator widens to a float quotient.
pub fn mixed_divide(numerator: i32, divisor: f64) -> f64 {
    f64::from(numerator) / divisor
}

/// Write the promotion and division demonstration lines.
///
/// Float results are rendered with `{:?}` so a whole-number quotient still
/// reads as a float (`9.0` rather than `9`).
pub fn render_arithmetic<W: Write>(output: &mut W) -> AppResult<()> {
    let x = 7;
    let y = 2.0;

    writeln!(
        output,
        "{} {:?}",
        OutputStyle::label("7 + 2.0 (promoted) ="),
        promote_and_add(x, y)
    )?;
    writeln!(
        output,
        "{} {}",
        OutputStyle::label("7 / 2 (integer) ="),
        truncating_divide(x, 2)
    )?;
    writeln!(
        output,
        "{} {:?}",
        OutputStyle::label("7 / 2.0 (mixed) ="),
        mixed_divide(x, y)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string<F: FnOnce(&mut Vec<u8>) -> AppResult<()>>(f: F) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_promotion_widens_to_float() {
        assert_eq!(promote_and_add(7, 2.0), 9.0);
        assert_eq!(promote_and_add(5, 2.0), 7.0);
    }

    #[test]
    fn test_integer_division_truncates() {
        assert_eq!(truncating_divide(7, 2), 3);
        assert_eq!(truncating_divide(9, 4), 2);
    }

    #[test]
    fn test_integer_division_keeps_sign() {
        assert_eq!(truncating_divide(-7, 2), -3);
        assert_eq!(truncating_divide(7, -2), -3);
    }

    #[test]
    fn test_mixed_division_yields_float_quotient() {
        assert_eq!(mixed_divide(7, 2.0), 3.5);
    }

    #[test]
    fn test_showcase_defaults() {
        let showcase = Showcase::default();
        assert_eq!(showcase.name, "Ayush");
        assert_eq!(showcase.age, 24);
        assert_eq!(showcase.height, 5.9);
        assert!(showcase.is_fun);
        assert_eq!(showcase.initial, 'A');
    }

    #[test]
    fn test_showcase_renders_every_field() {
        let output = render_to_string(|buf| Showcase::default().render(buf));

        assert!(output.contains("Ayush"));
        assert!(output.contains("24"));
        assert!(output.contains("5.9"));
        assert!(output.contains("true"));
        assert!(output.contains("Initial:"));
        assert!(output.contains('A'));
        assert_eq!(output.lines().count(), 5);
    }

    #[test]
    fn test_arithmetic_lines_show_float_and_truncated_results() {
        let output = render_to_string(render_arithmetic);

        assert!(output.contains("9.0"));
        assert!(output.contains("(integer) =") && output.contains(" 3"));
        assert!(output.contains("3.5"));
    }
}
