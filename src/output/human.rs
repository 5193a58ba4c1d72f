#![forbid(unsafe_code)]

//! Human-readable output formatter with colorization support

use crate::hotwords::Hotword;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

const SEPARATOR_WIDTH: usize = 60;

/// Human-readable hotword listing
///
/// Renders a numbered list with a one-line preview per entry, optionally
/// colorized for terminal display.
pub struct HumanFormatter {
    color_choice: ColorChoice,
}

impl HumanFormatter {
    /// Creates a new HumanFormatter with the specified color choice
    pub fn new(color_choice: ColorChoice) -> Self {
        HumanFormatter { color_choice }
    }

    /// Format a listing as a plain string (no colors)
    pub fn format_list(&self, title: &str, hotwords: &[Hotword]) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} ({})\n", title, entry_count(hotwords.len())));
        output.push_str(&"=".repeat(SEPARATOR_WIDTH));
        output.push('\n');

        if hotwords.is_empty() {
            output.push_str("\n(no hotwords)\n");
            return output;
        }

        for (i, hotword) in hotwords.iter().enumerate() {
            output.push_str(&format!("\n{}. {}\n", i + 1, trigger_label(hotword)));
            output.push_str(&format!("   {}\n", hotword.preview()));
        }

        output
    }

    /// Write a listing to stdout with colors
    pub fn write_list(&self, title: &str, hotwords: &[Hotword]) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);

        stdout.set_color(ColorSpec::new().set_bold(true))?;
        write!(stdout, "{}", title)?;
        stdout.reset()?;
        writeln!(stdout, " ({})", entry_count(hotwords.len()))?;
        writeln!(stdout, "{}", "=".repeat(SEPARATOR_WIDTH))?;

        if hotwords.is_empty() {
            writeln!(stdout)?;
            writeln!(stdout, "(no hotwords)")?;
            return Ok(());
        }

        for (i, hotword) in hotwords.iter().enumerate() {
            writeln!(stdout)?;
            write!(stdout, "{}. ", i + 1)?;
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
            write!(stdout, "{}", trigger_label(hotword))?;
            stdout.reset()?;
            writeln!(stdout)?;
            writeln!(stdout, "   {}", hotword.preview())?;
        }

        Ok(())
    }
}

fn trigger_label(hotword: &Hotword) -> String {
    let trigger = hotword.trigger();
    if trigger.is_empty() {
        "(no trigger)".to_string()
    } else {
        trigger.to_string()
    }
}

fn entry_count(count: usize) -> String {
    if count == 1 {
        "1 entry".to_string()
    } else {
        format!("{} entries", count)
    }
}
