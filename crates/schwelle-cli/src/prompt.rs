// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Interactive prompts with validation loops. Invalid answers are reported and
// the question is asked again; only end of input ends a prompt early.

use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use schwelle_core::ThresholdMode;
use schwelle_core::error::{Result, SchwelleError};
use tracing::debug;

/// Question/answer channel over any line reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of output.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Ask for the image filename, relative to the input directory.
    pub fn image_name(&mut self) -> Result<String> {
        self.ask("Enter image name (with extension): ")
    }

    /// Show the mode menu and ask until the answer is 1 or 2.
    pub fn mode(&mut self) -> Result<ThresholdMode> {
        self.say("\nSelect thresholding mode:")?;
        self.say("  1 - Manual thresholding")?;
        self.say("  2 - Otsu's thresholding")?;

        loop {
            let answer = self.ask("Enter mode (1 or 2): ")?;
            if let Some(mode) = ThresholdMode::from_choice(&answer) {
                debug!(%mode, "Mode selected");
                return Ok(mode);
            }
            self.say("Invalid input. Please enter 1 or 2.")?;
        }
    }

    /// Ask for a manual threshold in 0..=255.
    pub fn manual_threshold(&mut self) -> Result<u8> {
        let value = self.ask_in_range(
            "Enter threshold value (0-255): ",
            0..=255,
            "Threshold must be between 0 and 255.",
        )?;
        Ok(u8::try_from(value).unwrap_or(u8::MAX))
    }

    /// Ask for the Otsu search step in 1..=255.
    pub fn threshold_increment(&mut self) -> Result<usize> {
        let value = self.ask_in_range(
            "Enter a threshold increment value (1 recommended): ",
            1..=255,
            "Threshold increment must be between 1 and 255.",
        )?;
        Ok(usize::try_from(value).unwrap_or(1))
    }

    fn ask_in_range(
        &mut self,
        question: &str,
        range: RangeInclusive<i64>,
        out_of_range: &str,
    ) -> Result<i64> {
        loop {
            let answer = self.ask(question)?;
            match answer.parse::<i64>() {
                Ok(value) if range.contains(&value) => return Ok(value),
                Ok(_) => self.say(out_of_range)?,
                Err(_) => self.say("Invalid input. Please enter an integer.")?,
            }
        }
    }

    /// Write the question without a newline and read one trimmed line.
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SchwelleError::InputClosed);
        }
        Ok(line.trim().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.output).unwrap()
    }

    #[test]
    fn image_name_is_trimmed() {
        let mut p = prompter("  coins.png \n");
        assert_eq!(p.image_name().unwrap(), "coins.png");
    }

    #[test]
    fn mode_reprompts_until_valid() {
        let mut p = prompter("3\nabc\n\n2\n");
        assert_eq!(p.mode().unwrap(), ThresholdMode::Otsu);
        let out = transcript(p);
        assert_eq!(out.matches("Invalid input. Please enter 1 or 2.").count(), 3);
        assert!(out.contains("2 - Otsu's thresholding"));
    }

    #[test]
    fn manual_threshold_rejects_out_of_range_and_text() {
        let mut p = prompter("256\n-1\nfifty\n50\n");
        assert_eq!(p.manual_threshold().unwrap(), 50);
        let out = transcript(p);
        assert_eq!(out.matches("Threshold must be between 0 and 255.").count(), 2);
        assert_eq!(out.matches("Invalid input. Please enter an integer.").count(), 1);
    }

    #[test]
    fn manual_threshold_accepts_bounds() {
        assert_eq!(prompter("0\n").manual_threshold().unwrap(), 0);
        assert_eq!(prompter("255\n").manual_threshold().unwrap(), 255);
    }

    #[test]
    fn increment_rejects_zero() {
        let mut p = prompter("0\n1.5\n4\n");
        assert_eq!(p.threshold_increment().unwrap(), 4);
        let out = transcript(p);
        assert!(out.contains("Threshold increment must be between 1 and 255."));
        assert!(out.contains("Invalid input. Please enter an integer."));
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut p = prompter("9\n");
        assert!(matches!(p.mode(), Err(SchwelleError::InputClosed)));
        assert!(matches!(prompter("").image_name(), Err(SchwelleError::InputClosed)));
    }
}
