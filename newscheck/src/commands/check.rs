// newscheck/src/commands/check.rs
//! `newscheck check`: classify one snippet and print the verdict.

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use owo_colors::OwoColorize;
use std::io::{self, Read, Write};

use newscheck_core::{headless_classify, Assessment, Verdict};

use crate::cli::CheckCommand;
use crate::commands::{load_classifier, load_detector_config};

/// Runs the `check` command, writing the result to stdout.
pub fn run_check(cmd: CheckCommand) -> Result<()> {
    let config = load_detector_config(&cmd.artifacts)?;
    let classifier = load_classifier(&cmd.artifacts)?;

    let text = match cmd.text {
        Some(text) => text,
        None => {
            debug!("No TEXT argument; reading snippet from stdin.");
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
            buf
        }
    };

    let assessment = match headless_classify(&config, &classifier, &text)? {
        Some(a) => a,
        None => bail!("Input is empty; nothing to classify."),
    };

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    if cmd.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&assessment)?)?;
    } else {
        print_assessment(&mut writer, &assessment, supports_color)?;
    }
    Ok(())
}

/// Prints the headline and the confidence line.
pub fn print_assessment<W: Write>(writer: &mut W, assessment: &Assessment, color: bool) -> Result<()> {
    let headline = assessment.verdict.headline();
    if color {
        match assessment.verdict {
            Verdict::Real => writeln!(writer, "{}", headline.green().bold())?,
            Verdict::MostlyReal => writeln!(writer, "{}", headline.yellow().bold())?,
            Verdict::Fake => writeln!(writer, "{}", headline.red().bold())?,
        }
    } else {
        writeln!(writer, "{}", headline)?;
    }
    writeln!(writer, "Confidence: {}", assessment.confidence_display)?;
    Ok(())
}
