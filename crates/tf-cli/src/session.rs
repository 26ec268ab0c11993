//! Interactive session: menu, batch-size prompt and the generate/export flow

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use tf_core::{
    Batch, RandomSampler, TipConfig, UniqueTipGenerator, Variant, analyze_distribution,
    export_batch, find_identical_pair, find_record, parse_batch_size, tip_label,
};

/// Top-level menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Generate(Variant),
    ShowRecord,
    Quit,
}

impl MenuChoice {
    /// "1"/"2" generate, "3" shows the last record, anything else quits
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::Generate(Variant::Swisslos),
            "2" => MenuChoice::Generate(Variant::EuroMillions),
            "3" => MenuChoice::ShowRecord,
            _ => MenuChoice::Quit,
        }
    }
}

/// What a generate request ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Batch validated and written to `path`
    Exported { path: PathBuf, tips: usize },
    /// Duplicate check failed; nothing was written
    Rejected,
    /// No valid batch size within the allowed attempts
    GaveUp,
}

pub struct Session<R: BufRead, W: Write> {
    config: TipConfig,
    input: R,
    out: W,
    generator: UniqueTipGenerator<RandomSampler>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: TipConfig, input: R, out: W) -> Self {
        let generator = UniqueTipGenerator::new(RandomSampler::new(config.seed))
            .with_draw_limit(config.draw_limit);
        Self {
            config,
            input,
            out,
            generator,
        }
    }

    pub fn config(&self) -> &TipConfig {
        &self.config
    }

    /// Show the menu once and act on the choice
    pub fn run_menu(&mut self) -> Result<Option<Outcome>> {
        self.print_menu()?;
        let choice = match self.read_line()? {
            Some(line) => MenuChoice::parse(&line),
            None => MenuChoice::Quit,
        };

        match choice {
            MenuChoice::Generate(variant) => self.prompt_and_generate(variant).map(Some),
            MenuChoice::ShowRecord => {
                self.show_record()?;
                Ok(None)
            }
            MenuChoice::Quit => {
                writeln!(self.out, "Bye ...")?;
                Ok(None)
            }
        }
    }

    /// Ask for a batch size, then generate, check and export
    pub fn prompt_and_generate(&mut self, variant: Variant) -> Result<Outcome> {
        match self.prompt_batch_size(variant)? {
            Some(count) => self.generate(variant, count),
            None => Ok(Outcome::GaveUp),
        }
    }

    /// Read a batch size, allowing `max_attempts` invalid answers
    pub fn prompt_batch_size(&mut self, variant: Variant) -> Result<Option<usize>> {
        let max_attempts = self.config.max_attempts;

        for attempt in 1..=max_attempts {
            write!(self.out, "Please enter number of {} tips: ", variant)?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.out)?;
                writeln!(self.out, "No number of tips entered.")?;
                return Ok(None);
            };

            match parse_batch_size(&line, variant, self.config.max_tips) {
                Ok(count) => return Ok(Some(count)),
                Err(e) => {
                    warn!("Rejected batch size {:?}: {}", line.trim(), e);
                    writeln!(
                        self.out,
                        "Invalid input ({}). You have overall {} attempts.",
                        e, max_attempts
                    )?;
                    writeln!(self.out, "Attempt number: {}", attempt)?;
                }
            }
        }

        writeln!(self.out, "No valid number of tips after {} attempts.", max_attempts)?;
        Ok(None)
    }

    /// Generate `count` tips, then print, validate, analyse and export them
    pub fn generate(&mut self, variant: Variant, count: usize) -> Result<Outcome> {
        let batch = self
            .generator
            .generate(variant, count)
            .with_context(|| format!("generating {} {} tips", count, variant))?;

        self.process_batch(batch)
    }

    /// Print a batch, stop on a duplicate pair, otherwise analyse and export it
    pub fn process_batch(&mut self, batch: Batch) -> Result<Outcome> {
        let variant = batch.variant();
        self.print_batch(&batch)?;

        if let Some((a, b)) = find_identical_pair(batch.tips()) {
            writeln!(
                self.out,
                "Validation: {} and {} are identical!",
                tip_label(a),
                tip_label(b)
            )?;
            writeln!(self.out, "New generation of numbers necessary!")?;
            return Ok(Outcome::Rejected);
        }
        writeln!(self.out, "Validation: Valid tip set!")?;

        let report = analyze_distribution(batch.tips());
        writeln!(self.out, "Summary of distribution analysis for tips:")?;
        for line in report.lines() {
            writeln!(self.out, "{}", line)?;
        }

        let path = self.config.record_path.clone();
        export_batch(&batch, &path)
            .with_context(|| format!("writing tips to {}", path.display()))?;
        writeln!(self.out, "Tips written to {} ...", path.display())?;
        info!("Exported {} {} tips", batch.len(), variant);

        Ok(Outcome::Exported {
            path,
            tips: batch.len(),
        })
    }

    /// Look for the last record next to the configured path and print it
    pub fn show_record(&mut self) -> Result<bool> {
        let record_path = &self.config.record_path;
        let dir = match record_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let preferred = record_path.file_name().map(Path::new);

        match find_record(&dir, preferred) {
            Some(found) => {
                writeln!(self.out, "A JSON file with tips was found! Great!")?;
                info!("Showing record {}", found.path.display());
                for line in found.record.display_lines() {
                    writeln!(self.out, "{}", line)?;
                }
                Ok(true)
            }
            None => {
                writeln!(self.out, "No JSON file with tips was found! Sorry!")?;
                Ok(false)
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        let menu = [
            "========LOTTERY MENU==========",
            "==============================",
            "1: Generating Swisslos tips",
            "2: Generating EuroMillions tips",
            "3: Loading past tips (if present)",
            "Everything else: Quit",
            "Please make your choice: ",
        ];
        for line in menu {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn print_batch(&mut self, batch: &Batch) -> Result<()> {
        let heading = format!("Your {} tips: Good luck", batch.variant());
        writeln!(self.out, "{}", heading)?;
        writeln!(self.out, "{}", "=".repeat(heading.len()))?;
        for (label, tip) in batch.labeled() {
            writeln!(self.out, "{}: {}", label, tip)?;
        }
        Ok(())
    }

    /// Next input line, or None at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line).context("reading input")?;
        Ok((n > 0).then_some(line))
    }
}
