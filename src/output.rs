//! Colored console output for discovery runs.

use crate::types::DiscoveryResult;
use colored::Colorize;

/// Console output handler with colors and formatting.
pub struct ConsoleOutput {
    verbose: bool,
    json_mode: bool,
}

impl ConsoleOutput {
    /// Create a new console output handler.
    pub fn new(verbose: bool, json_mode: bool) -> Self {
        Self { verbose, json_mode }
    }

    /// Print discovery start message.
    pub fn print_start(&self, base: &str) {
        if self.json_mode {
            return;
        }

        println!(
            "{} Discovering credential via {}",
            "[*]".bright_blue(),
            base.bright_white()
        );
    }

    /// Print the discovered credential and race stats.
    pub fn print_result(&self, result: &DiscoveryResult) {
        if self.json_mode {
            return;
        }

        println!();
        println!(
            "{} {}",
            "[+]".bright_green(),
            result.credential.bright_white().bold()
        );
        println!(
            "{} {} candidate keys raced in {:.2}s",
            "[*]".bright_blue(),
            result.candidates,
            result.duration_secs
        );
    }

    /// Print an example query the credential works for (verbose only).
    pub fn print_hint(&self, credential: &str) {
        if self.json_mode || !self.verbose {
            return;
        }

        let hint = format!(
            "try: curl 'https://content.googleapis.com/youtube/v3/channels?part=snippet&forUsername=<username>&key={}' -H 'X-Origin: https://developers.google.com'",
            credential
        );
        println!("{} {}", "[.]".dimmed(), hint.dimmed());
    }
}
