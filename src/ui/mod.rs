//! Console prompts

use inquire::{Select, Text};

use crate::error::Result;

/// Asks the user to make the choices the setup run needs
pub trait Prompter {
    /// Pick one of `options`, starting on `start`. Returns the chosen index.
    fn select(&mut self, message: &str, options: &[String], start: usize) -> Result<usize>;

    /// Show `listing`, then read one line of free text.
    fn input(&mut self, message: &str, listing: &[String]) -> Result<String>;
}

/// Interactive terminal prompts
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn select(&mut self, message: &str, options: &[String], start: usize) -> Result<usize> {
        let choice = Select::new(message, options.to_vec())
            .with_starting_cursor(start.min(options.len().saturating_sub(1)))
            .with_page_size(15)
            .with_help_message("↑↓ to move, type to filter, ENTER to select")
            .raw_prompt()?;
        Ok(choice.index)
    }

    fn input(&mut self, message: &str, listing: &[String]) -> Result<String> {
        for line in listing {
            println!("{}", line);
        }
        let answer = Text::new(message)
            .with_placeholder("latest")
            .with_help_message("Number from the list, a release tag, or blank for the latest")
            .prompt()?;
        Ok(answer)
    }
}
