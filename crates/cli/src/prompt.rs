//! Interactive prompts for registering two users and their titles.
//!
//! `Prompter` is generic over its reader and writer so sessions can be
//! scripted in tests.

use anyhow::{bail, Result};
use colored::Colorize;
use data_loader::Catalog;
use recommender::{AddOutcome, PreferenceError, UserProfile};
use std::io::{BufRead, Write};
use tracing::warn;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `message` and read one trimmed line. Fails once input is closed.
    pub fn ask(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{} ", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the answer is yes or no
    pub fn ask_yes_no(&mut self, message: &str) -> Result<bool> {
        loop {
            let answer = self.ask(&format!("{} (yes/no)", message))?;
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "{}", "Please answer yes or no.".yellow())?,
            }
        }
    }

    /// Ask for a non-empty name
    pub fn ask_name(&mut self, label: &str) -> Result<String> {
        loop {
            let name = self.ask(&format!("Name of {}:", label))?;
            if !name.is_empty() {
                return Ok(name);
            }
            writeln!(self.output, "{}", "A name is required.".yellow())?;
        }
    }

    /// Register one user and collect titles until they decline to add more.
    ///
    /// Unknown or blank titles are reported and asked for again; the user
    /// always ends up with at least one title.
    pub fn collect_user(&mut self, label: &str, catalog: &Catalog) -> Result<UserProfile> {
        let name = self.ask_name(label)?;
        let mut user = UserProfile::new(name);

        loop {
            let query = self.ask(&format!("A title {} likes:", user.name()))?;
            match user.add_preference(&query, catalog) {
                Ok(AddOutcome::Added { title }) => {
                    writeln!(self.output, "{} Added {}", "✓".green(), title.bold())?;
                }
                Ok(AddOutcome::AlreadyPresent) => {
                    writeln!(self.output, "{} is already on the list", query.bold())?;
                }
                Err(err @ PreferenceError::NotFound { .. }) => {
                    warn!("{}", err);
                    writeln!(self.output, "{} {}, try another title", "✗".red(), err)?;
                    continue;
                }
                Err(err @ PreferenceError::EmptyQuery) => {
                    writeln!(self.output, "{} {}", "✗".red(), err)?;
                    continue;
                }
            }

            if !self.ask_yes_no("Add another title?")? {
                return Ok(user);
            }
        }
    }

    #[cfg(test)]
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::TitleRecord;
    use std::io::Cursor;

    fn create_test_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        let titles = [
            ("tm1", "Life of Brian", "['comedy']"),
            ("tm2", "Heat", "['crime']"),
        ];
        for (id, title, genres) in titles {
            catalog.insert(TitleRecord::new(id, title, "MOVIE", "", genres, "R", 8.0));
        }
        catalog
    }

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_yes_no_reprompts() {
        let mut p = prompter("maybe\nYES\n");
        assert!(p.ask_yes_no("Continue?").unwrap());

        let output = String::from_utf8(p.output().clone()).unwrap();
        assert!(output.contains("Please answer yes or no."));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut p = prompter("");
        assert!(p.ask("Anything?").is_err());
    }

    #[test]
    fn test_collect_user() {
        let catalog = create_test_catalog();
        let script = "\nAlice\nThe Office\nbrian\ny\nLife of Brian\nno\n";
        let mut p = prompter(script);

        let user = p.collect_user("the first user", &catalog).unwrap();
        assert_eq!(user.name(), "Alice");
        assert_eq!(user.preferences().len(), 1);
        assert_eq!(user.preferences()[0].title, "Life of Brian");

        let output = String::from_utf8(p.output().clone()).unwrap();
        assert!(output.contains("A name is required."));
        assert!(output.contains("No title matches 'The Office'"));
        assert!(output.contains("is already on the list"));
    }
}
