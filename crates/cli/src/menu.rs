//! Interactive text menu driving the QueryEngine.
//!
//! The menu is a small state machine. Each call to [`Menu::step`] reads at
//! most one line of input, performs one transition and returns the new
//! state. Reaching [`MenuState::Exit`] only stops the loop; leaving the
//! process is up to the caller.

use data_loader::Year;
use query_engine::QueryEngine;
use std::io::{self, BufRead, Write};
use thiserror::Error;

const MENU_TEXT: &str = "\
Please choose an option between 1-4
1. Show movies released in the specified year
2. Show highest rated movie for each year
3. Show the title and year of release of all movies in a specific language
4. Exit from the program";

/// Where the menu currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    AwaitingYearInput,
    AwaitingLanguageInput,
    Exit,
}

/// Interactive input that is not what the current prompt expects.
///
/// Always recovered: the line is discarded and the prompt repeated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' is not a valid year")]
    InvalidYear(String),

    #[error("no language given")]
    EmptyLanguage,
}

/// Parse a menu choice. Any integer is accepted here; unknown numbers are
/// reported as an invalid choice by the menu itself.
pub fn parse_choice(input: &str) -> Result<i64, InputError> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| InputError::NotANumber(input.to_string()))
}

/// Parse a requested year. Any integer is accepted; years no movie can
/// have simply match nothing.
pub fn parse_year(input: &str) -> Result<i64, InputError> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| InputError::InvalidYear(input.to_string()))
}

pub fn parse_language(input: &str) -> Result<&str, InputError> {
    match input.trim() {
        "" => Err(InputError::EmptyLanguage),
        language => Ok(language),
    }
}

/// The menu loop, generic over its input and output streams.
pub struct Menu<'a, R, W> {
    engine: QueryEngine<'a>,
    input: R,
    output: W,
    state: MenuState,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(engine: QueryEngine<'a>, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
            state: MenuState::MainMenu,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Consume the menu, handing back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user chooses to exit or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        while self.step()? != MenuState::Exit {}
        Ok(())
    }

    /// Perform exactly one transition and return the new state.
    pub fn step(&mut self) -> io::Result<MenuState> {
        self.state = match self.state {
            MenuState::MainMenu => self.main_menu()?,
            MenuState::AwaitingYearInput => self.year_prompt()?,
            MenuState::AwaitingLanguageInput => self.language_prompt()?,
            MenuState::Exit => MenuState::Exit,
        };
        Ok(self.state)
    }

    fn main_menu(&mut self) -> io::Result<MenuState> {
        writeln!(self.output, "{MENU_TEXT}")?;
        let Some(line) = self.prompt("Enter your choice (1-4): ")? else {
            return Ok(MenuState::Exit);
        };

        let choice = match parse_choice(&line) {
            Ok(choice) => choice,
            Err(err) => return self.reject(err, MenuState::MainMenu),
        };

        let next = match choice {
            1 => {
                writeln!(self.output, "1. Show movies released in the specified year")?;
                MenuState::AwaitingYearInput
            }
            2 => {
                writeln!(self.output, "2. Show highest rated movie for each year")?;
                self.show_highest_rated()?;
                MenuState::MainMenu
            }
            3 => {
                writeln!(
                    self.output,
                    "3. Show movies and their year of release for a specific language"
                )?;
                MenuState::AwaitingLanguageInput
            }
            4 => {
                writeln!(self.output, "4. Exit from the program")?;
                MenuState::Exit
            }
            _ => {
                writeln!(
                    self.output,
                    "Invalid choice. Please enter a number between 1 and 4."
                )?;
                MenuState::MainMenu
            }
        };
        Ok(next)
    }

    fn year_prompt(&mut self) -> io::Result<MenuState> {
        let Some(line) = self.prompt("Enter the year for which you want to see movies: ")? else {
            return Ok(MenuState::Exit);
        };

        let year = match parse_year(&line) {
            Ok(year) => year,
            Err(err) => return self.reject(err, MenuState::AwaitingYearInput),
        };

        let titles = match Year::try_from(year) {
            Ok(year) => self.engine.by_year(year),
            Err(_) => Vec::new(),
        };
        if titles.is_empty() {
            writeln!(self.output, "No movies found for the year {year}.")?;
        }
        for title in titles {
            writeln!(self.output, "{title}")?;
        }
        Ok(MenuState::MainMenu)
    }

    fn language_prompt(&mut self) -> io::Result<MenuState> {
        let Some(line) = self.prompt("Enter a language: ")? else {
            return Ok(MenuState::Exit);
        };

        let language = match parse_language(&line) {
            Ok(language) => language,
            Err(err) => return self.reject(err, MenuState::AwaitingLanguageInput),
        };

        let matches = self.engine.by_language(language);
        if matches.is_empty() {
            writeln!(self.output, "No movies found for the given language.")?;
        }
        for hit in matches {
            writeln!(self.output, "{hit}")?;
        }
        Ok(MenuState::MainMenu)
    }

    fn show_highest_rated(&mut self) -> io::Result<()> {
        let best = self.engine.highest_rated_per_year();
        if best.is_empty() {
            writeln!(self.output, "No movies loaded.")?;
        }
        for entry in best {
            writeln!(self.output, "{entry}")?;
        }
        Ok(())
    }

    /// Report bad input and stay in `state` so the prompt is repeated.
    fn reject(&mut self, err: InputError, state: MenuState) -> io::Result<MenuState> {
        tracing::debug!("Rejected input: {}", err);
        writeln!(self.output, "Invalid input: {err}. Please try again.")?;
        Ok(state)
    }

    /// Print `message` and read one line. `None` means end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }
}
