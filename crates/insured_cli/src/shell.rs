//! Interactive console shell over the person registry.
//!
//! # Responsibility
//! - Run the main menu loop and the add/list/search/delete flows.
//! - Re-prompt until each raw field passes its validator.
//!
//! # Invariants
//! - The registry is only mutated with validated input.
//! - End of input behaves like choosing "quit"; saving is the caller's job.

use crate::messages::{
    validation_message, ADD_TITLE, AGE_PROMPT, DELETE_CANCELLED, DELETE_CONFIRM,
    DELETE_CONFIRM_INVALID, DELETE_ID_NOT_FOUND, DELETE_ID_PROMPT, FIRST_NAME_PROMPT, HEADLINE,
    LAST_NAME_PROMPT, MAIN_MENU, MENU_INVALID, MENU_PROMPT, NO_RECORDS, PHONE_PROMPT,
    RECORD_ADDED, RECORD_DELETED, RETRY_PROMPT, SEARCH_TITLE, YES_NO_PROMPT,
};
use crate::table::render_person_table;
use insured_core::{
    normalize_phone_number, parse_age, validate_age, validate_name, validate_phone_number,
    FieldValidator, PersonId, PersonRegistry, Validation,
};
use log::info;
use std::io::{self, BufRead, Write};

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Search,
    Delete,
    Quit,
}

impl MenuChoice {
    /// Parses a menu answer (`1`..=`5`).
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().parse::<u8>().ok()? {
            1 => Some(Self::Add),
            2 => Some(Self::List),
            3 => Some(Self::Search),
            4 => Some(Self::Delete),
            5 => Some(Self::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Console session bound to one registry.
pub struct Shell<'r, R, W> {
    input: R,
    output: W,
    registry: &'r mut PersonRegistry,
}

impl<'r, R: BufRead, W: Write> Shell<'r, R, W> {
    pub fn new(input: R, output: W, registry: &'r mut PersonRegistry) -> Self {
        Self {
            input,
            output,
            registry,
        }
    }

    /// Runs the menu loop until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{HEADLINE}\n\n{MAIN_MENU}\n")?;
            write!(self.output, "{MENU_PROMPT}")?;

            let Some(choice) = self.read_menu_choice()? else {
                break;
            };
            let flow = match choice {
                MenuChoice::Add => self.add_person()?,
                MenuChoice::List => self.list_persons()?,
                MenuChoice::Search => self.search_persons()?,
                MenuChoice::Delete => self.delete_person()?,
                MenuChoice::Quit => Flow::Quit,
            };
            if flow == Flow::Quit {
                break;
            }
        }

        info!(
            "event=shell_exit module=cli status=ok records={}",
            self.registry.len()
        );
        self.output.flush()
    }

    fn read_menu_choice(&mut self) -> io::Result<Option<MenuChoice>> {
        loop {
            let Some(answer) = self.read_answer()? else {
                return Ok(None);
            };
            if let Some(choice) = MenuChoice::parse(&answer) {
                return Ok(Some(choice));
            }
            self.reject(MENU_INVALID)?;
        }
    }

    fn add_person(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n{ADD_TITLE}")?;

        let Some(first_name) = self.prompt_validated(FIRST_NAME_PROMPT, validate_name)? else {
            return Ok(Flow::Quit);
        };
        let Some(last_name) = self.prompt_validated(LAST_NAME_PROMPT, validate_name)? else {
            return Ok(Flow::Quit);
        };
        let Some(age) = self.prompt_validated(AGE_PROMPT, validate_age)? else {
            return Ok(Flow::Quit);
        };
        let Some(phone_number) = self.prompt_validated(PHONE_PROMPT, validate_phone_number)?
        else {
            return Ok(Flow::Quit);
        };

        let age = parse_age(&age).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "validated age is out of range")
        })?;
        let id = self
            .registry
            .add_person(
                first_name,
                last_name,
                age,
                normalize_phone_number(&phone_number),
            )
            .id();

        writeln!(self.output, "\n{RECORD_ADDED} (id {id}).")?;
        Ok(Flow::Continue)
    }

    fn list_persons(&mut self) -> io::Result<Flow> {
        let table = render_person_table(self.registry.list_all());
        write!(self.output, "\n{table}")?;
        Ok(Flow::Continue)
    }

    fn search_persons(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n{SEARCH_TITLE}")?;

        let Some(first_name) = self.prompt_validated(FIRST_NAME_PROMPT, validate_name)? else {
            return Ok(Flow::Quit);
        };
        let Some(last_name) = self.prompt_validated(LAST_NAME_PROMPT, validate_name)? else {
            return Ok(Flow::Quit);
        };

        let table = render_person_table(self.registry.find_by_name(&first_name, &last_name));
        write!(self.output, "\n{table}")?;
        Ok(Flow::Continue)
    }

    fn delete_person(&mut self) -> io::Result<Flow> {
        if self.registry.is_empty() {
            writeln!(self.output, "\n{NO_RECORDS}")?;
            return Ok(Flow::Continue);
        }

        let table = render_person_table(self.registry.list_all());
        write!(self.output, "\n{table}\n{DELETE_ID_PROMPT}")?;

        let id = loop {
            let Some(answer) = self.read_answer()? else {
                return Ok(Flow::Quit);
            };
            match answer.parse::<PersonId>() {
                Ok(id) if self.registry.find_by_id(id).is_some() => break id,
                _ => self.reject(DELETE_ID_NOT_FOUND)?,
            }
        };

        let selected = render_person_table(self.registry.find_by_id(id));
        write!(
            self.output,
            "\n{selected}\n{DELETE_CONFIRM}\n{YES_NO_PROMPT}"
        )?;

        loop {
            let Some(answer) = self.read_answer()? else {
                return Ok(Flow::Quit);
            };
            match answer.to_lowercase().as_str() {
                "yes" => {
                    if self.registry.delete_by_id(id) {
                        writeln!(self.output, "\n{RECORD_DELETED}")?;
                    }
                    return Ok(Flow::Continue);
                }
                "no" => {
                    writeln!(self.output, "\n{DELETE_CANCELLED}")?;
                    return Ok(Flow::Continue);
                }
                _ => self.reject(DELETE_CONFIRM_INVALID)?,
            }
        }
    }

    /// Asks for one field until `validator` accepts it.
    ///
    /// Returns `None` when input ends first.
    fn prompt_validated(
        &mut self,
        prompt: &str,
        validator: FieldValidator,
    ) -> io::Result<Option<String>> {
        write!(self.output, "\n{prompt}")?;
        loop {
            let Some(answer) = self.read_answer()? else {
                return Ok(None);
            };
            match validator(&answer) {
                Validation::Correct => return Ok(Some(answer)),
                rejected => self.reject(validation_message(rejected))?,
            }
        }
    }

    fn reject(&mut self, message: &str) -> io::Result<()> {
        write!(self.output, "\n{message}\n{RETRY_PROMPT}")
    }

    /// Reads one trimmed line; `None` at end of input.
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
