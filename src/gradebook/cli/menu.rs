//! The interactive menu session.
//!
//! Each handler renders its screen, prompts for what it needs, calls the API and
//! renders the outcome. Every error kind the API can return is mapped to its own
//! message here; an empty store is reported as a notice, not an error.

use super::prompt::Console;
use super::render::{NARROW_RULE, NO_STUDENTS, RANKING_RULE, TABLE_RULE};
use gradebook::api::{CmdMessage, GradebookApi};
use gradebook::error::{AddError, EmptyStoreError, UpdateError};
use gradebook::store::RecordStore;
use gradebook::validation::{validate_name, validate_roll};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Bails out of a handler with `Flow::Exit` when the prompt hit end of input.
macro_rules! ask {
    ($console:expr, $label:expr) => {
        match $console.prompt($label)? {
            Some(line) => line,
            None => return Ok(Flow::Exit),
        }
    };
}

pub struct Menu<S: RecordStore, R: BufRead, W: Write> {
    api: GradebookApi<S>,
    console: Console<R, W>,
    show_banner: bool,
}

impl<S: RecordStore, R: BufRead, W: Write> Menu<S, R, W> {
    pub fn new(api: GradebookApi<S>, console: Console<R, W>, show_banner: bool) -> Self {
        Self {
            api,
            console,
            show_banner,
        }
    }

    /// Runs until the user picks Exit or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        if self.show_banner {
            let banner = self.console.renderer().banner();
            self.console.show(&banner)?;
        }

        loop {
            let menu = self.console.renderer().menu();
            self.console.show(&menu)?;

            let Some(choice) = self.console.prompt("\n  Enter your choice (1–7): ")? else {
                break;
            };

            let flow = match choice.trim() {
                "1" => self.add_student()?,
                "2" => self.view_all()?,
                "3" => self.search()?,
                "4" => self.statistics()?,
                "5" => self.update_marks()?,
                "6" => self.ranking()?,
                "7" => {
                    self.console
                        .show_message(CmdMessage::info("Goodbye! Exiting the program."))?;
                    Flow::Exit
                }
                other => {
                    tracing::debug!(choice = %other, "invalid menu choice");
                    self.console.show_message(CmdMessage::error(
                        "Invalid choice. Please enter a number between 1 and 7.",
                    ))?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        tracing::debug!(students = self.api.len(), "menu session ended");
        Ok(())
    }

    fn header(&mut self, title: &str, width: usize) -> io::Result<()> {
        let header = self.console.renderer().header(title, width);
        self.console.show(&header)
    }

    /// Shows the "no students" notice and returns true when the store is empty.
    fn report_if_empty(&mut self) -> io::Result<bool> {
        if !self.api.is_empty() {
            return Ok(false);
        }
        self.console.show_message(CmdMessage::warning(NO_STUDENTS))?;
        Ok(true)
    }

    fn add_student(&mut self) -> io::Result<Flow> {
        self.header("ADD NEW STUDENT", NARROW_RULE)?;

        let raw_name = ask!(self.console, "Enter Student Name      : ");
        let name = match validate_name(&raw_name) {
            Ok(name) => name,
            Err(err) => {
                self.console.show_message(add_error_message(&err))?;
                return Ok(Flow::Continue);
            }
        };

        let raw_roll = ask!(self.console, "Enter Roll Number        : ");
        let roll = match validate_roll(&raw_roll) {
            Ok(roll) => roll,
            Err(err) => {
                self.console.show_message(add_error_message(&err))?;
                return Ok(Flow::Continue);
            }
        };

        // Reject a taken roll before asking for five marks.
        if self.api.roll_exists(&roll) {
            self.console
                .show_message(add_error_message(&AddError::DuplicateRoll(roll)))?;
            return Ok(Flow::Continue);
        }

        self.console
            .show(&format!("\n  Enter marks (0–100) for {}:", name))?;
        let Some(marks) = self.console.prompt_marks()? else {
            return Ok(Flow::Exit);
        };

        let message = match self.api.add_student(&name, &roll, marks) {
            Ok(record) => CmdMessage::success(format!(
                "Student '{}' added successfully! | Grade: {}",
                record.name(),
                record.grade()
            )),
            Err(err) => add_error_message(&err),
        };
        self.console.show("")?;
        self.console.show_message(message)?;
        Ok(Flow::Continue)
    }

    fn view_all(&mut self) -> io::Result<Flow> {
        self.header("ALL STUDENT RECORDS", TABLE_RULE)?;
        let records = self.api.list_all();
        let table = self.console.renderer().student_table(&records);
        self.console.show(&table)?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> io::Result<Flow> {
        self.header("SEARCH STUDENT", NARROW_RULE)?;
        if self.report_if_empty()? {
            return Ok(Flow::Continue);
        }

        let roll = ask!(self.console, "  Enter Roll Number to search: ");
        match self.api.find_by_roll(&roll) {
            Some(record) => {
                let detail = self.console.renderer().student_detail(&record);
                self.console.show(&detail)?;
            }
            None => {
                self.console.show_message(not_found_message(&roll))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn statistics(&mut self) -> io::Result<Flow> {
        self.header("CLASS STATISTICS", NARROW_RULE)?;
        match self.api.class_statistics() {
            Ok(stats) => {
                let block = self.console.renderer().stats(&stats);
                self.console.show(&block)?;
            }
            Err(EmptyStoreError) => {
                self.console.show_message(CmdMessage::warning(NO_STUDENTS))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn update_marks(&mut self) -> io::Result<Flow> {
        self.header("UPDATE STUDENT MARKS", NARROW_RULE)?;
        if self.report_if_empty()? {
            return Ok(Flow::Continue);
        }

        let roll = ask!(self.console, "  Enter Roll Number to update: ");
        let Some(record) = self.api.find_by_roll(&roll) else {
            self.console.show_message(not_found_message(&roll))?;
            return Ok(Flow::Continue);
        };

        self.console.show(&format!(
            "\n  Updating marks for {}. Enter new marks (0–100):",
            record.name()
        ))?;
        let Some(marks) = self.console.prompt_marks()? else {
            return Ok(Flow::Exit);
        };

        let message = match self.api.update_marks(record.roll(), marks) {
            Ok(updated) => CmdMessage::success(format!(
                "Marks updated! New Average: {:.2} | Grade: {}",
                updated.average(),
                updated.grade()
            )),
            Err(err) => update_error_message(&err),
        };
        self.console.show("")?;
        self.console.show_message(message)?;
        Ok(Flow::Continue)
    }

    fn ranking(&mut self) -> io::Result<Flow> {
        self.header("STUDENTS RANKED BY TOTAL MARKS (High → Low)", RANKING_RULE)?;
        let ranked = self.api.ranked_by_total();
        let table = self.console.renderer().ranking(&ranked);
        self.console.show(&table)?;
        Ok(Flow::Continue)
    }
}

fn add_error_message(err: &AddError) -> CmdMessage {
    match err {
        AddError::EmptyName => CmdMessage::error("Name cannot be empty."),
        AddError::EmptyRoll => CmdMessage::error("Roll number cannot be empty."),
        AddError::DuplicateRoll(roll) => CmdMessage::error(format!(
            "Roll Number '{}' already exists. Duplicates not allowed.",
            roll
        )),
        AddError::InvalidMark(mark) => CmdMessage::error(format!("Invalid mark for {}.", mark)),
    }
}

fn not_found_message(roll: &str) -> CmdMessage {
    CmdMessage::error(format!(
        "No student found with Roll Number '{}'.",
        roll.trim()
    ))
}

fn update_error_message(err: &UpdateError) -> CmdMessage {
    match err {
        UpdateError::NotFound(roll) => not_found_message(roll),
        UpdateError::InvalidMark(mark) => CmdMessage::error(format!("Invalid mark for {}.", mark)),
    }
}
