//! Line-oriented terminal I/O for the menu.
//!
//! `Console` is generic over its reader and writer so menu sessions can be scripted
//! in tests. End of input is reported as `None`, never as an error.

use super::render::Renderer;
use gradebook::api::CmdMessage;
use gradebook::error::MarkError;
use gradebook::model::{Subject, SUBJECT_COUNT};
use gradebook::validation::parse_mark;
use std::io::{self, BufRead, Write};

const MARK_LABEL_WIDTH: usize = 10;

pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
    renderer: Renderer,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, renderer: Renderer) -> Self {
        Self {
            input,
            output,
            renderer,
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Writes a rendered block followed by a newline.
    pub fn show(&mut self, block: &str) -> io::Result<()> {
        writeln!(self.output, "{}", block)
    }

    pub fn show_messages(&mut self, messages: &[CmdMessage]) -> io::Result<()> {
        let block = self.renderer.messages(messages);
        if block.is_empty() {
            return Ok(());
        }
        self.show(&block)
    }

    pub fn show_message(&mut self, message: CmdMessage) -> io::Result<()> {
        self.show_messages(&[message])
    }

    /// Prints `label` and reads one line, without its line terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", self.renderer.prompt(label))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript tidy when input ends mid-prompt.
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Collects one mark per subject, re-prompting a subject until its value is valid.
    ///
    /// Marks already accepted are kept while a later subject is retried. Returns
    /// `Ok(None)` at end of input.
    pub fn prompt_marks(&mut self) -> io::Result<Option<[f64; SUBJECT_COUNT]>> {
        let mut marks = [0.0; SUBJECT_COUNT];
        for (slot, subject) in marks.iter_mut().zip(Subject::ALL) {
            let Some(value) = self.prompt_mark(subject)? else {
                return Ok(None);
            };
            *slot = value;
        }
        Ok(Some(marks))
    }

    fn prompt_mark(&mut self, subject: Subject) -> io::Result<Option<f64>> {
        let label = format!(
            "    {:<width$}: ",
            subject.name(),
            width = MARK_LABEL_WIDTH
        );
        loop {
            let Some(raw) = self.prompt(&label)? else {
                return Ok(None);
            };
            match parse_mark(subject, &raw) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    tracing::debug!(subject = %subject, input = %raw, "mark re-prompted");
                    self.show_message(mark_error_message(&err))?;
                }
            }
        }
    }
}

#[cfg(test)]
impl<R: BufRead> Console<R, Vec<u8>> {
    pub fn into_transcript(self) -> String {
        String::from_utf8(self.output).unwrap_or_default()
    }
}

pub fn mark_error_message(err: &MarkError) -> CmdMessage {
    match err {
        MarkError::NotNumeric { .. } => CmdMessage::error("Invalid input. Enter a numeric value."),
        MarkError::OutOfRange { .. } => {
            CmdMessage::error("Please enter a value between 0 and 100.")
        }
    }
}
