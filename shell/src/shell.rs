//! Interactive read-eval-print loop over a [`TodoApp`]

use std::io::{BufRead, Write};

use anyhow::Result;
use todo_core::task::Command;
use todo_core::view::RenderModel;
use todo_core::{Error, TodoApp};
use tracing::error;

use crate::config::Config;
use crate::input::{parse_line, Line};
use crate::output::{write_confirmation, write_notice, write_prefill, write_view};

const HELP: &str = "\
commands:
  add <text> @<YYYY-MM-DD>   add a task
  done <n>                   toggle a task done / not done
  edit <n>                   remove a task and print it for re-entry
  rm <n>                     delete a task
  clear                      delete every task
  filter <mode>              all | pending | completed | today
  search [term]              show tasks containing term (empty resets)
  list                       print the list again
  quit";

pub struct Shell<R, W> {
    app: TodoApp,
    config: Config,
    input: R,
    output: W,
    view: RenderModel,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(app: TodoApp, config: Config, input: R, output: W) -> Self {
        let view = app.render();
        Self {
            app,
            config,
            input,
            output,
            view,
        }
    }

    /// Run until `quit` or end of input, returning the output sink
    pub fn run(mut self) -> Result<W> {
        writeln!(
            self.output,
            "Due dates from {} onward. Type `help` for commands.",
            self.app.min_due_date()
        )?;
        self.print_view()?;

        while let Some(line) = self.prompt("> ")? {
            let parsed = match parse_line(&line) {
                Ok(parsed) => parsed,
                Err(message) => {
                    writeln!(self.output, "error: {message}")?;
                    continue;
                }
            };

            match parsed {
                Line::Quit => break,
                Line::Blank => {}
                Line::Help => writeln!(self.output, "{HELP}")?,
                Line::List => {
                    self.view = self.app.render();
                    self.print_view()?;
                }
                other => match other.into_command(&self.view) {
                    Ok(Some(command)) => self.execute(command)?,
                    Ok(None) => {}
                    Err(message) => writeln!(self.output, "error: {message}")?,
                },
            }
        }

        self.output.flush()?;
        Ok(self.output)
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        if self.config.confirm {
            if let Some(confirmation) = self.app.confirmation(&command) {
                write_confirmation(&mut self.output, &confirmation)?;
                let answer = self.read_line()?.unwrap_or_default();
                if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
                    writeln!(self.output, "cancelled")?;
                    return Ok(());
                }
            }
        }

        match self.app.dispatch(command) {
            Ok(outcome) => {
                if let Some(notice) = &outcome.notice {
                    write_notice(&mut self.output, notice)?;
                }
                if let Some(prefill) = &outcome.prefill {
                    write_prefill(&mut self.output, prefill)?;
                }
                self.view = outcome.view;
                self.print_view()?;
            }
            Err(Error::Validation(e)) => {
                let message = self.app.labels().validation_message(e);
                writeln!(self.output, "{}: {message}", e.field())?;
            }
            Err(e) => {
                error!("Command failed: {}", e);
                writeln!(self.output, "error: {e}")?;
            }
        }
        Ok(())
    }

    fn print_view(&mut self) -> Result<()> {
        write_view(
            &mut self.output,
            &self.view,
            self.app.labels(),
            self.config.json,
        )?;
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
