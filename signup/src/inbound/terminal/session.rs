//! Interactive pass over both signup steps.

use std::io::{BufRead, Write};

use tracing::info;

use super::{Terminal, TerminalError};
use crate::domain::ports::{AutoConfirmation, ConfirmationError, Navigator};
use crate::domain::{Field, ReferenceData};
use crate::flow::{Attempt, FlowError, SignupFlow, StepKind};

/// Printed when the primary action was pressed with an empty field.
pub const REQUIRED_NOTICE: &str = "All fields are required.";

/// Printed when the registration prompt was declined.
pub const DECLINED_NOTICE: &str = "Registration not confirmed.";

const CORRECTIONS_HEADER: &str = "Please correct the following:";

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Drive `flow` until the record has been handed to `navigator`.
    ///
    /// The first pass over a step prompts every field. Later passes list the
    /// validation messages and prompt only the fields that are empty or
    /// failed. A declined confirmation starts another full pass. A blank
    /// answer keeps the value shown in brackets. With `assume_yes` the
    /// registration prompt is answered yes without asking.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::Closed`] when input ends first,
    /// [`TerminalError::Io`] when prompts cannot be written, and
    /// [`TerminalError::Flow`] when navigation fails.
    pub fn run<N>(
        &mut self,
        flow: &mut SignupFlow,
        navigator: &mut N,
        assume_yes: bool,
    ) -> Result<(), TerminalError>
    where
        N: Navigator + ?Sized,
    {
        let mut shown = None;
        let mut full_pass = true;

        loop {
            let step = flow.step();
            if step == StepKind::Submitted {
                info!(attempt = %flow.attempt_id(), "terminal session finished");
                return Ok(());
            }
            if shown != Some(step) {
                self.heading(step)?;
                shown = Some(step);
                full_pass = true;
            }
            if !full_pass {
                self.corrections(flow)?;
            }

            self.fill(flow, full_pass)?;
            let attempt = self.press(flow, navigator, assume_yes)?;
            self.report(attempt)?;
            full_pass = attempt == Attempt::Declined;
        }
    }

    fn heading(&mut self, step: StepKind) -> Result<(), TerminalError> {
        let title = match step {
            StepKind::Credentials => "Create your account (step 1 of 2)",
            StepKind::Profile => "Tell us about yourself (step 2 of 2)",
            StepKind::Submitted => return Ok(()),
        };
        writeln!(self.output)?;
        writeln!(self.output, "{title}")?;
        Ok(())
    }

    fn corrections(&mut self, flow: &SignupFlow) -> Result<(), TerminalError> {
        let Some(errors) = flow.errors().filter(|errors| !errors.is_clean()) else {
            return Ok(());
        };
        writeln!(self.output, "{CORRECTIONS_HEADER}")?;
        for (field, message) in errors.iter().filter(|(_, message)| !message.is_empty()) {
            writeln!(self.output, "  {}: {message}", field.label())?;
        }
        Ok(())
    }

    fn fill(&mut self, flow: &mut SignupFlow, full_pass: bool) -> Result<(), TerminalError> {
        for &field in flow.fields() {
            let wanted = full_pass
                || flow.value(field).is_none_or(str::is_empty)
                || flow.error(field).is_some();
            if !wanted {
                continue;
            }
            match field {
                Field::Country => {
                    let country = flow.value(field).unwrap_or_default();
                    writeln!(self.output, "{}: {country}", field.label())?;
                }
                Field::City => self.choose_city(flow)?,
                _ => self.prompt_field(flow, field)?,
            }
        }
        Ok(())
    }

    fn prompt_field(&mut self, flow: &mut SignupFlow, field: Field) -> Result<(), TerminalError> {
        let current = flow.value(field).unwrap_or_default();
        let prompt = if current.is_empty() {
            format!("{}: ", field.label())
        } else {
            format!("{} [{}]: ", field.label(), masked(field, current))
        };

        let reply = if field == Field::Password {
            self.ask_secret(&prompt)?
        } else {
            self.ask(&prompt)?
        };
        let answer = reply.ok_or(TerminalError::Closed)?;
        if !answer.trim().is_empty() {
            flow.set_field(field, answer)?;
        }
        Ok(())
    }

    fn choose_city(&mut self, flow: &mut SignupFlow) -> Result<(), TerminalError> {
        let reference = *flow.reference();
        for (position, city) in reference.cities().iter().enumerate() {
            writeln!(self.output, "  {}) {city}", position + 1)?;
        }

        loop {
            let prompt = format!(
                "{} [{}]: ",
                Field::City.label(),
                flow.value(Field::City).unwrap_or_default()
            );
            let line = self.ask(&prompt)?.ok_or(TerminalError::Closed)?;
            let answer = line.trim();
            if answer.is_empty() {
                return Ok(());
            }
            let Some(city) = pick_city(&reference, answer) else {
                writeln!(
                    self.output,
                    "Unknown city '{answer}'. Enter a number from 1 to {} or a listed name.",
                    reference.cities().len()
                )?;
                continue;
            };
            flow.set_field(Field::City, city)?;
            return Ok(());
        }
    }

    fn press<N>(
        &mut self,
        flow: &mut SignupFlow,
        navigator: &mut N,
        assume_yes: bool,
    ) -> Result<Attempt, TerminalError>
    where
        N: Navigator + ?Sized,
    {
        let result = match flow.step() {
            StepKind::Credentials => flow.next(),
            StepKind::Profile | StepKind::Submitted if assume_yes => {
                flow.submit(&mut AutoConfirmation::accept(), navigator)
            }
            StepKind::Profile | StepKind::Submitted => flow.submit(self, navigator),
        };
        result.map_err(|err| match err {
            FlowError::Confirmation(ConfirmationError::Closed) => TerminalError::Closed,
            other => TerminalError::Flow(other),
        })
    }

    fn report(&mut self, attempt: Attempt) -> Result<(), TerminalError> {
        match attempt {
            Attempt::Disabled => writeln!(self.output, "{REQUIRED_NOTICE}")?,
            Attempt::Declined => writeln!(self.output, "{DECLINED_NOTICE}")?,
            Attempt::Advanced | Attempt::Invalid | Attempt::Submitted => {}
        }
        Ok(())
    }
}

fn masked(field: Field, value: &str) -> String {
    if field == Field::Password {
        "*".repeat(value.chars().count())
    } else {
        value.to_owned()
    }
}

fn pick_city(reference: &ReferenceData, answer: &str) -> Option<&'static str> {
    answer
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|position| reference.cities().get(position).copied())
        .or_else(|| reference.find_city(answer))
}
