//! Imperative shell around the calculator.
//!
//! A [`Session`] owns one [`Calculator`] and one [`DisplaySink`]. Every
//! input is applied and then rendered. Compute is preceded by the
//! configured delay so a front end can play its "calculating" animation;
//! the calculator itself never waits.

use crate::config::Settings;
use crate::core::{
    Calculator, ComputeOutcome, Display, NumberFormat, Phase, State, StateHistory,
    StateTransition,
};
use crate::error::InputError;
use crate::input::{ButtonTag, Input};
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, info, trace};
use uuid::Uuid;

/// Presentation target for the two display slots.
pub trait DisplaySink {
    /// Show the rendered display.
    fn render(&mut self, display: &Display);

    /// Mark the current-operand slot as calculating (or not).
    fn set_calculating(&mut self, _calculating: bool) {}
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn render(&mut self, display: &Display) {
        (**self).render(display);
    }

    fn set_calculating(&mut self, calculating: bool) {
        (**self).set_calculating(calculating);
    }
}

/// Sink that keeps every frame it was given.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSink {
    pub frames: Vec<Display>,
    /// Calculating marks in the order they were set.
    pub calculating: Vec<bool>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Display> {
        self.frames.last()
    }
}

impl DisplaySink for RecordingSink {
    fn render(&mut self, display: &Display) {
        self.frames.push(display.clone());
    }

    fn set_calculating(&mut self, calculating: bool) {
        self.calculating.push(calculating);
    }
}

/// A calculator wired to a display.
pub struct Session<D: DisplaySink> {
    id: Uuid,
    calculator: Calculator,
    sink: D,
    format: NumberFormat,
    compute_delay: Duration,
    history: StateHistory<Phase>,
}

impl<D: DisplaySink> Session<D> {
    /// Start a session and render the initial display.
    pub fn new(sink: D, settings: &Settings) -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            calculator: Calculator::new(),
            sink,
            format: settings.number_format(),
            compute_delay: settings.compute_delay(),
            history: StateHistory::with_limit(settings.history_limit),
        };
        debug!(session = %session.id, delay_ms = settings.compute_delay_ms, "session started");
        session.render();
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn phase(&self) -> Phase {
        self.calculator.phase()
    }

    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    pub fn into_sink(self) -> D {
        self.sink
    }

    /// The display for the current calculator state.
    pub fn display(&self) -> Display {
        self.calculator.render_with(&self.format)
    }

    /// Push the current display to the sink.
    pub fn render(&mut self) {
        let display = self.display();
        self.sink.render(&display);
    }

    /// Apply one input and re-render.
    pub async fn dispatch(&mut self, input: Input) {
        let before = self.calculator.phase();

        match input {
            Input::Equals => self.compute_after_delay().await,
            other => other.apply_to(&mut self.calculator),
        }

        let after = self.calculator.phase();
        debug!(
            session = %self.id,
            input = %input.label(),
            current = self.calculator.current_operand(),
            phase = after.name(),
            "input applied"
        );
        if before != after {
            self.record_transition(before, after, &input);
        }

        self.render();
    }

    /// Map a keyboard key name and dispatch it.
    ///
    /// Returns `false` if the key is not bound (nothing happens, not even
    /// a render).
    pub async fn press_key(&mut self, key: &str) -> bool {
        match Input::from_key(key) {
            Some(input) => {
                self.dispatch(input).await;
                true
            }
            None => {
                trace!(session = %self.id, key, "ignored key");
                false
            }
        }
    }

    /// Dispatch the input behind a keypad button.
    pub async fn press_button(&mut self, tag: &ButtonTag) -> Result<(), InputError> {
        let input = Input::try_from(tag)?;
        self.dispatch(input).await;
        Ok(())
    }

    async fn compute_after_delay(&mut self) {
        self.sink.set_calculating(true);
        if !self.compute_delay.is_zero() {
            tokio::time::sleep(self.compute_delay).await;
        }
        let outcome = self.calculator.compute();
        self.sink.set_calculating(false);

        match outcome {
            ComputeOutcome::Computed => {
                debug!(session = %self.id, result = self.calculator.current_operand(), "computed");
            }
            ComputeOutcome::DivisionByZero => {
                info!(session = %self.id, "division by zero");
            }
            ComputeOutcome::Skipped => {
                trace!(session = %self.id, "nothing to compute");
            }
        }
    }

    fn record_transition(&mut self, from: Phase, to: Phase, input: &Input) {
        debug!(session = %self.id, from = from.name(), to = to.name(), "phase changed");
        self.history = self.history.record(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            trigger: input.label(),
        });
    }
}
