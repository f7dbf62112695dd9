//! Countdown session task
//!
//! The session owns the phase machine, the input panel, the ticker and the
//! output collaborators. Commands and ticks are handled one at a time on a
//! single task, so a command can never observe a half-applied tick.

use std::ops::ControlFlow;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{
    control::Command,
    machine::{PhaseMachine, Step},
    services::{Announcer, DisplaySink},
    state::InputPanel,
};

use super::Ticker;

/// A running timer: state machine plus everything it talks to
pub struct Session<A, D> {
    machine: PhaseMachine,
    inputs: InputPanel,
    ticker: Ticker,
    announcer: A,
    display: D,
}

impl<A: Announcer, D: DisplaySink> Session<A, D> {
    pub fn new(machine: PhaseMachine, inputs: InputPanel, announcer: A, display: D) -> Self {
        Self {
            machine,
            inputs,
            ticker: Ticker::every_second(),
            announcer,
            display,
        }
    }

    pub fn machine(&self) -> &PhaseMachine {
        &self.machine
    }

    pub fn inputs(&self) -> &InputPanel {
        &self.inputs
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_armed()
    }

    /// Render the idle preview
    pub fn open(&mut self) {
        let step = self.machine.preview(&self.inputs);
        self.apply(step);
    }

    /// Apply one control command
    pub fn handle(&mut self, command: Command) -> ControlFlow<()> {
        let was_running = self.machine.is_running();

        let result = match command {
            Command::Toggle => self.machine.toggle(&self.inputs),
            Command::Start => self.machine.start(&self.inputs),
            Command::Pause => Ok(self.machine.pause()),
            Command::Reset => self.machine.reset(&self.inputs),
            Command::Set { field, value } => {
                self.inputs.set(field, value);
                Ok(self.machine.preview(&self.inputs))
            }
            Command::Status => Ok(Step::with_frame(self.machine.current_frame(&self.inputs))),
            Command::Quit => {
                info!("Quit requested");
                return ControlFlow::Break(());
            }
        };

        match result {
            Ok(step) => self.apply(step),
            Err(e) => {
                warn!("Command refused: {}", e);
                self.display.notice(&e.to_string());
            }
        }

        self.sync_ticker(was_running);
        ControlFlow::Continue(())
    }

    /// Apply one scheduler tick
    pub fn on_tick(&mut self) {
        let was_running = self.machine.is_running();
        let step = self.machine.tick(&self.inputs);
        self.apply(step);
        self.sync_ticker(was_running);
    }

    /// Drive the session until quit or the command channel closes
    pub async fn run(mut self, mut commands: mpsc::Receiver<Command>) -> Self {
        info!("Starting countdown session");
        self.open();

        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => {
                        if self.handle(command).is_break() {
                            break;
                        }
                    }
                    None => {
                        info!("Control channel closed");
                        break;
                    }
                },
                _ = self.ticker.tick() => self.on_tick(),
            }
        }

        self.ticker.cancel();
        info!("Countdown session ended");
        self
    }

    fn apply(&mut self, step: Step) {
        if let Some(frame) = &step.frame {
            self.display.show(frame);
        }
        for cue in &step.cues {
            self.announcer.announce(cue);
        }
    }

    /// Keep exactly one ticker armed while the machine runs
    fn sync_ticker(&mut self, was_running: bool) {
        match (was_running, self.machine.is_running()) {
            (false, true) => {
                debug!("Arming ticker");
                self.ticker.arm();
            }
            (true, false) => {
                debug!("Cancelling ticker");
                self.ticker.cancel();
            }
            _ => {}
        }
    }
}

/// Background task wrapper around [`Session::run`]
pub async fn countdown_task<A, D>(session: Session<A, D>, commands: mpsc::Receiver<Command>)
where
    A: Announcer,
    D: DisplaySink,
{
    session.run(commands).await;
}
