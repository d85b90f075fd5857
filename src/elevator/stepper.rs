use crate::config::StepperConfig;
use crate::elevator::ElevatorCore;
use crate::shared::{Movement, StepReport};
use crossbeam_channel as cbc;
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;

/**
 * Drives the elevator at a fixed cadence.
 *
 * Every tick the stepper calls `step` once on the shared core and forwards a
 * `StepReport` on `state_tx`. It never holds the core's lock while waiting
 * for the next tick.
 *
 * # Fields
 * - `core`:            Shared elevator core.
 * - `tick_interval`:   Time between two steps.
 * - `state_tx`:        Sends a report after every step.
 * - `terminate_rx`:    Stops the loop when a message arrives or every sender is dropped.
 */
pub struct Stepper {
    core: Arc<ElevatorCore>,
    tick_interval: Duration,
    state_tx: cbc::Sender<StepReport>,
    terminate_rx: cbc::Receiver<()>,
}

impl Stepper {
    pub fn new(
        config: &StepperConfig,
        core: Arc<ElevatorCore>,
        state_tx: cbc::Sender<StepReport>,
        terminate_rx: cbc::Receiver<()>,
    ) -> Stepper {
        Stepper {
            core,
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            state_tx,
            terminate_rx,
        }
    }

    pub fn run(self) {
        let ticker = cbc::tick(self.tick_interval);

        loop {
            cbc::select! {
                recv(ticker) -> _ => {
                    let (movement, state) = self.core.step_and_state();

                    match movement {
                        Movement::Idle => debug!("Idle at floor {}", state.floor),
                        Movement::Moved { from, to } => {
                            info!("Moving {} from floor {} to {}", state.direction, from, to)
                        }
                        Movement::Arrived(floor) => info!("Arrived at floor {}", floor),
                    }

                    if self.state_tx.send(StepReport { movement, state }).is_err() {
                        debug!("State receiver dropped, stopping stepper");
                        break;
                    }
                }
                recv(self.terminate_rx) -> _ => {
                    debug!("Stepper terminated");
                    break;
                }
            }
        }
    }
}
