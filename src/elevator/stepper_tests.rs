/*
 * Unit tests for the stepper loop
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_stepper_services_requests
 * - test_stepper_picks_up_requests_while_running
 * - test_stepper_terminate
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod stepper_tests {
    use crate::config::StepperConfig;
    use crate::elevator::{ElevatorCore, Stepper};
    use crate::shared::Direction::Idle;
    use crate::shared::{Bounds, Movement, StepReport, TieBreak};
    use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
    use std::sync::Arc;
    use std::thread::{spawn, JoinHandle};
    use std::time::Duration;

    const TIMEOUT: Duration = Duration::from_secs(3);

    fn setup_stepper(
        initial_floor: i32,
        queued: &[i32],
    ) -> (
        Arc<ElevatorCore>,
        JoinHandle<()>,
        Receiver<StepReport>, // state_rx
        Sender<()>,           // terminate_tx
    ) {
        let core = Arc::new(
            ElevatorCore::new(
                Bounds {
                    min_floor: 1,
                    max_floor: 10,
                },
                Some(initial_floor),
                TieBreak::Above,
            )
            .unwrap(),
        );
        for &floor in queued {
            assert!(core.add_request(floor));
        }
        let (state_tx, state_rx) = unbounded::<StepReport>();
        let (terminate_tx, terminate_rx) = unbounded::<()>();

        let config = StepperConfig {
            tick_interval_ms: 5,
        };
        let stepper = Stepper::new(&config, Arc::clone(&core), state_tx, terminate_rx);
        let handle = spawn(move || stepper.run());

        (core, handle, state_rx, terminate_tx)
    }

    fn recv_report(state_rx: &Receiver<StepReport>) -> StepReport {
        match state_rx.recv_timeout(TIMEOUT) {
            Ok(report) => report,
            Err(RecvTimeoutError::Timeout) => panic!("Timed out waiting for state_rx"),
            Err(e) => panic!("Error receiving from state_rx: {:?}", e),
        }
    }

    /// Collects the floors of the next `count` arrivals.
    fn collect_arrivals(state_rx: &Receiver<StepReport>, count: usize) -> Vec<i32> {
        let mut served = Vec::new();
        for _ in 0..200 {
            let report = recv_report(state_rx);
            if let Movement::Arrived(floor) = report.movement {
                served.push(floor);
                if served.len() == count {
                    return served;
                }
            }
        }
        panic!("stepper served {:?} and stopped arriving", served);
    }

    #[test]
    fn test_stepper_services_requests() {
        // Arrange
        let (core, handle, state_rx, terminate_tx) = setup_stepper(1, &[4, 2, 8]);

        // Act
        let served = collect_arrivals(&state_rx, 3);

        // Assert
        assert_eq!(served, vec![2, 4, 8]);
        let state = core.state();
        assert_eq!(state.floor, 8);
        assert_eq!(state.direction, Idle);
        assert!(state.requests.is_empty());

        // Cleanup
        terminate_tx.send(()).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_stepper_picks_up_requests_while_running() {
        // Arrange
        let (core, handle, state_rx, terminate_tx) = setup_stepper(5, &[]);

        // Act
        let first = recv_report(&state_rx);
        assert_eq!(first.movement, Movement::Idle);
        assert!(core.add_request(3));
        let served = collect_arrivals(&state_rx, 1);

        // Assert
        assert_eq!(served, vec![3]);
        let state = core.state();
        assert_eq!(state.floor, 3);
        assert_eq!(state.direction, Idle);

        // Cleanup
        terminate_tx.send(()).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_stepper_terminate() {
        // Purpose: Dropping every terminate sender stops the loop and closes the state channel

        // Arrange
        let (_core, handle, state_rx, terminate_tx) = setup_stepper(1, &[]);
        recv_report(&state_rx);

        // Act
        drop(terminate_tx);
        handle.join().unwrap();

        // Assert
        while let Ok(report) = state_rx.try_recv() {
            assert_eq!(report.movement, Movement::Idle);
        }
        assert!(state_rx.recv_timeout(Duration::from_millis(50)).is_err());
    }
}
