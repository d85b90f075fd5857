use crate::config::ElevatorConfig;
use crate::elevator::dispatch;
use crate::elevator::requests::RequestSet;
use crate::shared::{Bounds, Direction, ElevatorState, Error, Movement, Rejection, TieBreak};
use log::error;
use parking_lot::Mutex;

/**
 * The elevator car and its pending requests.
 *
 * Floor, requests and direction sit behind one lock. Every public operation
 * takes the lock once, does bounded work and releases it, so the stepper
 * thread and the command thread can share an `Arc<ElevatorCore>` freely.
 *
 * # Fields
 * - `bounds`:      Inclusive range of serviceable floors, fixed at construction.
 * - `tie_break`:   Policy for equal-distance choices while idle.
 * - `car`:         Mutable car state.
 */
pub struct ElevatorCore {
    bounds: Bounds,
    tie_break: TieBreak,
    car: Mutex<Car>,
}

struct Car {
    floor: i32,
    requests: RequestSet,
    direction: Direction,
}

impl ElevatorCore {
    pub fn new(
        bounds: Bounds,
        initial_floor: Option<i32>,
        tie_break: TieBreak,
    ) -> Result<ElevatorCore, Error> {
        if bounds.min_floor > bounds.max_floor {
            return Err(Error::InvalidBounds {
                min_floor: bounds.min_floor,
                max_floor: bounds.max_floor,
            });
        }

        let floor = initial_floor.unwrap_or(bounds.min_floor);
        if !bounds.contains(floor) {
            return Err(Error::InitialFloorOutOfRange {
                floor,
                min_floor: bounds.min_floor,
                max_floor: bounds.max_floor,
            });
        }

        Ok(ElevatorCore {
            bounds,
            tie_break,
            car: Mutex::new(Car {
                floor,
                requests: RequestSet::new(),
                direction: Direction::Idle,
            }),
        })
    }

    pub fn from_config(config: &ElevatorConfig) -> Result<ElevatorCore, Error> {
        ElevatorCore::new(config.bounds(), config.initial_floor, config.tie_break)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Queues `floor`, or says which admission rule turned it away.
    pub fn try_add_request(&self, floor: i32) -> Result<(), Rejection> {
        if !self.bounds.contains(floor) {
            return Err(Rejection::OutOfRange {
                floor,
                min_floor: self.bounds.min_floor,
                max_floor: self.bounds.max_floor,
            });
        }

        let mut car = self.car.lock();
        if car.requests.contains(floor) {
            return Err(Rejection::Duplicate(floor));
        }
        if car.floor == floor && car.direction == Direction::Idle {
            return Err(Rejection::AlreadyAtFloor(floor));
        }

        car.requests.insert(floor);
        Ok(())
    }

    pub fn add_request(&self, floor: i32) -> bool {
        self.try_add_request(floor).is_ok()
    }

    /// Runs the dispatcher and commits to its direction without moving.
    pub fn next_target(&self) -> Option<i32> {
        let mut car = self.car.lock();
        car.next_target(self.tie_break)
    }

    /// Advances the car by at most one floor.
    pub fn step(&self) -> Movement {
        let mut car = self.car.lock();
        car.step(self.tie_break)
    }

    /// Advances the car and snapshots the result under the same lock.
    pub fn step_and_state(&self) -> (Movement, ElevatorState) {
        let mut car = self.car.lock();
        let movement = car.step(self.tie_break);
        (movement, car.snapshot())
    }

    pub fn state(&self) -> ElevatorState {
        self.car.lock().snapshot()
    }
}

impl Car {
    fn snapshot(&self) -> ElevatorState {
        ElevatorState {
            floor: self.floor,
            requests: self.requests.to_vec(),
            direction: self.direction,
        }
    }

    fn next_target(&mut self, tie_break: TieBreak) -> Option<i32> {
        let decision =
            dispatch::next_target(self.floor, &self.requests, self.direction, tie_break)?;
        self.direction = decision.direction;
        Some(decision.target)
    }

    fn step(&mut self, tie_break: TieBreak) -> Movement {
        if self.requests.is_empty() {
            self.direction = Direction::Idle;
            return Movement::Idle;
        }

        let target = match self.next_target(tie_break) {
            Some(target) => target,
            None => {
                error!(
                    "Dispatcher found no target with {} pending requests at floor {}",
                    self.requests.len(),
                    self.floor
                );
                self.direction = Direction::Idle;
                return Movement::Idle;
            }
        };

        let from = self.floor;
        if target > from {
            self.direction = Direction::Up;
            self.floor += 1;
            Movement::Moved { from, to: self.floor }
        } else if target < from {
            self.direction = Direction::Down;
            self.floor -= 1;
            Movement::Moved { from, to: self.floor }
        } else {
            self.requests.remove(target);
            if self.requests.is_empty() {
                self.direction = Direction::Idle;
            }
            Movement::Arrived(target)
        }
    }
}
