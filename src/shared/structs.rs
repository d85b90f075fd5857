/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Idle,
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Idle => write!(f, "IDLE"),
            Direction::Up => write!(f, "UP"),
            Direction::Down => write!(f, "DOWN"),
        }
    }
}

/// Which way an idle car leans when the nearest request above and the
/// nearest request below are the same distance away.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    #[default]
    Above,
    Below,
}

/// Inclusive range of serviceable floors.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_floor: i32,
    pub max_floor: i32,
}

impl Bounds {
    pub fn contains(&self, floor: i32) -> bool {
        floor >= self.min_floor && floor <= self.max_floor
    }
}

/**
 * Snapshot of the elevator car.
 *
 * Always an owned copy, so it can be printed or sent to another thread
 * without touching the core's lock.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorState {
    pub floor: i32,
    pub requests: Vec<i32>,
    pub direction: Direction,
}

impl fmt::Display for ElevatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "floor {} | direction {} | requests {:?}",
            self.floor, self.direction, self.requests
        )
    }
}

/// What a single call to `step` did.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Movement {
    Idle,
    Moved { from: i32, to: i32 },
    Arrived(i32),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StepReport {
    pub movement: Movement,
    pub state: ElevatorState,
}

#[cfg(test)]
mod structs_tests {
    use super::*;

    #[test]
    fn test_state_json_format() {
        let state = ElevatorState {
            floor: 3,
            requests: vec![5, 1],
            direction: Direction::Up,
        };

        let json = serde_json::to_string(&state).unwrap();

        assert_eq!(json, r#"{"floor":3,"requests":[5,1],"direction":"up"}"#);
        assert_eq!(state.to_string(), "floor 3 | direction UP | requests [5, 1]");
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds {
            min_floor: -1,
            max_floor: 4,
        };

        assert!(bounds.contains(-1));
        assert!(bounds.contains(4));
        assert!(!bounds.contains(-2));
        assert!(!bounds.contains(5));
    }
}
