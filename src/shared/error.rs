/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::path::PathBuf;
use thiserror::Error;

/***************************************/
/*             Error types             */
/***************************************/
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid floor bounds: min floor {min_floor} is above max floor {max_floor}")]
    InvalidBounds { min_floor: i32, max_floor: i32 },

    #[error("initial floor {floor} is outside [{min_floor}, {max_floor}]")]
    InitialFloorOutOfRange {
        floor: i32,
        min_floor: i32,
        max_floor: i32,
    },

    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,
}

/// Why a floor request was turned away. None of these change any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("floor {floor} is outside [{min_floor}, {max_floor}]")]
    OutOfRange {
        floor: i32,
        min_floor: i32,
        max_floor: i32,
    },

    #[error("floor {0} is already requested")]
    Duplicate(i32),

    #[error("car is already idle at floor {0}")]
    AlreadyAtFloor(i32),
}
