pub mod error;
pub mod macros;
pub mod structs;

pub use error::Error;
pub use error::Rejection;
pub use structs::Bounds;
pub use structs::Direction;
pub use structs::ElevatorState;
pub use structs::Movement;
pub use structs::StepReport;
pub use structs::TieBreak;
