pub mod dispatch;
pub mod elevator_core;
pub mod requests;
pub mod stepper;
pub mod stepper_tests;

pub use dispatch::Dispatch;
pub use elevator_core::ElevatorCore;
pub use requests::RequestSet;
pub use stepper::Stepper;
