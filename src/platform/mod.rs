//! Platform layer
//!
//! The collaborators around the simulation:
//! - Time: frame clock feeding `tick`
//! - Input: terminal events to signals
//! - Terminal: render sink drawing one snapshot per frame

pub mod input;
pub mod term;
pub mod time;

pub use input::InputMapper;
pub use term::{Frame, compose_frame};
pub use time::FrameClock;
