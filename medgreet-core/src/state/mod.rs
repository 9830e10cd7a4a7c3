//! Screen state machine
//!
//! Which screen is shown is a pure function of the previous screen and an
//! event. The controller applies the side effects (timestamps, redraws).

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::ScreenMode;
