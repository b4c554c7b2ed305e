//! Host-side rules of the guessing game.
//!
//! A round pairs a generated target expression with a fixed number of guess rows,
//! one cell per target token. Everything here is pure state; rendering, charting
//! and key handling belong to the host.
mod cells;
mod config;
mod input;
mod plot;
mod round;
mod tests;

pub use cells::{Cell, cell_states};
pub use config::{ConfigError, GameConfig};
pub use input::{AcceptedInput, accept_input, backspace};
pub use plot::{PlotPoint, plot};
pub use round::{GameError, GuessState, Round, Target};
