pub use utils::Pos;
mod utils;

pub use generation::{Generation, ParseError};
mod generation;

pub use engine::next_generation;
mod engine;
