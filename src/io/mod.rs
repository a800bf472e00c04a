pub mod input;
pub mod output;
pub mod sample;

pub use input::*;
pub use output::*;
pub use sample::*;
