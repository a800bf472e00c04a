pub mod classifier;
pub mod client;
pub mod registry;
pub mod summarizer;

pub use classifier::*;
pub use client::*;
pub use registry::*;
pub use summarizer::*;
