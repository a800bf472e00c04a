pub mod stats;
pub mod timeline;
pub mod utterance;
pub mod voting;

pub use stats::*;
pub use timeline::*;
pub use utterance::*;
pub use voting::*;
