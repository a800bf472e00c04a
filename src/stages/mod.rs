pub mod stage0_parse;
pub mod stage1_label;
pub mod stage2_timeline;
pub mod stage3_summary;

pub use stage0_parse::*;
pub use stage1_label::*;
pub use stage2_timeline::*;
pub use stage3_summary::*;
