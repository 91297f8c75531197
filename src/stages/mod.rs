pub mod stage0_normalize;
pub mod stage1_table;
pub mod stage2_audit;
pub mod stage3_render;

pub use stage0_normalize::*;
pub use stage1_table::*;
pub use stage2_audit::*;
pub use stage3_render::*;
