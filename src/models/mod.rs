pub mod questions;
pub mod record;
pub mod wisdom;

pub use questions::*;
pub use record::*;
pub use wisdom::*;
