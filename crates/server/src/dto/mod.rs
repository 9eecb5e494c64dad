mod estimate;
mod supplier;

pub use estimate::*;
pub use supplier::*;
