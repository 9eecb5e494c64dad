mod enquiry;
mod estimate;
mod suppliers;

pub use enquiry::*;
pub use estimate::*;
pub use suppliers::*;
