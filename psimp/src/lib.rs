mod misc;
mod types;
mod simplify;

pub use misc::*;
pub use types::*;
pub use simplify::simplify;

pub mod order;
pub mod render;
pub mod util;
