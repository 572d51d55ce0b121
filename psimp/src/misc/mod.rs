mod sign;
mod error;

pub use sign::*;
pub use error::Error;
pub(crate) use error::err;
