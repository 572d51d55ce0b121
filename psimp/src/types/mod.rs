mod key;
mod mono;
mod token;
mod table;
mod poly;

pub use key::VarKey;
pub use mono::Mono;
pub use token::{RawTerm, tokenize};
pub use table::TermTable;
pub use poly::Poly;
