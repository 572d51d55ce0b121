use derive_more::Display;

#[derive(Clone, PartialEq, Eq, Debug, Display)]
pub enum Error { 
    #[display("malformed term: {_0}")]
    MalformedTerm(String),

    #[display("coefficient overflow: {_0}")]
    Overflow(String)
}

impl std::error::Error for Error {}

macro_rules! err {
    ($kind:ident, $($arg:tt)*) => {{
        use crate::misc::Error;
        let e = Error::$kind(format!($($arg)*));
        Err(e)
    }}
}

pub(crate) use err;
