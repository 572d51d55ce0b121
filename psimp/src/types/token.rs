use std::str::FromStr;
use derive_more::{Display, Debug};
use log::trace;

use crate::Error;
use super::Mono;

// `RawTerm` : one signed fragment of the input, before parsing.

#[derive(Clone, Copy, PartialEq, Eq, Display, Debug)]
#[display("{_0}")]
#[debug("{_0:?}")]
pub struct RawTerm<'a>(&'a str);

impl<'a> RawTerm<'a> { 
    pub fn as_str(&self) -> &'a str { 
        self.0
    }

    pub fn parse(&self) -> Result<Mono, Error> { 
        Mono::from_str(self.0)
    }
}

// Splits at every '+' (dropped) and before every '-' (kept with the
// following term). Empty fragments are discarded.
pub fn tokenize(poly: &str) -> Vec<RawTerm<'_>> { 
    let mut frags = vec![];
    let mut start = 0;

    for (i, c) in poly.char_indices() { 
        match c { 
            '+' => { 
                frags.push(&poly[start..i]);
                start = i + 1;
            },
            '-' => { 
                frags.push(&poly[start..i]);
                start = i;
            },
            _ => ()
        }
    }
    frags.push(&poly[start..]);

    let terms: Vec<_> = frags.into_iter().filter(|s| !s.is_empty()).map(RawTerm).collect();

    trace!("tokenized {poly:?} -> {terms:?}");

    terms
}
