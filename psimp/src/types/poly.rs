use std::fmt::Display;
use std::str::FromStr;
use delegate::delegate;

use crate::Error;
use crate::order::sort_terms;
use crate::render::render;
use super::{tokenize, TermTable, VarKey};

// `Poly` : a simplified polynomial, terms held in canonical order.
// Parsing runs tokenize -> parse -> aggregate -> sort, and `Display` renders.

#[derive(Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Poly { 
    terms: Vec<(VarKey, i64)>
}

impl Poly { 
    pub fn zero() -> Self { 
        Self::default()
    }

    delegate! { 
        to self.terms { 
            #[call(len)]
            pub fn nterms(&self) -> usize;
            #[call(is_empty)]
            pub fn is_zero(&self) -> bool;
        }
    }

    pub fn terms(&self) -> impl Iterator<Item = (&VarKey, &i64)> { 
        self.terms.iter().map(|(k, r)| (k, r))
    }

    pub fn keys(&self) -> impl Iterator<Item = &VarKey> { 
        self.terms.iter().map(|(k, _)| k)
    }

    pub fn coeff(&self, key: &VarKey) -> i64 { 
        self.terms.iter().find(|(k, _)| k == key).map(|(_, r)| *r).unwrap_or(0)
    }
}

impl From<TermTable> for Poly {
    fn from(table: TermTable) -> Self {
        let terms = sort_terms(table);
        Self { terms }
    }
}

impl FromStr for Poly {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let monos = tokenize(s).iter().map(|t| t.parse()).collect::<Result<Vec<_>, _>>()?;
        let table = TermTable::from_monos(&monos)?;
        Ok(Self::from(table))
    }
}

impl Display for Poly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = render(self.terms());
        f.write_str(&s)
    }
}
