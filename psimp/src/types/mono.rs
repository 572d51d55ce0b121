use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;
use regex::Regex;
use log::trace;

use crate::{Sign, Error};
use crate::misc::err;
use super::VarKey;

// `Mono` : a signed monomial c * x_1 ... x_n.
// `coeff` holds the magnitude, which is never negative.

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mono { 
    sign: Sign,
    coeff: i64,
    key: VarKey
}

static PATTERN: LazyLock<Regex> = LazyLock::new(|| 
    Regex::new(r"^(-?)([0-9]*)([A-Za-z]+)$").unwrap()
);

impl Mono { 
    pub fn new<K>(sign: Sign, coeff: u32, key: K) -> Self
    where K: Into<VarKey> { 
        Self { sign, coeff: coeff.into(), key: key.into() }
    }

    pub fn sign(&self) -> Sign { 
        self.sign
    }

    pub fn coeff(&self) -> u64 { 
        self.coeff.unsigned_abs()
    }

    pub fn key(&self) -> &VarKey { 
        &self.key
    }

    pub fn deg(&self) -> usize { 
        self.key.deg()
    }

    pub fn signed_coeff(&self) -> i64 { 
        i64::from(self.sign) * self.coeff
    }
}

impl FromStr for Mono {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(c) = PATTERN.captures(s) else { 
            return err!(MalformedTerm, "{s}")
        };

        let Some(sign) = Sign::from_marker(&c[1]) else { 
            return err!(MalformedTerm, "{s}")
        };

        let coeff = match &c[2] { 
            "" => 1,
            d  => match i64::from_str(d) { 
                Ok(d) => d,
                Err(_) => return err!(Overflow, "{s}")
            }
        };

        let key = VarKey::from(&c[3]);
        let mono = Self { sign, coeff, key };

        trace!("parsed {s} -> {mono}");

        Ok(mono)
    }
}

impl Display for Mono {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.sign.is_negative() { 
            write!(f, "-")?;
        }
        if self.coeff != 1 { 
            write!(f, "{}", self.coeff)?;
        }
        write!(f, "{}", self.key)
    }
}
