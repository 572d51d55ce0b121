use ahash::AHashMap;
use delegate::delegate;
use log::debug;
use num_traits::Zero;

use crate::Error;
use crate::misc::err;
use super::{Mono, VarKey};

// `TermTable` : accumulated signed coefficients, one entry per variable key.
// After `clean` no key is mapped to zero.

#[derive(PartialEq, Eq, Clone, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TermTable { 
    data: AHashMap<VarKey, i64>
}

impl TermTable { 
    pub fn new() -> Self {
        let hasher = ahash::RandomState::with_seeds(0, 0, 0, 0);
        let data = AHashMap::with_hasher(hasher);
        Self { data }
    }

    pub fn from_monos<'a, I>(monos: I) -> Result<Self, Error>
    where I: IntoIterator<Item = &'a Mono> { 
        let mut res = Self::new();
        for m in monos { 
            res.add(m)?;
        }
        res.clean();

        debug!("aggregated {} terms", res.nterms());

        Ok(res)
    }

    delegate! { 
        to self.data { 
            #[call(len)]
            pub fn nterms(&self) -> usize;
            pub fn iter(&self) -> impl Iterator<Item = (&VarKey, &i64)>;
        }
    }

    pub fn is_zero(&self) -> bool { 
        self.data.values().all(|r| r.is_zero())
    }

    pub fn coeff(&self, key: &VarKey) -> i64 { 
        self.data.get(key).copied().unwrap_or(0)
    }

    pub fn add(&mut self, m: &Mono) -> Result<(), Error> { 
        self.add_pair(m.key().clone(), m.signed_coeff())
    }

    pub fn add_pair(&mut self, key: VarKey, r: i64) -> Result<(), Error> { 
        let e = self.data.entry(key).or_insert(0);
        match e.checked_add(r) { 
            Some(sum) => { 
                *e = sum;
                Ok(())
            },
            None => err!(Overflow, "{e} + {r}")
        }
    }

    pub fn clean(&mut self) { 
        self.data.retain(|_, r| !r.is_zero());
    }
}

impl IntoIterator for TermTable { 
    type Item = (VarKey, i64);
    type IntoIter = std::collections::hash_map::IntoIter<VarKey, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
