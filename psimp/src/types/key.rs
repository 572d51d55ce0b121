use derive_more::{Display, Debug};
use itertools::Itertools;

// `VarKey` : the variable part of a monomial, as a sorted multiset of letters.
// "ba" and "ab" give the same key, while "aab" stays distinct from "ab".

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Display, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
#[display("{_0}")]
#[debug("{_0}")]
pub struct VarKey(String);

impl VarKey { 
    pub fn deg(&self) -> usize { 
        self.0.chars().count()
    }

    pub fn as_str(&self) -> &str { 
        &self.0
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ { 
        self.0.chars()
    }
}

impl FromIterator<char> for VarKey {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let s = iter.into_iter().sorted().collect();
        Self(s)
    }
}

impl From<&str> for VarKey {
    fn from(s: &str) -> Self {
        Self::from_iter(s.chars())
    }
}

impl From<String> for VarKey {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<VarKey> for String {
    fn from(k: VarKey) -> Self {
        k.0
    }
}
