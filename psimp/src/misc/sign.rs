use std::ops::Neg;
use derive_more::{Display, Debug};
use num_traits::Signed;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Display, Debug)]
#[cfg_attr(feature = "serde", derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr))]
#[repr(i8)]
pub enum Sign { 
    #[default]
    #[display("+")]
    #[debug("+")]
    Pos = 1,

    #[display("-")]
    #[debug("-")]
    Neg = -1
}

impl Sign { 
    pub fn is_positive(&self) -> bool { 
        self == &Sign::Pos
    }

    pub fn is_negative(&self) -> bool { 
        !self.is_positive()
    }

    // the sign marker as it appears in a raw term: '-' or nothing.
    pub fn from_marker(s: &str) -> Option<Self> { 
        match s { 
            ""  => Some(Sign::Pos),
            "-" => Some(Sign::Neg),
            _   => None
        }
    }
}

macro_rules! impl_int_conversion {
    ($t:tt) => {
        impl From<Sign> for $t {
            fn from(value: Sign) -> Self {
                match value { 
                    Sign::Pos =>  1,
                    Sign::Neg => -1
                }
            }
        }                
    };
}

impl_int_conversion!(i8);
impl_int_conversion!(i32);
impl_int_conversion!(i64);

impl Neg for Sign {
    type Output = Self;
    fn neg(self) -> Self {
        use Sign::*;
        match self { 
            Neg => Pos,
            Pos => Neg
        }
    }
}

pub trait GetSign { 
    fn sign(&self) -> Sign;
}

// zero counts as positive.
impl<T> GetSign for T where T: Signed {
    fn sign(&self) -> Sign {
        if self.is_negative() { 
            Sign::Neg 
        } else { 
            Sign::Pos 
        }
    }
}
