use itertools::Itertools;

use crate::{GetSign, VarKey};

// Renders a single term at position `i`.
// Negative coefficients carry their own '-', later positive terms get '+',
// and a leading coefficient 1 is omitted.
pub fn render_term(i: usize, key: &VarKey, r: i64) -> String { 
    let c = if r.sign().is_negative() { 
        r.to_string()
    } else if i == 0 { 
        if r == 1 { 
            String::new()
        } else { 
            r.to_string()
        }
    } else if r == 1 { 
        "+".to_string()
    } else { 
        format!("+{r}")
    };

    format!("{c}{key}")
}

// Every '1' in the assembled string is removed, including the digits of
// multi-digit coefficients: 12 renders as "2", 10 as "0".
pub fn render<'a, I>(terms: I) -> String
where I: IntoIterator<Item = (&'a VarKey, &'a i64)> { 
    let s = terms.into_iter().enumerate().map(|(i, (k, r))| 
        render_term(i, k, *r)
    ).join("");

    s.replace('1', "")
}
