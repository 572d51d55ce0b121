use std::str::FromStr;
use log::debug;

use crate::{Error, Poly};

/// Simplifies a flat sum of monomials into its canonical form.
/// 
/// Like terms are combined, zero terms dropped, and the rest rendered
/// in degree order. 
/// 
/// Every `'1'` character is removed from the rendered result, so a
/// combined coefficient such as `12` comes out as `2`.
/// 
/// ```
/// use psimp::simplify;
/// assert_eq!(simplify("a+ca-2ab").unwrap(), "a-2ab+ac");
/// assert_eq!(simplify("a-a").unwrap(), "");
/// ```
pub fn simplify(poly: &str) -> Result<String, Error> { 
    let p = Poly::from_str(poly)?;
    let res = p.to_string();

    debug!("simplify: {poly:?} -> {res:?}");

    Ok(res)
}
