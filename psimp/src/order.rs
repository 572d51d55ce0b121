use itertools::Itertools;
use log::debug;

use crate::VarKey;

// Canonical term order.
//
// Terms are first ordered by degree (stable). If any two keys share a degree,
// every degree group is then alphabetized, not only the colliding one.

pub fn has_deg_collision<R>(terms: &[(VarKey, R)]) -> bool { 
    let ndegs = terms.iter().map(|(k, _)| k.deg()).unique().count();
    terms.len() > ndegs
}

pub fn sort_terms<R, I>(terms: I) -> Vec<(VarKey, R)>
where I: IntoIterator<Item = (VarKey, R)> { 
    let terms = terms.into_iter().sorted_by_key(|(k, _)| k.deg()).collect_vec();

    if !has_deg_collision(&terms) { 
        return terms
    }

    debug!("degree collision, alphabetizing all degree groups");

    let groups = terms.into_iter().chunk_by(|(k, _)| k.deg());
    let res = groups.into_iter().flat_map(|(_, group)| 
        group.sorted_by(|(k1, _), (k2, _)| k1.cmp(k2))
    ).collect_vec();

    res
}
