//! Peer cohort selection.
//!
//! A candidate is a peer of the focal listing on a dimension only if every
//! gate passes:
//!
//! 1. the focal listing's structural type is supported
//! 2. both listings resolve to the same district
//! 3. price and size on residential, apartment and studio groups: same
//!    grade placement (basement vs above ground)
//! 4. same type group
//! 5. price and freshness: the candidate is on the market
//! 6. the candidate has a computable, nonzero score on the dimension

use crate::classify::{is_below_grade, same_group, type_group};
use crate::core::{Dimension, Listing};
use crate::scoring::{score_dimension, ScoringContext};

/// Peers of `focal` within `population` for one dimension.
///
/// Population order is preserved and duplicates are kept. The focal listing
/// is included when it is itself a member of the population and passes the
/// gates.
pub fn select_cohort<'p>(
    focal: &Listing,
    population: &'p [Listing],
    dimension: Dimension,
    context: &ScoringContext<'_>,
) -> Vec<&'p Listing> {
    let Some(group) = type_group(&focal.structural_type) else {
        return Vec::new();
    };
    let Some(district) = focal.district() else {
        return Vec::new();
    };

    let compare_grade = dimension.compares_grade_placement() && group.uses_grade_placement();
    let focal_below_grade = compare_grade && is_below_grade(focal);

    population
        .iter()
        .filter(|candidate| candidate.district().as_deref() == Some(district.as_str()))
        .filter(|candidate| !compare_grade || is_below_grade(candidate) == focal_below_grade)
        .filter(|candidate| same_group(&focal.structural_type, &candidate.structural_type))
        .filter(|candidate| !dimension.requires_on_market() || candidate.on_market)
        .filter(|candidate| {
            score_dimension(candidate, dimension, context).is_some_and(|score| score != 0.0)
        })
        .collect()
}
