use thiserror::Error;
use witness_format::Group;
use witness_format::Quadruple;

use crate::basic_types::HashSet;
use crate::universe::Universe;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StructuralViolation {
    #[error("'{0}' appears more than once")]
    Duplicate(Quadruple),
    #[error("'{0}' does not satisfy i < j < k, j < l and l != k")]
    Ordering(Quadruple),
    #[error("'{quadruple}' is not in the universe of quadruples over 1..={max_index}")]
    OutsideUniverse { quadruple: Quadruple, max_index: u32 },
}

/// Check that `group` is a set of well-ordered members of `universe`, and return that set.
pub(crate) fn validate_group(
    group: &Group,
    universe: &Universe,
) -> Result<HashSet<Quadruple>, StructuralViolation> {
    let mut members = HashSet::default();

    for &quadruple in group.quadruples() {
        if !members.insert(quadruple) {
            return Err(StructuralViolation::Duplicate(quadruple));
        }
    }

    for &quadruple in group.quadruples() {
        if !is_well_ordered(quadruple) {
            return Err(StructuralViolation::Ordering(quadruple));
        }

        if !universe.contains(&quadruple) {
            return Err(StructuralViolation::OutsideUniverse {
                quadruple,
                max_index: universe.max_index(),
            });
        }
    }

    Ok(members)
}

fn is_well_ordered(Quadruple { i, j, k, l }: Quadruple) -> bool {
    i < j && j < k && j < l && l != k
}
