use witness_format::Quadruple;

use super::VerificationError;
use crate::basic_types::HashSet;

/// Check that no two of the given groups share a quadruple. Every group is paired with its
/// position in the certificate.
pub(crate) fn check_disjoint(
    groups: &[(usize, HashSet<Quadruple>)],
) -> Result<(), VerificationError> {
    for (index, (first, first_members)) in groups.iter().enumerate() {
        for (second, second_members) in &groups[index + 1..] {
            let mut shared: Vec<Quadruple> = first_members
                .intersection(second_members)
                .copied()
                .collect();

            if !shared.is_empty() {
                shared.sort();

                return Err(VerificationError::Disjointness {
                    first: *first,
                    second: *second,
                    shared,
                });
            }
        }
    }

    Ok(())
}
