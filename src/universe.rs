//! The universe of quadruples a certificate partitions.
use witness_format::Quadruple;

use crate::basic_types::HashSet;

/// Every quadruple `(i, j, k, l)` over the indices `1..=m` with `i < j < k`, `j < l` and
/// `l ∉ {i, j, k}`.
///
/// The relative order of `l` and `k` is deliberately unconstrained: `l` may lie before or after
/// `k`, as long as it differs from it.
#[derive(Clone, Debug)]
pub struct Universe {
    max_index: u32,
    /// The members in lexicographic `(i, j, k, l)` order.
    members: Vec<Quadruple>,
    lookup: HashSet<Quadruple>,
}

impl Universe {
    /// Enumerate the universe for the maximum index `max_index`. This visits all `m^4`
    /// candidate quadruples, which is fine for the tens of indices certificates use.
    pub fn build(max_index: u32) -> Universe {
        let range = || 1..=max_index;

        let members: Vec<Quadruple> = range()
            .flat_map(|i| range().map(move |j| (i, j)))
            .flat_map(|(i, j)| range().map(move |k| (i, j, k)))
            .flat_map(|(i, j, k)| range().map(move |l| (i, j, k, l)))
            .filter(|&(i, j, k, l)| i < j && j < k && l != i && l != j && l != k && j < l)
            .map(Quadruple::from)
            .collect();

        let lookup = members.iter().copied().collect();

        Universe {
            max_index,
            members,
            lookup,
        }
    }

    pub fn max_index(&self) -> u32 {
        self.max_index
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, quadruple: &Quadruple) -> bool {
        self.lookup.contains(quadruple)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quadruple> + '_ {
        self.members.iter()
    }
}
