use std::collections::BTreeSet;
use std::io::Read;
use std::str::FromStr;

use crate::reader;
use crate::ParseError;
use crate::Quadruple;

/// One block of a certificate: the inequalities that are jointly claimed to be infeasible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    position: usize,
    quadruples: Vec<Quadruple>,
}

impl Group {
    pub fn new(position: usize, quadruples: Vec<Quadruple>) -> Group {
        Group {
            position,
            quadruples,
        }
    }

    /// The 0-based position of the block in the certificate, not counting the header.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The quadruples in the order they appear in the file. Duplicates are preserved, so a
    /// malformed group can be detected downstream.
    pub fn quadruples(&self) -> &[Quadruple] {
        &self.quadruples
    }

    pub fn len(&self) -> usize {
        self.quadruples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quadruples.is_empty()
    }
}

/// A parsed certificate. It is immutable once created.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Certificate {
    groups: Vec<Group>,
    indices: BTreeSet<u32>,
}

impl Certificate {
    /// Create a certificate from groups of quadruples. The group at position `n` in the vector
    /// gets position `n`.
    pub fn new(groups: impl IntoIterator<Item = Vec<Quadruple>>) -> Certificate {
        let groups: Vec<_> = groups
            .into_iter()
            .enumerate()
            .map(|(position, quadruples)| Group::new(position, quadruples))
            .collect();

        let indices = groups
            .iter()
            .flat_map(|group| group.quadruples())
            .flat_map(|quadruple| quadruple.indices())
            .collect();

        Certificate { groups, indices }
    }

    /// Read a certificate from the given source.
    pub fn parse(mut source: impl Read) -> Result<Certificate, ParseError> {
        let mut text = String::new();
        let _ = source.read_to_string(&mut text)?;

        reader::read_certificate(&text)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// The number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Every index that occurs in any quadruple of the certificate.
    pub fn indices(&self) -> &BTreeSet<u32> {
        &self.indices
    }

    /// The largest index in the certificate, or `None` if it contains no quadruples at all.
    pub fn max_index(&self) -> Option<u32> {
        self.indices.last().copied()
    }
}

impl FromStr for Certificate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        reader::read_certificate(s)
    }
}
