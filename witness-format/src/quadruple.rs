use std::fmt::Display;
use std::fmt::Formatter;

/// One inequality `X_i + X_j + X_k < 2 * X_l` of a certificate. The indices are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quadruple {
    pub i: u32,
    pub j: u32,
    pub k: u32,
    pub l: u32,
}

impl Quadruple {
    pub fn new(i: u32, j: u32, k: u32, l: u32) -> Quadruple {
        Quadruple { i, j, k, l }
    }

    /// The four indices in the order `[i, j, k, l]`.
    pub fn indices(&self) -> [u32; 4] {
        [self.i, self.j, self.k, self.l]
    }
}

impl From<(u32, u32, u32, u32)> for Quadruple {
    fn from((i, j, k, l): (u32, u32, u32, u32)) -> Self {
        Quadruple { i, j, k, l }
    }
}

/// Renders the quadruple in the syntax of the certificate file.
impl Display for Quadruple {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X{} + X{} + X{} < 2*X{}",
            self.i, self.j, self.k, self.l
        )
    }
}
