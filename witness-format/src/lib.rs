//! This crate contains abstractions for dealing with infeasibility certificate files. A
//! certificate is a header block followed by groups of inequalities of the form
//! `X<i> + X<j> + X<k> < 2*X<l>`, where every group is claimed to be jointly infeasible together
//! with the constraints `0 <= X_1 <= X_2 <= ... <= X_m`.
//!
//! To read a certificate, look at [`Certificate::parse`] or the [`std::str::FromStr`]
//! implementation of [`Certificate`].
mod certificate;
mod quadruple;
mod reader;

pub use certificate::*;
pub use quadruple::*;
pub use reader::ParseError;
