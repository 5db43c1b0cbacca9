use nom::bytes::complete::tag;
use nom::character::complete::digit1;
use nom::character::complete::space0;
use nom::combinator::all_consuming;
use nom::combinator::map_res;
use nom::combinator::verify;
use nom::sequence::preceded;
use nom::sequence::tuple;
use nom::IResult;
use thiserror::Error;

use crate::Certificate;
use crate::Quadruple;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read certificate")]
    Io(#[from] std::io::Error),

    #[error("line {line_number}: '{line}' is not of the form 'X<i> + X<j> + X<k> < 2*X<l>' with positive indices")]
    Syntax { line_number: usize, line: String },
}

/// Split the text into blocks on blank lines, drop the header block, and parse every line of
/// the remaining blocks as a quadruple.
pub(crate) fn read_certificate(text: &str) -> Result<Certificate, ParseError> {
    let mut groups = vec![];
    let mut current_group: Vec<Quadruple> = vec![];
    let mut in_header = true;

    for (line_index, line) in text.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() {
            in_header = false;

            if !current_group.is_empty() {
                groups.push(std::mem::take(&mut current_group));
            }

            continue;
        }

        if in_header {
            continue;
        }

        let quadruple = parse_line(line).ok_or_else(|| ParseError::Syntax {
            line_number: line_index + 1,
            line: line.to_owned(),
        })?;

        current_group.push(quadruple);
    }

    if !current_group.is_empty() {
        groups.push(current_group);
    }

    Ok(Certificate::new(groups))
}

fn parse_line(line: &str) -> Option<Quadruple> {
    all_consuming(quadruple)(line)
        .ok()
        .map(|(_, quadruple)| quadruple)
}

fn quadruple(input: &str) -> IResult<&str, Quadruple> {
    let (input, i) = preceded(tag("X"), index)(input)?;
    let (input, j) = preceded(operator("+", "X"), index)(input)?;
    let (input, k) = preceded(operator("+", "X"), index)(input)?;
    let (input, l) = preceded(operator("<", "2*X"), index)(input)?;

    Ok((input, Quadruple::new(i, j, k, l)))
}

/// Matches `symbol` surrounded by optional whitespace, directly followed by `variable`.
fn operator<'a>(
    symbol: &'static str,
    variable: &'static str,
) -> impl FnMut(&'a str) -> IResult<&'a str, (&'a str, &'a str, &'a str, &'a str)> {
    tuple((space0, tag(symbol), space0, tag(variable)))
}

/// A strictly positive decimal index.
fn index(input: &str) -> IResult<&str, u32> {
    verify(map_res(digit1, str::parse::<u32>), |value: &u32| *value > 0)(input)
}
