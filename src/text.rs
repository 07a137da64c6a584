//! Line-oriented text form: five lines per reservoir, no separator.
//!
//! ```text
//! <name>
//! <kind>
//! <width>
//! <length>
//! <max depth>
//! ```

use crate::error::{from_nom, DecodeError, Result};
use crate::reservoir::Reservoir;
use nom::branch::alt;
use nom::character::complete::{line_ending, not_line_ending};
use nom::combinator::eof;
use nom::IResult;
use tracing::debug;

pub const LINES_PER_RECORD: usize = 5;

pub fn encode(r: &Reservoir) -> String {
    format!(
        "{}\n{}\n{}\n{}\n{}\n",
        r.name(),
        r.kind(),
        r.width(),
        r.length(),
        r.max_depth()
    )
}

/// Reads one line; the last line of the input may omit its terminator.
fn field_line(field: &'static str) -> impl Fn(&str) -> IResult<&str, &str, DecodeError> {
    move |s| {
        if s.is_empty() {
            return Err(nom::Err::Failure(DecodeError::IncompleteRecord { field }));
        }
        let (s, line) = not_line_ending::<_, DecodeError>(s)?;
        let (s, _) = alt((line_ending::<_, DecodeError>, eof::<_, DecodeError>))(s)?;
        Ok((s, line))
    }
}

fn number_line(field: &'static str) -> impl Fn(&str) -> IResult<&str, f64, DecodeError> {
    move |s| {
        let (s, line) = field_line(field)(s)?;
        let value = line.trim().parse::<f64>().map_err(|_| {
            nom::Err::Failure(DecodeError::InvalidNumber {
                field,
                value: line.to_owned(),
            })
        })?;
        Ok((s, value))
    }
}

fn record(s: &str) -> IResult<&str, Reservoir, DecodeError> {
    let (s, name) = field_line("name")(s)?;
    let (s, kind) = field_line("kind")(s)?;
    let (s, width) = number_line("width")(s)?;
    let (s, length) = number_line("length")(s)?;
    let (s, max_depth) = number_line("max_depth")(s)?;
    Ok((s, Reservoir::new(name, kind, width, length, max_depth)))
}

/// Decodes consecutive five-line groups until the input is exhausted.
pub fn decode(s: &str) -> Result<Vec<Reservoir>> {
    let mut input = s;
    let mut records = vec![];
    while !input.is_empty() {
        let (rest, r) = record(input).map_err(from_nom)?;
        debug!(name = r.name(), "decoded text record");
        records.push(r);
        input = rest;
    }
    Ok(records)
}
