//! Parser functions for imported model records

// nom parser combinators
use nom::character::complete::{self, space0, space1};
use nom::multi::many1;
use nom::number::complete::double;
use nom::sequence::{preceded, tuple};
use nom::IResult;

/// A raw model record before the field-count policy is applied
///
/// `values` holds the floating-point columns in file order:
/// `r theta v_x v_y v_z rho [t_e [t_r]]`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawRecord {
    pub i: usize,
    pub j: usize,
    pub inwind: i32,
    pub values: Vec<f64>,
}

/// Number of floating-point columns when no temperatures are given
pub(crate) const VALUES_NO_TEMP: usize = 6;

/// Number of floating-point columns with the electron temperature
pub(crate) const VALUES_ELECTRON_TEMP: usize = 7;

/// Number of floating-point columns with both temperatures
pub(crate) const VALUES_BOTH_TEMPS: usize = 8;

/// Parse one model record: `i j inwind` then the float columns
///
/// Comment and header lines fail the integer columns and are skipped by the
/// reader; a parseable record with fewer than [VALUES_NO_TEMP] floats is
/// treated the same way.
pub(crate) fn record(input: &str) -> IResult<&str, RawRecord> {
    let (rest, (i, j, inwind, values)) = tuple((
        preceded(space0, complete::u32),
        preceded(space1, complete::u32),
        preceded(space1, complete::i32),
        many1(preceded(space1, double)),
    ))(input)?;

    Ok((
        rest,
        RawRecord {
            i: i as usize,
            j: j as usize,
            inwind,
            values,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_record() {
        let line = " 1 2 0 1.0e10 45.0 0.0 0.0 1.0e5 1.0e-15 4.0e4 4.4e4";
        let (_, rec) = record(line).unwrap();
        assert_eq!((rec.i, rec.j, rec.inwind), (1, 2, 0));
        assert_eq!(rec.values.len(), VALUES_BOTH_TEMPS);
        assert_eq!(rec.values[0], 1.0e10);
        assert_eq!(rec.values[7], 4.4e4);
    }

    #[test]
    fn negative_inwind_codes_parse() {
        let line = "0 0 -1 1e10 10.0 0 0 0 1e-15";
        let (_, rec) = record(line).unwrap();
        assert_eq!(rec.inwind, -1);
        assert_eq!(rec.values.len(), VALUES_NO_TEMP);
    }

    #[test]
    fn comments_and_headers_fail() {
        assert!(record("# i j inwind r theta").is_err());
        assert!(record("r theta rho").is_err());
        assert!(record("").is_err());
    }
}
