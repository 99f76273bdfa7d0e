use log::{debug, trace};
use nom::combinator::map;
use nom::error::{Error as NomError, ErrorKind};
use nom::multi::count;
use nom::number::complete::{le_u16, le_u32};
use nom::IResult;

use crate::element::{AkmSuite, CypherSuite, RsnInformation, SUITE_SELECTOR_LEN};
use crate::error::Error;

/// Parse the element data of an RSN information element.
///
/// Every field after the version may be left out, as long as the data ends right at a field
/// boundary. Missing fields keep their [Default](RsnInformation::default) value.
/// A field that is only partially present, or a suite list whose count exceeds the remaining
/// data, results in [Error::MalformedPacket].
pub fn parse_rsn_information(input: &[u8]) -> Result<RsnInformation, Error> {
    let (remaining, info) = rsn_information(input)?;
    if !remaining.is_empty() {
        trace!("Ignoring {} trailing bytes after RSN capabilities", remaining.len());
    }

    Ok(info)
}

fn rsn_information(input: &[u8]) -> IResult<&[u8], RsnInformation> {
    let mut info = RsnInformation::default();

    let (input, version) = le_u16(input)?;
    info.version = version;
    if input.is_empty() {
        return Ok((input, info));
    }

    let (input, group_suite) = le_u32(input)?;
    info.group_suite = CypherSuite::from_code(group_suite);
    if input.is_empty() {
        return Ok((input, info));
    }

    let (input, pairwise_cyphers) = suite_list(input, "pairwise", CypherSuite::from_code)?;
    info.pairwise_cyphers = pairwise_cyphers;
    if input.is_empty() {
        return Ok((input, info));
    }

    let (input, akm_cyphers) = suite_list(input, "AKM", AkmSuite::from_code)?;
    info.akm_cyphers = akm_cyphers;
    if input.is_empty() {
        return Ok((input, info));
    }

    let (input, capabilities) = le_u16(input)?;
    info.capabilities = capabilities;

    Ok((input, info))
}

/// Parse a suite list, prefixed by its 16 bit entry count.
/// The count is checked against the remaining data once, before any entry is consumed.
fn suite_list<'a, T>(
    input: &'a [u8],
    name: &'static str,
    to_suite: fn(u32) -> T,
) -> IResult<&'a [u8], Vec<T>> {
    let (input, entries) = le_u16(input)?;
    let entries = usize::from(entries);

    let needed = entries * SUITE_SELECTOR_LEN;
    if input.len() < needed {
        debug!(
            "RSN {name} suite count of {entries} needs {needed} bytes, only {} remaining",
            input.len()
        );
        return Err(nom::Err::Failure(NomError::new(input, ErrorKind::LengthValue)));
    }

    count(map(le_u32, to_suite), entries)(input)
}
