use nom::bytes::complete::take;
use nom::number::complete::u8 as get_u8;
use nom::sequence::tuple;
use nom::IResult;

use crate::element::ElementOption;

/// Parse a single tagged element.
/// The returned [ElementOption] borrows its data from `input`.
pub fn parse_element(input: &[u8]) -> IResult<&[u8], ElementOption<'_>> {
    let (input, (id, length)) = tuple((get_u8, get_u8))(input)?;
    let (input, data) = take(length)(input)?;

    Ok((input, ElementOption { id, data }))
}
