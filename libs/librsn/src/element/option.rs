use crate::error::Error;
use crate::parsers::parse_element;

/// Element id of the RSN information element.
pub const RSN_ELEMENT_ID: u8 = 48;

/// A borrowed, length-prefixed information element.
///
/// On air, elements look like this:
///
/// 1 byte: Element id
/// 1 byte: Element length (up to 255 bytes)
/// $element_length bytes: Element data
///
/// `data` only covers the element data, the id and length header is already stripped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementOption<'a> {
    pub id: u8,
    pub data: &'a [u8],
}

impl<'a> ElementOption<'a> {
    pub fn new(id: u8, data: &'a [u8]) -> Self {
        ElementOption { id, data }
    }

    /// Split a single element off the front of `input`.
    /// Returns the element and everything following it.
    pub fn parse(input: &'a [u8]) -> Result<(ElementOption<'a>, &'a [u8]), Error> {
        let (remaining, element) = parse_element(input)?;
        Ok((element, remaining))
    }

    pub fn data_size(&self) -> usize {
        self.data.len()
    }
}
