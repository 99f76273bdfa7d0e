use nom::Needed;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The element data couldn't be parsed.
    /// Either a field is cut off in the middle, or a suite list declares more entries than the
    /// remaining data can hold.
    /// The whole element should be considered unusable.
    #[error("Malformed RSN information: {}", .0)]
    MalformedPacket(String),

    /// The option handed to [RsnInformation::from_option](crate::element::RsnInformation::from_option)
    /// is too small to hold the version, group suite and pairwise count.
    #[error("Malformed RSN option: {size} bytes, at least {minimum} are required")]
    MalformedOption { size: usize, minimum: usize },

    /// A suite list already holds as many entries as its 16 bit count field can express.
    #[error("The {} suite list can't hold more than {} entries", .0, u16::MAX)]
    TooManySuites(&'static str),

    /// The serialized element doesn't fit behind the 8 bit length of an information element.
    #[error("RSN information of {} bytes doesn't fit into a single element", .0)]
    ElementTooLarge(usize),

    /// A suite name or code given to `FromStr` isn't recognised.
    #[error("Unknown suite: {}", .0)]
    UnknownSuite(String),
}

impl From<nom::Err<nom::error::Error<&[u8]>>> for Error {
    /// Convert nom's error into our own.
    /// nom's error borrows the input slice, which would tie our error to the lifetime of the
    /// parsed buffer. Only the number of unparsed bytes is kept.
    fn from(error: nom::Err<nom::error::Error<&[u8]>>) -> Self {
        match error {
            nom::Err::Incomplete(needed) => match needed {
                Needed::Size(size) => {
                    Error::MalformedPacket(format!("At least {size} bytes are missing"))
                }
                Needed::Unknown => Error::MalformedPacket("Incomplete data".to_string()),
            },
            nom::Err::Failure(error) | nom::Err::Error(error) => {
                Error::MalformedPacket(describe(error.code, error.input.len()))
            }
        }
    }
}

fn describe(kind: nom::error::ErrorKind, remaining: usize) -> String {
    match kind {
        nom::error::ErrorKind::Eof => {
            format!("field cut off with {remaining} bytes left")
        }
        nom::error::ErrorKind::LengthValue => {
            format!("suite count exceeds the remaining {remaining} bytes")
        }
        other => format!("nom::ErrorKind is {other:?} with {remaining} bytes left"),
    }
}
