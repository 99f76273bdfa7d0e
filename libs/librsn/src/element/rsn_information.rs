use log::debug;

use super::{AkmSuite, CypherSuite, ElementOption, RsnCapabilities, RSN_ELEMENT_ID};
use crate::error::Error;
use crate::parsers::parse_rsn_information;

/// Size of a single suite selector on the wire.
pub(crate) const SUITE_SELECTOR_LEN: usize = 4;

/// Version (2) + group suite (4) + two list counts (2 each) + capabilities (2).
const FIXED_LEN: usize = 12;

/// The smallest option [RsnInformation::from_option] accepts:
/// two 16 bit fields and the 32 bit group suite.
const MIN_OPTION_LEN: usize = 8;

/// The largest payload an information element can carry.
const MAX_ELEMENT_DATA_LEN: usize = u8::MAX as usize;

/// The body of an RSN information element (IEEE 802.11-2012, 8.4.2.27).
///
/// The wire layout is strictly sequential, all integers are little endian:
///
/// 2 bytes: Version
/// 4 bytes: Group cipher suite
/// 2 bytes: Pairwise cipher suite count (n)
/// 4*n bytes: Pairwise cipher suites
/// 2 bytes: AKM suite count (m)
/// 4*m bytes: AKM suites
/// 2 bytes: RSN capabilities
///
/// All fields are kept in host byte order.
/// Conversion only happens in [RsnInformation::parse] and [RsnInformation::serialize].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RsnInformation {
    pub(crate) version: u16,
    pub(crate) group_suite: CypherSuite,
    pub(crate) pairwise_cyphers: Vec<CypherSuite>,
    pub(crate) akm_cyphers: Vec<AkmSuite>,
    pub(crate) capabilities: u16,
}

impl Default for RsnInformation {
    fn default() -> Self {
        RsnInformation {
            version: 1,
            group_suite: CypherSuite::Ccmp,
            pairwise_cyphers: Vec::new(),
            akm_cyphers: Vec::new(),
            capabilities: 0,
        }
    }
}

impl RsnInformation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the element data of an RSN information element.
    /// The element id and length must already be stripped.
    ///
    /// Bytes following the capabilities field are ignored.
    pub fn parse(data: &[u8]) -> Result<Self, Error> {
        parse_rsn_information(data)
    }

    /// The common WPA2-Personal configuration: CCMP for group and pairwise traffic, PSK as AKM.
    pub fn wpa2_psk() -> Self {
        RsnInformation {
            group_suite: CypherSuite::Ccmp,
            pairwise_cyphers: vec![CypherSuite::Ccmp],
            akm_cyphers: vec![AkmSuite::Psk],
            ..Default::default()
        }
    }

    /// Parse the data of a generic element option.
    /// The option has to be at least large enough to hold the version, the group suite and the
    /// pairwise count, otherwise [Error::MalformedOption] is returned without parsing anything.
    pub fn from_option(option: &ElementOption<'_>) -> Result<Self, Error> {
        let size = option.data_size();
        if size < MIN_OPTION_LEN {
            debug!("RSN option of {size} bytes is below the minimum of {MIN_OPTION_LEN}");
            return Err(Error::MalformedOption {
                size,
                minimum: MIN_OPTION_LEN,
            });
        }

        Self::parse(option.data)
    }

    pub fn version(&self) -> u16 {
        self.version
    }

    pub fn set_version(&mut self, version: u16) {
        self.version = version;
    }

    pub fn group_suite(&self) -> CypherSuite {
        self.group_suite
    }

    /// Suites are stored in their canonical form, an `Unknown` holding a known code is
    /// replaced by the named variant.
    pub fn set_group_suite(&mut self, group_suite: CypherSuite) {
        self.group_suite = CypherSuite::from_code(group_suite.code());
    }

    pub fn pairwise_cyphers(&self) -> &[CypherSuite] {
        &self.pairwise_cyphers
    }

    /// Append a pairwise cipher suite.
    /// Fails once the list holds as many entries as the 16 bit count field can express.
    pub fn add_pairwise_cypher(&mut self, cypher: CypherSuite) -> Result<(), Error> {
        if self.pairwise_cyphers.len() >= usize::from(u16::MAX) {
            return Err(Error::TooManySuites("pairwise cipher"));
        }
        self.pairwise_cyphers
            .push(CypherSuite::from_code(cypher.code()));

        Ok(())
    }

    pub fn akm_cyphers(&self) -> &[AkmSuite] {
        &self.akm_cyphers
    }

    /// Append an AKM suite.
    /// Fails once the list holds as many entries as the 16 bit count field can express.
    pub fn add_akm_cypher(&mut self, akm: AkmSuite) -> Result<(), Error> {
        if self.akm_cyphers.len() >= usize::from(u16::MAX) {
            return Err(Error::TooManySuites("AKM"));
        }
        self.akm_cyphers.push(AkmSuite::from_code(akm.code()));

        Ok(())
    }

    pub fn capabilities(&self) -> u16 {
        self.capabilities
    }

    pub fn set_capabilities(&mut self, capabilities: u16) {
        self.capabilities = capabilities;
    }

    pub fn capability_flags(&self) -> RsnCapabilities {
        RsnCapabilities(self.capabilities)
    }

    /// The exact number of bytes [RsnInformation::serialize] produces.
    pub fn serialized_len(&self) -> usize {
        FIXED_LEN + SUITE_SELECTOR_LEN * (self.pairwise_cyphers.len() + self.akm_cyphers.len())
    }

    /// Serialize into the element data of an RSN information element, without id and length.
    pub fn serialize(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.serialized_len());

        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend_from_slice(&self.group_suite.code().to_le_bytes());

        // Both lists are capped at u16::MAX entries by their only mutators.
        bytes.extend_from_slice(&(self.pairwise_cyphers.len() as u16).to_le_bytes());
        for cypher in &self.pairwise_cyphers {
            bytes.extend_from_slice(&cypher.code().to_le_bytes());
        }

        bytes.extend_from_slice(&(self.akm_cyphers.len() as u16).to_le_bytes());
        for akm in &self.akm_cyphers {
            bytes.extend_from_slice(&akm.code().to_le_bytes());
        }

        bytes.extend_from_slice(&self.capabilities.to_le_bytes());

        bytes
    }

    /// Serialize into a complete information element, including element id and length.
    pub fn to_element_bytes(&self) -> Result<Vec<u8>, Error> {
        let data = self.serialize();
        if data.len() > MAX_ELEMENT_DATA_LEN {
            return Err(Error::ElementTooLarge(data.len()));
        }

        let mut bytes = Vec::with_capacity(data.len() + 2);
        bytes.push(RSN_ELEMENT_ID);
        bytes.push(data.len() as u8);
        bytes.extend(data);

        Ok(bytes)
    }
}

impl TryFrom<&[u8]> for RsnInformation {
    type Error = Error;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        RsnInformation::parse(data)
    }
}
