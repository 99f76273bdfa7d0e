use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The OUI assigned to IEEE 802.11, used by every suite defined in the standard.
pub const IEEE_OUI: [u8; 3] = [0x00, 0x0F, 0xAC];

/// Build the host-order code of a suite selector.
/// Written out in little endian this yields the selector as it appears on air:
/// `OUI || suite type`.
pub const fn suite_code(oui: [u8; 3], suite_type: u8) -> u32 {
    u32::from_le_bytes([oui[0], oui[1], oui[2], suite_type])
}

const fn ieee_code(suite_type: u8) -> u32 {
    suite_code(IEEE_OUI, suite_type)
}

fn selector_bytes(code: u32) -> [u8; 4] {
    code.to_le_bytes()
}

fn fmt_selector(code: u32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let [a, b, c, suite_type] = selector_bytes(code);
    write!(f, "{a:02x}-{b:02x}-{c:02x}:{suite_type}")
}

/// Parse a raw `0x` prefixed suite code, as accepted by both [FromStr] implementations.
fn parse_raw_code(value: &str) -> Option<u32> {
    let hex = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))?;
    u32::from_str_radix(hex, 16).ok()
}

/// Cipher suites as listed in IEEE 802.11-2012, Table 8-99.
///
/// Codes that aren't known to this library are kept as [CypherSuite::Unknown],
/// so they survive a parse/serialize round-trip untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CypherSuite {
    /// Use the group cipher suite. Only valid as a pairwise suite.
    GroupCipherSuite,
    Wep40,
    Tkip,
    Wrap,
    #[default]
    Ccmp,
    Wep104,
    Unknown(u32),
}

impl CypherSuite {
    pub const GROUP_CIPHER_SUITE: u32 = ieee_code(0);
    pub const WEP_40: u32 = ieee_code(1);
    pub const TKIP: u32 = ieee_code(2);
    pub const WRAP: u32 = ieee_code(3);
    pub const CCMP: u32 = ieee_code(4);
    pub const WEP_104: u32 = ieee_code(5);

    pub fn from_code(code: u32) -> CypherSuite {
        match code {
            Self::GROUP_CIPHER_SUITE => CypherSuite::GroupCipherSuite,
            Self::WEP_40 => CypherSuite::Wep40,
            Self::TKIP => CypherSuite::Tkip,
            Self::WRAP => CypherSuite::Wrap,
            Self::CCMP => CypherSuite::Ccmp,
            Self::WEP_104 => CypherSuite::Wep104,
            _ => CypherSuite::Unknown(code),
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            CypherSuite::GroupCipherSuite => Self::GROUP_CIPHER_SUITE,
            CypherSuite::Wep40 => Self::WEP_40,
            CypherSuite::Tkip => Self::TKIP,
            CypherSuite::Wrap => Self::WRAP,
            CypherSuite::Ccmp => Self::CCMP,
            CypherSuite::Wep104 => Self::WEP_104,
            CypherSuite::Unknown(code) => *code,
        }
    }

    pub fn oui(&self) -> [u8; 3] {
        let [a, b, c, _] = selector_bytes(self.code());
        [a, b, c]
    }

    pub fn suite_type(&self) -> u8 {
        selector_bytes(self.code())[3]
    }
}

impl From<u32> for CypherSuite {
    fn from(code: u32) -> Self {
        CypherSuite::from_code(code)
    }
}

impl fmt::Display for CypherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CypherSuite::GroupCipherSuite => write!(f, "Group Cipher Suite"),
            CypherSuite::Wep40 => write!(f, "WEP-40"),
            CypherSuite::Tkip => write!(f, "TKIP"),
            CypherSuite::Wrap => write!(f, "WRAP"),
            CypherSuite::Ccmp => write!(f, "CCMP"),
            CypherSuite::Wep104 => write!(f, "WEP-104"),
            CypherSuite::Unknown(code) => {
                write!(f, "Unknown (")?;
                fmt_selector(*code, f)?;
                write!(f, ")")
            }
        }
    }
}

impl FromStr for CypherSuite {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let suite = match value.to_ascii_lowercase().as_str() {
            "group" => CypherSuite::GroupCipherSuite,
            "wep40" | "wep-40" => CypherSuite::Wep40,
            "tkip" => CypherSuite::Tkip,
            "wrap" => CypherSuite::Wrap,
            "ccmp" => CypherSuite::Ccmp,
            "wep104" | "wep-104" => CypherSuite::Wep104,
            _ => match parse_raw_code(value) {
                Some(code) => CypherSuite::from_code(code),
                None => return Err(Error::UnknownSuite(value.to_string())),
            },
        };

        Ok(suite)
    }
}

/// Authentication and key management suites as listed in IEEE 802.11-2012, Table 8-101,
/// extended by the SHA-256, SAE and Suite B entries of later revisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AkmSuite {
    /// Authentication negotiated over IEEE 802.1X (EAP), PMKSA caching.
    Pmksa,
    #[default]
    Psk,
    FtPmksa,
    FtPsk,
    PmksaSha256,
    PskSha256,
    Sae,
    SuiteBEap256,
    Unknown(u32),
}

impl AkmSuite {
    pub const PMKSA: u32 = ieee_code(1);
    pub const PSK: u32 = ieee_code(2);
    pub const FT_PMKSA: u32 = ieee_code(3);
    pub const FT_PSK: u32 = ieee_code(4);
    pub const PMKSA_SHA256: u32 = ieee_code(5);
    pub const PSK_SHA256: u32 = ieee_code(6);
    pub const SAE: u32 = ieee_code(8);
    pub const SUITE_B_EAP_256: u32 = ieee_code(11);

    pub fn from_code(code: u32) -> AkmSuite {
        match code {
            Self::PMKSA => AkmSuite::Pmksa,
            Self::PSK => AkmSuite::Psk,
            Self::FT_PMKSA => AkmSuite::FtPmksa,
            Self::FT_PSK => AkmSuite::FtPsk,
            Self::PMKSA_SHA256 => AkmSuite::PmksaSha256,
            Self::PSK_SHA256 => AkmSuite::PskSha256,
            Self::SAE => AkmSuite::Sae,
            Self::SUITE_B_EAP_256 => AkmSuite::SuiteBEap256,
            _ => AkmSuite::Unknown(code),
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            AkmSuite::Pmksa => Self::PMKSA,
            AkmSuite::Psk => Self::PSK,
            AkmSuite::FtPmksa => Self::FT_PMKSA,
            AkmSuite::FtPsk => Self::FT_PSK,
            AkmSuite::PmksaSha256 => Self::PMKSA_SHA256,
            AkmSuite::PskSha256 => Self::PSK_SHA256,
            AkmSuite::Sae => Self::SAE,
            AkmSuite::SuiteBEap256 => Self::SUITE_B_EAP_256,
            AkmSuite::Unknown(code) => *code,
        }
    }

    pub fn oui(&self) -> [u8; 3] {
        let [a, b, c, _] = selector_bytes(self.code());
        [a, b, c]
    }

    pub fn suite_type(&self) -> u8 {
        selector_bytes(self.code())[3]
    }
}

impl From<u32> for AkmSuite {
    fn from(code: u32) -> Self {
        AkmSuite::from_code(code)
    }
}

impl fmt::Display for AkmSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AkmSuite::Pmksa => write!(f, "802.1X (EAP)"),
            AkmSuite::Psk => write!(f, "PSK"),
            AkmSuite::FtPmksa => write!(f, "FT over 802.1X"),
            AkmSuite::FtPsk => write!(f, "FT using PSK"),
            AkmSuite::PmksaSha256 => write!(f, "802.1X SHA-256"),
            AkmSuite::PskSha256 => write!(f, "PSK SHA-256"),
            AkmSuite::Sae => write!(f, "SAE"),
            AkmSuite::SuiteBEap256 => write!(f, "Suite B 802.1X SHA-256"),
            AkmSuite::Unknown(code) => {
                write!(f, "Unknown (")?;
                fmt_selector(*code, f)?;
                write!(f, ")")
            }
        }
    }
}

impl FromStr for AkmSuite {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let suite = match value.to_ascii_lowercase().as_str() {
            "eap" | "pmksa" | "802.1x" => AkmSuite::Pmksa,
            "psk" => AkmSuite::Psk,
            "ft-eap" | "ft-pmksa" => AkmSuite::FtPmksa,
            "ft-psk" => AkmSuite::FtPsk,
            "eap-sha256" | "pmksa-sha256" => AkmSuite::PmksaSha256,
            "psk-sha256" => AkmSuite::PskSha256,
            "sae" => AkmSuite::Sae,
            "suite-b" | "suiteb-eap256" => AkmSuite::SuiteBEap256,
            _ => match parse_raw_code(value) {
                Some(code) => AkmSuite::from_code(code),
                None => return Err(Error::UnknownSuite(value.to_string())),
            },
        };

        Ok(suite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_selectors() {
        assert_eq!(CypherSuite::Ccmp.code().to_le_bytes(), [0x00, 0x0F, 0xAC, 0x04]);
        assert_eq!(CypherSuite::Tkip.code().to_le_bytes(), [0x00, 0x0F, 0xAC, 0x02]);
        assert_eq!(AkmSuite::Psk.code().to_le_bytes(), [0x00, 0x0F, 0xAC, 0x02]);
        assert_eq!(AkmSuite::Pmksa.code().to_le_bytes(), [0x00, 0x0F, 0xAC, 0x01]);
        assert_eq!(AkmSuite::Sae.code().to_le_bytes(), [0x00, 0x0F, 0xAC, 0x08]);
    }

    #[test]
    fn test_suite_types() {
        let ciphers = [
            CypherSuite::GroupCipherSuite,
            CypherSuite::Wep40,
            CypherSuite::Tkip,
            CypherSuite::Wrap,
            CypherSuite::Ccmp,
            CypherSuite::Wep104,
        ];
        for (suite_type, cipher) in ciphers.iter().enumerate() {
            assert_eq!(cipher.suite_type() as usize, suite_type);
            assert_eq!(cipher.oui(), IEEE_OUI);
        }

        assert_eq!(AkmSuite::Pmksa.suite_type(), 1);
        assert_eq!(AkmSuite::Psk.suite_type(), 2);
        assert_eq!(AkmSuite::SuiteBEap256.suite_type(), 11);
    }

    #[test]
    fn test_unknown_codes_are_kept() {
        let vendor = suite_code([0x00, 0x50, 0xF2], 4);
        assert_eq!(CypherSuite::from_code(vendor), CypherSuite::Unknown(vendor));
        assert_eq!(CypherSuite::from_code(vendor).code(), vendor);
        assert_eq!(AkmSuite::from_code(0).code(), 0);
        assert_eq!(CypherSuite::Unknown(vendor).oui(), [0x00, 0x50, 0xF2]);
    }

    #[test]
    fn test_display() {
        assert_eq!(CypherSuite::Ccmp.to_string(), "CCMP");
        assert_eq!(AkmSuite::Pmksa.to_string(), "802.1X (EAP)");
        let vendor = CypherSuite::from_code(suite_code([0x00, 0x50, 0xF2], 2));
        assert_eq!(vendor.to_string(), "Unknown (00-50-f2:2)");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("CCMP".parse::<CypherSuite>(), Ok(CypherSuite::Ccmp));
        assert_eq!("wep-104".parse::<CypherSuite>(), Ok(CypherSuite::Wep104));
        assert_eq!("sae".parse::<AkmSuite>(), Ok(AkmSuite::Sae));
        assert_eq!("0x02ac0f00".parse::<AkmSuite>(), Ok(AkmSuite::Psk));
        assert_eq!(
            "0x12345678".parse::<CypherSuite>(),
            Ok(CypherSuite::Unknown(0x1234_5678))
        );
        assert!(matches!(
            "gcmp-512".parse::<CypherSuite>(),
            Err(Error::UnknownSuite(_))
        ));
    }
}
