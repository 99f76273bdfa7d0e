/// Typed view over the RSN capabilities bitmask (IEEE 802.11-2012, 8.4.2.27.4).
///
/// The codec itself treats the capabilities as an opaque `u16`.
/// This view only decodes the bits and never drops reserved or unknown ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RsnCapabilities(pub u16);

impl RsnCapabilities {
    pub const PRE_AUTH: u16 = 1 << 0;
    pub const NO_PAIRWISE: u16 = 1 << 1;
    pub const MFP_REQUIRED: u16 = 1 << 6;
    pub const MFP_CAPABLE: u16 = 1 << 7;
    pub const JOINT_MULTI_BAND_RSNA: u16 = 1 << 8;
    pub const PEERKEY_ENABLED: u16 = 1 << 9;
    pub const EXTENDED_KEY_ID: u16 = 1 << 13;
    pub const OCVC: u16 = 1 << 14;

    const PTKSA_REPLAY_COUNTER_SHIFT: u16 = 2;
    const GTKSA_REPLAY_COUNTER_SHIFT: u16 = 4;
    const REPLAY_COUNTER_MASK: u16 = 0x03;

    pub fn bits(&self) -> u16 {
        self.0
    }

    fn is_set(&self, flag: u16) -> bool {
        self.0 & flag != 0
    }

    pub fn pre_auth(&self) -> bool {
        self.is_set(Self::PRE_AUTH)
    }

    pub fn no_pairwise(&self) -> bool {
        self.is_set(Self::NO_PAIRWISE)
    }

    /// The number of PTKSA replay counters, encoded as `2^value` (1, 2, 4 or 16 counters).
    pub fn ptksa_replay_counter(&self) -> u8 {
        ((self.0 >> Self::PTKSA_REPLAY_COUNTER_SHIFT) & Self::REPLAY_COUNTER_MASK) as u8
    }

    pub fn gtksa_replay_counter(&self) -> u8 {
        ((self.0 >> Self::GTKSA_REPLAY_COUNTER_SHIFT) & Self::REPLAY_COUNTER_MASK) as u8
    }

    pub fn mfp_required(&self) -> bool {
        self.is_set(Self::MFP_REQUIRED)
    }

    pub fn mfp_capable(&self) -> bool {
        self.is_set(Self::MFP_CAPABLE)
    }

    pub fn joint_multi_band_rsna(&self) -> bool {
        self.is_set(Self::JOINT_MULTI_BAND_RSNA)
    }

    pub fn peerkey_enabled(&self) -> bool {
        self.is_set(Self::PEERKEY_ENABLED)
    }

    pub fn extended_key_id(&self) -> bool {
        self.is_set(Self::EXTENDED_KEY_ID)
    }

    pub fn ocvc(&self) -> bool {
        self.is_set(Self::OCVC)
    }

    /// Return a copy with `flag` set or cleared.
    pub fn with_flag(self, flag: u16, enabled: bool) -> Self {
        if enabled {
            RsnCapabilities(self.0 | flag)
        } else {
            RsnCapabilities(self.0 & !flag)
        }
    }

    /// Return a copy with both replay counter fields replaced.
    /// Only the lower two bits of each value are used.
    pub fn with_replay_counters(self, ptksa: u8, gtksa: u8) -> Self {
        let cleared = self.0
            & !(Self::REPLAY_COUNTER_MASK << Self::PTKSA_REPLAY_COUNTER_SHIFT)
            & !(Self::REPLAY_COUNTER_MASK << Self::GTKSA_REPLAY_COUNTER_SHIFT);
        let ptksa =
            (u16::from(ptksa) & Self::REPLAY_COUNTER_MASK) << Self::PTKSA_REPLAY_COUNTER_SHIFT;
        let gtksa =
            (u16::from(gtksa) & Self::REPLAY_COUNTER_MASK) << Self::GTKSA_REPLAY_COUNTER_SHIFT;

        RsnCapabilities(cleared | ptksa | gtksa)
    }
}

impl From<u16> for RsnCapabilities {
    fn from(bits: u16) -> Self {
        RsnCapabilities(bits)
    }
}

impl From<RsnCapabilities> for u16 {
    fn from(capabilities: RsnCapabilities) -> Self {
        capabilities.0
    }
}
