//! PIB and hardware attribute identifiers.

/// A PIB attribute settable and readable through MLME-SET/MLME-GET.
///
/// Values follow the IEEE 802.15.4-2006 attribute enumeration, with one
/// vendor extension at the top of the range for writing the device's
/// extended address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum PibAttribute {
    PhyCurrentChannel = 0x00,
    PhyChannelsSupported = 0x01,
    PhyTransmitPower = 0x02,
    PhyCcaMode = 0x03,
    PhyCurrentPage = 0x04,
    MacAckWaitDuration = 0x40,
    MacAssociationPermit = 0x41,
    MacAutoRequest = 0x42,
    MacBattLifeExt = 0x43,
    MacBattLifeExtPeriods = 0x44,
    MacBeaconPayload = 0x45,
    MacBeaconPayloadLength = 0x46,
    MacBeaconOrder = 0x47,
    MacBeaconTxTime = 0x48,
    MacBsn = 0x49,
    MacCoordExtendedAddress = 0x4a,
    MacCoordShortAddress = 0x4b,
    MacDsn = 0x4c,
    MacGtsPermit = 0x4d,
    MacMaxCsmaBackoffs = 0x4e,
    MacMinBe = 0x4f,
    MacPanId = 0x50,
    MacPromiscuousMode = 0x51,
    MacRxOnWhenIdle = 0x52,
    MacShortAddress = 0x53,
    MacSuperframeOrder = 0x54,
    MacTransactionPersistenceTime = 0x55,
    MacAssociatedPanCoord = 0x56,
    MacMaxBe = 0x57,
    MacMaxFrameTotalWaitTime = 0x58,
    MacMaxFrameRetries = 0x59,
    MacResponseWaitTime = 0x5a,
    MacSyncSymbolOffset = 0x5b,
    MacTimestampSupported = 0x5c,
    MacSecurityEnabled = 0x5d,
    MacAutoRequestSecurityLevel = 0x78,
    MacAutoRequestKeyIdMode = 0x79,
    /// Vendor extension: the 64-bit IEEE address of this device.
    NsIeeeAddress = 0xff,
}

impl From<PibAttribute> for u8 {
    fn from(attribute: PibAttribute) -> u8 {
        attribute as u8
    }
}

/// A hardware attribute settable and readable through HWME-SET/HWME-GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum HwAttribute {
    PowerCon = 0x00,
    ChipId = 0x01,
    TxPower = 0x02,
    CcaMode = 0x03,
    EdThreshold = 0x04,
    CsThreshold = 0x05,
    EdValue = 0x06,
    CsValue = 0x07,
    EdValueLqi = 0x08,
    CsValueLqi = 0x09,
    MacTimer = 0x0a,
    RandomNumber = 0x0b,
    TemperatureValue = 0x0c,
    SystemClock = 0x0d,
    /// How the radio derives the LQI it reports for received frames.
    LqiMode = 0x10,
    /// LQI value below which the radio itself rejects received frames.
    LqiLimit = 0x11,
}

impl From<HwAttribute> for u8 {
    fn from(attribute: HwAttribute) -> u8 {
        attribute as u8
    }
}

/// Source of the LQI value reported by the radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LqiMode {
    /// LQI derived from carrier sense.
    Cs,
    /// LQI derived from energy detect.
    Ed,
    /// A mode byte outside the known set.
    Unknown(u8),
}

impl From<u8> for LqiMode {
    fn from(value: u8) -> Self {
        match value {
            0x00 => Self::Cs,
            0x01 => Self::Ed,
            other => Self::Unknown(other),
        }
    }
}

impl From<LqiMode> for u8 {
    fn from(mode: LqiMode) -> u8 {
        match mode {
            LqiMode::Cs => 0x00,
            LqiMode::Ed => 0x01,
            LqiMode::Unknown(other) => other,
        }
    }
}
