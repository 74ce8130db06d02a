/// Strongly typed ID for chapters
///
/// Chapter identifiers are allocated by the server; the client never mints
/// them, it only round-trips values received from chapter payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ChapterId(pub u64);

impl ChapterId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ChapterId {
    fn from(id: u64) -> Self {
        ChapterId(id)
    }
}

impl std::fmt::Display for ChapterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strongly typed ID for works (the serialized pieces chapters belong to)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WorkId(pub u64);

impl WorkId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for WorkId {
    fn from(id: u64) -> Self {
        WorkId(id)
    }
}

impl std::fmt::Display for WorkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
