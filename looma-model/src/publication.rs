/// Publication lifecycle of a chapter
///
/// Transitions are server-authoritative: the client issues publish/schedule
/// requests and re-reads the status from chapter payloads. These values only
/// drive which actions the presentation layer offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum PublicationStatus {
    Draft,
    Scheduled,
    Published,
}

impl PublicationStatus {
    pub fn is_draft(&self) -> bool {
        matches!(self, PublicationStatus::Draft)
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, PublicationStatus::Scheduled)
    }

    pub fn is_published(&self) -> bool {
        matches!(self, PublicationStatus::Published)
    }
}

impl std::fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PublicationStatus::Draft => "DRAFT",
            PublicationStatus::Scheduled => "SCHEDULED",
            PublicationStatus::Published => "PUBLISHED",
        };
        write!(f, "{s}")
    }
}
