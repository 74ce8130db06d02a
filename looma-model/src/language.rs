use crate::error::ModelError;

/// Normalized language code ("es", "en", "pt-br")
///
/// Codes are stored lowercase so map lookups and equality checks don't
/// depend on how the server or the user spelled them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Validate and normalize a raw code.
    pub fn new(code: impl AsRef<str>) -> Result<Self, ModelError> {
        let raw = code.as_ref().trim();
        if raw.is_empty()
            || raw.len() > 16
            || !raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ModelError::InvalidLanguageCode(raw.to_string()));
        }
        Ok(LanguageCode(raw.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A language as the catalog and chapter payloads describe it
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Language {
    pub code: LanguageCode,
    pub name: String,
}

impl Language {
    pub fn new(code: LanguageCode, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_lowercased() {
        let code = LanguageCode::new("PT-BR").unwrap();
        assert_eq!(code.as_str(), "pt-br");
    }

    #[test]
    fn blank_codes_are_rejected() {
        assert!(LanguageCode::new("").is_err());
        assert!(LanguageCode::new("   ").is_err());
    }

    #[test]
    fn codes_with_spaces_are_rejected() {
        assert!(LanguageCode::new("pt br").is_err());
    }
}
