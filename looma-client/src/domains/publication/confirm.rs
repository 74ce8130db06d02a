//! Typed confirmation phrases for publication actions
//!
//! The user must type the exact phrase before the request fires. This is a
//! client-side guard against misclicks, not a security boundary.

/// Actions gated behind a typed phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationPhrase {
    DeleteChapter,
    Schedule,
    CancelSchedule,
}

impl ConfirmationPhrase {
    /// The phrase the user must reproduce, character for character.
    pub fn text(&self) -> &'static str {
        match self {
            ConfirmationPhrase::DeleteChapter => "Eliminar Capitulo",
            ConfirmationPhrase::Schedule => "Programar Capitulo",
            ConfirmationPhrase::CancelSchedule => "Deshacer Programacion",
        }
    }

    /// Exact match only; no trimming, no case folding.
    pub fn matches(&self, input: &str) -> bool {
        input == self.text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_phrases_match() {
        assert!(ConfirmationPhrase::DeleteChapter.matches("Eliminar Capitulo"));
        assert!(ConfirmationPhrase::Schedule.matches("Programar Capitulo"));
        assert!(ConfirmationPhrase::CancelSchedule.matches("Deshacer Programacion"));
    }

    #[test]
    fn near_misses_do_not_match() {
        assert!(!ConfirmationPhrase::DeleteChapter.matches("eliminar capitulo"));
        assert!(!ConfirmationPhrase::DeleteChapter.matches("Eliminar Capitulo "));
        assert!(!ConfirmationPhrase::DeleteChapter.matches(""));
    }
}
