//! User-facing notification strings
//!
//! Looma ships Spanish-first; presentation layers render these verbatim in
//! toasts and inline errors.

/// Fallback when a failure carries no usable message
pub const UNEXPECTED_ERROR: &str = "Ha ocurrido un error inesperado";

/// Save rejected because the active draft is blank
pub const EMPTY_CONTENT: &str = "El contenido no puede estar vacío";

pub const SAVE_SUCCESS: &str = "Capítulo guardado";
pub const PRICE_SAVE_SUCCESS: &str = "Precio actualizado";

/// Typed confirmation did not match the required phrase
pub const CONFIRMATION_MISMATCH: &str = "La confirmación no coincide";
