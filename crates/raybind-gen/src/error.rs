//! Generator error types.

/// Errors that can occur during binding generation.
///
/// All variants except I/O wrappers are fatal for the whole run: a single
/// bad declaration invalidates the batch rather than producing partial
/// output.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// A parameter or return type has no type registry entry.
    #[error("unknown type '{name}{}'", if *.is_pointer { " *" } else { "" })]
    UnknownType { name: String, is_pointer: bool },

    /// A parameter token did not decompose per the expected grammar.
    #[error("malformed parameter '{fragment}'")]
    MalformedParameter { fragment: String },

    /// The bind manifest is structurally invalid.
    #[error("invalid manifest: {detail}")]
    InvalidManifest { detail: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GenError>;
