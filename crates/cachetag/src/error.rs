use thiserror::Error as ThisError;

/// Failure raised by a caller-supplied tagging function. Opaque to the
/// walker, which has no safe substitute behavior.
pub type TaggerError = Box<dyn std::error::Error + Send + Sync + 'static>;

///
/// DeriveError
///
/// Tag derivation fails as a whole: a partial tag set would silently miss
/// invalidations, which is worse than a hard failure.
///

#[derive(Debug, ThisError)]
pub enum DeriveError {
    /// A virtual association declared neither a tagger nor a key with a
    /// recognized `_id`/`_ids` suffix.
    #[error("association '{key}' has no tagging rule: expected an `_id`/`_ids` key suffix or a tagger")]
    MissingTagRule { key: String },

    /// A tagging function failed; the message passes through verbatim.
    #[error("{0}")]
    Tagger(TaggerError),
}

impl From<TaggerError> for DeriveError {
    fn from(err: TaggerError) -> Self {
        Self::Tagger(err)
    }
}
