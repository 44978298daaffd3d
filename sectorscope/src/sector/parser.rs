//! The seam between the load pipeline and a sector file grammar parser.

use super::SectorFile;

/// Errors reported by a [`SectorFileParser`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SectorParseError {
    /// The input is not a sector file the parser understands.
    #[error("invalid sector file: {0}")]
    Invalid(String),

    /// A syntax error the parser could not recover from.
    #[error("syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },
}

/// Turns raw sector file bytes into a [`SectorFile`].
///
/// Implementations report recoverable per-line problems through `on_error`
/// and keep going; only whole-document failures are returned as errors.
/// Parsers run on a separate thread inside the load pipeline, hence the
/// `Send + Sync + 'static` bound.
///
/// # Example
///
/// ```
/// use sectorscope::sector::{SectorFile, SectorFileParser, SectorParseError};
///
/// struct EmptyParser;
///
/// impl SectorFileParser for EmptyParser {
///     fn parse(
///         &self,
///         _contents: &[u8],
///         _filename: &str,
///         _on_error: &mut dyn FnMut(&str),
///     ) -> Result<SectorFile, SectorParseError> {
///         Ok(SectorFile::default())
///     }
/// }
/// ```
pub trait SectorFileParser: Send + Sync + 'static {
    fn parse(
        &self,
        contents: &[u8],
        filename: &str,
        on_error: &mut dyn FnMut(&str),
    ) -> Result<SectorFile, SectorParseError>;
}
