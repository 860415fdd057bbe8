//! Conversion error types.

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Why a document could not be read or written.
///
/// Every variant except [`ConvertError::Io`] means the input itself is
/// malformed; callers surface the message to the user unchanged.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("could not find <{0}> root tag")]
    MissingRoot(&'static str),

    #[error("<svg> has no viewBox attribute")]
    MissingViewBox,

    #[error("invalid viewBox `{0}`: expected four numbers with positive width and height")]
    InvalidViewBox(String),

    #[error("<{element}> is missing required attribute `{attribute}`")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("<{element}> has invalid `{attribute}` value `{value}`")]
    InvalidAttribute {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },

    #[error("XML syntax error at byte {position}: {source}")]
    Syntax {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("malformed attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error("failed to write markup")]
    Io(#[from] std::io::Error),
}
