//! Shared quick-xml plumbing for the two codecs.

use std::io::Cursor;

use quick_xml::{
    Reader, Writer,
    events::{BytesStart, Event},
};

use super::ConvertError;

/// Create a reader over in-memory markup with whitespace text trimmed.
pub fn reader(content: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);
    reader
}

/// Read the next event, attaching the byte position to syntax errors.
pub fn next<'a>(reader: &mut Reader<&'a [u8]>) -> Result<Event<'a>, ConvertError> {
    reader.read_event().map_err(|source| ConvertError::Syntax {
        position: reader.error_position() as u64,
        source,
    })
}

/// Skip everything up to and including the end tag matching `elem`.
pub fn skip_subtree(reader: &mut Reader<&[u8]>, elem: &BytesStart<'_>) -> Result<(), ConvertError> {
    reader
        .read_to_end(elem.name())
        .map(|_| ())
        .map_err(|source| ConvertError::Syntax {
            position: reader.error_position() as u64,
            source,
        })
}

/// Local (prefix-free) element name.
pub fn local_name(elem: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(elem.local_name().as_ref()).into_owned()
}

/// Decoded attributes of one element, in document order.
#[derive(Debug, Default)]
pub struct Attrs(Vec<(String, String)>);

impl Attrs {
    /// Decode and unescape every attribute of `elem`.
    pub fn read(elem: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<Self, ConvertError> {
        let decoder = reader.decoder();
        let mut attrs = Vec::new();
        for attr in elem.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.decode_and_unescape_value(decoder)?.into_owned();
            attrs.push((key, value));
        }
        Ok(Self(attrs))
    }

    /// Value of the attribute with the given qualified name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Owned copy of an optional attribute.
    pub fn owned(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }

    /// All attributes, in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> Vec<(String, String)> {
        self.0
    }
}

/// Writer into an in-memory buffer, optionally indented.
pub fn writer(indent: Option<usize>) -> Writer<Cursor<Vec<u8>>> {
    let buffer = Cursor::new(Vec::new());
    match indent {
        Some(size) => Writer::new_with_indent(buffer, b' ', size),
        None => Writer::new(buffer),
    }
}

/// Finish a writer created by [`writer`] and return the markup.
pub fn finish(writer: Writer<Cursor<Vec<u8>>>) -> String {
    String::from_utf8_lossy(&writer.into_inner().into_inner()).into_owned()
}
