use std::fmt;
use std::sync::Arc;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped by the default encoder: everything non-alphanumeric except
/// the marks left intact by `encodeURIComponent` (`- _ . ! ~ * ' ( )`).
const COOKIE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Text transform applied to the cookie key and value.
pub type CodecFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Decode/encode pair for the leading `key=value` segment.
///
/// `decode` runs while parsing, `encode` while serializing. Attribute values
/// (`Domain`, `Path`, `SameSite`, ...) never pass through either direction.
/// Each record holds its own codec, so separate constructions share nothing.
///
/// The default pair percent-decodes and percent-encodes.
#[derive(Clone)]
pub struct Codec {
    decode: CodecFn,
    encode: CodecFn,
}

impl Codec {
    /// Build a codec from explicit decode and encode functions.
    pub fn new(decode: CodecFn, encode: CodecFn) -> Self {
        Self { decode, encode }
    }

    /// Replace the decode half.
    pub fn decode_with(mut self, decode: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.decode = Arc::new(decode);
        self
    }

    /// Replace the encode half.
    pub fn encode_with(mut self, encode: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.encode = Arc::new(encode);
        self
    }

    pub(crate) fn decode(&self, text: &str) -> String {
        (self.decode)(text)
    }

    pub(crate) fn encode(&self, text: &str) -> String {
        (self.encode)(text)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self {
            // Undecodable percent sequences degrade to replacement
            // characters rather than failing the parse.
            decode: Arc::new(|text| percent_decode_str(text).decode_utf8_lossy().into_owned()),
            encode: Arc::new(|text| utf8_percent_encode(text, COOKIE_ENCODE_SET).to_string()),
        }
    }
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec").finish_non_exhaustive()
    }
}
