//! # Configuration
//!
//! Codec configuration - which component encoding to write, and which
//! encodings to accept when reading.
//!
//! The default writes IEEE-754 doubles and only reads doubles back, which is
//! the byte layout every vector's `to_bytes`/`from_bytes` uses.

/// Numeric encoding of the components in a byte buffer
///
/// The tag byte at the front of every buffer names one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// IEEE-754 double, 8 bytes per component
    #[default]
    Double,
    /// IEEE-754 single, 4 bytes per component, widened on decode
    Float,
}

impl Encoding {
    /// All encodings the codec knows about
    pub const ALL: [Encoding; 2] = [Encoding::Double, Encoding::Float];

    /// The tag byte written at the front of a buffer
    pub fn tag(self) -> u8 {
        match self {
            Encoding::Double => b'd',
            Encoding::Float => b'f',
        }
    }

    /// Look up an encoding from its tag byte
    pub fn from_tag(tag: u8) -> Option<Self> {
        Encoding::ALL.into_iter().find(|e| e.tag() == tag)
    }

    /// Bytes per component
    pub fn width(self) -> usize {
        match self {
            Encoding::Double => 8,
            Encoding::Float => 4,
        }
    }
}

/// Codec configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    /// Encoding used when writing
    pub encoding: Encoding,

    /// Reject buffers whose tag isn't `encoding`
    ///
    /// When false, any known encoding is accepted on read.
    pub strict: bool,
}

impl CodecConfig {
    /// Strict configuration for the given encoding
    pub fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            strict: true,
        }
    }

    /// Write doubles, read any known encoding
    pub fn lenient() -> Self {
        Self::default().with_strict(false)
    }

    /// Set the write encoding
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set read strictness
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Whether a buffer with this tag may be decoded
    pub fn accepts(&self, encoding: Encoding) -> bool {
        !self.strict || encoding == self.encoding
    }
}

impl Default for CodecConfig {
    /// Doubles in, doubles out
    fn default() -> Self {
        Self::new(Encoding::Double)
    }
}
