//! # Codec
//!
//! Compact binary encoding for vectors.
//!
//! ## Format
//!
//! ```text
//! [Tag: 1 byte]
//!   - b'd' : IEEE-754 double, 8 bytes per component
//!   - b'f' : IEEE-754 single, 4 bytes per component
//!
//! [Components: variable]
//!   - Each component in declared order, little-endian
//! ```
//!
//! There is no length prefix: the component count is whatever the payload
//! length divided by the component width says. A payload that doesn't
//! divide evenly is rejected rather than truncated.
//!
//! The byte order is fixed little-endian on every host. It matches the
//! native layout of x86 and most ARM targets, so buffers written by tools
//! that dump raw double arrays on those targets decode directly.
//!
//! ## Usage
//!
//! ```rust
//! use vectorkit::{Components, Vector2d};
//!
//! let v = Vector2d::new(3, 4).unwrap();
//! let bytes = v.to_bytes();
//! assert_eq!(bytes.len(), 17);
//! assert_eq!(Vector2d::from_bytes(&bytes).unwrap(), v);
//! ```

use super::config::{CodecConfig, Encoding};
use super::error::{VectorError, VectorResult};

/// Encode components behind a tag byte
///
/// Fails with `InvalidComponent` when narrowing to `Encoding::Float` pushes a
/// component out of single-precision range, since the buffer could not be
/// decoded again.
pub fn encode(components: &[f64], config: &CodecConfig) -> VectorResult<Vec<u8>> {
    match config.encoding {
        Encoding::Double => Ok(encode_double(components)),
        Encoding::Float => encode_float(components),
    }
}

/// Encode as doubles, which holds every `f64` exactly
pub fn encode_double(components: &[f64]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + components.len() * Encoding::Double.width());
    buf.push(Encoding::Double.tag());
    for &c in components {
        buf.extend_from_slice(&c.to_le_bytes());
    }
    buf
}

fn encode_float(components: &[f64]) -> VectorResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(1 + components.len() * Encoding::Float.width());
    buf.push(Encoding::Float.tag());
    for (index, &c) in components.iter().enumerate() {
        let narrowed = c as f32;
        if narrowed.is_infinite() && c.is_finite() {
            tracing::debug!(index, value = c, "component overflows single precision");
            return Err(VectorError::InvalidComponent {
                index,
                value: f64::from(narrowed),
            });
        }
        buf.extend_from_slice(&narrowed.to_le_bytes());
    }
    Ok(buf)
}

/// Decode a buffer into raw components
///
/// The components are not validated here; the vector constructors do that.
pub fn decode(buffer: &[u8], config: &CodecConfig) -> VectorResult<Vec<f64>> {
    let (&tag, payload) = buffer
        .split_first()
        .ok_or_else(|| VectorError::malformed("empty buffer, missing encoding tag"))?;

    let encoding = match Encoding::from_tag(tag) {
        Some(encoding) if config.accepts(encoding) => encoding,
        _ => {
            tracing::debug!(tag, strict = config.strict, "rejecting vector buffer tag");
            return Err(VectorError::UnsupportedEncoding(tag));
        }
    };

    let width = encoding.width();
    if payload.len() % width != 0 {
        tracing::debug!(len = payload.len(), width, "vector payload has a partial component");
        return Err(VectorError::malformed(format!(
            "payload of {} bytes is not a multiple of the {}-byte component width",
            payload.len(),
            width
        )));
    }

    let components = payload
        .chunks_exact(width)
        .map(|chunk| match encoding {
            Encoding::Double => {
                let mut bytes = [0u8; 8];
                bytes.copy_from_slice(chunk);
                f64::from_le_bytes(bytes)
            }
            Encoding::Float => {
                let mut bytes = [0u8; 4];
                bytes.copy_from_slice(chunk);
                f64::from(f32::from_le_bytes(bytes))
            }
        })
        .collect();

    Ok(components)
}

/// Decode a buffer that must hold exactly `arity` components
pub fn decode_exact(buffer: &[u8], config: &CodecConfig, arity: usize) -> VectorResult<Vec<f64>> {
    let components = decode(buffer, config)?;
    if components.len() != arity {
        return Err(VectorError::malformed(format!(
            "expected {} components, buffer holds {}",
            arity,
            components.len()
        )));
    }
    Ok(components)
}
