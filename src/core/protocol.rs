//! # Components
//!
//! The protocol shared by every vector type: ordered iteration, magnitude,
//! structural equality, hashing, repr text, the format mini-language and
//! the byte codec.
//!
//! Implementors only provide their component slice and a type name. The
//! fixed-arity [`Vector2d`](super::Vector2d) also overrides `magnitude` and
//! supplies polar coordinates.

use super::codec;
use super::config::CodecConfig;
use super::error::{VectorError, VectorResult};
use super::format::{join_formatted, repr_f64, split_polar, FormatSpec};
use super::hash::hash_components;
use super::scalar::Scalar;

/// Iterator over a vector's components, in declared order
pub type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, f64>>;

/// The vector protocol
pub trait Components {
    /// Name used in repr text, e.g. `Vector2d(3.0, 4.0)`
    const TYPE_NAME: &'static str;

    /// The components, in declared order
    fn as_slice(&self) -> &[f64];

    /// Number of components
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// True for a zero-length vector
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fresh iterator over the components
    ///
    /// Every call starts over; the vector is never consumed.
    fn iter(&self) -> Iter<'_> {
        self.as_slice().iter().copied()
    }

    /// Euclidean norm
    ///
    /// Plain sum of squares; very large or very small components can
    /// overflow or underflow before the square root.
    fn magnitude(&self) -> f64 {
        self.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// False only for vectors of zero magnitude
    fn is_truthy(&self) -> bool {
        self.magnitude() != 0.0
    }

    /// XOR of the component hashes
    ///
    /// Equal vectors always hash equal, across vector types too.
    fn hash_value(&self) -> i64 {
        hash_components(self.iter())
    }

    /// Compare against any ordered numeric sequence
    ///
    /// Fails with `ArityMismatch` when the lengths differ. Components are
    /// compared with IEEE semantics, so NaN never matches.
    fn try_eq_components<I>(&self, other: I) -> VectorResult<bool>
    where
        I: IntoIterator,
        I::Item: Scalar,
    {
        let other: Vec<f64> = other.into_iter().map(Scalar::to_component).collect();
        if other.len() != self.len() {
            return Err(VectorError::ArityMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }
        Ok(self.iter().zip(other).all(|(a, b)| a == b))
    }

    /// Structural equality against any ordered numeric sequence
    ///
    /// # Example
    /// ```
    /// use vectorkit::{Components, Vector2d};
    /// let v = Vector2d::new(3, 4).unwrap();
    /// assert!(v.eq_components([3, 4]));
    /// assert!(v.eq_components(vec![3.0, 4.0]));
    /// assert!(!v.eq_components([3.0, 4.0, 0.0]));
    /// ```
    fn eq_components<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        I::Item: Scalar,
    {
        matches!(self.try_eq_components(other), Ok(true))
    }

    /// `(magnitude, angle)` for vectors that have an angle
    fn polar(&self) -> Option<(f64, f64)> {
        None
    }

    /// Constructor-call text that parses back to an equal vector
    fn repr(&self) -> String {
        let parts: Vec<String> = self.iter().map(repr_f64).collect();
        format!("{}({})", Self::TYPE_NAME, parts.join(", "))
    }

    /// Render with the format mini-language
    ///
    /// A trailing `p` selects polar `<magnitude, angle>` output, which is
    /// only defined for vectors that have an angle. Anything else is a
    /// number spec applied to every component.
    fn format(&self, spec: &str) -> VectorResult<String> {
        let (number_spec, polar) = split_polar(spec);
        let parsed = FormatSpec::parse(number_spec)?;

        if polar {
            let (magnitude, angle) = self.polar().ok_or(VectorError::UndefinedOperation(
                "polar format needs a two-component vector",
            ))?;
            return Ok(join_formatted(&parsed, [magnitude, angle], "<", ">"));
        }

        Ok(join_formatted(&parsed, self.iter(), "(", ")"))
    }

    /// Encode as a tag byte plus little-endian doubles
    fn to_bytes(&self) -> Vec<u8> {
        codec::encode_double(self.as_slice())
    }

    /// Encode with an explicit codec configuration
    ///
    /// Narrowing to `Encoding::Float` rounds each component to single
    /// precision, and fails with `InvalidComponent` for a component beyond
    /// the single-precision range.
    fn to_bytes_with(&self, config: &CodecConfig) -> VectorResult<Vec<u8>> {
        codec::encode(self.as_slice(), config)
    }
}

/// Parse repr, tuple, list or bare comma-separated text into raw components
///
/// Accepts `Name(1.0, 2.0)`, `Name([1.0, 2.0])`, `(1.0, 2.0)`, `(1.0,)`,
/// `[1.0, 2.0]` and `1.0, 2.0`.
pub(crate) fn parse_components(input: &str, type_name: &str) -> VectorResult<Vec<f64>> {
    let text = input.trim();

    let mut inner = if let Some(rest) = text.strip_prefix(type_name) {
        enclosed(rest.trim_start(), '(', ')')
            .ok_or_else(|| VectorError::parse(input, format!("expected {type_name}(...)")))?
    } else if text.starts_with('(') {
        enclosed(text, '(', ')').ok_or_else(|| VectorError::parse(input, "unbalanced parentheses"))?
    } else if text.starts_with('[') {
        enclosed(text, '[', ']').ok_or_else(|| VectorError::parse(input, "unbalanced brackets"))?
    } else {
        text
    };

    if let Some(list) = enclosed(inner.trim(), '[', ']') {
        inner = list;
    }

    let inner = inner.trim();
    if inner.is_empty() {
        return Ok(Vec::new());
    }

    let inner = inner.strip_suffix(',').unwrap_or(inner);
    inner
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .map_err(|_| VectorError::parse(input, format!("{part:?} is not a number")))
        })
        .collect()
}

fn enclosed(text: &str, open: char, close: char) -> Option<&str> {
    text.strip_prefix(open)?.strip_suffix(close)
}
