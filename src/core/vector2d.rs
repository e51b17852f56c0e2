//! # Vector2d
//!
//! A two-dimensional vector. Immutable: the components are fixed at
//! construction and only readable afterwards.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::codec;
use super::config::CodecConfig;
use super::error::{VectorError, VectorResult};
use super::format::tuple_text;
use super::protocol::{parse_components, Components, Iter};
use super::scalar::{checked, Scalar};
use super::vector::Vector;

/// A 2D vector of finite doubles
#[derive(Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", try_from = "[f64; 2]")]
pub struct Vector2d {
    xy: [f64; 2],
}

impl Vector2d {
    /// The zero vector
    pub const ZERO: Vector2d = Vector2d::raw(0.0, 0.0);

    /// Create a vector from any two numbers
    ///
    /// Fails with `InvalidComponent` if either converts to NaN or infinity.
    ///
    /// # Example
    /// ```
    /// use vectorkit::Vector2d;
    /// let v = Vector2d::new(3, 4.5).unwrap();
    /// assert_eq!((v.x(), v.y()), (3.0, 4.5));
    /// assert!(Vector2d::new(f64::NAN, 0).is_err());
    /// ```
    pub fn new(x: impl Scalar, y: impl Scalar) -> VectorResult<Self> {
        Ok(Self::raw(checked(0, x)?, checked(1, y)?))
    }

    /// Create a vector without validating the components
    ///
    /// The only way to build a vector holding NaN or infinity.
    pub const fn raw(x: f64, y: f64) -> Self {
        Self { xy: [x, y] }
    }

    /// Horizontal component
    pub fn x(&self) -> f64 {
        self.xy[0]
    }

    /// Vertical component
    pub fn y(&self) -> f64 {
        self.xy[1]
    }

    /// Angle from the positive x axis, in radians, within (-π, π]
    ///
    /// # Example
    /// ```
    /// use vectorkit::Vector2d;
    /// let v = Vector2d::new(0, 1).unwrap();
    /// assert!((v.angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-8);
    /// ```
    pub fn angle(&self) -> f64 {
        self.y().atan2(self.x())
    }

    /// Decode from the default (double) encoding
    pub fn from_bytes(buffer: &[u8]) -> VectorResult<Self> {
        Self::from_bytes_with(buffer, &CodecConfig::default())
    }

    /// Decode with an explicit codec configuration
    ///
    /// The payload must hold exactly two components.
    pub fn from_bytes_with(buffer: &[u8], config: &CodecConfig) -> VectorResult<Self> {
        let components = codec::decode_exact(buffer, config, 2)?;
        Self::new(components[0], components[1])
    }
}

impl Components for Vector2d {
    const TYPE_NAME: &'static str = "Vector2d";

    fn as_slice(&self) -> &[f64] {
        &self.xy
    }

    /// `hypot`, which doesn't overflow for large components
    fn magnitude(&self) -> f64 {
        self.x().hypot(self.y())
    }

    fn polar(&self) -> Option<(f64, f64)> {
        Some((self.magnitude(), self.angle()))
    }
}

/// Reflexive for every vector that passed validation. A `raw` vector
/// holding NaN is unequal to itself and must stay out of hashed collections.
impl Eq for Vector2d {}

impl Hash for Vector2d {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.hash_value());
    }
}

impl fmt::Debug for Vector2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

impl fmt::Display for Vector2d {
    /// `(x, y)`; a precision such as `{:.2}` applies to each component
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&tuple_text(self.iter(), f.precision()))
    }
}

impl FromStr for Vector2d {
    type Err = VectorError;

    /// Parse repr text (`Vector2d(3.0, 4.0)`) or tuple text (`(3.0, 4.0)`)
    fn from_str(s: &str) -> VectorResult<Self> {
        Self::try_from(parse_components(s, Self::TYPE_NAME)?)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl TryFrom<[f64; 2]> for Vector2d {
    type Error = VectorError;

    fn try_from([x, y]: [f64; 2]) -> VectorResult<Self> {
        Self::new(x, y)
    }
}

impl TryFrom<&[f64]> for Vector2d {
    type Error = VectorError;

    fn try_from(components: &[f64]) -> VectorResult<Self> {
        match *components {
            [x, y] => Self::new(x, y),
            _ => Err(VectorError::ArityMismatch {
                expected: 2,
                found: components.len(),
            }),
        }
    }
}

impl TryFrom<Vec<f64>> for Vector2d {
    type Error = VectorError;

    fn try_from(components: Vec<f64>) -> VectorResult<Self> {
        Self::try_from(components.as_slice())
    }
}

impl TryFrom<&Vector> for Vector2d {
    type Error = VectorError;

    fn try_from(vector: &Vector) -> VectorResult<Self> {
        Self::try_from(vector.as_slice())
    }
}

impl From<Vector2d> for [f64; 2] {
    fn from(v: Vector2d) -> Self {
        v.xy
    }
}

impl From<Vector2d> for (f64, f64) {
    fn from(v: Vector2d) -> Self {
        (v.x(), v.y())
    }
}

impl IntoIterator for Vector2d {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.xy.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vector2d {
    type Item = f64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// STRUCTURAL EQUALITY
// ============================================================================

impl PartialEq<Vector> for Vector2d {
    fn eq(&self, other: &Vector) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialEq<[f64; 2]> for Vector2d {
    fn eq(&self, other: &[f64; 2]) -> bool {
        self.xy == *other
    }
}

impl PartialEq<[f64]> for Vector2d {
    fn eq(&self, other: &[f64]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<(f64, f64)> for Vector2d {
    fn eq(&self, other: &(f64, f64)) -> bool {
        self.x() == other.0 && self.y() == other.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn v(x: f64, y: f64) -> Vector2d {
        Vector2d::new(x, y).unwrap()
    }

    #[test]
    fn test_new_converts_integers() {
        let v1 = Vector2d::new(3, 4).unwrap();
        assert_eq!(v1.x(), 3.0);
        assert_eq!(v1.y(), 4.0);
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert_eq!(
            Vector2d::new(1.0, f64::INFINITY),
            Err(VectorError::InvalidComponent {
                index: 1,
                value: f64::INFINITY
            })
        );
    }

    #[test]
    fn test_iteration_is_restartable() {
        let v1 = v(3.0, 4.0);
        let first: Vec<f64> = v1.iter().collect();
        let second: Vec<f64> = v1.iter().collect();
        assert_eq!(first, vec![3.0, 4.0]);
        assert_eq!(first, second);

        let [x, y]: [f64; 2] = v1.into();
        assert_eq!((x, y), (3.0, 4.0));
    }

    #[test]
    fn test_repr_and_display() {
        let v1 = v(3.0, 4.0);
        assert_eq!(format!("{:?}", v1), "Vector2d(3.0, 4.0)");
        assert_eq!(v1.to_string(), "(3.0, 4.0)");
        assert_eq!(format!("{:.1}", v1), "(3.0, 4.0)");
        assert_eq!(format!("{:.3}", v(0.5, -1.0)), "(0.500, -1.000)");
    }

    #[test]
    fn test_repr_parses_back() {
        let v1 = v(3.0, 4.0);
        let clone: Vector2d = v1.repr().parse().unwrap();
        assert_eq!(clone, v1);

        let odd = v(-0.1, 1e-7);
        assert_eq!(format!("{:?}", odd), "Vector2d(-0.1, 1e-07)");
        assert_eq!(odd.repr().parse::<Vector2d>().unwrap(), odd);
    }

    #[test]
    fn test_parse_wrong_arity() {
        assert_eq!(
            "(1.0, 2.0, 3.0)".parse::<Vector2d>(),
            Err(VectorError::ArityMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_bytes() {
        let v1 = v(3.0, 4.0);
        let octets = v1.to_bytes();
        assert_eq!(
            octets,
            b"d\x00\x00\x00\x00\x00\x00\x08@\x00\x00\x00\x00\x00\x00\x10@".to_vec()
        );
        assert_eq!(Vector2d::from_bytes(&octets).unwrap(), v1);
    }

    #[test]
    fn test_from_bytes_wrong_arity() {
        let three = Vector::new([1, 2, 3]).unwrap().to_bytes();
        assert!(matches!(
            Vector2d::from_bytes(&three),
            Err(VectorError::MalformedBuffer { .. })
        ));
    }

    #[test]
    fn test_magnitude_and_truthiness() {
        assert_eq!(v(3.0, 4.0).magnitude(), 5.0);
        assert!(v(3.0, 4.0).is_truthy());
        assert_eq!(Vector2d::ZERO.magnitude(), 0.0);
        assert!(!Vector2d::ZERO.is_truthy());
        assert!(v(0.0, -1e-300).is_truthy());
    }

    #[test]
    fn test_magnitude_does_not_overflow() {
        let big = v(1e200, 1e200);
        assert!(big.magnitude().is_finite());
    }

    #[test]
    fn test_angle() {
        let epsilon = 1e-8;
        assert_eq!(v(0.0, 0.0).angle(), 0.0);
        assert_eq!(v(1.0, 0.0).angle(), 0.0);
        assert!((v(0.0, 1.0).angle() - FRAC_PI_2).abs() < epsilon);
        assert!((v(1.0, 1.0).angle() - FRAC_PI_4).abs() < epsilon);
        assert_eq!(v(-1.0, 0.0).angle(), std::f64::consts::PI);
    }

    #[test]
    fn test_cartesian_format() {
        let v1 = v(3.0, 4.0);
        assert_eq!(v1.format("").unwrap(), "(3.0, 4.0)");
        assert_eq!(v1.format(".2f").unwrap(), "(3.00, 4.00)");
        assert_eq!(v1.format(".3e").unwrap(), "(3.000e+00, 4.000e+00)");
    }

    #[test]
    fn test_polar_format() {
        let v1 = v(1.0, 1.0);
        assert_eq!(
            v1.format("p").unwrap(),
            "<1.4142135623730951, 0.7853981633974483>"
        );
        assert_eq!(v1.format(".3ep").unwrap(), "<1.414e+00, 7.854e-01>");
        assert_eq!(v1.format("0.5fp").unwrap(), "<1.41421, 0.78540>");
    }

    #[test]
    fn test_bad_format_spec() {
        assert!(matches!(
            v(1.0, 1.0).format(".qp"),
            Err(VectorError::InvalidFormatSpec { .. })
        ));
    }

    #[test]
    fn test_equality() {
        assert_eq!(v(3.0, 4.0), v(3.0, 4.0));
        assert_ne!(v(3.0, 4.0), v(4.0, 3.0));
        assert_eq!(v(3.0, 4.0), [3.0, 4.0]);
        assert_eq!(v(3.0, 4.0), (3.0, 4.0));
        assert_eq!(v(0.0, 0.0), v(-0.0, 0.0));
    }

    #[test]
    fn test_nan_is_not_reflexive() {
        let nan = Vector2d::raw(f64::NAN, 1.0);
        assert_ne!(nan, nan);
        assert!(!nan.eq_components(nan));
    }

    #[test]
    fn test_hash() {
        let v1 = v(3.0, 4.0);
        let v2 = v(3.1, 4.2);
        assert_eq!(v1.hash_value(), 7);
        assert_ne!(v1.hash_value(), v2.hash_value());

        let set: HashSet<Vector2d> = [v1, v2, v(3.0, 4.0)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_signed_zero_hashes_equal() {
        assert_eq!(v(0.0, 1.0).hash_value(), v(-0.0, 1.0).hash_value());
    }

    #[test]
    fn test_try_from_slice() {
        assert_eq!(Vector2d::try_from(&[1.0, 2.0][..]).unwrap(), v(1.0, 2.0));
        assert_eq!(
            Vector2d::try_from(vec![1.0]),
            Err(VectorError::ArityMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_serde_as_sequence() {
        let v1 = v(3.0, 4.0);
        let json = serde_json::to_string(&v1).unwrap();
        assert_eq!(json, "[3.0,4.0]");
        let back: Vector2d = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v1);
        assert!(serde_json::from_str::<Vector2d>("[1.0]").is_err());
    }
}
