//! # Vector
//!
//! A vector of any length, fixed when it is built. Same protocol as
//! [`Vector2d`], minus everything that needs an angle.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::codec;
use super::config::CodecConfig;
use super::error::{VectorError, VectorResult};
use super::format::tuple_text;
use super::protocol::{parse_components, Components, Iter};
use super::scalar::{checked_all, Scalar};
use super::vector2d::Vector2d;

/// An N-dimensional vector of finite doubles
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<f64>", try_from = "Vec<f64>")]
pub struct Vector {
    components: Box<[f64]>,
}

impl Vector {
    /// Create a vector from any sequence of numbers
    ///
    /// # Example
    /// ```
    /// use vectorkit::{Components, Vector};
    /// let v = Vector::new([3, 4, 5]).unwrap();
    /// assert_eq!(v.len(), 3);
    /// assert_eq!(format!("{:?}", v), "Vector(3.0, 4.0, 5.0)");
    /// ```
    pub fn new<I>(components: I) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: Scalar,
    {
        Ok(Self::raw(checked_all(components)?))
    }

    /// Create a vector without validating the components
    pub fn raw(components: Vec<f64>) -> Self {
        Self {
            components: components.into_boxed_slice(),
        }
    }

    /// All-zero vector of the given length
    pub fn zeros(len: usize) -> Self {
        Self::raw(vec![0.0; len])
    }

    /// Component at `index`, if there is one
    pub fn get(&self, index: usize) -> Option<f64> {
        self.components.get(index).copied()
    }

    /// Decode from the default (double) encoding
    ///
    /// # Example
    /// ```
    /// use vectorkit::{Components, Vector};
    /// let v = Vector::new([1.5, -2.0, 0.25]).unwrap();
    /// assert_eq!(Vector::from_bytes(&v.to_bytes()).unwrap(), v);
    /// ```
    pub fn from_bytes(buffer: &[u8]) -> VectorResult<Self> {
        Self::from_bytes_with(buffer, &CodecConfig::default())
    }

    /// Decode with an explicit codec configuration
    pub fn from_bytes_with(buffer: &[u8], config: &CodecConfig) -> VectorResult<Self> {
        Self::new(codec::decode(buffer, config)?)
    }
}

impl Components for Vector {
    const TYPE_NAME: &'static str = "Vector";

    fn as_slice(&self) -> &[f64] {
        &self.components
    }
}

/// Reflexive for every vector that passed validation; see [`Vector2d`].
impl Eq for Vector {}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.hash_value());
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.components[index]
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&tuple_text(self.iter(), f.precision()))
    }
}

impl FromStr for Vector {
    type Err = VectorError;

    fn from_str(s: &str) -> VectorResult<Self> {
        Self::new(parse_components(s, Self::TYPE_NAME)?)
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(components: Vec<f64>) -> VectorResult<Self> {
        Self::new(components)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self {
        v.components.into_vec()
    }
}

impl From<Vector2d> for Vector {
    fn from(v: Vector2d) -> Self {
        Self::raw(v.as_slice().to_vec())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = f64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq<Vector2d> for Vector {
    fn eq(&self, other: &Vector2d) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialEq<[f64]> for Vector {
    fn eq(&self, other: &[f64]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<Vec<f64>> for Vector {
    fn eq(&self, other: &Vec<f64>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> PartialEq<[f64; N]> for Vector {
    fn eq(&self, other: &[f64; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}
