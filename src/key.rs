//! Floating point keys.
//!
//! `f64` is not [`Ord`] because of `NaN`, so it can't be stored in a [`Tree`][crate::Tree]
//! directly. [`Number`] wraps an `f64` that is known to be finite, which makes a total order
//! possible.
//!
//! # Examples
//!
//! ```
//! use plain_bst::{KeyError, Number, Tree};
//!
//! let mut tree = Tree::new();
//! tree.insert(Number::new(1.5)?);
//! tree.insert(Number::from(-3));
//!
//! assert!(tree.contains(&Number::new(1.5)?));
//! assert!(matches!(Number::new(f64::NAN), Err(KeyError::NotFinite(_))));
//! # Ok::<(), KeyError>(())
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

/// Errors building a [`Number`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum KeyError {
    /// `NaN` and the infinities can't be ordered against other keys.
    #[error("key must be a finite number, got {0}")]
    NotFinite(f64),
}

/// A finite `f64` usable as a tree key.
#[derive(Clone, Copy)]
pub struct Number(f64);

impl Number {
    /// Wraps `value` if it is finite. `-0.0` is stored as `0.0` so the two compare equal under
    /// both `==` and [`Ord`].
    pub fn new(value: f64) -> Result<Self, KeyError> {
        if !value.is_finite() {
            return Err(KeyError::NotFinite(value));
        }
        // `-0.0 == 0.0` so this also catches negative zero.
        if value == 0.0 {
            return Ok(Self(0.0));
        }
        Ok(Self(value))
    }

    /// The wrapped value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<f64> for Number {
    type Error = KeyError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<f32> for Number {
    type Error = KeyError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(f64::from(value))
    }
}

impl From<Number> for f64 {
    fn from(number: Number) -> Self {
        number.0
    }
}

/// Integers up to 32 bits always fit in an `f64` exactly.
macro_rules! impl_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Number {
                fn from(value: $int) -> Self {
                    Self(f64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, u8, i16, u16, i32, u32);
