//! Discriminated result for statistics that may be undefined.

use std::fmt;

/// A test statistic that is either a finite-or-not number, or undefined.
///
/// `Undefined` replaces the NaN sentinel. [`Statistic::as_f64`] still yields
/// NaN for callers that need the bit-compatible value, but threshold checks
/// should go through [`Statistic::satisfies`], which fails closed.
///
/// # Examples
///
/// ```rust
/// use prng_stats::Statistic;
///
/// let z = Statistic::Defined(-0.41);
/// assert!(z.satisfies(|v| v.abs() <= 1.96));
///
/// let undefined = Statistic::Undefined;
/// assert!(!undefined.satisfies(|v| v.abs() <= 1.96));
/// assert!(undefined.as_f64().is_nan());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Statistic {
    /// The statistic has a value.
    Defined(f64),
    /// The input was degenerate for this statistic.
    Undefined,
}

impl Statistic {
    /// Wraps `value`, mapping NaN to `Undefined`.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            Statistic::Undefined
        } else {
            Statistic::Defined(value)
        }
    }

    /// Returns the value, if defined.
    #[inline]
    pub fn value(&self) -> Option<f64> {
        match self {
            Statistic::Defined(v) => Some(*v),
            Statistic::Undefined => None,
        }
    }

    /// Returns the value, or NaN when undefined.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.value().unwrap_or(f64::NAN)
    }

    /// Returns `true` when the statistic has a value.
    #[inline]
    pub fn is_defined(&self) -> bool {
        matches!(self, Statistic::Defined(_))
    }

    /// Applies `f` to a defined value.
    #[inline]
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Statistic {
        match self {
            Statistic::Defined(v) => Statistic::from_f64(f(v)),
            Statistic::Undefined => Statistic::Undefined,
        }
    }

    /// Evaluates `pred` on a defined value; `Undefined` never satisfies.
    #[inline]
    pub fn satisfies(&self, pred: impl FnOnce(f64) -> bool) -> bool {
        self.value().is_some_and(pred)
    }
}

impl From<Option<f64>> for Statistic {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Statistic::Undefined, Statistic::from_f64)
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statistic::Defined(v) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, v),
                None => write!(f, "{}", v),
            },
            Statistic::Undefined => f.pad("undefined"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Statistic {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // JSON has no NaN; undefined serialises as null.
        self.value().serialize(serializer)
    }
}
