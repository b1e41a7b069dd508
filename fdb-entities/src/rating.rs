use std::fmt;

use thiserror::Error;

/// Star rating of a single feedback, from 1 (worst) to 5 (best).
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(u8);

#[derive(Debug, Error)]
#[error("Rating value {0} is out of range")]
pub struct RatingValueOutOfRange(pub i64);

impl RatingValue {
    pub fn new<I: Into<u8>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl TryFrom<i64> for RatingValue {
    type Error = RatingValueOutOfRange;
    fn try_from(from: i64) -> Result<Self, Self::Error> {
        u8::try_from(from)
            .ok()
            .map(Self)
            .filter(|v| v.is_valid())
            .ok_or(RatingValueOutOfRange(from))
    }
}

impl From<RatingValue> for u8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRatingValue(f64);

impl AvgRatingValue {
    pub fn clamp(self) -> Self {
        Self(
            self.0
                .max(f64::from(RatingValue::min()))
                .min(f64::from(RatingValue::max())),
        )
    }
}

impl From<f64> for AvgRatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRatingValue> for f64 {
    fn from(from: AvgRatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for AvgRatingValue {
    fn from(from: RatingValue) -> Self {
        f64::from(from).into()
    }
}

#[derive(Debug, Default, Clone)]
pub struct AvgRatingValueBuilder {
    acc: u64,
    cnt: usize,
}

impl AvgRatingValueBuilder {
    pub fn add(&mut self, val: RatingValue) {
        debug_assert!(val.is_valid());
        self.acc += u64::from(val.0);
        self.cnt += 1;
    }

    /// The arithmetic mean of all added values or 0 if nothing has been added.
    pub fn build(self) -> AvgRatingValue {
        if self.cnt > 0 {
            AvgRatingValue::from(self.acc as f64 / self.cnt as f64).clamp()
        } else {
            Default::default()
        }
    }
}

impl std::ops::AddAssign<RatingValue> for AvgRatingValueBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}
