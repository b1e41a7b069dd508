use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// Coarse three-way polarity of a comment.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCount, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}
