use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// The service or product a feedback is about.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCount, EnumString, Display, AsRefStr)]
#[strum(ascii_case_insensitive)]
pub enum Subject {
    Swiggy,
    Zomato,
    #[strum(serialize = "SBI")]
    Sbi,
    #[strum(serialize = "ICICI")]
    Icici,
    #[strum(serialize = "HDFC Bank")]
    HdfcBank,
    Amazon,
    Flipkart,
    Netflix,
    Spotify,
    Uber,
    Ola,
}
