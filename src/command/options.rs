use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Invalid visibility: {0}")]
    InvalidVisibility(String),
    #[error("Invalid expire: {0}")]
    InvalidExpire(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Unlisted,
    Private,
}

pub static VISIBILITY_LABELS: [(&str, Visibility); 3] = [
    ("public", Visibility::Public),
    ("unlisted", Visibility::Unlisted),
    ("private", Visibility::Private),
];

impl Visibility {
    pub fn label(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Unlisted => "unlisted",
            Visibility::Private => "private",
        }
    }

    /// Value of `api_paste_private` for this visibility.
    pub fn code(&self) -> u8 {
        match self {
            Visibility::Public => 0,
            Visibility::Unlisted => 1,
            Visibility::Private => 2,
        }
    }
}

impl FromStr for Visibility {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VISIBILITY_LABELS.iter()
            .find(|(label, _)| *label == s)
            .map(|(_, visibility)| *visibility)
            .ok_or_else(|| CommandError::InvalidVisibility(s.to_string()))
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpireTime {
    Never,
    TenMinutes,
    OneHour,
    OneDay,
    OneWeek,
    TwoWeeks,
    OneMonth,
    SixMonths,
    OneYear,
}

pub static EXPIRE_TIMES: [(&str, ExpireTime); 9] = [
    ("N", ExpireTime::Never),
    ("10M", ExpireTime::TenMinutes),
    ("1H", ExpireTime::OneHour),
    ("1D", ExpireTime::OneDay),
    ("1W", ExpireTime::OneWeek),
    ("2W", ExpireTime::TwoWeeks),
    ("1M", ExpireTime::OneMonth),
    ("6M", ExpireTime::SixMonths),
    ("1Y", ExpireTime::OneYear),
];

impl ExpireTime {
    pub fn code(&self) -> &'static str {
        match self {
            ExpireTime::Never => "N",
            ExpireTime::TenMinutes => "10M",
            ExpireTime::OneHour => "1H",
            ExpireTime::OneDay => "1D",
            ExpireTime::OneWeek => "1W",
            ExpireTime::TwoWeeks => "2W",
            ExpireTime::OneMonth => "1M",
            ExpireTime::SixMonths => "6M",
            ExpireTime::OneYear => "1Y",
        }
    }

    pub fn codes() -> impl Iterator<Item = &'static str> {
        EXPIRE_TIMES.iter().map(|(code, _)| *code)
    }
}

impl FromStr for ExpireTime {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EXPIRE_TIMES.iter()
            .find(|(code, _)| *code == s)
            .map(|(_, expire)| *expire)
            .ok_or_else(|| CommandError::InvalidExpire(s.to_string()))
    }
}

impl fmt::Display for ExpireTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_codes() {
        assert_eq!("public".parse::<Visibility>().unwrap().code(), 0);
        assert_eq!("unlisted".parse::<Visibility>().unwrap().code(), 1);
        assert_eq!("private".parse::<Visibility>().unwrap().code(), 2);
    }

    #[test]
    fn test_visibility_is_case_sensitive() {
        assert_eq!(
            "Public".parse::<Visibility>(),
            Err(CommandError::InvalidVisibility("Public".to_string()))
        );
    }

    #[test]
    fn test_every_expire_code_round_trips() {
        for code in ExpireTime::codes() {
            assert_eq!(code.parse::<ExpireTime>().unwrap().code(), code);
        }
        assert_eq!(ExpireTime::codes().count(), 9);
    }

    #[test]
    fn test_invalid_expire_names_value() {
        let err = "3X".parse::<ExpireTime>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid expire: 3X");
    }
}
