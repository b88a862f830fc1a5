//! Gender of the chart subject, used for luck-cycle direction.

use std::str::FromStr;

use serde::Serialize;

use crate::error::GanzhiError;

/// Gender of the chart subject (乾造 / 坤造).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Chinese symbol (男/女).
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

impl FromStr for Gender {
    type Err = GanzhiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "男" | "乾" => Ok(Self::Male),
            "female" | "f" | "女" | "坤" => Ok(Self::Female),
            _ => Err(GanzhiError::InvalidGender(s.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => f.write_str("Male"),
            Self::Female => f.write_str("Female"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tokens() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" F ".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("女".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("乾".parse::<Gender>().unwrap(), Gender::Male);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "other".parse::<Gender>(),
            Err(GanzhiError::InvalidGender("other".into()))
        );
    }
}
