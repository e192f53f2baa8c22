use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quick-pick tip levels keyed by how the service went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceRating {
    Outstanding,
    Good,
    Ok,
    Bad,
    Terrible,
}

impl ServiceRating {
    /// All ratings, most generous first.
    pub const ALL: [ServiceRating; 5] = [
        Self::Outstanding,
        Self::Good,
        Self::Ok,
        Self::Bad,
        Self::Terrible,
    ];

    /// Tip percentage for this rating, e.g. `20` for [`ServiceRating::Good`].
    pub fn percent(&self) -> Decimal {
        let whole: u32 = match self {
            Self::Outstanding => 30,
            Self::Good => 20,
            Self::Ok => 15,
            Self::Bad => 10,
            Self::Terrible => 5,
        };
        Decimal::from(whole)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Outstanding => "outstanding",
            Self::Good => "good",
            Self::Ok => "ok",
            Self::Bad => "bad",
            Self::Terrible => "terrible",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Outstanding => "Outstanding",
            Self::Good => "Good",
            Self::Ok => "It was OK",
            Self::Bad => "Bad",
            Self::Terrible => "Terrible",
        }
    }

    /// Looks a rating up by name (case-insensitive) or by its percentage.
    ///
    /// ```
    /// use tip_core::ServiceRating;
    ///
    /// assert_eq!(ServiceRating::parse("Good"), Some(ServiceRating::Good));
    /// assert_eq!(ServiceRating::parse("15"), Some(ServiceRating::Ok));
    /// assert_eq!(ServiceRating::parse("12"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(percent) = s.trim_end_matches('%').parse::<Decimal>() {
            return Self::ALL.into_iter().find(|r| r.percent() == percent);
        }
        match s.to_ascii_lowercase().as_str() {
            "outstanding" => Some(Self::Outstanding),
            "good" => Some(Self::Good),
            "ok" => Some(Self::Ok),
            "bad" => Some(Self::Bad),
            "terrible" => Some(Self::Terrible),
            _ => None,
        }
    }
}
