use serde::{Deserialize, Serialize};

/// One of the three inputs on the tip form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    BillAmount,
    PartySize,
    TipPercent,
}

impl FormField {
    pub const ALL: [FormField; 3] = [Self::BillAmount, Self::PartySize, Self::TipPercent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BillAmount => "bill",
            Self::PartySize => "people",
            Self::TipPercent => "tip",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BillAmount => "Bill amount",
            Self::PartySize => "Party size",
            Self::TipPercent => "Tip percentage",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bill" => Some(Self::BillAmount),
            "people" | "party" => Some(Self::PartySize),
            "tip" | "percent" => Some(Self::TipPercent),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(FormField::parse("party"), Some(FormField::PartySize));
        assert_eq!(FormField::parse("Percent"), Some(FormField::TipPercent));
        assert_eq!(FormField::parse(" bill "), Some(FormField::BillAmount));
    }

    #[test]
    fn parse_round_trips_canonical_names() {
        for field in FormField::ALL {
            assert_eq!(FormField::parse(field.as_str()), Some(field));
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(FormField::parse("total"), None);
        assert_eq!(FormField::parse(""), None);
    }
}
