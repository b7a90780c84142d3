//! The static bank-name to logo mapping used by expanded deposit rows.

/// The banks whose requisites the payment bots hand out. Keys are the exact
/// Cyrillic strings the backend stores in `Deposit::bank`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIter)]
pub enum Bank {
    Sber,
    Tinkoff,
    Alfa,
    Otp,
    Rshb,
    Solidarnost,
}

impl Bank {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "СБЕР" => Some(Self::Sber),
            "ТИНЬКОФФ" => Some(Self::Tinkoff),
            "АЛЬФА" => Some(Self::Alfa),
            "ОТП" => Some(Self::Otp),
            "РСХБ" => Some(Self::Rshb),
            "СОЛИДАРНОСТЬ" => Some(Self::Solidarnost),
            _ => None,
        }
    }

    /// Path of the bundled logo image.
    pub fn logo(&self) -> &'static str {
        match self {
            Self::Sber => "/assets/banks/sber.png",
            Self::Tinkoff => "/assets/banks/tinkoff.png",
            Self::Alfa => "/assets/banks/alfabank.png",
            Self::Otp => "/assets/banks/OTPBank.png",
            Self::Rshb => "/assets/banks/rshb.png",
            Self::Solidarnost => "/assets/banks/solidarnost.png",
        }
    }
}

/// Resolves a bank name to its logo path. Unrecognized names resolve to the
/// empty sentinel and render no logo; absence is data, not an error.
pub fn bank_logo(name: &str) -> &'static str {
    Bank::from_name(name).map(|bank| bank.logo()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn known_banks_resolve_to_their_assets() {
        assert_eq!(bank_logo("СБЕР"), "/assets/banks/sber.png");
        assert_eq!(bank_logo("ТИНЬКОФФ"), "/assets/banks/tinkoff.png");
    }

    #[test]
    fn unknown_bank_resolves_to_the_empty_sentinel() {
        assert_eq!(bank_logo("UNKNOWN"), "");
        assert_eq!(bank_logo(""), "");
        // Lookup is exact, not case-folded.
        assert_eq!(bank_logo("сбер"), "");
    }

    #[test]
    fn every_bank_has_a_distinct_logo() {
        let logos: Vec<&str> = Bank::iter().map(|b| b.logo()).collect();
        let mut deduped = logos.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(logos.len(), deduped.len());
    }
}
