//! The deposit record as served by the payment backend.

use chrono::DateTime;
use chrono::Local;
use chrono::NaiveDateTime;
use chrono::TimeZone;
use chrono::Utc;
use serde::de;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// A completed incoming funds record shown to the account holder.
///
/// Field names follow the backend's wire format, hence the renames.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    #[serde(rename = "_id")]
    pub id: String,
    pub amount: f64,
    pub timestamp: DepositTimestamp,
    pub bank: String,
    #[serde(rename = "botRequisites")]
    pub bot_requisites: String,
    pub status: String,
}

impl Deposit {
    /// Signed ruble amount for the history row: always two decimals,
    /// always a leading `+` (these are incoming funds only).
    pub fn amount_label(&self) -> String {
        format!("+{:.2}₽", self.amount)
    }
}

/// The instant a deposit completed.
///
/// The backend is not consistent about the encoding: some records carry an
/// RFC-3339 string, older ones an epoch-milliseconds number. Both decode
/// into UTC here; display formatting converts to the platform-local zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DepositTimestamp(DateTime<Utc>);

#[derive(Debug, thiserror::Error)]
#[error("unparseable deposit timestamp: {0}")]
pub struct ParseTimestampError(String);

impl DepositTimestamp {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    pub fn from_epoch_millis(millis: i64) -> Result<Self, ParseTimestampError> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(Self)
            .ok_or_else(|| ParseTimestampError(millis.to_string()))
    }

    pub fn parse(text: &str) -> Result<Self, ParseTimestampError> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        // Zone-less timestamps are taken as UTC, same as the backend's DB.
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Self(Utc.from_utc_datetime(&naive)));
        }
        Err(ParseTimestampError(text.to_string()))
    }

    /// `DD.MM.YY` in local time, the cabinet's date style.
    pub fn date_label(&self) -> String {
        format_date(&self.0.with_timezone(&Local))
    }

    /// `HH:MM` in local time.
    pub fn time_label(&self) -> String {
        format_time(&self.0.with_timezone(&Local))
    }
}

fn format_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.format("%d.%m.%y").to_string()
}

fn format_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.format("%H:%M").to_string()
}

impl Serialize for DepositTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for DepositTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Millis(i64),
            MillisFloat(f64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self::parse(&text).map_err(de::Error::custom),
            Raw::Millis(ms) => Self::from_epoch_millis(ms).map_err(de::Error::custom),
            Raw::MillisFloat(ms) => {
                Self::from_epoch_millis(ms as i64).map_err(de::Error::custom)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deposit(amount: f64) -> Deposit {
        Deposit {
            id: "a".into(),
            amount,
            timestamp: DepositTimestamp::parse("2024-03-05T17:45:00Z").unwrap(),
            bank: "ТИНЬКОФФ".into(),
            bot_requisites: "1234".into(),
            status: "done".into(),
        }
    }

    #[test]
    fn amount_label_always_two_decimals() {
        assert_eq!(deposit(100.5).amount_label(), "+100.50₽");
        assert_eq!(deposit(7.0).amount_label(), "+7.00₽");
        assert_eq!(deposit(0.999).amount_label(), "+1.00₽");
    }

    #[test]
    fn parses_rfc3339_and_epoch_millis_to_the_same_instant() {
        let from_text = DepositTimestamp::parse("2024-03-05T17:45:00+00:00").unwrap();
        let from_millis = DepositTimestamp::from_epoch_millis(1_709_660_700_000).unwrap();
        assert_eq!(from_text, from_millis);
    }

    #[test]
    fn parses_zoneless_timestamp_as_utc() {
        let zoneless = DepositTimestamp::parse("2024-03-05T17:45:00.000").unwrap();
        let explicit = DepositTimestamp::parse("2024-03-05T17:45:00Z").unwrap();
        assert_eq!(zoneless, explicit);
    }

    #[test]
    fn rejects_garbage_timestamp() {
        assert!(DepositTimestamp::parse("yesterday").is_err());
    }

    #[test]
    fn date_and_time_formats() {
        let instant = DateTime::parse_from_rfc3339("2024-03-05T17:45:00Z").unwrap();
        assert_eq!(format_date(&instant), "05.03.24");
        assert_eq!(format_time(&instant), "17:45");
    }

    #[test]
    fn decodes_wire_record() {
        let json = r#"{
            "_id": "65e8",
            "amount": 100.5,
            "timestamp": 1709660700000,
            "bank": "СБЕР",
            "botRequisites": "2202 **** 1234",
            "status": "done"
        }"#;
        let d: Deposit = serde_json::from_str(json).unwrap();
        assert_eq!(d.id, "65e8");
        assert_eq!(d.bank, "СБЕР");
        assert_eq!(d.bot_requisites, "2202 **** 1234");
        assert_eq!(
            d.timestamp,
            DepositTimestamp::parse("2024-03-05T17:45:00Z").unwrap()
        );
    }
}
