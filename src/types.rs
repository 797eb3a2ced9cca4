use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::Display;

use crate::slots::WeekSlots;
use crate::utils::format_signed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Deserialize, Serialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Day {
    pub fn of_slot(slot: usize) -> Self {
        match slot / 2 {
            0 => Day::Mon,
            1 => Day::Tue,
            2 => Day::Wed,
            3 => Day::Thu,
            4 => Day::Fri,
            _ => Day::Sat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Deserialize, Serialize)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Half {
    Am,
    Pm,
}

impl Half {
    pub fn of_slot(slot: usize) -> Self {
        if slot % 2 == 0 {
            Half::Am
        } else {
            Half::Pm
        }
    }
}

/// Label for a slot index, "Mon AM" through "Sat PM".
/// Day is `slot / 2`, AM on even slots, the same layout the week
/// sequence itself uses.
pub fn slot_label(slot: usize) -> String {
    format!("{} {}", Day::of_slot(slot), Half::of_slot(slot))
}

/// Trend category for a week of prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Deserialize, Serialize)]
pub enum TrendPattern {
    Increasing,
    Decreasing,
    Mixed,
}

impl TrendPattern {
    /// Fixed advisory note carried by the category.
    pub fn note(&self) -> &'static str {
        match self {
            TrendPattern::Increasing => {
                "Prices are trending up. Holding until late week may pay off."
            }
            TrendPattern::Decreasing => {
                "Prices are trending down. Sell once you clear your buy price."
            }
            TrendPattern::Mixed => "No clear trend. Prices are moving both ways.",
        }
    }
}

/// A classified week: the category plus the note to show with it.
/// The note is usually the category's own, except when too few prices
/// are logged to scan for a trend at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub name: TrendPattern,
    pub note: &'static str,
}

/// Peak window forecast derived from the trend category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Forecast {
    pub window: &'static str,
    pub confidence: &'static str,
    pub advisory: &'static str,
}

/// Highest known price of the week and the slot it was seen in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BestPrice {
    pub price: u32,
    pub slot: usize,
}

/// Full prediction over one week, as returned to the caller.
/// `None` fields mean "unknown": no slot was known, or no buy price was
/// entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionReport {
    pub best_price: Option<u32>,
    pub best_slot_label: Option<String>,
    pub profit: Option<i64>,
    pub pattern: Classification,
    pub forecast: Forecast,
}

impl PredictionReport {
    /// Profit with an explicit sign, "+0" rather than "0". "unknown"
    /// when the buy price or every slot is missing.
    pub fn profit_display(&self) -> String {
        match self.profit {
            Some(profit) => format_signed(profit),
            None => "unknown".to_string(),
        }
    }
}

impl fmt::Display for PredictionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let best = match (self.best_price, &self.best_slot_label) {
            (Some(price), Some(label)) => format!("{} ({})", price, label),
            _ => "unknown".to_string(),
        };

        writeln!(f, "Best price: {}", best)?;
        writeln!(f, "Profit:     {}", self.profit_display())?;
        writeln!(f, "Pattern:    {}. {}", self.pattern.name, self.pattern.note)?;
        write!(
            f,
            "Forecast:   {} ({} confidence). {}",
            self.forecast.window, self.forecast.confidence, self.forecast.advisory
        )
    }
}

/// One stored week of prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRecord {
    pub id: String,
    /// When the record was saved, UTC.
    pub saved_at: DateTime<Utc>,
    /// Purchase price for the week, 0 when not entered.
    pub buy_price: u32,
    /// Mon AM through Sat PM, 0 marks a slot with no observation.
    pub slots: WeekSlots,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_labels_follow_week_layout() {
        assert_eq!(slot_label(0), "Mon AM");
        assert_eq!(slot_label(1), "Mon PM");
        assert_eq!(slot_label(2), "Tue AM");
        assert_eq!(slot_label(5), "Wed PM");
        assert_eq!(slot_label(10), "Sat AM");
        assert_eq!(slot_label(11), "Sat PM");
    }

    #[test]
    fn test_pattern_names_render_as_variant_names() {
        assert_eq!(TrendPattern::Increasing.to_string(), "Increasing");
        assert_eq!(TrendPattern::Decreasing.to_string(), "Decreasing");
        assert_eq!(TrendPattern::Mixed.to_string(), "Mixed");
    }

    #[test]
    fn test_week_record_json_round_trip() {
        let json = r#"{
            "id": "a1b2c3d4e5f60708",
            "saved_at": "2026-08-02T09:00:00Z",
            "buy_price": 95,
            "slots": [90, 0, 110, 0, 0, 0, 0, 0, 0, 0, 0, 0]
        }"#;

        let record: WeekRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.buy_price, 95);
        assert_eq!(record.slots[2], 110);

        let encoded = serde_json::to_string(&record).unwrap();
        let decoded: WeekRecord = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_week_record_rejects_wrong_slot_count() {
        let json = r#"{
            "id": "a1b2c3d4e5f60708",
            "saved_at": "2026-08-02T09:00:00Z",
            "buy_price": 95,
            "slots": [90, 0, 110]
        }"#;

        assert!(serde_json::from_str::<WeekRecord>(json).is_err());
    }
}
