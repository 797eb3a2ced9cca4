use crate::slots::{normalize_price, normalize_week, WeekSlots};
use crate::types::{slot_label, PredictionReport};

mod best_price;
mod peak;
mod trend;

pub use best_price::{best_price, profit};
pub use peak::forecast_peak;
pub use trend::{classify_trend, INSUFFICIENT_DATA_NOTE};

/// Runs the full prediction over raw user-entered slot values.
/// Raw text never fails; anything unparseable reads as an unset slot.
pub fn predict<S: AsRef<str>>(raw_slots: &[S], raw_buy: &str) -> PredictionReport {
    let slots = normalize_week(raw_slots);
    let buy_price = normalize_price(raw_buy);

    predict_week(&slots, buy_price)
}

/// Prediction over an already-normalized week, as stored in records.
/// Pure and stateless, so repeated calls with the same week always
/// return the same report.
pub fn predict_week(slots: &WeekSlots, buy_price: u32) -> PredictionReport {
    let pattern = classify_trend(slots);
    let forecast = forecast_peak(pattern.name);
    let best = best_price(slots);

    PredictionReport {
        best_price: best.map(|b| b.price),
        best_slot_label: best.map(|b| slot_label(b.slot)),
        profit: profit(best, buy_price),
        pattern,
        forecast,
    }
}
