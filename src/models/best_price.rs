/*
Best-Price Summary

Scans the week left to right for the highest known price. Comparisons
are strictly greater, so on a tied maximum the earliest slot is the one
reported.
*/

use crate::slots::WeekSlots;
use crate::types::BestPrice;

pub fn best_price(slots: &WeekSlots) -> Option<BestPrice> {
    let mut best: Option<BestPrice> = None;

    for (slot, &price) in slots.iter().enumerate() {
        if price == 0 {
            continue;
        }

        match best {
            Some(current) if price <= current.price => {}
            _ => best = Some(BestPrice { price, slot }),
        }
    }

    best
}

/// Profit against the buy price, defined only when both sides are known.
/// Signed, and negative when the week never beat the purchase price.
pub fn profit(best: Option<BestPrice>, buy_price: u32) -> Option<i64> {
    match best {
        Some(best) if buy_price > 0 => Some(i64::from(best.price) - i64::from(buy_price)),
        _ => None,
    }
}
