/*
Majority-Margin Trend Classifier

Compares each adjacent pair of known prices in the week and counts rises
and drops. A direction is only assigned when it leads the other by at
least two pairs; anything tighter stays Mixed.

How it works: the classifier walks the twelve slots in order and looks at
every adjacent pair. A pair counts as a drop when both prices are known
and the later one is strictly lower, as a rise in the symmetric case, and
as nothing when either side is unknown. With fewer than three known
prices no pairs are scanned at all, since a single comparison is not a
trend.
*/

use crate::slots::WeekSlots;
use crate::types::{Classification, TrendPattern};

/// Lead one direction needs over the other before the week leaves the
/// Mixed bucket.
const TREND_MARGIN: usize = 2;

/// Known prices required before any pair comparison is attempted.
const MIN_KNOWN_SLOTS: usize = 3;

pub const INSUFFICIENT_DATA_NOTE: &str =
    "Not enough prices logged to read a trend. Log at least three slots.";

pub fn classify_trend(slots: &WeekSlots) -> Classification {
    let known = slots.iter().filter(|&&price| price > 0).count();

    if known < MIN_KNOWN_SLOTS {
        return Classification {
            name: TrendPattern::Mixed,
            note: INSUFFICIENT_DATA_NOTE,
        };
    }

    let mut rises = 0usize;
    let mut drops = 0usize;

    for pair in slots.windows(2) {
        let (earlier, later) = (pair[0], pair[1]);

        if earlier == 0 || later == 0 {
            continue;
        }

        if later < earlier {
            drops += 1;
        } else if later > earlier {
            rises += 1;
        }
    }

    let name = if drops >= rises + TREND_MARGIN {
        TrendPattern::Decreasing
    } else if rises >= drops + TREND_MARGIN {
        TrendPattern::Increasing
    } else {
        TrendPattern::Mixed
    };

    Classification {
        name,
        note: name.note(),
    }
}
