/*
Peak Window Forecast

Maps the week's trend category to a fixed peak window, confidence label,
and advisory. There is no computation here; the windows are the observed
behavior of each category across past weeks.
*/

use crate::types::{Forecast, TrendPattern};

pub fn forecast_peak(pattern: TrendPattern) -> Forecast {
    match pattern {
        TrendPattern::Increasing => Forecast {
            window: "Wed PM to Sat PM",
            confidence: "70%",
            advisory: "Watch the late-week slots.",
        },
        TrendPattern::Decreasing => Forecast {
            window: "Mon AM to Tue PM",
            confidence: "65%",
            advisory: "Sell on the first profitable slot if prices are still dropping.",
        },
        TrendPattern::Mixed => Forecast {
            window: "Tue PM to Fri PM",
            confidence: "55%",
            advisory: "Watch for a random spike, and log more slots.",
        },
    }
}
