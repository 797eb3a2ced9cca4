pub const SLOTS_PER_WEEK: usize = 12;

/// One week of prices, Mon AM through Sat PM. 0 marks a slot with no
/// observation; zero is never a valid price in this domain.
pub type WeekSlots = [u32; SLOTS_PER_WEEK];

/// Coerces raw user-entered text into a price. Every non-digit character
/// is stripped and the remainder parsed base-10; empty, fully
/// non-numeric, or overflowing input reads as 0, the unset marker.
/// Never fails, whatever the input.
pub fn normalize_price(raw: &str) -> u32 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Normalizes raw slot values into a full week. Missing trailing values
/// read as unset; values beyond the twelfth are ignored.
pub fn normalize_week<S: AsRef<str>>(raw: &[S]) -> WeekSlots {
    let mut slots = [0u32; SLOTS_PER_WEEK];

    for (slot, value) in slots.iter_mut().zip(raw.iter()) {
        *slot = normalize_price(value.as_ref());
    }

    slots
}
