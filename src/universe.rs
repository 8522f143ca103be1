//! Candidate universe generation
//!
//! The universe for length L is every digit sequence of that length, in
//! ordinary lexicographic order. It is generated arithmetically on demand
//! rather than stored, so it is lazy and freely restartable.

use crate::core::Pin;

/// Number of pins of the given length (10^length)
///
/// # Panics
/// Panics in debug mode if `length` exceeds [`crate::core::MAX_LENGTH`].
#[must_use]
pub fn size(length: usize) -> usize {
    debug_assert!(length <= crate::core::MAX_LENGTH);
    10usize.pow(length as u32)
}

/// Lazy iterator over every pin of the given length, lexicographically
///
/// Grows as 10^length; callers bound `length` (the session rejects lengths
/// above [`crate::core::MAX_LENGTH`]).
///
/// # Examples
/// ```
/// use pin_cracker::universe;
///
/// let mut pins = universe::all_pins(2);
/// assert_eq!(pins.next().unwrap().to_string(), "00");
/// assert_eq!(pins.next().unwrap().to_string(), "01");
/// assert_eq!(universe::all_pins(2).count(), 100);
/// ```
pub fn all_pins(length: usize) -> impl Iterator<Item = Pin> + Clone {
    (0..size(length)).map(move |index| Pin::from_index(index, length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_power_of_ten() {
        assert_eq!(size(1), 10);
        assert_eq!(size(2), 100);
        assert_eq!(size(4), 10_000);
        assert_eq!(size(6), 1_000_000);
    }

    #[test]
    fn universe_has_expected_count() {
        assert_eq!(all_pins(1).count(), 10);
        assert_eq!(all_pins(3).count(), 1000);
    }

    #[test]
    fn universe_is_lexicographically_ordered() {
        let pins: Vec<Pin> = all_pins(2).collect();
        assert!(pins.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn universe_endpoints() {
        let pins: Vec<Pin> = all_pins(3).collect();
        assert_eq!(pins.first().unwrap().to_string(), "000");
        assert_eq!(pins.last().unwrap().to_string(), "999");
    }

    #[test]
    fn universe_pins_are_distinct() {
        let pins: Vec<Pin> = all_pins(2).collect();
        let mut deduped = pins.clone();
        deduped.dedup();
        assert_eq!(pins.len(), deduped.len());
    }

    #[test]
    fn universe_is_restartable() {
        let first: Vec<Pin> = all_pins(2).collect();
        let second: Vec<Pin> = all_pins(2).collect();
        assert_eq!(first, second);

        let iter = all_pins(2);
        let cloned = iter.clone();
        assert_eq!(iter.count(), cloned.count());
    }

    #[test]
    fn universe_contains_specific_pin() {
        assert!(all_pins(4).any(|p| p == Pin::new("1234").unwrap()));
    }
}
