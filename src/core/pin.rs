//! PIN representation
//!
//! A Pin stores a fixed-length digit sequence inline on the stack, so pins
//! are `Copy` and the quadratic guess-selection loop never heap-allocates.

use std::cmp::Ordering;
use std::fmt;

/// Maximum supported PIN length.
///
/// The candidate universe for length L has 10^L members and guess selection
/// is quadratic in it, so longer pins are rejected as intractable.
pub const MAX_LENGTH: usize = 6;

/// A fixed-length sequence of decimal digits
///
/// Digits are stored as values 0-9 in the first `len` slots; unused slots
/// stay zeroed so derived equality and hashing remain consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pin {
    digits: [u8; MAX_LENGTH],
    len: u8,
}

/// Error type for invalid pins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinError {
    /// Zero-length pin
    Empty,
    /// Length exceeds [`MAX_LENGTH`], making the search space too large
    TooLong(usize),
    /// A character that is not an ASCII digit
    InvalidDigit(char),
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Pin must have at least one digit"),
            Self::TooLong(len) => write!(
                f,
                "Pin length {len} exceeds {MAX_LENGTH}: search space too large"
            ),
            Self::InvalidDigit(c) => write!(f, "Pin may only contain digits 0-9, got '{c}'"),
        }
    }
}

impl std::error::Error for PinError {}

impl Pin {
    /// Create a new Pin from a string of decimal digits
    ///
    /// # Errors
    /// Returns `PinError` if the text is empty, longer than [`MAX_LENGTH`],
    /// or contains anything but ASCII digits.
    ///
    /// # Examples
    /// ```
    /// use pin_cracker::core::Pin;
    ///
    /// let pin = Pin::new("0194").unwrap();
    /// assert_eq!(pin.to_string(), "0194");
    /// assert_eq!(pin.len(), 4);
    ///
    /// assert!(Pin::new("12a4").is_err());
    /// assert!(Pin::new("1234567").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, PinError> {
        if text.is_empty() {
            return Err(PinError::Empty);
        }
        if text.len() > MAX_LENGTH {
            return Err(PinError::TooLong(text.len()));
        }

        let mut digits = [0u8; MAX_LENGTH];
        let mut len = 0u8;
        for c in text.chars() {
            let digit = c.to_digit(10).ok_or(PinError::InvalidDigit(c))?;
            digits[len as usize] = digit as u8;
            len += 1;
        }

        Ok(Self { digits, len })
    }

    /// Build the pin at `index` within the lexicographic universe of the
    /// given length, i.e. `index` written in base 10 with leading zeros.
    ///
    /// # Panics
    /// Panics in debug mode if `length` is out of bounds or `index` is not
    /// below 10^length.
    #[must_use]
    pub fn from_index(index: usize, length: usize) -> Self {
        debug_assert!(length >= 1 && length <= MAX_LENGTH);
        debug_assert!(index < 10usize.pow(length as u32));

        let mut digits = [0u8; MAX_LENGTH];
        let mut rest = index;
        for slot in digits[..length].iter_mut().rev() {
            *slot = (rest % 10) as u8;
            rest /= 10;
        }

        Self {
            digits,
            len: length as u8,
        }
    }

    /// The ascending-digit pin `0123...` of the given length
    ///
    /// Used as the fixed opening guess: it touches `length` distinct digits
    /// without paying for selection over the untouched universe.
    ///
    /// # Panics
    /// Panics in debug mode if `length` is out of bounds.
    #[must_use]
    pub fn ascending(length: usize) -> Self {
        debug_assert!(length >= 1 && length <= MAX_LENGTH);

        let mut digits = [0u8; MAX_LENGTH];
        for (i, slot) in digits[..length].iter_mut().enumerate() {
            *slot = (i % 10) as u8;
        }

        Self {
            digits,
            len: length as u8,
        }
    }

    /// Number of digits in the pin
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the pin has no digits (never true for a validated pin)
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The digits as a slice of values 0-9
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.len as usize]
    }

    /// The digit value at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn digit_at(&self, position: usize) -> u8 {
        self.digits()[position]
    }

    /// Occurrence count of each digit value, indexed 0-9
    #[inline]
    #[must_use]
    pub fn digit_counts(&self) -> [u8; 10] {
        let mut counts = [0u8; 10];
        for &d in self.digits() {
            counts[d as usize] += 1;
        }
        counts
    }

    /// Number of distinct digit values in the pin
    #[must_use]
    pub fn unique_digits(&self) -> usize {
        self.digit_counts().iter().filter(|&&c| c > 0).count()
    }
}

impl Ord for Pin {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits().cmp(other.digits())
    }
}

impl PartialOrd for Pin {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in self.digits() {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pin {
    type Err = PinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
