//! Feedback scoring for a guess against a secret
//!
//! Feedback is the ordered triple (exact, misplaced, wrong):
//! - `exact`: positions where guess and secret hold the same digit
//! - `misplaced`: further digits present in the secret but at another
//!   position, counted with multiset semantics so duplicates are never
//!   matched beyond the secret's actual multiplicity
//! - `wrong`: the remainder
//!
//! The components always sum to the pin length.

use super::Pin;
use std::fmt;

/// Feedback triple for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    exact: u8,
    misplaced: u8,
    wrong: u8,
}

/// Error type for invalid feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// Secret and guess have different lengths
    LengthMismatch { secret: usize, guess: usize },
    /// Input text is not two or three non-negative integers
    Malformed,
    /// Components do not sum to the pin length
    SumMismatch { total: usize, length: usize },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { secret, guess } => write!(
                f,
                "Secret length {secret} does not match guess length {guess}"
            ),
            Self::Malformed => write!(
                f,
                "Feedback must be two or three numbers: 'correct_pos correct_wrong [incorrect]'"
            ),
            Self::SumMismatch { total, length } => write!(
                f,
                "Feedback counts sum to {total} but the pin length is {length}"
            ),
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// Build a feedback triple, validating that it sums to `length`
    ///
    /// # Errors
    /// Returns `FeedbackError::SumMismatch` if the components do not add up
    /// to the pin length.
    pub fn checked(
        exact: usize,
        misplaced: usize,
        wrong: usize,
        length: usize,
    ) -> Result<Self, FeedbackError> {
        let total = exact + misplaced + wrong;
        if total != length || length > crate::core::MAX_LENGTH {
            return Err(FeedbackError::SumMismatch { total, length });
        }
        Ok(Self {
            exact: exact as u8,
            misplaced: misplaced as u8,
            wrong: wrong as u8,
        })
    }

    /// The fully-correct feedback `(length, 0, 0)`
    #[must_use]
    pub fn solved(length: usize) -> Self {
        Self {
            exact: length as u8,
            misplaced: 0,
            wrong: 0,
        }
    }

    /// Score a guess against a secret
    ///
    /// Symmetric: swapping which pin is called "secret" yields the same
    /// triple, since exact matches and the multiset intersection both are.
    ///
    /// # Errors
    /// Returns `FeedbackError::LengthMismatch` if the pins differ in length.
    ///
    /// # Examples
    /// ```
    /// use pin_cracker::core::{Feedback, Pin};
    ///
    /// let secret = Pin::new("1234").unwrap();
    /// let guess = Pin::new("0123").unwrap();
    /// let feedback = Feedback::score(&secret, &guess).unwrap();
    ///
    /// assert_eq!(feedback.exact(), 0);
    /// assert_eq!(feedback.misplaced(), 3);
    /// assert_eq!(feedback.wrong(), 1);
    /// ```
    pub fn score(secret: &Pin, guess: &Pin) -> Result<Self, FeedbackError> {
        if secret.len() != guess.len() {
            return Err(FeedbackError::LengthMismatch {
                secret: secret.len(),
                guess: guess.len(),
            });
        }
        Ok(Self::score_aligned(secret, guess))
    }

    /// Score two pins the session invariant already guarantees are the same
    /// length. Hot path for filtering and guess selection.
    pub(crate) fn score_aligned(secret: &Pin, guess: &Pin) -> Self {
        debug_assert_eq!(secret.len(), guess.len());

        // First pass: count exact matches, tallying unconsumed digits
        let mut exact = 0u8;
        let mut secret_left = [0u8; 10];
        let mut guess_left = [0u8; 10];
        for (&s, &g) in secret.digits().iter().zip(guess.digits()) {
            if s == g {
                exact += 1;
            } else {
                secret_left[s as usize] += 1;
                guess_left[g as usize] += 1;
            }
        }

        // Second pass: multiset intersection of the unconsumed digits
        let misplaced: u8 = (0..10).map(|d| secret_left[d].min(guess_left[d])).sum();
        let wrong = secret.len() as u8 - exact - misplaced;

        Self {
            exact,
            misplaced,
            wrong,
        }
    }

    /// Parse interactive feedback in the form `correct_pos correct_wrong
    /// [incorrect]`; the third number is derived when omitted.
    ///
    /// # Errors
    /// Returns `FeedbackError::Malformed` for anything that is not two or
    /// three non-negative integers, and `FeedbackError::SumMismatch` when
    /// the counts cannot correspond to a pin of the given length.
    ///
    /// # Examples
    /// ```
    /// use pin_cracker::core::Feedback;
    ///
    /// let a = Feedback::parse("2 1", 4).unwrap();
    /// let b = Feedback::parse("2 1 1", 4).unwrap();
    /// assert_eq!(a, b);
    /// assert!(Feedback::parse("3 2", 4).is_err());
    /// ```
    pub fn parse(input: &str, length: usize) -> Result<Self, FeedbackError> {
        let parts: Vec<&str> = input.split_whitespace().collect();

        let numbers: Vec<usize> = parts
            .iter()
            .map(|p| p.parse::<usize>())
            .collect::<Result<_, _>>()
            .map_err(|_| FeedbackError::Malformed)?;

        match numbers.as_slice() {
            [exact, misplaced] => {
                let wrong = length
                    .checked_sub(exact + misplaced)
                    .ok_or(FeedbackError::SumMismatch {
                        total: exact + misplaced,
                        length,
                    })?;
                Self::checked(*exact, *misplaced, wrong, length)
            }
            [exact, misplaced, wrong] => Self::checked(*exact, *misplaced, *wrong, length),
            _ => Err(FeedbackError::Malformed),
        }
    }

    /// Digits guessed in the correct position
    #[inline]
    #[must_use]
    pub const fn exact(&self) -> usize {
        self.exact as usize
    }

    /// Correct digits in the wrong position
    #[inline]
    #[must_use]
    pub const fn misplaced(&self) -> usize {
        self.misplaced as usize
    }

    /// Digits not present in the secret
    #[inline]
    #[must_use]
    pub const fn wrong(&self) -> usize {
        self.wrong as usize
    }

    /// Sum of the three components; equals the pin length for valid feedback
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.exact as usize + self.misplaced as usize + self.wrong as usize
    }

    /// Whether every digit was exact (the guess equals the secret)
    #[inline]
    #[must_use]
    pub const fn is_perfect(&self) -> bool {
        self.misplaced == 0 && self.wrong == 0
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.exact, self.misplaced, self.wrong)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(text: &str) -> Pin {
        Pin::new(text).unwrap()
    }

    fn score(secret: &str, guess: &str) -> Feedback {
        Feedback::score(&pin(secret), &pin(guess)).unwrap()
    }

    #[test]
    fn score_components_sum_to_length() {
        let pairs = [
            ("1234", "0123"),
            ("0000", "1111"),
            ("1122", "2211"),
            ("987654", "456789"),
            ("5", "5"),
        ];
        for (secret, guess) in pairs {
            let fb = score(secret, guess);
            assert_eq!(fb.total(), secret.len(), "{secret} vs {guess}");
        }
    }

    #[test]
    fn score_self_is_all_exact() {
        for text in ["0", "42", "1234", "999999"] {
            let fb = score(text, text);
            assert_eq!(fb.exact(), text.len());
            assert_eq!(fb.misplaced(), 0);
            assert_eq!(fb.wrong(), 0);
            assert!(fb.is_perfect());
            assert_eq!(fb, Feedback::solved(text.len()));
        }
    }

    #[test]
    fn score_permuted_multiset_all_misplaced() {
        // Both pins are permutations of the same multiset with no position
        // fixed, so every digit is misplaced.
        let fb = score("1123", "3211");
        assert_eq!((fb.exact(), fb.misplaced(), fb.wrong()), (0, 4, 0));
    }

    #[test]
    fn score_duplicates_not_double_counted() {
        // Two exact 1s consume the secret's 1s entirely; the guess's extra
        // 1s have nothing left to match and count as wrong.
        let fb = score("1122", "1111");
        assert_eq!((fb.exact(), fb.misplaced(), fb.wrong()), (2, 0, 2));
    }

    #[test]
    fn score_opening_guess_example() {
        let fb = score("1234", "0123");
        assert_eq!((fb.exact(), fb.misplaced(), fb.wrong()), (0, 3, 1));
    }

    #[test]
    fn score_no_common_digits() {
        let fb = score("1234", "5678");
        assert_eq!((fb.exact(), fb.misplaced(), fb.wrong()), (0, 0, 4));
    }

    #[test]
    fn score_is_symmetric() {
        let pairs = [
            ("1234", "0123"),
            ("1123", "3211"),
            ("1122", "1111"),
            ("0194", "9410"),
            ("7070", "0707"),
        ];
        for (a, b) in pairs {
            assert_eq!(score(a, b), score(b, a), "{a} vs {b}");
        }
    }

    #[test]
    fn score_length_mismatch_rejected() {
        let result = Feedback::score(&pin("123"), &pin("1234"));
        assert_eq!(
            result,
            Err(FeedbackError::LengthMismatch {
                secret: 3,
                guess: 4
            })
        );
    }

    #[test]
    fn checked_validates_sum() {
        assert!(Feedback::checked(2, 1, 1, 4).is_ok());
        assert_eq!(
            Feedback::checked(2, 1, 0, 4),
            Err(FeedbackError::SumMismatch {
                total: 3,
                length: 4
            })
        );
        assert_eq!(
            Feedback::checked(4, 1, 0, 4),
            Err(FeedbackError::SumMismatch {
                total: 5,
                length: 4
            })
        );
    }

    #[test]
    fn parse_two_numbers_derives_third() {
        let fb = Feedback::parse("2 1", 4).unwrap();
        assert_eq!((fb.exact(), fb.misplaced(), fb.wrong()), (2, 1, 1));
    }

    #[test]
    fn parse_three_numbers() {
        let fb = Feedback::parse(" 0  3 1 ", 4).unwrap();
        assert_eq!((fb.exact(), fb.misplaced(), fb.wrong()), (0, 3, 1));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(Feedback::parse("", 4), Err(FeedbackError::Malformed));
        assert_eq!(Feedback::parse("two one", 4), Err(FeedbackError::Malformed));
        assert_eq!(Feedback::parse("2", 4), Err(FeedbackError::Malformed));
        assert_eq!(
            Feedback::parse("1 1 1 1", 4),
            Err(FeedbackError::Malformed)
        );
        // Negative numbers never parse as counts
        assert_eq!(Feedback::parse("-1 2", 4), Err(FeedbackError::Malformed));
    }

    #[test]
    fn parse_rejects_bad_sums() {
        assert!(matches!(
            Feedback::parse("3 2", 4),
            Err(FeedbackError::SumMismatch { total: 5, length: 4 })
        ));
        assert!(matches!(
            Feedback::parse("1 1 1", 4),
            Err(FeedbackError::SumMismatch { total: 3, length: 4 })
        ));
    }

    #[test]
    fn perfect_parse_shortcuts() {
        let fb = Feedback::parse("4 0", 4).unwrap();
        assert!(fb.is_perfect());
        assert_eq!(fb, Feedback::solved(4));
    }

    #[test]
    fn display_is_triple() {
        let fb = Feedback::parse("2 1 1", 4).unwrap();
        assert_eq!(fb.to_string(), "(2, 1, 1)");
    }
}
