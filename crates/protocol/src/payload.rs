//! Message body generation
//!
//! One payload is generated per run and shared read-only by every sender.

use std::sync::Arc;

use rand::Rng;

/// Number of letters drawn from, starting at `A` (so `A..=Y`)
const ALPHABET_LEN: u8 = 25;

/// Fixed message body shared across all records of a run
///
/// Cloning is cheap: the text is reference counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload(Arc<str>);

impl Payload {
    /// Generate a random uppercase payload of `len` bytes
    pub fn random(len: usize) -> Self {
        Self::random_with(&mut rand::rng(), len)
    }

    /// Generate a random payload from the supplied generator
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Self {
        let text: String = (0..len)
            .map(|_| char::from(b'A' + rng.random_range(0..ALPHABET_LEN)))
            .collect();
        Self(text.into())
    }

    /// Payload text
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the payload is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self(text.into())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self(text.into())
    }
}

impl AsRef<str> for Payload {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
