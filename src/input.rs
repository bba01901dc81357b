/// Digits a player has typed for the current problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    digits: String,
    max_len: usize,
}

impl InputBuffer {
    pub fn new(max_len: usize) -> Self {
        Self {
            digits: String::with_capacity(max_len),
            max_len,
        }
    }

    /// Append a digit. Returns false when nothing was appended: the buffer
    /// is full or `digit` is not 0-9.
    pub fn push_digit(&mut self, digit: u8) -> bool {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            return false;
        };
        if self.digits.len() >= self.max_len {
            return false;
        }
        self.digits.push(c);
        true
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Value of the typed digits, or None for an empty buffer
    pub fn value(&self) -> Option<u32> {
        // only ever holds ascii digits, and at most 9 of them
        self.digits.parse().ok()
    }
}
