//! Input widgets for the form grid.
//!
//! Out-of-range values cannot enter the form state: numeric fields clamp
//! to their bounds on every mutation, and select fields only cycle
//! through their enumerated options.

use std::fmt;

/// Bounded integer input with a typed editing buffer.
///
/// Stepping clamps immediately; typed entry is clamped when the buffer
/// is committed (on Enter or focus change).
#[derive(Debug, Clone)]
pub struct NumericField {
    label: &'static str,
    min: u64,
    max: u64,
    value: u64,
    buffer: Option<String>,
}

impl NumericField {
    pub fn new(label: &'static str, min: u64, max: u64) -> Self {
        Self {
            label,
            min,
            max,
            value: min,
            buffer: None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The committed value. Always within bounds.
    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn step_up(&mut self) {
        self.commit();
        self.value = self.value.saturating_add(1).min(self.max);
    }

    pub fn step_down(&mut self) {
        self.commit();
        self.value = self.value.saturating_sub(1).max(self.min);
    }

    /// Append a typed digit to the editing buffer. Non-digits are
    /// ignored.
    pub fn insert_digit(&mut self, digit: char) {
        if digit.is_ascii_digit() {
            self.buffer.get_or_insert_with(String::new).push(digit);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.pop();
        }
    }

    pub fn is_editing(&self) -> bool {
        self.buffer.is_some()
    }

    /// Commit the editing buffer, clamping into the bounds. Entries that
    /// overflow saturate at the upper bound; an empty buffer keeps the
    /// previous value.
    pub fn commit(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            if buffer.is_empty() {
                return;
            }
            let parsed = buffer.parse::<u64>().unwrap_or(self.max);
            self.value = parsed.clamp(self.min, self.max);
        }
    }

    /// Text shown in the cell: the buffer while typing, the committed
    /// value otherwise.
    pub fn display_value(&self) -> String {
        match &self.buffer {
            Some(buffer) => buffer.clone(),
            None => self.value.to_string(),
        }
    }
}

/// Select widget cycling through a fixed option list.
#[derive(Debug, Clone)]
pub struct SelectField<T> {
    label: &'static str,
    options: Vec<T>,
    index: usize,
}

impl<T: Copy + fmt::Display> SelectField<T> {
    /// Build a select over a non-empty option list; the first option is
    /// the initial selection.
    pub fn new(label: &'static str, options: impl Into<Vec<T>>) -> Self {
        let options = options.into();
        debug_assert!(!options.is_empty());
        Self {
            label,
            options,
            index: 0,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn value(&self) -> T {
        self.options[self.index]
    }

    pub fn select_next(&mut self) {
        self.index = (self.index + 1) % self.options.len();
    }

    pub fn select_prev(&mut self) {
        self.index = (self.index + self.options.len() - 1) % self.options.len();
    }

    pub fn display_value(&self) -> String {
        self.value().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stepping_clamps_at_bounds() {
        let mut field = NumericField::new("Age", 18, 80);
        field.step_down();
        assert_eq!(field.value(), 18);

        for _ in 0..200 {
            field.step_up();
        }
        assert_eq!(field.value(), 80);
    }

    #[test]
    fn test_typed_entry_commits_clamped() {
        let mut field = NumericField::new("Age", 18, 80);
        field.insert_digit('3');
        field.insert_digit('5');
        assert!(field.is_editing());
        assert_eq!(field.display_value(), "35");

        field.commit();
        assert_eq!(field.value(), 35);
        assert!(!field.is_editing());

        // Entry above the bound is rejected down to the bound.
        field.insert_digit('9');
        field.insert_digit('9');
        field.insert_digit('9');
        field.commit();
        assert_eq!(field.value(), 80);

        // Entry below the bound is rejected up to the bound.
        field.insert_digit('5');
        field.commit();
        assert_eq!(field.value(), 18);
    }

    #[test]
    fn test_overflowing_entry_saturates() {
        let mut field = NumericField::new("Income", 0, 1_200_000);
        for _ in 0..25 {
            field.insert_digit('9');
        }
        field.commit();
        assert_eq!(field.value(), 1_200_000);
    }

    #[test]
    fn test_empty_buffer_keeps_previous_value() {
        let mut field = NumericField::new("Income", 0, 100);
        field.insert_digit('4');
        field.insert_digit('2');
        field.commit();

        field.insert_digit('7');
        field.backspace();
        field.commit();
        assert_eq!(field.value(), 42);
    }

    #[test]
    fn test_non_digits_are_ignored() {
        let mut field = NumericField::new("Income", 0, 100);
        field.insert_digit('x');
        assert!(!field.is_editing());
    }

    #[test]
    fn test_select_cycles_and_wraps() {
        let mut field = SelectField::new("Loan Type", ["Unsecured", "Secured"]);
        assert_eq!(field.value(), "Unsecured");

        field.select_next();
        assert_eq!(field.value(), "Secured");
        field.select_next();
        assert_eq!(field.value(), "Unsecured");

        field.select_prev();
        assert_eq!(field.value(), "Secured");
    }
}
