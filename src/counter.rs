//! Character Counter
//!
//! Remaining-characters reading for the comment box.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Neutral,
    Warning,
    Danger,
}

impl CounterLevel {
    pub fn class(self) -> &'static str {
        match self {
            CounterLevel::Neutral => "form-text text-muted",
            CounterLevel::Warning => "form-text text-warning",
            CounterLevel::Danger => "form-text text-danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterReading {
    pub remaining: i64,
    pub level: CounterLevel,
}

#[derive(Debug, Clone, Copy)]
pub struct CharCounter {
    pub max_length: usize,
    pub warning_below: i64,
    pub danger_below: i64,
}

impl CharCounter {
    /// Length is measured in UTF-16 code units, like the textarea's `maxlength`.
    pub fn read(&self, value: &str) -> CounterReading {
        let used = value.encode_utf16().count() as i64;
        let remaining = self.max_length as i64 - used;
        let level = if remaining < self.danger_below {
            CounterLevel::Danger
        } else if remaining < self.warning_below {
            CounterLevel::Warning
        } else {
            CounterLevel::Neutral
        };
        CounterReading { remaining, level }
    }
}

impl CounterReading {
    pub fn label(&self) -> String {
        format!("{} characters remaining", self.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTER: CharCounter = CharCounter {
        max_length: 500,
        warning_below: 50,
        danger_below: 20,
    };

    fn text(len: usize) -> String {
        "x".repeat(len)
    }

    #[test]
    fn test_empty_is_neutral() {
        let reading = COUNTER.read("");
        assert_eq!(reading.remaining, 500);
        assert_eq!(reading.level, CounterLevel::Neutral);
        assert_eq!(reading.label(), "500 characters remaining");
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(COUNTER.read(&text(450)).level, CounterLevel::Neutral); // 50 left
        assert_eq!(COUNTER.read(&text(451)).level, CounterLevel::Warning); // 49 left
        assert_eq!(COUNTER.read(&text(480)).level, CounterLevel::Warning); // 20 left
        assert_eq!(COUNTER.read(&text(481)).level, CounterLevel::Danger); // 19 left
    }

    #[test]
    fn test_over_limit_goes_negative() {
        let reading = COUNTER.read(&text(510));
        assert_eq!(reading.remaining, -10);
        assert_eq!(reading.level, CounterLevel::Danger);
    }

    #[test]
    fn test_counts_utf16_units() {
        // "é" is one unit, the emoji is a surrogate pair
        assert_eq!(COUNTER.read("é").remaining, 499);
        assert_eq!(COUNTER.read("🎉").remaining, 498);
    }

    #[test]
    fn test_level_classes() {
        assert_eq!(CounterLevel::Neutral.class(), "form-text text-muted");
        assert_eq!(CounterLevel::Warning.class(), "form-text text-warning");
        assert_eq!(CounterLevel::Danger.class(), "form-text text-danger");
    }
}
