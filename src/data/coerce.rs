/// Read a measurement cell as a number.
///
/// Never fails: blanks, text, `NaN` and infinities all become `None`.
pub fn coerce_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Counts kept while coercing a whole file, for the load log.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CoercionStats {
    pub numeric: usize,
    pub blank: usize,
    pub invalid: usize,
}

impl CoercionStats {
    /// Coerce one cell and record the outcome.
    pub fn coerce(&mut self, raw: &str) -> Option<f64> {
        let value = coerce_value(raw);
        match value {
            Some(_) => self.numeric += 1,
            None if raw.trim().is_empty() => self.blank += 1,
            None => self.invalid += 1,
        }
        value
    }

    /// Record a cell that could not even be read as text.
    pub fn reject(&mut self) -> Option<f64> {
        self.invalid += 1;
        None
    }

    pub fn missing(&self) -> usize {
        self.blank + self.invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_with_padding() {
        assert_eq!(coerce_value("59.8"), Some(59.8));
        assert_eq!(coerce_value(" 61.2 "), Some(61.2));
        assert_eq!(coerce_value("42"), Some(42.0));
        assert_eq!(coerce_value("-1e2"), Some(-100.0));
    }

    #[test]
    fn non_numeric_becomes_missing() {
        for raw in ["", "   ", "DNF", "59,8", "NaN", "inf", "-infinity", "1.2.3"] {
            assert_eq!(coerce_value(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn stats_split_blank_and_invalid() {
        let mut stats = CoercionStats::default();
        let values: Vec<Option<f64>> = ["1.0", "", "x", "2"].iter().map(|r| stats.coerce(r)).collect();
        assert_eq!(values, vec![Some(1.0), None, None, Some(2.0)]);
        assert_eq!(
            stats,
            CoercionStats {
                numeric: 2,
                blank: 1,
                invalid: 1
            }
        );
        assert_eq!(stats.missing(), 2);

        assert_eq!(stats.reject(), None);
        assert_eq!(stats.invalid, 2);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn coercion_is_total_and_finite(raw in any::<String>()) {
            if let Some(v) = coerce_value(&raw) {
                prop_assert!(v.is_finite());
            }
        }
    }
}
