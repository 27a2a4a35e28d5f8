//! Value display formatting

use std::fmt;
use std::sync::Arc;

/// Custom formatting function
pub type FormatFn = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// How the committed value is turned into display text
#[derive(Clone)]
pub enum ValueFormatter {
    /// Fixed number of decimal places
    Decimals(u8),
    Custom(FormatFn),
}

impl Default for ValueFormatter {
    fn default() -> Self {
        ValueFormatter::Decimals(1)
    }
}

impl fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueFormatter::Decimals(places) => f.debug_tuple("Decimals").field(places).finish(),
            ValueFormatter::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl ValueFormatter {
    /// Wrap a formatting closure
    pub fn custom<F>(format: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        ValueFormatter::Custom(Arc::new(format))
    }

    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormatter::Decimals(places) => {
                let text = format!("{:.*}", *places as usize, value);
                // Avoid displaying "-0.0" for tiny negative values
                match text.strip_prefix('-') {
                    Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
                    _ => text,
                }
            }
            ValueFormatter::Custom(format) => format(value),
        }
    }
}
