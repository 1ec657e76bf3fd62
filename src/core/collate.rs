//! Stroke-count collation for Traditional Chinese text.
//!
//! Title and author ordering uses the zh-TW stroke collation variant, so
//! characters sort by stroke count rather than code point.

use crate::errors::{AppError, AppResult};
use icu::collator::{Collator, CollatorOptions};
use icu::locid::Locale;
use std::cmp::Ordering;

const COLLATION_LOCALE: &str = "zh-TW-u-co-stroke";

pub struct StrokeCollator {
    collator: Collator,
}

impl StrokeCollator {
    pub fn new() -> AppResult<Self> {
        let locale: Locale = COLLATION_LOCALE
            .parse()
            .map_err(|e| AppError::Collation(format!("{}: {}", COLLATION_LOCALE, e)))?;
        let collator = Collator::try_new(&locale.into(), CollatorOptions::new())
            .map_err(|e| AppError::Collation(e.to_string()))?;
        Ok(Self { collator })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}
