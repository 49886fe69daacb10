use chrono::Days;
use chrono::NaiveDate;

use crate::error::Result;
use crate::error::SalesGenError;

/// Every calendar day between `from` and `to`, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub fn try_new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(SalesGenError::InvalidConfig(format!(
                "from date {from} is after to date {to}"
            )));
        }

        Ok(Self { from, to })
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    pub fn len(&self) -> usize {
        (self.to - self.from).num_days() as usize + 1
    }

    // never empty, kept for clippy's len_without_is_empty
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.len() as u64).filter_map(move |n| self.from.checked_add_days(Days::new(n)))
    }
}

impl Default for DateRange {
    fn default() -> Self {
        let cfg = common::config::Generator::default();
        Self {
            from: cfg.from_date,
            to: cfg.to_date,
        }
    }
}
