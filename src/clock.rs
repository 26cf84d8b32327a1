use std::sync::{PoisonError, RwLock};

use chrono::{Days, FixedOffset, NaiveDate, Offset, Utc};

/// Source of the current calendar day.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock time projected onto a fixed timezone.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }

    pub fn with_offset_minutes(minutes: i32) -> Self {
        match minutes.checked_mul(60).and_then(FixedOffset::east_opt) {
            Some(offset) => Self { offset },
            None => {
                log::warn!("UTC offset of {} minutes is out of range, using UTC", minutes);
                Self::utc()
            }
        }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}

/// A clock frozen on a settable day.
#[derive(Debug)]
pub struct FixedClock {
    today: RwLock<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: RwLock::new(today),
        }
    }

    pub fn set(&self, today: NaiveDate) {
        *self.today.write().unwrap_or_else(PoisonError::into_inner) = today;
    }

    pub fn advance_days(&self, days: u64) {
        let mut today = self.today.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(next) = today.checked_add_days(Days::new(days)) {
            *today = next;
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// True when `earlier` is exactly the calendar day before `later`.
pub fn is_day_before(earlier: NaiveDate, later: NaiveDate) -> bool {
    later.pred_opt() == Some(earlier)
}
