use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

/// Stock-level buckets offered by the "Critical Inventory Status" filter.
///
/// The labels are kept exactly as the back office shows them: the lowest
/// stock bucket reads "High" (priority), not "Low" (stock).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InventoryBucket {
    LessThan3,
    Between3And10,
    MoreThan10,
}

impl InventoryBucket {
    pub const ALL: [InventoryBucket; 3] = [
        InventoryBucket::LessThan3,
        InventoryBucket::Between3And10,
        InventoryBucket::MoreThan10,
    ];

    pub const PARAMETER: &'static str = "inventory";
    pub const TITLE: &'static str = "Critical Inventory Status";

    /// Query-string value selecting this bucket.
    pub fn param(self) -> &'static str {
        match self {
            InventoryBucket::LessThan3 => "<3",
            InventoryBucket::Between3And10 => "3<=10",
            InventoryBucket::MoreThan10 => ">10",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InventoryBucket::LessThan3 => "High",
            InventoryBucket::Between3And10 => "Medium",
            InventoryBucket::MoreThan10 => "OK",
        }
    }

    /// Anything other than the three known values selects no bucket.
    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.param() == value)
    }

    /// Inclusive `(min, max)` bounds on `inventory`; `None` means unbounded.
    pub fn bounds(self) -> (Option<i32>, Option<i32>) {
        match self {
            InventoryBucket::LessThan3 => (None, Some(2)),
            InventoryBucket::Between3And10 => (Some(3), Some(10)),
            InventoryBucket::MoreThan10 => (Some(11), None),
        }
    }

    pub fn contains(self, inventory: i32) -> bool {
        match self {
            InventoryBucket::LessThan3 => inventory < 3,
            InventoryBucket::Between3And10 => (3..=10).contains(&inventory),
            InventoryBucket::MoreThan10 => inventory > 10,
        }
    }
}

/// Half-open UTC interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Choices of the date filter on a creation timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CreatedWithin {
    Today,
    PastSevenDays,
    ThisMonth,
    ThisYear,
}

impl CreatedWithin {
    pub const ALL: [CreatedWithin; 4] = [
        CreatedWithin::Today,
        CreatedWithin::PastSevenDays,
        CreatedWithin::ThisMonth,
        CreatedWithin::ThisYear,
    ];

    pub fn param(self) -> &'static str {
        match self {
            CreatedWithin::Today => "today",
            CreatedWithin::PastSevenDays => "past_7_days",
            CreatedWithin::ThisMonth => "this_month",
            CreatedWithin::ThisYear => "this_year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CreatedWithin::Today => "Today",
            CreatedWithin::PastSevenDays => "Past 7 days",
            CreatedWithin::ThisMonth => "This month",
            CreatedWithin::ThisYear => "This year",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.param() == value)
    }

    /// Resolves the choice against `now`, using UTC calendar days.
    pub fn range(self, now: DateTime<Utc>) -> DateRange {
        let today = now.date_naive();
        let tomorrow = today + Days::new(1);
        let (start, end) = match self {
            CreatedWithin::Today => (today, tomorrow),
            CreatedWithin::PastSevenDays => (today - Days::new(7), tomorrow),
            CreatedWithin::ThisMonth => {
                let first = today - Days::new(u64::from(today.day0()));
                (first, first + Months::new(1))
            }
            CreatedWithin::ThisYear => {
                let first = today - Days::new(u64::from(today.ordinal0()));
                (first, first + Months::new(12))
            }
        };
        DateRange {
            start: midnight(start),
            end: midnight(end),
        }
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
