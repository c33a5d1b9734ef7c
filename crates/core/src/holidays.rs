//! US-holiday word constraints.
//!
//! Fixed-date holidays (see [`crate::constraints::fixed_date_constraint`])
//! are checked first; the floating holidays below are derived from
//! weekday-ordinal rules.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::constraints::fixed_date_constraint;

const MLK_DAY: &str = "all words must be related to Martin Luther King Jr./civil rights/equality, but categories are NOT required to be civil rights-related";
const MOTHERS_DAY: &str = "all words must be related to Mother's Day/mothers/family, but categories are NOT required to be family-related";
const MEMORIAL_DAY: &str = "all words must be related to Memorial Day/remembrance/military sacrifice, but categories are NOT required to be military-related";
const FATHERS_DAY: &str = "all words must be related to Father's Day/fathers/family, but categories are NOT required to be family-related";
const LABOR_DAY: &str = "all words must be related to Labor Day/work, but categories are NOT required to be work-related";
const THANKSGIVING: &str = "all words must be related to Thanksgiving/gratitude/autumn, but categories are NOT required to be Thanksgiving-related";
const BLACK_FRIDAY: &str = "all words must be related to Black Friday/shopping/deals, but categories are NOT required to be shopping-related";
const CYBER_MONDAY: &str = "all words must be related to Cyber Monday/the Internet/technology, but categories are NOT required to be technology-related";

/// The word constraint for `date`, if it falls on a recognized holiday.
pub fn resolve_date_constraint(date: NaiveDate) -> Option<&'static str> {
    let mmdd = format!("{:02}{:02}", date.month(), date.day());
    if let Some(fixed) = fixed_date_constraint(&mmdd) {
        return Some(fixed);
    }

    let month = date.month();
    let weekday = date.weekday();
    let ordinal = weekday_ordinal(date.day());

    // MLK Day: 3rd Monday of January.
    if month == 1 && weekday == Weekday::Mon && ordinal == 3 {
        return Some(MLK_DAY);
    }
    // Mother's Day: 2nd Sunday of May.
    if month == 5 && weekday == Weekday::Sun && ordinal == 2 {
        return Some(MOTHERS_DAY);
    }
    // Memorial Day: last Monday of May.
    if month == 5 && weekday == Weekday::Mon && weeks_from_month_end(date) == 1 {
        return Some(MEMORIAL_DAY);
    }
    // Father's Day: 3rd Sunday of June.
    if month == 6 && weekday == Weekday::Sun && ordinal == 3 {
        return Some(FATHERS_DAY);
    }
    // Labor Day: 1st Monday of September.
    if month == 9 && weekday == Weekday::Mon && ordinal == 1 {
        return Some(LABOR_DAY);
    }
    // Thanksgiving: 4th Thursday of November.
    if month == 11 && weekday == Weekday::Thu && ordinal == 4 {
        return Some(THANKSGIVING);
    }
    // Black Friday: the Friday directly after Thanksgiving.
    if month == 11 && weekday == Weekday::Fri {
        if let Some(yesterday) = date.pred_opt() {
            if yesterday.month() == 11 && weekday_ordinal(yesterday.day()) == 4 {
                return Some(BLACK_FRIDAY);
            }
        }
    }
    // Cyber Monday: the Monday after Thanksgiving. The latest possible
    // Thanksgiving is November 28th, so the Monday never falls past
    // December 4th.
    if weekday == Weekday::Mon && (month == 11 || (month == 12 && date.day() < 5)) {
        if let Some(thursday) = date.checked_sub_days(Days::new(4)) {
            if thursday.month() == 11 && weekday_ordinal(thursday.day()) == 4 {
                return Some(CYBER_MONDAY);
            }
        }
    }

    None
}

/// Which occurrence of its weekday this day-of-month is (1-based): the
/// 1st through 7th are the first, the 8th through 14th the second, etc.
fn weekday_ordinal(day: u32) -> u32 {
    (day - 1) / 7 + 1
}

/// Like [`weekday_ordinal`] counted from the end of the month: 1 for the
/// last occurrence of the weekday, 2 for the second-to-last, etc.
fn weeks_from_month_end(date: NaiveDate) -> u32 {
    (days_in_month(date) - date.day()) / 7 + 1
}

fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}
