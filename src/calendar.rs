//! Month grid generation for date pickers
//!
//! Months are zero-based (`JAN == 0`) and weeks always hold seven days,
//! spilling into the neighbouring months as needed.

use std::fmt;

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

pub const JAN: u32 = 0;
pub const FEB: u32 = 1;
pub const MAR: u32 = 2;
pub const APR: u32 = 3;
pub const MAY: u32 = 4;
pub const JUN: u32 = 5;
pub const JUL: u32 = 6;
pub const AUG: u32 = 7;
pub const SEP: u32 = 8;
pub const OCT: u32 = 9;
pub const NOV: u32 = 10;
pub const DEC: u32 = 11;

/// Earliest year a grid can be generated for
pub const MIN_YEAR: i32 = 1970;

/// One row of the grid
pub type Week<T> = [T; 7];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    InvalidYear(i32),
    InvalidMonth(u32),
    /// Date arithmetic left chrono's supported range
    OutOfRange,
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::InvalidYear(y) => {
                write!(f, "year must be a number >= {} (got {})", MIN_YEAR, y)
            }
            CalendarError::InvalidMonth(m) => {
                write!(f, "month must be a number (Jan is 0), got {}", m)
            }
            CalendarError::OutOfRange => write!(f, "date out of range"),
        }
    }
}

impl std::error::Error for CalendarError {}

/// Month grid generator with a configurable first day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    pub first_week_day: Weekday,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(Weekday::Sun)
    }
}

/// Weekday for a Sunday-based index (0 = Sunday .. 6 = Saturday)
pub fn weekday_from_sunday_index(index: u8) -> Option<Weekday> {
    let day = match index {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        _ => return None,
    };
    Some(day)
}

impl Calendar {
    pub fn new(first_week_day: Weekday) -> Self {
        Self { first_week_day }
    }

    /// Latest date on or before `date` that falls on the first week day
    pub fn week_start_date(&self, date: NaiveDate) -> NaiveDate {
        let offset = (date.weekday().num_days_from_sunday() + 7
            - self.first_week_day.num_days_from_sunday())
            % 7;
        date.checked_sub_days(Days::new(u64::from(offset)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Full weeks covering `month` of `year`.
    ///
    /// The first week starts on the week start on or before the 1st; weeks are
    /// added while the following day is still in this month (or an earlier
    /// month of the same year).
    pub fn month_dates(&self, year: i32, month: u32) -> Result<Vec<Week<NaiveDate>>, CalendarError> {
        if year < MIN_YEAR {
            return Err(CalendarError::InvalidYear(year));
        }
        if month > DEC {
            return Err(CalendarError::InvalidMonth(month));
        }

        let first = NaiveDate::from_ymd_opt(year, month + 1, 1).ok_or(CalendarError::OutOfRange)?;
        let mut days = self.week_start_date(first).iter_days();
        let mut weeks = Vec::with_capacity(6);

        loop {
            let week: Vec<NaiveDate> = days.by_ref().take(7).collect();
            let week: Week<NaiveDate> = week.try_into().map_err(|_| CalendarError::OutOfRange)?;
            let next = week[6].succ_opt().ok_or(CalendarError::OutOfRange)?;
            weeks.push(week);

            if !(next.month0() <= month && next.year() == year) {
                break;
            }
        }

        Ok(weeks)
    }

    /// Like [`month_dates`](Self::month_dates), with days outside the month blanked
    pub fn month_days(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<Week<Option<NaiveDate>>>, CalendarError> {
        let weeks = self.month_dates(year, month)?;
        Ok(weeks
            .into_iter()
            .map(|week| week.map(|d| (d.month0() == month).then_some(d)))
            .collect())
    }

    /// Plain-text month: one line per week, days right-aligned in two columns
    pub fn month_text(&self, year: i32, month: u32) -> Result<String, CalendarError> {
        let weeks = self.month_days(year, month)?;
        let lines: Vec<String> = weeks
            .iter()
            .map(|week| {
                week.iter()
                    .map(|day| match day {
                        Some(d) => format!("{:>2}", d.day()),
                        None => "  ".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        Ok(lines.join("\n"))
    }

    /// Plain-text grid for the current local month
    pub fn current_month_text(&self) -> Result<String, CalendarError> {
        let today = Local::now().date_naive();
        self.month_text(today.year(), today.month0())
    }
}
