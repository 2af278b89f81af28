// src/table/date_nav.rs
//! Selected-day state for tables that show one day at a time
//! (daily transactions, daily sales).

use std::fmt;

use chrono::{Days, Local, NaiveDate};

use crate::config::consts::{DISPLAY_DATE, ISO_DATE};

pub type DateChange = Box<dyn FnMut(NaiveDate)>;

pub struct DateNav {
    date: NaiveDate,
    on_change: Option<DateChange>,
}

impl fmt::Debug for DateNav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateNav")
            .field("date", &self.date)
            .finish()
    }
}

impl Default for DateNav {
    fn default() -> Self {
        Self::today()
    }
}

impl DateNav {
    pub fn new(date: NaiveDate) -> Self {
        Self { date, on_change: None }
    }

    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn on_change(mut self, f: impl FnMut(NaiveDate) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn date(&self) -> NaiveDate { self.date }

    pub fn prev_day(&mut self) {
        if let Some(d) = self.date.checked_sub_days(Days::new(1)) {
            self.set_date(d);
        }
    }

    pub fn next_day(&mut self) {
        if let Some(d) = self.date.checked_add_days(Days::new(1)) {
            self.set_date(d);
        }
    }

    /// Change the day; the callback only fires on an actual change.
    pub fn set_date(&mut self, date: NaiveDate) {
        if date == self.date {
            return;
        }
        self.date = date;
        logd!("DateNav: → {}", self.iso());
        if let Some(cb) = self.on_change.as_mut() {
            cb(date);
        }
    }

    /// `YYYY-MM-DD`
    pub fn iso(&self) -> String {
        self.date.format(ISO_DATE).to_string()
    }

    /// `Wed Jan 10 2024`
    pub fn display(&self) -> String {
        self.date.format(DISPLAY_DATE).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn steps_across_month_and_year() {
        let mut nav = DateNav::new(d(2023, 12, 31));
        nav.next_day();
        assert_eq!(nav.iso(), "2024-01-01");
        nav.prev_day();
        nav.prev_day();
        assert_eq!(nav.date(), d(2023, 12, 30));
    }

    #[test]
    fn callback_fires_on_change_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut nav = DateNav::new(d(2024, 1, 10)).on_change(move |day| sink.borrow_mut().push(day));
        nav.set_date(d(2024, 1, 10));
        nav.next_day();
        nav.set_date(d(2024, 2, 1));
        assert_eq!(*seen.borrow(), vec![d(2024, 1, 11), d(2024, 2, 1)]);
    }

    #[test]
    fn display_matches_date_string_form() {
        assert_eq!(DateNav::new(d(2024, 1, 10)).display(), "Wed Jan 10 2024");
    }
}
