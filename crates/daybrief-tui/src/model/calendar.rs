use chrono::{Datelike, Days, NaiveDate};

/// Cursor state for the calendar popover.
///
/// The cursor always points at a real calendar day; the rendered month
/// follows the cursor. Availability is the state machine's concern, not
/// this widget's — it happily parks the cursor on a day with no briefing.
#[derive(Debug, Clone)]
pub struct CalendarState {
    cursor: NaiveDate,
}

impl CalendarState {
    pub fn new(cursor: NaiveDate) -> Self {
        Self { cursor }
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    /// Reposition the cursor, e.g. on the current selection when the
    /// popover opens.
    pub fn open_at(&mut self, day: NaiveDate) {
        self.cursor = day;
    }

    pub fn move_days(&mut self, delta: i64) {
        let moved = if delta < 0 {
            self.cursor.checked_sub_days(Days::new(delta.unsigned_abs()))
        } else {
            self.cursor.checked_add_days(Days::new(delta as u64))
        };
        if let Some(day) = moved {
            self.cursor = day;
        }
    }

    pub fn move_weeks(&mut self, delta: i64) {
        self.move_days(delta * 7);
    }

    pub fn prev_month(&mut self) {
        let (year, month) = if self.cursor.month() == 1 {
            (self.cursor.year() - 1, 12)
        } else {
            (self.cursor.year(), self.cursor.month() - 1)
        };
        self.jump_to_month(year, month);
    }

    pub fn next_month(&mut self) {
        let (year, month) = if self.cursor.month() == 12 {
            (self.cursor.year() + 1, 1)
        } else {
            (self.cursor.year(), self.cursor.month() + 1)
        };
        self.jump_to_month(year, month);
    }

    /// Keep the day-of-month when switching months, clamping to the last
    /// day where the target month is shorter.
    fn jump_to_month(&mut self, year: i32, month: u32) {
        let day = self.cursor.day().min(days_in_month(year, month));
        if let Some(moved) = NaiveDate::from_ymd_opt(year, month, day) {
            self.cursor = moved;
        }
    }

    /// Month label for the popover title, e.g. "March 2024".
    pub fn month_label(&self) -> String {
        self.cursor.format("%B %Y").to_string()
    }

    /// The weeks of the cursor's month, Sunday-first. `None` cells pad the
    /// partial first and last weeks.
    pub fn month_grid(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let year = self.cursor.year();
        let month = self.cursor.month();
        let first = match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(d) => d,
            None => return Vec::new(),
        };
        let offset = first.weekday().num_days_from_sunday() as usize;
        let days = days_in_month(year, month);

        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut cell = offset;
        for day in 1..=days {
            week[cell] = NaiveDate::from_ymd_opt(year, month, day);
            cell += 1;
            if cell == 7 {
                weeks.push(week);
                week = [None; 7];
                cell = 0;
            }
        }
        if cell > 0 {
            weeks.push(week);
        }
        weeks
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}
