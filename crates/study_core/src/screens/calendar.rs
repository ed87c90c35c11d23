use catalog::{CalendarEvent, Catalog};
use chrono::{Datelike, Months, NaiveDate, NaiveTime};

const UPCOMING_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    today: NaiveDate,
    selected: NaiveDate,
    /// First day of the displayed month.
    month: NaiveDate,
}

impl CalendarState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            selected: today,
            month: first_of_month(today),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn displayed_month(&self) -> (i32, u32) {
        (self.month.year(), self.month.month())
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected = date;
        self.month = first_of_month(date);
    }

    pub fn next_month(&mut self) {
        if let Some(next) = self.month.checked_add_months(Months::new(1)) {
            self.month = next;
        }
    }

    pub fn previous_month(&mut self) {
        if let Some(previous) = self.month.checked_sub_months(Months::new(1)) {
            self.month = previous;
        }
    }

    pub fn selected_events<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CalendarEvent> {
        let mut events = catalog.events_on(self.selected);
        events.sort_by_key(|e| e.starts_at);
        events
    }

    pub fn month_events<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CalendarEvent> {
        let (year, month) = self.displayed_month();
        catalog.events_in_month(year, month)
    }

    pub fn days_with_events(&self, catalog: &Catalog) -> Vec<u32> {
        let (year, month) = self.displayed_month();
        catalog.days_with_events(year, month)
    }

    pub fn upcoming<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CalendarEvent> {
        catalog.upcoming_events(self.today.and_time(NaiveTime::default()), UPCOMING_LIMIT)
    }

    /// Month grid in weeks starting on Sunday; `None` pads the first week.
    pub fn month_grid(&self) -> Vec<Option<u32>> {
        let leading = self.month.weekday().num_days_from_sunday() as usize;
        let days = days_in_month(self.month);
        let mut grid = vec![None; leading];
        grid.extend((1..=days).map(Some));
        grid
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn days_in_month(first: NaiveDate) -> u32 {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date")
    }

    #[test]
    fn month_navigation_crosses_year_boundaries() {
        let mut calendar = CalendarState::new(date(2025, 12, 10));
        calendar.next_month();
        assert_eq!(calendar.displayed_month(), (2026, 1));
        calendar.previous_month();
        calendar.previous_month();
        assert_eq!(calendar.displayed_month(), (2025, 11));
        assert_eq!(calendar.selected(), date(2025, 12, 10));
    }

    #[test]
    fn selected_day_lists_its_events_in_order() {
        let catalog = Catalog::fixtures();
        let mut calendar = CalendarState::new(date(2025, 11, 16));
        calendar.select(date(2025, 11, 20));
        let events = calendar.selected_events(&catalog);
        assert_eq!(events.len(), 2);
        assert!(events[0].starts_at < events[1].starts_at);
        assert_eq!(
            calendar.days_with_events(&catalog),
            vec![16, 17, 18, 19, 20, 25]
        );
    }

    #[test]
    fn grid_pads_to_first_weekday() {
        // November 2025 starts on a Saturday.
        let calendar = CalendarState::new(date(2025, 11, 16));
        let grid = calendar.month_grid();
        assert_eq!(grid.iter().take_while(|d| d.is_none()).count(), 6);
        assert_eq!(grid.last(), Some(&Some(30)));
        assert_eq!(grid.len(), 36);
    }

    #[test]
    fn upcoming_starts_at_today() {
        let catalog = Catalog::fixtures();
        let calendar = CalendarState::new(date(2025, 11, 19));
        let upcoming = calendar.upcoming(&catalog);
        assert!(!upcoming.is_empty());
        assert!(upcoming.iter().all(|e| e.date() >= date(2025, 11, 19)));
        assert!(upcoming.len() <= UPCOMING_LIMIT);
    }
}
