//! Quarter-by-week grid computation. Weeks start on Monday and are attributed
//! to the month containing their Thursday, per the ISO convention. Everything
//! here is a pure function of `(year, quarter)` and the task list.

use crate::model::Task;
use chrono::{Datelike, Duration as ChronoDuration, Month, NaiveDate, Weekday};

pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

fn month_index(month: Month) -> usize {
    month.number_from_month() as usize - 1
}

/// A week identified by its position within a year. The year is the one the
/// week's Monday falls in, which is also the year whose tally counts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekStamp {
    pub week: u32,
    pub year: i32,
}

/// Date arithmetic the grid depends on, injectable so the engine can be
/// exercised against a deterministic implementation.
pub trait CalendarMath {
    fn week_stamp(&self, date: NaiveDate) -> WeekStamp;
    fn quarter_of(&self, date: NaiveDate) -> u8;
}

/// Monday-start weeks numbered by their Monday's position in the year. This
/// matches the ordering `WeekTally` produces, so week labels and task week
/// stamps can never disagree.
#[derive(Debug, Clone, Copy, Default)]
pub struct MondayWeekMath;

impl CalendarMath for MondayWeekMath {
    fn week_stamp(&self, date: NaiveDate) -> WeekStamp {
        let monday =
            date - ChronoDuration::days(date.weekday().num_days_from_monday() as i64);
        let first_monday = first_monday_ordinal0(monday.year());
        WeekStamp {
            week: (monday.ordinal0() - first_monday) / 7 + 1,
            year: monday.year(),
        }
    }

    fn quarter_of(&self, date: NaiveDate) -> u8 {
        (date.month0() / 3) as u8 + 1
    }
}

fn first_monday_ordinal0(year: i32) -> u32 {
    match NaiveDate::from_ymd_opt(year, 1, 1) {
        Some(jan1) => (7 - jan1.weekday().num_days_from_monday()) % 7,
        None => 0,
    }
}

/// How many calendar weeks each month of one year owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekTally {
    counts: [u32; 12],
}

impl WeekTally {
    /// Walks every day of the year. Each Monday opens a week, attributed to
    /// the month of that week's Thursday. A Thursday that lands in January of
    /// the following year keeps its week in December, so the total always
    /// equals the number of Mondays in the year.
    pub fn for_year(year: i32) -> Self {
        let mut counts = [0u32; 12];
        let Some(mut day) = NaiveDate::from_ymd_opt(year, 1, 1) else {
            return WeekTally { counts };
        };
        while day.year() == year {
            if day.weekday() == Weekday::Mon {
                let thursday = day + ChronoDuration::days(3);
                if thursday.year() == year {
                    counts[thursday.month0() as usize] += 1;
                } else {
                    counts[11] += 1;
                }
            }
            day = match day.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        WeekTally { counts }
    }

    pub fn count(&self, month: Month) -> u32 {
        self.counts[month_index(month)]
    }

    /// Number of weeks owned by months strictly before `month`.
    pub fn weeks_before(&self, month: Month) -> u32 {
        self.counts[..month_index(month)].iter().sum()
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuarterStep {
    Forward,
    Back,
}

/// The authoritative view state: which quarter of which year is on screen.
/// Transitions are pure; the visible months are derived from the quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarViewState {
    pub year: i32,
    pub quarter: u8,
}

impl CalendarViewState {
    pub fn for_date(math: &impl CalendarMath, date: NaiveDate) -> Self {
        CalendarViewState {
            year: date.year(),
            quarter: math.quarter_of(date),
        }
    }

    pub fn advanced(self, step: QuarterStep) -> Self {
        match step {
            QuarterStep::Forward => {
                if self.quarter == 4 {
                    CalendarViewState {
                        year: self.year + 1,
                        quarter: 1,
                    }
                } else {
                    CalendarViewState {
                        quarter: self.quarter + 1,
                        ..self
                    }
                }
            }
            QuarterStep::Back => {
                if self.quarter == 1 {
                    CalendarViewState {
                        year: self.year - 1,
                        quarter: 4,
                    }
                } else {
                    CalendarViewState {
                        quarter: self.quarter - 1,
                        ..self
                    }
                }
            }
        }
    }

    pub fn months_visible(self) -> [Month; 3] {
        let first = (self.quarter as usize - 1) * 3;
        [MONTHS[first], MONTHS[first + 1], MONTHS[first + 2]]
    }

    pub fn weeks_in_quarter(self, tally: &WeekTally) -> u32 {
        self.months_visible()
            .iter()
            .map(|month| tally.count(*month))
            .sum()
    }
}

/// Layout descriptor for the grid: how many equal-width columns to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridColumns {
    pub count: u16,
}

impl Default for GridColumns {
    fn default() -> Self {
        GridColumns { count: 13 }
    }
}

/// Total over every input; quarters outside the expected 12..14 week range
/// fall back to the 13-column layout rather than failing.
pub fn resolve_columns(weeks_in_quarter: u32) -> GridColumns {
    match weeks_in_quarter {
        12 | 13 | 14 => GridColumns {
            count: weeks_in_quarter as u16,
        },
        _ => GridColumns::default(),
    }
}

/// Week number of the first visible week. Shared by the label sequencer and
/// the task mapper so both agree on where the window starts.
pub fn first_visible_week(state: CalendarViewState, tally: &WeekTally) -> u32 {
    tally.weeks_before(state.months_visible()[0]) + 1
}

pub fn week_labels(state: CalendarViewState, tally: &WeekTally) -> Vec<u32> {
    let first = first_visible_week(state, tally);
    (first..first + state.weeks_in_quarter(tally)).collect()
}

/// One header cell per visible month, spanning the weeks that month owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSegment {
    pub label: &'static str,
    pub span: u32,
}

pub fn month_segments(state: CalendarViewState, tally: &WeekTally) -> Vec<MonthSegment> {
    state
        .months_visible()
        .iter()
        .map(|month| MonthSegment {
            label: month.name(),
            span: tally.count(*month),
        })
        .collect()
}

/// Display payload carried by highlighted cells, for the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSummary {
    pub name: String,
    pub start: String,
    pub end: String,
}

impl TaskSummary {
    fn for_task(task: &Task) -> Self {
        TaskSummary {
            name: task.name.clone(),
            start: task.start_date.format("%m-%d-%Y").to_string(),
            end: task.end_date.format("%m-%d-%Y").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeekCell {
    Plain,
    Highlight(TaskSummary),
}

impl WeekCell {
    pub fn is_highlight(&self) -> bool {
        matches!(self, WeekCell::Highlight(_))
    }
}

/// One cell per visible week, in label order. A cell is highlighted when its
/// week number falls inside the task's week range and both task dates lie in
/// the viewed calendar year.
pub fn map_task_to_cells(
    math: &impl CalendarMath,
    task: &Task,
    state: CalendarViewState,
    tally: &WeekTally,
) -> Vec<WeekCell> {
    let first = first_visible_week(state, tally);
    let weeks = state.weeks_in_quarter(tally);
    let start = math.week_stamp(task.start_date);
    let end = math.week_stamp(task.end_date);
    // A week straddling New Year is stamped with the neighboring year; clamp
    // both ends into this year's numbering so the range cannot wrap.
    let start_week = if start.year < task.start_date.year() {
        1
    } else {
        start.week
    };
    let end_week = if end.year > task.end_date.year() {
        53
    } else if end.year < task.end_date.year() {
        1
    } else {
        end.week
    };
    let in_view_year =
        task.start_date.year() == state.year && task.end_date.year() == state.year;
    (first..first + weeks)
        .map(|week| {
            if in_view_year && week >= start_week && week <= end_week {
                WeekCell::Highlight(TaskSummary::for_task(task))
            } else {
                WeekCell::Plain
            }
        })
        .collect()
}

/// Facade over the pure pieces: owns the current view state plus the week
/// tally for its year, recomputed (or reused) on every transition. Before
/// `initialize` every derived output is empty.
pub struct QuarterEngine<M: CalendarMath = MondayWeekMath> {
    math: M,
    view: Option<View>,
}

struct View {
    state: CalendarViewState,
    tally: WeekTally,
}

impl QuarterEngine<MondayWeekMath> {
    pub fn new() -> Self {
        QuarterEngine {
            math: MondayWeekMath,
            view: None,
        }
    }
}

impl Default for QuarterEngine<MondayWeekMath> {
    fn default() -> Self {
        QuarterEngine::new()
    }
}

impl<M: CalendarMath> QuarterEngine<M> {
    pub fn with_math(math: M) -> Self {
        QuarterEngine { math, view: None }
    }

    pub fn initialize(&mut self, today: NaiveDate) {
        let state = CalendarViewState::for_date(&self.math, today);
        self.set_state(state);
    }

    pub fn advance_quarter(&mut self, step: QuarterStep) {
        if let Some(view) = &self.view {
            self.set_state(view.state.advanced(step));
        }
    }

    fn set_state(&mut self, state: CalendarViewState) {
        let tally = match &self.view {
            Some(view) if view.state.year == state.year => view.tally,
            _ => WeekTally::for_year(state.year),
        };
        self.view = Some(View { state, tally });
    }

    pub fn state(&self) -> Option<CalendarViewState> {
        self.view.as_ref().map(|view| view.state)
    }

    pub fn visible_months(&self) -> Vec<Month> {
        match &self.view {
            Some(view) => view.state.months_visible().to_vec(),
            None => Vec::new(),
        }
    }

    pub fn weeks_in_quarter(&self) -> u32 {
        self.view
            .as_ref()
            .map(|view| view.state.weeks_in_quarter(&view.tally))
            .unwrap_or(0)
    }

    pub fn grid_columns(&self) -> GridColumns {
        resolve_columns(self.weeks_in_quarter())
    }

    pub fn week_labels(&self) -> Vec<u32> {
        match &self.view {
            Some(view) => week_labels(view.state, &view.tally),
            None => Vec::new(),
        }
    }

    pub fn month_segments(&self) -> Vec<MonthSegment> {
        match &self.view {
            Some(view) => month_segments(view.state, &view.tally),
            None => Vec::new(),
        }
    }

    pub fn task_highlights(&self, task: &Task) -> Vec<WeekCell> {
        match &self.view {
            Some(view) => map_task_to_cells(&self.math, task, view.state, &view.tally),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(name: &str, start: NaiveDate, end: NaiveDate) -> Task {
        Task::new(name, start, end).unwrap()
    }

    fn mondays_in_year(year: i32) -> u32 {
        let mut day = date(year, 1, 1);
        let mut count = 0;
        while day.year() == year {
            if day.weekday() == Weekday::Mon {
                count += 1;
            }
            day = day.succ_opt().unwrap();
        }
        count
    }

    #[test]
    fn tally_total_equals_monday_count() {
        for year in 2015..=2035 {
            let tally = WeekTally::for_year(year);
            assert_eq!(
                tally.total(),
                mondays_in_year(year),
                "tally total mismatch for {year}"
            );
        }
    }

    #[test]
    fn tally_2024_per_month() {
        // 2024 opens on a Monday and is a leap year: 53 Mondays.
        let tally = WeekTally::for_year(2024);
        let expected = [4, 5, 4, 4, 5, 4, 4, 5, 4, 5, 4, 5];
        for (month, want) in MONTHS.iter().zip(expected) {
            assert_eq!(tally.count(*month), want, "month {}", month.name());
        }
        assert_eq!(tally.total(), 53);
    }

    #[test]
    fn tally_keeps_year_end_spill_week_in_december() {
        // Monday 2025-12-29 has its Thursday on 2026-01-01; the week still
        // counts toward December 2025.
        let tally = WeekTally::for_year(2025);
        assert_eq!(tally.count(Month::December), 5);
        assert_eq!(tally.total(), 52);
    }

    #[test]
    fn weeks_before_accumulates() {
        let tally = WeekTally::for_year(2024);
        assert_eq!(tally.weeks_before(Month::January), 0);
        assert_eq!(tally.weeks_before(Month::April), 13);
        assert_eq!(tally.weeks_before(Month::October), 39);
    }

    #[test]
    fn quarters_always_span_12_to_14_weeks() {
        for year in 2015..=2035 {
            let tally = WeekTally::for_year(year);
            let mut sum = 0;
            for quarter in 1..=4 {
                let state = CalendarViewState { year, quarter };
                let weeks = state.weeks_in_quarter(&tally);
                assert!(
                    (12..=14).contains(&weeks),
                    "{year} Q{quarter} spans {weeks} weeks"
                );
                sum += weeks;
            }
            assert_eq!(sum, tally.total());
        }
    }

    #[test]
    fn resolve_columns_is_total() {
        assert_eq!(resolve_columns(12).count, 12);
        assert_eq!(resolve_columns(13).count, 13);
        assert_eq!(resolve_columns(14).count, 14);
        for odd in [0, 1, 7, 11, 15, 52, u32::MAX] {
            assert_eq!(resolve_columns(odd).count, 13);
        }
    }

    #[test]
    fn advance_round_trips() {
        for year in [1999, 2000, 2024, 2025, 2031] {
            for quarter in 1..=4 {
                let state = CalendarViewState { year, quarter };
                assert_eq!(
                    state.advanced(QuarterStep::Forward).advanced(QuarterStep::Back),
                    state
                );
                assert_eq!(
                    state.advanced(QuarterStep::Back).advanced(QuarterStep::Forward),
                    state
                );
            }
        }
    }

    #[test]
    fn advance_wraps_at_year_boundaries() {
        let q4 = CalendarViewState {
            year: 2024,
            quarter: 4,
        };
        assert_eq!(
            q4.advanced(QuarterStep::Forward),
            CalendarViewState {
                year: 2025,
                quarter: 1
            }
        );
        let q1 = CalendarViewState {
            year: 2024,
            quarter: 1,
        };
        assert_eq!(
            q1.advanced(QuarterStep::Back),
            CalendarViewState {
                year: 2023,
                quarter: 4
            }
        );
    }

    #[test]
    fn months_visible_follow_the_quarter() {
        let state = CalendarViewState {
            year: 2024,
            quarter: 1,
        };
        assert_eq!(
            state.months_visible(),
            [Month::January, Month::February, Month::March]
        );
        let state = CalendarViewState {
            year: 2024,
            quarter: 4,
        };
        assert_eq!(
            state.months_visible(),
            [Month::October, Month::November, Month::December]
        );
    }

    #[test]
    fn view_state_from_date() {
        let math = MondayWeekMath;
        assert_eq!(
            CalendarViewState::for_date(&math, date(2024, 2, 15)),
            CalendarViewState {
                year: 2024,
                quarter: 1
            }
        );
        assert_eq!(
            CalendarViewState::for_date(&math, date(2024, 10, 1)),
            CalendarViewState {
                year: 2024,
                quarter: 4
            }
        );
    }

    #[test]
    fn q2_labels_start_after_first_quarter_weeks() {
        let tally = WeekTally::for_year(2024);
        let state = CalendarViewState {
            year: 2024,
            quarter: 2,
        };
        let labels = week_labels(state, &tally);
        assert_eq!(labels.first().copied(), Some(1 + tally.weeks_before(Month::April)));
        assert_eq!(labels.first().copied(), Some(14));
        assert_eq!(labels.len() as u32, state.weeks_in_quarter(&tally));
    }

    #[test]
    fn month_segments_span_their_weeks() {
        let tally = WeekTally::for_year(2024);
        let state = CalendarViewState {
            year: 2024,
            quarter: 4,
        };
        let segments = month_segments(state, &tally);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].label, "October");
        assert_eq!(segments[0].span, 5);
        assert_eq!(segments[1].span, 4);
        assert_eq!(segments[2].span, 5);
        let total: u32 = segments.iter().map(|s| s.span).sum();
        assert_eq!(total, state.weeks_in_quarter(&tally));
    }

    #[test]
    fn task_outside_the_viewed_quarter_stays_plain() {
        let math = MondayWeekMath;
        let tally = WeekTally::for_year(2024);
        let state = CalendarViewState {
            year: 2024,
            quarter: 1,
        };
        let october = task("october", date(2024, 10, 10), date(2024, 10, 12));
        let cells = map_task_to_cells(&math, &october, state, &tally);
        assert_eq!(cells.len() as u32, state.weeks_in_quarter(&tally));
        assert!(cells.iter().all(|cell| !cell.is_highlight()));
    }

    #[test]
    fn single_week_task_lights_exactly_one_cell() {
        let math = MondayWeekMath;
        let tally = WeekTally::for_year(2024);
        let state = CalendarViewState {
            year: 2024,
            quarter: 4,
        };
        let october = task("october", date(2024, 10, 10), date(2024, 10, 12));
        let cells = map_task_to_cells(&math, &october, state, &tally);
        let labels = week_labels(state, &tally);
        let lit: Vec<u32> = labels
            .iter()
            .zip(&cells)
            .filter(|(_, cell)| cell.is_highlight())
            .map(|(label, _)| *label)
            .collect();
        // Oct 10 and Oct 12 share the week of Monday 2024-10-07, week 41.
        assert_eq!(lit, vec![41]);
    }

    #[test]
    fn multi_week_task_lights_a_contiguous_run() {
        let math = MondayWeekMath;
        let tally = WeekTally::for_year(2024);
        let state = CalendarViewState {
            year: 2024,
            quarter: 2,
        };
        let sprint = task("sprint", date(2024, 4, 3), date(2024, 4, 22));
        let cells = map_task_to_cells(&math, &sprint, state, &tally);
        let labels = week_labels(state, &tally);
        let lit: Vec<u32> = labels
            .iter()
            .zip(&cells)
            .filter(|(_, cell)| cell.is_highlight())
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(lit, vec![14, 15, 16, 17]);
    }

    #[test]
    fn matching_weeks_in_another_year_stay_plain() {
        let math = MondayWeekMath;
        let tally = WeekTally::for_year(2024);
        let state = CalendarViewState {
            year: 2024,
            quarter: 4,
        };
        let last_year = task("last year", date(2023, 10, 10), date(2023, 10, 12));
        let cells = map_task_to_cells(&math, &last_year, state, &tally);
        assert!(cells.iter().all(|cell| !cell.is_highlight()));
    }

    #[test]
    fn year_end_task_reaches_the_spill_week() {
        // Dec 30 2025 sits in the week of Monday Dec 29, whose Thursday is in
        // 2026; the Q4 window still shows it as the last visible week.
        let math = MondayWeekMath;
        let tally = WeekTally::for_year(2025);
        let state = CalendarViewState {
            year: 2025,
            quarter: 4,
        };
        let labels = week_labels(state, &tally);
        assert_eq!(labels, (39..=52).collect::<Vec<u32>>());
        let wrap_up = task("wrap up", date(2025, 12, 20), date(2025, 12, 30));
        let cells = map_task_to_cells(&math, &wrap_up, state, &tally);
        let lit: Vec<u32> = labels
            .iter()
            .zip(&cells)
            .filter(|(_, cell)| cell.is_highlight())
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(lit, vec![50, 51, 52]);
    }

    #[test]
    fn new_year_task_starting_in_the_previous_years_week() {
        // Jan 1 2025 falls in the week of Monday Dec 30 2024. That week is not
        // part of 2025's grid, so the highlight starts at week 1.
        let math = MondayWeekMath;
        let tally = WeekTally::for_year(2025);
        let state = CalendarViewState {
            year: 2025,
            quarter: 1,
        };
        let kickoff = task("kickoff", date(2025, 1, 1), date(2025, 1, 20));
        let cells = map_task_to_cells(&math, &kickoff, state, &tally);
        let labels = week_labels(state, &tally);
        assert_eq!(labels, (1..=12).collect::<Vec<u32>>());
        let lit: Vec<u32> = labels
            .iter()
            .zip(&cells)
            .filter(|(_, cell)| cell.is_highlight())
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(lit, vec![1, 2, 3]);
    }

    #[test]
    fn task_inside_the_spill_week_lights_at_most_one_cell() {
        // Jan 1-3 2025 sit entirely in the week of Monday Dec 30 2024, which
        // precedes week 1 of 2025's grid. Both ends collapse to week 1 rather
        // than the range wrapping across the whole year.
        let math = MondayWeekMath;
        let tally = WeekTally::for_year(2025);
        let state = CalendarViewState {
            year: 2025,
            quarter: 1,
        };
        let holiday = task("holiday", date(2025, 1, 1), date(2025, 1, 3));
        let cells = map_task_to_cells(&math, &holiday, state, &tally);
        let labels = week_labels(state, &tally);
        let lit: Vec<u32> = labels
            .iter()
            .zip(&cells)
            .filter(|(_, cell)| cell.is_highlight())
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(lit, vec![1]);
        for quarter in 2..=4 {
            let state = CalendarViewState {
                year: 2025,
                quarter,
            };
            let cells = map_task_to_cells(&math, &holiday, state, &tally);
            assert!(
                cells.iter().all(|cell| !cell.is_highlight()),
                "Q{quarter} should stay plain"
            );
        }
    }

    #[test]
    fn highlight_carries_the_display_payload() {
        let math = MondayWeekMath;
        let tally = WeekTally::for_year(2024);
        let state = CalendarViewState {
            year: 2024,
            quarter: 4,
        };
        let october = task("october", date(2024, 10, 10), date(2024, 10, 12));
        let cells = map_task_to_cells(&math, &october, state, &tally);
        let summary = cells
            .iter()
            .find_map(|cell| match cell {
                WeekCell::Highlight(summary) => Some(summary.clone()),
                WeekCell::Plain => None,
            })
            .unwrap();
        assert_eq!(summary.name, "october");
        assert_eq!(summary.start, "10-10-2024");
        assert_eq!(summary.end, "10-12-2024");
    }

    #[test]
    fn week_stamp_matches_label_numbering() {
        let math = MondayWeekMath;
        // 2024 starts on a Monday, so Jan 1 opens week 1.
        assert_eq!(
            math.week_stamp(date(2024, 1, 1)),
            WeekStamp {
                week: 1,
                year: 2024
            }
        );
        assert_eq!(
            math.week_stamp(date(2024, 10, 10)),
            WeekStamp {
                week: 41,
                year: 2024
            }
        );
        // Jan 1 2025 belongs to the week of Monday Dec 30 2024.
        assert_eq!(
            math.week_stamp(date(2025, 1, 1)),
            WeekStamp {
                week: 53,
                year: 2024
            }
        );
        assert_eq!(
            math.week_stamp(date(2025, 1, 6)),
            WeekStamp {
                week: 1,
                year: 2025
            }
        );
    }

    #[test]
    fn engine_is_empty_before_initialize() {
        let engine = QuarterEngine::new();
        assert!(engine.state().is_none());
        assert!(engine.visible_months().is_empty());
        assert!(engine.week_labels().is_empty());
        assert!(engine.month_segments().is_empty());
        let t = task("t", date(2024, 1, 1), date(2024, 1, 9));
        assert!(engine.task_highlights(&t).is_empty());
        assert_eq!(engine.grid_columns(), GridColumns::default());
    }

    #[test]
    fn engine_navigation_and_rerender_are_stable() {
        let mut engine = QuarterEngine::new();
        engine.initialize(date(2024, 2, 15));
        assert_eq!(
            engine.state(),
            Some(CalendarViewState {
                year: 2024,
                quarter: 1
            })
        );
        engine.advance_quarter(QuarterStep::Back);
        assert_eq!(
            engine.state(),
            Some(CalendarViewState {
                year: 2023,
                quarter: 4
            })
        );
        engine.advance_quarter(QuarterStep::Forward);
        let first = engine.week_labels();
        let second = engine.week_labels();
        assert_eq!(first, second);
        assert_eq!(engine.grid_columns().count as usize, first.len());
    }
}
