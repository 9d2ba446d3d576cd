use std::cell::RefCell;

use holical_calendar::HolidayRecord;
use holical_client::{ClientError, FetchOutcome, HolidaySource};
use holical_view::{
    Applied, CalendarState, CalendarView, FETCH_ERROR_MESSAGE, RenderOptions, render_view,
};

/// Answers from a fixed table and records every request it sees.
struct StubSource {
    calls: RefCell<Vec<(i32, String)>>,
}

impl StubSource {
    fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl HolidaySource for StubSource {
    fn fetch(&self, year: i32, country_code: &str) -> FetchOutcome {
        self.calls.borrow_mut().push((year, country_code.to_string()));
        match (year, country_code) {
            (2024, "US") => FetchOutcome::Holidays(vec![HolidayRecord::new(
                "2024-01-01",
                "New Year's Day",
            )]),
            (_, "XX") => FetchOutcome::HttpError { status: 404 },
            _ => FetchOutcome::Failed(ClientError::Transport {
                reason: "offline".to_string(),
            }),
        }
    }
}

fn run(state: &mut CalendarState, source: &impl HolidaySource, request: holical_view::FetchRequest) -> Applied {
    let outcome = source.fetch(request.year(), request.location());
    state.apply_fetch_result(&request, outcome)
}

#[test]
fn successful_fetch_marks_new_years_day() {
    let source = StubSource::new();
    let mut state = CalendarState::new(2024, "US");
    let request = state.current_request();
    assert_eq!(run(&mut state, &source, request), Applied::Updated);

    let CalendarView::Grid { months, holidays, .. } = state.view() else {
        panic!("expected grid view");
    };
    assert_eq!(holidays.len(), 1);

    let january = &months[0];
    assert!(january.days[0].is_holiday);
    assert_eq!(january.days[0].holiday_name.as_deref(), Some("New Year's Day"));

    let non_holidays = months
        .iter()
        .flat_map(|m| &m.days)
        .filter(|c| !c.is_holiday)
        .count();
    assert_eq!(non_holidays, 365);
}

#[test]
fn not_found_suppresses_grid() {
    let source = StubSource::new();
    let mut state = CalendarState::new(2024, "US");
    let request = state.current_request();
    run(&mut state, &source, request);

    let request = state.set_location("xx");
    assert_eq!(run(&mut state, &source, request), Applied::Failed);
    assert!(state.is_error());

    let view = state.view();
    assert!(view.is_error());
    let text = render_view(&view, &RenderOptions::default());
    assert_eq!(text.matches(FETCH_ERROR_MESSAGE).count(), 2);
    assert!(!text.contains("January"));
}

#[test]
fn recovering_after_error() {
    let source = StubSource::new();
    let mut state = CalendarState::new(2024, "XX");
    let request = state.current_request();
    run(&mut state, &source, request);
    assert!(state.is_error());

    let request = state.set_location("US");
    run(&mut state, &source, request);
    assert!(!state.is_error());
    assert!(render_view(&state.view(), &RenderOptions::default()).contains("New Year's Day"));
}

#[test]
fn every_input_change_fetches_once() {
    let source = StubSource::new();
    let mut state = CalendarState::new(2024, "US");
    let request = state.current_request();
    run(&mut state, &source, request);
    let request = state.set_year(2025);
    run(&mut state, &source, request);
    let request = state.set_location("de");
    run(&mut state, &source, request);

    assert_eq!(
        *source.calls.borrow(),
        [
            (2024, "US".to_string()),
            (2025, "US".to_string()),
            (2025, "DE".to_string()),
        ]
    );
}

#[test]
fn out_of_order_resolution_keeps_latest_inputs() {
    let source = StubSource::new();
    let mut state = CalendarState::new(2023, "US");
    let first = state.current_request();
    let second = state.set_year(2024);

    // Issue both, resolve the latest first.
    let first_outcome = source.fetch(first.year(), first.location());
    let second_outcome = source.fetch(second.year(), second.location());
    assert_eq!(state.apply_fetch_result(&second, second_outcome), Applied::Updated);
    assert_eq!(state.apply_fetch_result(&first, first_outcome), Applied::Stale);

    assert!(!state.is_error());
    assert_eq!(state.holidays()[0].name, "New Year's Day");
}

#[test]
fn rendered_grid_includes_list_and_legend_marks() {
    let source = StubSource::new();
    let mut state = CalendarState::new(2024, "US");
    let request = state.current_request();
    run(&mut state, &source, request);

    let text = render_view(&state.view(), &RenderOptions::default());
    assert!(text.starts_with("Public Holiday Calendar: 2024 (US)\n"));
    assert!(text.contains("[1]"));
    assert!(text.contains("Date        Description"));
    assert!(text.contains("2024-01-01  New Year's Day"));

    let without_list = render_view(
        &state.view(),
        &RenderOptions {
            columns: 4,
            show_list: false,
        },
    );
    assert!(!without_list.contains("Description"));
}
