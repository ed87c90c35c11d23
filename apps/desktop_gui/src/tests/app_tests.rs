use std::sync::Arc;

use catalog::Catalog;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use crossbeam_channel::{bounded, Receiver, Sender};
use shared::{
    domain::{CandidateId, MatchDecision, StudyType},
    protocol::{BookingConfirmation, ConfirmationId, TextFilter},
};
use study_core::{flows::BookingFlow, screens::Screen, AppOptions, BookingError};

use super::*;
use crate::ui::widgets::StatusBannerSeverity;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 17).expect("date")
}

struct Harness {
    app: ChavrutaApp,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
}

fn harness_with_capacity(capacity: usize) -> Harness {
    let (cmd_tx, cmd_rx) = bounded(capacity);
    let (ui_tx, ui_rx) = bounded(16);
    let app = ChavrutaApp::new(
        cmd_tx,
        ui_rx,
        Arc::new(Catalog::fixtures()),
        AppOptions::starting_today(today()),
    );
    Harness { app, cmd_rx, ui_tx }
}

fn harness() -> Harness {
    harness_with_capacity(8)
}

fn ready_to_submit(app: &mut ChavrutaApp) {
    app.apply_action(UiAction::Login);
    app.apply_action(UiAction::Navigate(ViewId::ScheduleSession));
    let Screen::ScheduleSession(flow) = app.state.screen_mut() else {
        panic!("schedule screen not mounted");
    };
    flow.choose_study_type(StudyType::Mishna);
    flow.choose_date(today()).expect("date");
    flow.choose_time(NaiveTime::from_hms_opt(8, 0, 0).expect("time"))
        .expect("time");
    for _ in 0..3 {
        app.apply_action(UiAction::Wizard(WizardNav::Next));
    }
}

fn confirmation() -> BookingConfirmation {
    BookingConfirmation {
        confirmation_id: ConfirmationId("CHV-0001".into()),
        starts_at: NaiveDateTime::new(today(), NaiveTime::from_hms_opt(8, 0, 0).expect("time")),
        duration_minutes: 60,
    }
}

#[test]
fn gated_navigation_keeps_view_and_explains() {
    let mut h = harness();
    h.app.apply_action(UiAction::Navigate(ViewId::Calendar));

    assert_eq!(h.app.state.current_view(), ViewId::Pricing);
    let banner = h.app.banner.as_ref().expect("banner");
    assert_eq!(banner.severity, StatusBannerSeverity::Error);
    assert!(banner.message.contains("Calendário"));
}

#[test]
fn submitting_queues_booking_and_confirmation_returns_home() {
    let mut h = harness();
    ready_to_submit(&mut h.app);
    h.app.apply_action(UiAction::Wizard(WizardNav::Submit));

    let Ok(BackendCommand::SubmitBooking(request)) = h.cmd_rx.try_recv() else {
        panic!("booking not queued");
    };
    assert_eq!(request.duration_minutes(), 60);

    h.ui_tx
        .send(UiEvent::BookingFinished(Ok(confirmation())))
        .expect("send");
    h.app.process_ui_events();

    assert_eq!(h.app.state.current_view(), ViewId::Dashboard);
    let banner = h.app.banner.as_ref().expect("banner");
    assert_eq!(banner.severity, StatusBannerSeverity::Info);
    assert!(banner.message.contains("CHV-0001"));
}

#[test]
fn failed_booking_shows_error_and_allows_retry() {
    let mut h = harness();
    ready_to_submit(&mut h.app);
    h.app.apply_action(UiAction::Wizard(WizardNav::Submit));
    h.cmd_rx.try_recv().expect("queued");

    h.app.handle_event(UiEvent::BookingFinished(Err(BookingError::SlotUnavailable(
        confirmation().starts_at,
    ))));

    assert_eq!(h.app.state.current_view(), ViewId::ScheduleSession);
    let banner = h.app.banner.as_ref().expect("banner");
    assert!(banner.message.starts_with("Conflito"));

    h.app.apply_action(UiAction::Wizard(WizardNav::Submit));
    assert!(matches!(
        h.cmd_rx.try_recv(),
        Ok(BackendCommand::SubmitBooking(_))
    ));
}

#[test]
fn pending_booking_keeps_the_user_on_the_wizard() {
    let mut h = harness();
    ready_to_submit(&mut h.app);
    h.app.apply_action(UiAction::Wizard(WizardNav::Submit));
    h.cmd_rx.try_recv().expect("queued");

    h.app.apply_action(UiAction::Navigate(ViewId::Calendar));
    h.app.apply_action(UiAction::Logout);
    assert_eq!(h.app.state.current_view(), ViewId::ScheduleSession);
    assert!(h.app.state.is_authenticated());
    assert!(h.app.status.contains("Aguarde"));

    h.app.handle_event(UiEvent::BookingFinished(Ok(confirmation())));
    let banner = h.app.banner.as_ref().expect("banner");
    assert!(banner.message.contains("CHV-0001"));
    assert_eq!(h.app.state.current_view(), ViewId::Dashboard);
}

#[test]
fn full_command_queue_fails_the_submission_instead_of_hanging() {
    let mut h = harness_with_capacity(1);
    ready_to_submit(&mut h.app);
    h.app
        .apply_action(UiAction::SearchTexts(TextFilter::query("filler")));
    h.app.apply_action(UiAction::Wizard(WizardNav::Submit));

    let Screen::ScheduleSession(flow) = h.app.state.screen() else {
        panic!("schedule screen not mounted");
    };
    assert!(!flow.submission().is_pending());
    assert!(h.app.banner.is_some());
}

#[test]
fn library_results_apply_only_to_current_filter() {
    let mut h = harness();
    h.app.apply_action(UiAction::Login);
    h.app.apply_action(UiAction::Navigate(ViewId::Library));
    let Screen::Library(library) = h.app.state.screen_mut() else {
        panic!("library not mounted");
    };
    let filter = library.set_text_query("talmud").expect("changed");
    let stale = TextFilter::query("tal");

    h.app.handle_event(UiEvent::TextsLoaded {
        filter: stale,
        texts: Vec::new(),
    });
    let Screen::Library(library) = h.app.state.screen() else {
        panic!("library not mounted");
    };
    assert!(!library.texts().is_empty());

    h.app.handle_event(UiEvent::TextsLoaded {
        filter,
        texts: Vec::new(),
    });
    let Screen::Library(library) = h.app.state.screen() else {
        panic!("library not mounted");
    };
    assert!(library.texts().is_empty());
}

#[test]
fn recorded_decision_asks_for_next_candidate() {
    let mut h = harness();
    h.app.apply_action(UiAction::Login);
    h.app.apply_action(UiAction::Navigate(ViewId::Matchmaking));

    h.app.handle_event(UiEvent::DecisionRecorded {
        candidate: CandidateId(1),
        decision: MatchDecision::Like,
    });
    assert!(matches!(
        h.cmd_rx.try_recv(),
        Ok(BackendCommand::NextCandidate(_))
    ));

    h.app.handle_event(UiEvent::CandidateSuggested(None));
    assert!(h
        .app
        .matchmaking_hint
        .as_deref()
        .is_some_and(|hint| hint.contains("todos os perfis")));
}

#[test]
fn backend_info_updates_status_line() {
    let mut h = harness();
    h.ui_tx
        .send(UiEvent::Info("Backend worker ready".into()))
        .expect("send");
    h.app.process_ui_events();
    assert_eq!(h.app.status, "Backend worker ready");
}

#[test]
fn leaving_first_wizard_step_returns_to_dashboard() {
    let mut h = harness();
    h.app.apply_action(UiAction::Login);
    h.app.apply_action(UiAction::Navigate(ViewId::RabbiConsultation));
    h.app.apply_action(UiAction::Wizard(WizardNav::Back));
    assert_eq!(h.app.state.current_view(), ViewId::Dashboard);
}
