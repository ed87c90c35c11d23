use std::{sync::Arc, time::Duration};

use catalog::Catalog;
use chrono::Local;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{protocol::BookingConfirmation, ViewId};
use study_core::{
    screens::Screen, AppOptions, AppState, BookingError, BookingOutcome, NavigationOutcome,
    Retreat,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{UiError, UiErrorContext, UiEvent},
    orchestration::dispatch_backend_command,
};
use crate::ui::{
    screens::{self, UiAction},
    widgets::{self, StatusBanner, WizardNav},
};

/// Views listed in the navigation panel once logged in.
const NAV_VIEWS: [ViewId; 11] = [
    ViewId::Dashboard,
    ViewId::StudyRoom,
    ViewId::Library,
    ViewId::Matchmaking,
    ViewId::ScheduleSession,
    ViewId::RabbiConsultation,
    ViewId::WeeklyShiur,
    ViewId::Calendar,
    ViewId::DailyQuiz,
    ViewId::Assessment,
    ViewId::Profile,
];

const PENDING_BOOKING_NOTICE: &str = "Aguarde a confirmação do agendamento";

pub struct ChavrutaApp {
    state: AppState,
    catalog: Arc<Catalog>,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    /// Footer line with the latest backend or navigation notice.
    status: String,
    banner: Option<StatusBanner>,
    matchmaking_hint: Option<String>,
}

impl ChavrutaApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        catalog: Arc<Catalog>,
        options: AppOptions,
    ) -> Self {
        Self {
            state: AppState::new(catalog.clone(), options),
            catalog,
            cmd_tx,
            ui_rx,
            status: String::new(),
            banner: None,
            matchmaking_hint: None,
        }
    }

    pub fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => self.status = message,
            UiEvent::Error(err) => self.show_error(&err),
            UiEvent::BookingFinished(result) => self.finish_booking(result),
            UiEvent::TextsLoaded { filter, texts } => {
                if let Screen::Library(library) = self.state.screen_mut() {
                    library.apply_texts(&filter, texts);
                }
            }
            UiEvent::VideosLoaded { filter, videos } => {
                if let Screen::Library(library) = self.state.screen_mut() {
                    library.apply_videos(&filter, videos);
                }
            }
            UiEvent::DecisionRecorded { candidate, .. } => {
                self.state.record_decision(candidate);
                let profile = self.state.match_profile().clone();
                self.dispatch(BackendCommand::NextCandidate(profile));
            }
            UiEvent::CandidateSuggested(candidate) => {
                self.matchmaking_hint = Some(match candidate {
                    Some(candidate) => format!("Próxima sugestão: {}", candidate.name),
                    None => "Você já avaliou todos os perfis disponíveis.".to_string(),
                });
            }
        }
    }

    pub fn apply_action(&mut self, action: UiAction) {
        match action {
            UiAction::Navigate(view) => self.navigate(view),
            UiAction::Login => {
                self.state.login();
                self.banner = None;
                self.status = "Sessão iniciada".to_string();
            }
            UiAction::Logout => {
                if self.state.logout() {
                    self.matchmaking_hint = None;
                    self.status = "Sessão encerrada".to_string();
                } else {
                    self.status = PENDING_BOOKING_NOTICE.to_string();
                }
            }
            UiAction::Wizard(WizardNav::Next) => {
                self.state.advance_wizard();
            }
            UiAction::Wizard(WizardNav::Back) => {
                if self.state.retreat_wizard() == Some(Retreat::Exit) {
                    self.on_view_entered();
                }
            }
            UiAction::Wizard(WizardNav::Submit) => self.submit_booking(),
            UiAction::SearchTexts(filter) => self.dispatch(BackendCommand::SearchTexts(filter)),
            UiAction::SearchVideos(filter) => self.dispatch(BackendCommand::SearchVideos(filter)),
            UiAction::RecordDecision {
                candidate,
                decision,
            } => self.dispatch(BackendCommand::RecordDecision {
                candidate,
                decision,
            }),
            UiAction::Notice(message) => self.banner = Some(StatusBanner::error(message)),
        }
    }

    fn navigate(&mut self, view: ViewId) {
        match self.state.navigate(view) {
            NavigationOutcome::Moved { .. } => self.on_view_entered(),
            NavigationOutcome::Unchanged => {}
            NavigationOutcome::RequiresLogin { requested } => {
                self.banner = Some(StatusBanner::error(format!(
                    "Entre na sua conta para acessar {}",
                    requested.title()
                )));
            }
            NavigationOutcome::RequiresLogout { requested } => {
                self.status = format!("Saia da conta para ver {}", requested.title());
            }
            NavigationOutcome::BookingPending { .. } => {
                self.status = PENDING_BOOKING_NOTICE.to_string();
            }
        }
    }

    fn on_view_entered(&mut self) {
        self.banner = None;
        if self.state.current_view() == ViewId::Matchmaking {
            self.matchmaking_hint = None;
        }
    }

    fn submit_booking(&mut self) {
        let Some(request) = self.state.begin_booking() else {
            return;
        };
        let mut status = String::new();
        let cmd = BackendCommand::SubmitBooking(request);
        if !dispatch_backend_command(&self.cmd_tx, cmd, &mut status) {
            // Unblock the confirm step so the user can retry.
            self.finish_booking(Err(BookingError::Unavailable(status)));
        }
    }

    fn finish_booking(&mut self, result: Result<BookingConfirmation, BookingError>) {
        match self.state.finish_booking(result) {
            BookingOutcome::Confirmed(confirmation) => {
                self.banner = Some(StatusBanner::info(screens::confirmation_notice(&confirmation)));
                self.status = format!("Agendamento {} confirmado", confirmation.confirmation_id);
            }
            BookingOutcome::Failed(message) => {
                self.show_error(&UiError::from_message(UiErrorContext::Booking, message));
            }
            BookingOutcome::Discarded => {
                tracing::warn!("booking answer arrived with no pending booking flow");
            }
        }
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        let mut status = String::new();
        if !dispatch_backend_command(&self.cmd_tx, cmd, &mut status) {
            self.banner = Some(StatusBanner::error(status));
        }
    }

    fn show_error(&mut self, err: &UiError) {
        tracing::warn!(context = ?err.context(), category = ?err.category(), "{}", err.message());
        self.banner = Some(StatusBanner::error(format!(
            "{}: {}",
            err.category().label(),
            err.message()
        )));
    }

    fn show_top_bar(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        egui::TopBottomPanel::top("app_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Chavruta Digital").strong().color(widgets::GOLD));
                ui.separator();
                ui.label(self.state.current_view().title());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.state.is_authenticated() {
                        if ui.button("Sair").clicked() {
                            actions.push(UiAction::Logout);
                        }
                    } else {
                        if ui.button("Entrar").clicked() {
                            actions.push(UiAction::Login);
                        }
                        for view in [ViewId::Pricing, ViewId::Landing] {
                            if ui
                                .selectable_label(self.state.current_view() == view, view.title())
                                .clicked()
                            {
                                actions.push(UiAction::Navigate(view));
                            }
                        }
                    }
                });
            });
        });
    }

    fn show_navigation_panel(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        if !self.state.is_authenticated() {
            return;
        }
        egui::SidePanel::left("navigation_panel")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                for view in NAV_VIEWS {
                    let selected = self.state.current_view() == view;
                    if ui
                        .add_sized(
                            [ui.available_width(), 28.0],
                            egui::Button::new(view.title()).selected(selected),
                        )
                        .clicked()
                    {
                        actions.push(UiAction::Navigate(view));
                    }
                }
            });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.weak(&self.status);
            });
        });
    }

    fn show_current_view(&mut self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        if let Some(banner) = self.banner.clone() {
            if widgets::status_banner(ui, &banner) {
                self.banner = None;
            }
            ui.add_space(8.0);
        }

        let catalog = self.catalog.clone();
        let today = self.state.today();
        let match_profile = self.state.match_profile().clone();
        let hint = self.matchmaking_hint.clone();
        match self.state.screen_mut() {
            Screen::Landing => screens::landing(ui, &catalog, actions),
            Screen::Pricing(state) => screens::pricing(ui, state, &catalog, actions),
            Screen::Dashboard => screens::dashboard(ui, &catalog, today, &match_profile, actions),
            Screen::StudyRoom(state) => screens::study_room(ui, state, actions),
            Screen::Library(state) => screens::library(ui, state, &catalog, actions),
            Screen::Matchmaking(deck) => screens::matchmaking(ui, deck, hint.as_deref(), actions),
            Screen::Profile(summary) => {
                screens::profile(ui, summary, &catalog, &match_profile, actions)
            }
            Screen::DailyQuiz(quiz) => screens::daily_quiz(ui, quiz),
            Screen::Assessment(flow) => screens::assessment(ui, flow, actions),
            Screen::ScheduleSession(flow) => screens::schedule_session(ui, flow, today, actions),
            Screen::RabbiConsultation(flow) => {
                screens::rabbi_consultation(ui, flow, today, actions)
            }
            Screen::WeeklyShiur(state) => {
                let now = Local::now().time();
                screens::weekly_shiur(ui, state, &catalog, now, today)
            }
            Screen::Calendar(state) => screens::calendar(ui, state, &catalog),
        }
    }
}

impl eframe::App for ChavrutaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut actions = Vec::new();
        self.show_top_bar(ctx, &mut actions);
        self.show_status_bar(ctx);
        self.show_navigation_panel(ctx, &mut actions);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| self.show_current_view(ui, &mut actions));
        });

        for action in actions {
            self.apply_action(action);
        }

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
