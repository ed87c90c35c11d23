//! Runtime bridge between UI command queue and the async collaborators.

use std::{sync::Arc, thread};

use catalog::Catalog;
use crossbeam_channel::{Receiver, Sender};
use study_core::{
    BookingService, ContentCatalog, InMemoryBookingService, InMemoryContentCatalog,
    InMemoryMatchmaking, MatchmakingService,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Collaborators owned by the backend worker.
pub struct Services {
    pub booking: Box<dyn BookingService>,
    pub content: Box<dyn ContentCatalog>,
    pub matchmaking: Box<dyn MatchmakingService>,
}

impl Services {
    pub fn in_memory(catalog: Arc<Catalog>) -> Self {
        Self {
            booking: Box::new(InMemoryBookingService::new(catalog.clone())),
            content: Box::new(InMemoryContentCatalog::new(catalog.clone())),
            matchmaking: Box::new(InMemoryMatchmaking::new(catalog)),
        }
    }
}

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, catalog: Arc<Catalog>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let services = Services::in_memory(catalog);
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                let event = handle_command(&services, cmd).await;
                if ui_tx.send(event).is_err() {
                    tracing::info!("ui event receiver dropped; backend worker stopping");
                    break;
                }
            }
        });
    });
}

/// Runs one command against the collaborators and turns the answer into the
/// event the UI drains.
pub async fn handle_command(services: &Services, cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::SubmitBooking(request) => {
            tracing::info!(kind = request.kind_name(), "backend: submit booking");
            UiEvent::BookingFinished(services.booking.submit(request).await)
        }
        BackendCommand::SearchTexts(filter) => {
            tracing::info!(query = %filter.query, "backend: search texts");
            match services.content.list_texts(&filter).await {
                Ok(texts) => UiEvent::TextsLoaded { filter, texts },
                Err(err) => UiEvent::Error(UiError::from_message(
                    UiErrorContext::Content,
                    err.to_string(),
                )),
            }
        }
        BackendCommand::SearchVideos(filter) => {
            tracing::info!(query = %filter.query, "backend: search videos");
            match services.content.list_videos(&filter).await {
                Ok(videos) => UiEvent::VideosLoaded { filter, videos },
                Err(err) => UiEvent::Error(UiError::from_message(
                    UiErrorContext::Content,
                    err.to_string(),
                )),
            }
        }
        BackendCommand::RecordDecision {
            candidate,
            decision,
        } => {
            tracing::info!(candidate = candidate.0, %decision, "backend: record decision");
            match services.matchmaking.record_decision(candidate, decision).await {
                Ok(()) => UiEvent::DecisionRecorded {
                    candidate,
                    decision,
                },
                Err(err) => UiEvent::Error(UiError::from_message(
                    UiErrorContext::Matchmaking,
                    err.to_string(),
                )),
            }
        }
        BackendCommand::NextCandidate(profile) => {
            tracing::info!(level = ?profile.level, "backend: next candidate");
            match services.matchmaking.next_candidate(&profile).await {
                Ok(candidate) => UiEvent::CandidateSuggested(candidate),
                Err(err) => UiEvent::Error(UiError::from_message(
                    UiErrorContext::Matchmaking,
                    err.to_string(),
                )),
            }
        }
    }
}
