//! Backend commands queued from UI to backend worker.

use shared::{
    domain::{CandidateId, MatchDecision},
    protocol::{BookingRequest, TextFilter, VideoFilter},
};
use study_core::MatchProfile;

#[derive(Debug, Clone)]
pub enum BackendCommand {
    SubmitBooking(BookingRequest),
    SearchTexts(TextFilter),
    SearchVideos(VideoFilter),
    RecordDecision {
        candidate: CandidateId,
        decision: MatchDecision,
    },
    NextCandidate(MatchProfile),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::SubmitBooking(_) => "submit_booking",
            BackendCommand::SearchTexts(_) => "search_texts",
            BackendCommand::SearchVideos(_) => "search_videos",
            BackendCommand::RecordDecision { .. } => "record_decision",
            BackendCommand::NextCandidate(_) => "next_candidate",
        }
    }
}
