use async_trait::async_trait;
use catalog::{Candidate, TextMatch, VideoEntry};
use shared::{
    domain::{CandidateId, MatchDecision, StudyInterest, StudyLevel},
    protocol::{BookingConfirmation, BookingRequest, TextFilter, VideoFilter},
};

pub mod app_state;
pub mod error;
pub mod flows;
mod memory;
pub mod router;
pub mod screens;
pub mod wizard;

pub use app_state::{AppOptions, AppState, BookingOutcome};
pub use error::{BookingError, CatalogError, MatchmakingError, SelectionError};
pub use memory::{InMemoryBookingService, InMemoryContentCatalog, InMemoryMatchmaking};
pub use router::{NavigationOutcome, ViewRouter};
pub use wizard::{Advance, AnswerValue, Answers, Retreat, Wizard, WizardPosition};

/// Submits a completed scheduling or consultation wizard.
#[async_trait]
pub trait BookingService: Send + Sync {
    async fn submit(&self, request: BookingRequest) -> Result<BookingConfirmation, BookingError>;
}

#[async_trait]
pub trait ContentCatalog: Send + Sync {
    async fn list_texts(&self, filter: &TextFilter) -> Result<Vec<TextMatch>, CatalogError>;
    async fn list_videos(&self, filter: &VideoFilter) -> Result<Vec<VideoEntry>, CatalogError>;
}

/// Profile the matchmaking deck is built for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchProfile {
    pub level: Option<StudyLevel>,
    pub interests: Vec<StudyInterest>,
}

/// Catalog interest labels that count as covering an assessment interest.
fn interest_labels(interest: StudyInterest) -> &'static [&'static str] {
    match interest {
        StudyInterest::Torah => &["Torá"],
        StudyInterest::Mishna => &["Mishná"],
        StudyInterest::Talmud => &["Talmud", "Guemará", "Rashi", "Tosafot"],
        StudyInterest::Halacha => &["Halachá"],
        StudyInterest::Kabbalah => &["Cabalá", "Kabbalah"],
        StudyInterest::Ethics => &["Ética", "Pirkei Avot"],
        StudyInterest::Philosophy => &["Filosofia", "Rambam"],
        StudyInterest::Parasha => &["Parashat"],
    }
}

impl MatchProfile {
    /// Two points for a level match, one per candidate interest the profile
    /// covers. Zero for the empty profile.
    pub fn affinity(&self, candidate: &Candidate) -> u32 {
        let level = u32::from(self.level == Some(candidate.level)) * 2;
        let shared = candidate
            .interests
            .iter()
            .filter(|label| {
                self.interests.iter().any(|interest| {
                    interest_labels(*interest)
                        .iter()
                        .any(|needle| label.contains(*needle))
                })
            })
            .count();
        level + shared as u32
    }

    /// Closest fits first; ties keep their catalog order.
    pub fn rank<'a>(
        &self,
        candidates: impl IntoIterator<Item = &'a Candidate>,
    ) -> Vec<&'a Candidate> {
        let mut ranked: Vec<&Candidate> = candidates.into_iter().collect();
        ranked.sort_by_key(|candidate| std::cmp::Reverse(self.affinity(candidate)));
        ranked
    }
}

#[async_trait]
pub trait MatchmakingService: Send + Sync {
    /// Next candidate without a recorded decision, `None` once the deck is exhausted.
    async fn next_candidate(
        &self,
        profile: &MatchProfile,
    ) -> Result<Option<Candidate>, MatchmakingError>;
    async fn record_decision(
        &self,
        candidate: CandidateId,
        decision: MatchDecision,
    ) -> Result<(), MatchmakingError>;
}
