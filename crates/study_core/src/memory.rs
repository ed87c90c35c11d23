use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use async_trait::async_trait;
use catalog::{Candidate, Catalog, TextMatch, VideoEntry};
use chrono::{Datelike, NaiveDateTime, Weekday};
use shared::{
    domain::{CandidateId, MatchDecision},
    protocol::{
        BookingConfirmation, BookingRequest, ConfirmationId, PartnerRequest, TextFilter,
        VideoFilter,
    },
};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::{
    error::{BookingError, CatalogError, MatchmakingError},
    BookingService, ContentCatalog, MatchProfile, MatchmakingService,
};

#[derive(Default)]
struct BookingLedger {
    next_id: u32,
    by_slot: BTreeMap<NaiveDateTime, BookingRequest>,
}

/// Accepts any free slot and issues sequential `CHV-NNNN` confirmations.
pub struct InMemoryBookingService {
    catalog: Arc<Catalog>,
    ledger: Mutex<BookingLedger>,
}

impl InMemoryBookingService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            ledger: Mutex::new(BookingLedger {
                next_id: 1,
                by_slot: BTreeMap::new(),
            }),
        }
    }

    pub async fn booked(&self) -> Vec<BookingRequest> {
        self.ledger.lock().await.by_slot.values().cloned().collect()
    }

    fn validate(&self, request: &BookingRequest) -> Result<(), BookingError> {
        match request {
            BookingRequest::StudySession(session) => {
                if let PartnerRequest::Specific(partner) = session.partner {
                    if self.catalog.partner(partner).is_none() {
                        return Err(BookingError::Invalid(format!(
                            "unknown partner {}",
                            partner.0
                        )));
                    }
                }
            }
            BookingRequest::RabbiConsultation(consultation) => {
                if !consultation.meeting_type.is_available() {
                    return Err(BookingError::Invalid(format!(
                        "{} meetings are not offered",
                        consultation.meeting_type.label()
                    )));
                }
                if consultation.date.weekday() == Weekday::Sat {
                    return Err(BookingError::Invalid(
                        "consultations are not held on Shabbat".into(),
                    ));
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl BookingService for InMemoryBookingService {
    async fn submit(&self, request: BookingRequest) -> Result<BookingConfirmation, BookingError> {
        self.validate(&request)?;

        let starts_at = request.starts_at();
        let mut ledger = self.ledger.lock().await;
        if ledger.by_slot.contains_key(&starts_at) {
            debug!(%starts_at, "slot already booked");
            return Err(BookingError::SlotUnavailable(starts_at));
        }

        let confirmation_id = ConfirmationId(format!("CHV-{:04}", ledger.next_id));
        ledger.next_id += 1;
        let confirmation = BookingConfirmation {
            confirmation_id,
            starts_at,
            duration_minutes: request.duration_minutes(),
        };
        info!(
            confirmation = %confirmation.confirmation_id,
            kind = request.kind_name(),
            %starts_at,
            "booking accepted"
        );
        ledger.by_slot.insert(starts_at, request);
        Ok(confirmation)
    }
}

pub struct InMemoryContentCatalog {
    catalog: Arc<Catalog>,
}

impl InMemoryContentCatalog {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl ContentCatalog for InMemoryContentCatalog {
    async fn list_texts(&self, filter: &TextFilter) -> Result<Vec<TextMatch>, CatalogError> {
        Ok(self.catalog.search_texts(filter))
    }

    async fn list_videos(&self, filter: &VideoFilter) -> Result<Vec<VideoEntry>, CatalogError> {
        Ok(self.catalog.filter_videos(filter))
    }
}

/// Serves the undecided fixture candidate that best fits the profile.
pub struct InMemoryMatchmaking {
    catalog: Arc<Catalog>,
    decisions: Mutex<HashMap<CandidateId, MatchDecision>>,
}

impl InMemoryMatchmaking {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            decisions: Mutex::new(HashMap::new()),
        }
    }

    pub async fn decision(&self, candidate: CandidateId) -> Option<MatchDecision> {
        self.decisions.lock().await.get(&candidate).copied()
    }
}

#[async_trait]
impl MatchmakingService for InMemoryMatchmaking {
    async fn next_candidate(
        &self,
        profile: &MatchProfile,
    ) -> Result<Option<Candidate>, MatchmakingError> {
        let decisions = self.decisions.lock().await;
        let undecided = self
            .catalog
            .candidates()
            .iter()
            .filter(|c| !decisions.contains_key(&c.id));
        Ok(profile.rank(undecided).first().map(|c| (*c).clone()))
    }

    async fn record_decision(
        &self,
        candidate: CandidateId,
        decision: MatchDecision,
    ) -> Result<(), MatchmakingError> {
        if self.catalog.candidate(candidate).is_none() {
            return Err(MatchmakingError::UnknownCandidate(candidate));
        }
        self.decisions.lock().await.insert(candidate, decision);
        debug!(candidate = candidate.0, %decision, "match decision recorded");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/memory_tests.rs"]
mod tests;
