use chrono::{NaiveDate, NaiveTime};
use shared::{
    domain::{
        ConsultationDuration, ConsultationType, MeetingType, PartnerId, SessionDuration,
        StudyInterest, StudyLevel, StudyType,
    },
    protocol::{ConsultationRequest, SessionRequest},
};

use super::*;

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::fixtures())
}

fn session(day: u32, hour: u32, partner: PartnerRequest) -> BookingRequest {
    BookingRequest::StudySession(SessionRequest {
        study_type: StudyType::Halacha,
        duration: SessionDuration::NinetyMinutes,
        topic: None,
        date: NaiveDate::from_ymd_opt(2025, 11, day).expect("date"),
        time: NaiveTime::from_hms_opt(hour, 0, 0).expect("time"),
        partner,
    })
}

fn consultation(day: u32, meeting_type: MeetingType) -> BookingRequest {
    BookingRequest::RabbiConsultation(ConsultationRequest {
        consultation_type: ConsultationType::General,
        duration: ConsultationDuration::Short,
        meeting_type,
        date: NaiveDate::from_ymd_opt(2025, 11, day).expect("date"),
        time: NaiveTime::from_hms_opt(10, 0, 0).expect("time"),
        notes: None,
    })
}

#[tokio::test]
async fn confirmations_are_sequential() {
    let service = InMemoryBookingService::new(catalog());
    let first = service
        .submit(session(17, 7, PartnerRequest::Ai))
        .await
        .expect("first booking");
    let second = service
        .submit(session(17, 8, PartnerRequest::Specific(PartnerId(3))))
        .await
        .expect("second booking");

    assert_eq!(first.confirmation_id.0, "CHV-0001");
    assert_eq!(second.confirmation_id.0, "CHV-0002");
    assert_eq!(first.duration_minutes, 90);
    assert_eq!(service.booked().await.len(), 2);
}

#[tokio::test]
async fn double_booking_a_slot_is_refused() {
    let service = InMemoryBookingService::new(catalog());
    service
        .submit(session(18, 19, PartnerRequest::Ai))
        .await
        .expect("first booking");

    let err = service
        .submit(session(18, 19, PartnerRequest::Ai))
        .await
        .expect_err("slot taken");
    assert!(matches!(err, BookingError::SlotUnavailable(_)));

    let next = service
        .submit(session(18, 20, PartnerRequest::Ai))
        .await
        .expect("free slot");
    assert_eq!(next.confirmation_id.0, "CHV-0002");
}

#[tokio::test]
async fn invalid_requests_are_rejected_before_booking() {
    let service = InMemoryBookingService::new(catalog());
    let err = service
        .submit(consultation(17, MeetingType::InPerson))
        .await
        .expect_err("in person");
    assert!(matches!(err, BookingError::Invalid(_)));

    // 2025-11-22 is a Saturday.
    let err = service
        .submit(consultation(22, MeetingType::Video))
        .await
        .expect_err("shabbat");
    assert!(matches!(err, BookingError::Invalid(_)));

    let err = service
        .submit(session(17, 7, PartnerRequest::Specific(PartnerId(42))))
        .await
        .expect_err("unknown partner");
    assert!(matches!(err, BookingError::Invalid(_)));
    assert!(service.booked().await.is_empty());
}

#[tokio::test]
async fn content_catalog_delegates_to_fixture_queries() {
    let content = InMemoryContentCatalog::new(catalog());
    let texts = content
        .list_texts(&TextFilter::query("pirkei"))
        .await
        .expect("texts");
    assert_eq!(texts.len(), 2);
    let videos = content
        .list_videos(&VideoFilter::default())
        .await
        .expect("videos");
    assert_eq!(videos.len(), 8);
}

#[tokio::test]
async fn matchmaking_skips_decided_candidates() {
    let matchmaking = InMemoryMatchmaking::new(catalog());
    let profile = MatchProfile::default();

    let first = matchmaking
        .next_candidate(&profile)
        .await
        .expect("query")
        .expect("candidate");
    assert_eq!(first.id, CandidateId(1));

    matchmaking
        .record_decision(first.id, MatchDecision::Pass)
        .await
        .expect("recorded");
    let second = matchmaking
        .next_candidate(&profile)
        .await
        .expect("query")
        .expect("candidate");
    assert_eq!(second.id, CandidateId(2));
    assert_eq!(
        matchmaking.decision(first.id).await,
        Some(MatchDecision::Pass)
    );
}

#[tokio::test]
async fn matchmaking_prefers_candidates_fitting_the_profile() {
    let matchmaking = InMemoryMatchmaking::new(catalog());
    let profile = MatchProfile {
        level: Some(StudyLevel::Beginner),
        interests: vec![
            StudyInterest::Torah,
            StudyInterest::Parasha,
            StudyInterest::Ethics,
        ],
    };

    let best = matchmaking
        .next_candidate(&profile)
        .await
        .expect("query")
        .expect("candidate");
    assert_eq!(best.id, CandidateId(3));

    matchmaking
        .record_decision(best.id, MatchDecision::Like)
        .await
        .expect("recorded");
    let runner_up = matchmaking
        .next_candidate(&profile)
        .await
        .expect("query")
        .expect("candidate");
    assert_eq!(runner_up.id, CandidateId(1));
}

#[test]
fn empty_profile_keeps_catalog_order() {
    let catalog = catalog();
    let profile = MatchProfile::default();
    let ids: Vec<_> = profile
        .rank(catalog.candidates())
        .iter()
        .map(|c| c.id)
        .collect();
    let catalog_ids: Vec<_> = catalog.candidates().iter().map(|c| c.id).collect();
    assert_eq!(ids, catalog_ids);
    assert!(catalog.candidates().iter().all(|c| profile.affinity(c) == 0));
}

#[tokio::test]
async fn exhausted_deck_yields_none() {
    let catalog = catalog();
    let matchmaking = InMemoryMatchmaking::new(catalog.clone());
    for candidate in catalog.candidates() {
        matchmaking
            .record_decision(candidate.id, MatchDecision::Like)
            .await
            .expect("recorded");
    }
    assert!(matchmaking
        .next_candidate(&MatchProfile::default())
        .await
        .expect("query")
        .is_none());
}

#[tokio::test]
async fn unknown_candidate_is_an_error() {
    let matchmaking = InMemoryMatchmaking::new(catalog());
    let err = matchmaking
        .record_decision(CandidateId(404), MatchDecision::Like)
        .await
        .expect_err("unknown");
    assert_eq!(err, MatchmakingError::UnknownCandidate(CandidateId(404)));
}
