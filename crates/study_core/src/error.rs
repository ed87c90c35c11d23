use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use shared::{
    domain::{CandidateId, MeetingType, PartnerId},
    error::{ErrorCode, ServiceError},
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("slot {0} is already booked")]
    SlotUnavailable(NaiveDateTime),
    #[error("invalid booking request: {0}")]
    Invalid(String),
    #[error("booking backend unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("content backend unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchmakingError {
    #[error("unknown candidate {}", .0 .0)]
    UnknownCandidate(CandidateId),
    #[error("matchmaking backend unavailable: {0}")]
    Unavailable(String),
}

/// A wizard choice the screen refuses to record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("{0} is outside the bookable window")]
    DateOutsideWindow(NaiveDate),
    #[error("{0} is not available for consultations")]
    DateUnavailable(NaiveDate),
    #[error("{0} is not an offered time slot")]
    TimeUnavailable(NaiveTime),
    #[error("{} meetings are not available", .0.label())]
    MeetingTypeUnavailable(MeetingType),
    #[error("unknown study partner {}", .0 .0)]
    UnknownPartner(PartnerId),
    #[error("'{value}' is not an option for {field}")]
    UnknownOption { field: &'static str, value: String },
}

impl From<BookingError> for ServiceError {
    fn from(value: BookingError) -> Self {
        let code = match &value {
            BookingError::SlotUnavailable(_) => ErrorCode::Conflict,
            BookingError::Invalid(_) => ErrorCode::Validation,
            BookingError::Unavailable(_) => ErrorCode::Unavailable,
        };
        ServiceError::new(code, value.to_string())
    }
}

impl From<CatalogError> for ServiceError {
    fn from(value: CatalogError) -> Self {
        ServiceError::new(ErrorCode::Unavailable, value.to_string())
    }
}

impl From<MatchmakingError> for ServiceError {
    fn from(value: MatchmakingError) -> Self {
        let code = match &value {
            MatchmakingError::UnknownCandidate(_) => ErrorCode::NotFound,
            MatchmakingError::Unavailable(_) => ErrorCode::Unavailable,
        };
        ServiceError::new(code, value.to_string())
    }
}
