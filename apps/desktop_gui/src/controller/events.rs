//! Backend-to-UI events and error classification for the desktop shell.

use catalog::{Candidate, TextMatch, VideoEntry};
use shared::{
    domain::{CandidateId, MatchDecision},
    protocol::{BookingConfirmation, TextFilter, VideoFilter},
};
use study_core::BookingError;

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    Error(UiError),
    BookingFinished(Result<BookingConfirmation, BookingError>),
    TextsLoaded {
        filter: TextFilter,
        texts: Vec<TextMatch>,
    },
    VideosLoaded {
        filter: VideoFilter,
        videos: Vec<VideoEntry>,
    },
    DecisionRecorded {
        candidate: CandidateId,
        decision: MatchDecision,
    },
    CandidateSuggested(Option<Candidate>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Conflict,
    Transport,
    Unknown,
}

impl UiErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            UiErrorCategory::Validation => "Dados inválidos",
            UiErrorCategory::Conflict => "Conflito",
            UiErrorCategory::Transport => "Serviço indisponível",
            UiErrorCategory::Unknown => "Erro inesperado",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Booking,
    Matchmaking,
    Content,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("already booked")
            || message_lower.contains("conflict")
            || message_lower.contains("taken")
        {
            UiErrorCategory::Conflict
        } else if message_lower.contains("invalid")
            || message_lower.contains("unknown")
            || message_lower.contains("not offered")
            || message_lower.contains("not held")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("unavailable")
            || message_lower.contains("disconnect")
            || message_lower.contains("timed out")
            || message_lower.contains("startup failure")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    /// A failed booking can be resubmitted unless the request itself is wrong.
    pub fn is_retryable(&self) -> bool {
        !matches!(self.category, UiErrorCategory::Validation)
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_booking_failures() {
        let conflict = UiError::from_message(
            UiErrorContext::Booking,
            "slot 2025-11-17 09:00:00 is already booked",
        );
        assert_eq!(conflict.category(), UiErrorCategory::Conflict);
        assert!(conflict.is_retryable());

        let invalid = UiError::from_message(
            UiErrorContext::Booking,
            "invalid booking: consultations are not held on Shabbat",
        );
        assert_eq!(invalid.category(), UiErrorCategory::Validation);
        assert!(!invalid.is_retryable());
    }

    #[test]
    fn startup_failures_are_transport_errors() {
        let err = UiError::from_message(
            UiErrorContext::BackendStartup,
            "backend worker startup failure: failed to build runtime",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert_eq!(err.context(), UiErrorContext::BackendStartup);
    }

    #[test]
    fn unrecognised_messages_stay_unknown() {
        let err = UiError::from_message(UiErrorContext::General, "something odd");
        assert_eq!(err.category(), UiErrorCategory::Unknown);
        assert_eq!(err.message(), "something odd");
    }
}
