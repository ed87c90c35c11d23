use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::{
    ConsultationDuration, ConsultationType, MeetingType, PartnerId, SessionDuration, StudyLevel,
    StudyType, VideoCategory,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfirmationId(pub String);

impl std::fmt::Display for ConfirmationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "partner_id", rename_all = "snake_case")]
pub enum PartnerRequest {
    Ai,
    Specific(PartnerId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
    pub study_type: StudyType,
    pub duration: SessionDuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub partner: PartnerRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    pub consultation_type: ConsultationType,
    pub duration: ConsultationDuration,
    pub meeting_type: MeetingType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum BookingRequest {
    StudySession(SessionRequest),
    RabbiConsultation(ConsultationRequest),
}

impl BookingRequest {
    pub fn starts_at(&self) -> NaiveDateTime {
        match self {
            BookingRequest::StudySession(req) => req.date.and_time(req.time),
            BookingRequest::RabbiConsultation(req) => req.date.and_time(req.time),
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        match self {
            BookingRequest::StudySession(req) => req.duration.minutes(),
            BookingRequest::RabbiConsultation(req) => req.duration.minutes(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            BookingRequest::StudySession(_) => "study_session",
            BookingRequest::RabbiConsultation(_) => "rabbi_consultation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub confirmation_id: ConfirmationId,
    pub starts_at: NaiveDateTime,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFilter {
    #[serde(default)]
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<StudyLevel>,
}

impl TextFilter {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            level: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoFilter {
    #[serde(default)]
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<VideoCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_request_serializes_with_type_tag() {
        let request = BookingRequest::StudySession(SessionRequest {
            study_type: StudyType::Mishna,
            duration: SessionDuration::OneHour,
            topic: None,
            date: NaiveDate::from_ymd_opt(2025, 11, 20).expect("date"),
            time: NaiveTime::from_hms_opt(19, 0, 0).expect("time"),
            partner: PartnerRequest::Ai,
        });

        let value = serde_json::to_value(&request).expect("json");
        assert_eq!(value["type"], "study_session");
        assert_eq!(value["payload"]["study_type"], "mishna");
        assert_eq!(value["payload"]["duration"], "60");
        assert!(value["payload"].get("topic").is_none());
    }

    #[test]
    fn booking_request_exposes_slot_start() {
        let request = BookingRequest::RabbiConsultation(ConsultationRequest {
            consultation_type: ConsultationType::Halacha,
            duration: ConsultationDuration::Standard,
            meeting_type: MeetingType::Phone,
            date: NaiveDate::from_ymd_opt(2025, 11, 17).expect("date"),
            time: NaiveTime::from_hms_opt(15, 0, 0).expect("time"),
            notes: Some("kashrut".into()),
        });

        assert_eq!(
            request.starts_at(),
            NaiveDate::from_ymd_opt(2025, 11, 17)
                .expect("date")
                .and_hms_opt(15, 0, 0)
                .expect("time")
        );
        assert_eq!(request.duration_minutes(), 45);
    }
}
