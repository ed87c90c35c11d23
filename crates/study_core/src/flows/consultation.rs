use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use shared::{
    domain::{ConsultationDuration, ConsultationType, MeetingType},
    protocol::{BookingRequest, ConsultationRequest},
};

use super::{
    booking_window, date_tag, hour_slots, parse_date_tag, parse_time_tag, time_tag, BookingFlow,
    SubmissionStatus,
};
use crate::{
    error::SelectionError,
    wizard::{always_valid, AnswerValue, Answers, StepDefinition, Wizard, WizardDefinition},
};

pub const CONSULTATION_TYPE: &str = "consultation_type";
pub const DURATION: &str = "duration";
pub const MEETING_TYPE: &str = "meeting_type";
pub const DATE: &str = "date";
pub const TIME: &str = "time";
pub const NOTES: &str = "notes";

const CONSULTATION_HOURS: [u32; 9] = [9, 10, 11, 14, 15, 16, 19, 20, 21];

/// Rabbis do not take consultations on Shabbat.
pub fn is_consultation_day(date: NaiveDate) -> bool {
    date.weekday() != Weekday::Sat
}

fn topic_valid(answers: &Answers) -> bool {
    answers.parsed::<ConsultationType>(CONSULTATION_TYPE).is_some()
        && answers.parsed::<ConsultationDuration>(DURATION).is_some()
        && answers
            .parsed::<MeetingType>(MEETING_TYPE)
            .is_some_and(MeetingType::is_available)
}

fn slot_valid(answers: &Answers) -> bool {
    answers.is_answered(DATE) && answers.is_answered(TIME)
}

fn defaults() -> Answers {
    Answers::new()
        .with(
            DURATION,
            AnswerValue::choice(ConsultationDuration::Standard.as_str()),
        )
        .with(MEETING_TYPE, AnswerValue::choice(MeetingType::Video.as_str()))
}

pub static RABBI_CONSULTATION: WizardDefinition = WizardDefinition {
    name: "rabbi-consultation",
    steps: &[
        StepDefinition {
            key: "topic",
            title: "Tipo de Consulta",
            is_valid: topic_valid,
        },
        StepDefinition {
            key: "when",
            title: "Data e Horário",
            is_valid: slot_valid,
        },
        StepDefinition {
            key: "notes",
            title: "Detalhes",
            is_valid: always_valid,
        },
        StepDefinition {
            key: "confirm",
            title: "Confirmação",
            is_valid: always_valid,
        },
    ],
    defaults,
};

#[derive(Debug, Clone)]
pub struct ConsultationFlow {
    wizard: Wizard,
    dates: Vec<NaiveDate>,
    times: Vec<NaiveTime>,
    submission: SubmissionStatus,
}

impl ConsultationFlow {
    pub fn new(today: NaiveDate, horizon_days: u32) -> Self {
        Self {
            wizard: Wizard::new(&RABBI_CONSULTATION),
            dates: booking_window(today, horizon_days),
            times: hour_slots(&CONSULTATION_HOURS),
            submission: SubmissionStatus::Draft,
        }
    }

    /// Every date of the window, including the unavailable Saturdays shown disabled.
    pub fn calendar_dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn time_slots(&self) -> &[NaiveTime] {
        &self.times
    }

    pub fn choose_type(&mut self, consultation_type: ConsultationType) {
        self.wizard.set_answer(
            CONSULTATION_TYPE,
            AnswerValue::choice(consultation_type.as_str()),
        );
    }

    pub fn choose_duration(&mut self, duration: ConsultationDuration) {
        self.wizard
            .set_answer(DURATION, AnswerValue::choice(duration.as_str()));
    }

    pub fn choose_meeting_type(&mut self, meeting: MeetingType) -> Result<(), SelectionError> {
        if !meeting.is_available() {
            return Err(SelectionError::MeetingTypeUnavailable(meeting));
        }
        self.wizard
            .set_answer(MEETING_TYPE, AnswerValue::choice(meeting.as_str()));
        Ok(())
    }

    pub fn choose_date(&mut self, date: NaiveDate) -> Result<(), SelectionError> {
        if !self.dates.contains(&date) {
            return Err(SelectionError::DateOutsideWindow(date));
        }
        if !is_consultation_day(date) {
            return Err(SelectionError::DateUnavailable(date));
        }
        self.wizard.set_answer(DATE, AnswerValue::choice(date_tag(date)));
        Ok(())
    }

    pub fn choose_time(&mut self, time: NaiveTime) -> Result<(), SelectionError> {
        if !self.times.contains(&time) {
            return Err(SelectionError::TimeUnavailable(time));
        }
        self.wizard.set_answer(TIME, AnswerValue::choice(time_tag(time)));
        Ok(())
    }

    pub fn set_notes(&mut self, notes: &str) {
        if notes.trim().is_empty() {
            self.wizard.clear_answer(NOTES);
        } else {
            self.wizard.set_answer(NOTES, AnswerValue::text(notes));
        }
    }

    pub fn consultation_type(&self) -> Option<ConsultationType> {
        self.wizard.answers().parsed(CONSULTATION_TYPE)
    }

    pub fn duration(&self) -> Option<ConsultationDuration> {
        self.wizard.answers().parsed(DURATION)
    }

    pub fn meeting_type(&self) -> Option<MeetingType> {
        self.wizard.answers().parsed(MEETING_TYPE)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.wizard.answers().choice(DATE).and_then(parse_date_tag)
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.wizard.answers().choice(TIME).and_then(parse_time_tag)
    }

    pub fn notes(&self) -> Option<&str> {
        self.wizard.answers().text(NOTES)
    }

    pub fn consultation_request(&self) -> Option<ConsultationRequest> {
        Some(ConsultationRequest {
            consultation_type: self.consultation_type()?,
            duration: self.duration()?,
            meeting_type: self.meeting_type()?,
            date: self.date()?,
            time: self.time()?,
            notes: self.notes().map(str::to_string),
        })
    }
}

impl BookingFlow for ConsultationFlow {
    fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    fn wizard_mut(&mut self) -> &mut Wizard {
        &mut self.wizard
    }

    fn booking_request(&self) -> Option<BookingRequest> {
        self.consultation_request()
            .map(BookingRequest::RabbiConsultation)
    }

    fn submission(&self) -> &SubmissionStatus {
        &self.submission
    }

    fn set_submission(&mut self, status: SubmissionStatus) {
        self.submission = status;
    }
}

#[cfg(test)]
#[path = "../tests/consultation_tests.rs"]
mod tests;
