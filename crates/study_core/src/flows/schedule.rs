use catalog::SuggestedPartner;
use chrono::{NaiveDate, NaiveTime};
use shared::{
    domain::{PartnerChoice, PartnerId, SessionDuration, StudyType},
    protocol::{BookingRequest, PartnerRequest, SessionRequest},
};

use super::{
    booking_window, date_tag, hour_slots, parse_date_tag, parse_time_tag, time_tag, BookingFlow,
    SubmissionStatus,
};
use crate::{
    error::SelectionError,
    wizard::{always_valid, AnswerValue, Answers, StepDefinition, Wizard, WizardDefinition},
};

pub const STUDY_TYPE: &str = "study_type";
pub const DURATION: &str = "duration";
pub const TOPIC: &str = "topic";
pub const DATE: &str = "date";
pub const TIME: &str = "time";
pub const PARTNER_OPTION: &str = "partner_option";
pub const PARTNER: &str = "partner";

const SESSION_HOURS: [u32; 16] = [6, 7, 8, 9, 10, 11, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22];

fn details_valid(answers: &Answers) -> bool {
    answers.parsed::<StudyType>(STUDY_TYPE).is_some()
        && answers.parsed::<SessionDuration>(DURATION).is_some()
}

fn slot_valid(answers: &Answers) -> bool {
    answers.is_answered(DATE) && answers.is_answered(TIME)
}

fn partner_valid(answers: &Answers) -> bool {
    match answers.parsed::<PartnerChoice>(PARTNER_OPTION) {
        Some(PartnerChoice::Ai) => true,
        Some(PartnerChoice::Specific) => answers.partner(PARTNER).is_some(),
        None => false,
    }
}

fn defaults() -> Answers {
    Answers::new()
        .with(DURATION, AnswerValue::choice(SessionDuration::OneHour.as_str()))
        .with(PARTNER_OPTION, AnswerValue::choice(PartnerChoice::Ai.as_str()))
}

pub static SCHEDULE_SESSION: WizardDefinition = WizardDefinition {
    name: "schedule-session",
    steps: &[
        StepDefinition {
            key: "details",
            title: "Tipo de Estudo",
            is_valid: details_valid,
        },
        StepDefinition {
            key: "when",
            title: "Data e Horário",
            is_valid: slot_valid,
        },
        StepDefinition {
            key: "partner",
            title: "Parceiro",
            is_valid: partner_valid,
        },
        StepDefinition {
            key: "confirm",
            title: "Confirmação",
            is_valid: always_valid,
        },
    ],
    defaults,
};

/// Four-step chavruta session booking.
#[derive(Debug, Clone)]
pub struct ScheduleSessionFlow {
    wizard: Wizard,
    dates: Vec<NaiveDate>,
    times: Vec<NaiveTime>,
    partners: Vec<SuggestedPartner>,
    submission: SubmissionStatus,
}

impl ScheduleSessionFlow {
    pub fn new(today: NaiveDate, horizon_days: u32, partners: Vec<SuggestedPartner>) -> Self {
        Self {
            wizard: Wizard::new(&SCHEDULE_SESSION),
            dates: booking_window(today, horizon_days),
            times: hour_slots(&SESSION_HOURS),
            partners,
            submission: SubmissionStatus::Draft,
        }
    }

    pub fn available_dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn time_slots(&self) -> &[NaiveTime] {
        &self.times
    }

    pub fn partners(&self) -> &[SuggestedPartner] {
        &self.partners
    }

    pub fn choose_study_type(&mut self, study_type: StudyType) {
        self.wizard
            .set_answer(STUDY_TYPE, AnswerValue::choice(study_type.as_str()));
    }

    pub fn choose_duration(&mut self, duration: SessionDuration) {
        self.wizard
            .set_answer(DURATION, AnswerValue::choice(duration.as_str()));
    }

    /// Blank topics clear the answer.
    pub fn set_topic(&mut self, topic: &str) {
        if topic.trim().is_empty() {
            self.wizard.clear_answer(TOPIC);
        } else {
            self.wizard.set_answer(TOPIC, AnswerValue::text(topic));
        }
    }

    pub fn choose_date(&mut self, date: NaiveDate) -> Result<(), SelectionError> {
        if !self.dates.contains(&date) {
            return Err(SelectionError::DateOutsideWindow(date));
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

    /// Matching by the platform; drops any previously chosen partner.
    pub fn choose_ai_partner(&mut self) {
        self.wizard
            .set_answer(PARTNER_OPTION, AnswerValue::choice(PartnerChoice::Ai.as_str()));
        self.wizard.clear_answer(PARTNER);
    }

    pub fn choose_specific_partner(&mut self) {
        self.wizard.set_answer(
            PARTNER_OPTION,
            AnswerValue::choice(PartnerChoice::Specific.as_str()),
        );
    }

    pub fn choose_partner(&mut self, partner: PartnerId) -> Result<(), SelectionError> {
        if !self.partners.iter().any(|p| p.id == partner) {
            return Err(SelectionError::UnknownPartner(partner));
        }
        self.choose_specific_partner();
        self.wizard.set_answer(PARTNER, AnswerValue::Partner(partner));
        Ok(())
    }

    pub fn study_type(&self) -> Option<StudyType> {
        self.wizard.answers().parsed(STUDY_TYPE)
    }

    pub fn duration(&self) -> Option<SessionDuration> {
        self.wizard.answers().parsed(DURATION)
    }

    pub fn topic(&self) -> Option<&str> {
        self.wizard.answers().text(TOPIC)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.wizard.answers().choice(DATE).and_then(parse_date_tag)
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.wizard.answers().choice(TIME).and_then(parse_time_tag)
    }

    pub fn partner_choice(&self) -> Option<PartnerChoice> {
        self.wizard.answers().parsed(PARTNER_OPTION)
    }

    pub fn partner(&self) -> Option<&SuggestedPartner> {
        let id = self.wizard.answers().partner(PARTNER)?;
        self.partners.iter().find(|p| p.id == id)
    }

    pub fn session_request(&self) -> Option<SessionRequest> {
        let partner = match self.partner_choice()? {
            PartnerChoice::Ai => PartnerRequest::Ai,
            PartnerChoice::Specific => PartnerRequest::Specific(self.partner()?.id),
        };
        Some(SessionRequest {
            study_type: self.study_type()?,
            duration: self.duration()?,
            topic: self.topic().map(str::to_string),
            date: self.date()?,
            time: self.time()?,
            partner,
        })
    }
}

impl BookingFlow for ScheduleSessionFlow {
    fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    fn wizard_mut(&mut self) -> &mut Wizard {
        &mut self.wizard
    }

    fn booking_request(&self) -> Option<BookingRequest> {
        self.session_request().map(BookingRequest::StudySession)
    }

    fn submission(&self) -> &SubmissionStatus {
        &self.submission
    }

    fn set_submission(&mut self, status: SubmissionStatus) {
        self.submission = status;
    }
}

#[cfg(test)]
#[path = "../tests/schedule_tests.rs"]
mod tests;
