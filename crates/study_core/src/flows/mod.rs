//! The three wizard instantiations: session scheduling, rabbi consultation
//! and profile assessment.

use chrono::{Duration, NaiveDate, NaiveTime};
use shared::protocol::{BookingConfirmation, BookingRequest};
use tracing::{debug, warn};

use crate::{error::BookingError, wizard::Wizard};

pub mod assessment;
pub mod consultation;
pub mod schedule;

pub use assessment::{derive_profile, AssessmentAnswers, AssessmentFlow, AssessmentProfile};
pub use consultation::ConsultationFlow;
pub use schedule::ScheduleSessionFlow;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

pub(crate) fn date_tag(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn time_tag(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

pub(crate) fn parse_date_tag(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

pub(crate) fn parse_time_tag(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).ok()
}

/// `days` consecutive dates starting at `today`.
pub fn booking_window(today: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..i64::from(days))
        .map(|offset| today + Duration::days(offset))
        .collect()
}

pub(crate) fn hour_slots(hours: &[u32]) -> Vec<NaiveTime> {
    hours
        .iter()
        .filter_map(|hour| NaiveTime::from_hms_opt(*hour, 0, 0))
        .collect()
}

/// Lifecycle of handing a finished booking wizard to the booking backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Draft,
    Submitting,
    Confirmed(BookingConfirmation),
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }
}

/// A wizard whose final step books something through a `BookingService`.
///
/// The wizard stays on its confirmation step until the backend answers; a
/// confirmation completes it, a failure leaves it in place for a retry.
pub trait BookingFlow {
    fn wizard(&self) -> &Wizard;
    fn wizard_mut(&mut self) -> &mut Wizard;
    fn booking_request(&self) -> Option<BookingRequest>;
    fn submission(&self) -> &SubmissionStatus;
    fn set_submission(&mut self, status: SubmissionStatus);

    fn can_submit(&self) -> bool {
        self.wizard().is_final_step()
            && self.wizard().can_advance()
            && !self.submission().is_pending()
            && self.booking_request().is_some()
    }

    fn begin_submission(&mut self) -> Option<BookingRequest> {
        if !self.can_submit() {
            return None;
        }
        let request = self.booking_request()?;
        debug!(
            wizard = self.wizard().name(),
            kind = request.kind_name(),
            starts_at = %request.starts_at(),
            "booking submission started"
        );
        self.set_submission(SubmissionStatus::Submitting);
        Some(request)
    }

    fn finish_submission(
        &mut self,
        result: Result<BookingConfirmation, BookingError>,
    ) -> &SubmissionStatus {
        if !self.submission().is_pending() {
            warn!(
                wizard = self.wizard().name(),
                "booking result arrived without a pending submission"
            );
            return self.submission();
        }

        let status = match result {
            Ok(confirmation) => {
                self.wizard_mut().complete();
                SubmissionStatus::Confirmed(confirmation)
            }
            Err(err) => {
                warn!(wizard = self.wizard().name(), error = %err, "booking failed");
                SubmissionStatus::Failed(err.to_string())
            }
        };
        self.set_submission(status);
        self.submission()
    }
}
