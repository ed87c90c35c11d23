//! Screen-local state for every view. A screen is mounted fresh whenever its
//! view becomes current and dropped when the view changes.

use std::collections::HashSet;

use catalog::Catalog;
use chrono::NaiveDate;
use shared::{domain::CandidateId, ViewId};

use crate::{
    flows::{AssessmentFlow, BookingFlow, ConsultationFlow, ScheduleSessionFlow},
    wizard::Wizard,
    MatchProfile,
};

pub mod calendar;
pub mod library;
pub mod matchmaking;
pub mod pricing;
pub mod profile;
pub mod quiz;
pub mod shiur;
pub mod study_room;

pub use calendar::CalendarState;
pub use library::{LibraryState, LibraryTab};
pub use matchmaking::MatchDeck;
pub use pricing::PricingState;
pub use profile::ProfileSummary;
pub use quiz::QuizState;
pub use shiur::ShiurState;
pub use study_room::StudyRoomState;

/// Inputs a screen may read while mounting.
#[derive(Debug, Clone, Copy)]
pub struct MountContext<'a> {
    pub catalog: &'a Catalog,
    pub today: NaiveDate,
    pub booking_horizon_days: u32,
    pub match_profile: &'a MatchProfile,
    /// Candidates the session already liked or passed.
    pub decided: &'a HashSet<CandidateId>,
}

#[derive(Debug, Clone)]
pub enum Screen {
    Landing,
    Pricing(PricingState),
    Dashboard,
    StudyRoom(StudyRoomState),
    Library(LibraryState),
    Matchmaking(MatchDeck),
    Profile(ProfileSummary),
    DailyQuiz(QuizState),
    Assessment(AssessmentFlow),
    ScheduleSession(ScheduleSessionFlow),
    RabbiConsultation(ConsultationFlow),
    WeeklyShiur(ShiurState),
    Calendar(CalendarState),
}

impl Screen {
    pub fn mount(view: ViewId, ctx: MountContext<'_>) -> Self {
        let catalog = ctx.catalog;
        match view {
            ViewId::Landing => Screen::Landing,
            ViewId::Pricing => Screen::Pricing(PricingState::default()),
            ViewId::Dashboard => Screen::Dashboard,
            ViewId::StudyRoom => {
                Screen::StudyRoom(StudyRoomState::new(catalog.study_room_chat().to_vec()))
            }
            ViewId::Library => Screen::Library(LibraryState::new(catalog)),
            ViewId::Matchmaking => {
                let undecided = catalog
                    .candidates()
                    .iter()
                    .filter(|c| !ctx.decided.contains(&c.id));
                let deck = ctx.match_profile.rank(undecided).into_iter().cloned().collect();
                Screen::Matchmaking(MatchDeck::new(deck))
            }
            ViewId::Profile => Screen::Profile(ProfileSummary::from_catalog(catalog)),
            ViewId::DailyQuiz => {
                Screen::DailyQuiz(QuizState::new(catalog.quiz_questions().to_vec()))
            }
            ViewId::Assessment => Screen::Assessment(AssessmentFlow::new()),
            ViewId::ScheduleSession => Screen::ScheduleSession(ScheduleSessionFlow::new(
                ctx.today,
                ctx.booking_horizon_days,
                catalog.suggested_partners().to_vec(),
            )),
            ViewId::RabbiConsultation => Screen::RabbiConsultation(ConsultationFlow::new(
                ctx.today,
                ctx.booking_horizon_days,
            )),
            ViewId::WeeklyShiur => {
                Screen::WeeklyShiur(ShiurState::new(catalog.shiur_chat().to_vec()))
            }
            ViewId::Calendar => Screen::Calendar(CalendarState::new(ctx.today)),
        }
    }

    pub fn view(&self) -> ViewId {
        match self {
            Screen::Landing => ViewId::Landing,
            Screen::Pricing(_) => ViewId::Pricing,
            Screen::Dashboard => ViewId::Dashboard,
            Screen::StudyRoom(_) => ViewId::StudyRoom,
            Screen::Library(_) => ViewId::Library,
            Screen::Matchmaking(_) => ViewId::Matchmaking,
            Screen::Profile(_) => ViewId::Profile,
            Screen::DailyQuiz(_) => ViewId::DailyQuiz,
            Screen::Assessment(_) => ViewId::Assessment,
            Screen::ScheduleSession(_) => ViewId::ScheduleSession,
            Screen::RabbiConsultation(_) => ViewId::RabbiConsultation,
            Screen::WeeklyShiur(_) => ViewId::WeeklyShiur,
            Screen::Calendar(_) => ViewId::Calendar,
        }
    }

    pub fn wizard(&self) -> Option<&Wizard> {
        match self {
            Screen::Assessment(flow) => Some(flow.wizard()),
            Screen::ScheduleSession(flow) => Some(flow.wizard()),
            Screen::RabbiConsultation(flow) => Some(flow.wizard()),
            _ => None,
        }
    }

    pub fn wizard_mut(&mut self) -> Option<&mut Wizard> {
        match self {
            Screen::Assessment(flow) => Some(flow.wizard_mut()),
            Screen::ScheduleSession(flow) => Some(flow.wizard_mut()),
            Screen::RabbiConsultation(flow) => Some(flow.wizard_mut()),
            _ => None,
        }
    }

    pub fn booking_flow(&self) -> Option<&dyn BookingFlow> {
        match self {
            Screen::ScheduleSession(flow) => Some(flow),
            Screen::RabbiConsultation(flow) => Some(flow),
            _ => None,
        }
    }

    pub fn booking_flow_mut(&mut self) -> Option<&mut dyn BookingFlow> {
        match self {
            Screen::ScheduleSession(flow) => Some(flow),
            Screen::RabbiConsultation(flow) => Some(flow),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_view_mounts_its_own_screen() {
        let catalog = Catalog::fixtures();
        let profile = MatchProfile::default();
        let decided = HashSet::new();
        let ctx = MountContext {
            catalog: &catalog,
            today: NaiveDate::from_ymd_opt(2025, 11, 16).expect("date"),
            booking_horizon_days: 14,
            match_profile: &profile,
            decided: &decided,
        };
        for view in ViewId::ALL {
            assert_eq!(Screen::mount(*view, ctx).view(), *view);
        }
    }

    #[test]
    fn only_wizard_views_expose_a_wizard() {
        let catalog = Catalog::fixtures();
        let profile = MatchProfile::default();
        let decided = HashSet::new();
        let ctx = MountContext {
            catalog: &catalog,
            today: NaiveDate::from_ymd_opt(2025, 11, 16).expect("date"),
            booking_horizon_days: 14,
            match_profile: &profile,
            decided: &decided,
        };
        let wizards: Vec<_> = ViewId::ALL
            .iter()
            .filter(|view| Screen::mount(**view, ctx).wizard().is_some())
            .copied()
            .collect();
        assert_eq!(
            wizards,
            vec![
                ViewId::Assessment,
                ViewId::ScheduleSession,
                ViewId::RabbiConsultation
            ]
        );
    }
}
