use std::{collections::HashSet, sync::Arc};

use catalog::Catalog;
use chrono::NaiveDate;
use shared::{
    domain::CandidateId,
    protocol::{BookingConfirmation, BookingRequest},
    ViewId,
};
use tracing::{debug, info};

use crate::{
    error::BookingError,
    flows::SubmissionStatus,
    router::{NavigationOutcome, ViewRouter},
    screens::{MountContext, Screen},
    wizard::{Advance, Retreat},
    MatchProfile,
};

pub const DEFAULT_BOOKING_HORIZON_DAYS: u32 = 14;

#[derive(Debug, Clone)]
pub struct AppOptions {
    pub initial_view: ViewId,
    pub today: NaiveDate,
    pub booking_horizon_days: u32,
}

impl AppOptions {
    pub fn starting_today(today: NaiveDate) -> Self {
        Self {
            initial_view: ViewId::Pricing,
            today,
            booking_horizon_days: DEFAULT_BOOKING_HORIZON_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// Booked; the session is back on the dashboard.
    Confirmed(BookingConfirmation),
    /// The wizard stays on its confirmation step for a retry.
    Failed(String),
    /// No booking flow was waiting for the answer.
    Discarded,
}

/// Router plus the screen mounted for its current view.
///
/// The mounted screen always matches `router.current_view()`: every
/// transition that moves the router remounts the screen, so no screen state
/// survives leaving its view.
#[derive(Debug, Clone)]
pub struct AppState {
    router: ViewRouter,
    screen: Screen,
    catalog: Arc<Catalog>,
    today: NaiveDate,
    booking_horizon_days: u32,
    match_profile: MatchProfile,
    decided: HashSet<CandidateId>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, options: AppOptions) -> Self {
        let router = ViewRouter::starting_at(options.initial_view);
        let match_profile = MatchProfile::default();
        let decided = HashSet::new();
        let screen = Screen::mount(
            router.current_view(),
            MountContext {
                catalog: &catalog,
                today: options.today,
                booking_horizon_days: options.booking_horizon_days,
                match_profile: &match_profile,
                decided: &decided,
            },
        );
        Self {
            router,
            screen,
            catalog,
            today: options.today,
            booking_horizon_days: options.booking_horizon_days,
            match_profile,
            decided,
        }
    }

    pub fn router(&self) -> &ViewRouter {
        &self.router
    }

    pub fn current_view(&self) -> ViewId {
        self.router.current_view()
    }

    pub fn is_authenticated(&self) -> bool {
        self.router.is_authenticated()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Profile used to request matchmaking candidates; refined by the assessment.
    pub fn match_profile(&self) -> &MatchProfile {
        &self.match_profile
    }

    /// Keeps a decided candidate out of later matchmaking decks.
    pub fn record_decision(&mut self, candidate: CandidateId) {
        self.decided.insert(candidate);
    }

    /// True while the mounted booking flow waits for the booking service.
    pub fn booking_pending(&self) -> bool {
        self.screen
            .booking_flow()
            .is_some_and(|flow| flow.submission().is_pending())
    }

    /// Moves to `view` unless gated. The booking screen cannot be left while
    /// its submission is pending, so the answer always finds its flow.
    pub fn navigate(&mut self, view: ViewId) -> NavigationOutcome {
        if self.booking_pending() && view != self.current_view() {
            debug!(requested = %view, "navigation held while booking is pending");
            return NavigationOutcome::BookingPending { requested: view };
        }
        let outcome = self.router.navigate_to(view);
        if outcome.moved() {
            self.remount();
        }
        outcome
    }

    pub fn login(&mut self) {
        self.router.login();
        self.remount();
    }

    /// Ends the session; refused while a booking is pending.
    pub fn logout(&mut self) -> bool {
        if self.booking_pending() {
            debug!("logout held while booking is pending");
            return false;
        }
        self.router.logout();
        self.match_profile = MatchProfile::default();
        self.decided.clear();
        self.remount();
        true
    }

    /// Advances the mounted wizard. Completing the assessment records its
    /// derived profile for matchmaking.
    pub fn advance_wizard(&mut self) -> Option<Advance> {
        if self
            .screen
            .booking_flow()
            .is_some_and(|flow| flow.wizard().is_final_step())
        {
            // Booking wizards complete through `begin_booking`/`finish_booking`.
            return Some(Advance::Blocked);
        }
        let advance = self.screen.wizard_mut()?.advance();
        if advance == Advance::Completed {
            if let Screen::Assessment(flow) = &self.screen {
                if let Some(profile) = flow.profile() {
                    info!(level = %profile.level, "assessment completed");
                    self.match_profile = profile.match_profile();
                }
            }
        }
        Some(advance)
    }

    /// Steps the mounted wizard back; leaving the first step returns to the
    /// dashboard. Ignored while a booking is in flight.
    pub fn retreat_wizard(&mut self) -> Option<Retreat> {
        if self.booking_pending() {
            debug!("retreat ignored while booking is pending");
            return None;
        }
        let retreat = self.screen.wizard_mut()?.retreat();
        if retreat == Retreat::Exit {
            self.navigate(ViewId::Dashboard);
        }
        Some(retreat)
    }

    /// Marks the mounted booking flow as submitting and returns its request.
    pub fn begin_booking(&mut self) -> Option<BookingRequest> {
        self.screen.booking_flow_mut()?.begin_submission()
    }

    pub fn finish_booking(
        &mut self,
        result: Result<BookingConfirmation, BookingError>,
    ) -> BookingOutcome {
        let Some(flow) = self.screen.booking_flow_mut() else {
            debug!("booking answer arrived after leaving the booking screen");
            return BookingOutcome::Discarded;
        };
        if !flow.submission().is_pending() {
            debug!("booking answer arrived without a pending submission");
            return BookingOutcome::Discarded;
        }

        match flow.finish_submission(result).clone() {
            SubmissionStatus::Confirmed(confirmation) => {
                info!(
                    confirmation = %confirmation.confirmation_id,
                    starts_at = %confirmation.starts_at,
                    "booking confirmed"
                );
                self.navigate(ViewId::Dashboard);
                BookingOutcome::Confirmed(confirmation)
            }
            SubmissionStatus::Failed(message) => BookingOutcome::Failed(message),
            SubmissionStatus::Draft | SubmissionStatus::Submitting => BookingOutcome::Discarded,
        }
    }

    fn remount(&mut self) {
        self.screen = Screen::mount(
            self.router.current_view(),
            MountContext {
                catalog: &self.catalog,
                today: self.today,
                booking_horizon_days: self.booking_horizon_days,
                match_profile: &self.match_profile,
                decided: &self.decided,
            },
        );
        debug!(view = %self.screen.view(), "screen mounted");
    }
}

#[cfg(test)]
#[path = "tests/app_state_tests.rs"]
mod tests;
