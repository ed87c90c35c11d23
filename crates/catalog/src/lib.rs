use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::Serialize;

use shared::{
    domain::{
        BillingCycle, CandidateId, EventId, EventKind, PartnerId, QuestionId, ShiurId, StudyLevel,
        TextId, VideoCategory, VideoId,
    },
    protocol::{TextFilter, VideoFilter},
};

mod fixtures;

const WEEKDAY_ABBREV: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];
const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto", "Setembro",
    "Outubro", "Novembro", "Dezembro",
];
pub const AGENDA_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextExtent {
    Chapters(u32),
    Label(String),
}

impl std::fmt::Display for TextExtent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextExtent::Chapters(n) => write!(f, "{n} capítulos"),
            TextExtent::Label(label) => f.write_str(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEntry {
    pub id: TextId,
    pub name: String,
    pub extent: TextExtent,
    pub level: StudyLevel,
    pub popular: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextCategory {
    pub title: String,
    pub icon: String,
    pub texts: Vec<TextEntry>,
}

/// A text together with the title of the category it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextMatch {
    pub category: String,
    pub text: TextEntry,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentText {
    pub name: String,
    pub category: String,
    pub last_read: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoEntry {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub category: VideoCategory,
    pub series: Option<String>,
    pub episode: Option<u32>,
    pub views: u64,
    pub rating: f32,
    pub level: StudyLevel,
    /// Watched percentage, absent when never started.
    pub progress: Option<u8>,
    pub is_new: bool,
    pub topics: Vec<String>,
}

impl VideoEntry {
    pub fn is_in_progress(&self) -> bool {
        matches!(self.progress, Some(p) if p > 0 && p < 100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveTime,
    pub kind: EventKind,
    pub partner: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl CalendarEvent {
    pub fn date(&self) -> NaiveDate {
        self.starts_at.date()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Shiur {
    pub id: ShiurId,
    pub title: String,
    pub starts_at: NaiveDateTime,
    pub duration: String,
    pub topic: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordedShiur {
    pub id: ShiurId,
    pub title: String,
    pub date_label: String,
    pub duration: String,
    pub views: u32,
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: u32,
    pub author: String,
    pub body: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub initials: String,
    pub location: String,
    pub level: StudyLevel,
    pub interests: Vec<String>,
    pub languages: Vec<String>,
    pub availability: Vec<String>,
    pub match_score: u8,
    pub bio: String,
    pub completed_texts: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedPartner {
    pub id: PartnerId,
    pub name: String,
    pub initials: String,
    pub level: StudyLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Médio",
            Difficulty::Hard => "Difícil",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option: usize,
    pub explanation: String,
    pub category: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanFeature {
    pub included: bool,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PricingPlan {
    pub name: String,
    pub subtitle: String,
    pub monthly_cents: u32,
    /// Per-month price when billed annually.
    pub annual_cents: u32,
    pub popular: bool,
    pub features: Vec<PlanFeature>,
}

impl PricingPlan {
    pub fn price_cents(&self, cycle: BillingCycle) -> u32 {
        match cycle {
            BillingCycle::Monthly => self.monthly_cents,
            BillingCycle::Annual => self.annual_cents,
        }
    }

    /// Yearly savings of annual billing, `None` for free plans.
    pub fn annual_savings_cents(&self) -> Option<u32> {
        if self.annual_cents == 0 {
            return None;
        }
        Some(self.monthly_cents.saturating_sub(self.annual_cents) * 12)
    }

    pub fn is_free(&self) -> bool {
        self.monthly_cents == 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub community: String,
    pub text: String,
    pub rating: u8,
    pub initials: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub name: String,
    pub unlocked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudyRecord {
    pub text: String,
    pub date_label: String,
    pub duration: String,
    pub partner: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgendaDay {
    pub date: NaiveDate,
    pub label: String,
    pub events: Vec<CalendarEvent>,
}

/// Read-only fixture data standing in for the content, scheduling and
/// matchmaking backends.
#[derive(Debug, Clone)]
pub struct Catalog {
    text_categories: Vec<TextCategory>,
    recent_texts: Vec<RecentText>,
    videos: Vec<VideoEntry>,
    events: Vec<CalendarEvent>,
    upcoming_shiurim: Vec<Shiur>,
    recorded_shiurim: Vec<RecordedShiur>,
    shiur_chat: Vec<ChatMessage>,
    study_room_chat: Vec<ChatMessage>,
    candidates: Vec<Candidate>,
    suggested_partners: Vec<SuggestedPartner>,
    quiz_questions: Vec<QuizQuestion>,
    pricing_plans: Vec<PricingPlan>,
    testimonials: Vec<Testimonial>,
    faqs: Vec<Faq>,
    stats: Vec<Stat>,
    achievements: Vec<Achievement>,
    study_history: Vec<StudyRecord>,
}

impl Catalog {
    pub fn fixtures() -> Self {
        let catalog = Self {
            text_categories: fixtures::text_categories(),
            recent_texts: fixtures::recent_texts(),
            videos: fixtures::videos(),
            events: fixtures::calendar_events(),
            upcoming_shiurim: fixtures::upcoming_shiurim(),
            recorded_shiurim: fixtures::recorded_shiurim(),
            shiur_chat: fixtures::shiur_chat(),
            study_room_chat: fixtures::study_room_chat(),
            candidates: fixtures::candidates(),
            suggested_partners: fixtures::suggested_partners(),
            quiz_questions: fixtures::quiz_questions(),
            pricing_plans: fixtures::pricing_plans(),
            testimonials: fixtures::testimonials(),
            faqs: fixtures::faqs(),
            stats: fixtures::stats(),
            achievements: fixtures::achievements(),
            study_history: fixtures::study_history(),
        };
        tracing::debug!(
            texts = catalog.text_categories.iter().map(|c| c.texts.len()).sum::<usize>(),
            videos = catalog.videos.len(),
            events = catalog.events.len(),
            "loaded fixture catalog"
        );
        catalog
    }

    pub fn text_categories(&self) -> &[TextCategory] {
        &self.text_categories
    }

    pub fn recent_texts(&self) -> &[RecentText] {
        &self.recent_texts
    }

    pub fn videos(&self) -> &[VideoEntry] {
        &self.videos
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn upcoming_shiurim(&self) -> &[Shiur] {
        &self.upcoming_shiurim
    }

    pub fn recorded_shiurim(&self) -> &[RecordedShiur] {
        &self.recorded_shiurim
    }

    pub fn shiur_chat(&self) -> &[ChatMessage] {
        &self.shiur_chat
    }

    pub fn study_room_chat(&self) -> &[ChatMessage] {
        &self.study_room_chat
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn candidate(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn suggested_partners(&self) -> &[SuggestedPartner] {
        &self.suggested_partners
    }

    pub fn partner(&self, id: PartnerId) -> Option<&SuggestedPartner> {
        self.suggested_partners.iter().find(|p| p.id == id)
    }

    pub fn quiz_questions(&self) -> &[QuizQuestion] {
        &self.quiz_questions
    }

    pub fn pricing_plans(&self) -> &[PricingPlan] {
        &self.pricing_plans
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn faqs(&self) -> &[Faq] {
        &self.faqs
    }

    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn study_history(&self) -> &[StudyRecord] {
        &self.study_history
    }

    /// Case-insensitive substring search over text names and category titles.
    pub fn search_texts(&self, filter: &TextFilter) -> Vec<TextMatch> {
        let folded = filter.query.trim().to_lowercase();
        let needle = folded.as_str();
        self.text_categories
            .iter()
            .flat_map(|category| {
                let category_hit = contains_folded(&category.title, needle);
                category
                    .texts
                    .iter()
                    .filter(move |text| category_hit || contains_folded(&text.name, needle))
                    .map(move |text| TextMatch {
                        category: category.title.clone(),
                        text: text.clone(),
                    })
            })
            .filter(|hit| filter.level.map_or(true, |level| hit.text.level == level))
            .collect()
    }

    pub fn filter_videos(&self, filter: &VideoFilter) -> Vec<VideoEntry> {
        let needle = filter.query.trim().to_lowercase();
        self.videos
            .iter()
            .filter(|video| {
                contains_folded(&video.title, &needle)
                    || contains_folded(&video.description, &needle)
            })
            .filter(|video| filter.category.map_or(true, |c| video.category == c))
            .cloned()
            .collect()
    }

    pub fn video_category_counts(&self) -> BTreeMap<VideoCategory, usize> {
        let mut counts: BTreeMap<VideoCategory, usize> =
            VideoCategory::ALL.iter().map(|c| (*c, 0)).collect();
        for video in &self.videos {
            *counts.entry(video.category).or_default() += 1;
        }
        counts
    }

    pub fn continue_watching(&self) -> Vec<&VideoEntry> {
        self.videos.iter().filter(|v| v.is_in_progress()).collect()
    }

    pub fn new_releases(&self) -> Vec<&VideoEntry> {
        self.videos.iter().filter(|v| v.is_new).collect()
    }

    pub fn popular_videos(&self, limit: usize) -> Vec<&VideoEntry> {
        let mut popular: Vec<&VideoEntry> = self.videos.iter().collect();
        popular.sort_by(|a, b| b.views.cmp(&a.views));
        popular.truncate(limit);
        popular
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        self.events.iter().filter(|e| e.date() == date).collect()
    }

    pub fn events_in_month(&self, year: i32, month: u32) -> Vec<&CalendarEvent> {
        self.events
            .iter()
            .filter(|e| e.starts_at.year() == year && e.starts_at.month() == month)
            .collect()
    }

    /// Distinct days of the month that carry at least one event, ascending.
    pub fn days_with_events(&self, year: i32, month: u32) -> Vec<u32> {
        let mut days: Vec<u32> = self
            .events_in_month(year, month)
            .iter()
            .map(|e| e.starts_at.day())
            .collect();
        days.sort_unstable();
        days.dedup();
        days
    }

    pub fn upcoming_events(&self, now: NaiveDateTime, limit: usize) -> Vec<&CalendarEvent> {
        let mut upcoming: Vec<&CalendarEvent> =
            self.events.iter().filter(|e| e.starts_at >= now).collect();
        upcoming.sort_by_key(|e| e.starts_at);
        upcoming.truncate(limit);
        upcoming
    }

    /// Events of the seven days starting at `today`, grouped per day in date order.
    pub fn week_agenda(&self, today: NaiveDate) -> Vec<AgendaDay> {
        let end = today + Duration::days(AGENDA_DAYS);
        let mut by_day: BTreeMap<NaiveDate, Vec<CalendarEvent>> = BTreeMap::new();
        for event in &self.events {
            let date = event.date();
            if date >= today && date < end {
                by_day.entry(date).or_default().push(event.clone());
            }
        }

        by_day
            .into_iter()
            .map(|(date, mut events)| {
                events.sort_by_key(|e| e.starts_at);
                AgendaDay {
                    date,
                    label: relative_day_label(date, today),
                    events,
                }
            })
            .collect()
    }
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    folded_needle.is_empty() || haystack.to_lowercase().contains(folded_needle)
}

pub fn weekday_abbrev(weekday: Weekday) -> &'static str {
    WEEKDAY_ABBREV[weekday.num_days_from_sunday() as usize]
}

pub fn month_abbrev(month: u32) -> &'static str {
    MONTH_ABBREV[(month.clamp(1, 12) - 1) as usize]
}

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month.clamp(1, 12) - 1) as usize]
}

/// e.g. `Qui, 20 Nov`
pub fn short_date_label(date: NaiveDate) -> String {
    format!(
        "{}, {:02} {}",
        weekday_abbrev(date.weekday()),
        date.day(),
        month_abbrev(date.month())
    )
}

pub fn relative_day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Hoje".to_string()
    } else if Some(date) == today.succ_opt() {
        "Amanhã".to_string()
    } else {
        short_date_label(date)
    }
}

/// `R$ 77.00`
pub fn format_brl(cents: u32) -> String {
    format!("R$ {}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
