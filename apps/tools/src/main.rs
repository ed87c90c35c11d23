use std::sync::Arc;

use anyhow::{bail, Context, Result};
use catalog::Catalog;
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{ArgGroup, Args, Parser, Subcommand};
use serde::Serialize;
use shared::{
    domain::{
        ConsultationDuration, ConsultationType, DailyStudyTime, HebrewReading, KnowledgeLevel,
        MeetingType, PartnerId, SessionDuration, StudyGoal, StudyInterest, StudyLevel, StudyType,
        VideoCategory,
    },
    protocol::{TextFilter, VideoFilter},
    ViewId,
};
use study_core::{
    app_state::DEFAULT_BOOKING_HORIZON_DAYS,
    flows::{AssessmentFlow, BookingFlow, ConsultationFlow, ScheduleSessionFlow, SubmissionStatus},
    Advance, BookingService, ContentCatalog, InMemoryBookingService, InMemoryContentCatalog,
    Wizard,
};
use tracing_subscriber::EnvFilter;

/// Inspect the fixture catalog and exercise the in-memory services.
#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every view with its access rule.
    Views,
    Texts {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long)]
        level: Option<StudyLevel>,
    },
    Videos {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long)]
        category: Option<VideoCategory>,
    },
    Events(EventsArgs),
    /// Run the profile assessment non-interactively and print the derived profile.
    Assess(AssessArgs),
    BookSession(BookSessionArgs),
    BookConsultation(BookConsultationArgs),
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("range").required(true).args(["date", "month"])))]
struct EventsArgs {
    #[arg(long)]
    date: Option<NaiveDate>,
    /// `YYYY-MM`
    #[arg(long, value_parser = parse_month)]
    month: Option<(i32, u32)>,
}

#[derive(Args, Debug)]
struct AssessArgs {
    #[arg(long)]
    knowledge: KnowledgeLevel,
    #[arg(long)]
    hebrew: HebrewReading,
    #[arg(long, value_delimiter = ',', required = true)]
    interests: Vec<StudyInterest>,
    #[arg(long)]
    goal: StudyGoal,
    #[arg(long)]
    time: DailyStudyTime,
}

#[derive(Args, Debug)]
struct SlotArgs {
    #[arg(long)]
    date: NaiveDate,
    /// `HH:MM`
    #[arg(long, value_parser = parse_time)]
    time: NaiveTime,
    /// Date the booking window starts from; defaults to the local date.
    #[arg(long)]
    today: Option<NaiveDate>,
    #[arg(long, default_value_t = DEFAULT_BOOKING_HORIZON_DAYS)]
    horizon_days: u32,
}

#[derive(Args, Debug)]
struct BookSessionArgs {
    #[arg(long)]
    study_type: StudyType,
    #[arg(long, default_value = "60")]
    duration: SessionDuration,
    #[arg(long)]
    topic: Option<String>,
    /// Specific partner id; omitted means an automatic match.
    #[arg(long)]
    partner: Option<i64>,
    #[command(flatten)]
    slot: SlotArgs,
}

#[derive(Args, Debug)]
struct BookConsultationArgs {
    #[arg(long = "type")]
    consultation_type: ConsultationType,
    #[arg(long, default_value = "45")]
    duration: ConsultationDuration,
    #[arg(long, default_value = "video")]
    meeting: MeetingType,
    #[arg(long)]
    notes: Option<String>,
    #[command(flatten)]
    slot: SlotArgs,
}

fn parse_month(value: &str) -> Result<(i32, u32), String> {
    let first = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d")
        .map_err(|err| format!("expected YYYY-MM: {err}"))?;
    Ok((chrono::Datelike::year(&first), chrono::Datelike::month(&first)))
}

fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|err| format!("expected HH:MM: {err}"))
}

#[derive(Serialize)]
struct ViewRow {
    view: ViewId,
    title: &'static str,
    public: bool,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Advances `wizard` until it reaches its final step.
fn advance_to_final_step(wizard: &mut Wizard) -> Result<()> {
    while !wizard.is_final_step() {
        if let Advance::Blocked = wizard.advance() {
            let step = wizard.current_step().map(|s| s.title).unwrap_or_default();
            bail!("wizard step '{step}' is incomplete");
        }
    }
    Ok(())
}

async fn submit(flow: &mut dyn BookingFlow, catalog: Arc<Catalog>) -> Result<()> {
    let request = flow
        .begin_submission()
        .context("booking request is incomplete")?;
    let service = InMemoryBookingService::new(catalog);
    let result = service.submit(request).await;
    match flow.finish_submission(result) {
        SubmissionStatus::Confirmed(confirmation) => print_json(confirmation),
        SubmissionStatus::Failed(message) => bail!("booking failed: {message}"),
        SubmissionStatus::Draft | SubmissionStatus::Submitting => {
            bail!("booking did not finish")
        }
    }
}

fn slot_today(slot: &SlotArgs) -> NaiveDate {
    slot.today.unwrap_or_else(|| Local::now().date_naive())
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "running tool command");
    let catalog = Arc::new(Catalog::fixtures());

    match cli.command {
        Command::Views => {
            let rows: Vec<ViewRow> = ViewId::ALL
                .iter()
                .map(|view| ViewRow {
                    view: *view,
                    title: view.title(),
                    public: view.is_public(),
                })
                .collect();
            print_json(&rows)?;
        }
        Command::Texts { query, level } => {
            let content = InMemoryContentCatalog::new(catalog);
            let texts = content.list_texts(&TextFilter { query, level }).await?;
            print_json(&texts)?;
        }
        Command::Videos { query, category } => {
            let content = InMemoryContentCatalog::new(catalog);
            let videos = content.list_videos(&VideoFilter { query, category }).await?;
            print_json(&videos)?;
        }
        Command::Events(args) => {
            let events = match (args.date, args.month) {
                (Some(date), _) => catalog.events_on(date),
                (None, Some((year, month))) => catalog.events_in_month(year, month),
                (None, None) => bail!("either --date or --month is required"),
            };
            print_json(&events)?;
        }
        Command::Assess(args) => {
            let mut flow = AssessmentFlow::new();
            let interests: Vec<&str> = args.interests.iter().map(|i| i.as_str()).collect();
            let steps = [
                vec![args.knowledge.as_str()],
                vec![args.hebrew.as_str()],
                interests,
                vec![args.goal.as_str()],
                vec![args.time.as_str()],
            ];
            for values in steps {
                for value in values {
                    flow.select(value)?;
                }
                if let Advance::Blocked = flow.wizard_mut().advance() {
                    bail!("assessment question left unanswered");
                }
            }
            let profile = flow.profile().context("assessment did not complete")?;
            print_json(&profile)?;
        }
        Command::BookSession(args) => {
            let mut flow = ScheduleSessionFlow::new(
                slot_today(&args.slot),
                args.slot.horizon_days,
                catalog.suggested_partners().to_vec(),
            );
            flow.choose_study_type(args.study_type);
            flow.choose_duration(args.duration);
            if let Some(topic) = &args.topic {
                flow.set_topic(topic);
            }
            flow.choose_date(args.slot.date)?;
            flow.choose_time(args.slot.time)?;
            match args.partner {
                Some(id) => flow.choose_partner(PartnerId(id))?,
                None => flow.choose_ai_partner(),
            }
            advance_to_final_step(flow.wizard_mut())?;
            submit(&mut flow, catalog).await?;
        }
        Command::BookConsultation(args) => {
            let mut flow = ConsultationFlow::new(slot_today(&args.slot), args.slot.horizon_days);
            flow.choose_type(args.consultation_type);
            flow.choose_duration(args.duration);
            flow.choose_meeting_type(args.meeting)?;
            flow.choose_date(args.slot.date)?;
            flow.choose_time(args.slot.time)?;
            if let Some(notes) = &args.notes {
                flow.set_notes(notes);
            }
            advance_to_final_step(flow.wizard_mut())?;
            submit(&mut flow, catalog).await?;
        }
    }

    Ok(())
}
