use super::*;
use crate::wizard::{Advance, Retreat};

// 2025-11-16 is a Sunday.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 16).expect("date")
}

fn at(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).expect("time")
}

#[test]
fn defaults_to_standard_video_consultation() {
    let flow = ConsultationFlow::new(today(), 14);
    assert_eq!(flow.duration(), Some(ConsultationDuration::Standard));
    assert_eq!(flow.meeting_type(), Some(MeetingType::Video));
    assert!(flow.consultation_type().is_none());
    assert_eq!(flow.time_slots().len(), 9);
}

#[test]
fn in_person_meetings_are_refused() {
    let mut flow = ConsultationFlow::new(today(), 14);
    assert_eq!(
        flow.choose_meeting_type(MeetingType::InPerson),
        Err(SelectionError::MeetingTypeUnavailable(MeetingType::InPerson))
    );
    flow.choose_meeting_type(MeetingType::Phone).expect("phone");
    assert_eq!(flow.meeting_type(), Some(MeetingType::Phone));
}

#[test]
fn saturdays_are_not_bookable() {
    let mut flow = ConsultationFlow::new(today(), 14);
    let saturday = NaiveDate::from_ymd_opt(2025, 11, 22).expect("date");
    assert!(flow.calendar_dates().contains(&saturday));
    assert_eq!(
        flow.choose_date(saturday),
        Err(SelectionError::DateUnavailable(saturday))
    );
    let friday = NaiveDate::from_ymd_opt(2025, 11, 21).expect("date");
    flow.choose_date(friday).expect("friday is open");
    assert_eq!(flow.date(), Some(friday));
}

#[test]
fn notes_step_is_optional() {
    let mut flow = ConsultationFlow::new(today(), 14);
    flow.choose_type(ConsultationType::Halacha);
    assert_eq!(flow.wizard_mut().advance(), Advance::Moved(2));
    assert!(!flow.wizard().can_advance());
    flow.choose_date(today()).expect("date");
    flow.choose_time(at(14)).expect("slot");
    assert_eq!(flow.wizard_mut().advance(), Advance::Moved(3));
    assert!(flow.wizard().can_advance());
    assert_eq!(flow.wizard_mut().advance(), Advance::Moved(4));

    let request = flow.consultation_request().expect("request");
    assert_eq!(request.consultation_type, ConsultationType::Halacha);
    assert_eq!(request.time, at(14));
    assert!(request.notes.is_none());
    assert!(flow.can_submit());
}

#[test]
fn unoffered_time_is_refused() {
    let mut flow = ConsultationFlow::new(today(), 14);
    assert_eq!(
        flow.choose_time(at(12)),
        Err(SelectionError::TimeUnavailable(at(12)))
    );
}

#[test]
fn retreat_from_topic_step_exits() {
    let mut flow = ConsultationFlow::new(today(), 14);
    flow.choose_type(ConsultationType::Study);
    assert_eq!(flow.wizard_mut().retreat(), Retreat::Exit);
}
