use super::*;
use crate::wizard::{Advance, Retreat, WizardPosition};

fn answers(
    knowledge: Option<KnowledgeLevel>,
    interests: &[StudyInterest],
    goal: Option<StudyGoal>,
) -> AssessmentAnswers {
    AssessmentAnswers {
        knowledge,
        hebrew: Some(HebrewReading::Basic),
        interests: interests.iter().copied().collect(),
        goal,
        daily_time: Some(DailyStudyTime::HalfHour),
    }
}

#[test]
fn scholars_and_advanced_students_rank_advanced() {
    for knowledge in [KnowledgeLevel::Advanced, KnowledgeLevel::Scholar] {
        let profile = derive_profile(&answers(Some(knowledge), &[], None));
        assert_eq!(profile.level, StudyLevel::Advanced);
    }
    let profile = derive_profile(&answers(Some(KnowledgeLevel::Intermediate), &[], None));
    assert_eq!(profile.level, StudyLevel::Intermediate);
    let profile = derive_profile(&answers(None, &[], None));
    assert_eq!(profile.level, StudyLevel::Beginner);
}

#[test]
fn recommendations_follow_interests_then_goal() {
    let profile = derive_profile(&answers(
        Some(KnowledgeLevel::Beginner),
        &[
            StudyInterest::Mishna,
            StudyInterest::Parasha,
            StudyInterest::Ethics,
        ],
        Some(StudyGoal::Teshuva),
    ));
    assert_eq!(
        profile.recommendations,
        vec![
            "Estudo Semanal da Parashat Hashavua",
            "Pirkei Avot com Chavrutas",
            "Programa de Mishná Estruturado",
            "Trilha de Fundamentos do Judaísmo",
        ]
    );
}

#[test]
fn torah_and_parasha_share_one_recommendation() {
    let profile = derive_profile(&answers(
        None,
        &[StudyInterest::Torah, StudyInterest::Parasha],
        Some(StudyGoal::Academic),
    ));
    assert_eq!(
        profile.recommendations,
        vec!["Estudo Semanal da Parashat Hashavua"]
    );
}

#[test]
fn unrelated_answers_give_no_recommendations() {
    let profile = derive_profile(&answers(
        Some(KnowledgeLevel::Scholar),
        &[StudyInterest::Kabbalah],
        Some(StudyGoal::Community),
    ));
    assert!(profile.recommendations.is_empty());
    assert_eq!(profile.match_profile().interests, vec![StudyInterest::Kabbalah]);
}

#[test]
fn each_question_gates_its_step() {
    let mut flow = AssessmentFlow::new();
    assert_eq!(flow.wizard().step_count(), QUESTIONS.len());
    assert!(!flow.wizard().can_advance());
    assert!(flow.select("scholar").expect("option"));
    assert_eq!(flow.wizard_mut().advance(), Advance::Moved(2));

    let err = flow.select("klingon").expect_err("unknown option");
    assert_eq!(
        err,
        SelectionError::UnknownOption {
            field: HEBREW,
            value: "klingon".into()
        }
    );
    assert!(!flow.wizard().can_advance());
}

#[test]
fn interests_toggle_on_and_off() {
    let mut flow = AssessmentFlow::new();
    flow.select("beginner").expect("knowledge");
    flow.wizard_mut().advance();
    flow.select("none").expect("hebrew");
    flow.wizard_mut().advance();
    assert_eq!(flow.current_question().map(|q| q.kind), Some(QuestionKind::Multiple));

    assert!(flow.select("talmud").expect("option"));
    assert!(flow.is_selected(INTERESTS, "talmud"));
    assert!(!flow.select("talmud").expect("option"));
    assert!(!flow.wizard().can_advance());
}

#[test]
fn full_walkthrough_derives_profile_once_completed() {
    let mut flow = AssessmentFlow::new();
    for (value, expected) in [
        ("intermediate", Advance::Moved(2)),
        ("fluent", Advance::Moved(3)),
    ] {
        flow.select(value).expect("option");
        assert_eq!(flow.wizard_mut().advance(), expected);
    }
    flow.select("ethics").expect("option");
    flow.select("mishna").expect("option");
    flow.wizard_mut().advance();
    flow.select("conversion").expect("option");
    flow.wizard_mut().advance();
    assert!(flow.profile().is_none());
    flow.select("1hour").expect("option");
    assert_eq!(flow.progress_percent(), 100);

    assert_eq!(flow.wizard_mut().advance(), Advance::Completed);
    assert_eq!(flow.wizard().position(), WizardPosition::Completed);
    let profile = flow.profile().expect("profile");
    assert_eq!(profile.level, StudyLevel::Intermediate);
    assert_eq!(profile.recommendations.len(), 3);
    assert_eq!(flow.answers().daily_time, Some(DailyStudyTime::OneHour));
}

#[test]
fn retreat_from_first_question_exits() {
    let mut flow = AssessmentFlow::new();
    assert_eq!(flow.wizard_mut().retreat(), Retreat::Exit);
}
