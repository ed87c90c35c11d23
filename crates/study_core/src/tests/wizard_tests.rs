use super::*;

fn topic_chosen(answers: &Answers) -> bool {
    answers.is_answered("topic")
}

fn slot_chosen(answers: &Answers) -> bool {
    answers.is_answered("slot")
}

fn tags_chosen(answers: &Answers) -> bool {
    answers.is_answered("tags")
}

fn confirmed(answers: &Answers) -> bool {
    answers.is_answered("confirm")
}

static FOUR_STEPS: WizardDefinition = WizardDefinition {
    name: "four-steps",
    steps: &[
        StepDefinition {
            key: "topic",
            title: "Tema",
            is_valid: topic_chosen,
        },
        StepDefinition {
            key: "slot",
            title: "Horário",
            is_valid: slot_chosen,
        },
        StepDefinition {
            key: "notes",
            title: "Observações",
            is_valid: always_valid,
        },
        StepDefinition {
            key: "confirm",
            title: "Confirmar",
            is_valid: confirmed,
        },
    ],
    defaults: Answers::new,
};

fn tag_defaults() -> Answers {
    Answers::new().with("note", AnswerValue::text("rascunho"))
}

static TAGS: WizardDefinition = WizardDefinition {
    name: "tags",
    steps: &[StepDefinition {
        key: "tags",
        title: "Interesses",
        is_valid: tags_chosen,
    }],
    defaults: tag_defaults,
};

#[test]
fn fresh_wizard_starts_at_step_one_with_defaults() {
    let wizard = Wizard::new(&TAGS);
    assert_eq!(wizard.position(), WizardPosition::Step(1));
    assert_eq!(wizard.answers().text("note"), Some("rascunho"));
    assert_eq!(wizard.step_count(), 1);
}

#[test]
fn single_choice_step_unlocks_after_answer() {
    let mut wizard = Wizard::new(&FOUR_STEPS);
    assert!(!wizard.can_advance());
    assert_eq!(wizard.advance(), Advance::Blocked);
    assert_eq!(wizard.step(), Some(1));

    wizard.set_answer("topic", AnswerValue::choice("talmud"));
    assert!(wizard.can_advance());
}

#[test]
fn empty_choice_does_not_count_as_answer() {
    let mut wizard = Wizard::new(&FOUR_STEPS);
    wizard.set_answer("topic", AnswerValue::choice(""));
    assert!(!wizard.can_advance());
}

#[test]
fn toggling_twice_restores_prior_answers() {
    let mut wizard = Wizard::new(&TAGS);
    let before = wizard.answers().clone();

    assert!(wizard.toggle_answer("tags", "ethics"));
    assert!(wizard.can_advance());
    assert!(!wizard.toggle_answer("tags", "ethics"));

    assert_eq!(wizard.answers(), &before);
    assert!(!wizard.can_advance());
}

#[test]
fn toggles_accumulate_independent_options() {
    let mut answers = Answers::new();
    answers.toggle("tags", "torah");
    answers.toggle("tags", "mishna");
    answers.toggle("tags", "torah");
    let selected: Vec<_> = answers
        .choices("tags")
        .expect("set")
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(selected, vec!["mishna"]);
}

#[test]
fn retreat_from_first_step_exits() {
    let mut wizard = Wizard::new(&FOUR_STEPS);
    assert_eq!(wizard.retreat(), Retreat::Exit);
    assert_eq!(wizard.step(), Some(1));
}

#[test]
fn retreat_keeps_answers() {
    let mut wizard = Wizard::new(&FOUR_STEPS);
    wizard.set_answer("topic", AnswerValue::choice("torah"));
    assert_eq!(wizard.advance(), Advance::Moved(2));
    assert_eq!(wizard.retreat(), Retreat::Moved(1));
    assert_eq!(wizard.answers().choice("topic"), Some("torah"));
}

#[test]
fn optional_third_step_still_reaches_completed() {
    let mut wizard = Wizard::new(&FOUR_STEPS);
    wizard.set_answer("topic", AnswerValue::choice("halacha"));
    assert_eq!(wizard.advance(), Advance::Moved(2));
    wizard.set_answer("slot", AnswerValue::choice("19:00"));
    assert_eq!(wizard.advance(), Advance::Moved(3));
    assert!(wizard.can_advance());
    assert_eq!(wizard.advance(), Advance::Moved(4));
    assert!(!wizard.can_advance());
    wizard.set_answer("confirm", AnswerValue::choice("yes"));

    assert_eq!(wizard.advance(), Advance::Completed);
    assert!(wizard.is_completed());
    assert!(wizard.answers().get("notes").is_none());
}

#[test]
fn completed_wizard_cannot_advance_or_mutate() {
    let mut wizard = Wizard::new(&TAGS);
    wizard.toggle_answer("tags", "kabbalah");
    assert_eq!(wizard.advance(), Advance::Completed);

    assert_eq!(wizard.advance(), Advance::Blocked);
    assert!(!wizard.can_advance());
    wizard.clear_answer("tags");
    assert!(wizard.toggle_answer("tags", "kabbalah"));
    assert!(wizard.answers().is_selected("tags", "kabbalah"));
    assert_eq!(wizard.position(), WizardPosition::Completed);
}

#[test]
fn complete_only_from_final_step() {
    let mut wizard = Wizard::new(&FOUR_STEPS);
    wizard.set_answer("topic", AnswerValue::choice("torah"));
    assert!(wizard.complete().is_none());
    assert_eq!(wizard.step(), Some(1));

    wizard.advance();
    wizard.set_answer("slot", AnswerValue::choice("07:00"));
    wizard.advance();
    wizard.advance();
    wizard.set_answer("confirm", AnswerValue::choice("yes"));

    let answers = wizard.complete().expect("answers");
    assert_eq!(answers.choice("slot"), Some("07:00"));
    assert_eq!(answers.len(), 3);
    assert!(wizard.complete().is_none());
}

#[test]
fn retreat_from_completed_exits() {
    let mut wizard = Wizard::new(&TAGS);
    wizard.toggle_answer("tags", "parasha");
    wizard.advance();
    assert_eq!(wizard.retreat(), Retreat::Exit);
}

#[test]
fn answers_serialize_with_kind_tags() {
    let answers = Answers::new()
        .with("topic", AnswerValue::choice("torah"))
        .with("partner", AnswerValue::Partner(PartnerId(2)));
    let value = serde_json::to_value(&answers).expect("json");
    assert_eq!(value["topic"]["kind"], "choice");
    assert_eq!(value["topic"]["value"], "torah");
    assert_eq!(value["partner"]["kind"], "partner");
    assert_eq!(value["partner"]["value"], 2);
}
