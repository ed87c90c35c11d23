//! Linear multi-step data collection with per-step validity gating.
//!
//! A [`WizardDefinition`] is static: the step list, each step's predicate
//! and the answers a fresh instance starts with. A [`Wizard`] is the live
//! value held by a mounted screen; dropping it discards partial answers.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use shared::domain::PartnerId;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnswerValue {
    Choice(String),
    Choices(BTreeSet<String>),
    Text(String),
    /// Reference to an existing study partner.
    Partner(PartnerId),
}

impl AnswerValue {
    pub fn choice(value: impl Into<String>) -> Self {
        AnswerValue::Choice(value.into())
    }

    pub fn text(value: impl Into<String>) -> Self {
        AnswerValue::Text(value.into())
    }

    fn is_answered(&self) -> bool {
        match self {
            AnswerValue::Choice(value) => !value.is_empty(),
            AnswerValue::Choices(values) => !values.is_empty(),
            AnswerValue::Text(value) => !value.trim().is_empty(),
            AnswerValue::Partner(_) => true,
        }
    }
}

/// Answers keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<&'static str, AnswerValue>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: AnswerValue) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.0.get(key)
    }

    pub fn set(&mut self, key: &'static str, value: AnswerValue) {
        self.0.insert(key, value);
    }

    pub fn clear(&mut self, key: &str) -> Option<AnswerValue> {
        self.0.remove(key)
    }

    /// Adds `option` to the set under `key`, or removes it when present.
    /// Returns whether the option is selected afterwards. The key disappears
    /// once its set is empty, so add-then-remove restores the prior answers.
    pub fn toggle(&mut self, key: &'static str, option: &str) -> bool {
        let mut set = match self.0.remove(key) {
            Some(AnswerValue::Choices(set)) => set,
            _ => BTreeSet::new(),
        };
        let selected = if set.remove(option) {
            false
        } else {
            set.insert(option.to_string());
            true
        };
        if !set.is_empty() {
            self.0.insert(key, AnswerValue::Choices(set));
        }
        selected
    }

    pub fn is_answered(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(AnswerValue::is_answered)
    }

    pub fn choice(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(AnswerValue::Choice(value)) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    /// Parses a single-choice answer into its typed tag.
    pub fn parsed<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.choice(key).and_then(|value| value.parse().ok())
    }

    pub fn choices(&self, key: &str) -> Option<&BTreeSet<String>> {
        match self.0.get(key) {
            Some(AnswerValue::Choices(values)) => Some(values),
            _ => None,
        }
    }

    pub fn is_selected(&self, key: &str, option: &str) -> bool {
        self.choices(key).is_some_and(|set| set.contains(option))
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(AnswerValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub fn partner(&self, key: &str) -> Option<PartnerId> {
        match self.0.get(key) {
            Some(AnswerValue::Partner(id)) => Some(*id),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &AnswerValue)> {
        self.0.iter().map(|(key, value)| (*key, value))
    }
}

pub type StepPredicate = fn(&Answers) -> bool;

#[derive(Debug, Clone, Copy)]
pub struct StepDefinition {
    pub key: &'static str,
    pub title: &'static str,
    pub is_valid: StepPredicate,
}

/// Predicate for optional and review steps.
pub fn always_valid(_: &Answers) -> bool {
    true
}

#[derive(Debug)]
pub struct WizardDefinition {
    pub name: &'static str,
    pub steps: &'static [StepDefinition],
    pub defaults: fn() -> Answers,
}

impl WizardDefinition {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardPosition {
    /// One-based step number.
    Step(usize),
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(usize),
    Completed,
    /// The current step is invalid, or the wizard is already completed.
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    Moved(usize),
    /// Retreat from the first step; the host screen leaves the wizard.
    Exit,
}

#[derive(Debug, Clone)]
pub struct Wizard {
    definition: &'static WizardDefinition,
    position: WizardPosition,
    answers: Answers,
}

impl Wizard {
    pub fn new(definition: &'static WizardDefinition) -> Self {
        debug_assert!(!definition.steps.is_empty(), "wizard without steps");
        Self {
            definition,
            position: WizardPosition::Step(1),
            answers: (definition.defaults)(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.definition.name
    }

    pub fn step_count(&self) -> usize {
        self.definition.step_count()
    }

    pub fn steps(&self) -> &'static [StepDefinition] {
        self.definition.steps
    }

    pub fn position(&self) -> WizardPosition {
        self.position
    }

    pub fn step(&self) -> Option<usize> {
        match self.position {
            WizardPosition::Step(step) => Some(step),
            WizardPosition::Completed => None,
        }
    }

    pub fn current_step(&self) -> Option<&'static StepDefinition> {
        self.step().and_then(|step| self.definition.steps.get(step - 1))
    }

    pub fn is_final_step(&self) -> bool {
        self.step() == Some(self.step_count())
    }

    pub fn is_completed(&self) -> bool {
        self.position == WizardPosition::Completed
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn set_answer(&mut self, key: &'static str, value: AnswerValue) {
        if self.reject_if_completed("set_answer") {
            return;
        }
        self.answers.set(key, value);
    }

    pub fn clear_answer(&mut self, key: &'static str) {
        if self.reject_if_completed("clear_answer") {
            return;
        }
        self.answers.clear(key);
    }

    /// Multi-select toggle; see [`Answers::toggle`].
    pub fn toggle_answer(&mut self, key: &'static str, option: &str) -> bool {
        if self.reject_if_completed("toggle_answer") {
            return self.answers.is_selected(key, option);
        }
        self.answers.toggle(key, option)
    }

    pub fn can_advance(&self) -> bool {
        self.current_step()
            .is_some_and(|step| (step.is_valid)(&self.answers))
    }

    pub fn advance(&mut self) -> Advance {
        let Some(step) = self.step() else {
            return Advance::Blocked;
        };
        if !self.can_advance() {
            return Advance::Blocked;
        }

        if step == self.step_count() {
            self.position = WizardPosition::Completed;
            debug!(wizard = self.name(), "wizard completed");
            Advance::Completed
        } else {
            self.position = WizardPosition::Step(step + 1);
            debug!(wizard = self.name(), step = step + 1, "wizard advanced");
            Advance::Moved(step + 1)
        }
    }

    pub fn retreat(&mut self) -> Retreat {
        match self.position {
            WizardPosition::Step(step) if step > 1 => {
                self.position = WizardPosition::Step(step - 1);
                debug!(wizard = self.name(), step = step - 1, "wizard retreated");
                Retreat::Moved(step - 1)
            }
            _ => {
                debug!(wizard = self.name(), "wizard exit requested");
                Retreat::Exit
            }
        }
    }

    /// Finishes the wizard from its last step and hands out the answers.
    /// `None` before the last step or while the last step is invalid.
    pub fn complete(&mut self) -> Option<Answers> {
        if !self.is_final_step() {
            return None;
        }
        match self.advance() {
            Advance::Completed => Some(self.answers.clone()),
            _ => None,
        }
    }

    fn reject_if_completed(&self, action: &'static str) -> bool {
        if self.is_completed() {
            warn!(wizard = self.name(), action, "ignored mutation of a completed wizard");
            return true;
        }
        false
    }
}

#[cfg(test)]
#[path = "tests/wizard_tests.rs"]
mod tests;
