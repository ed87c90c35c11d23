use std::collections::BTreeSet;

use serde::Serialize;
use shared::domain::{
    DailyStudyTime, HebrewReading, KnowledgeLevel, StudyGoal, StudyInterest, StudyLevel,
};

use crate::{
    error::SelectionError,
    wizard::{AnswerValue, Answers, StepDefinition, Wizard, WizardDefinition},
    MatchProfile,
};

pub const KNOWLEDGE: &str = "knowledge";
pub const HEBREW: &str = "hebrew";
pub const INTERESTS: &str = "interests";
pub const GOAL: &str = "goal";
pub const DAILY_TIME: &str = "daily_time";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Single,
    Multiple,
}

#[derive(Debug, Clone, Copy)]
pub struct AnswerOption {
    pub value: &'static str,
    pub label: &'static str,
    pub description: Option<&'static str>,
}

const fn option(
    value: &'static str,
    label: &'static str,
    description: Option<&'static str>,
) -> AnswerOption {
    AnswerOption {
        value,
        label,
        description,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AssessmentQuestion {
    pub key: &'static str,
    pub title: &'static str,
    pub kind: QuestionKind,
    pub options: &'static [AnswerOption],
}

impl AssessmentQuestion {
    pub fn option(&self, value: &str) -> Option<&'static AnswerOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

pub static QUESTIONS: [AssessmentQuestion; 5] = [
    AssessmentQuestion {
        key: KNOWLEDGE,
        title: "Qual é seu nível atual de conhecimento judaico?",
        kind: QuestionKind::Single,
        options: &[
            option("beginner", "Iniciante", Some("Pouco ou nenhum conhecimento formal")),
            option(
                "intermediate",
                "Intermediário",
                Some("Tenho conhecimento básico e experiência"),
            ),
            option("advanced", "Avançado", Some("Estudo regularmente há anos")),
            option("scholar", "Estudioso", Some("Conhecimento profundo e acadêmico")),
        ],
    },
    AssessmentQuestion {
        key: HEBREW,
        title: "Qual é seu nível de leitura em hebraico?",
        kind: QuestionKind::Single,
        options: &[
            option("none", "Não leio hebraico", Some("Preciso de transliteração")),
            option("basic", "Básico", Some("Leio com dificuldade")),
            option("intermediate", "Intermediário", Some("Leio com fluência moderada")),
            option("fluent", "Fluente", Some("Leio e compreendo bem")),
        ],
    },
    AssessmentQuestion {
        key: INTERESTS,
        title: "Quais áreas de estudo te interessam mais?",
        kind: QuestionKind::Multiple,
        options: &[
            option("torah", "Torá e Chumash", None),
            option("mishna", "Mishná", None),
            option("talmud", "Talmud (Guemará)", None),
            option("halacha", "Halachá (Lei Judaica)", None),
            option("kabbalah", "Cabala e Misticismo", None),
            option("ethics", "Ética (Pirkei Avot, Mussar)", None),
            option("philosophy", "Filosofia Judaica", None),
            option("parasha", "Parashat Hashavua", None),
        ],
    },
    AssessmentQuestion {
        key: GOAL,
        title: "Qual é seu objetivo principal de estudo?",
        kind: QuestionKind::Single,
        options: &[
            option("personal", "Crescimento Pessoal", Some("Fortalecer conexão espiritual")),
            option("conversion", "Processo de Guiyur", Some("Preparação para conversão")),
            option("teshuva", "Retorno (Baal Teshuva)", Some("Aprofundar prática judaica")),
            option("academic", "Estudo Acadêmico", Some("Conhecimento aprofundado e sistemático")),
            option("community", "Liderança Comunitária", Some("Ensinar e guiar outros")),
        ],
    },
    AssessmentQuestion {
        key: DAILY_TIME,
        title: "Quanto tempo você pode dedicar ao estudo diariamente?",
        kind: QuestionKind::Single,
        options: &[
            option("15min", "15-30 minutos", Some("Estudo breve e focado")),
            option("30min", "30-60 minutos", Some("Sessão de estudo regular")),
            option("1hour", "1-2 horas", Some("Estudo aprofundado")),
            option("2hours", "Mais de 2 horas", Some("Dedicação intensiva")),
        ],
    },
];

fn knowledge_answered(answers: &Answers) -> bool {
    answers.is_answered(KNOWLEDGE)
}

fn hebrew_answered(answers: &Answers) -> bool {
    answers.is_answered(HEBREW)
}

fn interests_answered(answers: &Answers) -> bool {
    answers.is_answered(INTERESTS)
}

fn goal_answered(answers: &Answers) -> bool {
    answers.is_answered(GOAL)
}

fn daily_time_answered(answers: &Answers) -> bool {
    answers.is_answered(DAILY_TIME)
}

pub static PROFILE_ASSESSMENT: WizardDefinition = WizardDefinition {
    name: "assessment",
    steps: &[
        StepDefinition {
            key: KNOWLEDGE,
            title: "Conhecimento",
            is_valid: knowledge_answered,
        },
        StepDefinition {
            key: HEBREW,
            title: "Hebraico",
            is_valid: hebrew_answered,
        },
        StepDefinition {
            key: INTERESTS,
            title: "Interesses",
            is_valid: interests_answered,
        },
        StepDefinition {
            key: GOAL,
            title: "Objetivo",
            is_valid: goal_answered,
        },
        StepDefinition {
            key: DAILY_TIME,
            title: "Disponibilidade",
            is_valid: daily_time_answered,
        },
    ],
    defaults: Answers::new,
};

/// Typed view over the raw assessment answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssessmentAnswers {
    pub knowledge: Option<KnowledgeLevel>,
    pub hebrew: Option<HebrewReading>,
    pub interests: BTreeSet<StudyInterest>,
    pub goal: Option<StudyGoal>,
    pub daily_time: Option<DailyStudyTime>,
}

impl AssessmentAnswers {
    pub fn from_answers(answers: &Answers) -> Self {
        let interests = answers
            .choices(INTERESTS)
            .map(|set| set.iter().filter_map(|tag| tag.parse().ok()).collect())
            .unwrap_or_default();
        Self {
            knowledge: answers.parsed(KNOWLEDGE),
            hebrew: answers.parsed(HEBREW),
            interests,
            goal: answers.parsed(GOAL),
            daily_time: answers.parsed(DAILY_TIME),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentProfile {
    pub level: StudyLevel,
    pub recommendations: Vec<&'static str>,
    pub interests: Vec<StudyInterest>,
}

impl AssessmentProfile {
    pub fn match_profile(&self) -> MatchProfile {
        MatchProfile {
            level: Some(self.level),
            interests: self.interests.clone(),
        }
    }
}

pub fn derive_profile(answers: &AssessmentAnswers) -> AssessmentProfile {
    let level = match answers.knowledge {
        Some(KnowledgeLevel::Advanced | KnowledgeLevel::Scholar) => StudyLevel::Advanced,
        Some(KnowledgeLevel::Intermediate) => StudyLevel::Intermediate,
        Some(KnowledgeLevel::Beginner) | None => StudyLevel::Beginner,
    };

    let interested = |interest| answers.interests.contains(&interest);
    let mut recommendations = Vec::new();
    if interested(StudyInterest::Torah) || interested(StudyInterest::Parasha) {
        recommendations.push("Estudo Semanal da Parashat Hashavua");
    }
    if interested(StudyInterest::Ethics) {
        recommendations.push("Pirkei Avot com Chavrutas");
    }
    if interested(StudyInterest::Mishna) {
        recommendations.push("Programa de Mishná Estruturado");
    }
    if matches!(
        answers.goal,
        Some(StudyGoal::Conversion | StudyGoal::Teshuva)
    ) {
        recommendations.push("Trilha de Fundamentos do Judaísmo");
    }

    AssessmentProfile {
        level,
        recommendations,
        interests: answers.interests.iter().copied().collect(),
    }
}

/// Five-question profile assessment.
#[derive(Debug, Clone)]
pub struct AssessmentFlow {
    wizard: Wizard,
}

impl Default for AssessmentFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentFlow {
    pub fn new() -> Self {
        Self {
            wizard: Wizard::new(&PROFILE_ASSESSMENT),
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut Wizard {
        &mut self.wizard
    }

    pub fn current_question(&self) -> Option<&'static AssessmentQuestion> {
        self.wizard
            .step()
            .and_then(|step| QUESTIONS.get(step - 1))
    }

    /// Answers the current question: replaces a single choice or toggles a
    /// multi-select option. Returns whether `value` is selected afterwards.
    pub fn select(&mut self, value: &str) -> Result<bool, SelectionError> {
        let Some(question) = self.current_question() else {
            return Ok(false);
        };
        let Some(option) = question.option(value) else {
            return Err(SelectionError::UnknownOption {
                field: question.key,
                value: value.to_string(),
            });
        };

        Ok(match question.kind {
            QuestionKind::Single => {
                self.wizard
                    .set_answer(question.key, AnswerValue::choice(option.value));
                true
            }
            QuestionKind::Multiple => self.wizard.toggle_answer(question.key, option.value),
        })
    }

    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        let answers = self.wizard.answers();
        answers.choice(key) == Some(value) || answers.is_selected(key, value)
    }

    pub fn progress_percent(&self) -> u8 {
        let total = self.wizard.step_count();
        let done = self.wizard.step().unwrap_or(total);
        ((done * 100) / total.max(1)) as u8
    }

    pub fn answers(&self) -> AssessmentAnswers {
        AssessmentAnswers::from_answers(self.wizard.answers())
    }

    /// Derived profile, available once every question is answered and the
    /// wizard completed.
    pub fn profile(&self) -> Option<AssessmentProfile> {
        self.wizard
            .is_completed()
            .then(|| derive_profile(&self.answers()))
    }
}

#[cfg(test)]
#[path = "../tests/assessment_tests.rs"]
mod tests;
