use catalog::QuizQuestion;
use tracing::debug;

/// Daily quiz: one question at a time, answer revealed on submit.
#[derive(Debug, Clone)]
pub struct QuizState {
    questions: Vec<QuizQuestion>,
    index: usize,
    selected: Option<usize>,
    revealed: bool,
    score: usize,
    answered: Vec<bool>,
    completed: bool,
}

impl QuizState {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let answered = vec![false; questions.len()];
        Self {
            questions,
            index: 0,
            selected: None,
            revealed: false,
            score: 0,
            answered,
            completed: false,
        }
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        if self.completed {
            return None;
        }
        self.questions.get(self.index)
    }

    /// Zero-based index of the current question.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered(&self) -> &[bool] {
        &self.answered
    }

    /// Ignored once the answer is revealed.
    pub fn select(&mut self, option: usize) {
        if self.revealed {
            return;
        }
        if let Some(question) = self.current() {
            if option < question.options.len() {
                self.selected = Some(option);
            }
        }
    }

    /// Reveals the answer and scores it. `None` without a selection.
    pub fn submit(&mut self) -> Option<bool> {
        if self.revealed {
            return None;
        }
        let selected = self.selected?;
        let correct = self.current()?.correct_option == selected;
        self.revealed = true;
        if correct {
            self.score += 1;
        }
        if let Some(slot) = self.answered.get_mut(self.index) {
            *slot = true;
        }
        debug!(question = self.index + 1, correct, "quiz answer submitted");
        Some(correct)
    }

    /// Moves to the next question, or completes the quiz after the last one.
    /// Only a revealed answer can be left behind.
    pub fn next(&mut self) {
        if !self.revealed || self.completed {
            return;
        }
        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.selected = None;
            self.revealed = false;
        } else {
            self.completed = true;
            debug!(score = self.score, total = self.total(), "quiz completed");
        }
    }

    pub fn restart(&mut self) {
        let questions = std::mem::take(&mut self.questions);
        *self = Self::new(questions);
    }

    pub fn percentage(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        ((self.score * 100) / self.questions.len()) as u32
    }

    pub fn score_message(&self) -> &'static str {
        score_message(self.percentage())
    }
}

pub fn score_message(percentage: u32) -> &'static str {
    match percentage {
        100.. => "Perfeito! Você é um verdadeiro estudioso! 🎉",
        80..=99 => "Excelente! Continue assim! 🌟",
        60..=79 => "Muito bom! Continue estudando! 📚",
        40..=59 => "Bom começo! Pratique mais! 💪",
        _ => "Continue estudando e você melhorará! 📖",
    }
}

#[cfg(test)]
mod tests {
    use catalog::Catalog;

    use super::*;

    fn quiz() -> QuizState {
        QuizState::new(Catalog::fixtures().quiz_questions().to_vec())
    }

    fn answer_all(quiz: &mut QuizState, correct: usize) {
        for i in 0..quiz.total() {
            let right = quiz.current().expect("question").correct_option;
            let pick = if i < correct { right } else { (right + 1) % 4 };
            quiz.select(pick);
            quiz.submit().expect("scored");
            quiz.next();
        }
    }

    #[test]
    fn submit_without_selection_is_a_no_op() {
        let mut quiz = quiz();
        assert_eq!(quiz.submit(), None);
        assert!(!quiz.is_revealed());
    }

    #[test]
    fn selection_is_frozen_after_reveal() {
        let mut quiz = quiz();
        let right = quiz.current().expect("question").correct_option;
        quiz.select(right);
        assert_eq!(quiz.submit(), Some(true));
        quiz.select((right + 1) % 4);
        assert_eq!(quiz.selected(), Some(right));
        assert_eq!(quiz.submit(), None);
        assert_eq!(quiz.score(), 1);
        assert!(quiz.answered()[0]);
    }

    #[test]
    fn next_waits_for_a_revealed_answer() {
        let mut quiz = quiz();
        for _ in 0..quiz.total() {
            quiz.next();
        }
        assert_eq!(quiz.index(), 0);
        assert!(!quiz.is_completed());

        let right = quiz.current().expect("question").correct_option;
        quiz.select(right);
        quiz.next();
        assert_eq!(quiz.index(), 0);

        quiz.submit().expect("scored");
        quiz.next();
        assert_eq!(quiz.index(), 1);
        assert!(!quiz.is_revealed());
        quiz.next();
        assert_eq!(quiz.index(), 1);
    }

    #[test]
    fn perfect_run_gets_top_band() {
        let mut quiz = quiz();
        answer_all(&mut quiz, 5);
        assert!(quiz.is_completed());
        assert!(quiz.current().is_none());
        assert_eq!(quiz.percentage(), 100);
        assert!(quiz.score_message().starts_with("Perfeito"));
    }

    #[test]
    fn partial_runs_fall_into_lower_bands() {
        let mut quiz = quiz();
        answer_all(&mut quiz, 3);
        assert_eq!(quiz.percentage(), 60);
        assert!(quiz.score_message().starts_with("Muito bom"));

        quiz.restart();
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.index(), 0);
        answer_all(&mut quiz, 1);
        assert_eq!(quiz.percentage(), 20);
        assert!(quiz.score_message().starts_with("Continue estudando e"));
    }

    #[test]
    fn bands_are_inclusive_at_thresholds() {
        assert!(score_message(80).starts_with("Excelente"));
        assert!(score_message(40).starts_with("Bom começo"));
        assert!(score_message(39).starts_with("Continue"));
    }
}
