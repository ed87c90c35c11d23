use catalog::Candidate;
use shared::domain::{CandidateId, MatchDecision};
use tracing::debug;

/// Candidate deck browsed one card at a time.
///
/// Both decisions advance the deck, saturating at the last card. A like first
/// shows a match banner; the deck moves on once the banner is acknowledged.
#[derive(Debug, Clone)]
pub struct MatchDeck {
    candidates: Vec<Candidate>,
    index: usize,
    matched: Option<CandidateId>,
}

impl MatchDeck {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            index: 0,
            matched: None,
        }
    }

    pub fn current(&self) -> Option<&Candidate> {
        self.candidates.get(self.index)
    }

    /// One-based position and deck size, for the "n de m" counter.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.candidates.len())
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.candidates.len()
    }

    pub fn matched(&self) -> Option<&Candidate> {
        let id = self.matched?;
        self.candidates.iter().find(|c| c.id == id)
    }

    /// Returns the decision to record, `None` while a match banner is showing.
    pub fn like(&mut self) -> Option<(CandidateId, MatchDecision)> {
        if self.matched.is_some() {
            return None;
        }
        let id = self.current()?.id;
        self.matched = Some(id);
        debug!(candidate = id.0, "candidate liked");
        Some((id, MatchDecision::Like))
    }

    pub fn pass(&mut self) -> Option<(CandidateId, MatchDecision)> {
        if self.matched.is_some() {
            return None;
        }
        let id = self.current()?.id;
        self.step_forward();
        debug!(candidate = id.0, "candidate passed");
        Some((id, MatchDecision::Pass))
    }

    pub fn acknowledge_match(&mut self) {
        if self.matched.take().is_some() {
            self.step_forward();
        }
    }

    fn step_forward(&mut self) {
        if !self.is_last() {
            self.index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use catalog::Catalog;

    use super::*;

    fn deck() -> MatchDeck {
        MatchDeck::new(Catalog::fixtures().candidates().to_vec())
    }

    #[test]
    fn pass_advances_and_saturates() {
        let mut deck = deck();
        let total = deck.position().1;
        for _ in 0..total + 2 {
            deck.pass();
        }
        assert_eq!(deck.position(), (total, total));
        assert!(deck.is_last());
        assert!(deck.current().is_some());
    }

    #[test]
    fn like_waits_for_acknowledgement() {
        let mut deck = deck();
        let first = deck.current().expect("card").id;
        assert_eq!(deck.like(), Some((first, MatchDecision::Like)));
        assert_eq!(deck.matched().map(|c| c.id), Some(first));
        assert_eq!(deck.current().map(|c| c.id), Some(first));
        assert!(deck.pass().is_none());

        deck.acknowledge_match();
        assert!(deck.matched().is_none());
        assert_eq!(deck.position().0, 2);
    }

    #[test]
    fn empty_deck_records_nothing() {
        let mut deck = MatchDeck::new(Vec::new());
        assert!(deck.like().is_none());
        assert!(deck.pass().is_none());
        deck.acknowledge_match();
        assert!(deck.current().is_none());
    }
}
