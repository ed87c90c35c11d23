use catalog::ChatMessage;
use chrono::NaiveTime;
use tracing::debug;

pub const OWN_AUTHOR: &str = "Você";
pub const LIVE_VIEWERS: u32 = 87;

/// Live weekly shiur: chat with local echo and a reminder toggle.
#[derive(Debug, Clone)]
pub struct ShiurState {
    messages: Vec<ChatMessage>,
    draft: String,
    notifications: bool,
    viewers: u32,
}

impl ShiurState {
    pub fn new(seed: Vec<ChatMessage>) -> Self {
        Self {
            messages: seed,
            draft: String::new(),
            notifications: true,
            viewers: LIVE_VIEWERS,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut String {
        &mut self.draft
    }

    pub fn viewers(&self) -> u32 {
        self.viewers
    }

    pub fn notifications_enabled(&self) -> bool {
        self.notifications
    }

    pub fn toggle_notifications(&mut self) -> bool {
        self.notifications = !self.notifications;
        self.notifications
    }

    /// Posts the trimmed draft; blank drafts are ignored and kept as typed.
    pub fn send(&mut self, at: NaiveTime) -> Option<&ChatMessage> {
        let body = self.draft.trim();
        if body.is_empty() {
            return None;
        }
        let message = ChatMessage {
            id: self.messages.len() as u32 + 1,
            author: OWN_AUTHOR.to_string(),
            body: body.to_string(),
            time: at.format("%H:%M").to_string(),
        };
        debug!(id = message.id, "shiur chat message posted");
        self.messages.push(message);
        self.draft.clear();
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use catalog::Catalog;

    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).expect("time")
    }

    #[test]
    fn sends_trimmed_messages_with_next_id() {
        let seed = Catalog::fixtures().shiur_chat().to_vec();
        let seeded = seed.len() as u32;
        let mut shiur = ShiurState::new(seed);
        *shiur.draft_mut() = "  Shalom!  ".into();

        let sent = shiur.send(at(20, 5)).expect("sent").clone();
        assert_eq!(sent.id, seeded + 1);
        assert_eq!(sent.author, "Você");
        assert_eq!(sent.body, "Shalom!");
        assert_eq!(sent.time, "20:05");
        assert!(shiur.draft().is_empty());
    }

    #[test]
    fn blank_drafts_are_ignored() {
        let mut shiur = ShiurState::new(Vec::new());
        *shiur.draft_mut() = "   ".into();
        assert!(shiur.send(at(9, 0)).is_none());
        assert!(shiur.messages().is_empty());
        assert_eq!(shiur.draft(), "   ");
    }

    #[test]
    fn notifications_start_enabled_and_toggle() {
        let mut shiur = ShiurState::new(Vec::new());
        assert!(shiur.notifications_enabled());
        assert!(!shiur.toggle_notifications());
        assert!(shiur.toggle_notifications());
        assert_eq!(shiur.viewers(), 87);
    }
}
