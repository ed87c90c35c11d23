use catalog::ChatMessage;

/// Study room call controls. Media transport is not wired; only the toggles are.
#[derive(Debug, Clone)]
pub struct StudyRoomState {
    video: bool,
    audio: bool,
    chat: Vec<ChatMessage>,
}

impl StudyRoomState {
    pub fn new(chat: Vec<ChatMessage>) -> Self {
        Self {
            video: true,
            audio: true,
            chat,
        }
    }

    pub fn video_enabled(&self) -> bool {
        self.video
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio
    }

    pub fn toggle_video(&mut self) -> bool {
        self.video = !self.video;
        self.video
    }

    pub fn toggle_audio(&mut self) -> bool {
        self.audio = !self.audio;
        self.audio
    }

    pub fn chat(&self) -> &[ChatMessage] {
        &self.chat
    }
}
