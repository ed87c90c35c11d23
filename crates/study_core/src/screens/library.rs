use catalog::{Catalog, TextMatch, VideoEntry};
use shared::{
    domain::{StudyLevel, VideoCategory, VideoId},
    protocol::{TextFilter, VideoFilter},
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LibraryTab {
    #[default]
    Texts,
    Videos,
}

/// Text and video browsing. Result lists are replaced by whatever the
/// content service answers for the filter currently shown; answers for an
/// older filter are dropped.
#[derive(Debug, Clone)]
pub struct LibraryState {
    tab: LibraryTab,
    text_filter: TextFilter,
    texts: Vec<TextMatch>,
    video_filter: VideoFilter,
    videos: Vec<VideoEntry>,
    selected_video: Option<VideoId>,
}

impl LibraryState {
    /// Opens with unfiltered results taken straight from the catalog.
    pub fn new(catalog: &Catalog) -> Self {
        let text_filter = TextFilter::default();
        let video_filter = VideoFilter::default();
        Self {
            tab: LibraryTab::Texts,
            texts: catalog.search_texts(&text_filter),
            videos: catalog.filter_videos(&video_filter),
            text_filter,
            video_filter,
            selected_video: None,
        }
    }

    pub fn tab(&self) -> LibraryTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: LibraryTab) {
        self.tab = tab;
    }

    pub fn text_filter(&self) -> &TextFilter {
        &self.text_filter
    }

    pub fn texts(&self) -> &[TextMatch] {
        &self.texts
    }

    pub fn video_filter(&self) -> &VideoFilter {
        &self.video_filter
    }

    pub fn videos(&self) -> &[VideoEntry] {
        &self.videos
    }

    /// Returns the filter to query, `None` when nothing changed.
    pub fn set_text_query(&mut self, query: &str) -> Option<TextFilter> {
        if self.text_filter.query == query {
            return None;
        }
        self.text_filter.query = query.to_string();
        Some(self.text_filter.clone())
    }

    pub fn set_text_level(&mut self, level: Option<StudyLevel>) -> Option<TextFilter> {
        if self.text_filter.level == level {
            return None;
        }
        self.text_filter.level = level;
        Some(self.text_filter.clone())
    }

    pub fn set_video_query(&mut self, query: &str) -> Option<VideoFilter> {
        if self.video_filter.query == query {
            return None;
        }
        self.video_filter.query = query.to_string();
        Some(self.video_filter.clone())
    }

    pub fn set_video_category(&mut self, category: Option<VideoCategory>) -> Option<VideoFilter> {
        if self.video_filter.category == category {
            return None;
        }
        self.video_filter.category = category;
        Some(self.video_filter.clone())
    }

    pub fn apply_texts(&mut self, filter: &TextFilter, texts: Vec<TextMatch>) -> bool {
        if filter != &self.text_filter {
            debug!(query = %filter.query, "dropping stale text results");
            return false;
        }
        self.texts = texts;
        true
    }

    pub fn apply_videos(&mut self, filter: &VideoFilter, videos: Vec<VideoEntry>) -> bool {
        if filter != &self.video_filter {
            debug!(query = %filter.query, "dropping stale video results");
            return false;
        }
        self.videos = videos;
        if let Some(id) = self.selected_video {
            if !self.videos.iter().any(|v| v.id == id) {
                self.selected_video = None;
            }
        }
        true
    }

    pub fn select_video(&mut self, id: VideoId) {
        if self.videos.iter().any(|v| v.id == id) {
            self.selected_video = Some(id);
        }
    }

    pub fn close_video(&mut self) {
        self.selected_video = None;
    }

    pub fn selected_video(&self) -> Option<&VideoEntry> {
        let id = self.selected_video?;
        self.videos.iter().find(|v| v.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_filters_need_no_query() {
        let catalog = Catalog::fixtures();
        let mut library = LibraryState::new(&catalog);
        assert!(library.set_text_query("").is_none());
        assert!(library.set_video_category(None).is_none());
        assert_eq!(library.videos().len(), catalog.videos().len());
    }

    #[test]
    fn stale_text_results_are_dropped() {
        let catalog = Catalog::fixtures();
        let mut library = LibraryState::new(&catalog);
        let first = library.set_text_query("talmud").expect("changed");
        let second = library.set_text_query("mishn").expect("changed");

        assert!(!library.apply_texts(&first, catalog.search_texts(&first)));
        assert!(library.apply_texts(&second, catalog.search_texts(&second)));
        assert!(library
            .texts()
            .iter()
            .all(|hit| hit.text.name.to_lowercase().contains("mishn")
                || hit.category.to_lowercase().contains("mishn")));
    }

    #[test]
    fn selected_video_is_cleared_when_filtered_out() {
        let catalog = Catalog::fixtures();
        let mut library = LibraryState::new(&catalog);
        library.set_tab(LibraryTab::Videos);
        library.select_video(VideoId(8));
        assert_eq!(library.selected_video().map(|v| v.id), Some(VideoId(8)));

        let filter = library
            .set_video_category(Some(VideoCategory::Torah))
            .expect("changed");
        library.apply_videos(&filter, catalog.filter_videos(&filter));
        assert!(library.selected_video().is_none());
        assert_eq!(library.videos().len(), 2);
    }
}
