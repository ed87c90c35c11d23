use catalog::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSummary {
    pub unlocked_achievements: usize,
    pub total_achievements: usize,
    pub sessions: usize,
}

impl ProfileSummary {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            unlocked_achievements: catalog.achievements().iter().filter(|a| a.unlocked).count(),
            total_achievements: catalog.achievements().len(),
            sessions: catalog.study_history().len(),
        }
    }
}
