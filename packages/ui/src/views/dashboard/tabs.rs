/// Dashboard sections, in sidebar order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    #[default]
    Overview,
    Jobs,
    Profile,
    Settings,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Overview,
        DashboardTab::Jobs,
        DashboardTab::Profile,
        DashboardTab::Settings,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::Jobs => "jobs",
            DashboardTab::Profile => "profile",
            DashboardTab::Settings => "settings",
        }
    }

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Jobs => "My Jobs",
            DashboardTab::Profile => "Profile",
            DashboardTab::Settings => "Settings",
        }
    }

    /// Header title: the id with its first letter capitalised.
    pub fn title(&self) -> String {
        let id = self.id();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_overview() {
        assert_eq!(DashboardTab::default(), DashboardTab::Overview);
    }

    #[test]
    fn test_ids_are_distinct() {
        let ids: std::collections::HashSet<_> = DashboardTab::ALL.iter().map(|t| t.id()).collect();
        assert_eq!(ids.len(), DashboardTab::ALL.len());
    }

    #[test]
    fn test_titles_and_labels() {
        assert_eq!(DashboardTab::Jobs.title(), "Jobs");
        assert_eq!(DashboardTab::Jobs.label(), "My Jobs");
        assert_eq!(DashboardTab::Settings.title(), "Settings");
    }
}
