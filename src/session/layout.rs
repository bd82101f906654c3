use serde::Serialize;

use crate::models::Role;

/// Dashboard panel that may be shown or hidden per role
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Search,
    SavedListings,
    AddProperty,
    PendingApprovals,
    Balance,
}

impl Section {
    /// Element id of the panel. Panels without a nav anchor return `None`.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Section::Search => Some("#search-section"),
            Section::AddProperty => Some("#add-property-section"),
            Section::PendingApprovals => Some("#pending-properties-section"),
            Section::SavedListings | Section::Balance => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardLayout {
    pub role: Role,
    pub sections: Vec<Section>,
}

impl DashboardLayout {
    pub fn for_role(role: Role) -> Self {
        let sections = match role {
            Role::Buyer => vec![Section::Search, Section::SavedListings],
            Role::Owner => vec![Section::AddProperty],
            Role::Agent => vec![
                Section::PendingApprovals,
                Section::AddProperty,
                Section::Balance,
            ],
        };
        Self { role, sections }
    }

    pub fn shows(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }

    /// Navigation links left visible, in display order.
    pub fn nav_links(&self) -> Vec<&'static str> {
        self.sections.iter().filter_map(|s| s.anchor()).collect()
    }

    /// Only agents reach the approval queue.
    pub fn can_approve(&self) -> bool {
        self.shows(Section::PendingApprovals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buyer_sees_search_and_saved() {
        let layout = DashboardLayout::for_role(Role::Buyer);
        assert!(layout.shows(Section::Search));
        assert!(layout.shows(Section::SavedListings));
        assert!(!layout.shows(Section::PendingApprovals));
        assert_eq!(layout.nav_links(), vec!["#search-section"]);
    }

    #[test]
    fn owner_sees_only_the_submission_form() {
        let layout = DashboardLayout::for_role(Role::Owner);
        assert_eq!(layout.sections, vec![Section::AddProperty]);
        assert_eq!(layout.nav_links(), vec!["#add-property-section"]);
        assert!(!layout.can_approve());
    }

    #[test]
    fn agent_sees_queue_form_and_balance() {
        let layout = DashboardLayout::for_role(Role::Agent);
        assert!(layout.can_approve());
        assert!(layout.shows(Section::Balance));
        assert!(!layout.shows(Section::Search));
        assert_eq!(
            layout.nav_links(),
            vec!["#pending-properties-section", "#add-property-section"]
        );
    }
}
