//! UI state - presentation state separate from domain data

/// The top-level views, switched with the tab keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Complaints,
    Issues,
    Repairs,
    Tasks,
    Sms,
    Campaigns,
    Users,
}

impl View {
    pub fn all() -> Vec<View> {
        vec![
            View::Dashboard,
            View::Complaints,
            View::Issues,
            View::Repairs,
            View::Tasks,
            View::Sms,
            View::Campaigns,
            View::Users,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Complaints => "Complaints",
            View::Issues => "Customer Issues",
            View::Repairs => "STB Repairs",
            View::Tasks => "Technician Tasks",
            View::Sms => "SMS",
            View::Campaigns => "Campaigns",
            View::Users => "Users",
        }
    }

    /// Slug used for export file names.
    pub fn slug(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Complaints => "complaints",
            View::Issues => "customer-issues",
            View::Repairs => "stb-repairs",
            View::Tasks => "technician-tasks",
            View::Sms => "sms",
            View::Campaigns => "campaigns",
            View::Users => "users",
        }
    }

    pub fn next(&self) -> View {
        let views = View::all();
        let idx = views.iter().position(|v| v == self).unwrap_or(0);
        views[(idx + 1) % views.len()]
    }

    pub fn prev(&self) -> View {
        let views = View::all();
        let idx = views.iter().position(|v| v == self).unwrap_or(0);
        views[(idx + views.len() - 1) % views.len()]
    }
}

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Login,
    Running,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_cycle_wraps() {
        assert_eq!(View::Users.next(), View::Dashboard);
        assert_eq!(View::Dashboard.prev(), View::Users);
        assert_eq!(View::Complaints.next(), View::Issues);
    }
}
