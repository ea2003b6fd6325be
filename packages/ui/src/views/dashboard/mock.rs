//! Static placeholder content shown on the dashboard. Nothing here is fetched.

/// Which icon a stat card shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatKind {
    Applications,
    Interviews,
    ProfileViews,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub kind: StatKind,
    pub label: &'static str,
    pub value: &'static str,
    /// CSS colour for the icon badge.
    pub accent: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        kind: StatKind::Applications,
        label: "Total Applications",
        value: "12",
        accent: "var(--primary)",
    },
    Stat {
        kind: StatKind::Interviews,
        label: "Interviews Scheduled",
        value: "3",
        accent: "#10b981",
    },
    Stat {
        kind: StatKind::ProfileViews,
        label: "Profile Views",
        value: "284",
        accent: "#f59e0b",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DailyViews {
    pub day: &'static str,
    pub views: u32,
}

pub const WEEKLY_VIEWS: [DailyViews; 7] = [
    DailyViews { day: "Mon", views: 40 },
    DailyViews { day: "Tue", views: 30 },
    DailyViews { day: "Wed", views: 60 },
    DailyViews { day: "Thu", views: 45 },
    DailyViews { day: "Fri", views: 80 },
    DailyViews { day: "Sat", views: 55 },
    DailyViews { day: "Sun", views: 70 },
];

/// Bar height for `views` as a percentage of the busiest day.
pub fn views_percent(views: u32) -> u32 {
    let peak = WEEKLY_VIEWS.iter().map(|d| d.views).max().unwrap_or(0);
    if peak == 0 {
        return 0;
    }
    views * 100 / peak
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplicationStatus {
    Applied,
    InReview,
    Interview,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::InReview => "In Review",
            ApplicationStatus::Interview => "Interview",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ApplicationStatus::Interview => "status-badge status-interview",
            _ => "status-badge",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Application {
    pub role: &'static str,
    pub company: &'static str,
    pub status: ApplicationStatus,
    pub applied: &'static str,
    pub logo: &'static str,
}

pub const APPLICATIONS: [Application; 3] = [
    Application {
        role: "Senior Frontend Developer",
        company: "TechCorp Inc.",
        status: ApplicationStatus::InReview,
        applied: "2 days ago",
        logo: "TC",
    },
    Application {
        role: "Product Designer",
        company: "Creative Studio",
        status: ApplicationStatus::Interview,
        applied: "5 days ago",
        logo: "CS",
    },
    Application {
        role: "Full Stack Engineer",
        company: "StartUp Co.",
        status: ApplicationStatus::Applied,
        applied: "1 week ago",
        logo: "SC",
    },
];
