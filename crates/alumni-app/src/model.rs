// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::ids::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl EmploymentType {
    pub const ALL: [Self; 4] = [
        Self::FullTime,
        Self::PartTime,
        Self::Contract,
        Self::Internship,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
            Self::Internship => "Internship",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Full-time" => Some(Self::FullTime),
            "Part-time" => Some(Self::PartTime),
            "Contract" => Some(Self::Contract),
            "Internship" => Some(Self::Internship),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ViewKind {
    Dashboard,
    Directory,
    Events,
    Profile,
}

impl ViewKind {
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Directory, Self::Events, Self::Profile];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Directory => "directory",
            Self::Events => "events",
            Self::Profile => "profile",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dashboard" => Some(Self::Dashboard),
            "directory" => Some(Self::Directory),
            "events" => Some(Self::Events),
            "profile" => Some(Self::Profile),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Directory => "Directory",
            Self::Events => "Events",
            Self::Profile => "Profile",
        }
    }

    /// Page heading shown above the active view.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Directory => "Alumni Directory",
            Self::Events => "Events",
            Self::Profile => "My Profile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Facet {
    Year,
    Major,
    Location,
}

impl Facet {
    pub const ALL: [Self; 3] = [Self::Year, Self::Major, Self::Location];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Major => "major",
            Self::Location => "location",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "year" => Some(Self::Year),
            "major" => Some(Self::Major),
            "location" => Some(Self::Location),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Major => "Major",
            Self::Location => "Location",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayKind {
    Alumnus,
    Job,
}

impl OverlayKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alumnus => "alumnus",
            Self::Job => "job",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Alumnus => "Alumnus Details",
            Self::Job => "Job Details",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alumnus {
    pub id: AlumnusId,
    pub name: String,
    pub graduation_year: i32,
    pub major: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub skills: Vec<String>,
    pub bio: String,
    pub is_mentor: bool,
}

impl Alumnus {
    /// Field value compared against a facet constraint. Years compare by
    /// their decimal rendering.
    pub fn facet_value(&self, facet: Facet) -> Cow<'_, str> {
        match facet {
            Facet::Year => Cow::Owned(self.graduation_year.to_string()),
            Facet::Major => Cow::Borrowed(&self.major),
            Facet::Location => Cow::Borrowed(&self.location),
        }
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobPostingId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub posted_at: Date,
    pub description: String,
    pub requirements: Vec<String>,
    pub apply_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlumniEvent {
    pub id: EventId,
    pub title: String,
    pub date: Date,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: NewsItemId,
    pub title: String,
    pub summary: String,
    pub published_on: Date,
    pub link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DashboardCounts {
    pub alumni: usize,
    pub mentors: usize,
    pub upcoming_events: usize,
    pub open_jobs: usize,
}

#[cfg(test)]
mod tests {
    use super::{Alumnus, EmploymentType, Facet, OverlayKind, ViewKind};
    use crate::AlumnusId;

    fn alumnus() -> Alumnus {
        Alumnus {
            id: AlumnusId::new(1),
            name: "Alex Carter".to_owned(),
            graduation_year: 2016,
            major: "Computer Science".to_owned(),
            company: "Acme Corp".to_owned(),
            position: "Senior Frontend Engineer".to_owned(),
            location: "San Francisco, CA".to_owned(),
            skills: vec!["React".to_owned()],
            bio: String::new(),
            is_mentor: true,
        }
    }

    #[test]
    fn view_kind_parse_matches_as_str() {
        for view in ViewKind::ALL {
            assert_eq!(ViewKind::parse(view.as_str()), Some(view));
        }
        assert_eq!(ViewKind::parse("settings"), None);
    }

    #[test]
    fn facet_parse_rejects_unknown_names() {
        for facet in Facet::ALL {
            assert_eq!(Facet::parse(facet.as_str()), Some(facet));
        }
        assert_eq!(Facet::parse("skills"), None);
    }

    #[test]
    fn facet_value_renders_year_as_decimal() {
        let alumnus = alumnus();
        assert_eq!(alumnus.facet_value(Facet::Year), "2016");
        assert_eq!(alumnus.facet_value(Facet::Major), "Computer Science");
        assert_eq!(alumnus.facet_value(Facet::Location), "San Francisco, CA");
    }

    #[test]
    fn first_name_falls_back_to_full_name() {
        let mut alumnus = alumnus();
        assert_eq!(alumnus.first_name(), "Alex");
        alumnus.name = String::new();
        assert_eq!(alumnus.first_name(), "");
    }

    #[test]
    fn employment_type_labels_match_listing_text() {
        assert_eq!(EmploymentType::FullTime.as_str(), "Full-time");
        assert_eq!(
            EmploymentType::parse("Contract"),
            Some(EmploymentType::Contract)
        );
        assert_eq!(EmploymentType::parse("full-time"), None);
    }

    #[test]
    fn overlay_kind_names_and_titles() {
        assert_eq!(OverlayKind::Alumnus.as_str(), "alumnus");
        assert_eq!(OverlayKind::Job.as_str(), "job");
        assert_eq!(OverlayKind::Job.title(), "Job Details");
    }
}
