// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::{AlumniEvent, Alumnus, DashboardCounts, JobPosting, NewsItem};

/// Resident dataset supplied once at startup. Nothing in the core mutates
/// it after construction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Directory {
    pub alumni: Vec<Alumnus>,
    pub jobs: Vec<JobPosting>,
    pub events: Vec<AlumniEvent>,
    pub news: Vec<NewsItem>,
}

impl Directory {
    pub fn dashboard_counts(&self) -> DashboardCounts {
        DashboardCounts {
            alumni: self.alumni.len(),
            mentors: self.alumni.iter().filter(|alumnus| alumnus.is_mentor).count(),
            upcoming_events: self.events.len(),
            open_jobs: self.jobs.len(),
        }
    }

    pub fn featured_alumni(&self, limit: usize) -> &[Alumnus] {
        &self.alumni[..limit.min(self.alumni.len())]
    }

    pub fn featured_jobs(&self, limit: usize) -> &[JobPosting] {
        &self.jobs[..limit.min(self.jobs.len())]
    }

    /// The signed-in profile is the first alumnus in provider order.
    pub fn current_user(&self) -> Option<&Alumnus> {
        self.alumni.first()
    }
}

#[cfg(test)]
mod tests {
    use super::Directory;
    use crate::{
        AlumniEvent, Alumnus, AlumnusId, DashboardCounts, EmploymentType, EventId, JobPosting,
        JobPostingId,
    };
    use time::{Date, Month};

    fn alumnus(id: i64, is_mentor: bool) -> Alumnus {
        Alumnus {
            id: AlumnusId::new(id),
            name: format!("Alumnus {id}"),
            graduation_year: 2010 + id as i32,
            major: "Computer Science".to_owned(),
            company: "Acme".to_owned(),
            position: "Engineer".to_owned(),
            location: "Remote".to_owned(),
            skills: Vec::new(),
            bio: String::new(),
            is_mentor,
        }
    }

    fn job(id: i64) -> JobPosting {
        JobPosting {
            id: JobPostingId::new(id),
            title: format!("Job {id}"),
            company: "Acme".to_owned(),
            location: "Remote".to_owned(),
            employment_type: EmploymentType::FullTime,
            posted_at: Date::from_calendar_date(2025, Month::September, 20).expect("valid date"),
            description: String::new(),
            requirements: Vec::new(),
            apply_url: "#".to_owned(),
        }
    }

    fn directory() -> Directory {
        Directory {
            alumni: vec![alumnus(1, true), alumnus(2, false), alumnus(3, true)],
            jobs: vec![job(1), job(2)],
            events: vec![AlumniEvent {
                id: EventId::new(1),
                title: "Networking Night".to_owned(),
                date: Date::from_calendar_date(2025, Month::October, 15).expect("valid date"),
                location: "Online".to_owned(),
                description: String::new(),
            }],
            news: Vec::new(),
        }
    }

    #[test]
    fn dashboard_counts_cover_full_dataset() {
        assert_eq!(
            directory().dashboard_counts(),
            DashboardCounts {
                alumni: 3,
                mentors: 2,
                upcoming_events: 1,
                open_jobs: 2,
            }
        );
    }

    #[test]
    fn featured_slices_clamp_to_available_rows() {
        let directory = directory();
        assert_eq!(directory.featured_alumni(2).len(), 2);
        assert_eq!(directory.featured_alumni(10).len(), 3);
        assert_eq!(directory.featured_jobs(3).len(), 2);
        assert_eq!(directory.featured_jobs(0).len(), 0);
    }

    #[test]
    fn current_user_is_first_alumnus() {
        let directory = directory();
        assert_eq!(
            directory.current_user().map(|alumnus| alumnus.id),
            Some(AlumnusId::new(1))
        );
        assert!(Directory::default().current_user().is_none());
    }

    #[test]
    fn empty_directory_counts_are_zero() {
        assert_eq!(
            Directory::default().dashboard_counts(),
            DashboardCounts::default()
        );
    }
}
