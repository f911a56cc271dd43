// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use alumni_app::{
    AlumniEvent, Alumnus, AlumnusId, Directory, EmploymentType, EventId, JobPosting,
    JobPostingId, NewsItem, NewsItemId,
};
use anyhow::{Context, Result};
use std::path::PathBuf;
use time::{Date, Duration, Month};

const FIRST_NAMES: [&str; 16] = [
    "Avery", "Jordan", "Taylor", "Riley", "Morgan", "Casey", "Alex", "Quinn", "Parker", "Drew",
    "Kai", "Elliot", "Robin", "Cameron", "Hayden", "Rowan",
];
const LAST_NAMES: [&str; 18] = [
    "Walker", "Martin", "Hill", "Evans", "Lopez", "Gray", "Ward", "Young", "Diaz", "Reed",
    "Campbell", "Turner", "Flores", "Bennett", "Price", "Morris", "Foster", "Brooks",
];

// Small pools so facets collide across generated rows.
const MAJORS: [&str; 6] = [
    "Computer Science",
    "Data Science",
    "Information Systems",
    "Software Engineering",
    "Cybersecurity",
    "Human-Computer Interaction",
];
const LOCATIONS: [&str; 8] = [
    "Austin, TX",
    "Seattle, WA",
    "Denver, CO",
    "Boston, MA",
    "New York, NY",
    "San Francisco, CA",
    "Online",
    "Remote",
];
const COMPANIES: [&str; 10] = [
    "Acme Corp",
    "Insight Labs",
    "CloudNest",
    "Pixelware",
    "FinEdge",
    "NeuroNet",
    "ShieldOps",
    "NextWave",
    "EdgeAI",
    "HubWorks",
];
const POSITIONS: [&str; 10] = [
    "Frontend Engineer",
    "Backend Engineer",
    "Data Scientist",
    "DevOps Engineer",
    "Product Designer",
    "ML Engineer",
    "Security Architect",
    "Staff Engineer",
    "Business Analyst",
    "Python Developer",
];
const SKILLS: [&str; 12] = [
    "React",
    "TypeScript",
    "Python",
    "Go",
    "Node.js",
    "ML",
    "Data Science",
    "Cloud",
    "DevOps",
    "Security",
    "UI/UX",
    "Product",
];
const EVENT_KINDS: [&str; 5] = [
    "Networking Night",
    "Tech Talk",
    "Career Workshop",
    "Hack Day",
    "Mentor Mixer",
];
const HEADLINES: [&str; 5] = [
    "Alumnus Raises Series A",
    "Program Ranked Top 10",
    "Mentorship Program Expands",
    "New Scholarship Announced",
    "Alumni Award Winners Named",
];

pub const YEAR_RANGE: (i32, i32) = (2005, 2024);

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn chance(&mut self, numerator: u64, denominator: u64) -> bool {
        self.next_u64() % denominator < numerator
    }
}

/// Seeded generator for directory rows. The same seed always yields the
/// same sequence.
#[derive(Debug, Clone)]
pub struct AlumniFaker {
    rng: DeterministicRng,
}

impl AlumniFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn alumnus(&mut self, id: i64) -> Alumnus {
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        let major = self.pick(&MAJORS);
        let position = self.pick(&POSITIONS);

        let skill_count = 1 + self.rng.int_n(3);
        let mut skills: Vec<String> = Vec::with_capacity(skill_count);
        for _ in 0..skill_count {
            let skill = self.pick(&SKILLS);
            if !skills.iter().any(|existing| existing == skill) {
                skills.push(skill.to_owned());
            }
        }

        Alumnus {
            id: AlumnusId::new(id),
            name: format!("{first} {last}"),
            graduation_year: self.int_range_i32(YEAR_RANGE.0, YEAR_RANGE.1),
            major: major.to_owned(),
            company: self.pick(&COMPANIES).to_owned(),
            position: position.to_owned(),
            location: self.pick(&LOCATIONS).to_owned(),
            skills,
            bio: format!("{position} who studied {}.", major.to_ascii_lowercase()),
            is_mentor: self.rng.chance(1, 3),
        }
    }

    pub fn job_posting(&mut self, id: i64) -> JobPosting {
        let company = self.pick(&COMPANIES);
        let title = self.pick(&POSITIONS);
        let employment_type = EmploymentType::ALL[self.rng.int_n(EmploymentType::ALL.len())];
        let requirements = (0..2 + self.rng.int_n(3))
            .map(|_| self.pick(&SKILLS).to_owned())
            .collect();

        JobPosting {
            id: JobPostingId::new(id),
            title: title.to_owned(),
            company: company.to_owned(),
            location: self.pick(&LOCATIONS).to_owned(),
            employment_type,
            posted_at: self.date_within(reference_date() - Duration::days(60), 60),
            description: format!("{company} is hiring a {}.", title.to_ascii_lowercase()),
            requirements,
            apply_url: "#".to_owned(),
        }
    }

    pub fn event(&mut self, id: i64) -> AlumniEvent {
        let kind = self.pick(&EVENT_KINDS);
        let location = self.pick(&LOCATIONS);
        AlumniEvent {
            id: EventId::new(id),
            title: format!("{kind} #{id}"),
            date: self.date_within(reference_date(), 120),
            location: location.to_owned(),
            description: format!("{kind} hosted in {location}."),
        }
    }

    pub fn news_item(&mut self, id: i64) -> NewsItem {
        let title = self.pick(&HEADLINES);
        NewsItem {
            id: NewsItemId::new(id),
            title: title.to_owned(),
            summary: format!("{title}."),
            published_on: self.date_within(reference_date() - Duration::days(30), 30),
            link: "#".to_owned(),
        }
    }

    /// A directory with `alumni` generated alumni and a handful of jobs,
    /// events and news items. Ids start at 1.
    pub fn directory(&mut self, alumni: usize) -> Directory {
        let jobs = 1 + self.rng.int_n(5);
        let events = 1 + self.rng.int_n(4);
        let news = 1 + self.rng.int_n(4);
        Directory {
            alumni: (1..=alumni as i64).map(|id| self.alumnus(id)).collect(),
            jobs: (1..=jobs as i64).map(|id| self.job_posting(id)).collect(),
            events: (1..=events as i64).map(|id| self.event(id)).collect(),
            news: (1..=news as i64).map(|id| self.news_item(id)).collect(),
        }
    }

    pub fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len())]
    }

    fn int_range_i32(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = i64::from(max) - i64::from(min) + 1;
        let offset = (self.rng.next_u64() % (span as u64)) as i64;
        (i64::from(min) + offset) as i32
    }

    fn date_within(&mut self, start: Date, days: usize) -> Date {
        start + Duration::days(self.rng.int_n(days + 1) as i64)
    }
}

pub fn temp_db_path() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let db_path = dir.path().join("alumni.db");
    Ok((dir, db_path))
}

pub fn majors() -> &'static [&'static str] {
    &MAJORS
}

pub fn locations() -> &'static [&'static str] {
    &LOCATIONS
}

pub fn skills() -> &'static [&'static str] {
    &SKILLS
}

fn reference_date() -> Date {
    Date::from_calendar_date(2025, Month::September, 1).expect("valid calendar date")
}
