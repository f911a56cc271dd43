// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod demo;

use alumni_app::{
    AlumniEvent, Alumnus, AlumnusId, Directory, EmploymentType, EventId, JobPosting,
    JobPostingId, NewsItem, NewsItemId,
};
use anyhow::{Context, Result, anyhow, bail};
use rusqlite::{Connection, params};
use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tracing::info;

pub const APP_NAME: &str = "alumni";

const REQUIRED_SCHEMA: &[(&str, &[&str])] = &[
    (
        "alumni",
        &[
            "id",
            "name",
            "graduation_year",
            "major",
            "company",
            "position",
            "location",
            "bio",
            "is_mentor",
        ],
    ),
    ("alumnus_skills", &["alumnus_id", "position", "skill"]),
    (
        "job_postings",
        &[
            "id",
            "title",
            "company",
            "location",
            "employment_type",
            "posted_at",
            "description",
            "apply_url",
        ],
    ),
    (
        "job_requirements",
        &["job_posting_id", "position", "requirement"],
    ),
    (
        "events",
        &["id", "title", "event_date", "location", "description"],
    ),
    (
        "news_items",
        &["id", "title", "summary", "published_on", "link"],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAlumnus {
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub posted_at: Date,
    pub description: String,
    pub requirements: Vec<String>,
    pub apply_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub date: Date,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNewsItem {
    pub title: String,
    pub summary: String,
    pub published_on: Date,
    pub link: String,
}

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let printable = path.to_string_lossy().to_string();
        validate_db_path(&printable)?;
        let conn = Connection::open(path)
            .with_context(|| format!("open database at {}", path.display()))?;
        configure_connection(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory database")?;
        configure_connection(&conn)?;
        Ok(Self { conn })
    }

    pub fn raw_connection(&self) -> &Connection {
        &self.conn
    }

    pub fn bootstrap(&self) -> Result<()> {
        if has_user_tables(&self.conn)? {
            validate_schema(&self.conn)?;
        } else {
            self.conn
                .execute_batch(include_str!("sql/schema.sql"))
                .context("create schema")?;
            info!("created directory schema");
        }
        Ok(())
    }

    pub fn is_empty(&self) -> Result<bool> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM alumni", [], |row| row.get(0))
            .context("count alumni")?;
        Ok(count == 0)
    }

    /// Loads the bundled demo directory into an empty store. Returns whether
    /// anything was inserted.
    pub fn seed_demo_data(&self) -> Result<bool> {
        if !self.is_empty()? {
            return Ok(false);
        }

        let tx = self
            .conn
            .unchecked_transaction()
            .context("begin demo seed transaction")?;
        for alumnus in &demo::ALUMNI {
            insert_alumnus(
                &tx,
                &NewAlumnus {
                    name: alumnus.name.to_owned(),
                    graduation_year: alumnus.graduation_year,
                    major: alumnus.major.to_owned(),
                    company: alumnus.company.to_owned(),
                    position: alumnus.position.to_owned(),
                    location: alumnus.location.to_owned(),
                    skills: alumnus.skills.iter().map(|s| (*s).to_owned()).collect(),
                    bio: alumnus.bio.to_owned(),
                    is_mentor: alumnus.is_mentor,
                },
            )?;
        }
        for job in &demo::JOBS {
            let employment_type = EmploymentType::parse(job.employment_type)
                .ok_or_else(|| anyhow!("unknown employment type {:?}", job.employment_type))?;
            insert_job_posting(
                &tx,
                &NewJobPosting {
                    title: job.title.to_owned(),
                    company: job.company.to_owned(),
                    location: job.location.to_owned(),
                    employment_type,
                    posted_at: parse_date(job.posted_at)?,
                    description: job.description.to_owned(),
                    requirements: job.requirements.iter().map(|r| (*r).to_owned()).collect(),
                    apply_url: "#".to_owned(),
                },
            )?;
        }
        for event in &demo::EVENTS {
            insert_event(
                &tx,
                &NewEvent {
                    title: event.title.to_owned(),
                    date: parse_date(event.date)?,
                    location: event.location.to_owned(),
                    description: event.description.to_owned(),
                },
            )?;
        }
        for news in &demo::NEWS {
            insert_news_item(
                &tx,
                &NewNewsItem {
                    title: news.title.to_owned(),
                    summary: news.summary.to_owned(),
                    published_on: parse_date(news.published_on)?,
                    link: "#".to_owned(),
                },
            )?;
        }
        tx.commit().context("commit demo seed")?;

        info!(
            alumni = demo::ALUMNI.len(),
            jobs = demo::JOBS.len(),
            events = demo::EVENTS.len(),
            news = demo::NEWS.len(),
            "seeded demo directory"
        );
        Ok(true)
    }

    pub fn insert_alumnus(&self, alumnus: &NewAlumnus) -> Result<AlumnusId> {
        let tx = self
            .conn
            .unchecked_transaction()
            .context("begin alumnus insert")?;
        let id = insert_alumnus(&tx, alumnus)?;
        tx.commit().context("commit alumnus insert")?;
        Ok(id)
    }

    pub fn insert_job_posting(&self, job: &NewJobPosting) -> Result<JobPostingId> {
        let tx = self
            .conn
            .unchecked_transaction()
            .context("begin job posting insert")?;
        let id = insert_job_posting(&tx, job)?;
        tx.commit().context("commit job posting insert")?;
        Ok(id)
    }

    pub fn insert_event(&self, event: &NewEvent) -> Result<EventId> {
        insert_event(&self.conn, event)
    }

    pub fn insert_news_item(&self, news: &NewNewsItem) -> Result<NewsItemId> {
        insert_news_item(&self.conn, news)
    }

    pub fn list_alumni(&self) -> Result<Vec<Alumnus>> {
        let mut skills = self.load_tag_lists(
            "SELECT alumnus_id, skill FROM alumnus_skills ORDER BY alumnus_id, position",
            "alumnus skills",
        )?;

        let mut stmt = self
            .conn
            .prepare(
                "
                SELECT
                  id, name, graduation_year, major, company,
                  position, location, bio, is_mentor
                FROM alumni
                ORDER BY id
                ",
            )
            .context("prepare alumni query")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Alumnus {
                    id: AlumnusId::new(row.get(0)?),
                    name: row.get(1)?,
                    graduation_year: row.get(2)?,
                    major: row.get(3)?,
                    company: row.get(4)?,
                    position: row.get(5)?,
                    location: row.get(6)?,
                    skills: Vec::new(),
                    bio: row.get(7)?,
                    is_mentor: row.get(8)?,
                })
            })
            .context("query alumni")?;

        let mut alumni = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("collect alumni")?;
        for alumnus in &mut alumni {
            alumnus.skills = skills.remove(&alumnus.id.get()).unwrap_or_default();
        }
        Ok(alumni)
    }

    pub fn list_job_postings(&self) -> Result<Vec<JobPosting>> {
        let mut requirements = self.load_tag_lists(
            "SELECT job_posting_id, requirement FROM job_requirements ORDER BY job_posting_id, position",
            "job requirements",
        )?;

        let mut stmt = self
            .conn
            .prepare(
                "
                SELECT
                  id, title, company, location, employment_type,
                  posted_at, description, apply_url
                FROM job_postings
                ORDER BY id
                ",
            )
            .context("prepare job postings query")?;
        let rows = stmt
            .query_map([], |row| {
                let type_raw: String = row.get(4)?;
                let employment_type = EmploymentType::parse(&type_raw).ok_or_else(|| {
                    to_sql_error(anyhow!("unknown employment type {type_raw}"))
                })?;
                let posted_at_raw: String = row.get(5)?;

                Ok(JobPosting {
                    id: JobPostingId::new(row.get(0)?),
                    title: row.get(1)?,
                    company: row.get(2)?,
                    location: row.get(3)?,
                    employment_type,
                    posted_at: parse_date(&posted_at_raw).map_err(to_sql_error)?,
                    description: row.get(6)?,
                    requirements: Vec::new(),
                    apply_url: row.get(7)?,
                })
            })
            .context("query job postings")?;

        let mut jobs = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("collect job postings")?;
        for job in &mut jobs {
            job.requirements = requirements.remove(&job.id.get()).unwrap_or_default();
        }
        Ok(jobs)
    }

    pub fn list_events(&self) -> Result<Vec<AlumniEvent>> {
        let mut stmt = self
            .conn
            .prepare(
                "
                SELECT id, title, event_date, location, description
                FROM events
                ORDER BY id
                ",
            )
            .context("prepare events query")?;
        let rows = stmt
            .query_map([], |row| {
                let date_raw: String = row.get(2)?;
                Ok(AlumniEvent {
                    id: EventId::new(row.get(0)?),
                    title: row.get(1)?,
                    date: parse_date(&date_raw).map_err(to_sql_error)?,
                    location: row.get(3)?,
                    description: row.get(4)?,
                })
            })
            .context("query events")?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .context("collect events")
    }

    pub fn list_news(&self) -> Result<Vec<NewsItem>> {
        let mut stmt = self
            .conn
            .prepare(
                "
                SELECT id, title, summary, published_on, link
                FROM news_items
                ORDER BY id
                ",
            )
            .context("prepare news query")?;
        let rows = stmt
            .query_map([], |row| {
                let published_raw: String = row.get(3)?;
                Ok(NewsItem {
                    id: NewsItemId::new(row.get(0)?),
                    title: row.get(1)?,
                    summary: row.get(2)?,
                    published_on: parse_date(&published_raw).map_err(to_sql_error)?,
                    link: row.get(4)?,
                })
            })
            .context("query news")?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .context("collect news")
    }

    pub fn load_directory(&self) -> Result<Directory> {
        let directory = Directory {
            alumni: self.list_alumni()?,
            jobs: self.list_job_postings()?,
            events: self.list_events()?,
            news: self.list_news()?,
        };
        info!(
            alumni = directory.alumni.len(),
            jobs = directory.jobs.len(),
            events = directory.events.len(),
            news = directory.news.len(),
            "loaded directory"
        );
        Ok(directory)
    }

    fn load_tag_lists(&self, sql: &str, label: &str) -> Result<BTreeMap<i64, Vec<String>>> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .with_context(|| format!("prepare {label} query"))?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))
            .with_context(|| format!("query {label}"))?;

        let mut grouped: BTreeMap<i64, Vec<String>> = BTreeMap::new();
        for row in rows {
            let (owner, value) = row.with_context(|| format!("read {label} row"))?;
            grouped.entry(owner).or_default().push(value);
        }
        Ok(grouped)
    }
}

fn insert_alumnus(conn: &Connection, alumnus: &NewAlumnus) -> Result<AlumnusId> {
    if alumnus.name.trim().is_empty() {
        bail!("alumnus name is required");
    }
    let now = now_rfc3339()?;
    conn.execute(
        "
        INSERT INTO alumni (
          name, graduation_year, major, company, position,
          location, bio, is_mentor, created_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        ",
        params![
            alumnus.name,
            alumnus.graduation_year,
            alumnus.major,
            alumnus.company,
            alumnus.position,
            alumnus.location,
            alumnus.bio,
            alumnus.is_mentor,
            now,
        ],
    )
    .with_context(|| format!("insert alumnus {}", alumnus.name))?;
    let id = conn.last_insert_rowid();

    for (position, skill) in alumnus.skills.iter().enumerate() {
        conn.execute(
            "INSERT INTO alumnus_skills (alumnus_id, position, skill) VALUES (?, ?, ?)",
            params![id, position as i64, skill],
        )
        .with_context(|| format!("insert skill {skill} for alumnus {id}"))?;
    }
    Ok(AlumnusId::new(id))
}

fn insert_job_posting(conn: &Connection, job: &NewJobPosting) -> Result<JobPostingId> {
    if job.title.trim().is_empty() {
        bail!("job posting title is required");
    }
    let now = now_rfc3339()?;
    conn.execute(
        "
        INSERT INTO job_postings (
          title, company, location, employment_type, posted_at,
          description, apply_url, created_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        ",
        params![
            job.title,
            job.company,
            job.location,
            job.employment_type.as_str(),
            format_date(job.posted_at),
            job.description,
            job.apply_url,
            now,
        ],
    )
    .with_context(|| format!("insert job posting {}", job.title))?;
    let id = conn.last_insert_rowid();

    for (position, requirement) in job.requirements.iter().enumerate() {
        conn.execute(
            "INSERT INTO job_requirements (job_posting_id, position, requirement) VALUES (?, ?, ?)",
            params![id, position as i64, requirement],
        )
        .with_context(|| format!("insert requirement {requirement} for job {id}"))?;
    }
    Ok(JobPostingId::new(id))
}

fn insert_event(conn: &Connection, event: &NewEvent) -> Result<EventId> {
    conn.execute(
        "
        INSERT INTO events (title, event_date, location, description, created_at)
        VALUES (?, ?, ?, ?, ?)
        ",
        params![
            event.title,
            format_date(event.date),
            event.location,
            event.description,
            now_rfc3339()?,
        ],
    )
    .with_context(|| format!("insert event {}", event.title))?;
    Ok(EventId::new(conn.last_insert_rowid()))
}

fn insert_news_item(conn: &Connection, news: &NewNewsItem) -> Result<NewsItemId> {
    conn.execute(
        "
        INSERT INTO news_items (title, summary, published_on, link, created_at)
        VALUES (?, ?, ?, ?, ?)
        ",
        params![
            news.title,
            news.summary,
            format_date(news.published_on),
            news.link,
            now_rfc3339()?,
        ],
    )
    .with_context(|| format!("insert news item {}", news.title))?;
    Ok(NewsItemId::new(conn.last_insert_rowid()))
}

pub fn default_db_path() -> Result<PathBuf> {
    if let Some(override_path) = env::var_os("ALUMNI_DB_PATH") {
        return Ok(PathBuf::from(override_path));
    }

    let data_root = dirs::data_local_dir().ok_or_else(|| {
        anyhow!("cannot resolve data directory; set ALUMNI_DB_PATH to a writable database path")
    })?;

    let app_dir = data_root.join(APP_NAME);
    fs::create_dir_all(&app_dir)
        .with_context(|| format!("create data directory {}", app_dir.display()))?;
    Ok(app_dir.join("alumni.db"))
}

pub fn validate_db_path(path: &str) -> Result<()> {
    if path.is_empty() {
        bail!("database path must not be empty");
    }
    if path == ":memory:" {
        return Ok(());
    }

    if let Some(index) = path.find("://")
        && index > 0
    {
        let scheme = &path[..index];
        if scheme.chars().all(char::is_alphabetic) {
            bail!(
                "database path {path:?} looks like a URI ({scheme}://); pass a filesystem path instead"
            );
        }
    }

    if path.starts_with("file:") {
        bail!("database path {path:?} uses file: URI syntax; pass a plain filesystem path");
    }

    if path.contains('?') {
        bail!(
            "database path {path:?} contains '?'; remove query parameters and use a plain file path"
        );
    }

    Ok(())
}

fn has_user_tables(conn: &Connection) -> Result<bool> {
    let count: i64 = conn
        .query_row(
            "
            SELECT COUNT(*)
            FROM sqlite_master
            WHERE type = 'table'
              AND name NOT LIKE 'sqlite_%'
            ",
            [],
            |row| row.get(0),
        )
        .context("count user tables")?;
    Ok(count > 0)
}

fn validate_schema(conn: &Connection) -> Result<()> {
    for (table, required_columns) in REQUIRED_SCHEMA {
        if !table_exists(conn, table)? {
            bail!(
                "database is missing required table `{table}`; point [storage].db_path at an alumni database"
            );
        }

        let columns = table_columns(conn, table)?;
        let missing: Vec<&str> = required_columns
            .iter()
            .copied()
            .filter(|column| !columns.contains(*column))
            .collect();

        if !missing.is_empty() {
            bail!(
                "table `{table}` is missing required columns: {}; recreate the database or migrate it first",
                missing.join(", ")
            );
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
            params![table],
            |row| row.get(0),
        )
        .with_context(|| format!("check table `{table}`"))?;
    Ok(count > 0)
}

fn table_columns(conn: &Connection, table: &str) -> Result<BTreeSet<String>> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table})"))
        .with_context(|| format!("prepare table_info for `{table}`"))?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .with_context(|| format!("query columns for `{table}`"))?;
    rows.collect::<rusqlite::Result<BTreeSet<_>>>()
        .with_context(|| format!("collect columns for `{table}`"))
}

fn configure_connection(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        PRAGMA foreign_keys = ON;
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        ",
    )
    .context("configure sqlite pragmas")
}

fn now_rfc3339() -> Result<String> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("format current timestamp")
}

fn parse_date(raw: &str) -> Result<Date> {
    Date::parse(raw, &format_description!("[year]-[month]-[day]"))
        .with_context(|| format!("unsupported date format {raw:?}; expected YYYY-MM-DD"))
}

fn format_date(value: Date) -> String {
    value
        .format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| "1970-01-01".to_owned())
}

fn to_sql_error(error: anyhow::Error) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            error.to_string(),
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::{format_date, parse_date};
    use anyhow::Result;
    use time::{Date, Month};

    #[test]
    fn date_round_trips_through_storage_format() -> Result<()> {
        let date = Date::from_calendar_date(2025, Month::November, 2)?;
        assert_eq!(format_date(date), "2025-11-02");
        assert_eq!(parse_date("2025-11-02")?, date);
        Ok(())
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        let error = parse_date("11/02/2025").expect_err("slash dates should fail");
        assert!(error.to_string().contains("expected YYYY-MM-DD"));
    }
}
