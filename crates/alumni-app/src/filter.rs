// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Alumnus, AlumnusId, Facet};

/// Wire name of the "no constraint" facet value.
pub const ALL_SENTINEL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FacetConstraint {
    #[default]
    All,
    Only(String),
}

impl FacetConstraint {
    /// Values are taken verbatim; only the exact sentinel clears the facet.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_SENTINEL {
            Self::All
        } else {
            Self::Only(raw.to_owned())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_SENTINEL,
            Self::Only(value) => value,
        }
    }

    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Only(_))
    }

    pub fn admits(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub year: FacetConstraint,
    pub major: FacetConstraint,
    pub location: FacetConstraint,
    pub mentor_only: bool,
    pub query: String,
}

impl FilterCriteria {
    pub fn facet(&self, facet: Facet) -> &FacetConstraint {
        match facet {
            Facet::Year => &self.year,
            Facet::Major => &self.major,
            Facet::Location => &self.location,
        }
    }

    pub fn set_facet(&mut self, facet: Facet, constraint: FacetConstraint) {
        let slot = match facet {
            Facet::Year => &mut self.year,
            Facet::Major => &mut self.major,
            Facet::Location => &mut self.location,
        };
        *slot = constraint;
    }

    /// Lowercased, trimmed query; empty means the text predicate is off.
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }

    pub fn active_constraints(&self) -> usize {
        let facets = Facet::ALL
            .iter()
            .filter(|facet| self.facet(**facet).is_active())
            .count();
        facets + usize::from(self.mentor_only) + usize::from(!self.normalized_query().is_empty())
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active_constraints() == 0
    }

    pub fn matches(&self, alumnus: &Alumnus) -> bool {
        self.matches_with_query(alumnus, &self.normalized_query())
    }

    fn matches_with_query(&self, alumnus: &Alumnus, needle: &str) -> bool {
        let facets_admit = Facet::ALL
            .iter()
            .all(|facet| self.facet(*facet).admits(&alumnus.facet_value(*facet)));
        if !facets_admit {
            return false;
        }
        if self.mentor_only && !alumnus.is_mentor {
            return false;
        }
        needle.is_empty() || text_matches(alumnus, needle)
    }
}

fn text_matches(alumnus: &Alumnus, needle: &str) -> bool {
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
    contains(&alumnus.name)
        || contains(&alumnus.company)
        || contains(&alumnus.position)
        || contains(&alumnus.major)
        || contains(&alumnus.location)
        || alumnus.skills.iter().any(|skill| contains(skill))
}

/// Distinct facet values over the full dataset. Built once per engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacetOptions {
    years: Vec<String>,
    majors: Vec<String>,
    locations: Vec<String>,
}

impl FacetOptions {
    pub fn from_alumni(alumni: &[Alumnus]) -> Self {
        let years = alumni
            .iter()
            .map(|alumnus| alumnus.graduation_year)
            .collect::<BTreeSet<i32>>()
            .into_iter()
            .rev()
            .map(|year| year.to_string())
            .collect();
        let majors = alumni
            .iter()
            .map(|alumnus| alumnus.major.clone())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();
        let locations = alumni
            .iter()
            .map(|alumnus| alumnus.location.clone())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();
        Self {
            years,
            majors,
            locations,
        }
    }

    pub fn get(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Year => &self.years,
            Facet::Major => &self.majors,
            Facet::Location => &self.locations,
        }
    }
}

/// Owns the directory dataset and the current criteria, and keeps the
/// matching row indices for those criteria. Mutators that leave the criteria
/// unchanged do not rescan.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    alumni: Vec<Alumnus>,
    options: FacetOptions,
    criteria: FilterCriteria,
    matched: Vec<usize>,
}

impl FilterEngine {
    pub fn new(alumni: Vec<Alumnus>) -> Self {
        let options = FacetOptions::from_alumni(&alumni);
        let matched = (0..alumni.len()).collect();
        Self {
            alumni,
            options,
            criteria: FilterCriteria::default(),
            matched,
        }
    }

    pub fn dataset(&self) -> &[Alumnus] {
        &self.alumni
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn options(&self, facet: Facet) -> &[String] {
        self.options.get(facet)
    }

    pub fn set_facet(&mut self, facet: Facet, constraint: FacetConstraint) {
        let mut next = self.criteria.clone();
        next.set_facet(facet, constraint);
        self.set_criteria(next);
    }

    pub fn set_facet_value(&mut self, facet: Facet, raw: &str) {
        self.set_facet(facet, FacetConstraint::parse(raw));
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        let next = FilterCriteria {
            query: text.into(),
            ..self.criteria.clone()
        };
        self.set_criteria(next);
    }

    pub fn set_mentor_only(&mut self, mentor_only: bool) {
        let next = FilterCriteria {
            mentor_only,
            ..self.criteria.clone()
        };
        self.set_criteria(next);
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria == self.criteria {
            return;
        }
        self.criteria = criteria;
        self.recompute();
    }

    pub fn clear(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    pub fn results(&self) -> Vec<&Alumnus> {
        self.matched
            .iter()
            .map(|index| &self.alumni[*index])
            .collect()
    }

    pub fn result_ids(&self) -> Vec<AlumnusId> {
        self.matched
            .iter()
            .map(|index| self.alumni[*index].id)
            .collect()
    }

    pub fn result_count(&self) -> usize {
        self.matched.len()
    }

    pub fn result_at(&self, position: usize) -> Option<&Alumnus> {
        self.matched
            .get(position)
            .map(|index| &self.alumni[*index])
    }

    pub fn get(&self, id: AlumnusId) -> Option<&Alumnus> {
        self.alumni.iter().find(|alumnus| alumnus.id == id)
    }

    fn recompute(&mut self) {
        let needle = self.criteria.normalized_query();
        self.matched = self
            .alumni
            .iter()
            .enumerate()
            .filter(|(_, alumnus)| self.criteria.matches_with_query(alumnus, &needle))
            .map(|(index, _)| index)
            .collect();
        debug!(
            criteria = ?self.criteria,
            matched = self.matched.len(),
            total = self.alumni.len(),
            "recomputed directory results"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{FacetConstraint, FilterCriteria, FilterEngine};
    use crate::{Alumnus, AlumnusId, Facet};

    type Row = (
        &'static str,
        i32,
        &'static str,
        &'static str,
        &'static str,
        &'static str,
        &'static [&'static str],
        bool,
    );

    const ROWS: [Row; 12] = [
        ("Alex Carter", 2016, "Computer Science", "Acme Corp", "Senior Frontend Engineer", "San Francisco, CA", &["React", "TypeScript"], true),
        ("Bianca Nguyen", 2018, "Data Science", "Insight Labs", "Data Scientist", "New York, NY", &["Python", "ML"], false),
        ("Carlos Ramirez", 2014, "Information Systems", "CloudNest", "DevOps Engineer", "Austin, TX", &["DevOps", "Cloud"], true),
        ("Diana Lee", 2020, "Human-Computer Interaction", "Pixelware", "Product Designer", "Seattle, WA", &["UI/UX"], false),
        ("Ethan Patel", 2015, "Software Engineering", "FinEdge", "Backend Engineer", "Chicago, IL", &["Node.js", "Go"], false),
        ("Farah Khan", 2019, "Computer Science", "NeuroNet", "Python Developer", "Boston, MA", &["ML"], false),
        ("George Smith", 2013, "Cybersecurity", "ShieldOps", "Security Architect", "Remote", &["Security"], true),
        ("Hannah Williams", 2017, "Computer Science", "NextWave", "Full-stack Engineer", "Denver, CO", &["React", "Node.js"], false),
        ("Ivan Petrov", 2012, "Software Engineering", "EdgeAI", "Staff Engineer", "Los Angeles, CA", &["Go", "Cloud"], false),
        ("Jasmine Brown", 2021, "Information Systems", "HubWorks", "Business Analyst", "Atlanta, GA", &["Product"], false),
        ("Kenji Sato", 2016, "Computer Science", "ByteForge", "Mobile Engineer", "San Diego, CA", &["React"], false),
        ("Lina Garcia", 2015, "Human-Computer Interaction", "Vista", "Design Manager", "Miami, FL", &["UI/UX", "Product"], false),
    ];

    fn fixture() -> Vec<Alumnus> {
        ROWS.iter()
            .enumerate()
            .map(
                |(index, (name, year, major, company, position, location, skills, mentor))| {
                    Alumnus {
                        id: AlumnusId::new(index as i64 + 1),
                        name: (*name).to_owned(),
                        graduation_year: *year,
                        major: (*major).to_owned(),
                        company: (*company).to_owned(),
                        position: (*position).to_owned(),
                        location: (*location).to_owned(),
                        skills: skills.iter().map(|skill| (*skill).to_owned()).collect(),
                        bio: "Writes Python scripts on weekends.".to_owned(),
                        is_mentor: *mentor,
                    }
                },
            )
            .collect()
    }

    fn ids(values: &[i64]) -> Vec<AlumnusId> {
        values.iter().copied().map(AlumnusId::new).collect()
    }

    fn all_ids() -> Vec<AlumnusId> {
        ids(&(1..=12).collect::<Vec<_>>())
    }

    #[test]
    fn new_engine_returns_full_dataset_in_order() {
        let engine = FilterEngine::new(fixture());
        assert_eq!(engine.result_ids(), all_ids());
        assert_eq!(engine.result_count(), 12);
        assert!(engine.criteria().is_unconstrained());
    }

    #[test]
    fn mentor_only_keeps_mentors_in_dataset_order() {
        let mut engine = FilterEngine::new(fixture());
        engine.set_mentor_only(true);
        assert_eq!(engine.result_ids(), ids(&[1, 3, 7]));
    }

    #[test]
    fn query_matches_skills_and_position_case_insensitively() {
        let mut engine = FilterEngine::new(fixture());
        engine.set_query("python");
        assert_eq!(engine.result_ids(), ids(&[2, 6]));

        engine.set_query("PYTHON");
        assert_eq!(engine.result_ids(), ids(&[2, 6]));
    }

    #[test]
    fn query_ignores_biography_text() {
        let mut engine = FilterEngine::new(fixture());
        engine.set_query("weekends");
        assert!(engine.results().is_empty());
    }

    #[test]
    fn query_is_trimmed_and_blank_query_is_unconstrained() {
        let mut engine = FilterEngine::new(fixture());
        engine.set_query("   ");
        assert_eq!(engine.result_ids(), all_ids());
        assert!(engine.criteria().is_unconstrained());

        engine.set_query("  react ");
        assert_eq!(engine.result_ids(), ids(&[1, 8, 11]));
    }

    #[test]
    fn query_matches_each_searchable_field() {
        let mut engine = FilterEngine::new(fixture());
        let cases = [
            ("kenji", vec![11]),
            ("shieldops", vec![7]),
            ("analyst", vec![10]),
            ("cybersecurity", vec![7]),
            ("miami", vec![12]),
            ("node.js", vec![5, 8]),
        ];
        for (query, expected) in cases {
            engine.set_query(query);
            assert_eq!(engine.result_ids(), ids(&expected), "query {query:?}");
        }
    }

    #[test]
    fn clearing_year_restores_full_dataset() {
        let mut engine = FilterEngine::new(fixture());
        engine.set_facet_value(Facet::Year, "2016");
        assert_eq!(engine.result_ids(), ids(&[1, 11]));

        engine.set_facet_value(Facet::Year, "all");
        assert_eq!(engine.result_ids(), all_ids());
    }

    #[test]
    fn unknown_facet_value_yields_empty_results() {
        let mut engine = FilterEngine::new(fixture());
        engine.set_facet_value(Facet::Major, "Astrophysics");
        assert!(engine.results().is_empty());
        assert_eq!(engine.result_count(), 0);
        assert!(
            !engine
                .options(Facet::Major)
                .contains(&"Astrophysics".to_owned())
        );
    }

    #[test]
    fn sentinel_parse_is_exact() {
        assert_eq!(FacetConstraint::parse("all"), FacetConstraint::All);
        assert_eq!(
            FacetConstraint::parse("All"),
            FacetConstraint::Only("All".to_owned())
        );
        assert_eq!(FacetConstraint::All.as_str(), "all");
        assert!(!FacetConstraint::All.is_active());
    }

    #[test]
    fn options_are_sorted_and_distinct() {
        let engine = FilterEngine::new(fixture());
        assert_eq!(
            engine.options(Facet::Year),
            [
                "2021", "2020", "2019", "2018", "2017", "2016", "2015", "2014", "2013", "2012"
            ]
        );
        assert_eq!(
            engine.options(Facet::Major),
            [
                "Computer Science",
                "Cybersecurity",
                "Data Science",
                "Human-Computer Interaction",
                "Information Systems",
                "Software Engineering",
            ]
        );
        let locations = engine.options(Facet::Location);
        assert_eq!(locations.len(), 12);
        assert_eq!(locations.first().map(String::as_str), Some("Atlanta, GA"));
        assert_eq!(locations.last().map(String::as_str), Some("Seattle, WA"));
    }

    #[test]
    fn options_ignore_active_filters() {
        let mut engine = FilterEngine::new(fixture());
        let before = Facet::ALL.map(|facet| engine.options(facet).to_vec());

        engine.set_facet_value(Facet::Major, "Cybersecurity");
        engine.set_query("go");
        engine.set_mentor_only(true);

        let after = Facet::ALL.map(|facet| engine.options(facet).to_vec());
        assert_eq!(before, after);
    }

    #[test]
    fn results_are_idempotent() {
        let mut engine = FilterEngine::new(fixture());
        engine.set_facet_value(Facet::Major, "Computer Science");
        let first = engine.results();
        let second = engine.results();
        assert_eq!(first, second);
        assert!(
            first
                .iter()
                .zip(&second)
                .all(|(left, right)| std::ptr::eq(*left, *right))
        );
    }

    #[test]
    fn independent_facets_commute() {
        let engine = FilterEngine::new(fixture());
        let picks = [
            (Facet::Year, "2016"),
            (Facet::Major, "Computer Science"),
            (Facet::Location, "Boston, MA"),
        ];
        for (left_facet, left_value) in picks {
            for (right_facet, right_value) in picks {
                if left_facet == right_facet {
                    continue;
                }
                let mut forward = engine.clone();
                forward.set_facet_value(left_facet, left_value);
                forward.set_facet_value(right_facet, right_value);

                let mut backward = engine.clone();
                backward.set_facet_value(right_facet, right_value);
                backward.set_facet_value(left_facet, left_value);

                assert_eq!(forward.result_ids(), backward.result_ids());
                assert_eq!(forward.criteria(), backward.criteria());
            }
        }
    }

    #[test]
    fn adding_constraints_only_narrows() {
        let base = FilterEngine::new(fixture());
        for facet in Facet::ALL {
            for value in base.options(facet) {
                let mut narrowed = base.clone();
                narrowed.set_facet_value(facet, value);
                assert!(
                    narrowed
                        .result_ids()
                        .iter()
                        .all(|id| base.result_ids().contains(id)),
                    "{} = {value}",
                    facet.as_str()
                );

                let mut mentors = narrowed.clone();
                mentors.set_mentor_only(true);
                assert!(
                    mentors
                        .result_ids()
                        .iter()
                        .all(|id| narrowed.result_ids().contains(id))
                );
            }
        }
    }

    #[test]
    fn combined_facets_and_query_intersect() {
        let mut engine = FilterEngine::new(fixture());
        engine.set_facet_value(Facet::Major, "Computer Science");
        engine.set_query("react");
        assert_eq!(engine.result_ids(), ids(&[1, 8, 11]));

        engine.set_facet_value(Facet::Year, "2016");
        assert_eq!(engine.result_ids(), ids(&[1, 11]));

        engine.set_mentor_only(true);
        assert_eq!(engine.result_ids(), ids(&[1]));
    }

    #[test]
    fn clear_resets_every_constraint() {
        let mut engine = FilterEngine::new(fixture());
        engine.set_facet_value(Facet::Location, "Remote");
        engine.set_mentor_only(true);
        engine.set_query("security");
        assert_eq!(engine.criteria().active_constraints(), 3);

        engine.clear();
        assert_eq!(engine.criteria(), &FilterCriteria::default());
        assert_eq!(engine.result_ids(), all_ids());
    }

    #[test]
    fn empty_dataset_yields_empty_options_and_results() {
        let mut engine = FilterEngine::new(Vec::new());
        for facet in Facet::ALL {
            assert!(engine.options(facet).is_empty());
        }
        assert!(engine.results().is_empty());

        engine.set_query("anything");
        engine.set_mentor_only(true);
        assert!(engine.results().is_empty());
    }

    #[test]
    fn criteria_matches_agrees_with_engine() {
        let alumni = fixture();
        let mut engine = FilterEngine::new(alumni.clone());
        engine.set_query("engineer");
        engine.set_facet_value(Facet::Major, "Software Engineering");

        let expected = alumni
            .iter()
            .filter(|alumnus| engine.criteria().matches(alumnus))
            .map(|alumnus| alumnus.id)
            .collect::<Vec<_>>();
        assert_eq!(engine.result_ids(), expected);
        assert_eq!(engine.result_ids(), ids(&[5, 9]));
    }

    #[test]
    fn result_at_and_get_resolve_rows() {
        let mut engine = FilterEngine::new(fixture());
        engine.set_mentor_only(true);
        assert_eq!(
            engine.result_at(1).map(|alumnus| alumnus.name.as_str()),
            Some("Carlos Ramirez")
        );
        assert!(engine.result_at(3).is_none());
        assert_eq!(
            engine.get(AlumnusId::new(12)).map(|alumnus| alumnus.name.as_str()),
            Some("Lina Garcia")
        );
        assert!(engine.get(AlumnusId::new(99)).is_none());
    }
}
