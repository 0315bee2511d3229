mod config;
use log::debug;

use std::collections::HashMap;
use std::fmt::Display;

pub use crate::config::*;

pub mod builder;
pub mod manual;

/// The fips code reserved for the state-level aggregate.
pub const STATE_FIPS: &str = "00000";

const PROPOSITION: &str = "Proposition";

/// A choice for voters in a race.
///
/// In a presidential race this is a person. In a ballot measure this
/// is a direction, and `last_name` holds `Yes` or `No`.
///
/// All the fields are optional. The totals may be overwritten in place
/// when the loader processes a newer feed.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Candidate {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub abbrev_name: Option<String>,
    pub suffix: Option<String>,
    pub use_suffix: Option<bool>,
    pub ap_natl_number: Option<String>,
    /// The identifier of this candidate within its race.
    pub ap_polra_number: Option<String>,
    pub ap_race_number: Option<String>,
    pub ap_pol_number: Option<String>,
    pub combined_id: Option<String>,
    pub party: Option<String>,
    pub vote_total: Option<u64>,
    pub vote_total_percent: Option<f64>,
    pub is_winner: Option<bool>,
    pub is_runoff: Option<bool>,
    pub delegate_total: Option<u32>,
    pub delegate_total_percent: Option<f64>,
}

impl Candidate {
    /// The key of this candidate in its race. Candidates without a polra
    /// number all share the empty key.
    pub fn id(&self) -> &str {
        self.ap_polra_number.as_deref().unwrap_or("")
    }

    pub fn delegates(&self) -> Option<u32> {
        self.delegate_total
    }

    pub fn display_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(choice @ ("Yes" | "No")) => choice.to_string(),
            last => format!(
                "{} {}",
                self.first_name.as_deref().unwrap_or(""),
                last.unwrap_or("")
            )
            .trim()
            .to_string(),
        }
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The vote count of one candidate in one reporting unit.
///
/// The candidate and the reporting unit are referenced by their keys
/// within the race and never change. New counts are recorded by
/// building a new value and passing it to `ReportingUnit::update_result`.
#[derive(PartialEq, Debug, Clone)]
pub struct UnitResult {
    candidate: String,
    reporting_unit: String,
    pub vote_total: Option<u64>,
    pub vote_total_percent: Option<f64>,
}

impl UnitResult {
    pub fn new(config: ResultConfig) -> UnitResult {
        UnitResult {
            candidate: config.candidate.unwrap_or_default(),
            reporting_unit: config.reporting_unit.unwrap_or_default(),
            vote_total: config.vote_total,
            vote_total_percent: config.vote_total_percent,
        }
    }

    /// The polra number of the candidate.
    pub fn candidate_id(&self) -> &str {
        &self.candidate
    }

    /// The fips code of the reporting unit.
    pub fn fips(&self) -> &str {
        &self.reporting_unit
    }
}

/// A result together with the entities it refers to.
///
/// Either reference may be missing if the loader did not add the
/// corresponding entity to the race.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct ResultView<'a> {
    pub result: &'a UnitResult,
    pub candidate: Option<&'a Candidate>,
    pub reporting_unit: Option<&'a ReportingUnit>,
}

impl<'a> Display for ResultView<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let candidate = match self.candidate {
            Some(c) => c.display_name(),
            None => self.result.candidate_id().to_string(),
        };
        let unit = match self.reporting_unit {
            Some(ru) => ru.display_name(),
            None => self.result.fips().to_string(),
        };
        let votes = self
            .result
            .vote_total
            .map(|v| v.to_string())
            .unwrap_or_default();
        write!(f, "{}, {}, {}", candidate, unit, votes)
    }
}

/// An area that groups votes into a total: a state, a county, a
/// congressional district...
#[derive(PartialEq, Debug, Clone)]
pub struct ReportingUnit {
    pub ap_number: Option<String>,
    pub name: Option<String>,
    pub abbrev: Option<String>,
    pub fips: Option<String>,
    pub precincts_total: Option<u32>,
    pub precincts_reporting: Option<u32>,
    pub precincts_reporting_percent: Option<f64>,
    pub num_reg_voters: Option<u64>,
    pub votes_cast: Option<u64>,
    // Keyed by the polra number of the candidate.
    results: HashMap<String, UnitResult>,
}

impl ReportingUnit {
    pub fn new(config: ReportingUnitConfig) -> ReportingUnit {
        ReportingUnit {
            ap_number: config.ap_number,
            name: config.name,
            abbrev: config.abbrev,
            fips: config.fips,
            precincts_total: config.precincts_total,
            precincts_reporting: config.precincts_reporting,
            precincts_reporting_percent: config.precincts_reporting_percent,
            num_reg_voters: config.num_reg_voters,
            votes_cast: config.votes_cast,
            results: HashMap::new(),
        }
    }

    /// The key of this unit in its race.
    pub fn id(&self) -> &str {
        self.fips.as_deref().unwrap_or("")
    }

    pub fn is_state(&self) -> bool {
        self.fips.as_deref() == Some(STATE_FIPS)
    }

    pub fn display_name(&self) -> String {
        let name = self.name.as_deref().unwrap_or("");
        if self.is_state() {
            format!("{} (state)", name)
        } else {
            name.to_string()
        }
    }

    /// Inserts the result, replacing any previous result for the same candidate.
    pub fn update_result(&mut self, result: UnitResult) {
        let key = result.candidate_id().to_string();
        if let Some(previous) = self.results.insert(key, result) {
            debug!(
                "update_result: unit {:?}: replaced result for candidate {:?} (previous total {:?})",
                self.fips,
                previous.candidate_id(),
                previous.vote_total
            );
        }
    }

    pub fn result_for(&self, candidate_id: &str) -> Option<&UnitResult> {
        self.results.get(candidate_id)
    }

    /// The results, highest vote total first.
    ///
    /// Missing totals come last. Equal totals are ordered by candidate id so
    /// that the order only depends on the content of the unit.
    pub fn results(&self) -> Vec<&UnitResult> {
        let mut res: Vec<&UnitResult> = self.results.values().collect();
        res.sort_by(|a, b| {
            b.vote_total
                .cmp(&a.vote_total)
                .then_with(|| a.candidate_id().cmp(b.candidate_id()))
        });
        res
    }

    pub fn num_results(&self) -> usize {
        self.results.len()
    }
}

impl Display for ReportingUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A contest being decided by voters choosing between candidates.
///
/// For example the presidential general election, the governorship of
/// Maine or Proposition 8 in California.
///
/// The race owns its candidates and its reporting units. Both are keyed
/// (by polra number and by fips code) and adding an entity with a key that
/// is already present replaces the previous entity.
#[derive(PartialEq, Debug, Clone)]
pub struct Race {
    pub ap_race_number: Option<String>,
    pub office_name: Option<String>,
    pub office_description: Option<String>,
    pub office_id: Option<String>,
    pub seat_name: Option<String>,
    pub seat_number: Option<u32>,
    pub scope: Option<Scope>,
    pub date: Option<String>,
    pub num_winners: Option<u32>,
    pub race_type: Option<RaceType>,
    pub party: Option<String>,
    pub uncontested: Option<bool>,
    pub precincts_total: Option<u32>,
    pub precincts_reporting: Option<u32>,
    pub precincts_reporting_percent: Option<f64>,
    pub votes_cast: Option<u64>,
    candidates: HashMap<String, Candidate>,
    reporting_units: HashMap<String, ReportingUnit>,
}

impl Race {
    pub fn new(config: RaceConfig) -> Race {
        Race {
            ap_race_number: config.ap_race_number,
            office_name: config.office_name,
            office_description: config.office_description,
            office_id: config.office_id,
            seat_name: config.seat_name,
            seat_number: config.seat_number,
            scope: config.scope,
            date: config.date,
            num_winners: config.num_winners,
            race_type: config.race_type,
            party: config.party,
            uncontested: config.uncontested,
            precincts_total: config.precincts_total,
            precincts_reporting: config.precincts_reporting,
            precincts_reporting_percent: config.precincts_reporting_percent,
            votes_cast: config.votes_cast,
            candidates: HashMap::new(),
            reporting_units: HashMap::new(),
        }
    }

    /// The display name of the race.
    ///
    /// Local races combine the office, the seat and the description.
    /// Propositions only keep the number in front of the seat name.
    /// Any race that is not a general election is prefixed with the
    /// label of its race type.
    pub fn name(&self) -> String {
        let office = self.office_name.as_deref().unwrap_or("");
        let seat = self.seat_name.as_deref().unwrap_or("");
        let name = if self.is_local() {
            match self.office_description.as_deref() {
                Some(desc) if !desc.is_empty() => format!("{} {} - {}", office, seat, desc),
                _ => format!("{} {}", office, seat),
            }
        } else if office == PROPOSITION {
            // Without a separator, the whole seat name is the number.
            let num = seat.split('-').next().unwrap_or("").trim();
            format!("{} {}", office, num)
        } else {
            office.to_string()
        };
        match self.race_type_name() {
            Some(label) if !self.is_general() => format!("{} - {}", label, name),
            _ => name,
        }
    }

    pub fn race_type_name(&self) -> Option<&'static str> {
        self.race_type.as_ref().and_then(|rt| rt.label())
    }

    pub fn is_primary(&self) -> bool {
        matches!(
            self.race_type,
            Some(RaceType::DemPrimary) | Some(RaceType::GopPrimary)
        )
    }

    pub fn is_caucus(&self) -> bool {
        matches!(
            self.race_type,
            Some(RaceType::DemCaucus) | Some(RaceType::GopCaucus)
        )
    }

    pub fn is_general(&self) -> bool {
        self.race_type == Some(RaceType::General)
    }

    pub fn is_local(&self) -> bool {
        self.scope == Some(Scope::Local)
    }

    // ******** Candidates *********

    pub fn add_candidate(&mut self, candidate: Candidate) {
        let key = candidate.id().to_string();
        if let Some(previous) = self.candidates.insert(key, candidate) {
            debug!(
                "add_candidate: race {:?}: replaced candidate {:?}",
                self.ap_race_number, previous.ap_polra_number
            );
        }
    }

    /// Takes the polra number of a candidate.
    pub fn get_candidate(&self, ap_polra_number: &str) -> Option<&Candidate> {
        self.candidates.get(ap_polra_number)
    }

    pub fn get_candidate_mut(&mut self, ap_polra_number: &str) -> Option<&mut Candidate> {
        self.candidates.get_mut(ap_polra_number)
    }

    /// All the candidates, in no particular order.
    pub fn candidates(&self) -> Vec<&Candidate> {
        self.candidates.values().collect()
    }

    // ******** Reporting units *********

    pub fn add_reporting_unit(&mut self, reporting_unit: ReportingUnit) {
        let key = reporting_unit.id().to_string();
        if let Some(previous) = self.reporting_units.insert(key, reporting_unit) {
            debug!(
                "add_reporting_unit: race {:?}: replaced unit {:?}",
                self.ap_race_number, previous.fips
            );
        }
    }

    pub fn get_reporting_unit(&self, fips: &str) -> Option<&ReportingUnit> {
        self.reporting_units.get(fips)
    }

    /// Mutable access to a unit, to record new results in it.
    pub fn get_reporting_unit_mut(&mut self, fips: &str) -> Option<&mut ReportingUnit> {
        self.reporting_units.get_mut(fips)
    }

    /// All the reporting units, in no particular order.
    pub fn reporting_units(&self) -> Vec<&ReportingUnit> {
        self.reporting_units.values().collect()
    }

    /// The state-level results of this race.
    pub fn state(&self) -> Option<&ReportingUnit> {
        self.get_reporting_unit(STATE_FIPS)
    }

    /// All the units with a fips code that are not the state, in no
    /// particular order.
    pub fn counties(&self) -> Vec<&ReportingUnit> {
        self.reporting_units
            .values()
            .filter(|ru| !ru.id().is_empty() && !ru.is_state())
            .collect()
    }

    // ******** Results *********

    /// Attaches the candidate and the unit of a result, when they exist in this race.
    pub fn resolve<'a>(&'a self, result: &'a UnitResult) -> ResultView<'a> {
        ResultView {
            result,
            candidate: self.get_candidate(result.candidate_id()),
            reporting_unit: self.get_reporting_unit(result.fips()),
        }
    }

    /// The sorted results of a unit, or `None` if the unit is not part of this race.
    pub fn results_for(&self, fips: &str) -> Option<Vec<ResultView<'_>>> {
        let ru = self.get_reporting_unit(fips)?;
        Some(ru.results().into_iter().map(|r| self.resolve(r)).collect())
    }
}

impl Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
