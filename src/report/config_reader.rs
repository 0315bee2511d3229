use ap_results::builder::Builder;
use ap_results::*;

use serde::{Deserialize, Serialize};

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(rename = "electionName")]
    pub election_name: Option<String>,
    #[serde(rename = "electionDate")]
    pub election_date: Option<String>,
    #[serde(rename = "state")]
    pub state: Option<String>,
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SnapCandidate {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "middleName")]
    pub middle_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    #[serde(rename = "abbrevName")]
    pub abbrev_name: Option<String>,
    pub suffix: Option<String>,
    #[serde(rename = "useSuffix")]
    pub use_suffix: Option<bool>,
    #[serde(rename = "apNatlNumber")]
    pub ap_natl_number: Option<String>,
    #[serde(rename = "apPolraNumber")]
    pub ap_polra_number: Option<String>,
    #[serde(rename = "apRaceNumber")]
    pub ap_race_number: Option<String>,
    #[serde(rename = "apPolNumber")]
    pub ap_pol_number: Option<String>,
    #[serde(rename = "combinedId")]
    pub combined_id: Option<String>,
    pub party: Option<String>,
    #[serde(rename = "voteTotal")]
    pub vote_total: Option<u64>,
    #[serde(rename = "voteTotalPercent")]
    pub vote_total_percent: Option<f64>,
    #[serde(rename = "isWinner")]
    pub is_winner: Option<bool>,
    #[serde(rename = "isRunoff")]
    pub is_runoff: Option<bool>,
    #[serde(rename = "delegateTotal")]
    pub delegate_total: Option<u32>,
    #[serde(rename = "delegateTotalPercent")]
    pub delegate_total_percent: Option<f64>,
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SnapResult {
    /// The polra number of the candidate.
    pub candidate: String,
    #[serde(rename = "voteTotal")]
    pub vote_total: Option<u64>,
    #[serde(rename = "voteTotalPercent")]
    pub vote_total_percent: Option<f64>,
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SnapReportingUnit {
    #[serde(rename = "apNumber")]
    pub ap_number: Option<String>,
    pub name: Option<String>,
    pub abbrev: Option<String>,
    pub fips: Option<String>,
    #[serde(rename = "precinctsTotal")]
    pub precincts_total: Option<u32>,
    #[serde(rename = "precinctsReporting")]
    pub precincts_reporting: Option<u32>,
    #[serde(rename = "precinctsReportingPercent")]
    pub precincts_reporting_percent: Option<f64>,
    #[serde(rename = "numRegVoters")]
    pub num_reg_voters: Option<u64>,
    #[serde(rename = "votesCast")]
    pub votes_cast: Option<u64>,
    #[serde(default)]
    pub results: Vec<SnapResult>,
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SnapRace {
    #[serde(rename = "apRaceNumber")]
    pub ap_race_number: Option<String>,
    #[serde(rename = "officeName")]
    pub office_name: Option<String>,
    #[serde(rename = "officeDescription")]
    pub office_description: Option<String>,
    #[serde(rename = "officeId")]
    pub office_id: Option<String>,
    #[serde(rename = "seatName")]
    pub seat_name: Option<String>,
    #[serde(rename = "seatNumber")]
    pub seat_number: Option<u32>,
    pub scope: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "numWinners")]
    pub num_winners: Option<u32>,
    #[serde(rename = "raceType")]
    pub race_type: Option<String>,
    pub party: Option<String>,
    pub uncontested: Option<bool>,
    #[serde(rename = "precinctsTotal")]
    pub precincts_total: Option<u32>,
    #[serde(rename = "precinctsReporting")]
    pub precincts_reporting: Option<u32>,
    #[serde(rename = "precinctsReportingPercent")]
    pub precincts_reporting_percent: Option<f64>,
    #[serde(rename = "votesCast")]
    pub votes_cast: Option<u64>,
    #[serde(default)]
    pub candidates: Vec<SnapCandidate>,
    #[serde(rename = "reportingUnits", default)]
    pub reporting_units: Vec<SnapReportingUnit>,
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "outputSettings", default)]
    pub output_settings: OutputSettings,
    #[serde(default)]
    pub races: Vec<SnapRace>,
}

// Empty codes are treated as missing.
fn non_empty(code: &Option<String>) -> Option<&str> {
    match code.as_deref() {
        Some(x) if x.is_empty() => None,
        x => x,
    }
}

pub fn to_candidate(c: &SnapCandidate) -> Candidate {
    Candidate {
        first_name: c.first_name.clone(),
        middle_name: c.middle_name.clone(),
        last_name: c.last_name.clone(),
        abbrev_name: c.abbrev_name.clone(),
        suffix: c.suffix.clone(),
        use_suffix: c.use_suffix,
        ap_natl_number: c.ap_natl_number.clone(),
        ap_polra_number: c.ap_polra_number.clone(),
        ap_race_number: c.ap_race_number.clone(),
        ap_pol_number: c.ap_pol_number.clone(),
        combined_id: c.combined_id.clone(),
        party: c.party.clone(),
        vote_total: c.vote_total,
        vote_total_percent: c.vote_total_percent,
        is_winner: c.is_winner,
        is_runoff: c.is_runoff,
        delegate_total: c.delegate_total,
        delegate_total_percent: c.delegate_total_percent,
    }
}

pub fn to_reporting_unit_config(ru: &SnapReportingUnit) -> ReportingUnitConfig {
    ReportingUnitConfig {
        ap_number: ru.ap_number.clone(),
        name: ru.name.clone(),
        abbrev: ru.abbrev.clone(),
        fips: ru.fips.clone(),
        precincts_total: ru.precincts_total,
        precincts_reporting: ru.precincts_reporting,
        precincts_reporting_percent: ru.precincts_reporting_percent,
        num_reg_voters: ru.num_reg_voters,
        votes_cast: ru.votes_cast,
    }
}

pub fn to_race_config(r: &SnapRace) -> RaceConfig {
    RaceConfig {
        ap_race_number: r.ap_race_number.clone(),
        office_name: r.office_name.clone(),
        office_description: r.office_description.clone(),
        office_id: r.office_id.clone(),
        seat_name: r.seat_name.clone(),
        seat_number: r.seat_number,
        scope: non_empty(&r.scope).map(Scope::from_code),
        date: r.date.clone(),
        num_winners: r.num_winners,
        race_type: non_empty(&r.race_type).map(RaceType::from_code),
        party: r.party.clone(),
        uncontested: r.uncontested,
        precincts_total: r.precincts_total,
        precincts_reporting: r.precincts_reporting,
        precincts_reporting_percent: r.precincts_reporting_percent,
        votes_cast: r.votes_cast,
    }
}

/// Builds a race with all its candidates, then each unit followed by its results.
///
/// A unit listed again with the same fips replaces the earlier one, results included.
pub fn build_race(r: &SnapRace) -> Result<Race, LoadErrors> {
    let candidates: Vec<Candidate> = r.candidates.iter().map(to_candidate).collect();
    let mut builder = Builder::new(to_race_config(r)).candidates(&candidates);
    for ru in r.reporting_units.iter() {
        builder = builder.reporting_unit(to_reporting_unit_config(ru));
        for res in ru.results.iter() {
            builder.add_result(ResultConfig {
                candidate: Some(res.candidate.clone()),
                reporting_unit: ru.fips.clone(),
                vote_total: res.vote_total,
                vote_total_percent: res.vote_total_percent,
            })?;
        }
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_local_race() {
        let r: SnapRace = serde_json::from_str(
            r#"{"apRaceNumber": "3", "officeName": "Mayor", "seatName": "Ward 3",
                "officeDescription": "Special Election", "scope": "L", "raceType": "G"}"#,
        )
        .unwrap();
        assert!(r.candidates.is_empty());
        let race = build_race(&r).unwrap();
        assert!(race.is_local());
        assert_eq!(race.name(), "Mayor Ward 3 - Special Election");
    }

    #[test]
    fn empty_codes_are_missing() {
        let r: SnapRace =
            serde_json::from_str(r#"{"officeName": "Senate", "scope": "", "raceType": ""}"#)
                .unwrap();
        let config = to_race_config(&r);
        assert_eq!(config.scope, None);
        assert_eq!(config.race_type, None);
    }

    #[test]
    fn units_without_fips() {
        let r: SnapRace = serde_json::from_str(
            r#"{"candidates": [{"apPolraNumber": "1"}],
                "reportingUnits": [{"name": "Nowhere", "results": [{"candidate": "1"}]}]}"#,
        )
        .unwrap();
        // Units without fips are keyed by the empty code.
        let race = build_race(&r).unwrap();
        assert_eq!(race.get_reporting_unit("").map(|ru| ru.num_results()), Some(1));
    }

    #[test]
    fn repeated_unit_starts_clean() {
        let r: SnapRace = serde_json::from_str(
            r#"{"candidates": [{"apPolraNumber": "1"}, {"apPolraNumber": "2"}],
                "reportingUnits": [
                    {"fips": "06001", "name": "Old", "results": [{"candidate": "1", "voteTotal": 10}]},
                    {"fips": "06001", "name": "New", "results": [{"candidate": "2", "voteTotal": 20}]}
                ]}"#,
        )
        .unwrap();
        let race = build_race(&r).unwrap();
        let ru = race.get_reporting_unit("06001").unwrap();
        assert_eq!(ru.name.as_deref(), Some("New"));
        assert_eq!(ru.num_results(), 1);
        assert!(ru.result_for("1").is_none());
        assert_eq!(ru.result_for("2").and_then(|res| res.vote_total), Some(20));
    }

    #[test]
    fn candidate_fields() {
        let c: SnapCandidate = serde_json::from_str(
            r#"{"apPolraNumber": "9", "lastName": "Yes", "isWinner": true, "delegateTotal": 3}"#,
        )
        .unwrap();
        let cand = to_candidate(&c);
        assert_eq!(cand.display_name(), "Yes");
        assert_eq!(cand.is_winner, Some(true));
        assert_eq!(cand.is_runoff, None);
        assert_eq!(cand.delegates(), Some(3));
    }
}
