// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// The kind of contest, as coded by the wire service.
///
/// Codes that are not recognized are kept in `Unknown` so that they
/// can still be reported, but they carry no display label.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum RaceType {
    /// `D`
    DemPrimary,
    /// `R`
    GopPrimary,
    /// `G`
    General,
    /// `E`
    DemCaucus,
    /// `S`
    GopCaucus,
    Unknown(String),
}

impl RaceType {
    pub fn from_code(code: &str) -> RaceType {
        match code {
            "D" => RaceType::DemPrimary,
            "R" => RaceType::GopPrimary,
            "G" => RaceType::General,
            "E" => RaceType::DemCaucus,
            "S" => RaceType::GopCaucus,
            x => RaceType::Unknown(x.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            RaceType::DemPrimary => "D",
            RaceType::GopPrimary => "R",
            RaceType::General => "G",
            RaceType::DemCaucus => "E",
            RaceType::GopCaucus => "S",
            RaceType::Unknown(x) => x.as_str(),
        }
    }

    /// The human-readable label, if the code is a known one.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            RaceType::DemPrimary => Some("Dem Primary"),
            RaceType::GopPrimary => Some("GOP Primary"),
            RaceType::General => Some("General Election"),
            RaceType::DemCaucus => Some("Dem Caucus"),
            RaceType::GopCaucus => Some("GOP Caucus"),
            RaceType::Unknown(_) => None,
        }
    }
}

/// The level at which a race is decided.
///
/// Only local races (`L`) change how the name of a race is built.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum Scope {
    Local,
    Other(String),
}

impl Scope {
    pub fn from_code(code: &str) -> Scope {
        match code {
            "L" => Scope::Local,
            x => Scope::Other(x.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Scope::Local => "L",
            Scope::Other(x) => x.as_str(),
        }
    }
}

/// The fields of a race, as provided by the loader.
///
/// Every field is optional. Use `..Default::default()` for the fields
/// that the feed did not report.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct RaceConfig {
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
}

/// The fields of a reporting unit, as provided by the loader.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct ReportingUnitConfig {
    pub ap_number: Option<String>,
    pub name: Option<String>,
    pub abbrev: Option<String>,
    /// `00000` for the state-level unit.
    pub fips: Option<String>,
    pub precincts_total: Option<u32>,
    pub precincts_reporting: Option<u32>,
    pub precincts_reporting_percent: Option<f64>,
    pub num_reg_voters: Option<u64>,
    pub votes_cast: Option<u64>,
}

/// The fields of a vote count.
///
/// `candidate` is the polra number of a candidate of the race and
/// `reporting_unit` is the fips code of one of its reporting units.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct ResultConfig {
    pub candidate: Option<String>,
    pub reporting_unit: Option<String>,
    pub vote_total: Option<u64>,
    pub vote_total_percent: Option<f64>,
}

/// Errors raised while wiring a race together with the builder.
///
/// The object model itself never fails: these only come from the
/// referential checks that the loader chooses to run.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum LoadErrors {
    /// A result refers to a candidate that was not added to the race.
    UnknownCandidate(String),
    /// A result refers to a reporting unit that was not added to the race.
    UnknownReportingUnit(String),
}

impl Error for LoadErrors {}

impl Display for LoadErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadErrors::UnknownCandidate(id) => {
                write!(f, "result refers to unknown candidate {:?}", id)
            }
            LoadErrors::UnknownReportingUnit(fips) => {
                write!(f, "result refers to unknown reporting unit {:?}", fips)
            }
        }
    }
}
