pub use crate::config::*;
use crate::{Candidate, Race, ReportingUnit, UnitResult};
use log::debug;

/// A builder for wiring a race together.
///
/// Unlike the race itself, the builder checks that every result refers to
/// a candidate and a reporting unit that were added beforehand.
///
/// ```
/// use ap_results::builder::Builder;
/// use ap_results::{Candidate, RaceConfig, RaceType, ReportingUnitConfig, ResultConfig};
/// # use ap_results::LoadErrors;
///
/// let mut builder = Builder::new(RaceConfig {
///     office_name: Some("President".to_string()),
///     race_type: Some(RaceType::from_code("D")),
///     ..Default::default()
/// })
/// .candidate(Candidate {
///     ap_polra_number: Some("1".to_string()),
///     last_name: Some("Obama".to_string()),
///     ..Default::default()
/// })
/// .reporting_unit(ReportingUnitConfig {
///     fips: Some("00000".to_string()),
///     name: Some("Iowa".to_string()),
///     ..Default::default()
/// });
///
/// builder.add_result(ResultConfig {
///     candidate: Some("1".to_string()),
///     reporting_unit: Some("00000".to_string()),
///     vote_total: Some(120),
///     vote_total_percent: None,
/// })?;
///
/// let race = builder.build();
/// assert_eq!(race.name(), "Dem Primary - President");
/// # Ok::<(), LoadErrors>(())
/// ```
pub struct Builder {
    pub(crate) _race: Race,
}

impl Builder {
    pub fn new(config: RaceConfig) -> Builder {
        Builder {
            _race: Race::new(config),
        }
    }

    pub fn candidate(mut self, candidate: Candidate) -> Builder {
        self._race.add_candidate(candidate);
        self
    }

    pub fn candidates(mut self, cands: &[Candidate]) -> Builder {
        for c in cands {
            self._race.add_candidate(c.clone());
        }
        self
    }

    pub fn reporting_unit(mut self, config: ReportingUnitConfig) -> Builder {
        self._race.add_reporting_unit(ReportingUnit::new(config));
        self
    }

    /// Records a vote count in its reporting unit.
    ///
    /// A later count for the same candidate and unit replaces this one.
    pub fn add_result(&mut self, config: ResultConfig) -> Result<(), LoadErrors> {
        let result = UnitResult::new(config);
        if self._race.get_candidate(result.candidate_id()).is_none() {
            return Err(LoadErrors::UnknownCandidate(
                result.candidate_id().to_string(),
            ));
        }
        let fips = result.fips().to_string();
        let ru = self
            ._race
            .get_reporting_unit_mut(&fips)
            .ok_or_else(|| LoadErrors::UnknownReportingUnit(fips.clone()))?;
        debug!(
            "add_result: candidate {:?} unit {:?}: {:?} votes",
            result.candidate_id(),
            fips,
            result.vote_total
        );
        ru.update_result(result);
        Ok(())
    }

    pub fn build(self) -> Race {
        self._race
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> Builder {
        Builder::new(RaceConfig {
            ap_race_number: Some("5000".to_string()),
            office_name: Some("Governor".to_string()),
            race_type: Some(RaceType::General),
            ..Default::default()
        })
        .candidates(&[
            Candidate {
                ap_polra_number: Some("1".to_string()),
                last_name: Some("Brown".to_string()),
                ..Default::default()
            },
            Candidate {
                ap_polra_number: Some("2".to_string()),
                last_name: Some("Whitman".to_string()),
                ..Default::default()
            },
        ])
        .reporting_unit(ReportingUnitConfig {
            fips: Some("06001".to_string()),
            name: Some("Alameda".to_string()),
            ..Default::default()
        })
    }

    fn votes(candidate: &str, fips: &str, total: u64) -> ResultConfig {
        ResultConfig {
            candidate: Some(candidate.to_string()),
            reporting_unit: Some(fips.to_string()),
            vote_total: Some(total),
            vote_total_percent: None,
        }
    }

    #[test]
    fn builds_race() {
        let mut b = builder();
        assert_eq!(b.add_result(votes("1", "06001", 10)), Ok(()));
        assert_eq!(b.add_result(votes("2", "06001", 30)), Ok(()));
        assert_eq!(b.add_result(votes("1", "06001", 40)), Ok(()));
        let race = b.build();
        assert_eq!(race.candidates().len(), 2);
        let ru = race.get_reporting_unit("06001").unwrap();
        assert_eq!(ru.num_results(), 2);
        let top: Vec<&str> = ru.results().iter().map(|r| r.candidate_id()).collect();
        assert_eq!(top, vec!["1", "2"]);
    }

    #[test]
    fn rejects_unknown_references() {
        let mut b = builder();
        assert_eq!(
            b.add_result(votes("9", "06001", 10)),
            Err(LoadErrors::UnknownCandidate("9".to_string()))
        );
        assert_eq!(
            b.add_result(votes("1", "06099", 10)),
            Err(LoadErrors::UnknownReportingUnit("06099".to_string()))
        );
        let race = b.build();
        assert_eq!(race.get_reporting_unit("06001").unwrap().num_results(), 0);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            LoadErrors::UnknownCandidate("9".to_string()).to_string(),
            "result refers to unknown candidate \"9\""
        );
    }
}
