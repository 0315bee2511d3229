// Summary of the races, in JSON.

use ap_results::*;
use serde_json::json;
use serde_json::Value as JSValue;

use crate::report::config_reader::OutputSettings;

fn results_to_json(race: &Race, ru: &ReportingUnit) -> Vec<JSValue> {
    race.results_for(ru.id())
        .unwrap_or_default()
        .iter()
        .map(|view| {
            let name = match view.candidate {
                Some(c) => c.display_name(),
                None => view.result.candidate_id().to_string(),
            };
            json!({
                "candidate": name,
                "party": view.candidate.and_then(|c| c.party.clone()),
                "votes": view.result.vote_total,
                "percent": view.result.vote_total_percent,
            })
        })
        .collect()
}

fn unit_to_json(race: &Race, ru: &ReportingUnit) -> JSValue {
    json!({
        "fips": ru.fips,
        "name": ru.display_name(),
        "precinctsReporting": ru.precincts_reporting,
        "precinctsTotal": ru.precincts_total,
        "results": results_to_json(race, ru),
    })
}

fn race_to_json(race: &Race) -> JSValue {
    // Counties come out of the race in no particular order.
    let mut counties = race.counties();
    counties.sort_by(|a, b| a.id().cmp(b.id()));
    let counties_js: Vec<JSValue> = counties.iter().map(|ru| unit_to_json(race, ru)).collect();

    json!({
        "raceNumber": race.ap_race_number,
        "name": race.name(),
        "raceType": race.race_type_name(),
        "isPrimary": race.is_primary(),
        "isCaucus": race.is_caucus(),
        "isGeneral": race.is_general(),
        "uncontested": race.uncontested,
        "state": race.state().map(|s| unit_to_json(race, s)),
        "counties": counties_js,
    })
}

pub fn build_summary_js(settings: &OutputSettings, races: &[Race]) -> JSValue {
    let races_js: Vec<JSValue> = races.iter().map(race_to_json).collect();
    json!({
        "config": settings,
        "races": races_js,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ap_results::builder::Builder;

    fn race() -> Race {
        let mut b = Builder::new(RaceConfig {
            ap_race_number: Some("100".to_string()),
            office_name: Some("Proposition".to_string()),
            seat_name: Some("8 - Marriage".to_string()),
            race_type: Some(RaceType::General),
            ..Default::default()
        })
        .candidate(Candidate {
            ap_polra_number: Some("1".to_string()),
            last_name: Some("Yes".to_string()),
            ..Default::default()
        })
        .candidate(Candidate {
            ap_polra_number: Some("2".to_string()),
            last_name: Some("No".to_string()),
            ..Default::default()
        });
        for (fips, name) in [("06003", "Alpine"), ("00000", "California"), ("06001", "Alameda")] {
            b = b.reporting_unit(ReportingUnitConfig {
                fips: Some(fips.to_string()),
                name: Some(name.to_string()),
                ..Default::default()
            });
        }
        for (cand, votes) in [("1", 120), ("2", 500)] {
            b.add_result(ResultConfig {
                candidate: Some(cand.to_string()),
                reporting_unit: Some("00000".to_string()),
                vote_total: Some(votes),
                vote_total_percent: None,
            })
            .unwrap();
        }
        b.build()
    }

    #[test]
    fn race_summary() {
        let js = build_summary_js(&OutputSettings::default(), &[race()]);
        let r = &js["races"][0];
        assert_eq!(r["name"], "Proposition 8");
        assert_eq!(r["raceType"], "General Election");
        assert_eq!(r["isGeneral"], true);
        assert_eq!(r["state"]["name"], "California (state)");
        assert_eq!(r["state"]["results"][0]["candidate"], "No");
        assert_eq!(r["state"]["results"][0]["votes"], 500);
        assert_eq!(r["state"]["results"][1]["candidate"], "Yes");
        assert_eq!(r["counties"][0]["fips"], "06001");
        assert_eq!(r["counties"][1]["fips"], "06003");
        assert_eq!(r["counties"].as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn race_without_state() {
        let r = Race::new(RaceConfig::default());
        let js = race_to_json(&r);
        assert!(js["state"].is_null());
        assert_eq!(js["raceType"], JSValue::Null);
    }
}
