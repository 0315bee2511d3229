/*!

This is the long-form manual for `ap_results` and `apresults`.

## The object model

A [`Race`](crate::Race) owns its [`Candidate`](crate::Candidate)s, keyed by
their polra number, and its [`ReportingUnit`](crate::ReportingUnit)s, keyed by
their fips code. Each reporting unit owns one
[`UnitResult`](crate::UnitResult) per candidate that reported votes in it.

Adding an entity whose key is already present replaces the previous entity.
This is how newer vote counts supersede older ones when the feed is loaded
again.

The state-level aggregate is the reporting unit with the fips code `00000`.
All the other units with a fips code are considered counties.

### Race names

| race           | example name                        |
|----------------|-------------------------------------|
| local (`L`)    | `Mayor Ward 3 - Special Election`   |
| proposition    | `Proposition 8`                     |
| anything else  | `President`                         |

When the race is not a general election, the label of the race type is
prepended: `Dem Primary - President`. Races with a missing or unknown race
type have no label, so they get no prefix: `President`.

| code | label              |
|------|--------------------|
| `D`  | `Dem Primary`      |
| `R`  | `GOP Primary`      |
| `G`  | `General Election` |
| `E`  | `Dem Caucus`       |
| `S`  | `GOP Caucus`       |

## Snapshots

`apresults` reads a snapshot of races in JSON. It is not the format of the
wire service: a loader is expected to produce it. Every field is optional.

```text
{
  "outputSettings": {"electionName": "Iowa caucuses", "electionDate": "2012-01-03"},
  "races": [
    {
      "apRaceNumber": "16957",
      "officeName": "President",
      "raceType": "S",
      "candidates": [
        {"apPolraNumber": "1", "firstName": "Mitt", "lastName": "Romney", "party": "GOP"}
      ],
      "reportingUnits": [
        {"fips": "00000", "name": "Iowa",
         "results": [{"candidate": "1", "voteTotal": 30015, "voteTotalPercent": 24.6}]}
      ]
    }
  ]
}
```

The `candidate` of a result is a polra number. The reporting unit of a result
is the unit it is listed in. A result that refers to a candidate missing from
its race is an error.

## Summary

The summary lists, for each race in the order of the snapshot, its name,
its race type and the results of the state and of every county (by
increasing fips code). Results are sorted by decreasing vote totals.

Use `--reference` to compare the summary with a previously generated one.

 */
