//! Bulk loading of road networks from delimited text.
//!
//! Each non-blank line is one record `road;weight;town1;town2`. A comma works
//! as a delimiter too, and both can be mixed within a line. Fields are
//! trimmed. Both towns are added if missing, then the road between them.
//!
//! ```
//! use towngraph::loader;
//!
//! let data = "I-95;20;Baltimore;Washington\nRoute 50,25,Washington,Annapolis\n";
//! let atlas = loader::load_str(data).unwrap();
//!
//! assert_eq!(atlas.all_towns(), vec!["Annapolis", "Baltimore", "Washington"]);
//! assert_eq!(atlas.path("Baltimore", "Annapolis").len(), 2);
//! ```

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    num::ParseIntError,
    path::Path,
};

use thiserror::Error;
use tracing::{info, warn};

use crate::atlas::Atlas;

/// The error encountered while loading records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read records: {0}")]
    Io(#[from] io::Error),

    /// A record does not have exactly four fields.
    #[error("line {line}: expected 4 fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: invalid weight `{weight}`: {source}")]
    Weight {
        line: usize,
        weight: String,
        source: ParseIntError,
    },

    /// Road or town name is empty.
    #[error("line {line}: empty {field}")]
    EmptyField { line: usize, field: &'static str },
}

/// A single parsed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadRecord {
    pub road: String,
    pub weight: u32,
    pub town1: String,
    pub town2: String,
}

/// Parses one record. `line` is only used in errors.
pub fn parse_record(record: &str, line: usize) -> Result<RoadRecord, LoadError> {
    let fields = record
        .split(|c: char| c == ';' || c == ',')
        .map(str::trim)
        .collect::<Vec<_>>();

    let &[road, weight, town1, town2] = &fields[..] else {
        return Err(LoadError::FieldCount {
            line,
            found: fields.len(),
        });
    };

    for (value, field) in [(road, "road name"), (town1, "town name"), (town2, "town name")] {
        if value.is_empty() {
            return Err(LoadError::EmptyField { line, field });
        }
    }

    let weight: u32 = weight.parse().map_err(|source| LoadError::Weight {
        line,
        weight: weight.to_owned(),
        source,
    })?;

    Ok(RoadRecord {
        road: road.to_owned(),
        weight,
        town1: town1.to_owned(),
        town2: town2.to_owned(),
    })
}

/// Loads all records from `reader` into `atlas` and returns the number of
/// records read.
///
/// Loading stops at the first malformed record; records before it stay
/// loaded. A road between towns that are already connected is skipped.
pub fn load<R: BufRead>(reader: R, atlas: &mut Atlas) -> Result<usize, LoadError> {
    let mut count = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        let record = parse_record(&line, index + 1)?;

        atlas.add_town(&record.town1);
        atlas.add_town(&record.town2);

        if !atlas.add_road(&record.town1, &record.town2, record.weight, &record.road) {
            warn!(
                line = index + 1,
                road = %record.road,
                town1 = %record.town1,
                town2 = %record.town2,
                "road skipped"
            );
        }

        count += 1;
    }

    Ok(count)
}

pub fn load_str(data: &str) -> Result<Atlas, LoadError> {
    let mut atlas = Atlas::new();
    load(data.as_bytes(), &mut atlas)?;
    Ok(atlas)
}

pub fn load_file(path: impl AsRef<Path>) -> Result<Atlas, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let mut atlas = Atlas::new();
    let count = load(BufReader::new(file), &mut atlas)?;

    info!(
        path = %path.display(),
        records = count,
        towns = atlas.graph().town_count(),
        roads = atlas.graph().road_count(),
        "loaded road network"
    );

    Ok(atlas)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::infra::proptest::record;

    use super::*;

    const MARYLAND: &str = "\
I-270;20;Rockville;Frederick
I-495,8,Rockville,Bethesda
MD-355 ; 5 ; Bethesda ; Silver Spring

Route 29;12,Silver Spring;Columbia
";

    #[test]
    fn parse_semicolon() {
        assert_eq!(
            parse_record("I-270;20;Rockville;Frederick", 1).unwrap(),
            RoadRecord {
                road: "I-270".to_owned(),
                weight: 20,
                town1: "Rockville".to_owned(),
                town2: "Frederick".to_owned(),
            }
        );
    }

    #[test]
    fn parse_mixed_delimiters() {
        let record = parse_record("Route 29;12,Silver Spring;Columbia", 1).unwrap();

        assert_eq!(record.road, "Route 29");
        assert_eq!(record.town1, "Silver Spring");
        assert_eq!(record.town2, "Columbia");
    }

    #[test]
    fn parse_field_count() {
        assert_matches!(
            parse_record("I-270;20;Rockville", 3),
            Err(LoadError::FieldCount { line: 3, found: 3 })
        );
        assert_matches!(
            parse_record("I-270;20;Rockville;Frederick;Hagerstown", 4),
            Err(LoadError::FieldCount { line: 4, found: 5 })
        );
    }

    #[test]
    fn parse_weight() {
        assert_matches!(
            parse_record("I-270;far;Rockville;Frederick", 2),
            Err(LoadError::Weight { line: 2, weight, .. }) if weight == "far"
        );
        assert_matches!(
            parse_record("I-270;-5;Rockville;Frederick", 2),
            Err(LoadError::Weight { .. })
        );
    }

    #[test]
    fn parse_empty_field() {
        assert_matches!(
            parse_record("I-270;20;;Frederick", 7),
            Err(LoadError::EmptyField { line: 7, field: "town name" })
        );
    }

    #[test]
    fn load_records() {
        let mut atlas = Atlas::new();
        let count = load(MARYLAND.as_bytes(), &mut atlas).unwrap();

        assert_eq!(count, 4);
        assert_eq!(
            atlas.all_towns(),
            vec!["Bethesda", "Columbia", "Frederick", "Rockville", "Silver Spring"]
        );
        assert_eq!(atlas.all_roads(), vec!["I-270", "I-495", "MD-355", "Route 29"]);
        assert_eq!(
            atlas.path("Frederick", "Columbia"),
            vec![
                "Frederick via I-270 to Rockville 20 mi",
                "Rockville via I-495 to Bethesda 8 mi",
                "Bethesda via MD-355 to Silver Spring 5 mi",
                "Silver Spring via Route 29 to Columbia 12 mi",
            ]
        );
    }

    #[test]
    fn load_duplicate_road_skipped() {
        let data = "I-270;20;Rockville;Frederick\nAlt 270;25;Frederick;Rockville\n";
        let atlas = load_str(data).unwrap();

        assert_eq!(atlas.all_roads(), vec!["I-270"]);
    }

    #[test]
    fn load_stops_at_malformed() {
        let data = "I-270;20;Rockville;Frederick\nbroken\nI-495;8;Rockville;Bethesda\n";
        let mut atlas = Atlas::new();

        assert_matches!(
            load(data.as_bytes(), &mut atlas),
            Err(LoadError::FieldCount { line: 2, .. })
        );
        assert_eq!(atlas.all_roads(), vec!["I-270"]);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MARYLAND.as_bytes()).unwrap();

        let atlas = load_file(file.path()).unwrap();
        assert_eq!(atlas.graph().road_count(), 4);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_matches!(
            load_file(dir.path().join("missing.txt")),
            Err(LoadError::Io(_))
        );
    }

    const TOWNS: &[&str] = &["Annapolis", "Baltimore", "Columbia", "Dundalk", "Easton"];

    proptest! {
        #[test]
        fn proptest_records_load(records in proptest::collection::vec(record(TOWNS), 0..20)) {
            let data = records.join("\n");
            let atlas = load_str(&data).unwrap();

            for line in &records {
                let record = parse_record(line, 1).unwrap();
                prop_assert!(atlas.contains_town(&record.town1));
                prop_assert!(atlas.contains_town(&record.town2));
                prop_assert!(atlas.contains_road_connection(&record.town1, &record.town2));
            }
            prop_assert!(atlas.graph().road_count() <= records.len());
        }
    }
}
