use crate::dataset::RouteRecord;
use crate::error::Error;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Bidirectional route lookup. Built once at startup, read-only after.
///
/// Travel time is treated as symmetric: every directed record is also
/// queryable with origin and destination swapped. When the dataset carries
/// an explicit reverse record for a pair, that record wins over the
/// mirrored copy, so asymmetric routes stay expressible.
pub struct RouteTable {
    records: Vec<RouteRecord>,
    index: FxHashMap<(String, String), usize>,
}

impl RouteTable {
    pub fn build(records: Vec<RouteRecord>) -> RouteTable {
        let mirrored: Vec<RouteRecord> = records.iter().map(RouteRecord::reversed).collect();

        let mut table = RouteTable {
            records: Vec::with_capacity(records.len() * 2),
            index: FxHashMap::default(),
        };

        // Originals before mirrors: first seen wins on dedup, so a literal
        // (B,A) row in the dataset overrides the mirror of (A,B).
        for record in records.into_iter().chain(mirrored) {
            let key = (record.origin.clone(), record.destination.clone());
            if table.index.contains_key(&key) {
                continue;
            }
            table.index.insert(key, table.records.len());
            table.records.push(record);
        }

        table
    }

    /// All distinct origin stations, sorted.
    pub fn origins(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.origin.as_str()).collect()
    }

    /// All stations reachable from `origin`, sorted. Empty for an unknown
    /// origin.
    pub fn destinations_from(&self, origin: &str) -> BTreeSet<&str> {
        self.records
            .iter()
            .filter(|r| r.origin == origin)
            .map(|r| r.destination.as_str())
            .collect()
    }

    pub fn lookup(&self, origin: &str, destination: &str) -> Result<&RouteRecord, Error> {
        self.index
            .get(&(origin.to_owned(), destination.to_owned()))
            .map(|&i| &self.records[i])
            .ok_or_else(|| Error::RouteNotFound {
                origin: origin.to_owned(),
                destination: destination.to_owned(),
            })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(origin: &str, destination: &str, train: f64) -> RouteRecord {
        RouteRecord {
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            total_time_in_train: train,
            total_walking_time: 60.0,
            total_cycling_time: 20.0,
            calories_burnt_walking: 300.0,
            calories_burnt_cycling: 150.0,
        }
    }

    #[test]
    fn lookup_both_directions() {
        let table = RouteTable::build(vec![record("A", "B", 10.0)]);

        let forward = table.lookup("A", "B").unwrap();
        let backward = table.lookup("B", "A").unwrap();
        assert_eq!(forward.total_time_in_train, backward.total_time_in_train);
        assert_eq!(forward.total_walking_time, backward.total_walking_time);
        assert_eq!(forward.total_cycling_time, backward.total_cycling_time);
        assert_eq!(
            forward.calories_burnt_walking,
            backward.calories_burnt_walking
        );
        assert_eq!(
            forward.calories_burnt_cycling,
            backward.calories_burnt_cycling
        );
        assert_eq!("B", backward.origin);
        assert_eq!("A", backward.destination);
    }

    #[test]
    fn explicit_reverse_record_wins_over_mirror() {
        // Hilly route: cycling back takes longer than cycling there.
        let mut there = record("A", "B", 10.0);
        there.total_cycling_time = 18.0;
        let mut back = record("B", "A", 10.0);
        back.total_cycling_time = 31.0;

        let table = RouteTable::build(vec![there, back]);
        assert_eq!(18.0, table.lookup("A", "B").unwrap().total_cycling_time);
        assert_eq!(31.0, table.lookup("B", "A").unwrap().total_cycling_time);
        assert_eq!(2, table.len());
    }

    #[test]
    fn duplicates_collapse() {
        let records = vec![record("A", "B", 10.0), record("B", "C", 5.0)];
        let doubled: Vec<_> = records.iter().chain(records.iter()).cloned().collect();

        let once = RouteTable::build(records);
        let twice = RouteTable::build(doubled);

        assert_eq!(once.len(), twice.len());
        for (o, d) in [("A", "B"), ("B", "A"), ("B", "C"), ("C", "B")] {
            assert_eq!(
                once.lookup(o, d).unwrap(),
                twice.lookup(o, d).unwrap(),
                "mismatch for ({o}, {d})"
            );
        }
    }

    #[test]
    fn origins_and_destinations_are_sorted() {
        let table = RouteTable::build(vec![
            record("Victoria", "Euston", 9.0),
            record("Euston", "Paddington", 11.0),
        ]);

        let origins: Vec<_> = table.origins().into_iter().collect();
        assert_eq!(vec!["Euston", "Paddington", "Victoria"], origins);

        let from_euston: Vec<_> = table.destinations_from("Euston").into_iter().collect();
        assert_eq!(vec!["Paddington", "Victoria"], from_euston);

        assert!(table.destinations_from("Bank").is_empty());
    }

    #[test]
    fn empty_table_reports_not_found() {
        let table = RouteTable::build(vec![]);
        match table.lookup("X", "Y") {
            Err(Error::RouteNotFound {
                origin,
                destination,
            }) => {
                assert_eq!("X", origin);
                assert_eq!("Y", destination);
            }
            other => panic!("expected RouteNotFound, got {other:?}"),
        }
    }
}
