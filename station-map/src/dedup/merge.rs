//! Greedy first-match merging of near-duplicate stop records.

use tracing::{debug, trace};

use crate::domain::StopRecord;

use super::name::NameWords;

/// Which record survives when two equivalent records meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    KeepExisting,
    ReplaceWithIncoming,
}

/// A group representative with its tokenized name cached.
struct Representative {
    record: StopRecord,
    words: NameWords,
}

impl Representative {
    fn new(record: StopRecord) -> Self {
        let words = NameWords::new(record.name());
        Self { record, words }
    }
}

/// Decide between an existing representative and an equivalent incoming record.
///
/// A name containing "railway station" wins outright when the other lacks
/// it. Otherwise the longer raw name wins, and the existing record holds on
/// an exact tie.
pub fn resolve(existing: &StopRecord, incoming: &StopRecord) -> MergeOutcome {
    resolve_words(
        existing,
        &NameWords::new(existing.name()),
        incoming,
        &NameWords::new(incoming.name()),
    )
}

fn resolve_words(
    existing: &StopRecord,
    existing_words: &NameWords,
    incoming: &StopRecord,
    incoming_words: &NameWords,
) -> MergeOutcome {
    match (
        existing_words.has_railway_station(),
        incoming_words.has_railway_station(),
    ) {
        (true, false) => MergeOutcome::KeepExisting,
        (false, true) => MergeOutcome::ReplaceWithIncoming,
        _ => {
            let existing_len = existing.name().chars().count();
            let incoming_len = incoming.name().chars().count();
            if incoming_len > existing_len {
                MergeOutcome::ReplaceWithIncoming
            } else {
                MergeOutcome::KeepExisting
            }
        }
    }
}

/// Collapse near-duplicate stop records into one record per station.
///
/// Records are scanned in input order. Each record is compared against the
/// current representatives in order; the first equivalent one absorbs it
/// (see [`resolve`]) and scanning stops. A record with no equivalent
/// representative starts a new group at the end.
///
/// Merging is greedy and non-transitive: a record equivalent to two
/// unrelated groups joins only the first, and the two groups stay apart.
/// A replaced representative keeps its group's position in the output.
///
/// # Examples
///
/// ```
/// use station_map::dedup::dedup_stations;
/// use station_map::domain::{Coordinate, StopRecord};
///
/// let stops = vec![
///     StopRecord::new("1", "Flinders Street", Coordinate::new(-37.8, 144.9).unwrap()),
///     StopRecord::new("2", "Richmond", Coordinate::new(-37.82, 144.99).unwrap()),
///     StopRecord::new("3", "Flinders Street Railway Station", Coordinate::new(-37.81, 144.91).unwrap()),
/// ];
///
/// let stations = dedup_stations(stops);
/// let names: Vec<_> = stations.iter().map(|s| s.name()).collect();
/// assert_eq!(names, ["Flinders Street Railway Station", "Richmond"]);
/// ```
pub fn dedup_stations(stops: Vec<StopRecord>) -> Vec<StopRecord> {
    let input_len = stops.len();
    let mut representatives: Vec<Representative> = Vec::new();

    for incoming in stops {
        let incoming_words = NameWords::new(incoming.name());

        match representatives
            .iter_mut()
            .find(|rep| rep.words.is_equivalent(&incoming_words))
        {
            Some(rep) => {
                let outcome =
                    resolve_words(&rep.record, &rep.words, &incoming, &incoming_words);
                trace!(
                    existing = rep.record.name(),
                    incoming = incoming.name(),
                    ?outcome,
                    "merging equivalent stops"
                );
                if outcome == MergeOutcome::ReplaceWithIncoming {
                    *rep = Representative {
                        record: incoming,
                        words: incoming_words,
                    };
                }
            }
            None => representatives.push(Representative::new(incoming)),
        }
    }

    debug!(
        input = input_len,
        output = representatives.len(),
        "deduplicated stops"
    );

    representatives.into_iter().map(|rep| rep.record).collect()
}
