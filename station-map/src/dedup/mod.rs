//! Station deduplication.
//!
//! Transit feeds list the same physical station several times under
//! slightly different names ("Flinders Street", "Flinders Street Railway
//! Station"). This module collapses those records into one representative
//! per station so the map shows a single marker for each.

mod merge;
mod name;

pub use merge::{MergeOutcome, dedup_stations, resolve};
pub use name::{NameWords, is_word_subsequence, names_equivalent};
