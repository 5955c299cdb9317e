//! Station name tokenizing and the word-subsequence equivalence rule.

/// The phrase that marks a stop name as the canonical station entry.
const RAILWAY_STATION: &str = "railway station";

/// A station name lower-cased and split into whitespace-separated words.
///
/// Leading and trailing whitespace is insignificant, and runs of whitespace
/// act as a single separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameWords {
    words: Vec<String>,
}

impl NameWords {
    pub fn new(name: &str) -> Self {
        let words = name
            .to_lowercase()
            .split_whitespace()
            .map(str::to_owned)
            .collect();
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the name contains the phrase "railway station".
    ///
    /// Matched as a substring of the single-spaced name, so the phrase may
    /// run into punctuation ("Railway Station/Swan St") or a longer word.
    pub fn has_railway_station(&self) -> bool {
        self.words.join(" ").contains(RAILWAY_STATION)
    }

    /// Whether the shorter of the two word sequences is an in-order
    /// subsequence of the longer one. Empty names only match empty names.
    pub fn is_equivalent(&self, other: &NameWords) -> bool {
        if self.is_empty() || other.is_empty() {
            return self.is_empty() && other.is_empty();
        }
        let (shorter, longer) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        is_word_subsequence(shorter.words(), longer.words())
    }
}

/// Whether every word of `needle` appears in `haystack` in the same
/// relative order. Words need not be adjacent.
///
/// An empty needle is a subsequence of anything.
pub fn is_word_subsequence<N, H>(needle: &[N], haystack: &[H]) -> bool
where
    N: AsRef<str>,
    H: AsRef<str>,
{
    let mut remaining = haystack.iter();
    needle.iter().all(|word| {
        remaining
            .by_ref()
            .any(|candidate| candidate.as_ref() == word.as_ref())
    })
}

/// Whether two raw station names name the same station.
///
/// Two empty names are equivalent; an empty name never matches a
/// non-empty one.
///
/// # Examples
///
/// ```
/// use station_map::dedup::names_equivalent;
///
/// assert!(names_equivalent("Flinders Street", "Flinders Street Railway Station"));
/// assert!(names_equivalent("flinders station", "Flinders Street Railway Station"));
/// assert!(!names_equivalent("station flinders", "Flinders Station"));
/// ```
pub fn names_equivalent(a: &str, b: &str) -> bool {
    NameWords::new(a).is_equivalent(&NameWords::new(b))
}
