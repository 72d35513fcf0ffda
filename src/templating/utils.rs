//! Helpers shared by the templating and version lookup code.

use strsim::levenshtein;

use crate::constants::SIMILARITY_THRESHOLD_PERCENT;

/// Find names similar to `target` using Levenshtein distance.
///
/// Returns at most three candidates, closest first, whose distance is within
/// [`SIMILARITY_THRESHOLD_PERCENT`] of the target's length.
pub fn find_similar<'a, I>(target: &str, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let limit = target.len() * SIMILARITY_THRESHOLD_PERCENT / 100;

    let mut scored: Vec<(&str, usize)> = candidates
        .into_iter()
        .map(|candidate| (candidate, levenshtein(target, candidate)))
        .filter(|(_, distance)| *distance <= limit)
        .collect();

    // Stable sort keeps candidate order for equal distances
    scored.sort_by_key(|(_, distance)| *distance);

    scored.into_iter().take(3).map(|(candidate, _)| candidate.to_string()).collect()
}
