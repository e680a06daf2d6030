//! Revision ranking: within each group of facts reporting the same
//! concept/unit/period, decide which revision is authoritative (spec §4.4).

use secnorm_model::{FactRow, form_priority};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Key identifying facts that describe the same measurement across filings.
type GroupKey = (String, String, String, String, String, Option<i32>, String);

fn group_key(fact: &FactRow) -> GroupKey {
    (
        fact.taxonomy.clone(),
        fact.concept.clone(),
        fact.unit.clone(),
        fact.start_date.clone(),
        fact.end_date.clone(),
        fact.fy,
        fact.fp.clone(),
    )
}

/// Assigns `revision_rank` and `is_preferred` in place, leaving the slice's
/// element order untouched.
///
/// Facts are grouped by `(taxonomy, concept, unit, start_date, end_date, fy,
/// fp)`. Within a group, the one with the latest `filed_date` is rank 1;
/// ties are broken by ascending [`form_priority`] (a 10-K beats a 10-Q for
/// the same filed date). Rank is otherwise unspecified among further ties —
/// both the Python original and this implementation resolve them by stable
/// sort order, which falls back to each fact's position in the input.
pub fn rank(facts: &mut [FactRow]) {
    let mut groups: HashMap<GroupKey, Vec<usize>> = HashMap::new();
    for (index, fact) in facts.iter().enumerate() {
        groups.entry(group_key(fact)).or_default().push(index);
    }

    for mut indices in groups.into_values() {
        indices.sort_by_key(|&i| {
            (
                Reverse(facts[i].filed_date.clone()),
                form_priority(&facts[i].form),
            )
        });
        for (rank, &index) in indices.iter().enumerate() {
            let revision_rank = (rank + 1) as i32;
            facts[index].revision_rank = revision_rank;
            facts[index].is_preferred = revision_rank == 1;
        }
    }
}
