//! Filing-form priority table used by the ranker's tie-break rule (spec §4.4).

/// Lower priority wins a tie on `filed_date`. Forms not in this table get
/// [`DEFAULT_FORM_PRIORITY`].
pub const DEFAULT_FORM_PRIORITY: u8 = 99;

const FORM_PRIORITY: &[(&str, u8)] = &[
    ("10-K", 0),
    ("10-K/A", 1),
    ("20-F", 2),
    ("20-F/A", 3),
    ("10-Q", 4),
    ("10-Q/A", 5),
    ("8-K", 6),
    ("8-K/A", 7),
];

/// Looks up the dedup priority for a filing form. Annual reports beat
/// amendments beat quarterly reports beat current reports; anything
/// unrecognized sorts last.
pub fn form_priority(form: &str) -> u8 {
    FORM_PRIORITY
        .iter()
        .find(|(name, _)| *name == form)
        .map_or(DEFAULT_FORM_PRIORITY, |(_, priority)| *priority)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_10k_above_10q() {
        assert!(form_priority("10-K") < form_priority("10-Q"));
    }

    #[test]
    fn ranks_10k_above_8k() {
        assert!(form_priority("10-K") < form_priority("8-K"));
    }

    #[test]
    fn unknown_form_sorts_last() {
        assert_eq!(form_priority("S-1"), DEFAULT_FORM_PRIORITY);
        assert!(form_priority("8-K/A") < form_priority("S-1"));
    }
}
