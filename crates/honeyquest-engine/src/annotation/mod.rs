/*!
 * # Line Annotation Syntax (LAS)
 *
 * Queries describe subsets of their lines with a compact range syntax, e.g.
 * `l4` or `l2-5,l12-14`. Each comma-separated token carries a one-character
 * prefix (reserved, always stripped), a `from` line number, an optional
 * `-to` upper bound, and an optional `:annotation` suffix that is ignored
 * here. Line numbers are 1-based and ranges are inclusive on both ends.
 *
 * Parsing is total: malformed tokens never raise. A token whose numbers do
 * not parse yields a range without usable bounds, and such a range simply
 * matches no line. A bad LAS string therefore degrades to "nothing
 * highlighted / nothing restricted" instead of breaking the quiz.
 *
 * Callers that treat an *absent* LAS string differently from an empty one
 * must check before parsing: parsing `""` yields one degenerate range, not
 * an empty set.
 */

mod bag;

pub use bag::{
    ANNOTATION_ALLOW_LINES, ANNOTATION_BUTTON_TEXT, ANNOTATION_DECEPTIVE_LINES,
    ANNOTATION_MAX_HACKS, ANNOTATION_MAX_TRAPS, ANNOTATION_RISKY_LINES, ANNOTATION_SELECT,
    ANNOTATION_SELECT_HACKS, ANNOTATION_SELECT_TRAPS, ANNOTATION_TUTORIAL_END, AnnotationBag,
};

use std::collections::BTreeSet;

/// One inclusive range of 1-based line numbers.
///
/// Bounds are `None` when their token did not parse as a number. A range
/// with a missing bound is degenerate and contains no line at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub from: Option<u32>,
    pub to: Option<u32>,
}

impl LineRange {
    /// True iff `line` falls within `[from, to]`, inclusive on both ends.
    pub fn contains(&self, line: u32) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= line && line <= to,
            _ => false,
        }
    }

    /// A range that matches no line, produced by malformed tokens.
    pub fn is_degenerate(&self) -> bool {
        self.from.is_none() || self.to.is_none()
    }
}

/// An ordered sequence of [`LineRange`]s parsed from one LAS string.
///
/// Ranges may overlap and need not be sorted; membership tests are correct
/// regardless of input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Vec<LineRange>,
}

impl RangeSet {
    /// Parse a LAS string into its ranges.
    ///
    /// Per token: the first character is stripped (reserved prefix), anything
    /// from the first `:` on is dropped, and the remainder is split on `-`
    /// into `from` and `to`. `to` falls back to `from` when it is absent,
    /// unparseable, or zero.
    pub fn parse(syntax: &str) -> Self {
        let ranges = syntax.split(',').map(parse_token).collect();
        Self { ranges }
    }

    /// True iff `line` is contained in any range of the set.
    pub fn contains(&self, line: u32) -> bool {
        self.ranges.iter().any(|r| r.contains(line))
    }

    /// Expand the set to the exhaustive line numbers it covers.
    /// Degenerate ranges contribute nothing.
    pub fn expand(&self) -> BTreeSet<u32> {
        let mut lines = BTreeSet::new();
        for range in &self.ranges {
            if let (Some(from), Some(to)) = (range.from, range.to) {
                lines.extend(from..=to);
            }
        }
        lines
    }

    pub fn ranges(&self) -> &[LineRange] {
        &self.ranges
    }
}

fn parse_token(token: &str) -> LineRange {
    // drop the prefix character, then the `:annotation` suffix
    let mut chars = token.chars();
    chars.next();
    let body = chars.as_str();
    let body = body.split(':').next().unwrap_or("");

    let mut parts = body.split('-');
    let from = parts.next().and_then(|s| s.parse::<u32>().ok());
    // a zero or unparseable upper bound falls back to `from`
    let to = parts
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .filter(|&n| n != 0)
        .or(from);

    LineRange { from, to }
}

/// From a set of line numbers, e.g. `{1,2,3,5,7,8,9}`, gives a readable
/// range, e.g. `1-3, 5, 7-9`.
pub fn readable_range(lines: &BTreeSet<u32>) -> String {
    let mut ordered = lines.iter().copied();
    let Some(first) = ordered.next() else {
        return String::new();
    };

    let mut ranges: Vec<String> = Vec::new();
    let (mut start, mut last) = (first, first);
    for i in ordered {
        if last + 1 == i {
            last = i;
        } else {
            ranges.push(render_range(start, last));
            start = i;
            last = i;
        }
    }

    // close the last open range
    ranges.push(render_range(start, last));

    ranges.join(", ")
}

/// Like [`readable_range`], prefixed with a singular or plural term, e.g.
/// `lines 1-3, 5, 7-9` or `line 4`.
pub fn prefixed_readable_range(lines: &BTreeSet<u32>, prefix: &str) -> String {
    let range = readable_range(lines);
    if range.is_empty() {
        return String::new();
    }
    let term = if lines.len() == 1 {
        prefix.to_string()
    } else {
        format!("{prefix}s")
    };
    format!("{term} {range}")
}

fn render_range(start: u32, last: u32) -> String {
    if start == last {
        format!("{start}")
    } else {
        format!("{start}-{last}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_single_line() {
        let set = RangeSet::parse("l4");
        assert_eq!(
            set.ranges(),
            &[LineRange {
                from: Some(4),
                to: Some(4)
            }]
        );
        assert!(set.contains(4));
        assert!(!set.contains(3));
        assert!(!set.contains(5));
    }

    #[test]
    fn test_parse_multiple_ranges() {
        let set = RangeSet::parse("l1-3,l5,l7-9");
        for line in [1, 2, 3, 5, 7, 8, 9] {
            assert!(set.contains(line), "line {line} should be contained");
        }
        for line in [4, 6, 10] {
            assert!(!set.contains(line), "line {line} should not be contained");
        }
    }

    #[test]
    fn test_parse_strips_annotation_suffix() {
        let set = RangeSet::parse("l2-5:credentials,l8:token");
        assert!(set.contains(2));
        assert!(set.contains(5));
        assert!(set.contains(8));
        assert!(!set.contains(6));
    }

    #[test]
    fn test_parse_unordered_overlapping_ranges() {
        let set = RangeSet::parse("l7-9,l1-5,l4-8");
        for line in 1..=9 {
            assert!(set.contains(line));
        }
        assert!(!set.contains(10));
    }

    #[rstest]
    #[case("l5-")] // empty upper bound
    #[case("l5-0")] // zero upper bound
    #[case("l5-x")] // unparseable upper bound
    fn test_parse_falsy_upper_bound_falls_back_to_from(#[case] syntax: &str) {
        let set = RangeSet::parse(syntax);
        assert_eq!(
            set.ranges(),
            &[LineRange {
                from: Some(5),
                to: Some(5)
            }]
        );
    }

    #[test]
    fn test_parse_malformed_token_is_degenerate() {
        let set = RangeSet::parse("lx-3");
        assert_eq!(set.ranges().len(), 1);
        assert!(set.ranges()[0].is_degenerate());
        for line in 0..16 {
            assert!(!set.contains(line));
        }
    }

    #[test]
    fn test_parse_empty_string_yields_one_degenerate_range() {
        // callers must check for absent LAS strings themselves;
        // the parser itself maps "" to a single never-matching range
        let set = RangeSet::parse("");
        assert_eq!(set.ranges().len(), 1);
        assert!(set.ranges()[0].is_degenerate());
        assert!(!set.contains(1));
    }

    #[test]
    fn test_parse_mixed_good_and_bad_tokens() {
        // the bad token disables itself, the good ones keep working
        let set = RangeSet::parse("l1-2,garbage,l9");
        assert!(set.contains(1));
        assert!(set.contains(2));
        assert!(set.contains(9));
        assert!(!set.contains(3));
    }

    #[test]
    fn test_contains_is_inclusive_on_both_ends() {
        let set = RangeSet::parse("l3-6");
        assert!(!set.contains(2));
        assert!(set.contains(3));
        assert!(set.contains(6));
        assert!(!set.contains(7));
    }

    #[test]
    fn test_expand() {
        let set = RangeSet::parse("l1-3,l5,bad");
        let lines: Vec<u32> = set.expand().into_iter().collect();
        assert_eq!(lines, vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_expand_round_trip() {
        // every literally enumerated line is contained, everything else is not
        let set = RangeSet::parse("l1-3,l5,l7-9");
        let expanded = set.expand();
        for line in 1..=12 {
            assert_eq!(set.contains(line), expanded.contains(&line));
        }
    }

    #[test]
    fn test_readable_range() {
        let lines: BTreeSet<u32> = [1, 2, 3, 5, 7, 8, 9].into_iter().collect();
        assert_eq!(readable_range(&lines), "1-3, 5, 7-9");
    }

    #[test]
    fn test_readable_range_empty() {
        assert_eq!(readable_range(&BTreeSet::new()), "");
    }

    #[test]
    fn test_readable_range_single_line() {
        let lines: BTreeSet<u32> = [4].into_iter().collect();
        assert_eq!(readable_range(&lines), "4");
    }

    #[test]
    fn test_prefixed_readable_range_plural() {
        let lines: BTreeSet<u32> = [1, 2, 5].into_iter().collect();
        assert_eq!(prefixed_readable_range(&lines, "line"), "lines 1-2, 5");
    }

    #[test]
    fn test_prefixed_readable_range_singular() {
        let lines: BTreeSet<u32> = [7].into_iter().collect();
        assert_eq!(prefixed_readable_range(&lines, "line"), "line 7");
    }

    #[test]
    fn test_prefixed_readable_range_empty() {
        assert_eq!(prefixed_readable_range(&BTreeSet::new(), "line"), "");
    }
}
