/*!
 * # Selection Store
 *
 * Tracks which lines the user has marked while answering one query. The
 * store is a generic toggle container: an ordered sequence of unique
 * [`Mark`]s where toggling an absent mark appends it and toggling a present
 * mark removes it. Insertion order is meaningful — it is the order in which
 * the user would exploit things, it numbers the marks shown next to each
 * line, and it is preserved verbatim in the submitted answer.
 *
 * The store itself knows nothing about caps or hack/trap exclusivity;
 * those rules live in [`crate::policy`], which drives the store with plain
 * toggles and one-directional `only_unset` toggles.
 */

use serde::{Deserialize, Serialize};

/// The kind of a line mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkKind {
    /// The user believes this line is exploitable
    Hack,
    /// The user believes this line is a decoy to avoid
    Trap,
}

impl MarkKind {
    /// The opposite kind, used to clear the competing mark on a line.
    pub fn other(self) -> Self {
        match self {
            MarkKind::Hack => MarkKind::Trap,
            MarkKind::Trap => MarkKind::Hack,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MarkKind::Hack => "hack",
            MarkKind::Trap => "trap",
        }
    }
}

/// One mark on one line. Plain value type: two marks are equal iff both
/// the line and the kind match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mark {
    pub line: u32,
    pub kind: MarkKind,
}

impl Mark {
    pub fn new(line: u32, kind: MarkKind) -> Self {
        Self { line, kind }
    }

    pub fn hack(line: u32) -> Self {
        Self::new(line, MarkKind::Hack)
    }

    pub fn trap(line: u32) -> Self {
        Self::new(line, MarkKind::Trap)
    }
}

/// Options for [`Selection::toggle_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleOptions {
    /// Never remove: a present mark stays put.
    pub only_set: bool,
    /// Never insert: an absent mark stays absent. Used to force-clear the
    /// opposite kind on a line without ever selecting it.
    pub only_unset: bool,
}

/// An ordered, de-duplicated collection of marks with toggle semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    marks: Vec<Mark>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain toggle: remove the mark if present, append it otherwise.
    pub fn toggle(&mut self, mark: Mark) {
        self.toggle_with(mark, ToggleOptions::default());
    }

    /// Toggle with one-directional variants. Toggling a mark off and back on
    /// moves it to the end of the sequence.
    pub fn toggle_with(&mut self, mark: Mark, opts: ToggleOptions) {
        match self.marks.iter().position(|m| *m == mark) {
            Some(index) if !opts.only_set => {
                self.marks.remove(index);
            }
            Some(_) => {}
            None if !opts.only_unset => self.marks.push(mark),
            None => {}
        }
    }

    /// Clears all marks. Called whenever the query content changes so that
    /// marks never leak across queries.
    pub fn reset(&mut self) {
        self.marks.clear();
    }

    pub fn contains(&self, mark: Mark) -> bool {
        self.marks.contains(&mark)
    }

    /// Number of marks of the given kind currently present.
    pub fn count_of(&self, kind: MarkKind) -> usize {
        self.marks.iter().filter(|m| m.kind == kind).count()
    }

    /// The 1-based sequence number of a mark among marks of its own kind,
    /// in insertion order. This is the number rendered next to the line.
    pub fn ordinal_of(&self, mark: Mark) -> Option<usize> {
        self.marks
            .iter()
            .filter(|m| m.kind == mark.kind)
            .position(|m| *m == mark)
            .map(|i| i + 1)
    }

    /// All marks in insertion order.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_inserts_and_removes() {
        let mut sel = Selection::new();
        sel.toggle(Mark::hack(3));
        assert!(sel.contains(Mark::hack(3)));

        sel.toggle(Mark::hack(3));
        assert!(sel.is_empty());
    }

    #[test]
    fn test_toggle_pair_is_identity_on_empty_store() {
        let mut sel = Selection::new();
        sel.toggle(Mark::trap(7));
        sel.toggle(Mark::trap(7));
        assert_eq!(sel, Selection::new());
    }

    #[test]
    fn test_only_unset_never_inserts() {
        let mut sel = Selection::new();
        sel.toggle_with(Mark::hack(1), ToggleOptions {
            only_unset: true,
            ..Default::default()
        });
        assert!(sel.is_empty());
    }

    #[test]
    fn test_only_unset_removes_present_mark() {
        let mut sel = Selection::new();
        sel.toggle(Mark::trap(5));
        sel.toggle_with(Mark::trap(5), ToggleOptions {
            only_unset: true,
            ..Default::default()
        });
        assert!(sel.is_empty());
    }

    #[test]
    fn test_only_set_never_removes() {
        let mut sel = Selection::new();
        sel.toggle(Mark::hack(2));
        sel.toggle_with(Mark::hack(2), ToggleOptions {
            only_set: true,
            ..Default::default()
        });
        assert_eq!(sel.marks(), &[Mark::hack(2)]);
    }

    #[test]
    fn test_marks_of_both_kinds_on_same_line_coexist_in_store() {
        // mutual exclusion is a policy rule, not a store rule
        let mut sel = Selection::new();
        sel.toggle(Mark::hack(4));
        sel.toggle(Mark::trap(4));
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut sel = Selection::new();
        sel.toggle(Mark::hack(3));
        sel.toggle(Mark::hack(1));
        sel.toggle(Mark::hack(5));
        assert_eq!(
            sel.marks(),
            &[Mark::hack(3), Mark::hack(1), Mark::hack(5)]
        );
    }

    #[test]
    fn test_ordinals_follow_insertion_order_not_line_order() {
        let mut sel = Selection::new();
        sel.toggle(Mark::hack(3));
        sel.toggle(Mark::hack(1));
        sel.toggle(Mark::hack(5));
        assert_eq!(sel.ordinal_of(Mark::hack(3)), Some(1));
        assert_eq!(sel.ordinal_of(Mark::hack(1)), Some(2));
        assert_eq!(sel.ordinal_of(Mark::hack(5)), Some(3));
    }

    #[test]
    fn test_ordinals_count_per_kind() {
        let mut sel = Selection::new();
        sel.toggle(Mark::hack(1));
        sel.toggle(Mark::trap(2));
        sel.toggle(Mark::hack(3));
        assert_eq!(sel.ordinal_of(Mark::hack(3)), Some(2));
        assert_eq!(sel.ordinal_of(Mark::trap(2)), Some(1));
        assert_eq!(sel.ordinal_of(Mark::trap(3)), None);
    }

    #[test]
    fn test_retoggle_moves_mark_to_end() {
        let mut sel = Selection::new();
        sel.toggle(Mark::hack(1));
        sel.toggle(Mark::hack(2));
        sel.toggle(Mark::hack(1));
        sel.toggle(Mark::hack(1));
        assert_eq!(sel.marks(), &[Mark::hack(2), Mark::hack(1)]);
        assert_eq!(sel.ordinal_of(Mark::hack(2)), Some(1));
        assert_eq!(sel.ordinal_of(Mark::hack(1)), Some(2));
    }

    #[test]
    fn test_count_of() {
        let mut sel = Selection::new();
        sel.toggle(Mark::hack(1));
        sel.toggle(Mark::hack(2));
        sel.toggle(Mark::trap(3));
        assert_eq!(sel.count_of(MarkKind::Hack), 2);
        assert_eq!(sel.count_of(MarkKind::Trap), 1);
    }

    #[test]
    fn test_reset() {
        let mut sel = Selection::new();
        sel.toggle(Mark::hack(1));
        sel.toggle(Mark::trap(2));
        sel.reset();
        assert!(sel.is_empty());
        assert_eq!(sel.count_of(MarkKind::Hack), 0);
    }
}
