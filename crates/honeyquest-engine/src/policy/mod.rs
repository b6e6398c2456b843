/*!
 * # Annotation Policy
 *
 * Combines the parsed line annotations of a query with its per-question
 * configuration to decide, for every line and mark kind, whether a click is
 * currently permitted — and what a line should look like. The policy is the
 * only place that knows hack and trap marks are mutually exclusive on a
 * line; it enforces that by issuing two store operations per click.
 */

use crate::annotation::{
    ANNOTATION_ALLOW_LINES, ANNOTATION_BUTTON_TEXT, ANNOTATION_DECEPTIVE_LINES,
    ANNOTATION_MAX_HACKS, ANNOTATION_MAX_TRAPS, ANNOTATION_RISKY_LINES, ANNOTATION_SELECT,
    ANNOTATION_SELECT_HACKS, ANNOTATION_SELECT_TRAPS, ANNOTATION_TUTORIAL_END, AnnotationBag,
    RangeSet,
};
use crate::selection::{Mark, MarkKind, Selection, ToggleOptions};

/// Per-query interaction rules, assembled from the query's annotation bag.
///
/// Absent annotations leave selection fully enabled and uncapped; an absent
/// allow-lines restriction means every line is selectable.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRules {
    /// Master switch for line selection on this query
    pub selectable: bool,
    pub hacks_enabled: bool,
    pub traps_enabled: bool,
    pub max_hacks: Option<u32>,
    pub max_traps: Option<u32>,
    /// Lines that may be selected; `None` allows all lines
    pub allowed_lines: Option<RangeSet>,
    /// Ground-truth risky lines, only shown when labels are revealed
    pub risky_lines: Option<RangeSet>,
    /// Ground-truth deceptive lines, only shown when labels are revealed
    pub deceptive_lines: Option<RangeSet>,
    /// Reveal the ground-truth highlights (admin inspection view)
    pub reveal_labels: bool,
    /// Override for the continue button text
    pub button_text: Option<String>,
    /// This query is the last one of the tutorial
    pub tutorial_end: bool,
}

impl Default for QueryRules {
    fn default() -> Self {
        Self {
            selectable: true,
            hacks_enabled: true,
            traps_enabled: true,
            max_hacks: None,
            max_traps: None,
            allowed_lines: None,
            risky_lines: None,
            deceptive_lines: None,
            reveal_labels: false,
            button_text: None,
            tutorial_end: false,
        }
    }
}

/// Render state of one line, derived from the rules, the highlight
/// annotations, and the current selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineView {
    /// A hack click on this line is currently permitted
    pub hack_enabled: bool,
    /// A trap click on this line is currently permitted
    pub trap_enabled: bool,
    /// 1-based sequence number if the line carries a hack mark
    pub hack_ordinal: Option<usize>,
    /// 1-based sequence number if the line carries a trap mark
    pub trap_ordinal: Option<usize>,
    /// Show the line in hack styling (marked, or revealed as risky)
    pub highlight_hack: bool,
    /// Show the line in trap styling (marked, or revealed as deceptive)
    pub highlight_trap: bool,
}

impl QueryRules {
    /// Read the interaction rules from a query's annotation bag.
    pub fn from_annotations(annotations: &AnnotationBag) -> Self {
        Self {
            selectable: annotations.get_bool(ANNOTATION_SELECT, true),
            hacks_enabled: annotations.get_bool(ANNOTATION_SELECT_HACKS, true),
            traps_enabled: annotations.get_bool(ANNOTATION_SELECT_TRAPS, true),
            max_hacks: annotations.get_u32(ANNOTATION_MAX_HACKS),
            max_traps: annotations.get_u32(ANNOTATION_MAX_TRAPS),
            allowed_lines: parse_las_annotation(annotations, ANNOTATION_ALLOW_LINES),
            risky_lines: parse_las_annotation(annotations, ANNOTATION_RISKY_LINES),
            deceptive_lines: parse_las_annotation(annotations, ANNOTATION_DECEPTIVE_LINES),
            reveal_labels: false,
            button_text: annotations.get_str(ANNOTATION_BUTTON_TEXT),
            tutorial_end: annotations.get_bool(ANNOTATION_TUTORIAL_END, false),
        }
    }

    /// A line is selectable iff selection is enabled for the query and the
    /// line is within the allow-lines restriction (or none is given).
    pub fn line_selectable(&self, line: u32) -> bool {
        if !self.selectable {
            return false;
        }
        match &self.allowed_lines {
            Some(allowed) => allowed.contains(line),
            None => true,
        }
    }

    /// Whether clicking `kind` on `line` is currently permitted.
    ///
    /// At the cap, a line that already carries the mark stays clickable so
    /// the user can still deselect it; only *adding* past the cap is
    /// rejected.
    pub fn can_mark(&self, line: u32, kind: MarkKind, selection: &Selection) -> bool {
        let kind_enabled = match kind {
            MarkKind::Hack => self.hacks_enabled,
            MarkKind::Trap => self.traps_enabled,
        };
        if !kind_enabled || !self.line_selectable(line) {
            return false;
        }

        let below_max = match self.max_of(kind) {
            Some(max) => (selection.count_of(kind) as u32) < max,
            None => true,
        };
        below_max || selection.contains(Mark::new(line, kind))
    }

    /// Apply a click of `kind` on `line`: toggles the chosen mark and
    /// force-clears the opposite mark on the same line. Returns false (and
    /// leaves the store untouched) when the click is not permitted.
    pub fn click(&self, line: u32, kind: MarkKind, selection: &mut Selection) -> bool {
        if !self.can_mark(line, kind, selection) {
            return false;
        }

        selection.toggle(Mark::new(line, kind));
        selection.toggle_with(Mark::new(line, kind.other()), ToggleOptions {
            only_unset: true,
            ..Default::default()
        });
        true
    }

    /// Compute the render state of one line. Highlights come from the
    /// user's own marks, plus the ground-truth annotations when labels are
    /// revealed; revealed highlights never touch the selection itself.
    pub fn line_view(&self, line: u32, selection: &Selection) -> LineView {
        let hack_ordinal = selection.ordinal_of(Mark::hack(line));
        let trap_ordinal = selection.ordinal_of(Mark::trap(line));

        let revealed_risky = self.reveal_labels
            && self
                .risky_lines
                .as_ref()
                .is_some_and(|las| las.contains(line));
        let revealed_deceptive = self.reveal_labels
            && self
                .deceptive_lines
                .as_ref()
                .is_some_and(|las| las.contains(line));

        LineView {
            hack_enabled: self.can_mark(line, MarkKind::Hack, selection),
            trap_enabled: self.can_mark(line, MarkKind::Trap, selection),
            hack_ordinal,
            trap_ordinal,
            highlight_hack: hack_ordinal.is_some() || revealed_risky,
            highlight_trap: trap_ordinal.is_some() || revealed_deceptive,
        }
    }

    fn max_of(&self, kind: MarkKind) -> Option<u32> {
        match kind {
            MarkKind::Hack => self.max_hacks,
            MarkKind::Trap => self.max_traps,
        }
    }
}

fn parse_las_annotation(annotations: &AnnotationBag, key: &str) -> Option<RangeSet> {
    // an absent or empty LAS string means "no annotation", which is not
    // the same as parsing "" (that would yield a degenerate range)
    annotations
        .get_str(key)
        .filter(|s| !s.is_empty())
        .map(|s| RangeSet::parse(&s))
}
