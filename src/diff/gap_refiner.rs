//! Decomposes multi-line gaps into single-line parts.

use crate::diff::line_aligner::{DiffPart, align_lines};
use crate::diff::text::split_first_line;
use crate::utils::debug_log;

/// Tuning for the refinement step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Maximum number of gap re-alignments. Once spent, remaining multi-line gaps are
    /// paired line by line without looking for new anchors. `None` is unbounded.
    pub max_refinements: Option<usize>,
}

/// Refines aligned parts until every part covers at most one line per side.
///
/// Pending parts live on an explicit stack, top = next in document order. A
/// multi-line part is re-aligned first so lines that are unique within the gap can
/// anchor it; when that finds no anchor, the first line of each side is paired and
/// the remainders go back on the stack.
pub fn refine_parts<'a>(parts: Vec<DiffPart<'a>>, options: &DiffOptions) -> Vec<DiffPart<'a>> {
    let mut output = Vec::with_capacity(parts.len());
    let mut pending: Vec<DiffPart<'a>> = parts.into_iter().rev().collect();
    let mut refinements = 0usize;
    let mut budget_logged = false;

    while let Some(part) = pending.pop() {
        if !part.is_multiline() {
            output.push(part);
            continue;
        }

        let within_budget = options
            .max_refinements
            .is_none_or(|limit| refinements < limit);
        if within_budget {
            refinements += 1;
            let realigned = align_lines(part.left, part.right);
            if realigned.len() != 1 || realigned[0] != part {
                pending.extend(realigned.into_iter().rev());
                continue;
            }
        } else if !budget_logged {
            debug_log(&format!(
                "refine budget of {} spent, pairing remaining gaps line by line",
                refinements
            ));
            budget_logged = true;
        }

        let (left_head, left_tail) = split_side(part.left);
        let (right_head, right_tail) = split_side(part.right);
        if left_tail.is_some() || right_tail.is_some() {
            pending.push(DiffPart::new(left_tail, right_tail));
        }
        pending.push(DiffPart::new(left_head, right_head));
    }

    output
}

fn split_side(block: Option<&str>) -> (Option<&str>, Option<&str>) {
    match block {
        Some(block) => {
            let (head, tail) = split_first_line(block);
            (Some(head), tail)
        }
        None => (None, None),
    }
}
