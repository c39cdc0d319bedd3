//! # Row Layout
//!
//! Decides how the flat card sequence breaks into rows for the static grid
//! display.
//!
//! ## Algorithm
//! 1. Split the indices into measures at barline cards. Barlines are
//!    boundaries, not members, so they never appear in a packed row.
//!    Empty measures (consecutive barlines) are dropped.
//! 2. When the song uses barlines, the `start` card is pulled out into a
//!    leading measure of its own so it always sits alone on the first row.
//! 3. Estimate how many cards fit on one row from the average card
//!    footprint and the container width.
//! 4. Pack whole measures into rows. A measure longer than a row is split
//!    into full-width chunks; otherwise a measure never straddles rows.
//!
//! With one measure at most, after the start card is pulled out, there is
//! no structure to keep: every index, barlines included, is wrapped every
//! `target_per_row` cards.
//!
//! ## Example
//! ```rust
//! use beatcards::{layout_rows, parse};
//!
//! let notes = parse("C D | E F | G A");
//! let rows = layout_rows(&notes, 60.0, 1000.0);
//! assert_eq!(rows, vec![vec![0], vec![1, 2, 4, 5, 7, 8]]);
//! ```

use crate::ast::*;

/// Horizontal spacing between cards.
pub const DEFAULT_GAP: f64 = 15.0;

/// Smallest border an active card is drawn with.
pub const MIN_ACTIVE_BORDER: f64 = 6.0;

/// Border width of the highlighted card for a given unit size
pub fn active_border_width(unit_size: f64) -> f64 {
    (unit_size / 10.0).round().max(MIN_ACTIVE_BORDER)
}

/// Total horizontal space a card takes: content plus both borders.
///
/// Zero, negative and NaN content widths count as zero so every card has a
/// positive footprint of at least two borders.
pub fn footprint(note: &Note, unit_size: f64) -> f64 {
    let content = (note.duration * unit_size).max(0.0);
    content + 2.0 * active_border_width(unit_size)
}

/// How many cards of average footprint fit in `container_width`.
///
/// Always at least 1, including for non-positive or non-finite widths.
pub fn target_per_row(notes: &[Note], unit_size: f64, container_width: f64, gap: f64) -> usize {
    let average = if notes.is_empty() {
        unit_size + 2.0 * active_border_width(unit_size)
    } else {
        notes.iter().map(|n| footprint(n, unit_size)).sum::<f64>() / notes.len() as f64
    };

    let fit = ((container_width + gap) / (average + gap)).floor();
    if fit >= 1.0 {
        // saturating cast; an infinite fit becomes usize::MAX
        fit as usize
    } else {
        1
    }
}

/// Split note indices into measures at barline cards.
///
/// Barline indices are not part of any measure. Empty measures are
/// skipped. A sequence without barlines is one measure.
pub fn segment_measures(notes: &[Note]) -> Vec<Vec<usize>> {
    let mut measures = Vec::new();
    let mut current = Vec::new();

    for (i, note) in notes.iter().enumerate() {
        if note.is_barline() {
            if !current.is_empty() {
                measures.push(std::mem::take(&mut current));
            }
        } else {
            current.push(i);
        }
    }
    if !current.is_empty() {
        measures.push(current);
    }

    measures
}

/// Move the first start card into a measure of its own at the front.
/// Returns the index of the new measure.
fn isolate_start(notes: &[Note], measures: &mut Vec<Vec<usize>>) -> Option<usize> {
    let start_idx = notes.iter().position(Note::is_start)?;
    let holder = measures.iter().position(|m| m.contains(&start_idx))?;

    measures[holder].retain(|&i| i != start_idx);
    if measures[holder].is_empty() {
        measures.remove(holder);
    }
    measures.insert(0, vec![start_idx]);
    Some(0)
}

fn chunk(indices: &[usize], size: usize) -> Vec<Row> {
    indices.chunks(size.max(1)).map(<[usize]>::to_vec).collect()
}

/// Group note indices into display rows using the default gap.
pub fn layout_rows(notes: &[Note], unit_size: f64, container_width: f64) -> Vec<Row> {
    layout_rows_with_gap(notes, unit_size, container_width, DEFAULT_GAP)
}

/// Group note indices into display rows.
///
/// Never panics; empty input gives no rows, non-empty input at least one.
pub fn layout_rows_with_gap(
    notes: &[Note],
    unit_size: f64,
    container_width: f64,
    gap: f64,
) -> Vec<Row> {
    if notes.is_empty() {
        return Vec::new();
    }

    let target = target_per_row(notes, unit_size, container_width, gap);
    let mut measures = segment_measures(notes);

    let has_barline = notes.iter().any(Note::is_barline);
    let start_measure = if has_barline {
        isolate_start(notes, &mut measures)
    } else {
        None
    };

    let rows = if measures.len() <= 1 {
        // no measure structure to keep: plain wrapping of every index
        let all: Vec<usize> = (0..notes.len()).collect();
        chunk(&all, target)
    } else {
        pack_measures(&measures, start_measure, target)
    };

    log::debug!(
        "laid out {} cards in {} rows ({} measures, {} per row)",
        notes.len(),
        rows.len(),
        measures.len(),
        target
    );
    rows
}

fn pack_measures(measures: &[Vec<usize>], start_measure: Option<usize>, target: usize) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::new();
    let mut current: Row = Vec::new();

    for (mi, measure) in measures.iter().enumerate() {
        if Some(mi) == start_measure {
            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
            }
            rows.push(measure.clone());
            continue;
        }

        if measure.len() > target {
            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
            }
            rows.extend(chunk(measure, target));
        } else if current.is_empty() || current.len() + measure.len() <= target {
            current.extend_from_slice(measure);
        } else {
            rows.push(std::mem::take(&mut current));
            current.extend_from_slice(measure);
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn notes_of(pitches: &[&str]) -> Vec<Note> {
        pitches
            .iter()
            .map(|&p| if p == BARLINE { Note::barline() } else { Note::new(p, 1.0) })
            .collect()
    }

    /// Container width that fits exactly `n` cards of duration 1.
    fn width_for(n: usize, unit: f64) -> f64 {
        let fp = unit + 2.0 * active_border_width(unit);
        n as f64 * (fp + DEFAULT_GAP) - DEFAULT_GAP
    }

    #[test]
    fn test_border_width() {
        assert_eq!(active_border_width(60.0), 6.0);
        assert_eq!(active_border_width(100.0), 10.0);
        assert_eq!(active_border_width(85.0), 9.0);
        assert_eq!(active_border_width(0.0), 6.0);
        assert_eq!(active_border_width(-50.0), 6.0);
    }

    #[test]
    fn test_footprint() {
        assert_eq!(footprint(&Note::new("C4", 1.0), 60.0), 72.0);
        assert_eq!(footprint(&Note::new("C4", 0.5), 100.0), 70.0);
        assert_eq!(footprint(&Note::barline(), 60.0), 12.0);
        assert_eq!(footprint(&Note::new("C4", -2.0), 60.0), 12.0);
        assert_eq!(footprint(&Note::new("C4", f64::NAN), 60.0), 12.0);
    }

    #[test]
    fn test_target_per_row() {
        let notes = notes_of(&["C4", "D4", "E4"]);
        // footprint 72, gap 15: (width + 15) / 87
        assert_eq!(target_per_row(&notes, 60.0, 420.0, DEFAULT_GAP), 5);
        assert_eq!(target_per_row(&notes, 60.0, width_for(3, 60.0), DEFAULT_GAP), 3);
        assert_eq!(target_per_row(&notes, 60.0, 10.0, DEFAULT_GAP), 1);
        assert_eq!(target_per_row(&[], 60.0, 420.0, DEFAULT_GAP), 5);
    }

    #[test]
    fn test_degenerate_sizes() {
        let notes = notes_of(&["C4", "D4", "E4"]);
        assert_eq!(target_per_row(&notes, 60.0, 0.0, DEFAULT_GAP), 1);
        assert_eq!(target_per_row(&notes, 60.0, -500.0, DEFAULT_GAP), 1);
        assert_eq!(target_per_row(&notes, 0.0, 0.0, DEFAULT_GAP), 1);
        assert_eq!(target_per_row(&notes, -10.0, -10.0, DEFAULT_GAP), 1);
        assert_eq!(target_per_row(&notes, 60.0, f64::NAN, DEFAULT_GAP), 1);

        let rows = layout_rows(&notes, 0.0, 0.0);
        assert_eq!(rows, vec![vec![0], vec![1], vec![2]]);
        let rows = layout_rows(&notes, -5.0, -5.0);
        assert_eq!(rows, vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_empty() {
        assert!(layout_rows(&[], 60.0, 800.0).is_empty());
        assert!(layout_rows(&[], 0.0, 0.0).is_empty());
    }

    #[test]
    fn test_segment_measures() {
        let notes = notes_of(&["start", "C4", "|", "D4", "E4", "|", "|", "F4"]);
        assert_eq!(
            segment_measures(&notes),
            vec![vec![0, 1], vec![3, 4], vec![7]]
        );
        let plain = notes_of(&["C4", "D4"]);
        assert_eq!(segment_measures(&plain), vec![vec![0, 1]]);
    }

    #[test]
    fn test_no_barlines_wraps_in_fixed_chunks() {
        let notes = parse("C D E F G A B C D E");
        let rows = layout_rows(&notes, 60.0, width_for(4, 60.0));
        assert_eq!(
            rows,
            vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7], vec![8, 9, 10]]
        );
    }

    #[test]
    fn test_start_alone_with_barlines() {
        let notes = parse("C D | E F");
        let rows = layout_rows(&notes, 60.0, width_for(10, 60.0));
        assert_eq!(rows, vec![vec![0], vec![1, 2, 4, 5]]);
    }

    #[test]
    fn test_measures_not_split() {
        // measures of 3, 3, 2 with room for 4 per row
        let notes = parse("C D E | F G A | B C");
        let rows = layout_rows(&notes, 60.0, width_for(4, 60.0));
        assert_eq!(rows, vec![vec![0], vec![1, 2, 3], vec![5, 6, 7], vec![9, 10]]);
    }

    #[test]
    fn test_small_measures_share_rows() {
        let notes = parse("C D | E F | G A | B C");
        let rows = layout_rows(&notes, 60.0, width_for(4, 60.0));
        assert_eq!(
            rows,
            vec![vec![0], vec![1, 2, 4, 5], vec![7, 8, 10, 11]]
        );
    }

    #[test]
    fn test_oversized_measure_split_into_whole_rows() {
        let notes = parse("C D | E F G A B C D | E");
        let rows = layout_rows(&notes, 60.0, width_for(3, 60.0));
        assert_eq!(
            rows,
            vec![
                vec![0],
                vec![1, 2],
                vec![4, 5, 6],
                vec![7, 8, 9],
                vec![10],
                vec![12],
            ]
        );
    }

    #[test]
    fn test_consecutive_barlines_skipped() {
        let notes = parse("C | | | D");
        let rows = layout_rows(&notes, 60.0, width_for(10, 60.0));
        assert_eq!(rows, vec![vec![0], vec![1, 5]]);
    }

    #[test]
    fn test_single_measure_after_barline_chunked() {
        // no start card: one real measure, so plain wrapping applies
        let notes = notes_of(&["C4", "D4", "E4", "|"]);
        let rows = layout_rows(&notes, 60.0, width_for(2, 60.0));
        assert_eq!(rows, vec![vec![0, 1], vec![2, 3]]);

        let notes = notes_of(&["C4", "D4", "|"]);
        assert_eq!(layout_rows(&notes, 60.0, 1000.0), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_start_and_barline_only() {
        let notes = parse("start |");
        assert_eq!(layout_rows(&notes, 60.0, 1000.0), vec![vec![0, 1]]);
    }

    #[test]
    fn test_only_barlines() {
        let notes = notes_of(&["|", "|"]);
        let rows = layout_rows(&notes, 60.0, 800.0);
        assert_eq!(rows, vec![vec![0, 1]]);
    }

    #[test]
    fn test_start_without_barlines_not_isolated() {
        let notes = parse("C D");
        let rows = layout_rows(&notes, 60.0, 800.0);
        assert_eq!(rows, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_late_start_moves_to_front() {
        let notes = notes_of(&["C4", "|", "start", "D4"]);
        let rows = layout_rows(&notes, 60.0, width_for(10, 60.0));
        assert_eq!(rows, vec![vec![2], vec![0, 3]]);
    }

    #[test]
    fn test_start_in_middle_of_measure() {
        let notes = notes_of(&["C4", "start", "D4", "|", "E4"]);
        let rows = layout_rows(&notes, 60.0, width_for(10, 60.0));
        assert_eq!(rows, vec![vec![1], vec![0, 2, 4]]);
    }

    #[test]
    fn test_idempotent() {
        let notes = parse("C D E | F G | A B C D E F G | pause");
        let a = layout_rows(&notes, 80.0, 500.0);
        let b = layout_rows(&notes, 80.0, 500.0);
        assert_eq!(a, b);
    }
}
