//! Manual stepping through a card sequence

use crate::ast::Note;
use crate::controls::Action;

/// Indices shown in dynamic mode: the active card and up to `lookahead`
/// cards after it.
///
/// `active` is clamped to the last card; an empty sequence shows nothing.
pub fn focus_window(len: usize, active: usize, lookahead: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let first = active.min(len - 1);
    let last = first.saturating_add(lookahead).min(len - 1);
    (first..=last).collect()
}

/// Cursor over a card sequence.
///
/// Cards marked as skipped (barlines, when built with [`Stepper::for_notes`])
/// are never active unless every card is skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Stepper {
    active: usize,
    skip: Vec<bool>,
}

impl Stepper {
    /// Stepper that visits every index.
    pub fn new(len: usize) -> Self {
        Self {
            active: 0,
            skip: vec![false; len],
        }
    }

    /// Stepper that passes over barline cards.
    pub fn for_notes(notes: &[Note]) -> Self {
        let mut stepper = Self {
            active: 0,
            skip: notes.iter().map(Note::is_barline).collect(),
        };
        stepper.reset();
        stepper
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.skip.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skip.is_empty()
    }

    fn playable(&self, index: usize) -> bool {
        !self.skip[index]
    }

    fn first_playable(&self) -> usize {
        (0..self.len()).find(|&i| self.playable(i)).unwrap_or(0)
    }

    fn move_to(&mut self, target: Option<usize>) -> bool {
        match target {
            Some(i) if i != self.active => {
                self.active = i;
                true
            }
            _ => false,
        }
    }

    /// Advance to the next playable card. Returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        let target = (self.active + 1..self.len()).find(|&i| self.playable(i));
        self.move_to(target)
    }

    /// Go back to the previous playable card.
    pub fn prev(&mut self) -> bool {
        let target = (0..self.active).rev().find(|&i| self.playable(i));
        self.move_to(target)
    }

    pub fn reset(&mut self) -> bool {
        let first = self.first_playable();
        self.move_to(Some(first))
    }

    /// Jump to `index`, clamped to the sequence. Landing on a skipped card
    /// moves forward to the next playable one, or back if there is none.
    pub fn jump(&mut self, index: usize) -> bool {
        if self.is_empty() {
            return false;
        }
        let index = index.min(self.len() - 1);
        let target = (index..self.len())
            .find(|&i| self.playable(i))
            .or_else(|| (0..index).rev().find(|&i| self.playable(i)))
            .unwrap_or(index);
        self.move_to(Some(target))
    }

    /// True when there is no playable card after the active one.
    pub fn is_finished(&self) -> bool {
        !(self.active + 1..self.len()).any(|i| self.playable(i))
    }

    /// Dynamic-mode window around the active card.
    pub fn window(&self, lookahead: usize) -> Vec<usize> {
        focus_window(self.len(), self.active, lookahead)
    }

    /// Handle a navigation action; other actions are ignored.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Next => self.next(),
            Action::Prev => self.prev(),
            Action::Reset => self.reset(),
            _ => false,
        }
    }
}
