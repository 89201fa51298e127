//! Fixed, ordered rows of controls and the directional neighbor scan.

use crate::control::{Control, ControlId};

/// Scan direction along a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// Toward lower indices (the Left key).
    Backward,
    /// Toward higher indices (the Right key).
    Forward,
}

/// A fixed, ordered sequence of controls.
///
/// Order defines Left/Right adjacency. Membership is set once at bar
/// construction and never changes; dynamically injected buttons live
/// outside every row.
#[derive(Debug, Clone, Default)]
pub struct Row {
    controls: Vec<Control>,
}

impl Row {
    /// Create a row from an ordered sequence of controls.
    pub fn new(controls: Vec<Control>) -> Self {
        Self { controls }
    }

    /// The controls in layout order.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Number of controls in the row.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether the row has no controls at all.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Whether a control with the given id belongs to this row.
    pub fn contains(&self, id: &ControlId) -> bool {
        self.controls.iter().any(|c| c.id() == id)
    }

    /// Look up a control by id.
    pub fn get(&self, id: &ControlId) -> Option<&Control> {
        self.controls.iter().find(|c| c.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: &ControlId) -> Option<&mut Control> {
        self.controls.iter_mut().find(|c| c.id() == id)
    }

    /// Find the nearest eligible control in the given direction.
    ///
    /// Locates `from` by identity, then steps one index at a time,
    /// testing eligibility at each stop, until an eligible control is
    /// found or the scan runs past the end of the row. No wraparound.
    ///
    /// Returns `None` when `from` is not a member of this row, when the
    /// scan reaches the boundary, or when no control in that direction
    /// is eligible. None of these are errors; the caller treats them as
    /// "stay put".
    pub fn next_eligible(&self, from: &ControlId, scan: Scan) -> Option<&Control> {
        let start = self.controls.iter().position(|c| c.id() == from)?;
        let step: isize = match scan {
            Scan::Backward => -1,
            Scan::Forward => 1,
        };

        let mut i = start as isize + step;
        while i >= 0 && (i as usize) < self.controls.len() {
            let control = &self.controls[i as usize];
            if control.is_eligible() {
                return Some(control);
            }
            i += step;
        }
        None
    }
}
