//! Undo/redo history of canvas operations.
//!
//! Every stroke and every bucket fill lands here as one [`CanvasOp`]. The
//! history is bounded: once it holds more than `max_len` operations the
//! oldest ones are dropped and can no longer be undone.

use std::collections::VecDeque;

use log::{debug, warn};
use thiserror::Error;

use crate::fill::PixelBuffer;
use crate::paint::PaintOptions;
use crate::path::Path;

/// Number of operations kept before the oldest is evicted.
pub const DEFAULT_MAX_HISTORY: usize = 1000;

/// One atomic drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasOp {
    /// A stroked path, e.g. a brush stroke or a vector bucket fill
    Path { path: Path, paint: PaintOptions },
    /// A full canvas snapshot, e.g. the result of a raster bucket fill
    Bitmap(PixelBuffer),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}

/// Operation history with undo, redo and a restorable clear.
#[derive(Clone, Debug)]
pub struct History {
    ops: VecDeque<CanvasOp>,
    undone: Vec<CanvasOp>,
    /// Operations removed by the last `clear`, restored by an undo on an empty history
    cleared: Vec<CanvasOp>,
    max_len: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_HISTORY)
    }

    /// Create a history holding at most `max_len` operations (at least one).
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            ops: VecDeque::new(),
            undone: Vec::new(),
            cleared: Vec::new(),
            max_len: max_len.max(1),
        }
    }

    /// Record a new user operation. Anything undone so far becomes unreachable.
    pub fn push(&mut self, op: CanvasOp) {
        self.undone.clear();
        self.cleared.clear();
        self.append(op);
    }

    fn append(&mut self, op: CanvasOp) {
        self.ops.push_back(op);

        let overflow = self.ops.len().saturating_sub(self.max_len);
        if overflow > 0 {
            warn!("history full, dropping {} oldest operation(s)", overflow);
            self.ops.drain(..overflow);
        }
    }

    /// Undo the newest operation.
    ///
    /// On an empty history this restores whatever the last [`clear`](Self::clear) removed.
    pub fn undo(&mut self) -> Result<(), HistoryError> {
        if self.ops.is_empty() && !self.cleared.is_empty() {
            debug!("restoring {} cleared operation(s)", self.cleared.len());
            self.ops = std::mem::take(&mut self.cleared).into();
            return Ok(());
        }

        let op = self.ops.pop_back().ok_or(HistoryError::NothingToUndo)?;
        self.undone.push(op);
        Ok(())
    }

    /// Redo the most recently undone operation.
    pub fn redo(&mut self) -> Result<(), HistoryError> {
        let op = self.undone.pop().ok_or(HistoryError::NothingToRedo)?;
        self.append(op);
        Ok(())
    }

    /// Remove every operation, keeping them for a later undo.
    pub fn clear(&mut self) {
        self.cleared = self.ops.drain(..).collect();
    }

    pub fn can_undo(&self) -> bool {
        !self.ops.is_empty() || !self.cleared.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Operations in drawing order, oldest first.
    pub fn ops(&self) -> impl Iterator<Item = &CanvasOp> {
        self.ops.iter()
    }

    /// The newest bitmap snapshot, which everything after it is drawn on top of.
    pub fn latest_bitmap(&self) -> Option<&PixelBuffer> {
        self.ops.iter().rev().find_map(|op| match op {
            CanvasOp::Bitmap(buffer) => Some(buffer),
            CanvasOp::Path { .. } => None,
        })
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }
}
