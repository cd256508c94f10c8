//! Key-based drag reordering for table rows.
//!
//! Rows are matched by a stable key rather than by position so a gesture that
//! spans several frames keeps pointing at the same records. A gesture is a
//! small state machine: pick up a source, hover a candidate target, then
//! either drop (commit) or cancel (leave the order untouched).

use std::fmt;

use tracing::{debug, info};

use crate::selection::Direction;

/// Rows that expose a stable, unique identity.
pub trait Keyed {
	type Key: Clone + PartialEq + fmt::Debug;

	fn key(&self) -> &Self::Key;
}

/// Outcome of a committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reorder {
	pub from: usize,
	pub to: usize,
}

/// Position of the row identified by `key`.
pub fn position_of<T: Keyed>(rows: &[T], key: &T::Key) -> Option<usize> {
	rows.iter().position(|row| row.key() == key)
}

/// Move the row keyed `source` to the index currently held by `target`.
///
/// Rows in between shift by one; no other row data changes. Returns `None`
/// and leaves `rows` untouched when either key is missing or both name the
/// same row.
pub fn move_by_key<T: Keyed>(rows: &mut [T], source: &T::Key, target: &T::Key) -> Option<Reorder> {
	let from = position_of(rows, source)?;
	let to = position_of(rows, target)?;
	if from == to {
		return None;
	}
	if from < to {
		rows[from..=to].rotate_left(1);
	} else {
		rows[to..=from].rotate_right(1);
	}
	Some(Reorder { from, to })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragState<K> {
	Idle,
	Dragging { source: K, target: Option<K> },
}

/// Tracks a single drag gesture over a keyed table.
#[derive(Debug, Clone)]
pub struct DragController<K> {
	state: DragState<K>,
}

impl<K> Default for DragController<K> {
	fn default() -> Self {
		Self {
			state: DragState::Idle,
		}
	}
}

impl<K> DragController<K>
where
	K: Clone + PartialEq + fmt::Debug,
{
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn state(&self) -> &DragState<K> {
		&self.state
	}

	#[must_use]
	pub fn is_dragging(&self) -> bool {
		matches!(self.state, DragState::Dragging { .. })
	}

	#[must_use]
	pub fn source(&self) -> Option<&K> {
		match &self.state {
			DragState::Dragging { source, .. } => Some(source),
			DragState::Idle => None,
		}
	}

	#[must_use]
	pub fn target(&self) -> Option<&K> {
		match &self.state {
			DragState::Dragging { target, .. } => target.as_ref(),
			DragState::Idle => None,
		}
	}

	/// Start dragging `source`. The source itself is the initial target.
	pub fn pick_up(&mut self, source: K) {
		debug!(?source, "drag started");
		self.state = DragState::Dragging {
			target: Some(source.clone()),
			source,
		};
	}

	/// Point the gesture at `target`, or at nothing when the pointer left
	/// every valid drop slot. Ignored while idle.
	pub fn hover(&mut self, target: Option<K>) {
		if let DragState::Dragging { target: current, .. } = &mut self.state {
			*current = target;
		}
	}

	/// Move the candidate target one row in `direction`, clamped to `rows`.
	/// Returns whether the target changed.
	pub fn step<T>(&mut self, rows: &[T], direction: Direction) -> bool
	where
		T: Keyed<Key = K>,
	{
		let DragState::Dragging { source, target } = &mut self.state else {
			return false;
		};
		let anchor = match target {
			Some(current) => &*current,
			None => &*source,
		};
		let Some(position) = position_of(rows, anchor) else {
			return false;
		};
		let Some(next) = direction.neighbour(position, rows.len()) else {
			return false;
		};
		*target = Some(rows[next].key().clone());
		true
	}

	/// Abort the gesture. Returns whether a drag was in progress.
	pub fn cancel(&mut self) -> bool {
		let was_dragging = self.is_dragging();
		if was_dragging {
			debug!("drag cancelled");
		}
		self.state = DragState::Idle;
		was_dragging
	}

	/// Finish the gesture, moving the source row onto the hovered target.
	///
	/// Without a target, or when the keys no longer resolve, the rows are
	/// left as they were. The controller is idle afterwards in every case.
	pub fn drop_on<T>(&mut self, rows: &mut [T]) -> Option<Reorder>
	where
		T: Keyed<Key = K>,
	{
		let state = std::mem::replace(&mut self.state, DragState::Idle);
		let DragState::Dragging { source, target } = state else {
			return None;
		};
		let Some(target) = target else {
			debug!(?source, "drag dropped outside the table");
			return None;
		};
		let reorder = move_by_key(rows, &source, &target);
		if let Some(Reorder { from, to }) = reorder {
			info!(?source, from, to, "row reordered");
		}
		reorder
	}
}
