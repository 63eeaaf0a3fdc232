//! Page Load State
//!
//! Tagged state for a page's data and a generation counter that lets a page
//! discard responses to requests it has since superseded.

use std::cell::Cell;
use std::rc::Rc;

use crate::api::ApiError;

/// Lifecycle of one fetched value
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(ApiError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Failed(e),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

impl<T: Clone + Default> LoadState<T> {
    /// The loaded value, or an empty one while loading or after a failure
    pub fn loaded_or_default(&self) -> T {
        self.loaded().cloned().unwrap_or_default()
    }
}

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Request-generation counter.
///
/// Clones share the counter, so a clone can move into a spawned task and
/// still observe later calls to [`RequestTracker::begin`].
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    current: Rc<Cell<u64>>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier one
    pub fn begin(&self) -> Generation {
        let next = self.current.get() + 1;
        self.current.set(next);
        Generation(next)
    }

    /// Whether `generation` is still the latest request
    pub fn is_current(&self, generation: Generation) -> bool {
        self.current.get() == generation.0
    }

    /// State to apply for a finished request, or `None` when a later
    /// request has superseded it
    pub fn settle<T>(
        &self,
        generation: Generation,
        result: Result<T, ApiError>,
    ) -> Option<LoadState<T>> {
        self.is_current(generation).then(|| LoadState::from_result(result))
    }
}
