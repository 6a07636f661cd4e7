//! View state of the two trip screens.
//!
//! Each screen starts in `Loading` and resolves exactly once, to
//! `Populated` or `EmptyOrError`, when its mount fetch completes inside a
//! live [`RequestScope`]. The history screen layers a selection pointer on
//! top of its populated list.

use crate::api::TripSource;
use crate::core::logic::Core;
use crate::core::scope::RequestScope;
use crate::errors::{AppError, AppResult};
use crate::models::{Trip, TripSummary};
use crate::utils::time::{DateStyle, TimeFormatter};
use std::future::Future;

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState<T> {
    Loading,
    Populated(T),
    /// Transport failure, non-success status and bad payload all end here.
    EmptyOrError,
}

impl<T> ScreenState<T> {
    pub fn new() -> Self {
        ScreenState::Loading
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading)
    }

    pub fn is_populated(&self) -> bool {
        matches!(self, ScreenState::Populated(_))
    }

    pub fn is_empty_or_error(&self) -> bool {
        matches!(self, ScreenState::EmptyOrError)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ScreenState::Populated(v) => Some(v),
            _ => None,
        }
    }

    /// Apply the mount fetch outcome. Returns `false` (and changes nothing)
    /// when the state is already terminal.
    pub fn resolve(&mut self, outcome: AppResult<T>) -> bool {
        if !self.is_loading() {
            tracing::debug!("Screen already resolved; ignoring fetch outcome");
            return false;
        }

        *self = match outcome {
            Ok(value) => ScreenState::Populated(value),
            Err(e) => {
                tracing::warn!(error = %e, "Trip fetch failed");
                ScreenState::EmptyOrError
            }
        };
        true
    }
}

impl<T> Default for ScreenState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one fetch inside `scope` and resolve `state` with it.
async fn load_into<T, F>(state: &mut ScreenState<T>, scope: &RequestScope, fetch: F) -> AppResult<()>
where
    F: Future<Output = AppResult<T>>,
{
    match scope.run(fetch).await {
        Some(outcome) => {
            state.resolve(outcome);
            Ok(())
        }
        None => {
            tracing::debug!("Fetch result discarded after scope teardown");
            Err(AppError::Cancelled)
        }
    }
}

// ---------------------------
// Latest trip
// ---------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum LatestView {
    Loading,
    Unavailable,
    Summary(TripSummary),
}

#[derive(Debug, Default)]
pub struct LatestTripScreen {
    state: ScreenState<Trip>,
}

impl LatestTripScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScreenState<Trip> {
        &self.state
    }

    pub async fn mount<S: TripSource>(&mut self, source: &S, scope: &RequestScope) -> AppResult<()> {
        load_into(&mut self.state, scope, source.latest_trip()).await
    }

    pub fn view(&self, fmt: &TimeFormatter) -> LatestView {
        match &self.state {
            ScreenState::Loading => LatestView::Loading,
            ScreenState::EmptyOrError => LatestView::Unavailable,
            ScreenState::Populated(trip) => {
                LatestView::Summary(Core::build_trip_summary(trip, fmt, DateStyle::Long))
            }
        }
    }
}

// ---------------------------
// Trip history
// ---------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HistoryView<'a> {
    Loading,
    Unavailable,
    /// Possibly empty: an empty list is a successful load.
    List(&'a [Trip]),
    Detail(&'a Trip),
}

#[derive(Debug, Default)]
pub struct HistoryScreen {
    state: ScreenState<Vec<Trip>>,
    selected: Option<usize>,
}

impl HistoryScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScreenState<Vec<Trip>> {
        &self.state
    }

    pub async fn mount<S: TripSource>(&mut self, source: &S, scope: &RequestScope) -> AppResult<()> {
        load_into(&mut self.state, scope, source.list_trips()).await
    }

    pub fn trips(&self) -> Option<&[Trip]> {
        self.state.data().map(Vec::as_slice)
    }

    pub fn selected(&self) -> Option<&Trip> {
        self.selected
            .and_then(|i| self.trips().and_then(|trips| trips.get(i)))
    }

    pub fn view(&self) -> HistoryView<'_> {
        match &self.state {
            ScreenState::Loading => HistoryView::Loading,
            ScreenState::EmptyOrError => HistoryView::Unavailable,
            ScreenState::Populated(trips) => match self.selected.and_then(|i| trips.get(i)) {
                Some(trip) => HistoryView::Detail(trip),
                None => HistoryView::List(trips),
            },
        }
    }

    /// Select by 1-based list position.
    pub fn select_position(&mut self, position: usize) -> AppResult<&Trip> {
        let trips = self.trips().ok_or(AppError::NothingToSelect)?;
        if position == 0 || position > trips.len() {
            return Err(AppError::InvalidPosition(position));
        }
        self.selected = Some(position - 1);
        self.selected().ok_or(AppError::InvalidPosition(position))
    }

    /// Select by trip id.
    pub fn select_trip(&mut self, trip_id: i64) -> AppResult<&Trip> {
        let trips = self.trips().ok_or(AppError::NothingToSelect)?;
        let index = trips
            .iter()
            .position(|t| t.id == trip_id)
            .ok_or(AppError::TripNotFound(trip_id))?;
        self.selected = Some(index);
        self.selected().ok_or(AppError::TripNotFound(trip_id))
    }

    /// Leave the detail view. No-op when nothing is selected.
    pub fn back(&mut self) {
        self.selected = None;
    }

    pub fn detail(&self, fmt: &TimeFormatter) -> Option<TripSummary> {
        self.selected()
            .map(|trip| Core::build_trip_summary(trip, fmt, DateStyle::Short))
    }
}
