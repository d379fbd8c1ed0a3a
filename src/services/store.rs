//! Injected application state: the fetched entity list and the applied
//! filter settings.
//!
//! The store is a plain value owned and sequenced by the surrounding
//! application (the UI layer passes it by reference to whichever screen
//! needs it). There is no interior mutability and no ambient singleton;
//! every operation here is a synchronous in-memory computation.

use crate::models::neo::{FilterSettings, NearEarthObject};
use crate::services::filters::{active_filters, apply_filters, settings_equal};
use chrono::NaiveDate;

/// Client-side state for the NEO list screens.
#[derive(Debug, Clone, Default)]
pub struct NeoStore {
    objects: Vec<NearEarthObject>,
    feed_date: Option<NaiveDate>,
    applied: FilterSettings,
}

impl NeoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entity list with a fresh fetch for `date`.
    ///
    /// Entities are held until the date changes or a refetch invalidates
    /// them; previously applied settings stay in place and are re-evaluated
    /// against the new collection on the next [`NeoStore::filtered`] call.
    pub fn set_feed(&mut self, date: NaiveDate, objects: Vec<NearEarthObject>) {
        log::debug!("feed for {} replaced: {} objects", date, objects.len());
        self.feed_date = Some(date);
        self.objects = objects;
    }

    pub fn feed_date(&self) -> Option<NaiveDate> {
        self.feed_date
    }

    pub fn objects(&self) -> &[NearEarthObject] {
        &self.objects
    }

    /// The currently applied settings, as stored (inert filters included;
    /// normalization happens on read via [`active_filters`]).
    pub fn applied(&self) -> &FilterSettings {
        &self.applied
    }

    /// Whether promoting `draft` would change the applied state.
    ///
    /// Compares the active subsets, so a draft differing only in inert
    /// filters (a blank text box, a slider at full extent) does not count
    /// as a change. This drives the enabled state of the "Apply" control.
    pub fn would_change(&self, draft: &FilterSettings) -> bool {
        let current = active_filters(&self.applied, &self.objects);
        let proposed = active_filters(draft, &self.objects);
        !settings_equal(&current, &proposed)
    }

    /// Promote a draft settings object to the applied scope.
    ///
    /// Returns `true` when the applied state actually changed. The draft is
    /// stored as given; inert entries are filtered out at read time.
    pub fn apply(&mut self, draft: FilterSettings) -> bool {
        let changed = self.would_change(&draft);
        self.applied = draft;
        changed
    }

    /// Reset the applied settings to "no constraint".
    pub fn clear_filters(&mut self) {
        self.applied = FilterSettings::new();
    }

    /// Run the engine over the active subset of the applied settings.
    pub fn filtered(&self) -> Vec<NearEarthObject> {
        let active = active_filters(&self.applied, &self.objects);
        apply_filters(&self.objects, &active)
    }
}
