use crate::core::ApiError;

/// Canonical collection state for a fetched resource: items in retrieval
/// order, a loading flag, and the last error. Refreshes are tracked with a
/// generation counter so overlapping requests coalesce and results from a
/// superseded refresh are dropped instead of clobbering newer data.
pub struct ListState<T> {
    items: Vec<T>,
    loading: bool,
    last_error: Option<String>,
    generation: u64,
    in_flight: bool,
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self { items: Vec::new(), loading: false, last_error: None, generation: 0, in_flight: false }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Start a refresh unless one is already in flight. Returns the
    /// generation to tag the request with, or `None` when coalesced.
    pub fn begin_refresh(&mut self) -> Option<u64> {
        if self.in_flight {
            return None;
        }
        Some(self.start())
    }

    /// Start a refresh unconditionally, superseding any in-flight one
    /// (used after a mutation, where re-fetching must not be skipped).
    pub fn force_refresh(&mut self) -> u64 {
        self.start()
    }

    fn start(&mut self) -> u64 {
        self.generation += 1;
        self.in_flight = true;
        self.loading = true;
        self.last_error = None;
        self.generation
    }

    /// Apply a refresh result. Stale generations are discarded (returns
    /// false). Success replaces the whole collection; failure keeps the
    /// previously loaded items and records the error. The loading flag
    /// clears either way.
    pub fn finish(&mut self, generation: u64, result: Result<Vec<T>, ApiError>) -> bool {
        if generation != self.generation {
            return false;
        }

        self.in_flight = false;
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(error) => self.last_error = Some(error.to_string()),
        }
        true
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifier guard shared by delete/edit/enroll actions: fails locally,
/// before any network call, when the backend never assigned an id.
pub fn resolve_id(id: Option<&str>) -> Result<&str, ApiError> {
    match id {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(ApiError::Validation("Record has no resolvable identifier".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_refreshes_coalesce() {
        let mut list = ListState::<u32>::new();
        let first = list.begin_refresh();
        assert_eq!(first, Some(1));
        // Double-click: second refresh folds into the in-flight one
        assert_eq!(list.begin_refresh(), None);

        assert!(list.finish(1, Ok(vec![10, 20])));
        assert_eq!(list.items(), &[10, 20]);
        assert!(!list.is_loading());
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut list = ListState::<u32>::new();
        let old = list.begin_refresh().unwrap();
        let newer = list.force_refresh();
        assert!(newer > old);

        assert!(!list.finish(old, Ok(vec![1])));
        assert!(list.items().is_empty());
        assert!(list.is_loading());

        assert!(list.finish(newer, Ok(vec![2])));
        assert_eq!(list.items(), &[2]);
    }

    #[test]
    fn failed_refresh_keeps_prior_items() {
        let mut list = ListState::<u32>::new();
        let generation = list.begin_refresh().unwrap();
        assert!(list.finish(generation, Ok(vec![1, 2, 3])));

        let generation = list.begin_refresh().unwrap();
        assert!(list.finish(
            generation,
            Err(ApiError::Rejected { status: 500, detail: Some("boom".to_string()) })
        ));
        assert_eq!(list.items(), &[1, 2, 3]);
        assert_eq!(list.last_error(), Some("boom"));
        assert!(!list.is_loading());
    }

    #[test]
    fn repeated_refresh_is_idempotent() {
        let mut list = ListState::<u32>::new();
        let generation = list.begin_refresh().unwrap();
        assert!(list.finish(generation, Ok(vec![7, 8])));

        let generation = list.begin_refresh().unwrap();
        assert!(list.finish(generation, Ok(vec![7, 8])));
        assert_eq!(list.items(), &[7, 8]);
    }

    #[test]
    fn missing_id_fails_locally() {
        assert!(resolve_id(None).unwrap_err().is_validation());
        assert!(resolve_id(Some("")).unwrap_err().is_validation());
        assert!(resolve_id(Some("   ")).unwrap_err().is_validation());
        assert_eq!(resolve_id(Some("abc")).unwrap(), "abc");
    }
}
