/// Zones shown on a fresh dashboard, in display order.
pub const DEFAULT_ZONES: [&str; 5] = [
    "America/Denver",
    "America/Los_Angeles",
    "America/Argentina/Buenos_Aires",
    "Europe/Rome",
    "Asia/Tokyo",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Ordered, duplicate-free list of selected zone identifiers.
///
/// Order is display order; the first entry is the base for offset comparisons.
/// Validity of identifiers is checked by the caller against a `ZoneDatabase`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimezoneSet {
    zones: Vec<String>,
}

impl TimezoneSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        Self::from_ids(DEFAULT_ZONES)
    }

    /// Later duplicates are dropped.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for id in ids {
            set.add(id);
        }
        set
    }

    pub fn add(&mut self, id: impl Into<String>) -> AddOutcome {
        let id = id.into();
        if self.contains(&id) {
            return AddOutcome::AlreadyPresent;
        }
        self.zones.push(id);
        AddOutcome::Added
    }

    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.zones.iter().position(|z| z == id) {
            Some(idx) => {
                self.zones.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn list(&self) -> &[String] {
        &self.zones
    }

    pub fn base(&self) -> Option<&str> {
        self.zones.first().map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.zones.iter().any(|z| z == id)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_in_display_order() {
        let set = TimezoneSet::with_defaults();
        assert_eq!(set.list(), DEFAULT_ZONES);
        assert_eq!(set.base(), Some("America/Denver"));
    }

    #[test]
    fn test_add_twice_keeps_one() {
        let mut set = TimezoneSet::new();
        assert_eq!(set.add("Europe/Paris"), AddOutcome::Added);
        assert_eq!(set.add("Europe/Paris"), AddOutcome::AlreadyPresent);
        assert_eq!(set.list().iter().filter(|z| *z == "Europe/Paris").count(), 1);
    }

    #[test]
    fn test_add_appends_to_end() {
        let mut set = TimezoneSet::with_defaults();
        set.add("America/New_York");
        assert_eq!(set.list().last().map(String::as_str), Some("America/New_York"));
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn test_remove_member_and_non_member() {
        let mut set = TimezoneSet::with_defaults();
        assert!(set.remove("Europe/Rome"));
        assert!(!set.contains("Europe/Rome"));
        assert_eq!(set.len(), 4);

        let before = set.clone();
        assert!(!set.remove("Europe/Rome"));
        assert_eq!(set, before);
    }

    #[test]
    fn test_removing_base_promotes_next() {
        let mut set = TimezoneSet::with_defaults();
        set.remove("America/Denver");
        assert_eq!(set.base(), Some("America/Los_Angeles"));
    }

    #[test]
    fn test_from_ids_drops_duplicates() {
        let set = TimezoneSet::from_ids(["Asia/Tokyo", "UTC", "Asia/Tokyo"]);
        assert_eq!(set.list(), ["Asia/Tokyo", "UTC"]);
    }

    #[test]
    fn test_empty_set_has_no_base() {
        let set = TimezoneSet::new();
        assert!(set.is_empty());
        assert_eq!(set.base(), None);
    }
}
