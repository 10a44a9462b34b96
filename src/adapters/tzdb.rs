use crate::domain::ports::ZoneDatabase;
use chrono_tz::{Tz, TZ_VARIANTS};

/// Zone database backed by the IANA data compiled into `chrono-tz`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoTzDatabase;

impl ChronoTzDatabase {
    pub fn new() -> Self {
        Self
    }
}

impl ZoneDatabase for ChronoTzDatabase {
    fn lookup(&self, id: &str) -> Option<Tz> {
        id.parse::<Tz>().ok()
    }

    fn zone_ids(&self) -> Vec<&'static str> {
        TZ_VARIANTS.iter().map(|tz| tz.name()).collect()
    }
}
