use crate::domain::model::{display_label, ClockReading, HandAngles, SummaryRow};
use crate::domain::ports::ZoneDatabase;
use crate::utils::error::{ClockError, Result};
use chrono::{DateTime, Offset, Timelike, Utc};
use chrono_tz::Tz;

pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const LONG_DATE_FORMAT: &str = "%A, %B %d, %Y";

/// Standard 12-hour dial: 30 degrees per hour, 6 per minute and per second.
pub fn compute_angles<T: Timelike>(time: &T) -> HandAngles {
    let hour = f64::from(time.hour() % 12);
    let minute = f64::from(time.minute());
    let second = f64::from(time.second());

    HandAngles {
        hour: (hour + minute / 60.0) * 30.0,
        minute: (minute + second / 60.0) * 6.0,
        second: second * 6.0,
    }
}

/// Signed hours, one decimal, with a trailing ".0" dropped: `+5h`, `-3.5h`, `+0h`.
pub fn format_difference(diff_hours: f64) -> String {
    format!("{:+.1}h", diff_hours).replace(".0h", "h")
}

pub fn utc_offset_hours(local: &DateTime<Tz>) -> f64 {
    f64::from(local.offset().fix().local_minus_utc()) / 3600.0
}

/// The zone every summary row is compared against.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseZone {
    pub zone_id: String,
    pub offset_hours: f64,
}

#[derive(Debug, Clone)]
pub struct ClockRenderer<D: ZoneDatabase> {
    db: D,
}

impl<D: ZoneDatabase> ClockRenderer<D> {
    pub fn new(db: D) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &D {
        &self.db
    }

    pub fn to_local(&self, instant: DateTime<Utc>, zone_id: &str) -> Result<DateTime<Tz>> {
        let tz = self
            .db
            .lookup(zone_id)
            .ok_or_else(|| ClockError::unknown_zone(zone_id))?;
        Ok(instant.with_timezone(&tz))
    }

    pub fn reading(&self, instant: DateTime<Utc>, zone_id: &str) -> Result<ClockReading> {
        let local = self.to_local(instant, zone_id)?;
        Ok(ClockReading {
            zone_id: zone_id.to_string(),
            local: local.naive_local(),
            utc_offset_hours: utc_offset_hours(&local),
            abbreviation: local.format("%Z").to_string(),
            angles: compute_angles(&local),
        })
    }

    pub fn base(&self, instant: DateTime<Utc>, zone_id: &str) -> Result<BaseZone> {
        let local = self.to_local(instant, zone_id)?;
        Ok(BaseZone {
            zone_id: zone_id.to_string(),
            offset_hours: utc_offset_hours(&local),
        })
    }

    pub fn format_summary_row(
        &self,
        instant: DateTime<Utc>,
        zone_id: &str,
        base: &BaseZone,
    ) -> Result<SummaryRow> {
        let local = self.to_local(instant, zone_id)?;
        let difference = if zone_id == base.zone_id {
            "Base".to_string()
        } else {
            format_difference(utc_offset_hours(&local) - base.offset_hours)
        };

        Ok(SummaryRow {
            location: display_label(zone_id),
            time: local.format(TIME_FORMAT).to_string(),
            date: local.format(DATE_FORMAT).to_string(),
            difference,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ChronoTzDatabase;
    use chrono::{NaiveTime, TimeZone};

    fn renderer() -> ClockRenderer<ChronoTzDatabase> {
        ClockRenderer::new(ChronoTzDatabase::new())
    }

    fn jan_15_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_angles_at_known_times() {
        let t = NaiveTime::from_hms_opt(15, 30, 45).unwrap();
        let a = compute_angles(&t);
        assert_eq!(a.second, 270.0);
        assert_eq!(a.minute, (30.0 + 45.0 / 60.0) * 6.0);
        assert_eq!(a.hour, (3.0 + 30.0 / 60.0) * 30.0);

        let midnight = compute_angles(&NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(midnight, HandAngles { hour: 0.0, minute: 0.0, second: 0.0 });

        let noon = compute_angles(&NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        assert_eq!(noon.hour, 0.0);
    }

    #[test]
    fn test_angles_stay_below_full_turn() {
        for h in 0..24 {
            for m in (0..60).step_by(7) {
                for s in [0, 1, 29, 59] {
                    let a = compute_angles(&NaiveTime::from_hms_opt(h, m, s).unwrap());
                    for deg in [a.hour, a.minute, a.second] {
                        assert!((0.0..360.0).contains(&deg), "{}:{}:{} -> {}", h, m, s, deg);
                    }
                }
            }
        }
    }

    #[test]
    fn test_format_difference() {
        assert_eq!(format_difference(5.0), "+5h");
        assert_eq!(format_difference(3.5), "+3.5h");
        assert_eq!(format_difference(-3.5), "-3.5h");
        assert_eq!(format_difference(-7.0), "-7h");
        assert_eq!(format_difference(0.0), "+0h");
        assert_eq!(format_difference(10.0), "+10h");
    }

    #[test]
    fn test_to_local_applies_offset() {
        let local = renderer().to_local(jan_15_noon(), "Asia/Tokyo").unwrap();
        assert_eq!(local.format("%H:%M:%S").to_string(), "21:00:00");
        assert_eq!(utc_offset_hours(&local), 9.0);
    }

    #[test]
    fn test_to_local_unknown_zone() {
        let err = renderer().to_local(jan_15_noon(), "Atlantis/Lost_City").unwrap_err();
        assert!(matches!(err, ClockError::UnknownZone { ref zone } if zone == "Atlantis/Lost_City"));
    }

    #[test]
    fn test_reading_for_denver_in_winter() {
        let reading = renderer().reading(jan_15_noon(), "America/Denver").unwrap();
        assert_eq!(reading.utc_offset_hours, -7.0);
        assert_eq!(reading.abbreviation, "MST");
        assert_eq!(reading.local.format("%H:%M").to_string(), "05:00");
        assert_eq!(reading.angles.hour, 150.0);
    }

    #[test]
    fn test_offset_follows_daylight_saving() {
        let july = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
        let reading = renderer().reading(july, "America/Denver").unwrap();
        assert_eq!(reading.utc_offset_hours, -6.0);
    }

    #[test]
    fn test_summary_rows_against_denver() {
        let r = renderer();
        let instant = jan_15_noon();
        let base = r.base(instant, "America/Denver").unwrap();

        let denver = r.format_summary_row(instant, "America/Denver", &base).unwrap();
        assert_eq!(denver.difference, "Base");
        assert_eq!(denver.time, "05:00:00");
        assert_eq!(denver.date, "2024-01-15");

        let rome = r.format_summary_row(instant, "Europe/Rome", &base).unwrap();
        assert_eq!(rome.difference, "+8h");
        assert_eq!(rome.time, "13:00:00");

        let buenos_aires = r
            .format_summary_row(instant, "America/Argentina/Buenos_Aires", &base)
            .unwrap();
        assert_eq!(buenos_aires.location, "America/Argentina/Buenos Aires");
        assert_eq!(buenos_aires.difference, "+4h");
    }

    #[test]
    fn test_fractional_difference() {
        let r = renderer();
        let instant = jan_15_noon();
        let base = r.base(instant, "UTC").unwrap();

        let kolkata = r.format_summary_row(instant, "Asia/Kolkata", &base).unwrap();
        assert_eq!(kolkata.difference, "+5.5h");

        let st_johns = r.format_summary_row(instant, "America/St_Johns", &base).unwrap();
        assert_eq!(st_johns.difference, "-3.5h");
    }

    #[test]
    fn test_non_base_zone_with_same_offset() {
        let r = renderer();
        let instant = jan_15_noon();
        let base = r.base(instant, "Europe/Rome").unwrap();
        let paris = r.format_summary_row(instant, "Europe/Paris", &base).unwrap();
        assert_eq!(paris.difference, "+0h");
    }
}
