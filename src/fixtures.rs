//! Record builders shared by the unit tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::record::{Agglutination, Appearance, Consistency, Liquefaction, TestRecord};

pub fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, d, 9, 0, 0).unwrap()
}

/// A record with every field absent.
pub fn empty_record() -> TestRecord {
    TestRecord::new("empty", day(1))
}

/// Every threshold-bearing field present and comfortably passing.
pub fn healthy_record() -> TestRecord {
    let mut r = TestRecord::new("healthy", day(1));
    r.appearance = Some(Appearance::Normal);
    r.liquefaction = Some(Liquefaction::Normal);
    r.consistency = Some(Consistency::Medium);
    r.semen_quantity = Some(3.0);
    r.ph = Some(7.6);
    r.total_mobility = Some(95.0);
    r.progressive_mobility = Some(70.0);
    r.non_progressive_mobility = Some(25.0);
    r.agglutination = Some(Agglutination::Mild);
    r.sperm_concentration = Some(100.0);
    r.live_spermatozoa = Some(85.0);
    r.morphology_rate = Some(15.0);
    r.leukocytes = Some(0.2);
    r.dna_fragmentation_risk = Some(0);
    r.dna_risk_category = Some("Low".to_string());
    r
}

/// Every threshold-bearing field present and exactly at its passing limit.
pub fn borderline_record() -> TestRecord {
    let mut r = healthy_record();
    r.id = "borderline".to_string();
    r.semen_quantity = Some(1.5);
    r.ph = Some(7.2);
    r.total_mobility = Some(40.0);
    r.progressive_mobility = Some(32.0);
    r.sperm_concentration = Some(15.0);
    r.live_spermatozoa = Some(58.0);
    r.morphology_rate = Some(4.0);
    r.leukocytes = Some(1.0);
    r
}

/// Record dated `d` with only motility and concentration measured.
pub fn measured(id: &str, d: u32, mobility: f64, concentration: f64) -> TestRecord {
    let mut r = TestRecord::new(id, day(d));
    r.total_mobility = Some(mobility);
    r.sperm_concentration = Some(concentration);
    r
}
