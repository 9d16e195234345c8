//! Simulated-calendar readout for the host UI's date display.
//!
//! Simulated time 0 corresponds to 2025-01-01; each model year is 365.25
//! model days laid onto the Julian day number line.

use crate::orbit::DAYS_PER_YEAR;

/// Julian day number of 2025-01-01 00:00 UTC.
const EPOCH_JD: f64 = 2_460_676.5;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Calendar (year, month, day) for a simulated time in model years.
pub fn simulation_date(time_years: f64) -> (i32, u32, u32) {
    jd_to_calendar(EPOCH_JD + time_years * DAYS_PER_YEAR)
}

/// Human-form date string, e.g. "March 1, 2026".
pub fn simulation_date_string(time_years: f64) -> String {
    let (year, month, day) = simulation_date(time_years);
    let month_name = MONTH_NAMES[(month - 1) as usize];
    format!("{month_name} {day}, {year}")
}

/// Convert a Julian day number to (year, month, day), Gregorian.
fn jd_to_calendar(jd: f64) -> (i32, u32, u32) {
    let z = (jd + 0.5).floor() as i64;
    let a = if z < 2_299_161 {
        z
    } else {
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
        z + 1 + alpha - alpha / 4
    };
    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let d = (365.25 * c as f64).floor() as i64;
    let e = ((b - d) as f64 / 30.6001).floor() as i64;

    let day = (b - d - (30.6001 * e as f64).floor() as i64) as u32;
    let month = if e < 14 { (e - 1) as u32 } else { (e - 13) as u32 };
    let year = if month > 2 { (c - 4716) as i32 } else { (c - 4715) as i32 };

    (year, month, day)
}
