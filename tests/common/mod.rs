#![allow(dead_code)]

use apex::calibrations::KnownCalibration;
use apex::config::Calibration;
use apex::inputs::RawAthleteInputs;
use apex::scorer::Scorer;

/// A mid-pack athlete. Scores 657 under the 2025 table:
/// speed 168, power 162, strength 171, endurance 156.
pub fn sample_inputs() -> RawAthleteInputs {
    RawAthleteInputs {
        sprint_time: "4.80".to_string(),
        toss_distance: "65'0\"".to_string(),
        vertical_height: "32".to_string(),
        broad_distance: "9'6\"".to_string(),
        push_reps: "30".to_string(),
        pull_reps: "25".to_string(),
        mile_time: "6:15".to_string(),
    }
}

/// Every event at or past its best anchor in both built-in tables.
pub fn maxed_inputs() -> RawAthleteInputs {
    RawAthleteInputs {
        sprint_time: "4.00".to_string(),
        toss_distance: "80'0\"".to_string(),
        vertical_height: "45\"".to_string(),
        broad_distance: "12'3\"".to_string(),
        push_reps: "49".to_string(),
        pull_reps: "40".to_string(),
        mile_time: "4:00".to_string(),
    }
}

pub fn calibration_2025() -> Calibration {
    KnownCalibration::Apex2025.calibration()
}

pub fn scorer_2025() -> Scorer {
    Scorer::known(KnownCalibration::Apex2025).expect("2025 calibration is valid")
}

pub fn scorer_2026() -> Scorer {
    Scorer::known(KnownCalibration::Apex2026).expect("2026 calibration is valid")
}

pub const SAMPLE_RESULTS_CSV: &str = "\
id,event_name,date,athlete_rank,athlete_name,apex_score,gender,speed_score,power_score,strength_score,endurance_score,fast_forty,max_toss,the_vertical,the_broad,the_push,the_pull,the_mile,instagram_handle
1,Spring Open,2025-04-12,1,Jordan Vale,657.0,Men,168.0,162.0,171.0,156.0,4.80,\"65'0\"\"\",32,\"9'6\"\"\",30,25,6:15,@jvale
2,Spring Open,2025-04-12,2,Casey Lin,650.4,Women,,,,,4.80,\"65'0\"\"\",32,\"9'6\"\"\",30,25,6:15,
";
