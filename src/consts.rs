/// Points available in each of the four categories.
pub const CATEGORY_CEILING: u32 = 250;

/// Points available across the whole scorecard (four categories).
pub const TOTAL_CEILING: u32 = 1000;

/// Number of physical test events on a scorecard.
pub const EVENT_COUNT: usize = 7;

/// Default tier lower bounds (inclusive) for the total score.
pub const TIER_ATHLETIC: u32 = 400;
pub const TIER_ATHLETIC_PLUS: u32 = 600;
pub const TIER_PRO: u32 = 700;
pub const TIER_APEX: u32 = 800;

/// Rep fields hold at most this many digits.
pub const MAX_REP_DIGITS: usize = 2;

/// Distance fields need at least this many digits to count as entered.
pub const MIN_DISTANCE_DIGITS: usize = 2;

/// A mile time ("M:SS" / "MM:SS") carries this many digits.
pub const MILE_DIGITS_MIN: usize = 3;
pub const MILE_DIGITS_MAX: usize = 4;
