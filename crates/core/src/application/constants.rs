// Generation ranges (all inclusive)

/// Ticket display numbers
pub const TICKET_NUMBER_MIN: u32 = 1;
pub const TICKET_NUMBER_MAX: u32 = 100;

/// Advisory wait on join, minutes
pub const JOIN_WAIT_MIN: u32 = 10;
pub const JOIN_WAIT_MAX: u32 = 39;

/// Arrival offsets accepted in strict mode, minutes
pub const DEFAULT_MAX_ARRIVAL_MINUTES: u32 = 120;

pub const MILLIS_PER_MINUTE: i64 = 60_000;

// Session seeding
pub const SEED_SERVING_MIN: u32 = 1;
pub const SEED_SERVING_MAX: u32 = 20;
pub const SEED_TOTAL_TODAY_MIN: u32 = 50;
pub const SEED_TOTAL_TODAY_MAX: u32 = 149;
pub const SEED_AVG_WAIT_MIN: u32 = 10;
pub const SEED_AVG_WAIT_MAX: u32 = 29;
pub const SEED_QUEUE_SIZE_MIN: u32 = 3;
pub const SEED_QUEUE_SIZE_MAX: u32 = 10;

/// Mock tickets joined within the last hour
pub const SEED_JOIN_WINDOW_MS: u32 = 3_600_000;
