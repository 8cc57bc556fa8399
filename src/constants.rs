// Reply Constants
pub const DEFAULT_REPLY_PREFIX: &str = "Reply to: ";

// UI Constants
pub const ROUND_DOWN_AND_RIGHT: char = '╭';
pub const ROUND_DOWN_AND_LEFT: char = '╮';
pub const ROUND_UP_AND_RIGHT: char = '╰';
pub const ROUND_UP_AND_LEFT: char = '╯';
pub const LIGHT_HORIZONTAL: char = '─';
pub const LIGHT_VERTICAL: char = '│';

pub const SEND_BUTTON_LABEL: &str = "[ Send ]";
pub const APP_TITLE: &str = "bubblechat";

/// Numerator and denominator of the list width a bubble may occupy.
pub const BUBBLE_WIDTH_RATIO: (u16, u16) = (3, 4);
pub const MIN_BUBBLE_WIDTH: u16 = 6;

// Event loop Constants
pub const DEFAULT_TICK_RATE_MS: u64 = 250;
pub const MAX_TICK_RATE_MS: u64 = 5000;
pub const INPUT_POLL_MS: u64 = 50;
pub const LOG_LEVEL_ENV: &str = "BUBBLECHAT_LOG_LEVEL";
