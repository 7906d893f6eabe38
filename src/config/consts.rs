// src/config/consts.rs

// Matching
pub const MAX_EDIT_DISTANCE: usize = 2; // rounds 1..=2 after the exact round
pub const EARLY_EXIT: bool = true;

// Colours
pub const TOP_COLORS: usize = 5;
pub const BACKGROUND_COLOR: &str = "background-color";

// Reference data
pub const DATA_DIR: &str = "data";
pub const PALETTE_FILE: &str = "palette.json";
pub const SUBURBS_FILE: &str = "suburbs.csv";
pub const VENUES_FILE: &str = "venues.csv";
pub const WORDS_FILE: &str = "words.txt";

// Local log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Concurrency
pub const WORKERS: usize = 4;
