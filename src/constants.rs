/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// Used for the platform configuration directory lookup.
pub const APPLICATION: &str = "csv2flow";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the base directory command-line option
pub const BASE_DIR_HELP: &str = "Directory the input and output folders are resolved against";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Build every document without writing any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log messages to this file";

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "csv2flow.yaml";

/// Default base directory
pub const DEFAULT_BASE_DIR: &str = ".";

/// Folder holding the exported CSV files, relative to the base directory
pub const DEFAULT_INPUT_DIR: &str = "tmp-csv";

/// Folders every section document is written to, relative to the base directory
pub const DEFAULT_OUTPUT_DIRS: [&str; 2] = ["data", "public/data"];

/// Built-in section identifiers, processed in this order
pub const DEFAULT_SECTIONS: [&str; 5] = [
    "case-opening",
    "treatment-monitoring",
    "discovery",
    "expert-deposition",
    "arbitration-mediation",
];

/// Task labels matching any of these phrases end the flow
pub const DEFAULT_TERMINAL_PATTERNS: [&str; 2] = [r"back to intake", r"send cut letter"];

/// Organisational prefix stripped from the sheet title
pub const DEFAULT_TITLE_PREFIX: &str = r"^BJB:\s*(LIT\s*/\s*)?";

/// Colour used for categories missing from the palette
pub const FALLBACK_CATEGORY_COLOR: u32 = 0x607d8b;

/// Theme colour used for sections missing from the palette
pub const FALLBACK_THEME_COLOR: u32 = 0x1a237e;

/// Text colour of every node style
pub const STYLE_TEXT_COLOR: &str = "#222";

/// How far node fills are pushed towards white
pub const FILL_LIGHTEN_AMOUNT: f64 = 0.85;

/// Style key for tasks without a category
pub const DEFAULT_STYLE_KEY: &str = "default";

/// Phase name for tasks without a category
pub const GENERAL_PHASE: &str = "General";

pub const ELLIPSIS: &str = "...";

/// Longest label kept before it is cut
pub const LABEL_MAX_LEN: usize = 120;

pub const NOTES_MAX_LEN: usize = 500;

/// Limit for the extra lines of a multi-line task text
pub const REMAINDER_MAX_LEN: usize = 300;

pub const TABLE_COLUMNS: [&str; 6] = [
    "#",
    "Phase",
    "Quick Action Panel",
    "Assigned To",
    "Task",
    "SLA",
];
