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
/// This is the name of the application used in various contexts like
/// log file paths and application identification.
pub const APPLICATION: &str = "file_rename";

/// Help text for the input directory option
pub const INP_DIR_HELP: &str = "Input image collection to be processed";

/// Help text for the output directory option
pub const OUT_DIR_HELP: &str = "Output image collection of renamed files";

/// Help text for the input pattern option
pub const FILE_PATTERN_HELP: &str =
    "Filename pattern used to separate data, e.g. img_x{row:dd}_y{col:dd}_{channel:c+}.tif";

/// Help text for the output pattern option
pub const OUT_FILE_PATTERN_HELP: &str =
    "Desired filename pattern, e.g. new_x{row:ddd}_y{col:ddd}_c{channel:ddd}.tif";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read options from a YAML config file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Show the planned renames without copying any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Write log messages to this file as well";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Keep the log file next to the working directory instead of the config directory";

/// Default name of the log file
pub const LOG_FILE_DEFAULT: &str = "file_rename.log";

/// Long description shown by `--help`
pub const ABOUT_LONG: &str = "Renames files from an image collection using a filename pattern. \
Patterns use d or i for digit/integer, c for character and f for floating point. \
Example: dd looks for 2 digits. Add + to avoid fixing the number of output \
digits/characters.";
