// Window size constants
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;
pub const DEFAULT_WINDOW_TITLE: &str = "Masterplan Review";

/// Application name and metadata constants
pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "Masterplan";
pub const APP_NAME: &str = "Masterplan Review";

/// Author stamped on imported versions when none is configured
pub const DEFAULT_AUTHOR: &str = "Instructor";

/// Shown whenever the selection is incomplete or does not resolve
pub const PROMPT_TEXT: &str = "Select two versions to compare and see the differences";

/// Suggested file name for exported diffs
pub const EXPORT_FILE_NAME: &str = "diff.txt";
