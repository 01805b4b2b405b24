/// Source file read when no `--input` is given
pub const DEFAULT_INPUT_PATH: &str = "./data.csv";

/// Directory the four reports are written to when no `--output-dir` is given
pub const DEFAULT_OUTPUT_DIR: &str = ".";

// Report file names, one per pipeline stage
pub const CLAIMS_BY_CHART_FILE: &str = "step1_claims_by_chart.html";
pub const MULTIPLE_CLAIM_CHARTS_FILE: &str = "step2_multiple_claim_charts.html";
pub const NONZERO_MULTIPLE_CLAIM_CHARTS_FILE: &str = "step3_nonzero_multiple_claim_charts.html";
pub const MARKED_DUPLICATES_FILE: &str = "step4_marked_duplicates.html";

/// Title shown at the top of every report
pub const REPORT_TITLE: &str = "CJG Reconciliation";

// Positional columns of the claim export (0-indexed)
pub const CHART_NUMBER_FIELD: usize = 0;
pub const CASE_NUMBER_FIELD: usize = 4;
pub const CLAIM_NO_FIELD: usize = 5;
pub const DATE_OF_SERVICE_FIELD: usize = 6;
pub const INSURANCE_PAID_FIELD: usize = 10;
pub const INSURANCE_NAME_FIELD: usize = 11;
pub const ADJUSTMENT_AMOUNT_FIELD: usize = 12;
pub const FACILITY_FIELD: usize = 14;
pub const SHEET_FIELD: usize = 15;

/// Minimum number of fields a row must carry
pub const REQUIRED_FIELDS: usize = SHEET_FIELD + 1;

/// Source date format, month and day need not be zero-padded
pub const SOURCE_DATE_FORMAT: &str = "%m/%d/%Y";

/// Canonical rendering used for display and same-day grouping
pub const DISPLAY_DATE_FORMAT: &str = "%m/%d/%Y";
