//! Application constants and default values for citypin.
//!
//! This module contains the embedded city dataset, output formatting
//! constants, and operational defaults used throughout the application.

// ═══ Embedded City Dataset ═══
// The gazetteer ships with the binary; the CSV uses double-quoted fields
// with a header row, and only the city, lat, lng, and country columns are
// consumed. A parse failure here is a packaging bug and must fail startup.

pub const CITY_DATASET: &str = r#"
"city","city_ascii","lat","lng","country","iso2","iso3","admin_name","capital","population","id"
"Tokyo","Tokyo","35.6897","139.6922","Japan","JP","JPN","Tōkyō","primary","37732000","1392685764"
"Jakarta","Jakarta","-6.1750","106.8275","Indonesia","ID","IDN","Jakarta","primary","33756000","1360771077"
"Delhi","Delhi","28.6100","77.2300","India","IN","IND","Delhi","admin","32226000","1356872604"
"Guangzhou","Guangzhou","23.1300","113.2600","China","CN","CHN","Guangdong","admin","26940000","1156237133""#;

// Minimum columns a data row must carry: country at index 4 is the last
// field we read.
pub const MIN_DATASET_COLUMNS: usize = 5;

// ═══ Status Text ═══

/// Status line returned before any Execute call has run.
pub const INITIAL_STATUS: &str = "Click to fetch city info.";

// ═══ Command Interface ═══

/// Case-insensitive prefix the host's command text must carry.
pub const EXECUTE_PREFIX: &str = "Execute ";

// ═══ Output File Layout ═══
// The result file is a Rainmeter skin fragment; the section and meter
// lines are fixed, only the Text= and action lines vary per outcome.

pub const RESULT_SECTION: &str = "[Result_1]";
pub const RESULT_METER: &str = "Meter=String";
pub const RESULT_METER_STYLE: &str = "MeterStyle=Result_String";

// ═══ Configuration ═══

pub const CONFIG_DIR: &str = "citypin";
pub const CONFIG_FILE: &str = "citypin.toml";

// ═══ Exit Codes ═══

pub const EXIT_FAILURE: i32 = 1; // General failure
