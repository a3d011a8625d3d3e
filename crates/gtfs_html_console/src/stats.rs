use serde::Deserialize;

/// Counts produced by one generation run, plus accumulated warnings.
///
/// Owned and filled in by the pipeline; the reporter only reads it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputStats {
    #[serde(default)]
    pub timetable_pages: u64,
    #[serde(default)]
    pub timetables: u64,
    #[serde(default)]
    pub calendars: u64,
    #[serde(default)]
    pub routes: u64,
    #[serde(default)]
    pub trips: u64,
    #[serde(default)]
    pub stops: u64,
    #[serde(default)]
    pub warnings: Vec<String>,
}
