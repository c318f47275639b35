use serde::Deserialize;

/// Optional window for the activity calendar, as sent by the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarRange {
    pub start: Option<String>,
    pub end: Option<String>,
}
