use crate::entities::LocationRecord;

const LOADING: &str = "Loading...";
const UNKNOWN: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    pub label: &'static str,
    pub value: String,
}

/// The metadata table shown next to the map.
#[must_use]
pub fn panel_rows(record: &LocationRecord) -> [PanelRow; 4] {
    let value = |v: &str| {
        if !record.is_resolved() {
            LOADING.to_string()
        } else if v.is_empty() {
            UNKNOWN.to_string()
        } else {
            v.to_string()
        }
    };
    [
        PanelRow {
            label: "IP ADDRESS",
            value: value(&record.ip_address),
        },
        PanelRow {
            label: "LOCATION",
            value: value(&record.label()),
        },
        PanelRow {
            label: "TIME ZONE",
            value: value(&record.timezone_utc),
        },
        PanelRow {
            label: "ISP",
            value: value(&record.isp_name),
        },
    ]
}
