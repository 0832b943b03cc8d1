use crate::entities::{LocationRecord, MapPoint};

pub const DEFAULT_ZOOM: f64 = 16.0;

/// A single marker on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub pos: MapPoint,
    pub label: String,
}

impl MarkerView {
    /// The marker of a located record.
    #[must_use]
    pub fn of(record: &LocationRecord) -> Option<Self> {
        record.position().map(|pos| Self {
            pos,
            label: record.label(),
        })
    }
}

/// How a map has to react to a new position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportChange {
    /// There is nothing to show.
    Hidden,
    /// Create the map centered on the position.
    Mount(MapPoint),
    /// Move the existing map to the position.
    Recenter(MapPoint),
    Unchanged,
}

/// Keeps a map centered on the latest position.
#[derive(Debug, Clone, Default)]
pub struct MapViewport {
    center: Option<MapPoint>,
}

impl MapViewport {
    #[cfg(test)]
    const fn center(&self) -> Option<MapPoint> {
        self.center
    }

    pub fn follow(&mut self, position: Option<MapPoint>) -> ViewportChange {
        let change = match (self.center, position) {
            (_, None) => ViewportChange::Hidden,
            (None, Some(pos)) => ViewportChange::Mount(pos),
            (Some(center), Some(pos)) if center == pos => ViewportChange::Unchanged,
            (Some(_), Some(pos)) => ViewportChange::Recenter(pos),
        };
        self.center = position;
        change
    }
}
