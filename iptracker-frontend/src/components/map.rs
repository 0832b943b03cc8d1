use leaflet::LatLng;
use leptos::*;
use leptos_leaflet::{MapContainer, Marker, Popup, Position, TileLayer};

use iptracker_core::{
    entities::{LocationRecord, MapPoint},
    map_view::{MapViewport, MarkerView, ViewportChange},
};

/// A map with a single marker at the located position.
///
/// Nothing is rendered until a position is known. Later positions
/// move the existing map instead of creating a new one.
#[component]
pub fn LocationMap(
    location: Signal<LocationRecord>,
    zoom: f64,
    tile_layer_url: String,
    attribution: String,
) -> impl IntoView {
    let map = RwSignal::<Option<leaflet::Map>>::new(None);
    let marker = Memo::new(move |_| location.with(MarkerView::of));
    let viewport = StoredValue::new(MapViewport::default());

    Effect::new(move |_| {
        let position = marker.with(|m| m.as_ref().map(|m| m.pos));
        match viewport.try_update_value(|v| v.follow(position)) {
            Some(ViewportChange::Recenter(MapPoint { lat, lng })) => {
                let Some(map) = map.get_untracked() else {
                    log::warn!("No leaflet map found");
                    return;
                };
                log::debug!("Recenter map to {lat},{lng}");
                map.set_view(&LatLng::new(lat, lng), zoom);
            }
            Some(ViewportChange::Mount(center)) => {
                log::debug!("Show map at {center}");
            }
            Some(ViewportChange::Hidden) => {
                log::debug!("No position to show");
            }
            Some(ViewportChange::Unchanged) | None => {}
        }
    });

    view! {
      <Show when = move || marker.with(Option::is_some)>
        {
          let MapPoint { lat, lng } = marker
            .with_untracked(|m| m.as_ref().map(|m| m.pos))
            .unwrap_or_default();
          view! {
            <MapContainer
              class="w-full h-full"
              center=Position::new(lat, lng)
              zoom
              map=map.write_only()
              set_view=true
            >
              <TileLayer url=tile_layer_url.clone() attribution=attribution.clone() />
              { move || marker.get().map(|MarkerView { pos, label }| view! {
                  <Marker position=Position::new(pos.lat, pos.lng)>
                    <Popup>{ label }</Popup>
                  </Marker>
                })
              }
            </MapContainer>
          }
        }
      </Show>
    }
}
