use leptos::*;

use iptracker_core::{
    tracker::{parse_search_input, Outcome, TrackerState},
    usecases,
};
use iptracker_frontend_api as api;

mod components;
use components::*;

mod config;
pub use config::Config;

#[component]
#[must_use]
pub fn App(config: Config) -> impl IntoView {
    let Config {
        api: api_config,
        map: map_config,
    } = config;

    // -- signals -- //

    let state = RwSignal::new(TrackerState::default());
    let location = Signal::derive(move || state.with(|s| s.location.clone()));
    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let loading = Signal::derive(move || state.with(TrackerState::is_loading));

    // -- init API -- //

    let lookup_api = api::LookupApi::new(api_config.own_ip_url, api_config.lookup_url);

    // -- actions -- //

    let resolve = Action::new(move |ip: &Option<String>| {
        let ip = ip.clone();
        let lookup_api = lookup_api.clone();
        async move {
            let Some(id) = state.try_update(TrackerState::begin_request) else {
                log::warn!("Tracker state is no longer available");
                return;
            };
            let result = usecases::resolve_location(&lookup_api, ip.as_deref()).await;
            state.update(|s| match s.finish_request(id, result) {
                Outcome::Applied => {
                    log::info!("Located {}", s.location.ip_address);
                }
                Outcome::Failed => {
                    if let Some(err) = &s.error {
                        log::warn!("Unable to locate IP address: {err}");
                    }
                }
                Outcome::Stale => {
                    log::debug!("Ignore superseded location of {ip:?}");
                }
            });
        }
    });

    // -- callbacks -- //

    let on_search = move |input: String| {
        let Some(ip) = parse_search_input(&input) else {
            log::debug!("Ignore blank search input");
            return;
        };
        resolve.dispatch(Some(ip.to_owned()));
    };

    let on_dismiss = move || {
        state.update(TrackerState::dismiss_error);
    };

    // -- init -- //

    resolve.dispatch(None);

    view! {
      <main class="text-white flex flex-col items-center">
        <div class="h-[40vh] w-full bg-gradient-to-r from-indigo-700 to-sky-500 flex flex-col items-center">
          <p class="text-2xl font-semibold font-sans p-2 mt-3">"IP ADDRESS TRACKER"</p>
          <IpSearch on_search />
          <ErrorNotice error on_dismiss />
        </div>
        <div class="absolute top-[40vh] w-full h-[500px] -z-10">
          <LocationMap
            location
            zoom = map_config.zoom
            tile_layer_url = map_config.tile_layer_url
            attribution = map_config.attribution
          />
        </div>
        <LocationPanel location loading />
      </main>
    }
}
