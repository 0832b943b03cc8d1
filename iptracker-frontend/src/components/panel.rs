use leptos::*;

use iptracker_core::{entities::LocationRecord, panel::panel_rows};

#[component]
pub fn LocationPanel(location: Signal<LocationRecord>, loading: Signal<bool>) -> impl IntoView {
    let rows = Signal::derive(move || location.with(panel_rows));

    view! {
      <div class="bg-white text-black min-w-[50vw] rounded-xl mt-28 absolute grid z-10 sm:grid-cols-2 md:grid-cols-4 text-center shadow-2xl">
        { move || rows.get().into_iter().map(|row| view! {
            <div class="m-2 md:border-r last:border-none">
              <p class="text-gray-500 text-[12px] font-bold">{ row.label }</p>
              <p class="text-[13px] font-extrabold">{ row.value }</p>
            </div>
          }).collect_view()
        }
        <Show when = move || loading.get()>
          <p class="col-span-full text-gray-400 text-[12px]">"Locating..."</p>
        </Show>
      </div>
    }
}
