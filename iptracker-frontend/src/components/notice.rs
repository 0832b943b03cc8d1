use leptos::*;

use iptracker_core::usecases::Error;

#[component]
pub fn ErrorNotice<F>(error: Signal<Option<Error>>, on_dismiss: F) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    move || {
        error.get().map(|err| {
            view! {
              <div
                role="alert"
                class="flex items-center justify-between gap-4 bg-red-100 text-red-700 font-bold rounded px-4 py-2 mt-2"
              >
                <span>{ err.notice() }</span>
                <button class="text-xl" on:click = move |_| on_dismiss()>"×"</button>
              </div>
            }
        })
    }
}
