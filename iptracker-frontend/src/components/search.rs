use leptos::*;

#[component]
pub fn IpSearch<F>(on_search: F) -> impl IntoView
where
    F: Fn(String) + 'static + Copy,
{
    let (input, set_input) = create_signal(String::new());

    view! {
      <div class="flex mt-3 items-center">
        <input
          type="text"
          placeholder="Search for any IP here..."
          class="text-black font-sans bg-white border-2 border-yellow-400 h-9 w-80 rounded-[8px] font-bold text-[16px] p-3"
          prop:value = input
          on:input = move |ev| set_input.set(event_target_value(&ev))
          on:keydown = move |ev| {
            match &*ev.key() {
              "Enter" => {
                on_search(input.get_untracked());
              }
              "Escape" => {
                set_input.set(String::new());
              }
              _=> { /* nothing to to */ }
            }
          }
        />
        <button
          class="h-9 w-9 rounded bg-black text-2xl"
          on:click = move |_| on_search(input.get_untracked())
        >
          "→"
        </button>
      </div>
    }
}
