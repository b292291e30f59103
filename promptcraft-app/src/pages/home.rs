use leptos::*;
use leptos_router::*;

use promptcraft_boundary::Prompt;
use promptcraft_core::filter::{filter_prompts, PromptFilter};
use promptcraft_frontend_api::PublicApi;

use crate::{categories::predefined_categories, components::*, Page};

#[component]
pub fn Home(public_api: PublicApi, logged_in: Signal<bool>) -> impl IntoView {
    // -- signals -- //

    let prompts = create_rw_signal(Vec::<Prompt>::new());
    let (fetch_error, set_fetch_error) = create_signal(None::<String>);
    let (category, set_category) = create_signal(None::<String>);
    let (search, set_search) = create_signal(String::new());

    // -- actions -- //

    let fetch_prompts = create_action(move |()| async move {
        match public_api.prompts().await {
            Ok(list) => {
                prompts.update(|p| *p = list);
                set_fetch_error.update(|e| *e = None);
            }
            Err(err) => {
                log::warn!("Unable to fetch prompts: {err}");
                set_fetch_error.update(|e| *e = Some(err.to_string()));
            }
        }
    });
    fetch_prompts.dispatch(());

    let loading = fetch_prompts.pending();

    // -- memos -- //

    let filtered = Signal::derive(move || {
        let filter = PromptFilter {
            category: category.get(),
            text: search.get(),
        };
        prompts.with(|all| filter_prompts(all, &filter))
    });

    view! {
      <section>
        <div class="container p-6 mx-auto">
          <h2 class="text-3xl font-bold tracking-tight text-gray-900">"Discover Prompts"</h2>
          <Show
            when = move || logged_in.get()
            fallback = move || view! {
              <p class="text-gray-600">
                <A href=Page::Login.path() class="underline".to_string()>"Login or sign up"</A>
                " to submit and vote on prompts."
              </p>
            }
          >
            <p class="text-gray-600">
              <A href=Page::Submit.path() class="underline".to_string()>"Submit a prompt"</A>
            </p>
          </Show>

          <div class="flex items-center my-4 space-x-4">
            <select
              class="py-2 px-3 bg-gray-50 text-gray-700 rounded"
              on:change = move |ev| {
                let value = event_target_value(&ev);
                set_category.update(|c| *c = (!value.is_empty()).then_some(value));
              }
            >
              <option value="">"All categories"</option>
              <For
                each = predefined_categories
                key = |category| category.id.clone()
                children = move |category| view! {
                  <option value={ category.id }>{ category.name }</option>
                }
              />
            </select>
            <input
              type="search"
              class="w-full max-w-md py-2 px-3 bg-gray-50 text-gray-700 outline-none rounded"
              placeholder="Search prompts"
              on:keyup = move |ev| {
                let value = event_target_value(&ev);
                set_search.update(|s| *s = value);
              }
            />
          </div>

          { move || loading.get().then(|| view! { <p class="text-gray-500">"Loading prompts..."</p> }) }
          { move || fetch_error.get().map(|err| view! {
              <p class="text-red-700">"Error loading prompts: " { err }</p>
          })}
          { move || (!loading.get() && fetch_error.get().is_none() && filtered.with(Vec::is_empty)).then(|| {
              let hint = if prompts.with(Vec::is_empty) {
                  "No prompts found. Be the first to submit one!"
              } else {
                  "No prompts found. Try adjusting your filters."
              };
              view! { <p class="text-gray-500">{ hint }</p> }
          })}

          <PromptList prompts = filtered />
        </div>
      </section>
    }
}
