use leptos::*;
use leptos_router::*;

use promptcraft_boundary::NewPrompt;
use promptcraft_frontend_api::UserApi;

use crate::{categories::predefined_categories, Page};

#[component]
pub fn Submit(user_api: Signal<Option<UserApi>>) -> impl IntoView {
    // -- signals -- //

    let (title, set_title) = create_signal(String::new());
    let (text, set_text) = create_signal(String::new());
    let (category, set_category) = create_signal(None::<String>);
    let (submit_error, set_submit_error) = create_signal(None::<String>);

    // -- memos -- //

    let new_prompt = Signal::derive(move || {
        title.with(|title| {
            let title = title.trim();
            if title.is_empty() {
                return None;
            }
            text.with(|text| {
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                Some(NewPrompt {
                    title: title.to_owned(),
                    text: text.to_owned(),
                    category: category.get(),
                })
            })
        })
    });

    // -- actions -- //

    let submit = create_action(move |new_prompt: &NewPrompt| {
        let new_prompt = new_prompt.to_owned();
        async move {
            let Some(api) = user_api.get_untracked() else {
                set_submit_error
                    .update(|e| *e = Some("You must be logged in to submit a prompt.".to_string()));
                return;
            };
            match api.create_prompt(&new_prompt).await {
                Ok(prompt) => {
                    log::info!("Submitted new prompt {}", prompt.id);
                    set_submit_error.update(|e| *e = None);
                    let navigate = use_navigate();
                    navigate(
                        &format!("{}/{}", Page::Prompts.path(), prompt.id),
                        NavigateOptions::default(),
                    );
                }
                Err(err) => {
                    log::warn!("Unable to submit prompt: {err}");
                    set_submit_error.update(|e| *e = Some(err.to_string()));
                }
            }
        }
    });

    let disabled = Signal::derive(move || submit.pending().get() || new_prompt.get().is_none());

    // -- callbacks -- //

    let on_submit = move || {
        if let Some(prompt) = new_prompt.get_untracked() {
            submit.dispatch(prompt);
        }
    };

    view! {
      <section>
        <div class="container p-6 mx-auto max-w-2xl">
          <h2 class="text-3xl font-bold tracking-tight text-gray-900">"Submit a New Prompt"</h2>
          <Show
            when = move || user_api.get().is_some()
            fallback = move || view! {
              <p class="text-gray-600">
                <A href=Page::Login.path() class="underline".to_string()>"Login"</A>
                " to submit a prompt."
              </p>
            }
          >
            <form on:submit=|ev| ev.prevent_default()>
              { move || submit_error.get().map(|err| view! {
                  <p class="mb-4 text-red-700">{ err }</p>
              })}
              <div class="mb-4">
                <input
                  type = "text"
                  required
                  placeholder = "Title"
                  class="block w-full px-3 py-1.5 text-gray-700 bg-white border border-solid border-gray-300 rounded"
                  on:keyup = move |ev| {
                    let value = event_target_value(&ev);
                    set_title.update(|t| *t = value);
                  }
                  on:change = move |ev| {
                    let value = event_target_value(&ev);
                    set_title.update(|t| *t = value);
                  }
                />
              </div>
              <div class="mb-4">
                <textarea
                  required
                  rows=5
                  placeholder = "Prompt text"
                  class="block w-full px-3 py-1.5 text-gray-700 bg-white border border-solid border-gray-300 rounded"
                  on:keyup = move |ev| {
                    let value = event_target_value(&ev);
                    set_text.update(|t| *t = value);
                  }
                  on:change = move |ev| {
                    let value = event_target_value(&ev);
                    set_text.update(|t| *t = value);
                  }
                ></textarea>
              </div>
              <div class="mb-4">
                <select
                  class="py-2 px-3 bg-gray-50 text-gray-700 rounded"
                  on:change = move |ev| {
                    let value = event_target_value(&ev);
                    set_category.update(|c| *c = (!value.is_empty()).then_some(value));
                  }
                >
                  <option value="">"Select a category (optional)"</option>
                  <For
                    each = predefined_categories
                    key = |category| category.id.clone()
                    children = move |category| view! {
                      <option value={ category.id }>{ category.name }</option>
                    }
                  />
                </select>
              </div>
              <button
                prop:disabled = move || disabled.get()
                on:click = move |_| on_submit()
                class="inline-block px-6 py-2.5 font-medium text-xs leading-tight uppercase rounded shadow-md bg-gray-200 hover:bg-gray-300"
              >
                { move || if submit.pending().get() { "Submitting..." } else { "Submit Prompt" } }
              </button>
            </form>
          </Show>
        </div>
      </section>
    }
}
