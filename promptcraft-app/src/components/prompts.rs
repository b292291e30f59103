use leptos::*;
use leptos_router::*;

use promptcraft_boundary::Prompt;

use crate::{
    categories::category_name,
    util::{short_author, truncate_preview},
    Page,
};

#[component]
pub fn PromptList(prompts: Signal<Vec<Prompt>>) -> impl IntoView {
    view! {
      <ul>
        <For
          each = move || prompts.get()
          key = |prompt| prompt.id.clone()
          children = move |prompt| {
            view! { <li class="mb-3"><PromptCard prompt /></li> }
          }
        />
      </ul>
    }
}

#[component]
fn PromptCard(prompt: Prompt) -> impl IntoView {
    let Prompt {
        id,
        title,
        text,
        category,
        author,
        upvotes,
        downvotes,
        ..
    } = prompt;
    let href = format!("{}/{id}", Page::Prompts.path());

    view! {
      <div class="border border-gray-300 rounded p-4">
        <div class="font-bold text-lg hover:text-gray-600">
          <a href={ href }>{ title }</a>
        </div>
        <div class="text-xs text-gray-500">
          { category_name(category.as_deref()) }
          " | by "
          { short_author(&author) }
          " | "
          { upvotes } " up / " { downvotes } " down"
        </div>
        <div class="text-gray-600">{ truncate_preview(&text) }</div>
      </div>
    }
}
