use leptos::*;

use promptcraft_boundary::{Comment, NewComment};
use promptcraft_frontend_api::UserApi;

use crate::util::{format_timestamp, short_author};

#[component]
pub fn CommentList(comments: Signal<Vec<Comment>>) -> impl IntoView {
    view! {
      <div class="mt-6">
        <h4 class="text-base font-semibold leading-6 text-gray-900">"Comments"</h4>
        { move || comments.with(Vec::is_empty).then(|| view! {
            <p class="text-gray-500">"No comments yet. Be the first to comment!"</p>
        })}
        <ul class="divide-y divide-gray-100">
          <For
            each = move || comments.get()
            key = |comment| comment.id.clone()
            children = move |comment| {
              view! { <li class="py-3"><CommentListElement comment /></li> }
            }
          />
        </ul>
      </div>
    }
}

#[component]
fn CommentListElement(comment: Comment) -> impl IntoView {
    let Comment {
        author,
        created_at,
        text,
        ..
    } = comment;

    view! {
      <div class="text-xs text-gray-500">
        { short_author(&author) } " on " { format_timestamp(created_at) }
      </div>
      <p class="text-gray-700">{ text }</p>
    }
}

#[component]
pub fn CommentForm<F>(
    prompt_id: String,
    user_api: Signal<Option<UserApi>>,
    on_posted: F,
) -> impl IntoView
where
    F: Fn(Comment) + 'static + Copy,
{
    let (text, set_text) = create_signal(String::new());
    let (post_error, set_post_error) = create_signal(None::<String>);

    let new_comment = Signal::derive(move || {
        text.with(|text| {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            Some(NewComment {
                text: text.to_owned(),
            })
        })
    });

    let post = create_action(move |(prompt_id, comment): &(String, NewComment)| {
        let prompt_id = prompt_id.to_owned();
        let comment = comment.to_owned();
        async move {
            let Some(api) = user_api.get_untracked() else {
                set_post_error
                    .update(|e| *e = Some("You must be logged in to comment.".to_string()));
                return;
            };
            match api.post_comment(&prompt_id, &comment).await {
                Ok(posted) => {
                    set_post_error.update(|e| *e = None);
                    set_text.update(String::clear);
                    on_posted(posted);
                }
                Err(err) => {
                    log::warn!("Unable to post comment on prompt {prompt_id}: {err}");
                    set_post_error.update(|e| *e = Some(err.to_string()));
                }
            }
        }
    });

    let disabled = Signal::derive(move || post.pending().get() || new_comment.get().is_none());

    let on_post = move || {
        if let Some(comment) = new_comment.get_untracked() {
            post.dispatch((prompt_id.clone(), comment));
        }
    };

    move || match user_api.get() {
        Some(_) => {
            let on_post = on_post.clone();
            view! {
              <form class="mt-4" on:submit=|ev| ev.prevent_default()>
                <h4 class="text-base font-semibold leading-6 text-gray-900">"Leave a Comment"</h4>
                { move || post_error.get().map(|err| view! {
                    <p class="text-red-700">{ err }</p>
                })}
                <textarea
                  rows=3
                  required
                  placeholder="Write your comment..."
                  prop:value = move || text.get()
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
                <button
                  prop:disabled = move || disabled.get()
                  on:click = move |_| on_post()
                  class="mt-2 px-3 py-1 rounded shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50"
                >
                  { move || if post.pending().get() { "Posting..." } else { "Post Comment" } }
                </button>
              </form>
            }
            .into_view()
        }
        None => view! {
          <p class="mt-4 text-gray-600">"Login to post a comment."</p>
        }
        .into_view(),
    }
}
