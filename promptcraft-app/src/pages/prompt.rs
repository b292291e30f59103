use leptos::*;
use leptos_router::*;

use promptcraft_boundary::{Comment, Prompt, VoteCounts, VoteDirection};
use promptcraft_core::vote::{reconcile, Reconciliation, RecordOp, VoteState};
use promptcraft_frontend_api::{PublicApi, UserApi};

use crate::{
    categories::category_name,
    components::*,
    copy_to_clipboard,
    util::{format_timestamp, short_author},
    Page,
};

#[component]
pub fn PromptDetail(public_api: PublicApi, user_api: Signal<Option<UserApi>>) -> impl IntoView {
    // -- signals -- //

    let params = use_params_map();
    let prompt = create_rw_signal(None::<Prompt>);
    let my_vote = create_rw_signal(VoteState::None);
    let comments = create_rw_signal(Vec::<Comment>::new());
    let (load_error, set_load_error) = create_signal(None::<String>);
    let (vote_error, set_vote_error) = create_signal(None::<String>);

    // -- actions -- //

    let fetch_prompt = create_action(move |id: &String| {
        let id = id.to_owned();
        async move {
            match public_api.prompt(&id).await {
                Ok(p) => {
                    prompt.update(|x| *x = Some(p));
                    set_load_error.update(|e| *e = None);
                }
                Err(err) => {
                    log::warn!("Unable to fetch prompt {id}: {err}");
                    set_load_error.update(|e| *e = Some(err.to_string()));
                    return;
                }
            }
            match public_api.comments(&id).await {
                Ok(list) => {
                    comments.update(|c| *c = list);
                }
                Err(err) => {
                    log::warn!("Unable to fetch comments of prompt {id}: {err}");
                }
            }
        }
    });

    let fetch_my_vote = create_action(move |(api, id): &(UserApi, String)| {
        let api = api.clone();
        let id = id.to_owned();
        async move {
            match api.my_vote(&id).await {
                Ok(Some(vote)) => match VoteDirection::try_from(vote.direction) {
                    Ok(direction) => {
                        my_vote.update(|v| *v = VoteState::Voted(direction));
                    }
                    Err(err) => {
                        log::warn!("Ignoring malformed vote record: {err}");
                    }
                },
                Ok(None) => {
                    my_vote.update(|v| *v = VoteState::None);
                }
                Err(err) => {
                    log::warn!("Unable to fetch own vote: {err}");
                }
            }
        }
    });

    // A vote round trip is one record mutation followed by one counter
    // update. The personal state is applied optimistically and reverted if
    // either call fails; a failed counter update leaves the remote counters
    // stale relative to the vote-record table (there is no compensating
    // transaction).
    let vote = create_action(move |direction: &VoteDirection| {
        let direction = *direction;
        async move {
            let Some(api) = user_api.get_untracked() else {
                set_vote_error.update(|e| *e = Some("You must be logged in to vote.".to_string()));
                return;
            };
            let Some(current) = prompt.get_untracked() else {
                return;
            };
            let previous = my_vote.get_untracked();
            let Reconciliation {
                counts,
                vote,
                record,
            } = reconcile(
                VoteCounts {
                    up: current.upvotes,
                    down: current.downvotes,
                },
                previous,
                direction,
            );
            my_vote.update(|v| *v = vote);
            let stored = match record {
                RecordOp::Upsert(direction) => api.place_vote(&current.id, direction).await,
                RecordOp::Delete => api.retract_vote(&current.id).await,
            };
            if let Err(err) = stored {
                log::warn!("Unable to store vote on prompt {}: {err}", current.id);
                my_vote.update(|v| *v = previous);
                set_vote_error.update(|e| *e = Some(format!("Unable to store your vote: {err}")));
                return;
            }
            match api.update_vote_counts(&current.id, &counts).await {
                Ok(updated) => {
                    prompt.update(|p| *p = Some(updated));
                    set_vote_error.update(|e| *e = None);
                }
                Err(err) => {
                    log::warn!(
                        "Vote on prompt {} was stored but the counters were not updated: {err}",
                        current.id
                    );
                    my_vote.update(|v| *v = previous);
                    set_vote_error
                        .update(|e| *e = Some(format!("Unable to update the vote counts: {err}")));
                }
            }
        }
    });

    // Disabling the buttons serializes vote actions per prompt view.
    let vote_pending = vote.pending();

    let copy_prompt_text = create_action(move |text: &String| {
        let text = text.to_owned();
        async move {
            if let Err(err) = copy_to_clipboard(&text).await {
                log::warn!("Unable to copy prompt text: {err}");
            }
        }
    });

    // -- effects -- //

    create_effect(move |_| {
        if let Some(id) = params.with(|p| p.get("id").cloned()) {
            fetch_prompt.dispatch(id);
        }
    });

    create_effect(move |_| {
        let id = params.with(|p| p.get("id").cloned());
        if let (Some(api), Some(id)) = (user_api.get(), id) {
            fetch_my_vote.dispatch((api, id));
        } else {
            my_vote.update(|v| *v = VoteState::None);
        }
    });

    // -- callbacks -- //

    let on_vote = move |direction| vote.dispatch(direction);

    let on_comment_posted = move |comment: Comment| {
        comments.update(|c| c.push(comment));
    };

    move || {
        if let Some(p) = prompt.get() {
            let counts = VoteCounts {
                up: p.upvotes,
                down: p.downvotes,
            };
            let text = p.text.clone();
            let prompt_id = p.id.clone();
            view! {
              <section>
                <div class="container p-6 mx-auto">
                  <h2 class="text-3xl font-bold tracking-tight text-gray-900">{ p.title.clone() }</h2>
                  <p class="text-gray-600">"Category: " { category_name(p.category.as_deref()) }</p>
                  <p class="text-gray-600">"Author: " { short_author(&p.author) }</p>
                  <p class="text-gray-600">"Created: " { format_timestamp(p.created_at) }</p>

                  { move || vote_error.get().map(|err| view! {
                      <p class="text-red-700">{ err }</p>
                  })}
                  <Show
                    when = move || user_api.get().is_some()
                    fallback = move || view! {
                      <p class="text-gray-600">
                        <A href=Page::Login.path() class="underline".to_string()>"Login"</A>
                        " to vote."
                      </p>
                    }
                  >
                    <VoteButtons counts my_vote = my_vote.into() disabled = vote_pending on_vote />
                  </Show>

                  <pre class="whitespace-pre-wrap bg-gray-100 p-4 my-4 rounded">{ text.clone() }</pre>
                  <button
                    class="px-3 py-1 text-sm rounded shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50"
                    on:click = {
                      let text = text.clone();
                      move |_| copy_prompt_text.dispatch(text.clone())
                    }
                  >
                    "Copy prompt"
                  </button>

                  <CommentList comments = comments.into() />
                  <CommentForm prompt_id user_api on_posted = on_comment_posted />
                </div>
              </section>
            }
            .into_view()
        } else if let Some(err) = load_error.get() {
            view! {
              <div class="mx-auto text-center max-w-7xl px-4 mt-12 pb-16">
                <h2 class="text-3xl font-bold tracking-tight text-gray-900">"Prompt not found"</h2>
                <p class="text-gray-500">{ err }</p>
                <A href=Page::Home.path() class="underline".to_string()>"Back to home"</A>
              </div>
            }
            .into_view()
        } else {
            view! { <p class="text-gray-500 p-6">"Loading prompt..."</p> }.into_view()
        }
    }
}

#[component]
fn VoteButtons<F>(
    counts: VoteCounts,
    my_vote: Signal<VoteState>,
    disabled: ReadSignal<bool>,
    on_vote: F,
) -> impl IntoView
where
    F: Fn(VoteDirection) + 'static + Copy,
{
    view! {
      <div class="flex items-center my-4 space-x-2">
        <button
          prop:disabled = move || disabled.get()
          class = move || if my_vote.get().is_up() {
            "px-3 py-1 rounded bg-green-200"
          } else {
            "px-3 py-1 rounded bg-gray-100 hover:bg-gray-200"
          }
          on:click = move |_| on_vote(VoteDirection::Up)
        >
          { format!("Upvote ({})", counts.up) }
        </button>
        <button
          prop:disabled = move || disabled.get()
          class = move || if my_vote.get().is_down() {
            "px-3 py-1 rounded bg-red-200"
          } else {
            "px-3 py-1 rounded bg-gray-100 hover:bg-gray-200"
          }
          on:click = move |_| on_vote(VoteDirection::Down)
        >
          { format!("Downvote ({})", counts.down) }
        </button>
      </div>
    }
}
