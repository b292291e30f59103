use leptos::*;

use promptcraft_boundary::ContributionCount;
use promptcraft_core::leaderboard::{upvote_leaders, UpvoteTotal};
use promptcraft_frontend_api::PublicApi;

use crate::{util::short_author, LEADERBOARD_SIZE};

#[component]
pub fn Leaderboard(public_api: PublicApi) -> impl IntoView {
    // -- signals -- //

    let contributors = create_rw_signal(Vec::<ContributionCount>::new());
    let upvote_totals = create_rw_signal(Vec::<UpvoteTotal>::new());
    let (fetch_error, set_fetch_error) = create_signal(None::<String>);

    // -- actions -- //

    // The contribution board is aggregated by the backend; the upvote board
    // is summed client-side over the fetched prompt list.
    let fetch_leaderboards = create_action(move |()| async move {
        match public_api.top_contributors(LEADERBOARD_SIZE).await {
            Ok(list) => {
                contributors.update(|c| *c = list);
            }
            Err(err) => {
                log::warn!("Unable to fetch contribution leaderboard: {err}");
                set_fetch_error.update(|e| *e = Some(err.to_string()));
            }
        }
        match public_api.prompts().await {
            Ok(prompts) => {
                upvote_totals.update(|t| *t = upvote_leaders(&prompts, LEADERBOARD_SIZE));
            }
            Err(err) => {
                log::warn!("Unable to fetch prompts for the upvote leaderboard: {err}");
                set_fetch_error.update(|e| *e = Some(err.to_string()));
            }
        }
    });
    fetch_leaderboards.dispatch(());

    let loading = fetch_leaderboards.pending();

    view! {
      <section>
        <div class="container p-6 mx-auto">
          <h2 class="text-3xl font-bold tracking-tight text-gray-900">"Leaderboards"</h2>

          { move || loading.get().then(|| view! { <p class="text-gray-500">"Loading leaderboards..."</p> }) }
          { move || fetch_error.get().map(|err| view! {
              <p class="text-red-700">"Error loading leaderboards: " { err }</p>
          })}

          <div class="mb-8">
            <h3 class="text-base font-semibold leading-6 text-gray-900">"Top Contributors (Most Prompts)"</h3>
            { move || contributors.with(Vec::is_empty).then(|| view! {
                <p class="text-gray-500">"No contribution data available yet."</p>
            })}
            <ol class="list-decimal list-inside">
              <For
                each = move || contributors.get()
                key = |row| row.0.clone()
                children = move |ContributionCount(author, count)| view! {
                  <li class="text-gray-700">
                    { short_author(&author) } " - " { count } " prompts"
                  </li>
                }
              />
            </ol>
          </div>

          <div>
            <h3 class="text-base font-semibold leading-6 text-gray-900">"Top Rated Users (Most Upvotes)"</h3>
            { move || upvote_totals.with(Vec::is_empty).then(|| view! {
                <p class="text-gray-500">"No upvote data available yet."</p>
            })}
            <ol class="list-decimal list-inside">
              <For
                each = move || upvote_totals.get()
                key = |row| row.author.clone()
                children = move |row| view! {
                  <li class="text-gray-700">
                    { short_author(&row.author) } " - " { row.total } " total upvotes"
                  </li>
                }
              />
            </ol>
          </div>
        </div>
      </section>
    }
}
