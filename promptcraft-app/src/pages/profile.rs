use leptos::*;
use leptos_router::*;

use promptcraft_boundary::User;

use crate::Page;

#[component]
pub fn Profile<F>(user: Signal<Option<User>>, on_logout: F) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    move || match user.get() {
        Some(user) => view! {
          <section>
            <div class="container p-6 mx-auto">
              <h2 class="text-3xl font-bold tracking-tight text-gray-900">"User Profile"</h2>
              <p class="text-gray-600">"Email: " { user.email.clone() }</p>
              { (!user.email_confirmed).then(|| view! {
                  <p class="text-gray-500">"Your email address has not been confirmed yet."</p>
              })}
              <button
                class="mt-4 px-3 py-1 rounded shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50"
                on:click = move |_| on_logout()
              >
                "Logout"
              </button>
            </div>
          </section>
        }
        .into_view(),
        None => view! {
          <section>
            <div class="container p-6 mx-auto">
              <p class="text-gray-600">
                "You are not logged in. "
                <A href=Page::Login.path() class="underline".to_string()>"Login"</A>
              </p>
            </div>
          </section>
        }
        .into_view(),
    }
}
