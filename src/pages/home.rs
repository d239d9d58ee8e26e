//! Landing page showing the session's identity and a logout action.

use leptos::prelude::*;

use crate::context::AuthContext;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let authenticated = auth.session.is_authenticated();
    let user = auth.session.current_user();
    let session = auth.session.clone();
    let login_href = auth.config.paths.login.clone();
    let register_href = auth.config.paths.register.clone();

    let display_name = move || user.get().map(|u| u.username).filter(|name| !name.is_empty());

    view! {
        <div class="home-page">
            <Show
                when=move || authenticated.get()
                fallback=move || view! {
                    <p class="home-page__guest">
                        <a href=login_href.clone()>"Sign in"</a>
                        " or "
                        <a href=register_href.clone()>"create an account"</a>
                    </p>
                }
            >
                <p class="home-page__user">
                    "Signed in as "
                    <span>{move || display_name().unwrap_or_else(|| "…".to_owned())}</span>
                </p>
                <button class="btn" on:click={
                    let session = session.clone();
                    move |_| session.logout()
                }>
                    "Log out"
                </button>
            </Show>
        </div>
    }
}
