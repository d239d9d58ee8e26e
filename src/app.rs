//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::config::ClientConfig;
use crate::context::AuthContext;
use crate::nav::navigator::{SignalNavigator, browser_path};
use crate::nav::routes::RouteTable;
use crate::net::transport::GlooTransport;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::storage::{BrowserStorage, CredentialStorage};
use crate::util::auth::{install_redirect_listener, install_route_guard};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session context once, bootstraps the session with
/// `check_auth`, and mounts the router with the guard installed.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let navigator = SignalNavigator::new(&browser_path());
    let storage: Arc<dyn CredentialStorage> = Arc::new(BrowserStorage::new(config.token_storage_key.clone()));
    let transport = Arc::new(GlooTransport::new(&config));
    let auth = AuthContext::new(config, storage, transport, RouteTable::auction(), Arc::new(navigator));

    provide_context(auth.clone());
    provide_context(navigator);

    #[cfg(feature = "hydrate")]
    {
        let session = auth.session.clone();
        leptos::task::spawn_local(async move { session.check_auth().await });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }

    view! {
        <Title text="Auction"/>

        <Router>
            <SessionGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
            </Routes>
        </Router>
    }
}

/// Router-scoped hooks: guard every location change and drain redirects
/// queued by auth invalidation.
#[component]
fn SessionGuard() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigator = expect_context::<SignalNavigator>();
    let location = use_location();
    let navigate = use_navigate();

    install_route_guard(
        auth.guard.clone(),
        navigator,
        location.pathname,
        auth.session.is_authenticated(),
        navigate.clone(),
    );
    install_redirect_listener(navigator, navigate);
}
