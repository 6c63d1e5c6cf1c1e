use dioxus::prelude::*;

use views::{Home, Profiles, Species};

#[cfg(feature = "server")]
mod gate;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/species")]
    Species {},
    #[route("/profiles")]
    Profiles {},
}

fn main() {
    #[cfg(feature = "server")]
    {
        init_tracing();

        let runtime = tokio::runtime::Runtime::new().expect("Failed to start Tokio runtime");
        if let Err(e) = runtime.block_on(launch_server()) {
            tracing::error!("Server failed: {:#}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(feature = "server")]
async fn launch_server() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::middleware;
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    let settings = api::settings::Settings::new().context("Failed to load settings")?;

    let pool = api::db::get_pool()
        .await
        .context("Failed to connect to database")?;

    // Sessions live in the hosted database next to the collections
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .context("Failed to migrate session store")?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(settings.session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(settings.session.days.max(1))));

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        // Runs inside the session layer so it can read the viewer
        .layer(middleware::from_fn(gate::require_session))
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: ui::MAIN_CSS }

        Router::<Route> {}
    }
}
