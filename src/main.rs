use std::sync::Arc;

use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;

use payroll_panel::api::client::BackendClient;
use payroll_panel::auth::credentials::CredentialScope;
use payroll_panel::auth::storage::LocalStorage;
use payroll_panel::config::Config;
use payroll_panel::handlers::Panel;
use payroll_panel::panel::PanelContext;
use payroll_panel::panel::filter::FilterController;
use payroll_panel::routes;
use payroll_panel::view::row::DisplaySettings;
use payroll_panel::view::screen::Screen;
use tracing::info;
use tracing_appender::rolling;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily("logs", "panel.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(backend = %config.backend_url, locale = %config.locale, "Panel starting...");

    let storage = Arc::new(
        LocalStorage::open(&config.storage_path)
            .with_context(|| format!("opening {}", config.storage_path.display()))?,
    );
    let client = BackendClient::new(&config.backend_url, CredentialScope::Staff, storage.clone())
        .context("BACKEND_URL is not a valid url")?;

    let panel = Data::new(Panel {
        ctx: PanelContext {
            client,
            screen: Arc::new(Screen::new()),
            display: DisplaySettings {
                locale: config.locale,
                currency_suffix: config.currency_suffix.clone(),
            },
            toast_duration: config.toast_duration,
        },
        filters: FilterController::default(),
        storage,
    });

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .app_data(panel.clone())
            .configure(routes::configure)
    })
    .bind(&config.server_addr)
    .with_context(|| format!("binding {}", config.server_addr))?
    .run()
    .await?;

    Ok(())
}
