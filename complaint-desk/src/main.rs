use anyhow::Context;
use complaint_client::{ComplaintApi, ComplaintListView};
use complaint_desk::{Config, init_logger_with_file, render};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env is optional)
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. Logging
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }

    // 3. Client
    let client_config = config.client_config();
    let http = client_config
        .build_http_client()
        .context("failed to build HTTP client")?;
    let api = ComplaintApi::new(http, client_config.session());
    if !api.session().is_authenticated() {
        tracing::warn!("COMPLAINT_API_TOKEN is not set, requests will be rejected");
    }

    // 4. Fetch and render
    let mut view = ComplaintListView::new(config.scope).with_page_size(config.page_size);
    *view.query_mut() = config.query.clone();

    tracing::info!(url = %config.api_url, scope = ?config.scope, "Complaint desk starting");
    view.load(&api)
        .await
        .with_context(|| format!("failed to load complaints from {}", config.api_url))?;

    let page = view.page();
    print!("{}", render::render_page(&page, view.query(), view.skipped_count()));

    Ok(())
}
