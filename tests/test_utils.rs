#![allow(dead_code)]

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use portfolio_site::{
    content::ContentCatalog,
    entities::theme::THEME_COOKIE,
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment},
    AppState,
};
use reqwest::{header, redirect::Policy, Client};
use std::{net::TcpListener, sync::Arc, time::Duration};

pub struct TestApp {
    pub state: Arc<AppState>,
    pub address: String,
    pub client: Client,
    pub config: AppConfig,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let config = test_config();
        let catalog = ContentCatalog::load().expect("Bundled content should load");
        let state = Arc::new(AppState::new(&config, catalog));

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let state_clone = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::from(state_clone.clone()))
                .wrap(NormalizePath::trim())
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(config.worker_count)
        .run();

        tokio::spawn(server);

        let client = Client::builder()
            .redirect(Policy::none())
            .build()
            .expect("Failed to build HTTP client");
        while client.get(format!("{}/api/v1/health", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            state,
            address,
            client,
            config,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_with_theme(&self, path: &str, theme: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .header(header::COOKIE, format!("{}={}", THEME_COOKIE, theme))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_text(&self, path: &str) -> String {
        self.get(path).await.text().await.expect("Failed to read body")
    }

    pub async fn get_json(&self, path: &str) -> serde_json::Value {
        self.get(path).await.json().await.expect("Failed to parse JSON")
    }

    pub async fn dispatch(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url("/api/v1/shortcuts/dispatch"))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        port: 0,
        name: "Portfolio Site Test".to_string(),
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        site_title: "Test Portfolio".to_string(),
        ..Default::default()
    }
}

/// Value of the `theme` cookie set by a response, if any.
pub fn theme_cookie_value(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|cookie| {
            let pair = cookie.split(';').next()?;
            let (name, value) = pair.split_once('=')?;
            (name.trim() == THEME_COOKIE).then(|| value.trim().to_string())
        })
}
