use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::Client;
use tokio::net::TcpListener;

use gitops_demo_rs::config::{EnvironmentSource, StaticEnvironment};
use gitops_demo_rs::{create_app, init_observability};

static INIT_LOGGING: Lazy<()> = Lazy::new(|| {
    // Ignore the error when another test binary thread got there first
    let _ = init_observability("info", false);
});

pub struct TestEnvironment {
    pub client: Client,
    pub base_url: String,
}

impl TestEnvironment {
    /// Serve the real application with a fixed deployment environment.
    pub async fn new(environment: &str) -> Self {
        Self::with_source(Arc::new(StaticEnvironment::new(environment))).await
    }

    /// Serve the real application with an arbitrary environment source.
    pub async fn with_source(environment: Arc<dyn EnvironmentSource>) -> Self {
        Lazy::force(&INIT_LOGGING);

        let app = create_app(environment);

        // Start server on an ephemeral port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local address");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Failed to serve app");
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::new();

        Self { client, base_url }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("Failed to send request")
    }
}
