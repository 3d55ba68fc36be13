use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::net::TcpListener;

use crate::{
    ai::{GroqClient, KeyRing},
    classifier::Classifier,
    config::AppConfig,
    infrastructure::shutdown::Shutdown,
    keywords::KeywordCorpus,
    server::{self, SharedClassifier},
};

pub struct PhishGuardApp {
    bind_addr: String,
    classifier: SharedClassifier,
    shutdown: Shutdown,
}

impl PhishGuardApp {
    pub fn initialize(config: AppConfig, shutdown: Shutdown) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(format!("phishguard/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        let keys = KeyRing::new(config.groq.api_keys.clone())
            .context("credential configuration invalid")?;
        tracing::info!(
            target: "ai",
            keys = keys.len(),
            model = %config.groq.model,
            "Groq credential ring ready"
        );

        let corpus = KeywordCorpus::load(Path::new(&config.keywords.path));
        let backend = GroqClient::new(http_client, config.groq.model.clone());
        let classifier = Arc::new(Classifier::new(backend, keys, corpus));

        Ok(Self {
            bind_addr: config.server.bind_addr,
            classifier,
            shutdown,
        })
    }

    pub async fn run(self) -> Result<()> {
        let app = server::router(self.classifier);
        let listener = TcpListener::bind(&self.bind_addr)
            .await
            .with_context(|| format!("failed to bind {}", self.bind_addr))?;
        tracing::info!(
            target: "http",
            addr = %self.bind_addr,
            "phishing classification service listening"
        );

        let shutdown = self.shutdown;
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.wait().await })
            .await
            .context("classification server error")?;

        tracing::info!("server stopped");
        Ok(())
    }
}
