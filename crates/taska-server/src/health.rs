//! Health checks

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use taska_store::ProjectStore;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Health check status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy | Self::Degraded)
    }
}

/// Individual component health
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub response_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Overall health report
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: Vec<ComponentHealth>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HealthReport {
    pub fn http_status(&self) -> StatusCode {
        match self.status {
            HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HealthConfig {
    /// Timeout for a single component check
    pub check_timeout: Duration,
    /// How long a report is served from cache
    pub cache_duration: Duration,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            check_timeout: Duration::from_secs(5),
            cache_duration: Duration::from_secs(10),
        }
    }
}

struct CachedHealth {
    report: HealthReport,
    cached_at: Instant,
}

/// Health checker service
pub struct HealthChecker {
    config: HealthConfig,
    start_time: Instant,
    cache: RwLock<Option<CachedHealth>>,
    store: Arc<dyn ProjectStore>,
}

impl HealthChecker {
    pub fn new(config: HealthConfig, store: Arc<dyn ProjectStore>) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            cache: RwLock::new(None),
            store,
        }
    }

    /// Get cached health or perform checks
    pub async fn check(&self) -> HealthReport {
        {
            let cache = self.cache.read().await;
            if let Some(ref cached) = *cache {
                if cached.cached_at.elapsed() < self.config.cache_duration {
                    debug!("Returning cached health report");
                    return cached.report.clone();
                }
            }
        }

        let report = self.perform_checks().await;

        let mut cache = self.cache.write().await;
        *cache = Some(CachedHealth {
            report: report.clone(),
            cached_at: Instant::now(),
        });

        report
    }

    async fn perform_checks(&self) -> HealthReport {
        let store_health = self.check_store().await;
        let status = store_health.status;

        HealthReport {
            status,
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            components: vec![store_health],
            timestamp: chrono::Utc::now(),
        }
    }

    async fn check_store(&self) -> ComponentHealth {
        let start = Instant::now();

        let (status, message, details) =
            match tokio::time::timeout(self.config.check_timeout, self.store.count()).await {
                Ok(Ok(projects)) => (
                    HealthStatus::Healthy,
                    "Store reachable".to_string(),
                    Some(serde_json::json!({ "projects": projects })),
                ),
                Ok(Err(e)) => {
                    warn!(error = %e, "Project store check failed");
                    (HealthStatus::Unhealthy, e.to_string(), None)
                }
                Err(_) => {
                    warn!("Project store check timed out");
                    (HealthStatus::Degraded, "Store check timed out".to_string(), None)
                }
            };

        ComponentHealth {
            name: "store".to_string(),
            status,
            message: Some(message),
            response_time_ms: start.elapsed().as_millis() as u64,
            details,
        }
    }
}

/// Simple liveness check
pub async fn liveness() -> &'static str {
    "OK"
}

/// Readiness check
pub async fn readiness(State(health): State<Arc<HealthChecker>>) -> StatusCode {
    health.check().await.http_status()
}

/// Full health report
pub async fn health(State(health): State<Arc<HealthChecker>>) -> (StatusCode, Json<HealthReport>) {
    let report = health.check().await;
    (report.http_status(), Json(report))
}
