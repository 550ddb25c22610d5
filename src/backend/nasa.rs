#![cfg(feature = "server")]
use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::error::Error as _;
use tracing::{info, warn};

use crate::backend::config::NasaConfig;
use crate::shared::types::{
    ApodDto, EventCategoryDto, EventDto, EventGeometryDto, EventsPayload,
};

static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .connect_timeout(std::time::Duration::from_secs(2))
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .expect("client")
});

pub const DEGRADED_EVENTS_MESSAGE: &str = "Using cached data due to API unavailability";

pub async fn fetch_nasa<T: DeserializeOwned>(
    cfg: &NasaConfig,
    path: &str,
    params: &[(&str, &str)],
) -> Result<T> {
    let url = format!("{}{}", cfg.base_url, path);
    info!("[nasa] GET {}", url);
    let req = CLIENT
        .get(&url)
        .query(&[("api_key", cfg.api_key.as_str())])
        .query(params)
        .header("Cache-Control", "no-store");
    let res = match tokio::time::timeout(cfg.upstream_timeout, req.send()).await {
        Ok(Ok(r)) => r,
        Ok(Err(e)) => {
            warn!("[nasa] request error on GET {}: {}", url, e);
            if e.is_connect() {
                warn!("[nasa] hint: connection failed (DNS/route/refused/TLS)");
            }
            let mut chain = Vec::new();
            let mut src: Option<&dyn std::error::Error> = e.source();
            while let Some(s) = src {
                chain.push(s.to_string());
                src = s.source();
            }
            if !chain.is_empty() {
                warn!("[nasa] error chain: {}", chain.join(" -> "));
            }
            return Err(anyhow!("sending GET {}: {}", url, e));
        }
        Err(_elapsed) => {
            warn!(
                "[nasa] GET {} exceeded the {:?} upstream deadline",
                url, cfg.upstream_timeout
            );
            return Err(anyhow!("GET {} timed out", url));
        }
    };
    if !res.status().is_success() {
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        let snip = text.chars().take(300).collect::<String>();
        warn!("[nasa] GET {} failed: status={} body={}", url, status, snip);
        return Err(anyhow!("GET {} failed with status {}", url, status));
    }
    let bytes = res
        .bytes()
        .await
        .with_context(|| format!("reading body from GET {}", url))?;
    let data: T = serde_json::from_slice(&bytes).map_err(|e| {
        let snip = String::from_utf8_lossy(&bytes);
        let snip = snip.chars().take(300).collect::<String>();
        anyhow!(
            "decoding JSON from GET {} failed: {}\nBody snippet: {}",
            url,
            e,
            snip
        )
    })?;
    Ok(data)
}

/// The canned natural-events set served in mock mode.
pub fn mock_eonet_events() -> EventsPayload {
    let now = Utc::now().to_rfc3339();
    let event = |id: &str,
                 title: &str,
                 description: &str,
                 cat_id: &str,
                 cat_title: &str,
                 lon: f64,
                 lat: f64| EventDto {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        categories: vec![EventCategoryDto {
            id: cat_id.to_string(),
            title: cat_title.to_string(),
        }],
        geometry: vec![EventGeometryDto {
            date: now.clone(),
            coordinates: serde_json::json!([lon, lat]),
        }],
    };
    EventsPayload {
        events: vec![
            event(
                "EONET_6789",
                "Wildfire - California, USA",
                "Active wildfire detected in Northern California",
                "wildfires",
                "Wildfires",
                -122.4,
                37.8,
            ),
            event(
                "EONET_6790",
                "Severe Storm - Atlantic Ocean",
                "Tropical storm system developing in the Atlantic",
                "severeStorms",
                "Severe Storms",
                -45.2,
                28.5,
            ),
            event(
                "EONET_6791",
                "Volcanic Activity - Indonesia",
                "Increased volcanic activity detected",
                "volcanoes",
                "Volcanoes",
                110.4,
                -7.5,
            ),
            event(
                "EONET_6792",
                "Iceberg - Antarctica",
                "Large iceberg calving event detected",
                "seaLakeIce",
                "Sea and Lake Ice",
                -45.0,
                -70.5,
            ),
            event(
                "EONET_6793",
                "Drought - East Africa",
                "Severe drought conditions persisting",
                "drought",
                "Drought",
                40.5,
                2.0,
            ),
        ],
        message: None,
    }
}

/// Never fails: mock mode serves the canned set, a live upstream failure
/// degrades to an empty event list plus a message so the client keeps a 200.
pub async fn fetch_eonet_events(cfg: &NasaConfig) -> EventsPayload {
    if !cfg.live_upstream {
        info!("[nasa] mock mode, serving canned EONET events (set USE_REAL_NASA_API=true for live data)");
        return mock_eonet_events();
    }
    match fetch_nasa::<EventsPayload>(
        cfg,
        "/EONET/api/v3/events",
        &[("limit", "20"), ("status", "open")],
    )
    .await
    {
        Ok(payload) => payload,
        Err(e) => {
            warn!("[nasa] EONET unavailable: {e}");
            EventsPayload {
                events: Vec::new(),
                message: Some(DEGRADED_EVENTS_MESSAGE.to_string()),
            }
        }
    }
}

pub async fn fetch_apod(cfg: &NasaConfig) -> Result<Option<ApodDto>> {
    if !cfg.live_upstream {
        info!("[nasa] mock mode, APOD not available");
        return Ok(None);
    }
    let apod = fetch_nasa::<ApodDto>(cfg, "/planetary/apod", &[]).await?;
    Ok(Some(apod))
}

/// The NEO feed passes straight through; only the date window is defaulted
/// (today through today + 7 days).
pub async fn fetch_neo_feed(
    cfg: &NasaConfig,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<serde_json::Value> {
    if !cfg.live_upstream {
        info!("[nasa] mock mode, serving empty NEO feed");
        return Ok(serde_json::json!({ "near_earth_objects": {} }));
    }
    let today = Utc::now().date_naive();
    let start = match start_date {
        Some(s) => s.to_string(),
        None => today.to_string(),
    };
    let end = match end_date {
        Some(s) => s.to_string(),
        None => (today + chrono::Duration::days(7)).to_string(),
    };
    fetch_nasa(
        cfg,
        "/neo/rest/v1/feed",
        &[("start_date", start.as_str()), ("end_date", end.as_str())],
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn unreachable_live_config() -> NasaConfig {
        NasaConfig {
            api_key: "DEMO_KEY".to_string(),
            // nothing listens here, so the connect fails immediately
            base_url: "http://127.0.0.1:9".to_string(),
            live_upstream: true,
            upstream_timeout: Duration::from_secs(2),
        }
    }

    #[test]
    fn mock_event_set_has_five_events() {
        let payload = mock_eonet_events();
        assert_eq!(payload.events.len(), 5);
        assert!(payload.message.is_none());
        assert!(payload.events.iter().all(|e| !e.categories.is_empty()));
    }

    #[tokio::test]
    async fn mock_mode_never_touches_the_network() {
        let cfg = NasaConfig::mock();
        let payload = fetch_eonet_events(&cfg).await;
        assert_eq!(payload.events.len(), 5);

        let apod = fetch_apod(&cfg).await.unwrap();
        assert!(apod.is_none());

        let neo = fetch_neo_feed(&cfg, None, None).await.unwrap();
        assert_eq!(neo["near_earth_objects"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn eonet_upstream_failure_degrades_to_empty_events() {
        let cfg = unreachable_live_config();
        let payload = fetch_eonet_events(&cfg).await;
        assert!(payload.events.is_empty());
        assert_eq!(payload.message.as_deref(), Some(DEGRADED_EVENTS_MESSAGE));
    }

    #[tokio::test]
    async fn apod_upstream_failure_is_an_error() {
        let cfg = unreachable_live_config();
        assert!(fetch_apod(&cfg).await.is_err());
    }
}
