use dioxus::prelude::*;

use crate::shared::types::{
    ApodDto, ClimateMetricDto, DebrisDto, EventsPayload, OrbitHealthDto, SatelliteDto,
};

// Every route regenerates its payload per request; `seed` pins the RNG for
// reproducible output and is None for normal widget traffic.

#[server(ClimateMetrics)]
pub async fn climate_metrics(seed: Option<u64>) -> Result<Vec<ClimateMetricDto>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::telemetry;
        let mut rng = telemetry::rng_for(seed);
        Ok(telemetry::generate_climate(&mut rng))
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = seed;
        Ok(vec![])
    }
}

#[server(ListSatellites)]
pub async fn list_satellites(seed: Option<u64>) -> Result<Vec<SatelliteDto>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::telemetry;
        let mut rng = telemetry::rng_for(seed);
        Ok(telemetry::generate_satellites(&mut rng))
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = seed;
        Ok(vec![])
    }
}

#[server(ListDebris)]
pub async fn list_debris(seed: Option<u64>) -> Result<Vec<DebrisDto>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::telemetry;
        let mut rng = telemetry::rng_for(seed);
        Ok(telemetry::generate_debris(&mut rng))
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = seed;
        Ok(vec![])
    }
}

#[server(OrbitHealth)]
pub async fn orbit_health(seed: Option<u64>) -> Result<OrbitHealthDto, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::telemetry;
        let mut rng = telemetry::rng_for(seed);
        Ok(telemetry::orbit_health_snapshot(&mut rng))
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = seed;
        Err(ServerFnError::ServerError(
            "orbit health is computed on the server".into(),
        ))
    }
}

#[server(EonetEvents)]
pub async fn eonet_events() -> Result<EventsPayload, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::{nasa, GLOBAL_CONFIG};

        let Some(cfg) = GLOBAL_CONFIG.get() else {
            eprintln!("eonet_events: NASA config not initialized");
            return Ok(EventsPayload {
                events: Vec::new(),
                message: Some(nasa::DEGRADED_EVENTS_MESSAGE.to_string()),
            });
        };
        Ok(nasa::fetch_eonet_events(cfg).await)
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(EventsPayload {
            events: Vec::new(),
            message: None,
        })
    }
}

#[server(NasaApod)]
pub async fn nasa_apod() -> Result<Option<ApodDto>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::{nasa, GLOBAL_CONFIG};

        let Some(cfg) = GLOBAL_CONFIG.get() else {
            eprintln!("nasa_apod: NASA config not initialized");
            return Err(ServerFnError::ServerError(
                "NASA config not initialized".into(),
            ));
        };
        match nasa::fetch_apod(cfg).await {
            Ok(apod) => Ok(apod),
            Err(e) => {
                eprintln!("nasa_apod upstream error: {e}");
                Err(ServerFnError::ServerError("Failed to fetch APOD data".into()))
            }
        }
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(None)
    }
}

#[server(NasaNeoFeed)]
pub async fn nasa_neo_feed(
    start_date: Option<String>,
    end_date: Option<String>,
) -> Result<serde_json::Value, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::{nasa, GLOBAL_CONFIG};

        let Some(cfg) = GLOBAL_CONFIG.get() else {
            eprintln!("nasa_neo_feed: NASA config not initialized");
            return Err(ServerFnError::ServerError(
                "NASA config not initialized".into(),
            ));
        };
        match nasa::fetch_neo_feed(cfg, start_date.as_deref(), end_date.as_deref()).await {
            Ok(feed) => Ok(feed),
            Err(e) => {
                eprintln!("nasa_neo_feed upstream error: {e}");
                Err(ServerFnError::ServerError("Failed to fetch NEO data".into()))
            }
        }
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = (start_date, end_date);
        Ok(serde_json::json!({ "near_earth_objects": {} }))
    }
}
