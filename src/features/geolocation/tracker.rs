use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;

use crate::features::cities::models::Position;
use crate::shared::constants::MSG_GEOLOCATION_UNSUPPORTED;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeolocationError {
    #[error("{}", MSG_GEOLOCATION_UNSUPPORTED)]
    Unsupported,

    #[error("{0}")]
    Sensor(String),
}

/// Source of the device's current coordinates
#[async_trait]
pub trait PositionSensor: Send + Sync {
    async fn current_position(&self) -> Result<Position, GeolocationError>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeolocationState {
    pub position: Option<Position>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Tracks a single view's position request
pub struct GeolocationTracker {
    sensor: Option<Arc<dyn PositionSensor>>,
    state: watch::Sender<GeolocationState>,
}

impl GeolocationTracker {
    /// `sensor` is None on devices without geolocation support
    pub fn new(sensor: Option<Arc<dyn PositionSensor>>, default_position: Option<Position>) -> Self {
        let (state, _) = watch::channel(GeolocationState {
            position: default_position,
            ..Default::default()
        });

        Self { sensor, state }
    }

    pub fn snapshot(&self) -> GeolocationState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<GeolocationState> {
        self.state.subscribe()
    }

    /// Ask the sensor once; the outcome is reflected in the tracker state
    pub async fn get_position(&self) {
        let Some(sensor) = self.sensor.as_ref() else {
            tracing::warn!("Geolocation requested but no sensor is available");
            self.state.send_modify(|state| {
                state.error = Some(GeolocationError::Unsupported.to_string());
            });
            return;
        };

        self.state.send_modify(|state| state.is_loading = true);

        let result = sensor.current_position().await;

        self.state.send_modify(|state| {
            state.is_loading = false;
            match result {
                Ok(position) => {
                    tracing::debug!("Device position: ({}, {})", position.lat, position.lng);
                    state.position = Some(position);
                }
                Err(e) => {
                    tracing::warn!("Geolocation failed: {}", e);
                    state.error = Some(e.to_string());
                }
            }
        });
    }
}
