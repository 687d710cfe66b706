//! Map SDK handle
//!
//! One long-lived set of map service clients, created once at startup and
//! torn down explicitly. State machines built from the handle share its
//! HTTP connection pool and reverse-geocode cache.

use std::sync::Arc;

use application::{
    EndpointStateMachine, EndpointStateMachineBuilder,
    ports::{DeviceLocationPort, GeocodingPort, PlacesPort, RoutePort},
};
use integration_maps::{GoogleMapsClient, MapsError};
use parking_lot::Mutex;
use thiserror::Error;
use tracing::{info, instrument};

use crate::{
    adapters::{
        FixedLocationAdapter, GeocodingAdapter, PlacesAdapter, RouteAdapter,
        UnavailableLocationAdapter,
    },
    config::AppConfig,
};

/// Errors raised while initializing the SDK handle
#[derive(Debug, Error)]
pub enum SdkError {
    /// Configuration is incomplete or invalid
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The HTTP client could not be created
    #[error("Failed to create map client: {0}")]
    Client(#[from] MapsError),
}

/// Shared map service clients and the ports built on them
pub struct MapsSdk {
    client: Arc<GoogleMapsClient>,
    places: Arc<dyn PlacesPort>,
    geocoding: Arc<dyn GeocodingPort>,
    routes: Arc<dyn RoutePort>,
    location: Arc<dyn DeviceLocationPort>,
    config: AppConfig,
    machines: Mutex<Vec<EndpointStateMachine>>,
}

impl std::fmt::Debug for MapsSdk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapsSdk")
            .field("base_url", &self.client.config().base_url)
            .field("machines", &self.machines.lock().len())
            .finish_non_exhaustive()
    }
}

impl MapsSdk {
    /// Validate `config` and create the shared clients
    ///
    /// # Errors
    ///
    /// Returns `SdkError::Config` when the configuration is invalid and
    /// `SdkError::Client` when the HTTP client cannot be built.
    #[instrument(skip(config))]
    pub fn init(config: &AppConfig) -> Result<Self, SdkError> {
        config.validate().map_err(SdkError::Config)?;

        let client = Arc::new(GoogleMapsClient::new(&config.maps.to_maps_config())?);
        let location: Arc<dyn DeviceLocationPort> = match config
            .device_location
            .fixed
            .and_then(|c| c.to_coordinate())
        {
            Some(position) => Arc::new(FixedLocationAdapter::new(position)),
            None => Arc::new(UnavailableLocationAdapter),
        };

        info!(
            base_url = %config.maps.base_url,
            country = %config.maps.country,
            "Map SDK initialized"
        );

        Ok(Self {
            places: Arc::new(PlacesAdapter::new(Arc::clone(&client))),
            geocoding: Arc::new(GeocodingAdapter::new(Arc::clone(&client))),
            routes: Arc::new(RouteAdapter::new(Arc::clone(&client))),
            client,
            location,
            config: config.clone(),
            machines: Mutex::new(Vec::new()),
        })
    }

    /// Places port backed by the shared client
    pub fn places(&self) -> Arc<dyn PlacesPort> {
        Arc::clone(&self.places)
    }

    /// Geocoding port backed by the shared client
    pub fn geocoding(&self) -> Arc<dyn GeocodingPort> {
        Arc::clone(&self.geocoding)
    }

    /// Route port backed by the shared client
    pub fn routes(&self) -> Arc<dyn RoutePort> {
        Arc::clone(&self.routes)
    }

    /// Device location port selected by configuration
    pub fn device_location(&self) -> Arc<dyn DeviceLocationPort> {
        Arc::clone(&self.location)
    }

    /// Loaded configuration
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Builder for a state machine wired to this handle's ports and settings
    pub fn state_machine_builder(&self) -> EndpointStateMachineBuilder {
        EndpointStateMachine::builder(
            self.places(),
            self.geocoding(),
            self.routes(),
            self.device_location(),
        )
        .settings(self.config.booking.to_settings())
    }

    /// Build a state machine and track it for [`MapsSdk::shutdown`]
    pub fn register(&self, builder: EndpointStateMachineBuilder) -> EndpointStateMachine {
        let machine = builder.build();
        self.machines.lock().push(machine.clone());
        machine
    }

    /// Cancel pending work on every registered machine and release the clients
    pub fn shutdown(self) {
        let machines = std::mem::take(&mut *self.machines.lock());
        for machine in &machines {
            machine.shutdown();
        }
        info!(machines = machines.len(), "Map SDK shut down");
    }
}
