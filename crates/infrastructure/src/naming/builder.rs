use nameroute_application::ports::NamingService;
use nameroute_application::Resolution;
use nameroute_domain::{BackendPlan, Endpoint, NamingError, NamingServiceKind, ResolutionConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::backends::{Api, Cns, Ens, Zns};

/// Direct backend for one protocol.
pub fn create_naming_service(
    kind: NamingServiceKind,
    endpoint: &Endpoint,
    timeout: Duration,
) -> Result<Arc<dyn NamingService>, NamingError> {
    let service: Arc<dyn NamingService> = match kind {
        NamingServiceKind::Ens => Arc::new(Ens::new(endpoint, timeout)?),
        NamingServiceKind::Zns => Arc::new(Zns::new(endpoint, timeout)?),
        NamingServiceKind::Cns => Arc::new(Cns::new(endpoint, timeout)?),
    };
    Ok(service)
}

/// Assembles the backend registration set once; the resulting dispatcher
/// never changes it.
#[derive(Default)]
pub struct ResolutionBuilder {
    services: Vec<Arc<dyn NamingService>>,
}

impl ResolutionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct backends in ENS, ZNS, CNS order, or the API proxy alone.
    pub fn from_config(config: &ResolutionConfig) -> Result<Self, NamingError> {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        let mut builder = Self::new();

        match config.backend_plan() {
            BackendPlan::Proxy { url } => {
                info!(url = %url, "Using API proxy backend");
                builder = builder.with_service(Arc::new(Api::new(&url, timeout)?));
            }
            plan @ BackendPlan::Direct { .. } => {
                for (kind, endpoint) in plan.direct_endpoints() {
                    info!(
                        service = kind.as_str(),
                        url = %endpoint.url,
                        network = %endpoint.network,
                        "Using direct backend"
                    );
                    builder = builder.with_service(create_naming_service(kind, &endpoint, timeout)?);
                }
            }
        }

        Ok(builder)
    }

    pub fn with_service(mut self, service: Arc<dyn NamingService>) -> Self {
        self.services.push(service);
        self
    }

    pub fn build(self) -> Resolution {
        info!(backends = self.services.len(), "Resolution dispatcher ready");
        Resolution::new(self.services)
    }
}
