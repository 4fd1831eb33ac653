mod logging;

pub use logging::init_logging;

use nameroute_domain::{CliOverrides, ResolutionConfig};
use tracing::info;

pub fn load_config(
    path: Option<&str>,
    overrides: CliOverrides,
) -> anyhow::Result<ResolutionConfig> {
    let config = ResolutionConfig::load(path, overrides)?;
    Ok(config)
}

pub fn log_backend_plan(config: &ResolutionConfig) {
    let plan = config.backend_plan();
    if plan.is_proxy() {
        info!(url = %config.api.url, "Resolving through the API proxy");
    } else {
        let backends: Vec<&str> = plan
            .direct_endpoints()
            .iter()
            .map(|(kind, _)| kind.as_str())
            .collect();
        info!(?backends, "Resolving directly against naming-service contracts");
    }
}
