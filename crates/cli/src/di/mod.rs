use nameroute_application::Resolution;
use nameroute_domain::ResolutionConfig;
use nameroute_infrastructure::ResolutionBuilder;

pub fn build_resolution(config: &ResolutionConfig) -> anyhow::Result<Resolution> {
    let resolution = ResolutionBuilder::from_config(config)?.build();
    Ok(resolution)
}
