use anyhow::Context;
use nameroute_application::Resolution;

use crate::Command;

/// Runs one dispatcher operation. `None` means nothing to print.
pub async fn run(resolution: &Resolution, command: Command) -> anyhow::Result<Option<String>> {
    let output = match command {
        Command::Resolve { domain } => {
            let response = resolution.resolve(&domain).await?;
            Some(serde_json::to_string_pretty(&response).context("Failed to encode response")?)
        }
        Command::Address {
            domain,
            ticker,
            strict: true,
        } => Some(resolution.address_or_throw(&domain, &ticker).await?),
        Command::Address {
            domain,
            ticker,
            strict: false,
        } => resolution.address(&domain, &ticker).await?,
        Command::Owner { domain } => resolution.owner(&domain).await?,
        Command::IpfsHash { domain } => Some(resolution.ipfs_hash(&domain).await?),
        Command::IpfsRedirect { domain } => Some(resolution.ipfs_redirect(&domain).await?),
        Command::Email { domain } => Some(resolution.email(&domain).await?),
        Command::Record { domain, key } => Some(resolution.record(&domain, &key).await?),
        Command::Namehash { domain } => Some(resolution.namehash(&domain)?),
        Command::ServiceName { domain } => Some(resolution.service_name(&domain)?.to_string()),
        Command::Supported { domain } => Some(format!(
            "supported={} network={}",
            resolution.is_supported_domain(&domain),
            resolution.is_supported_domain_in_network(&domain)
        )),
        Command::Reverse { address, ticker } => resolution.reverse(&address, &ticker).await?,
    };
    Ok(output)
}
