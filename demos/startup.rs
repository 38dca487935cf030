//! Typical startup sequence against the process environment

use envregistry::{DeployMode, EnvRegistry};

fn main() -> anyhow::Result<()> {
    let mut env = EnvRegistry::process();

    // Seed the environment for demonstration; a real deployment would
    // have these set before the process starts.
    env.set_runtime_settings(DeployMode::Development, true, "mass-action-token", "aes-key");
    env.set_database_settings("localhost", "app", "app_user", "app_password", false);

    // Declaring API support makes the four API variables required too.
    env.set_api_settings("api-user", "api-pass", "jwt-signing-secret", 2.5);

    // Abort startup if anything required is missing.
    env.check_required_vars()?;

    println!("Configuration loaded:");
    println!("  Mode: {:?}", env.deploy_mode());
    println!("  Debug: {}", env.debug()?);
    println!("  Database URI: {}", env.db_server_uri()?);
    println!("  API min version: {}", env.api_min_version()?);

    Ok(())
}
