//! Using an in-memory store instead of the process environment

use envregistry::{DeployMode, EnvRegistry, MemoryEnv};

fn main() -> anyhow::Result<()> {
    // Nothing here touches std::env: two registries over separate
    // in-memory stores are fully isolated from each other.
    let mut staging = EnvRegistry::new(MemoryEnv::new());
    staging.set_runtime_settings(DeployMode::Test, false, "token-a", "key-a");
    staging.set_database_settings("staging-db", "app", "u", "p", true);

    let mut production = EnvRegistry::new(MemoryEnv::new());
    production.set_runtime_settings(DeployMode::Production, false, "token-b", "key-b");
    production.set_database_settings("prod-db", "app", "u", "p", false);

    staging.check_required_vars()?;
    production.check_required_vars()?;

    println!("Staging URI:    {}", staging.db_server_uri()?);
    println!("Production URI: {}", production.db_server_uri()?);
    println!("Staging echoes SQL: {}", staging.db_echo()?);

    Ok(())
}
