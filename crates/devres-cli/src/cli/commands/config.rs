//! `devres config` – show where the config lives and what is in effect.

use anyhow::Result;
use devres_core::config::{self, DevresConfig};
use devres_core::DevResourceTransformer;

pub fn run_config(cfg: &DevresConfig) -> Result<()> {
    let path = config::config_path()?;
    let transformer = DevResourceTransformer::from_config(cfg);
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    println!("# effective base_url = {}", transformer.base_url());
    println!("# effective fallback_mode = {:?}", transformer.fallback_mode());
    Ok(())
}
