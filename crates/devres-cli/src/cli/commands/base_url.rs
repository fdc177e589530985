//! `devres base-url` – print the resolved live server origin.

use devres_core::base_url::BASE_URL_KEY;
use devres_core::config::DevresConfig;
use devres_core::DevResourceTransformer;

pub fn run_base_url(cfg: &DevresConfig) {
    let transformer = DevResourceTransformer::from_config(cfg);
    tracing::debug!("resolved base url {} (key {})", transformer.base_url(), BASE_URL_KEY);
    println!("{}", transformer.base_url());
}
