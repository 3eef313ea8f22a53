use crate::error::ClientError;
use config::{Config as Cfg, Environment, File};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Load settings from `<config_dir>/base.yaml`, overlaid by `APP_`-prefixed
/// environment variables (`APP_API__BASE_URL` sets `api.base_url`).
///
/// A `.env` file in the working directory is read first when present.
pub fn load_settings<T: DeserializeOwned>(config_dir: &Path) -> Result<T, ClientError> {
    dotenvy::dotenv().ok();

    let settings = Cfg::builder()
        .add_source(File::from(config_dir.join("base.yaml")).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
