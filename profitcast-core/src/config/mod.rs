use crate::error::CoreError;
use config::{Config as Cfg, File};
use serde::de::DeserializeOwned;

/// Load a service configuration from `configuration.*` (optional) and
/// `APP__`-prefixed environment variables, with `.env` support.
///
/// Environment variables override file values; nesting uses `__`
/// (e.g. `APP__JWT__SECRET` maps to `jwt.secret`).
pub fn load<T: DeserializeOwned>() -> Result<T, CoreError> {
    dotenvy::dotenv().ok();

    let config = Cfg::builder()
        .add_source(File::with_name("configuration").required(false))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?;

    Ok(config.try_deserialize()?)
}
