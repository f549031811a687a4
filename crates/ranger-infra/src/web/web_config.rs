use crate::telemetry::TelemetryConfig;
use anyhow::{anyhow, Error as AnyError};
use config::{Config, ConfigError};
use serde::de::DeserializeOwned;
use std::{fmt::Debug, path::PathBuf};

use super::{CoreConfig, ServiceConfig};

pub trait FeatureConfig: Debug {
    /// The key of the feature specific section in the configuration.
    const NAME: &'static str;
}

#[derive(Debug, Clone)]
pub struct WebAppConfig<F>
where
    F: FeatureConfig,
{
    pub core: CoreConfig,
    pub service: ServiceConfig,
    pub telemetry: TelemetryConfig,
    pub feature: F,
}

impl<F> WebAppConfig<F>
where
    F: FeatureConfig + DeserializeOwned,
{
    /// Split the merged configuration into the shared sections and the feature section.
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let service = config.get::<ServiceConfig>("service")?;
        let telemetry = config.get::<TelemetryConfig>("telemetry")?;
        let feature = config.get::<F>(F::NAME)?;
        let core = config.try_deserialize::<CoreConfig>()?;

        Ok(Self {
            core,
            service,
            telemetry,
            feature,
        })
    }

    pub fn load(stage: &str, config_file: Option<PathBuf>) -> Result<Self, AnyError> {
        let pre_init = CoreConfig::new(stage, config_file)?;
        let config = pre_init.create_config_builder()?.build()?;

        let cfg = Self::from_config(config)?;
        log::info!("Config loaded [{}] for the stage {}", cfg.core.root_file, cfg.core.stage);

        if pre_init != cfg.core {
            Err(anyhow!("Core config mismatch"))
        } else {
            Ok(cfg)
        }
    }
}
