use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_json")]
use figment::providers::Json;
#[cfg(feature = "config_yaml")]
use figment::providers::Yaml;
use figment::providers::{Data, Format};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_with::{DurationSeconds, serde_as};
use strum::{AsRefStr, Display, EnumString};
use url::Url;

use super::{ConfigParsingError, ConfigValidationError};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoCustomConfig;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppCustomConfigSerdeDTO<Custom> {
    #[serde(default)]
    pub(super) app: Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig<Custom> {
    pub core: CoreConfig,
    #[serde(default)]
    pub app: Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreConfig {
    pub object_storage: ObjectStorageConfig,
    #[serde(default)]
    pub qr_code: QrCodeConfig,
    #[serde(default)]
    pub registration: RegistrationConfig,
    #[serde(default)]
    pub verification: VerificationConfig,
    #[serde(default)]
    pub task: TaskConfig,
}

impl CoreConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.qr_code.size == 0 || self.qr_code.size > MAX_QR_CODE_SIZE {
            return Err(ConfigValidationError::InvalidQrCodeSize(self.qr_code.size));
        }

        if self.qr_code.margin > MAX_QR_CODE_MARGIN {
            return Err(ConfigValidationError::InvalidQrCodeMargin(
                self.qr_code.margin,
            ));
        }

        if self.task.finalize_pending_registrations.batch_size == 0 {
            return Err(ConfigValidationError::InvalidBatchSize);
        }

        if self.registration.step_timeout.is_zero() {
            return Err(ConfigValidationError::InvalidStepTimeout);
        }

        if self.object_storage.r#type == ObjectStorageType::Filesystem
            && self.object_storage.root_directory.is_none()
        {
            return Err(ConfigValidationError::MissingRootDirectory);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectStorageConfig {
    pub r#type: ObjectStorageType,
    #[serde(default)]
    pub public_base_url: Option<String>,
    #[serde(default)]
    pub root_directory: Option<PathBuf>,
}

impl ObjectStorageConfig {
    /// Resolves the base of retrieval URLs, falling back to the server's own base URL
    pub fn resolve_public_base_url(
        &self,
        core_base_url: Option<&str>,
    ) -> Result<Url, ConfigValidationError> {
        let value = self
            .public_base_url
            .as_deref()
            .or(core_base_url)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigValidationError::MissingPublicBaseUrl)?;

        Url::parse(value).map_err(|source| ConfigValidationError::InvalidPublicBaseUrl {
            value: value.to_owned(),
            source,
        })
    }
}

#[derive(Debug, Copy, Clone, Display, EnumString, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectStorageType {
    #[serde(rename = "DB")]
    #[strum(serialize = "DB")]
    Db,
    #[serde(rename = "FILESYSTEM")]
    #[strum(serialize = "FILESYSTEM")]
    Filesystem,
}

pub const MAX_QR_CODE_SIZE: u32 = 4096;
pub const MAX_QR_CODE_MARGIN: u32 = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QrCodeConfig {
    pub size: u32,
    pub margin: u32,
}

impl Default for QrCodeConfig {
    fn default() -> Self {
        Self {
            size: 400,
            margin: 2,
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationConfig {
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "default_step_timeout")]
    pub step_timeout: Duration,
    #[serde(default)]
    pub on_qr_failure: QrFailurePolicy,
}

fn default_step_timeout() -> Duration {
    Duration::from_secs(10)
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            step_timeout: default_step_timeout(),
            on_qr_failure: QrFailurePolicy::default(),
        }
    }
}

#[derive(
    Debug, Default, Copy, Clone, Display, EnumString, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum QrFailurePolicy {
    #[default]
    #[serde(rename = "KEEP_PENDING")]
    #[strum(serialize = "KEEP_PENDING")]
    KeepPending,
    #[serde(rename = "ROLLBACK")]
    #[strum(serialize = "ROLLBACK")]
    Rollback,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationConfig {
    #[serde(default)]
    pub on_scan_log_failure: ScanLogFailurePolicy,
}

#[derive(
    Debug, Default, Copy, Clone, Display, EnumString, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum ScanLogFailurePolicy {
    #[default]
    #[serde(rename = "IGNORE")]
    #[strum(serialize = "IGNORE")]
    Ignore,
    #[serde(rename = "FAIL")]
    #[strum(serialize = "FAIL")]
    Fail,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskConfig {
    #[serde(default)]
    pub finalize_pending_registrations: FinalizePendingRegistrationsConfig,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinalizePendingRegistrationsConfig {
    #[serde_as(as = "DurationSeconds<u64>")]
    pub min_age: Duration,
    pub batch_size: u64,
}

impl Default for FinalizePendingRegistrationsConfig {
    fn default() -> Self {
        Self {
            min_age: Duration::from_secs(60),
            batch_size: 100,
        }
    }
}

#[derive(Debug, Copy, Clone, Display, EnumString, AsRefStr, PartialEq, Eq, Hash)]
pub enum TaskType {
    #[strum(serialize = "FINALIZE_PENDING_REGISTRATIONS")]
    FinalizePendingRegistrations,
}

pub enum InputFormat {
    #[cfg(feature = "config_yaml")]
    Yaml(Data<Yaml>),
    #[cfg(feature = "config_json")]
    Json(Data<Json>),
}

impl InputFormat {
    #[cfg(feature = "config_yaml")]
    pub fn yaml_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Yaml(Yaml::file(p))
    }

    #[cfg(feature = "config_yaml")]
    pub fn yaml_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Yaml(Yaml::string(s.as_ref()))
    }

    #[cfg(feature = "config_json")]
    pub fn json_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Json(Json::file(p))
    }

    #[cfg(feature = "config_json")]
    pub fn json_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Json(Json::string(s.as_ref()))
    }
}

impl<Custom> AppConfig<Custom>
where
    Custom: Serialize + DeserializeOwned + Default,
{
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let mut inputs: Vec<InputFormat> = Vec::with_capacity(files.len());

        for path in files {
            #[cfg(feature = "config_yaml")]
            if path
                .as_ref()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
            {
                inputs.push(InputFormat::yaml_file(path));
                continue;
            }

            #[cfg(feature = "config_json")]
            if path.as_ref().extension() == Some("json".as_ref()) {
                inputs.push(InputFormat::json_file(path));
                continue;
            }

            return Err(ConfigParsingError::GeneralParsingError(format!(
                "Unsupported file or missing file extension: {:?}",
                path.as_ref().to_str()
            )));
        }

        AppConfig::parse(inputs)
    }

    #[cfg(feature = "config_yaml")]
    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigParsingError> {
        let inputs = configs.into_iter().map(InputFormat::yaml_str);

        AppConfig::parse(inputs)
    }

    pub fn parse(
        inputs: impl IntoIterator<Item = InputFormat>,
    ) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for data in inputs {
            figment = match data {
                #[cfg(feature = "config_yaml")]
                InputFormat::Yaml(content) => figment.merge(content),
                #[cfg(feature = "config_json")]
                InputFormat::Json(content) => figment.merge(content),
            };
        }

        #[cfg(feature = "config_env")]
        {
            figment = figment.merge(Env::prefixed("GATEPASS_").split("__").lowercase(false));
        }

        let core = figment
            .extract_inner::<CoreConfig>("core")
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;
        let custom = figment
            .extract::<AppCustomConfigSerdeDTO<Custom>>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;

        Ok(Self {
            core,
            app: custom.app,
        })
    }
}
