//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use crate::application::config::Config;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub config: Config,
    pub effective: EffectiveConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveConfig {
    pub prompt: String,
    pub continuation_prompt: String,
    pub default_workers: u32,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            effective: EffectiveConfig {
                prompt: loaded.config.prompt(),
                continuation_prompt: loaded.config.continuation_prompt(),
                default_workers: loaded.config.default_workers(),
            },
            config: loaded.config,
        }
    }
}
