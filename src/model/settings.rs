//! 启动配置：初始语言、默认参数与价格表（只读，从 JSON 加载）

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::data_core::AppError;
use crate::model::i18n::Language;
use crate::model::pricing::{PriceTable, QuoteParameters};
use crate::utils::fs::read_json_file;

/// 默认配置文件名（相对工作目录）
pub const SETTINGS_FILE: &str = "print_quote.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: Language,
    pub defaults: QuoteParameters,
    pub pricing: PriceTable,
}

impl Settings {
    pub fn load(p: &Path) -> Result<Self, AppError> {
        let settings: Settings = read_json_file(p)?;
        settings.pricing.validate()?;
        Ok(settings)
    }

    /// 工作目录下的默认配置文件（存在时）
    pub fn locate() -> Option<PathBuf> {
        let p = PathBuf::from(SETTINGS_FILE);
        p.is_file().then_some(p)
    }

    /// 文件缺失或无效时退回默认配置
    pub fn load_or_default(p: Option<&Path>) -> Self {
        let Some(p) = p else {
            tracing::info!("未找到配置文件，使用默认配置");
            return Self::default();
        };
        match Self::load(p) {
            Ok(settings) => {
                tracing::info!("已加载配置: {}", p.display());
                settings
            }
            Err(e) => {
                tracing::warn!("配置加载失败 ({}): {}，使用默认配置", p.display(), e);
                Self::default()
            }
        }
    }
}
