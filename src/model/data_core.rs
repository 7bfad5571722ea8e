//! AppState：应用核心状态

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::form::{FormEvent, QuoteForm};
use crate::model::notify::Toast;
use crate::model::settings::Settings;

#[derive(Debug, Default)]
pub struct AppState {
    pub settings_path: Option<PathBuf>,
    pub form: QuoteForm,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON解析失败: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("状态错误: {0}")]
    State(String),
}

impl AppState {
    /// 按配置文件初始化（文件缺失或无效时使用默认值）
    pub fn from_settings_path(p: Option<&Path>) -> Self {
        let settings = Settings::load_or_default(p);
        Self {
            settings_path: p.map(Path::to_path_buf),
            form: QuoteForm::from_settings(&settings),
        }
    }

    /// 处理一次用户操作，返回本次产生的通知
    pub fn dispatch(&mut self, event: FormEvent) -> Vec<Toast> {
        let mut toasts = Vec::new();
        self.form.apply(event, &mut toasts);
        toasts
    }
}
