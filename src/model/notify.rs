//! 通知（toast）：表单操作结果的唯一出口

/// 成功通知标题
pub const TITLE_OK: &str = "✓";
/// 错误通知标题
pub const TITLE_ERROR: &str = "Error";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Normal,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Toast {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: TITLE_OK.to_string(),
            description: description.into(),
            severity: Severity::Normal,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: TITLE_ERROR.to_string(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

/// 通知接收端（UI弹窗、测试收集器等）
pub trait ToastSink {
    fn toast(&mut self, toast: Toast);
}

impl ToastSink for Vec<Toast> {
    fn toast(&mut self, toast: Toast) {
        self.push(toast);
    }
}
