//! VM桥接层：把 QuoteForm 转换成界面可直接绑定的文本快照
//!
//! 注意：Slint 回调绑定在 main.rs 中，因为依赖于Slint生成的类型

use crate::model::form::QuoteForm;
use crate::model::i18n::{LabelKey, Language};
use crate::model::pricing::{Infill, Material, Quality};

// === 常量定义（消除魔法值） ===
/// 通知自动关闭时间
pub const TOAST_DURATION_MS: u64 = 3000;
/// 文件对话框过滤器
pub const STL_FILTER_NAME: &str = "STL";
pub const STL_FILTER_EXTS: [&str; 1] = ["stl"];

/// 表单的完整显示快照（已本地化）
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub language: String,
    pub language_codes: Vec<String>,
    pub title: String,
    pub subtitle: String,
    pub specs: String,
    /// 已选文件名，未选时为“上传模型”
    pub upload_caption: String,
    pub material_label: String,
    pub material_options: Vec<String>,
    pub material_index: usize,
    /// “填充: 20%”
    pub infill_caption: String,
    pub infill_percent: u8,
    pub infill_min: u8,
    pub infill_max: u8,
    pub quality_label: String,
    pub quality_options: Vec<String>,
    pub quality_index: usize,
    pub calculate: String,
    pub price_label: String,
    /// “$60”，尚未计算时为空
    pub price_text: String,
    pub has_price: bool,
    pub order: String,
}

impl FormView {
    pub fn from_form(form: &QuoteForm) -> Self {
        let lang = form.language;
        let t = |key: LabelKey| lang.text(key).to_string();

        Self {
            language: lang.code().to_string(),
            language_codes: Language::ALL.iter().map(|l| l.code().to_ascii_uppercase()).collect(),
            title: t(LabelKey::Title),
            subtitle: t(LabelKey::Subtitle),
            specs: t(LabelKey::Specs),
            upload_caption: form
                .uploaded_file
                .as_ref()
                .map(|f| f.name.clone())
                .unwrap_or_else(|| t(LabelKey::Upload)),
            material_label: t(LabelKey::Material),
            material_options: Material::ALL.into_iter().map(|m| t(m.into())).collect(),
            material_index: form.params.material.index(),
            infill_caption: format!("{}: {}%", lang.text(LabelKey::Infill), form.params.infill.percent()),
            infill_percent: form.params.infill.percent(),
            infill_min: Infill::MIN,
            infill_max: Infill::MAX,
            quality_label: t(LabelKey::Quality),
            quality_options: Quality::ALL.into_iter().map(|q| t(q.into())).collect(),
            quality_index: form.params.quality.index(),
            calculate: t(LabelKey::Calculate),
            price_label: format!("{}:", lang.text(LabelKey::Price)),
            price_text: form.quote.map(|p| format!("${}", p)).unwrap_or_default(),
            has_price: form.quote.is_some(),
            order: t(LabelKey::Order),
        }
    }
}
