//! QuoteForm：报价表单的核心状态与事件处理
//!
//! 所有用户操作都以 `FormEvent` 进入 `apply`，失败在此处转换为通知，
//! 不会向外传播。

use thiserror::Error;

use crate::model::i18n::{LabelKey, Language};
use crate::model::notify::{Toast, ToastSink};
use crate::model::pricing::{Infill, Material, PriceTable, Quality, QuoteParameters};
use crate::model::settings::Settings;

/// 唯一接受的模型文件后缀（区分大小写）
pub const STL_SUFFIX: &str = ".stl";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("文件不是 .stl: {0}")]
    WrongFile(String),
    #[error("尚未上传模型文件")]
    MissingFile,
    #[error("尚未计算价格")]
    NoQuoteYet,
    #[error("填充率超出范围: {0}")]
    InfillOutOfRange(u8),
    #[error("未知选项: {0}")]
    UnknownOption(String),
}

impl FormError {
    /// 通知正文所用的标签
    pub fn message_key(&self) -> LabelKey {
        match self {
            FormError::WrongFile(_) => LabelKey::FileFormat,
            FormError::MissingFile => LabelKey::FileFormat,
            FormError::NoQuoteYet => LabelKey::Calculate,
            FormError::InfillOutOfRange(_) => LabelKey::Infill,
            FormError::UnknownOption(_) => LabelKey::Specs,
        }
    }
}

/// 用户选择的文件，只保存文件名，不读取内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn is_stl(&self) -> bool {
        self.name.ends_with(STL_SUFFIX)
    }
}

/// 订单确认（仅界面回执，不生成任何记录）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub price: u32,
}

/// 用户操作
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    SelectLanguage(Language),
    /// `None` 表示用户取消了文件选择
    UploadFile(Option<UploadedFile>),
    SetMaterial(Material),
    SetInfill(Infill),
    SetQuality(Quality),
    ComputePrice,
    SubmitOrder,
}

#[derive(Debug, Clone, Default)]
pub struct QuoteForm {
    pub language: Language,
    pub uploaded_file: Option<UploadedFile>,
    pub params: QuoteParameters,
    pub quote: Option<u32>,
    pub pricing: PriceTable,
}

impl QuoteForm {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            language: settings.language,
            uploaded_file: None,
            params: settings.defaults,
            quote: None,
            pricing: settings.pricing.clone(),
        }
    }

    /// 处理一次用户操作，并把结果以通知形式发给 `sink`
    pub fn apply(&mut self, event: FormEvent, sink: &mut impl ToastSink) {
        tracing::info!("表单事件: {:?}", event);
        let outcome = match event {
            FormEvent::SelectLanguage(lang) => {
                self.select_language(lang);
                Ok(None)
            }
            FormEvent::UploadFile(None) => {
                tracing::info!("用户取消了文件选择");
                Ok(None)
            }
            FormEvent::UploadFile(Some(candidate)) => self
                .upload_file(candidate)
                .map(|file| Some(Toast::success(file.name.clone()))),
            FormEvent::SetMaterial(material) => {
                self.set_material(material);
                Ok(None)
            }
            FormEvent::SetInfill(infill) => {
                self.set_infill(infill);
                Ok(None)
            }
            FormEvent::SetQuality(quality) => {
                self.set_quality(quality);
                Ok(None)
            }
            FormEvent::ComputePrice => self.compute_price().map(|_| None),
            FormEvent::SubmitOrder => self
                .submit_order()
                .map(|confirmation| Some(self.confirmation_toast(confirmation))),
        };

        match outcome {
            Ok(Some(toast)) => sink.toast(toast),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("表单校验失败: {}", e);
                sink.toast(Toast::error(self.text(e.message_key())));
            }
        }
    }

    pub fn text(&self, key: LabelKey) -> &'static str {
        self.language.text(key)
    }

    pub fn select_language(&mut self, lang: Language) {
        self.language = lang;
    }

    /// 仅接受以 `.stl` 结尾的文件；拒绝时保留原文件
    pub fn upload_file(&mut self, candidate: UploadedFile) -> Result<&UploadedFile, FormError> {
        if !candidate.is_stl() {
            return Err(FormError::WrongFile(candidate.name));
        }
        tracing::info!("已接受模型文件: {}", candidate.name);
        Ok(self.uploaded_file.insert(candidate))
    }

    // 参数已是校验过的类型，设置不会失败；已有报价保持不变，需重新计算

    pub fn set_material(&mut self, material: Material) {
        self.params.material = material;
    }

    pub fn set_infill(&mut self, infill: Infill) {
        self.params.infill = infill;
    }

    pub fn set_quality(&mut self, quality: Quality) {
        self.params.quality = quality;
    }

    /// 没有文件时报错，且不清除已有报价
    pub fn compute_price(&mut self) -> Result<u32, FormError> {
        if self.uploaded_file.is_none() {
            return Err(FormError::MissingFile);
        }
        let price = self.pricing.quote(&self.params);
        tracing::info!(
            "报价计算完成: {} / {} / {}% => ${}",
            self.params.material,
            self.params.quality,
            self.params.infill.percent(),
            price
        );
        self.quote = Some(price);
        Ok(price)
    }

    pub fn submit_order(&self) -> Result<OrderConfirmation, FormError> {
        // 零价格视同尚未报价
        match self.quote {
            Some(price) if price > 0 => Ok(OrderConfirmation { price }),
            _ => Err(FormError::NoQuoteYet),
        }
    }

    fn confirmation_toast(&self, confirmation: OrderConfirmation) -> Toast {
        Toast::success(format!("{} - ${}", self.text(LabelKey::Order), confirmation.price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::notify::Severity;

    fn form_with_file() -> QuoteForm {
        let mut form = QuoteForm::default();
        form.upload_file(UploadedFile::new("part.stl")).expect("应接受 .stl");
        form
    }

    #[test]
    fn test_defaults() {
        let form = QuoteForm::default();
        assert_eq!(form.language, Language::Ru);
        assert_eq!(form.params.material, Material::Pla);
        assert_eq!(form.params.infill.percent(), 20);
        assert_eq!(form.params.quality, Quality::Medium);
        assert!(form.uploaded_file.is_none());
        assert!(form.quote.is_none());
    }

    #[test]
    fn test_upload_rejects_wrong_suffix() {
        let mut form = form_with_file();
        for name in ["model.obj", "model.stlx", "model", "model.STL"] {
            let err = form.upload_file(UploadedFile::new(name)).unwrap_err();
            assert_eq!(err, FormError::WrongFile(name.to_string()));
        }
        assert_eq!(form.uploaded_file, Some(UploadedFile::new("part.stl")));
    }

    #[test]
    fn test_upload_replaces_previous_file() {
        let mut form = form_with_file();
        form.upload_file(UploadedFile::new("model.stl")).expect("应接受");
        assert_eq!(form.uploaded_file, Some(UploadedFile::new("model.stl")));
    }

    #[test]
    fn test_upload_success_toast_carries_name() {
        let mut form = QuoteForm::default();
        let mut toasts = Vec::new();
        form.apply(FormEvent::UploadFile(Some(UploadedFile::new("gear.stl"))), &mut toasts);
        assert_eq!(toasts, vec![Toast::success("gear.stl")]);
    }

    #[test]
    fn test_cancelled_picker_is_silent() {
        let mut form = form_with_file();
        let mut toasts = Vec::new();
        form.apply(FormEvent::UploadFile(None), &mut toasts);
        assert!(toasts.is_empty());
        assert!(form.uploaded_file.is_some());
    }

    #[test]
    fn test_wrong_file_toast_is_localized() {
        let mut form = QuoteForm::default();
        form.select_language(Language::En);
        let mut toasts = Vec::new();
        form.apply(FormEvent::UploadFile(Some(UploadedFile::new("a.obj"))), &mut toasts);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].severity, Severity::Destructive);
        assert_eq!(toasts[0].description, "Upload .STL file");
        assert!(form.uploaded_file.is_none());
    }

    #[test]
    fn test_compute_without_file_keeps_quote() {
        let mut form = QuoteForm::default();
        form.quote = Some(77);
        let mut toasts = Vec::new();
        form.apply(FormEvent::ComputePrice, &mut toasts);
        assert_eq!(form.quote, Some(77));
        assert_eq!(toasts, vec![Toast::error(Language::Ru.text(LabelKey::FileFormat))]);
    }

    #[test]
    fn test_compute_sets_quote_silently() {
        let mut form = form_with_file();
        let mut toasts = Vec::new();
        form.apply(FormEvent::SetMaterial(Material::Abs), &mut toasts);
        form.apply(FormEvent::SetQuality(Quality::High), &mut toasts);
        form.apply(FormEvent::SetInfill(Infill::new(30).unwrap()), &mut toasts);
        form.apply(FormEvent::ComputePrice, &mut toasts);
        assert_eq!(form.quote, Some(117));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_parameter_change_keeps_stale_quote() {
        let mut form = form_with_file();
        assert_eq!(form.compute_price(), Ok(60));
        form.set_material(Material::Resin);
        form.set_infill(Infill::new(100).unwrap());
        assert_eq!(form.quote, Some(60));
        assert_eq!(form.compute_price(), Ok(180));
    }

    #[test]
    fn test_submit_without_quote() {
        let mut form = form_with_file();
        form.select_language(Language::En);
        let mut toasts = Vec::new();
        form.apply(FormEvent::SubmitOrder, &mut toasts);
        assert_eq!(toasts, vec![Toast::error("Calculate Price")]);
        assert!(form.quote.is_none());
    }

    #[test]
    fn test_submit_confirms_exact_price() {
        let mut form = form_with_file();
        form.compute_price().unwrap();
        form.select_language(Language::Cn);
        let mut toasts = Vec::new();
        form.apply(FormEvent::SubmitOrder, &mut toasts);
        assert_eq!(toasts, vec![Toast::success("订购 - $60")]);
        assert_eq!(form.quote, Some(60));
    }

    #[test]
    fn test_language_switch_touches_only_language() {
        let mut form = form_with_file();
        form.set_quality(Quality::Low);
        form.compute_price().unwrap();
        let before = (form.uploaded_file.clone(), form.params, form.quote);
        let mut toasts = Vec::new();
        for lang in Language::ALL {
            form.apply(FormEvent::SelectLanguage(lang), &mut toasts);
            assert_eq!(form.language, lang);
            assert_eq!((form.uploaded_file.clone(), form.params, form.quote), before);
        }
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_error_message_keys() {
        assert_eq!(FormError::MissingFile.message_key(), LabelKey::FileFormat);
        assert_eq!(FormError::WrongFile("x".into()).message_key(), LabelKey::FileFormat);
        assert_eq!(FormError::NoQuoteYet.message_key(), LabelKey::Calculate);
        assert_eq!(FormError::InfillOutOfRange(5).message_key(), LabelKey::Infill);
        assert_eq!(FormError::UnknownOption("nylon".into()).message_key(), LabelKey::Specs);
    }

    #[test]
    fn test_zero_quote_cannot_be_ordered() {
        let mut form = form_with_file();
        form.quote = Some(0);
        assert_eq!(form.submit_order(), Err(FormError::NoQuoteYet));
        let mut toasts = Vec::new();
        form.apply(FormEvent::SubmitOrder, &mut toasts);
        assert_eq!(toasts, vec![Toast::error(Language::Ru.text(LabelKey::Calculate))]);
    }
}
