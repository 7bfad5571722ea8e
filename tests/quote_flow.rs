//! 通过公共 API 走完整的报价流程

use print_quote::{
    AppState, FormEvent, FormView, Infill, LabelKey, Language, Material, Quality, Severity, Toast,
    UploadedFile,
};

fn upload(name: &str) -> FormEvent {
    FormEvent::UploadFile(Some(UploadedFile::new(name)))
}

#[test]
fn test_full_quote_lifecycle() {
    let mut state = AppState::default();
    assert!(state.form.uploaded_file.is_none());

    // 没有报价时下单
    let toasts = state.dispatch(FormEvent::SubmitOrder);
    assert_eq!(toasts, vec![Toast::error(Language::Ru.text(LabelKey::Calculate))]);

    // 没有文件时计算
    let toasts = state.dispatch(FormEvent::ComputePrice);
    assert_eq!(toasts[0].severity, Severity::Destructive);
    assert!(state.form.quote.is_none());

    // 错误文件被拒绝
    let toasts = state.dispatch(upload("model.obj"));
    assert_eq!(toasts, vec![Toast::error(Language::Ru.text(LabelKey::FileFormat))]);
    assert!(state.form.uploaded_file.is_none());

    assert_eq!(state.dispatch(upload("model.stl")), vec![Toast::success("model.stl")]);

    state.dispatch(FormEvent::SetMaterial(Material::Resin));
    state.dispatch(FormEvent::SetQuality(Quality::Low));
    state.dispatch(FormEvent::SetInfill(Infill::new(100).expect("合法填充率")));
    assert!(state.dispatch(FormEvent::ComputePrice).is_empty());
    assert_eq!(state.form.quote, Some(144));

    state.dispatch(FormEvent::SelectLanguage(Language::En));
    let toasts = state.dispatch(FormEvent::SubmitOrder);
    assert_eq!(toasts, vec![Toast::success("Order - $144")]);

    let view = FormView::from_form(&state.form);
    assert_eq!(view.price_text, "$144");
    assert_eq!(view.upload_caption, "model.stl");
}

#[test]
fn test_stale_quote_survives_parameter_change() {
    let mut state = AppState::default();
    state.dispatch(upload("a.stl"));
    state.dispatch(FormEvent::ComputePrice);
    assert_eq!(state.form.quote, Some(60));

    state.dispatch(FormEvent::SetQuality(Quality::High));
    assert_eq!(state.form.quote, Some(60));
    assert_eq!(state.dispatch(FormEvent::SubmitOrder), vec![Toast::success("Заказать - $60")]);

    state.dispatch(FormEvent::ComputePrice);
    assert_eq!(state.form.quote, Some(90));
}

#[test]
fn test_rejected_upload_keeps_previous_file() {
    let mut state = AppState::default();
    state.dispatch(upload("first.stl"));
    for name in ["model.stlx", "model", "part.STL"] {
        state.dispatch(upload(name));
        assert_eq!(state.form.uploaded_file, Some(UploadedFile::new("first.stl")));
    }
    state.dispatch(upload("second.stl"));
    assert_eq!(state.form.uploaded_file, Some(UploadedFile::new("second.stl")));
}
