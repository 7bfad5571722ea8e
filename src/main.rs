//! 程序入口：初始化日志、加载配置与 Slint UI，并绑定 VM 回调

use std::{cell::RefCell, rc::Rc, time::Duration};

use anyhow::Context;
use slint::{ComponentHandle, ModelRc, SharedString, Timer, TimerMode, VecModel};
use tracing_subscriber::fmt::SubscriberBuilder;

use print_quote::vm::bridge::{STL_FILTER_EXTS, STL_FILTER_NAME, TOAST_DURATION_MS};
use print_quote::{
    AppState, FormEvent, FormView, Infill, Language, Material, Quality, Settings, Toast, UploadedFile,
};

slint::include_modules!();

fn string_model(items: &[String]) -> ModelRc<SharedString> {
    let items: Vec<SharedString> = items.iter().map(|s| SharedString::from(s.as_str())).collect();
    ModelRc::new(VecModel::from(items))
}

/// VM桥接器：管理UI与数据层的交互
struct ViewModelBridge {
    app_state: Rc<RefCell<AppState>>,
    // 通知自动关闭计时器
    toast_timer: Rc<Timer>,
}

impl ViewModelBridge {
    /// 创建新的VM桥接器并绑定所有回调
    fn new(app_window: &AppWindow, app_state: Rc<RefCell<AppState>>) -> Self {
        let bridge = Self {
            app_state,
            toast_timer: Rc::new(Timer::default()),
        };

        bridge.setup_callbacks(app_window);
        bridge
    }

    /// 设置所有UI回调函数
    fn setup_callbacks(&self, app_window: &AppWindow) {
        let app_state = self.app_state.clone();
        let toast_timer = self.toast_timer.clone();

        // === 语言切换回调 ===
        {
            let app_state = app_state.clone();
            let toast_timer = toast_timer.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_select_language(move |code| {
                if let Some(app_window) = app_window_weak.upgrade() {
                    match code.to_ascii_lowercase().parse::<Language>() {
                        Ok(lang) => Self::handle_event(&app_window, &app_state, &toast_timer, FormEvent::SelectLanguage(lang)),
                        Err(e) => tracing::warn!("忽略语言切换: {}", e),
                    }
                }
            });
        }

        // === 上传模型回调 ===
        {
            let app_state = app_state.clone();
            let toast_timer = toast_timer.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_upload_file(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    let picked = Self::show_file_dialog();
                    Self::handle_event(&app_window, &app_state, &toast_timer, FormEvent::UploadFile(picked));
                }
            });
        }

        // === 材料选择回调 ===
        {
            let app_state = app_state.clone();
            let toast_timer = toast_timer.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_material_changed(move |index| {
                if let Some(app_window) = app_window_weak.upgrade() {
                    match usize::try_from(index).ok().and_then(Material::from_index) {
                        Some(material) => Self::handle_event(&app_window, &app_state, &toast_timer, FormEvent::SetMaterial(material)),
                        None => tracing::warn!("忽略未知材料下标: {}", index),
                    }
                }
            });
        }

        // === 质量选择回调 ===
        {
            let app_state = app_state.clone();
            let toast_timer = toast_timer.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_quality_changed(move |index| {
                if let Some(app_window) = app_window_weak.upgrade() {
                    match usize::try_from(index).ok().and_then(Quality::from_index) {
                        Some(quality) => Self::handle_event(&app_window, &app_state, &toast_timer, FormEvent::SetQuality(quality)),
                        None => tracing::warn!("忽略未知质量下标: {}", index),
                    }
                }
            });
        }

        // === 填充率滑块回调 ===
        {
            let app_state = app_state.clone();
            let toast_timer = toast_timer.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_infill_changed(move |value| {
                if let Some(app_window) = app_window_weak.upgrade() {
                    let infill = Infill::from_slider(value);
                    // 吸附值未变时仍需重绘，让滑块回到步长位置
                    if app_state.borrow().form.params.infill == infill {
                        Self::render(&app_window, &app_state);
                        return;
                    }
                    Self::handle_event(&app_window, &app_state, &toast_timer, FormEvent::SetInfill(infill));
                }
            });
        }

        // === 计算价格回调 ===
        {
            let app_state = app_state.clone();
            let toast_timer = toast_timer.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_calculate_pressed(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    Self::handle_event(&app_window, &app_state, &toast_timer, FormEvent::ComputePrice);
                }
            });
        }

        // === 下单回调 ===
        {
            let app_state = app_state.clone();
            let toast_timer = toast_timer.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_order_pressed(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    Self::handle_event(&app_window, &app_state, &toast_timer, FormEvent::SubmitOrder);
                }
            });
        }

        // === 关闭通知回调 ===
        {
            let app_window_weak = app_window.as_weak();
            app_window.on_dismiss_toast(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    toast_timer.stop();
                    app_window.set_toast_visible(false);
                }
            });
        }
    }

    /// 初始化UI状态
    fn initialize_ui(&self, app_window: &AppWindow) {
        app_window.set_toast_visible(false);
        Self::render(app_window, &self.app_state);
    }

    /// 显示文件选择对话框，只取文件名
    fn show_file_dialog() -> Option<UploadedFile> {
        use rfd::FileDialog;

        let file_path = FileDialog::new()
            .add_filter(STL_FILTER_NAME, &STL_FILTER_EXTS)
            .add_filter("*", &["*"])
            .pick_file()?;

        let name = file_path.file_name()?.to_string_lossy().to_string();
        tracing::info!("用户选择了文件: {}", file_path.display());
        Some(UploadedFile::new(name))
    }

    /// 分发事件、刷新界面并显示最后一条通知
    fn handle_event(
        app_window: &AppWindow,
        app_state: &Rc<RefCell<AppState>>,
        toast_timer: &Rc<Timer>,
        event: FormEvent,
    ) {
        let toasts = app_state.borrow_mut().dispatch(event);
        Self::render(app_window, app_state);
        if let Some(toast) = toasts.into_iter().last() {
            Self::show_toast(app_window, toast_timer, toast);
        }
    }

    /// 把 FormView 快照写入窗口属性
    fn render(app_window: &AppWindow, app_state: &Rc<RefCell<AppState>>) {
        let view = FormView::from_form(&app_state.borrow().form);

        app_window.set_language_codes(string_model(&view.language_codes));
        app_window.set_language(view.language.to_ascii_uppercase().into());
        app_window.set_title_text(view.title.into());
        app_window.set_subtitle(view.subtitle.into());
        app_window.set_specs(view.specs.into());
        app_window.set_upload_caption(view.upload_caption.into());

        app_window.set_material_label(view.material_label.into());
        app_window.set_material_options(string_model(&view.material_options));
        app_window.set_material_index(view.material_index as i32);

        app_window.set_infill_caption(view.infill_caption.into());
        app_window.set_infill_min(f32::from(view.infill_min));
        app_window.set_infill_max(f32::from(view.infill_max));
        app_window.set_infill_value(f32::from(view.infill_percent));

        app_window.set_quality_label(view.quality_label.into());
        app_window.set_quality_options(string_model(&view.quality_options));
        app_window.set_quality_index(view.quality_index as i32);

        app_window.set_calculate_text(view.calculate.into());
        app_window.set_price_label(view.price_label.into());
        app_window.set_price_text(view.price_text.into());
        app_window.set_has_price(view.has_price);
        app_window.set_order_text(view.order.into());
    }

    fn show_toast(app_window: &AppWindow, toast_timer: &Rc<Timer>, toast: Toast) {
        app_window.set_toast_title(toast.title.as_str().into());
        app_window.set_toast_description(toast.description.as_str().into());
        app_window.set_toast_destructive(toast.is_destructive());
        app_window.set_toast_visible(true);

        let app_window_weak = app_window.as_weak();
        toast_timer.start(TimerMode::SingleShot, Duration::from_millis(TOAST_DURATION_MS), move || {
            if let Some(app_window) = app_window_weak.upgrade() {
                app_window.set_toast_visible(false);
            }
        });
    }
}

fn main() -> anyhow::Result<()> {
    // 初始化日志输出
    let _ = SubscriberBuilder::default()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    let settings_path = Settings::locate();
    let state = Rc::new(RefCell::new(AppState::from_settings_path(settings_path.as_deref())));

    let app = AppWindow::new().context("UI 初始化失败")?;

    // 创建VM桥接器并绑定UI回调
    let bridge = ViewModelBridge::new(&app, state);
    bridge.initialize_ui(&app);

    tracing::info!("应用启动成功，UI已初始化");
    app.run().context("UI 事件循环异常退出")?;
    Ok(())
}
