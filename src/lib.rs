//! 3D打印报价工具库
//!
//! 提供报价表单状态、价格公式、三语界面文案与通知模型
//! 遵循MVVM架构模式，界面层只消费 `FormView` 快照

pub mod model;
pub mod utils;
pub mod vm;

// 重新导出主要类型
pub use model::data_core::{AppError, AppState};
pub use model::form::{FormError, FormEvent, QuoteForm, UploadedFile};
pub use model::i18n::{LabelKey, Language};
pub use model::notify::{Severity, Toast, ToastSink};
pub use model::pricing::{Infill, Material, PriceTable, Quality, QuoteParameters};
pub use model::settings::Settings;
pub use vm::bridge::FormView;
