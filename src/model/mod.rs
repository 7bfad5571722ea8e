pub mod data_core;
pub mod form;
pub mod i18n;
pub mod notify;
pub mod pricing;
pub mod settings;
