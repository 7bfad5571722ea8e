//! 界面文案：三种语言的静态标签表
//!
//! 每种语言是一条 `Labels` 记录，字段与 `LabelKey` 一一对应，
//! 因此任何语言缺少某个标签都会在编译期报错。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::form::FormError;
use crate::model::pricing::{Material, Quality};

/// 界面语言
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
    Cn,
}

impl Language {
    /// 语言切换按钮的顺序
    pub const ALL: [Language; 3] = [Language::Ru, Language::En, Language::Cn];

    pub fn code(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
            Language::Cn => "cn",
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Language::Ru => &RU,
            Language::En => &EN,
            Language::Cn => &CN,
        }
    }

    pub fn text(self, key: LabelKey) -> &'static str {
        self.labels().get(key)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or_else(|| FormError::UnknownOption(s.to_string()))
    }
}

/// 标签标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    Title,
    Subtitle,
    Upload,
    Calculate,
    Material,
    Infill,
    Quality,
    Price,
    Order,
    FileFormat,
    Specs,
    High,
    Medium,
    Low,
    Pla,
    Abs,
    Petg,
    Resin,
}

impl LabelKey {
    pub const ALL: [LabelKey; 18] = [
        LabelKey::Title,
        LabelKey::Subtitle,
        LabelKey::Upload,
        LabelKey::Calculate,
        LabelKey::Material,
        LabelKey::Infill,
        LabelKey::Quality,
        LabelKey::Price,
        LabelKey::Order,
        LabelKey::FileFormat,
        LabelKey::Specs,
        LabelKey::High,
        LabelKey::Medium,
        LabelKey::Low,
        LabelKey::Pla,
        LabelKey::Abs,
        LabelKey::Petg,
        LabelKey::Resin,
    ];
}

impl From<Material> for LabelKey {
    fn from(material: Material) -> Self {
        match material {
            Material::Pla => LabelKey::Pla,
            Material::Abs => LabelKey::Abs,
            Material::Petg => LabelKey::Petg,
            Material::Resin => LabelKey::Resin,
        }
    }
}

impl From<Quality> for LabelKey {
    fn from(quality: Quality) -> Self {
        match quality {
            Quality::Low => LabelKey::Low,
            Quality::Medium => LabelKey::Medium,
            Quality::High => LabelKey::High,
        }
    }
}

/// 单一语言的全部标签
#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub upload: &'static str,
    pub calculate: &'static str,
    pub material: &'static str,
    pub infill: &'static str,
    pub quality: &'static str,
    pub price: &'static str,
    pub order: &'static str,
    pub file_format: &'static str,
    pub specs: &'static str,
    pub high: &'static str,
    pub medium: &'static str,
    pub low: &'static str,
    pub pla: &'static str,
    pub abs: &'static str,
    pub petg: &'static str,
    pub resin: &'static str,
}

impl Labels {
    pub fn get(&self, key: LabelKey) -> &'static str {
        match key {
            LabelKey::Title => self.title,
            LabelKey::Subtitle => self.subtitle,
            LabelKey::Upload => self.upload,
            LabelKey::Calculate => self.calculate,
            LabelKey::Material => self.material,
            LabelKey::Infill => self.infill,
            LabelKey::Quality => self.quality,
            LabelKey::Price => self.price,
            LabelKey::Order => self.order,
            LabelKey::FileFormat => self.file_format,
            LabelKey::Specs => self.specs,
            LabelKey::High => self.high,
            LabelKey::Medium => self.medium,
            LabelKey::Low => self.low,
            LabelKey::Pla => self.pla,
            LabelKey::Abs => self.abs,
            LabelKey::Petg => self.petg,
            LabelKey::Resin => self.resin,
        }
    }
}

static RU: Labels = Labels {
    title: "3D ПЕЧАТЬ НА ЗАКАЗ",
    subtitle: "Профессиональная 3D печать любой сложности",
    upload: "Загрузить модель",
    calculate: "Рассчитать стоимость",
    material: "Материал",
    infill: "Заполнение",
    quality: "Качество",
    price: "Стоимость",
    order: "Заказать",
    file_format: "Загрузите файл .STL",
    specs: "Характеристики",
    high: "Высокое",
    medium: "Среднее",
    low: "Низкое",
    pla: "PLA пластик",
    abs: "ABS пластик",
    petg: "PETG пластик",
    resin: "Фотополимер",
};

static EN: Labels = Labels {
    title: "3D PRINTING SERVICE",
    subtitle: "Professional 3D printing of any complexity",
    upload: "Upload Model",
    calculate: "Calculate Price",
    material: "Material",
    infill: "Infill",
    quality: "Quality",
    price: "Price",
    order: "Order",
    file_format: "Upload .STL file",
    specs: "Specifications",
    high: "High",
    medium: "Medium",
    low: "Low",
    pla: "PLA plastic",
    abs: "ABS plastic",
    petg: "PETG plastic",
    resin: "Resin",
};

static CN: Labels = Labels {
    title: "定制3D打印",
    subtitle: "任何复杂度的专业3D打印",
    upload: "上传模型",
    calculate: "计算价格",
    material: "材料",
    infill: "填充",
    quality: "质量",
    price: "价格",
    order: "订购",
    file_format: "上传.STL文件",
    specs: "规格",
    high: "高",
    medium: "中",
    low: "低",
    pla: "PLA塑料",
    abs: "ABS塑料",
    petg: "PETG塑料",
    resin: "光敏树脂",
};
