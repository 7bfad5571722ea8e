//! 报价规则：材料、质量、填充率与价格公式

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::data_core::AppError;
use crate::model::form::FormError;

/// 基础价格（美元）
pub const BASE_PRICE: f64 = 50.0;

/// 打印材料
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    #[default]
    Pla,
    Abs,
    Petg,
    Resin,
}

impl Material {
    /// 下拉框中的展示顺序
    pub const ALL: [Material; 4] = [Material::Pla, Material::Abs, Material::Petg, Material::Resin];

    pub fn id(self) -> &'static str {
        match self {
            Material::Pla => "pla",
            Material::Abs => "abs",
            Material::Petg => "petg",
            Material::Resin => "resin",
        }
    }

    pub fn default_multiplier(self) -> f64 {
        match self {
            Material::Pla => 1.0,
            Material::Abs => 1.2,
            Material::Petg => 1.3,
            Material::Resin => 1.8,
        }
    }

    /// 在 `ALL` 中的下标（与UI下拉框索引一致）
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Material {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| FormError::UnknownOption(s.to_string()))
    }
}

/// 打印质量（层高档位）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    #[default]
    Medium,
    High,
}

impl Quality {
    pub const ALL: [Quality; 3] = [Quality::Low, Quality::Medium, Quality::High];

    pub fn id(self) -> &'static str {
        match self {
            Quality::Low => "low",
            Quality::Medium => "medium",
            Quality::High => "high",
        }
    }

    pub fn default_multiplier(self) -> f64 {
        match self {
            Quality::Low => 0.8,
            Quality::Medium => 1.0,
            Quality::High => 1.5,
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|q| *q == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Quality {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|q| q.id() == s)
            .ok_or_else(|| FormError::UnknownOption(s.to_string()))
    }
}

/// 填充率百分比：10..=100，步长 10
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Infill(u8);

impl Infill {
    pub const MIN: u8 = 10;
    pub const MAX: u8 = 100;
    pub const STEP: u8 = 10;

    pub fn new(percent: u8) -> Result<Self, FormError> {
        if !(Self::MIN..=Self::MAX).contains(&percent) || percent % Self::STEP != 0 {
            return Err(FormError::InfillOutOfRange(percent));
        }
        Ok(Self(percent))
    }

    /// 滑块原始值吸附到最近的步长，并夹在合法区间内
    pub fn from_slider(raw: f32) -> Self {
        if !raw.is_finite() {
            return Self::default();
        }
        let step = f32::from(Self::STEP);
        let snapped = (raw / step).round() * step;
        let clamped = snapped.clamp(f32::from(Self::MIN), f32::from(Self::MAX));
        Self(clamped as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// 1 + 百分比 / 100
    pub fn multiplier(self) -> f64 {
        1.0 + f64::from(self.0) / 100.0
    }
}

impl Default for Infill {
    fn default() -> Self {
        Self(20)
    }
}

impl TryFrom<u8> for Infill {
    type Error = FormError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Infill> for u8 {
    fn from(value: Infill) -> Self {
        value.0
    }
}

/// 报价参数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteParameters {
    pub material: Material,
    pub infill: Infill,
    pub quality: Quality,
}

/// 价格表：基础价与各档倍率
///
/// 表中缺失的条目按倍率 1 计算。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTable {
    pub base: f64,
    pub materials: BTreeMap<Material, f64>,
    pub qualities: BTreeMap<Quality, f64>,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            base: BASE_PRICE,
            materials: Material::ALL.into_iter().map(|m| (m, m.default_multiplier())).collect(),
            qualities: Quality::ALL.into_iter().map(|q| (q, q.default_multiplier())).collect(),
        }
    }
}

impl PriceTable {
    pub fn material_multiplier(&self, material: Material) -> f64 {
        self.materials.get(&material).copied().unwrap_or(1.0)
    }

    pub fn quality_multiplier(&self, quality: Quality) -> f64 {
        self.qualities.get(&quality).copied().unwrap_or(1.0)
    }

    /// 基础价与所有倍率必须是有限正数
    pub fn validate(&self) -> Result<(), AppError> {
        if !(self.base.is_finite() && self.base > 0.0) {
            return Err(AppError::State(format!("基础价格无效: {}", self.base)));
        }
        let materials = self.materials.iter().map(|(m, v)| (m.id(), *v));
        let qualities = self.qualities.iter().map(|(q, v)| (q.id(), *v));
        for (id, multiplier) in materials.chain(qualities) {
            if !(multiplier.is_finite() && multiplier > 0.0) {
                return Err(AppError::State(format!("倍率无效: {} = {}", id, multiplier)));
            }
        }
        Ok(())
    }

    /// round(base × 材料 × 质量 × 填充)，乘法顺序固定
    pub fn quote(&self, params: &QuoteParameters) -> u32 {
        let raw = self.base
            * self.material_multiplier(params.material)
            * self.quality_multiplier(params.quality)
            * params.infill.multiplier();
        let rounded = round_half_up(raw);
        if rounded <= 0.0 {
            0
        } else if rounded >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            rounded as u32
        }
    }
}

/// 四舍五入，.5 一律向正无穷进位
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
