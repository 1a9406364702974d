// ==========================================
// 航空运营决策系统 - 客座领域模型
// ==========================================

use crate::domain::types::LoadStatus;
use serde::{Deserialize, Serialize};

fn default_seasonal_factor() -> f64 {
    1.0
}

// ==========================================
// PassengerLoadRecord - 航线客座历史
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerLoadRecord {
    pub route: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub historical_loads: Vec<u32>,
    #[serde(default)]
    pub current_bookings: u32,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default = "default_seasonal_factor")]
    pub seasonal_factor: f64,
}

// ==========================================
// LoadPrediction - 客座预测 (派生)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadPrediction {
    pub route: String,
    pub predicted_load: u32,
    pub current_bookings: u32,
    pub capacity: u32,
    pub load_factor: f64,
    pub status: LoadStatus,
    pub aircraft_type: String,
}
