// ==========================================
// 航空运营决策系统 - 客座预测引擎
// ==========================================
// 职责: 按航线客座历史预测每个航班的旅客量与客座率分档
// 输入: 航班 + 航线客座记录 + 机型座位数
// 输出: LoadPrediction (机型未配置的航班跳过)
// ==========================================

use crate::config::OpsConfig;
use crate::domain::flight::Flight;
use crate::domain::load::{LoadPrediction, PassengerLoadRecord};
use crate::domain::snapshot::OpsSnapshot;
use crate::domain::types::LoadStatus;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub struct LoadForecaster {
    config: Arc<OpsConfig>,
}

impl LoadForecaster {
    pub fn new(config: Arc<OpsConfig>) -> Self {
        Self { config }
    }

    /// 批次内全部航班的客座预测
    #[instrument(skip(self, snapshot), fields(flights = snapshot.flights().len()))]
    pub fn predict_all(&self, snapshot: &OpsSnapshot) -> BTreeMap<String, LoadPrediction> {
        let predictions: BTreeMap<String, LoadPrediction> = snapshot
            .flights()
            .iter()
            .filter_map(|flight| {
                self.predict(flight, snapshot)
                    .map(|p| (flight.flight_id.clone(), p))
            })
            .collect();

        info!(predictions = predictions.len(), "客座预测完成");
        predictions
    }

    /// 单航班客座预测
    ///
    /// 有航线记录走历史均值;无记录按枢纽系数估算 (状态 PREDICTED)
    pub fn predict(&self, flight: &Flight, snapshot: &OpsSnapshot) -> Option<LoadPrediction> {
        let aircraft_type = self.config.resolve_aircraft_type(flight);
        let Some(spec) = self.config.aircraft_spec(aircraft_type) else {
            warn!(flight_id = %flight.flight_id, aircraft_type, "机型未配置,跳过客座预测");
            return None;
        };
        if spec.capacity == 0 {
            warn!(flight_id = %flight.flight_id, aircraft_type, "机型座位数为 0,跳过客座预测");
            return None;
        }

        let records = snapshot.loads_for_route(&flight.route);
        let prediction = if records.is_empty() {
            self.predict_default(flight, aircraft_type, spec.capacity)
        } else {
            self.predict_from_history(flight, aircraft_type, spec.capacity, &records)
        };

        debug!(
            flight_id = %flight.flight_id,
            predicted_load = prediction.predicted_load,
            status = %prediction.status,
            "客座预测"
        );
        Some(prediction)
    }

    /// 基于历史记录的预测
    ///
    /// 1) 每条记录取最近 history_window 个历史量,合并求均值
    /// 2) 乘以记录的季节系数均值,不超过座位数
    /// 3) 无历史量时取 座位数 × no_history_factor
    /// 4) 首条记录的当前订座超过预测时,改为 订座 × booking_uplift (可超过座位数)
    fn predict_from_history(
        &self,
        flight: &Flight,
        aircraft_type: &str,
        capacity: u32,
        records: &[&PassengerLoadRecord],
    ) -> LoadPrediction {
        let defaults = &self.config.load_defaults;
        let capacity_f = f64::from(capacity);

        let recent: Vec<u32> = records
            .iter()
            .flat_map(|record| {
                let loads = &record.historical_loads;
                let start = loads.len().saturating_sub(defaults.history_window);
                loads[start..].iter().copied()
            })
            .collect();

        let mut predicted = if recent.is_empty() {
            capacity_f * defaults.no_history_factor
        } else {
            let mean = recent.iter().map(|&v| f64::from(v)).sum::<f64>() / recent.len() as f64;
            let seasonal = records.iter().map(|r| r.seasonal_factor).sum::<f64>() / records.len() as f64;
            (mean * seasonal).min(capacity_f)
        };

        let current_bookings = records[0].current_bookings;
        if f64::from(current_bookings) > predicted {
            predicted = f64::from(current_bookings) * defaults.booking_uplift;
        }

        let load_factor = predicted / capacity_f;

        LoadPrediction {
            route: flight.route.clone(),
            predicted_load: predicted.round() as u32,
            current_bookings,
            capacity,
            load_factor,
            status: LoadStatus::from_load_factor(load_factor),
            aircraft_type: aircraft_type.to_string(),
        }
    }

    /// 无航线记录: 按端点命中的首个枢纽系数估算
    fn predict_default(&self, flight: &Flight, aircraft_type: &str, capacity: u32) -> LoadPrediction {
        let factor = self.hub_factor(flight);
        let predicted = f64::from(capacity) * factor;

        LoadPrediction {
            route: flight.route.clone(),
            predicted_load: predicted.round() as u32,
            current_bookings: 0,
            capacity,
            load_factor: factor,
            status: LoadStatus::Predicted,
            aircraft_type: aircraft_type.to_string(),
        }
    }

    fn hub_factor(&self, flight: &Flight) -> f64 {
        let defaults = &self.config.load_defaults;
        let Some((origin, destination)) = flight.endpoints() else {
            return defaults.fallback_factor;
        };

        defaults
            .hub_factors
            .iter()
            .find(|hub| hub.airports.iter().any(|a| a == origin || a == destination))
            .map(|hub| hub.factor)
            .unwrap_or(defaults.fallback_factor)
    }
}
