// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use flight_ops_engine::domain::crew::CrewMember;
use flight_ops_engine::domain::flight::Flight;
use flight_ops_engine::domain::load::PassengerLoadRecord;
use flight_ops_engine::domain::telemetry::{
    EngineLogEntry, EngineMetrics, WeatherData, WeatherLogEntry,
};
use flight_ops_engine::domain::types::{
    CrewRole, CrewStatus, FlightStatus, LogStatus, WeatherCondition,
};

/// 固定评估时间 (保证结果可复现)
pub fn fixed_now() -> NaiveDateTime {
    at_hour(12)
}

pub fn at_hour(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 20)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

// ==========================================
// Flight 构建器
// ==========================================

pub struct FlightBuilder {
    flight: Flight,
}

impl FlightBuilder {
    pub fn new(flight_id: &str, route: &str) -> Self {
        Self {
            flight: Flight {
                flight_id: flight_id.to_string(),
                route: route.to_string(),
                aircraft_id: "GA-001".to_string(),
                aircraft_type: Some("A320".to_string()),
                scheduled_departure: Some(at_hour(14)),
                scheduled_arrival: Some(at_hour(22)),
                status: FlightStatus::Scheduled,
                current_delay: 0,
                runway_queue: 10,
                boarding_time_minutes: 30,
                gate: Some("G1".to_string()),
            },
        }
    }

    pub fn aircraft(mut self, aircraft_id: &str) -> Self {
        self.flight.aircraft_id = aircraft_id.to_string();
        self
    }

    pub fn aircraft_type(mut self, aircraft_type: &str) -> Self {
        self.flight.aircraft_type = Some(aircraft_type.to_string());
        self
    }

    pub fn runway_queue(mut self, minutes: u32) -> Self {
        self.flight.runway_queue = minutes;
        self
    }

    pub fn boarding(mut self, minutes: u32) -> Self {
        self.flight.boarding_time_minutes = minutes;
        self
    }

    pub fn current_delay(mut self, minutes: u32) -> Self {
        self.flight.current_delay = minutes;
        self
    }

    pub fn status(mut self, status: FlightStatus) -> Self {
        self.flight.status = status;
        self
    }

    pub fn build(self) -> Flight {
        self.flight
    }
}

// ==========================================
// CrewMember 构建器
// ==========================================

pub struct CrewBuilder {
    member: CrewMember,
}

impl CrewBuilder {
    pub fn new(crew_id: &str, role: CrewRole) -> Self {
        Self {
            member: CrewMember {
                crew_id: crew_id.to_string(),
                name: format!("Crew {}", crew_id),
                role,
                duty_hours_today: 4.0,
                rest_hours_remaining: 12.0,
                assigned_flights: vec![],
                status: CrewStatus::Available,
                current_location: Some("DEL".to_string()),
            },
        }
    }

    pub fn duty_hours(mut self, hours: f64) -> Self {
        self.member.duty_hours_today = hours;
        self
    }

    pub fn rest_hours(mut self, hours: f64) -> Self {
        self.member.rest_hours_remaining = hours;
        self
    }

    pub fn flights(mut self, flights: &[&str]) -> Self {
        self.member.assigned_flights = flights.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn status(mut self, status: CrewStatus) -> Self {
        self.member.status = status;
        self
    }

    pub fn build(self) -> CrewMember {
        self.member
    }
}

/// 可派飞行员 + 可派乘务员名册
pub fn available_roster(pilots: usize, attendants: usize) -> Vec<CrewMember> {
    let mut roster: Vec<CrewMember> = (0..pilots)
        .map(|i| CrewBuilder::new(&format!("P{}", i + 1), CrewRole::Pilot).build())
        .collect();
    roster.extend(
        (0..attendants)
            .map(|i| CrewBuilder::new(&format!("A{}", i + 1), CrewRole::Attendant).build()),
    );
    roster
}

// ==========================================
// 遥测构建器
// ==========================================

/// 全部读数正常的发动机指标
pub fn nominal_metrics() -> EngineMetrics {
    EngineMetrics {
        engine_thrust_percent: Some(98.0),
        engine_vibration: Some(3.0),
        fuel_burn_rate: Some(2500.0),
        oil_temperature: Some(95.0),
        oil_pressure: Some(42.0),
        cabin_pressure_psi: Some(11.0),
        cabin_temperature_c: Some(22.0),
        turbulence_level: Some(2.0),
    }
}

pub fn engine_log(
    aircraft_id: &str,
    timestamp: NaiveDateTime,
    metrics: EngineMetrics,
    status: LogStatus,
) -> EngineLogEntry {
    EngineLogEntry {
        aircraft_id: aircraft_id.to_string(),
        flight_id: None,
        timestamp,
        metrics,
        status,
    }
}

pub fn weather_log(
    airport: &str,
    timestamp: NaiveDateTime,
    conditions: WeatherCondition,
    crosswind_knots: f64,
    visibility_meters: f64,
) -> WeatherLogEntry {
    WeatherLogEntry {
        airport: airport.to_string(),
        timestamp,
        weather_data: WeatherData {
            conditions,
            visibility_meters,
            temperature_c: Some(18.0),
            wind_speed_knots: Some(12.0),
            wind_direction: Some(270),
            humidity_percent: Some(60.0),
            pressure_hpa: Some(1013.0),
        },
        crosswind_knots,
    }
}

pub fn load_record(route: &str, historical_loads: Vec<u32>, current_bookings: u32) -> PassengerLoadRecord {
    PassengerLoadRecord {
        route: route.to_string(),
        date: Some("2026-01-20".to_string()),
        historical_loads,
        current_bookings,
        capacity: None,
        seasonal_factor: 1.0,
    }
}
