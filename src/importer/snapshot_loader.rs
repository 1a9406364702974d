// ==========================================
// 航空运营决策系统 - 批次快照加载器
// ==========================================
// 职责: 从数据目录读取五类样本文件,组装 OpsSnapshot
// 约定: 文件缺失 → 空集合 + warn;文件损坏 → ImportError
// 机组: 优先 JSON,缺失时回退 CSV 名册
// ==========================================

use crate::domain::crew::CrewMember;
use crate::domain::snapshot::OpsSnapshot;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::CrewFieldMapper;
use crate::importer::file_parser::{CsvParser, JsonParser};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

pub const FLIGHT_SCHEDULE_FILE: &str = "sample_flight_schedule.json";
pub const CREW_SCHEDULE_FILE: &str = "sample_crew_schedules.json";
pub const CREW_ROSTER_CSV_FILE: &str = "sample_crew_schedules.csv";
pub const ENGINE_LOG_FILE: &str = "sample_engine_logs.json";
pub const WEATHER_LOG_FILE: &str = "sample_weather_logs.json";
pub const PASSENGER_LOAD_FILE: &str = "sample_passenger_load.json";

// ==========================================
// SnapshotLoader - 快照加载器
// ==========================================
pub struct SnapshotLoader {
    data_dir: PathBuf,
}

impl SnapshotLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// 加载完整批次快照
    ///
    /// # 返回
    /// - Ok(OpsSnapshot): 日志已按时间倒序
    /// - Err(DirectoryNotFound): 数据目录不存在
    /// - Err(JsonParseError / CsvParseError / ...): 文件内容无法解析
    #[instrument(skip(self), fields(data_dir = %self.data_dir.display()))]
    pub fn load(&self) -> ImportResult<OpsSnapshot> {
        if !self.data_dir.is_dir() {
            return Err(ImportError::DirectoryNotFound(
                self.data_dir.display().to_string(),
            ));
        }

        let flights = self.load_json(FLIGHT_SCHEDULE_FILE)?;
        let crew = self.load_crew()?;
        let engine_logs = self.load_json(ENGINE_LOG_FILE)?;
        let weather_logs = self.load_json(WEATHER_LOG_FILE)?;
        let passenger_loads = self.load_json(PASSENGER_LOAD_FILE)?;

        let snapshot = OpsSnapshot::new(flights, crew, engine_logs, weather_logs, passenger_loads);

        info!(
            flights = snapshot.flights().len(),
            crew = snapshot.crew().len(),
            engine_logs = snapshot.engine_logs().len(),
            weather_logs = snapshot.weather_logs().len(),
            passenger_loads = snapshot.passenger_loads().len(),
            "批次快照加载完成"
        );

        Ok(snapshot)
    }

    /// 机组名册: JSON 优先,其次 CSV
    fn load_crew(&self) -> ImportResult<Vec<CrewMember>> {
        match JsonParser.parse_records(&self.data_dir.join(CREW_SCHEDULE_FILE)) {
            Err(ImportError::FileNotFound(_)) => {
                debug!(file = CREW_SCHEDULE_FILE, "JSON 名册缺失,尝试 CSV");
            }
            loaded => return loaded,
        }

        let rows = match CsvParser.parse_to_raw_records(&self.data_dir.join(CREW_ROSTER_CSV_FILE)) {
            Err(ImportError::FileNotFound(_)) => {
                warn!(file = CREW_SCHEDULE_FILE, "机组文件缺失,按空名册处理");
                return Ok(Vec::new());
            }
            rows => rows?,
        };

        let mapper = CrewFieldMapper;
        let crew = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| mapper.map_to_crew_member(row, idx + 1))
            .collect::<ImportResult<Vec<_>>>()?;

        info!(file = CREW_ROSTER_CSV_FILE, crew = crew.len(), "已从 CSV 加载机组名册");
        Ok(crew)
    }

    fn load_json<T: DeserializeOwned>(&self, file_name: &str) -> ImportResult<Vec<T>> {
        match JsonParser.parse_records(&self.data_dir.join(file_name)) {
            Err(ImportError::FileNotFound(_)) => {
                warn!(file = file_name, "数据文件缺失,按空集合处理");
                Ok(Vec::new())
            }
            parsed => parsed,
        }
    }
}
