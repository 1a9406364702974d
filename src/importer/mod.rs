// ==========================================
// 航空运营决策系统 - 导入层
// ==========================================
// 职责: 外部样本文件导入,生成批次快照
// 支持: JSON, CSV
// ==========================================

// 模块声明
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod snapshot_loader;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::CrewFieldMapper;
pub use file_parser::{CsvParser, JsonParser};
pub use snapshot_loader::SnapshotLoader;
