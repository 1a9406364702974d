// ==========================================
// 航空运营决策系统 - 字段映射器实现
// ==========================================
// 职责: CSV 机组名册原始行 → CrewMember + 类型转换
// 约定: assigned_flights 以 ';' 分隔;可选数值列缺失取 0
// ==========================================

use crate::domain::crew::CrewMember;
use crate::domain::types::{CrewRole, CrewStatus};
use crate::importer::error::{ImportError, ImportResult};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

pub struct CrewFieldMapper;

impl CrewFieldMapper {
    /// 单行映射 (row_number 从 1 开始,不含表头)
    pub fn map_to_crew_member(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> ImportResult<CrewMember> {
        Ok(CrewMember {
            crew_id: self.require_string(row, "crew_id", row_number)?,
            name: self.get_string(row, "name").unwrap_or_default(),
            role: self.parse_enum::<CrewRole>(row, "role", row_number)?,
            duty_hours_today: self.parse_f64(row, "duty_hours_today", row_number)?,
            rest_hours_remaining: self.parse_f64(row, "rest_hours_remaining", row_number)?,
            assigned_flights: self.parse_list(row, "assigned_flights"),
            status: self.parse_enum::<CrewStatus>(row, "status", row_number)?,
            current_location: self.get_string(row, "current_location"),
        })
    }

    /// 提取字符串字段 (空串视为缺失)
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        row.get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
    }

    fn require_string(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<String> {
        self.get_string(row, key).ok_or_else(|| ImportError::FieldMissing {
            row: row_number,
            field: key.to_string(),
        })
    }

    /// 解析浮点数 (缺失取 0)
    fn parse_f64(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<f64> {
        match self.get_string(row, key) {
            None => Ok(0.0),
            Some(v) => v.parse::<f64>().map_err(|e| ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: format!("无法解析为数值: {} ({})", v, e),
            }),
        }
    }

    /// 按枚举的序列化名称解析 (与 JSON 输入共用别名)
    fn parse_enum<T: DeserializeOwned>(
        &self,
        row: &HashMap<String, String>,
        key: &str,
        row_number: usize,
    ) -> ImportResult<T> {
        let raw = self.require_string(row, key, row_number)?;
        serde_json::from_value(serde_json::Value::String(raw.clone())).map_err(|_| {
            ImportError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: format!("未知取值: {}", raw),
            }
        })
    }

    fn parse_list(&self, row: &HashMap<String, String>, key: &str) -> Vec<String> {
        self.get_string(row, key)
            .map(|v| {
                v.split(';')
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}
