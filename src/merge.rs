//! 题目合并模块
//!
//! 把两个题目数组按顺序拼接，并把 id 字段改写成从 1 开始的连续序号。
//! 除 id 外的字段原样保留。输入必须是 JSON 对象数组，校验不通过时
//! 整体失败，不写任何输出。

use crate::error::{AppError, AppResult, ValidationError};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// 读取题目文件并校验为对象数组
///
/// # 参数
/// - `path`: 输入文件路径
///
/// # 返回
/// 返回题目数组；文件不是 JSON 数组或元素不是对象时返回校验错误
pub fn load_question_array(path: &Path) -> AppResult<Vec<Value>> {
    let path_display = path.display().to_string();

    let content =
        fs::read_to_string(path).map_err(|e| AppError::file_read_failed(&path_display, e))?;

    let value: Value = serde_json::from_str(&content).map_err(|e| {
        AppError::Validation(ValidationError::InvalidJson {
            path: path_display.clone(),
            source: Box::new(e),
        })
    })?;

    let Value::Array(questions) = value else {
        return Err(AppError::Validation(ValidationError::NotAnArray {
            path: path_display,
        }));
    };

    for (index, question) in questions.iter().enumerate() {
        if !question.is_object() {
            return Err(AppError::Validation(ValidationError::ElementNotAnObject {
                path: path_display,
                index,
            }));
        }
    }

    Ok(questions)
}

/// 合并两组题目并重新编号
///
/// 第一组全部在前、第二组全部在后，各自保持原始顺序；
/// id 改写为 1 起始的连续序号，原有 id 丢弃
pub fn merge_question_sets(first: Vec<Value>, second: Vec<Value>) -> Vec<Value> {
    first
        .into_iter()
        .chain(second)
        .enumerate()
        .map(|(index, mut question)| {
            if let Value::Object(fields) = &mut question {
                fields.insert("id".to_string(), json!(index + 1));
            }
            question
        })
        .collect()
}

/// 把合并结果整体写入输出文件
///
/// 先完成序列化再一次性写盘，失败时不会留下半截输出
pub fn write_question_array(path: &Path, questions: &[Value]) -> AppResult<()> {
    let path_display = path.display().to_string();

    let content = serde_json::to_string_pretty(questions)
        .map_err(|e| AppError::Other(format!("序列化失败: {}", e)))?;

    fs::write(path, content).map_err(|e| AppError::file_write_failed(path_display, e))?;

    Ok(())
}
