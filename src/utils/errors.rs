// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::repositories::company_repository::RepositoryError;
use crate::domain::repositories::storage_repository::StorageError;

/// 门户错误类型
///
/// 所有读写操作对调用方暴露的统一错误分类，不会自动重试
#[derive(Error, Debug)]
pub enum PortalError {
    /// 字段缺失或格式错误，在任何远程调用之前报告
    #[error("Validation failed: {0}")]
    Validation(String),

    /// 资源上传失败，不会写入记录
    #[error("Upload failed: {0}")]
    Upload(String),

    /// 操作目标不存在
    #[error("{0} not found")]
    NotFound(String),

    /// 其他存储或服务调用失败
    #[error("Service error: {0}")]
    Service(String),
}

impl PortalError {
    /// 转换仓库错误，NotFound 时带上目标记录的描述
    pub fn from_repository(err: RepositoryError, record: impl std::fmt::Display) -> Self {
        match err {
            RepositoryError::NotFound => PortalError::NotFound(record.to_string()),
            other => other.into(),
        }
    }
}

impl From<RepositoryError> for PortalError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => PortalError::NotFound("Record".to_string()),
            RepositoryError::Database(e) => PortalError::Service(e.to_string()),
        }
    }
}

impl From<StorageError> for PortalError {
    fn from(err: StorageError) -> Self {
        PortalError::Upload(err.to_string())
    }
}

impl From<ValidationErrors> for PortalError {
    fn from(errors: ValidationErrors) -> Self {
        PortalError::Validation(errors.to_string())
    }
}
