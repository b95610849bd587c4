// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::asset::AssetBucket;
use async_trait::async_trait;
use thiserror::Error;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 存储错误
    #[error("Storage error: {0}")]
    Other(String),
}

/// 存储仓库特质
///
/// 定义对象存储访问接口，对象按存储桶和键定位
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// 使用指定键保存数据到存储中
    async fn save(
        &self,
        bucket: AssetBucket,
        key: &str,
        data: &[u8],
        content_type: Option<&str>,
    ) -> Result<(), StorageError>;

    /// 根据键从存储中检索数据
    async fn get(&self, bucket: AssetBucket, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// 解析对象的公开访问地址
    fn public_url(&self, bucket: AssetBucket, key: &str) -> String;
}
