// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::asset::{AssetBucket, UploadedFile};
use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};
use std::sync::Arc;
use tracing::info;

/// 资源上传服务
#[derive(Clone)]
pub struct AssetService {
    storage: Arc<dyn StorageRepository>,
}

impl AssetService {
    pub fn new(storage: Arc<dyn StorageRepository>) -> Self {
        Self { storage }
    }

    /// 上传文件并返回公开访问地址
    ///
    /// 每次上传都使用新的随机对象名，不会覆盖已有对象。
    ///
    /// # 参数
    ///
    /// * `bucket` - 目标存储桶
    /// * `file` - 上传的文件
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 对象的公开访问地址
    /// * `Err(StorageError)` - 上传失败
    pub async fn upload(&self, bucket: AssetBucket, file: &UploadedFile) -> Result<String, StorageError> {
        let key = bucket.object_name(&file.file_name);
        self.storage
            .save(bucket, &key, &file.data, file.content_type.as_deref())
            .await?;

        info!(
            "Uploaded asset {}/{} ({} bytes)",
            bucket,
            key,
            file.data.len()
        );

        Ok(self.storage.public_url(bucket, &key))
    }
}
