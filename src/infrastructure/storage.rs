// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use crate::config::settings::StorageSettings;
use crate::domain::models::asset::AssetBucket;
use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};

/// 检查对象键，拒绝路径分隔符和相对路径
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() || key.contains('/') || key.contains('\\') || key.starts_with('.') {
        return Err(StorageError::Other(format!("Invalid object key: {}", key)));
    }
    Ok(())
}

fn join_public_url(base: &str, bucket: AssetBucket, key: &str) -> String {
    format!("{}/{}/{}", base.trim_end_matches('/'), bucket, key)
}

/// S3 对象存储实现
///
/// 所有资源桶共用一个S3存储桶，资源桶名作为对象键前缀
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3Storage {
    pub fn new(
        region: String,
        bucket: String,
        access_key: String,
        secret_key: String,
        endpoint: Option<String>,
        public_base_url: Option<String>,
    ) -> Self {
        let credentials =
            aws_sdk_s3::config::Credentials::new(access_key, secret_key, None, None, "static");

        let public_base_url = public_base_url.unwrap_or_else(|| match &endpoint {
            Some(ep) => format!("{}/{}", ep.trim_end_matches('/'), bucket),
            None => format!("https://{}.s3.{}.amazonaws.com", bucket, region),
        });

        let mut config_builder = aws_sdk_s3::config::Builder::new()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new(region))
            .credentials_provider(credentials);

        if let Some(ep) = endpoint {
            config_builder = config_builder.endpoint_url(ep).force_path_style(true);
        }

        let config = config_builder.build();
        let client = aws_sdk_s3::Client::from_conf(config);

        Self {
            client,
            bucket,
            public_base_url,
        }
    }

    fn object_key(bucket: AssetBucket, key: &str) -> String {
        format!("{}/{}", bucket, key)
    }
}

#[async_trait]
impl StorageRepository for S3Storage {
    async fn save(
        &self,
        bucket: AssetBucket,
        key: &str,
        data: &[u8],
        content_type: Option<&str>,
    ) -> Result<(), StorageError> {
        validate_key(key)?;
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(Self::object_key(bucket, key))
            .set_content_type(content_type.map(str::to_string))
            .body(ByteStream::from(data.to_vec()))
            .send()
            .await
            .map_err(|e| StorageError::Other(e.to_string()))?;
        Ok(())
    }

    async fn get(&self, bucket: AssetBucket, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        validate_key(key)?;
        match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(Self::object_key(bucket, key))
            .send()
            .await
        {
            Ok(output) => {
                let data = output
                    .body
                    .collect()
                    .await
                    .map_err(|e| StorageError::Other(e.to_string()))?
                    .into_bytes();
                Ok(Some(data.to_vec()))
            }
            Err(e) => {
                let service_error = e.into_service_error();
                if service_error.is_no_such_key() {
                    Ok(None)
                } else {
                    Err(StorageError::Other(service_error.to_string()))
                }
            }
        }
    }

    fn public_url(&self, bucket: AssetBucket, key: &str) -> String {
        join_public_url(&self.public_base_url, bucket, key)
    }
}

/// 本地文件系统存储实现
///
/// 文件由服务自身的 `/assets` 路由对外提供
pub struct LocalStorage {
    base_path: PathBuf,
    public_base_url: String,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            public_base_url: public_base_url.into(),
        }
    }

    fn get_full_path(&self, bucket: AssetBucket, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.base_path.join(bucket.as_str()).join(key))
    }
}

#[async_trait]
impl StorageRepository for LocalStorage {
    async fn save(
        &self,
        bucket: AssetBucket,
        key: &str,
        data: &[u8],
        _content_type: Option<&str>,
    ) -> Result<(), StorageError> {
        let full_path = self.get_full_path(bucket, key)?;

        // 确保目录存在
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::File::create(&full_path).await?;
        file.write_all(data).await?;
        file.flush().await?;

        Ok(())
    }

    async fn get(&self, bucket: AssetBucket, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let full_path = self.get_full_path(bucket, key)?;

        match fs::read(&full_path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn public_url(&self, bucket: AssetBucket, key: &str) -> String {
        join_public_url(&self.public_base_url, bucket, key)
    }
}

/// 内存存储实现（用于测试和本地演示）
pub struct InMemoryStorage {
    data: Arc<RwLock<HashMap<(AssetBucket, String), Vec<u8>>>>,
    public_base_url: String,
}

impl InMemoryStorage {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
            public_base_url: public_base_url.into(),
        }
    }

    /// 当前保存的对象数量
    pub async fn len(&self) -> usize {
        self.data.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.data.read().await.is_empty()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new("memory://assets")
    }
}

#[async_trait]
impl StorageRepository for InMemoryStorage {
    async fn save(
        &self,
        bucket: AssetBucket,
        key: &str,
        data: &[u8],
        _content_type: Option<&str>,
    ) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut map = self.data.write().await;
        map.insert((bucket, key.to_string()), data.to_vec());
        Ok(())
    }

    async fn get(&self, bucket: AssetBucket, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let map = self.data.read().await;
        Ok(map.get(&(bucket, key.to_string())).cloned())
    }

    fn public_url(&self, bucket: AssetBucket, key: &str) -> String {
        join_public_url(&self.public_base_url, bucket, key)
    }
}

/// 存储工厂函数
pub fn create_storage_repository(
    settings: &StorageSettings,
) -> Result<Arc<dyn StorageRepository>, StorageError> {
    match settings.storage_type.as_str() {
        "local" => {
            let base_path = settings
                .local_path
                .clone()
                .unwrap_or_else(|| "./storage".to_string());
            Ok(Arc::new(LocalStorage::new(
                base_path,
                settings.public_base_url.clone(),
            )))
        }
        "s3" => {
            let required = |value: &Option<String>, name: &str| {
                value
                    .clone()
                    .ok_or_else(|| StorageError::Other(format!("Missing storage setting: {}", name)))
            };

            Ok(Arc::new(S3Storage::new(
                required(&settings.s3_region, "s3_region")?,
                required(&settings.s3_bucket, "s3_bucket")?,
                required(&settings.s3_access_key, "s3_access_key")?,
                required(&settings.s3_secret_key, "s3_secret_key")?,
                settings.s3_endpoint.clone(),
                settings.s3_public_base_url.clone(),
            )))
        }
        "memory" => Ok(Arc::new(InMemoryStorage::new(
            settings.public_base_url.clone(),
        ))),
        other => Err(StorageError::Other(format!(
            "Unsupported storage type: {}",
            other
        ))),
    }
}
