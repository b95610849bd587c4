// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use bytes::Bytes;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use uuid::Uuid;

/// 资源存储桶
///
/// Logo图片和APK安装包分别存放在不同的存储桶中。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetBucket {
    /// 公司Logo
    CompanyLogos,
    /// APK安装包
    ApkFiles,
}

impl AssetBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetBucket::CompanyLogos => "company-logos",
            AssetBucket::ApkFiles => "apk-files",
        }
    }

    /// 生成新的随机对象名
    ///
    /// Logo保留原始文件扩展名，APK统一使用 `.apk` 扩展名。
    pub fn object_name(&self, original_file_name: &str) -> String {
        let id = Uuid::new_v4();
        match self {
            AssetBucket::ApkFiles => format!("{}.apk", id),
            AssetBucket::CompanyLogos => match file_extension(original_file_name) {
                Some(ext) => format!("{}.{}", id, ext),
                None => id.to_string(),
            },
        }
    }
}

impl fmt::Display for AssetBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "company-logos" => Ok(AssetBucket::CompanyLogos),
            "apk-files" => Ok(AssetBucket::ApkFiles),
            other => Err(format!("Unknown asset bucket: {}", other)),
        }
    }
}

/// 上传的文件
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// 客户端提供的原始文件名
    pub file_name: String,
    /// 客户端声明的MIME类型
    pub content_type: Option<String>,
    /// 文件内容
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            data: data.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn file_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| ext.to_ascii_lowercase())
}
