// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::asset::UploadedFile;
use crate::presentation::errors::AppError;
use crate::utils::errors::PortalError;
use axum::extract::{FromRequest, Multipart, Request};
use std::collections::HashMap;
use uuid::Uuid;

/// multipart 表单
///
/// 带文件名的字段作为文件收集，其余字段按文本收集。
#[derive(Debug, Default)]
pub struct UploadForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl<S> FromRequest<S> for UploadForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| PortalError::Validation(e.body_text()))?;

        let mut form = UploadForm::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| PortalError::Validation(e.body_text()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_string);
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| PortalError::Validation(e.body_text()))?;
                    form.files
                        .insert(name, UploadedFile::new(file_name, content_type, data));
                }
                None => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| PortalError::Validation(e.body_text()))?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }
}

impl UploadForm {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn required_text(&self, name: &str) -> Result<String, PortalError> {
        self.text(name)
            .map(str::to_string)
            .ok_or_else(|| PortalError::Validation(format!("Missing field '{}'", name)))
    }

    /// 解析复选框类字段，缺失时使用默认值
    pub fn flag(&self, name: &str, default: bool) -> Result<bool, PortalError> {
        match self.text(name).map(|v| v.trim().to_ascii_lowercase()) {
            None => Ok(default),
            Some(v) => match v.as_str() {
                "true" | "on" | "1" | "yes" => Ok(true),
                "false" | "off" | "0" | "no" | "" => Ok(false),
                _ => Err(PortalError::Validation(format!(
                    "Field '{}' must be a boolean",
                    name
                ))),
            },
        }
    }

    pub fn uuid(&self, name: &str) -> Result<Uuid, PortalError> {
        let raw = self.required_text(name)?;
        Uuid::parse_str(raw.trim())
            .map_err(|_| PortalError::Validation(format!("Field '{}' must be a UUID", name)))
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }

    #[cfg(test)]
    fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }
}
