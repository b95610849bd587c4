// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP 处理器
pub mod app_handler;
pub mod asset_handler;
pub mod company_handler;
pub mod events_handler;
pub mod link_handler;
