// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 缓存模块
///
/// 提供按查询身份寻址的内存缓存，写操作后整体失效
pub mod query_cache;
