// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sha2::{Digest, Sha256};
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::engines::traits::ScrapeResponse;

/// 缓存错误类型
#[derive(Error, Debug)]
pub enum CacheError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 序列化错误
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 磁盘响应缓存
///
/// 以请求URL的SHA-256摘要为键，布局为 `<dir>/<摘要前两位>/<摘要>`，
/// 内容为JSON编码的 [`ScrapeResponse`]。
#[derive(Debug, Clone)]
pub struct DiskCache {
    dir: PathBuf,
}

impl DiskCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// 计算URL对应的缓存文件路径
    pub fn entry_path(&self, url: &str) -> PathBuf {
        let digest = hex::encode(Sha256::digest(url.as_bytes()));
        self.dir.join(&digest[..2]).join(digest)
    }

    /// 读取缓存
    ///
    /// 文件不存在或内容损坏时返回 `None`
    pub async fn get(&self, url: &str) -> Result<Option<ScrapeResponse>, CacheError> {
        let path = self.entry_path(url);
        let data = match fs::read(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CacheError::Io(e)),
        };

        match serde_json::from_slice(&data) {
            Ok(response) => Ok(Some(response)),
            Err(e) => {
                debug!("Ignoring corrupt cache entry {}: {}", path.display(), e);
                Ok(None)
            }
        }
    }

    /// 写入缓存
    ///
    /// 先写临时文件再重命名，读取方不会看到写了一半的条目
    pub async fn put(&self, url: &str, response: &ScrapeResponse) -> Result<(), CacheError> {
        let path = self.entry_path(url);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let data = serde_json::to_vec(response)?;
        let tmp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(&data).await?;
        file.flush().await?;
        drop(file);

        fs::rename(&tmp_path, &path).await?;
        Ok(())
    }
}
