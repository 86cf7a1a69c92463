//! Postgres 设备存储实现
//!
//! 通过 SQL 查询实现设备 CRUD 操作。
//!
//! 设计要点：
//! - 关键字过滤对 vendor 做子串匹配；vendor 为 NULL 的行不命中
//! - status 列以文本存储，读取时解析为封闭枚举

use crate::error::StorageError;
use crate::models::{DeviceRecord, DeviceUpdate};
use crate::traits::DeviceStore;
use domain::DeviceStatus;
use sqlx::{PgPool, Row};

pub struct PgDeviceStore {
    pub pool: PgPool,
}

impl PgDeviceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_device(row: &sqlx::postgres::PgRow) -> Result<DeviceRecord, StorageError> {
    let status: String = row.try_get("status")?;
    let status = DeviceStatus::parse(&status)
        .ok_or_else(|| StorageError::new(format!("unknown device status: {status}")))?;
    Ok(DeviceRecord {
        device_id: row.try_get("device_id")?,
        uid: row.try_get("uid")?,
        vendor: row.try_get("vendor")?,
        status,
        gateway_id: row.try_get("gateway_id")?,
        created_at_ms: row.try_get("created_at_ms")?,
    })
}

#[async_trait::async_trait]
impl DeviceStore for PgDeviceStore {
    /// 列出设备（过滤 → skip → limit）
    async fn list_devices(
        &self,
        keyword: Option<&str>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<DeviceRecord>, StorageError> {
        let rows = if let Some(keyword) = keyword {
            sqlx::query(
                "select device_id, uid, vendor, status, gateway_id, created_at_ms \
                 from devices where position($1 in vendor) > 0 \
                 order by seq asc offset $2 limit $3",
            )
            .bind(keyword)
            .bind(skip as i64)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query(
                "select device_id, uid, vendor, status, gateway_id, created_at_ms \
                 from devices order by seq asc offset $1 limit $2",
            )
            .bind(skip as i64)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?
        };
        let mut devices = Vec::with_capacity(rows.len());
        for row in rows {
            devices.push(row_to_device(&row)?);
        }
        Ok(devices)
    }

    /// 查找指定设备
    async fn find_device(&self, device_id: &str) -> Result<Option<DeviceRecord>, StorageError> {
        let row = sqlx::query(
            "select device_id, uid, vendor, status, gateway_id, created_at_ms \
             from devices where device_id = $1",
        )
        .bind(device_id)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(row_to_device(&row)?))
    }

    /// 创建新设备
    async fn create_device(&self, record: DeviceRecord) -> Result<DeviceRecord, StorageError> {
        sqlx::query(
            "insert into devices (device_id, uid, vendor, status, gateway_id, created_at_ms) \
             values ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&record.device_id)
        .bind(&record.uid)
        .bind(&record.vendor)
        .bind(record.status.as_str())
        .bind(&record.gateway_id)
        .bind(record.created_at_ms)
        .execute(&self.pool)
        .await?;
        Ok(record)
    }

    /// 更新设备
    async fn update_device(
        &self,
        device_id: &str,
        update: DeviceUpdate,
    ) -> Result<Option<DeviceRecord>, StorageError> {
        let row = sqlx::query(
            "update devices set \
             uid = coalesce($1, uid), \
             vendor = coalesce($2, vendor), \
             status = coalesce($3, status), \
             gateway_id = coalesce($4, gateway_id) \
             where device_id = $5 \
             returning device_id, uid, vendor, status, gateway_id, created_at_ms",
        )
        .bind(update.uid)
        .bind(update.vendor)
        .bind(update.status.map(|status| status.as_str()))
        .bind(update.gateway_id)
        .bind(device_id)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(row_to_device(&row)?))
    }

    /// 删除设备，返回删除前的记录
    async fn delete_device(
        &self,
        device_id: &str,
    ) -> Result<Option<DeviceRecord>, StorageError> {
        let row = sqlx::query(
            "delete from devices where device_id = $1 \
             returning device_id, uid, vendor, status, gateway_id, created_at_ms",
        )
        .bind(device_id)
        .fetch_optional(&self.pool)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(row_to_device(&row)?))
    }

    /// 清空设备表
    async fn delete_all_devices(&self) -> Result<u64, StorageError> {
        let result = sqlx::query("delete from devices")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
