//! 日志初始化与请求级追踪标识。
//!
//! `init_tracing` 在 main 里调用一次；`new_request_ids` 由
//! `request_context` 中间件按请求调用，生成的 id 进入请求 span
//! 并写回 `x-request-id` / `x-trace-id` 响应头。

use tracing_subscriber::{EnvFilter, fmt};
use uuid::Uuid;

/// 请求级追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 初始化 tracing。日志级别由 `RUST_LOG` 控制，缺省 info。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的 request_id 与 trace_id（UUID v4）。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: Uuid::new_v4().to_string(),
        trace_id: Uuid::new_v4().to_string(),
    }
}
