//! 流水线观测接口
//!
//! 流水线不直接打印日志，而是把事件交给注入的 [`PipelineObserver`]，默认实现转发到 `tracing`。

use tracing::{info, warn};

/// 流水线阶段事件
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    ResearchStarted { max_steps: usize },
    ResearchCompleted { step_count: usize, source_count: usize },
    /// 非致命提示，同时会出现在结果的warnings中
    Warning(String),
    ExtractionStarted,
    ExtractionCompleted,
    ExtractionFailed,
}

pub trait PipelineObserver: Send + Sync {
    fn on_event(&self, event: &PipelineEvent);
}

/// 把事件写入tracing
#[derive(Debug, Clone, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_event(&self, event: &PipelineEvent) {
        match event {
            PipelineEvent::ResearchStarted { max_steps } => {
                info!(max_steps, "🔎 research started")
            }
            PipelineEvent::ResearchCompleted {
                step_count,
                source_count,
            } => info!(step_count, source_count, "✓ research completed"),
            PipelineEvent::Warning(message) => warn!("⚠️ {}", message),
            PipelineEvent::ExtractionStarted => info!("🧩 brief extraction started"),
            PipelineEvent::ExtractionCompleted => info!("✓ brief extraction completed"),
            PipelineEvent::ExtractionFailed => warn!("❌ brief extraction produced no valid object"),
        }
    }
}

/// 丢弃所有事件
#[derive(Debug, Clone, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {
    fn on_event(&self, _event: &PipelineEvent) {}
}
