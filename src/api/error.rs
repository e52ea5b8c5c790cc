// ==========================================
// 银行业绩看板 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，将仓储/导入错误收敛为面向用户的失败
// 每类操作只对外暴露一种通用失败，细节记录在日志中
// ==========================================

use crate::i18n::{t, t_with_args};
use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 操作失败（对外统一提示）
    // ==========================================
    #[error("数据读取失败: {0}")]
    FetchFailed(String),

    #[error("数据保存失败: {0}")]
    SaveFailed(String),

    #[error("文件处理失败: {0}")]
    UploadFailed(String),

    #[error("模板生成失败: {0}")]
    TemplateFailed(String),

    #[error("数据导出失败: {0}")]
    ExportFailed(String),

    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("类别不存在: {0}")]
    CategoryNotFound(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 错误代码（前端据此分支）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::FetchFailed(_) => "FETCH_FAILED",
            ApiError::SaveFailed(_) => "SAVE_FAILED",
            ApiError::UploadFailed(_) => "UPLOAD_FAILED",
            ApiError::TemplateFailed(_) => "TEMPLATE_FAILED",
            ApiError::ExportFailed(_) => "EXPORT_FAILED",
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::CategoryNotFound(_) => "NOT_FOUND",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
    }

    /// 本地化的用户提示（不含技术细节）
    pub fn user_message(&self) -> String {
        match self {
            ApiError::FetchFailed(_) => t("error.fetch_failed"),
            ApiError::SaveFailed(_) => t("error.save_failed"),
            ApiError::UploadFailed(_) => t("error.upload_failed"),
            ApiError::TemplateFailed(_) => t("error.template_failed"),
            ApiError::ExportFailed(_) => t("error.export_failed"),
            ApiError::InvalidInput(detail) => {
                t_with_args("error.invalid_input", &[("detail", detail)])
            }
            ApiError::CategoryNotFound(category) => {
                t_with_args("error.category_not_found", &[("category", category)])
            }
            ApiError::InternalError(_) | ApiError::Other(_) => t("common.failed"),
        }
    }
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
// 读取类错误 → FetchFailed，写入类错误 → SaveFailed
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::ReadError(msg) => ApiError::FetchFailed(msg),
            RepositoryError::NotFound(what) => ApiError::FetchFailed(format!("{} 不存在", what)),
            RepositoryError::WriteError(msg) => ApiError::SaveFailed(msg),
            RepositoryError::DatabaseTransactionError(msg) => ApiError::SaveFailed(msg),
            RepositoryError::LockError(msg) => {
                ApiError::InternalError(format!("数据库锁获取失败: {}", msg))
            }
            RepositoryError::DatabaseQueryError(msg) => ApiError::InternalError(msg),
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::Other(err) => ApiError::Other(err),
            other => ApiError::UploadFailed(other.to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
