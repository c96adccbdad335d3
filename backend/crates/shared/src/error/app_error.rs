//! Application Error - Unified error type for the application
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// HTTP レスポンスに変換される最終形のエラーです。
///
/// ## Fields
/// * `kind` - エラーの分類（HTTP ステータスコードにマッピング）
/// * `message` - 利用者向けのメッセージ（`error` フィールドとして返る）
/// * `details` - 開発時のみ返す詳細（`details` フィールド）
/// * `source` - 元のエラー（ログ用、レスポンスには含めない）
///
/// ## Examples
/// ```rust
/// use kernel::error::app_error::AppError;
///
/// use kernel::error::kind::ErrorKind;
///
/// let err = AppError::new(ErrorKind::Conflict, "Problem number already exists.");
/// assert_eq!(err.status_code(), 409);
///
/// let err = AppError::new(ErrorKind::InternalServerError, "Failed to save problem")
///     .with_details("connection reset by peer");
/// assert_eq!(err.details(), Some("connection reset by peer"));
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    details: Option<String>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// `Result<T, AppError>` の省略形
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
            source: None,
        }
    }

    /// 404 Not Found
    #[inline]
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// 開発者向けの詳細を設定
    #[inline]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// 元のエラーを設定（ログ用）
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// レスポンスボディ
    ///
    /// `{"error": message}`、詳細があれば `details` を追加します。
    pub fn body(&self) -> serde_json::Value {
        let mut body = serde_json::json!({ "error": self.message() });
        if let Some(details) = self.details() {
            body["details"] = serde_json::Value::String(details.to_string());
        }
        body
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(details) = &self.details {
            builder.field("details", details);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::Conflict, "Problem number already exists.");
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.message(), "Problem number already exists.");
        assert!(err.details().is_none());
    }

    #[test]
    fn test_not_found() {
        assert_eq!(AppError::not_found("x").status_code(), 404);
    }

    #[test]
    fn test_body_without_details() {
        let body = AppError::new(ErrorKind::BadRequest, "All fields are required.").body();
        assert_eq!(body["error"], "All fields are required.");
        assert!(body.get("details").is_none());
    }

    #[test]
    fn test_body_with_details() {
        let body = AppError::new(ErrorKind::InternalServerError, "Failed to save problem")
            .with_details("pool closed")
            .body();
        assert_eq!(body["error"], "Failed to save problem");
        assert_eq!(body["details"], "pool closed");
    }

    #[test]
    fn test_source_is_kept_out_of_body() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = AppError::new(ErrorKind::ServiceUnavailable, "Failed").with_source(io_err);
        assert_eq!(err.source().map(|e| e.to_string()), Some("boom".to_string()));
        assert!(err.body().get("details").is_none());
    }

    #[test]
    fn test_display() {
        let err = AppError::not_found("Route not found");
        assert_eq!(err.to_string(), "[Not Found] Route not found");
    }
}
