//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 프로세스 시작 시점에 환경 변수를 한 번 읽어 [`Settings`] 값을 만들고,
//! 이 값을 필요한 곳에 참조로 전달합니다. 전역 상태는 두지 않습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, 데이터베이스 연결 설정
//! - [`auth_config`] - 인증 비밀키와 인증 프로바이더
//! - [`external_config`] - SMTP, 오브젝트 스토리지(S3) 자격 증명
//!
//! ## 로딩 규칙
//!
//! 아래 변수들은 기본값도, 검증도 없이 그대로 읽습니다.
//! 변수가 없으면 해당 설정은 `None`이 되며, 로딩 시점에는 에러가 나지 않습니다.
//! 빈 값으로 인한 실패는 그 값을 실제로 사용하는 쪽(예: DB 연결)에서 드러납니다.
//!
//! ```bash
//! # 데이터베이스
//! export DB_HOST="localhost"
//! export DB_PORT="27017"
//! export DB_NAME="bubbles"
//! export DB_USER="bubbles"
//! export DB_PASS="secret"
//!
//! # 인증
//! export SECRET_AUTH="auth-secret"
//!
//! # SMTP
//! export SMTP_USER="mailer@example.com"
//! export SMTP_PASSWORD="smtp-secret"
//! export SMTP_HOST="smtp.example.com"
//! export SMTP_PORT="465"
//!
//! # 오브젝트 스토리지
//! export S3_ID="access-key-id"
//! export S3_SECRET="secret-access-key"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use bubbles_backend::config::Settings;
//!
//! let settings = Settings::from_env();
//! let storage = MongoStorage::connect(&settings.database).await?;
//! ```

pub mod data_config;
pub mod auth_config;
pub mod external_config;

pub use data_config::*;
pub use auth_config::*;
pub use external_config::*;

use std::env;

/// 프로세스 전체 설정
///
/// 시작 시 한 번 만들어지고 이후에는 읽기 전용으로 공유됩니다.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub smtp: SmtpConfig,
    pub s3: S3Config,
}

impl Settings {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 주어진 조회 함수로 설정을 읽습니다.
    ///
    /// 테스트에서는 프로세스 환경을 건드리지 않고 `HashMap` 등을 넘겨 사용합니다.
    ///
    /// ```rust,ignore
    /// let vars = HashMap::from([("DB_HOST", "localhost")]);
    /// let settings = Settings::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database: DatabaseConfig {
                host: lookup("DB_HOST"),
                port: lookup("DB_PORT"),
                name: lookup("DB_NAME"),
                user: lookup("DB_USER"),
                password: lookup("DB_PASS"),
            },
            auth: AuthConfig {
                secret: lookup("SECRET_AUTH"),
            },
            smtp: SmtpConfig {
                user: lookup("SMTP_USER"),
                password: lookup("SMTP_PASSWORD"),
                host: lookup("SMTP_HOST"),
                port: lookup("SMTP_PORT"),
            },
            s3: S3Config {
                access_key_id: lookup("S3_ID"),
                secret_access_key: lookup("S3_SECRET"),
            },
        }
    }
}

/// 값이 있고 비어 있지 않은지 여부 (`is_configured` 공통 규칙)
pub(crate) fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// `Debug` 출력에서 비밀값을 가립니다.
pub(crate) fn redact(value: &Option<String>) -> &'static str {
    match value {
        Some(_) => "***",
        None => "<unset>",
    }
}
