//! 외부 연동 서비스 설정
//!
//! 메일 발송(SMTP)과 이미지 저장(S3 호환 오브젝트 스토리지)에 필요한 자격 증명입니다.
//! 실제 발송/업로드는 외부 협력 서비스가 담당합니다.

use std::fmt;

/// SMTP 설정 (`SMTP_USER`, `SMTP_PASSWORD`, `SMTP_HOST`, `SMTP_PORT`)
#[derive(Clone, Default)]
pub struct SmtpConfig {
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
}

impl SmtpConfig {
    /// 네 값이 모두 비어 있지 않은 값으로 설정되어 있는지 여부
    pub fn is_configured(&self) -> bool {
        [&self.user, &self.password, &self.host, &self.port]
            .into_iter()
            .all(super::is_set)
    }
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("user", &self.user)
            .field("password", &super::redact(&self.password))
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

/// 오브젝트 스토리지 자격 증명 (`S3_ID`, `S3_SECRET`)
#[derive(Clone, Default)]
pub struct S3Config {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

impl S3Config {
    pub fn is_configured(&self) -> bool {
        super::is_set(&self.access_key_id) && super::is_set(&self.secret_access_key)
    }
}

impl fmt::Debug for S3Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3Config")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &super::redact(&self.secret_access_key))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smtp_requires_all_four_values() {
        let mut smtp = SmtpConfig {
            user: Some("mailer".to_string()),
            password: Some("pw".to_string()),
            host: Some("smtp.local".to_string()),
            port: None,
        };
        assert!(!smtp.is_configured());

        smtp.port = Some("587".to_string());
        assert!(smtp.is_configured());

        smtp.host = Some(String::new());
        assert!(!smtp.is_configured());
    }

    #[test]
    fn test_s3_requires_both_keys() {
        let mut s3 = S3Config {
            access_key_id: Some("id".to_string()),
            secret_access_key: None,
        };
        assert!(!s3.is_configured());

        s3.secret_access_key = Some(String::new());
        assert!(!s3.is_configured());

        s3.secret_access_key = Some("secret".to_string());
        assert!(s3.is_configured());
    }
}
