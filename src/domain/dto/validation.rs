//! 요청 본문 검증
//!
//! JSON 본문을 스키마 구조체로 바꾸는 명시적 검증 함수 [`parse_payload`]를 제공합니다.
//! 결과는 검증된 구조체이거나, 문제가 있는 모든 필드의 목록([`ValidationReport`])입니다.
//!
//! 검증은 두 단계로 이루어집니다.
//!
//! 1. **구조 검증**: 스키마가 선언한 필드([`Schema::FIELDS`])의 존재 여부와 JSON 타입
//! 2. **값 검증**: `validator` derive로 선언한 범위/길이 규칙
//!
//! 구조 검증에서 하나라도 실패하면 값 검증은 수행하지 않습니다.
//!
//! ```rust,ignore
//! let body = serde_json::json!({ "title": "Central Park", "latitude": "north" });
//! let report = parse_payload::<PlaceCreate>(&body).unwrap_err();
//! // latitude: type, longitude: missing
//! assert_eq!(report.errors().len(), 2);
//! ```

use std::fmt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

/// 본문 전체에 대한 에러에 사용하는 필드 이름
pub const ROOT_FIELD: &str = "__root__";

/// 스키마 필드의 JSON 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// JSON 문자열
    String,
    /// 모든 JSON 숫자 (정수 포함)
    Float,
    /// 정수로 표현 가능한 JSON 숫자
    Integer,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Float => "float",
            FieldKind::Integer => "integer",
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Float => value.is_number(),
            FieldKind::Integer => value.is_i64(),
        }
    }
}

/// 스키마가 선언하는 필수 필드 하나
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn string(name: &'static str) -> Self {
        Self { name, kind: FieldKind::String }
    }

    pub const fn float(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Float }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Integer }
    }
}

/// 요청 본문 스키마
///
/// Create/Update DTO가 구현하며, 필수 필드와 타입을 선언합니다.
pub trait Schema: DeserializeOwned + Validate {
    const FIELDS: &'static [FieldSpec];
}

/// 필드 하나에 대한 검증 실패
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::new(field, "missing", "필수 필드입니다")
    }

    pub fn wrong_type(field: &str, expected: &str) -> Self {
        Self::new(field, "type", format!("{} 타입이어야 합니다", expected))
    }
}

/// 검증 실패 결과 (하나 이상의 [`FieldError`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// 해당 필드에 대한 에러가 있는지 여부
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.errors.iter().map(|e| e.field.as_str()).collect();
        write!(f, "입력값이 유효하지 않습니다 ({})", fields.join(", "))
    }
}

impl std::error::Error for ValidationReport {}

impl From<ValidationErrors> for ValidationReport {
    fn from(errors: ValidationErrors) -> Self {
        let mut collected: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    FieldError::new(field.clone(), e.code.to_string(), message)
                })
            })
            .collect();

        // HashMap 순서에 의존하지 않도록 정렬
        collected.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
        Self::new(collected)
    }
}

/// JSON 본문을 검증하고 스키마 구조체로 변환합니다.
///
/// # Errors
///
/// - 본문이 JSON 객체가 아닌 경우
/// - 필수 필드가 없거나 `null`인 경우, 타입이 맞지 않는 경우 (해당 필드 모두 보고)
/// - 값 규칙(`validator`)을 위반한 경우
///
/// 선언되지 않은 추가 필드는 무시합니다.
pub fn parse_payload<T: Schema>(payload: &Value) -> Result<T, ValidationReport> {
    let Some(object) = payload.as_object() else {
        return Err(ValidationReport::new(vec![FieldError::new(
            ROOT_FIELD,
            "type",
            "JSON 객체여야 합니다",
        )]));
    };

    let structural: Vec<FieldError> = T::FIELDS
        .iter()
        .filter_map(|spec| match object.get(spec.name) {
            None => Some(FieldError::missing(spec.name)),
            Some(value) if !spec.kind.accepts(value) => {
                Some(FieldError::wrong_type(spec.name, spec.kind.as_str()))
            }
            Some(_) => None,
        })
        .collect();

    if !structural.is_empty() {
        return Err(ValidationReport::new(structural));
    }

    let parsed: T = serde_json::from_value(payload.clone()).map_err(|e| {
        ValidationReport::new(vec![FieldError::new(ROOT_FIELD, "invalid", e.to_string())])
    })?;

    parsed.validate()?;
    Ok(parsed)
}
