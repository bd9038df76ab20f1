//! # 사용자 관리 서비스 구현
//!
//! 사용자 레코드의 등록, 조회, 상태 플래그 변경을 담당합니다.
//!
//! ## 책임 범위
//!
//! ```text
//! 외부 인증 흐름 (가입 / 로그인 / 이메일 인증)
//!          │ register, update_status
//!          ▼
//!    UserService ──► UserRepository ──► Storage (user 컬렉션)
//!          ▲
//!          │ get_user
//!   GET /api/v1/users/{id}
//! ```
//!
//! 비밀번호 해싱과 토큰 발급은 외부 인증 서비스에서 끝난 상태로 들어옵니다.
//! 이 서비스는 엔티티 제약(이메일 형식, 길이, 인증 방식과 해시의 일관성)을
//! 검증한 뒤 저장만 합니다.

use std::sync::Arc;
use validator::Validate;
use crate::db::Storage;
use crate::domain::dto::users::{RegisterUser, UserResponse, UserStatusUpdate};
use crate::domain::dto::validation::ValidationReport;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::UserRepository;

#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
}

impl UserService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            user_repo: UserRepository::new(storage),
        }
    }

    /// 유니크 인덱스(email, image) 생성
    pub async fn init(&self) -> AppResult<()> {
        self.user_repo.init().await
    }

    /// 새 사용자 등록
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 저장된 사용자 (비밀번호 해시 제외)
    /// * `Err(AppError::InvalidPayload)` - 입력값 또는 인증 방식/해시 불일치
    /// * `Err(AppError::ConflictError)` - 이메일 또는 프로필 이미지 중복
    pub async fn register(&self, request: RegisterUser) -> AppResult<UserResponse> {
        request.validate().map_err(ValidationReport::from)?;

        let user = User::from(request);
        user.validate().map_err(ValidationReport::from)?;

        let created = self
            .user_repo
            .create(user)
            .await
            .inspect_err(|e| log::warn!("사용자 등록 거부: {}", e))?;

        log::info!(
            "사용자 등록: {} ({:?}, {})",
            created.username,
            created.id,
            created.auth_provider.as_str()
        );
        Ok(UserResponse::from(created))
    }

    /// ID로 사용자 조회
    ///
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn get_user(&self, id: i64) -> AppResult<UserResponse> {
        self.user_repo
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| not_found(id))
    }

    /// 계정 상태 플래그 변경 (활성화, 인증 완료, 관리자 지정)
    pub async fn update_status(&self, id: i64, update: UserStatusUpdate) -> AppResult<UserResponse> {
        let updated = self
            .user_repo
            .update_status(id, &update)
            .await?
            .ok_or_else(|| not_found(id))?;

        log::info!("사용자 상태 변경: {} {:?}", id, update);
        Ok(UserResponse::from(updated))
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id))
}
