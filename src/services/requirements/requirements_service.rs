//! # 요구사항 관리 서비스 구현
//!
//! 요구사항의 전체 생명주기를 관리하는 비즈니스 로직입니다.
//!
//! ## 서비스 흐름
//!
//! ```text
//! caller → RequirementsService → RequirementsRepository 조회
//!                              → RequirementMapper 변환
//!                              → RequirementsRepository 쓰기
//!                              → 결과 / AppError
//! ```
//!
//! ## 비즈니스 규칙
//!
//! - **제목 유일성**: 생성 시점에만 검사합니다. 수정 시에는 검사하지 않습니다.
//! - **식별자**: 외부에는 uuid만 노출하고, 삭제는 내부 `req_id`로 수행합니다.
//! - **부정 신호**: 조회/수정/삭제 대상이 없으면 `ResourceNotFound` 에러입니다.
//!   `Ok(false)`는 전체 삭제 키 불일치에만 사용됩니다.
//!
//! 제목 중복 검사는 조회 후 저장(check-then-act)이므로 동시에 같은 제목으로
//! 생성 요청이 들어오면 둘 다 통과할 수 있습니다.

use std::sync::Arc;
use log::{debug, info, warn};
use uuid::Uuid;
use crate::{
    core::errors::AppError,
    domain::{
        dto::requirements::{ListRequirementsDto, RequirementsDto},
        entities::requirements::Requirement,
        mappers::RequirementMapper,
    },
    repositories::requirements::RequirementsRepository,
};

/// 전체 삭제를 허용하는 고정 키
///
/// 단순 문자열 비교 게이트입니다. 서명 토큰이나 역할 기반 검사로 대체되지 않았습니다.
const DELETE_ALL_KEY: &str = "akaj3971y1aksjda";

const RESOURCE_NAME: &str = "Requirement";

/// 요구사항 관리 비즈니스 로직 서비스
///
/// 리포지토리와 매퍼를 생성자로 주입받으며, 그 외의 상태는 가지지 않습니다.
///
/// ## 에러 처리 전략
///
/// - **RequirementAlreadyExists**: 생성 시 제목 중복 (쓰기 없음)
/// - **ResourceNotFound**: uuid에 해당하는 요구사항 없음 (쓰기 없음)
/// - 리포지토리 에러는 변환 없이 그대로 전파
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let service = RequirementsService::new(repository);
///
/// let uuid = service.create_requirement(&RequirementsDto::new("Title", "Desc")).await?;
/// let dto = service.fetch_requirement(&uuid).await?;
/// service.update_requirement(&uuid, &RequirementsDto::new("Title", "New desc")).await?;
/// service.delete_requirement(&uuid).await?;
/// ```
pub struct RequirementsService {
    /// 요구사항 데이터 액세스 리포지토리
    repository: Arc<dyn RequirementsRepository>,
    /// 엔티티 ↔ DTO 변환 함수
    mapper: RequirementMapper,
}

impl RequirementsService {
    /// 기본 매퍼로 서비스를 생성합니다.
    pub fn new(repository: Arc<dyn RequirementsRepository>) -> Self {
        Self::with_mapper(repository, RequirementMapper::default())
    }

    pub fn with_mapper(repository: Arc<dyn RequirementsRepository>, mapper: RequirementMapper) -> Self {
        Self { repository, mapper }
    }

    /// 새 요구사항 생성
    ///
    /// 같은 제목의 요구사항이 있으면 아무것도 쓰지 않고 실패합니다.
    /// 성공하면 새 uuid를 발급한 엔티티에 DTO를 적용해 한 번 저장합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(String)` - 생성된 요구사항의 uuid
    /// * `Err(AppError::RequirementAlreadyExists)` - 제목 중복
    pub async fn create_requirement(&self, dto: &RequirementsDto) -> Result<String, AppError> {
        if self.repository.find_by_title(&dto.title).await?.is_some() {
            warn!("요구사항 생성 거부 - 제목 중복: {}", dto.title);
            return Err(AppError::RequirementAlreadyExists(dto.title.clone()));
        }

        let target = Requirement::new(Uuid::new_v4().to_string());
        let requirement = self.mapper.map_to_requirement(dto, target);
        let saved = self.repository.save(requirement).await?;

        info!("요구사항 생성 완료: uuid={}, req_id={:?}", saved.uuid, saved.req_id);

        Ok(saved.uuid)
    }

    /// uuid로 요구사항 조회
    ///
    /// * `Err(AppError::ResourceNotFound)` - 해당 uuid 없음
    pub async fn fetch_requirement(&self, uuid: &str) -> Result<RequirementsDto, AppError> {
        let requirement = self.find_existing(uuid).await?;

        Ok(self.mapper.map_to_requirement_dto(&requirement, RequirementsDto::default()))
    }

    /// 요구사항 수정
    ///
    /// 제목과 설명을 DTO 값으로 교체하고 즉시 flush 저장합니다.
    /// 제목 중복은 검사하지 않습니다. 대상이 없으면 쓰기 없이 `ResourceNotFound`를 반환하며,
    /// `Ok(false)`를 돌려주는 경로는 없습니다.
    pub async fn update_requirement(&self, uuid: &str, dto: &RequirementsDto) -> Result<bool, AppError> {
        let existing = self.find_existing(uuid).await?;

        let mut requirement = self.mapper.map_to_requirement(dto, existing);
        requirement.touch();
        self.repository.save_and_flush(requirement).await?;

        info!("요구사항 수정 완료: uuid={}", uuid);

        Ok(true)
    }

    /// 요구사항 삭제
    ///
    /// uuid로 찾은 엔티티의 내부 `req_id`로 삭제합니다.
    pub async fn delete_requirement(&self, uuid: &str) -> Result<bool, AppError> {
        let requirement = self.find_existing(uuid).await?;

        let req_id = requirement.req_id.ok_or_else(|| {
            AppError::InternalError(format!("저장된 요구사항에 req_id가 없습니다: {}", uuid))
        })?;

        self.repository.delete_by_req_id(req_id).await?;

        info!("요구사항 삭제 완료: uuid={}, req_id={}", uuid, req_id);

        Ok(true)
    }

    /// 전체 요구사항 삭제
    ///
    /// 키가 일치하지 않으면 리포지토리를 호출하지 않고 `Ok(false)`를 반환합니다.
    /// 일치하면 전체 삭제 후 flush를 각각 한 번 수행합니다.
    pub async fn delete_all_requirements(&self, key: &str) -> Result<bool, AppError> {
        if key != DELETE_ALL_KEY {
            warn!("전체 삭제 요청 거부 - 키 불일치");
            return Ok(false);
        }

        self.repository.delete_all().await?;
        self.repository.flush().await?;

        info!("전체 요구사항 삭제 완료");

        Ok(true)
    }

    /// 전체 요구사항 목록
    ///
    /// 저장소가 비어 있으면 빈 목록을 반환합니다.
    pub async fn get_all_requirements(&self) -> Result<ListRequirementsDto, AppError> {
        let requirements = self.repository.find_all().await?;

        debug!("요구사항 {}건 조회", requirements.len());

        let dtos = requirements
            .iter()
            .map(|requirement| self.mapper.map_to_requirement_dto(requirement, RequirementsDto::default()))
            .collect::<Vec<_>>();

        Ok(ListRequirementsDto::from(dtos))
    }

    async fn find_existing(&self, uuid: &str) -> Result<Requirement, AppError> {
        self.repository
            .find_by_uuid(uuid)
            .await?
            .ok_or_else(|| AppError::not_found(RESOURCE_NAME, "uuid", uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{predicate::eq, Sequence};
    use crate::domain::mappers::requirement_mapper::{map_to_requirement, map_to_requirement_dto};
    use crate::repositories::requirements::MockRequirementsRepository;

    const UUID: &str = "test-uuid";

    fn requirement_fixture() -> Requirement {
        let mut requirement = Requirement::new(UUID.to_string());
        requirement.req_id = Some(1);
        requirement.title = "Test Requirement".to_string();
        requirement.description = "Test Description".to_string();
        requirement
    }

    fn dto_fixture() -> RequirementsDto {
        RequirementsDto::new("Test Requirement", "Test Description")
    }

    fn service(mock: MockRequirementsRepository) -> RequirementsService {
        RequirementsService::new(Arc::new(mock))
    }

    #[actix_web::test]
    async fn test_create_requirement_returns_uuid() {
        let mut mock = MockRequirementsRepository::new();
        mock.expect_find_by_title()
            .withf(|title| title == "Test Requirement")
            .times(1)
            .returning(|_| Ok(None));
        mock.expect_save()
            .withf(|r| r.title == "Test Requirement" && r.req_id.is_none())
            .times(1)
            .returning(|mut r| {
                r.req_id = Some(1);
                Ok(r)
            });

        let result = service(mock).create_requirement(&dto_fixture()).await.unwrap();

        assert!(!result.is_empty());
        assert!(Uuid::parse_str(&result).is_ok());
    }

    #[actix_web::test]
    async fn test_create_requirement_uses_injected_mapper() {
        fn fixed_entity(_dto: &RequirementsDto, _target: Requirement) -> Requirement {
            requirement_fixture()
        }

        let mut mock = MockRequirementsRepository::new();
        mock.expect_find_by_title().returning(|_| Ok(None));
        mock.expect_save()
            .withf(|r| r.uuid == UUID)
            .times(1)
            .returning(Ok);

        let mapper = RequirementMapper::new(fixed_entity, map_to_requirement_dto);
        let service = RequirementsService::with_mapper(Arc::new(mock), mapper);

        let result = service.create_requirement(&dto_fixture()).await.unwrap();

        assert_eq!(result, UUID);
    }

    #[actix_web::test]
    async fn test_create_requirement_with_existing_title_fails() {
        let mut mock = MockRequirementsRepository::new();
        mock.expect_find_by_title()
            .times(1)
            .returning(|_| Ok(Some(requirement_fixture())));
        mock.expect_save().never();

        let result = service(mock).create_requirement(&dto_fixture()).await;

        assert!(matches!(result, Err(AppError::RequirementAlreadyExists(title)) if title == "Test Requirement"));
    }

    #[actix_web::test]
    async fn test_fetch_requirement_returns_dto() {
        let mut mock = MockRequirementsRepository::new();
        mock.expect_find_by_uuid()
            .withf(|uuid| uuid == UUID)
            .times(1)
            .returning(|_| Ok(Some(requirement_fixture())));

        let result = service(mock).fetch_requirement(UUID).await.unwrap();

        assert_eq!(result.title, "Test Requirement");
        assert_eq!(result.description, "Test Description");
    }

    #[actix_web::test]
    async fn test_fetch_requirement_with_unknown_uuid_fails() {
        let mut mock = MockRequirementsRepository::new();
        mock.expect_find_by_uuid().returning(|_| Ok(None));

        let result = service(mock).fetch_requirement("unknown-uuid").await;

        assert!(matches!(
            result,
            Err(AppError::ResourceNotFound { ref field, ref value, .. }) if field == "uuid" && value == "unknown-uuid"
        ));
    }

    #[actix_web::test]
    async fn test_update_requirement_returns_true() {
        let mut mock = MockRequirementsRepository::new();
        mock.expect_find_by_uuid()
            .returning(|_| Ok(Some(requirement_fixture())));
        mock.expect_save_and_flush()
            .withf(|r| r.req_id == Some(1) && r.uuid == UUID && r.title == "Renamed" && r.description == "Changed")
            .times(1)
            .returning(Ok);

        let dto = RequirementsDto::new("Renamed", "Changed");
        let result = service(mock).update_requirement(UUID, &dto).await.unwrap();

        assert!(result);
    }

    #[actix_web::test]
    async fn test_update_requirement_does_not_check_title_uniqueness() {
        let mut mock = MockRequirementsRepository::new();
        mock.expect_find_by_uuid()
            .returning(|_| Ok(Some(requirement_fixture())));
        mock.expect_find_by_title().never();
        mock.expect_save_and_flush().times(1).returning(Ok);

        let result = service(mock).update_requirement(UUID, &dto_fixture()).await.unwrap();

        assert!(result);
    }

    #[actix_web::test]
    async fn test_update_requirement_with_unknown_uuid_fails_without_write() {
        let mut mock = MockRequirementsRepository::new();
        mock.expect_find_by_uuid().returning(|_| Ok(None));
        mock.expect_save_and_flush().never();
        mock.expect_save().never();

        let result = service(mock).update_requirement(UUID, &dto_fixture()).await;

        assert!(matches!(result, Err(AppError::ResourceNotFound { .. })));
    }

    #[actix_web::test]
    async fn test_delete_requirement_uses_req_id() {
        let mut mock = MockRequirementsRepository::new();
        mock.expect_find_by_uuid()
            .returning(|_| Ok(Some(requirement_fixture())));
        mock.expect_delete_by_req_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(()));

        let result = service(mock).delete_requirement(UUID).await.unwrap();

        assert!(result);
    }

    #[actix_web::test]
    async fn test_delete_requirement_with_unknown_uuid_fails() {
        let mut mock = MockRequirementsRepository::new();
        mock.expect_find_by_uuid().returning(|_| Ok(None));
        mock.expect_delete_by_req_id().never();

        let result = service(mock).delete_requirement(UUID).await;

        assert!(matches!(result, Err(AppError::ResourceNotFound { .. })));
    }

    #[actix_web::test]
    async fn test_delete_all_with_valid_key_deletes_then_flushes() {
        let mut mock = MockRequirementsRepository::new();
        let mut seq = Sequence::new();
        mock.expect_delete_all()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        mock.expect_flush()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        let result = service(mock).delete_all_requirements("akaj3971y1aksjda").await.unwrap();

        assert!(result);
    }

    #[actix_web::test]
    async fn test_delete_all_with_invalid_key_touches_nothing() {
        let mut mock = MockRequirementsRepository::new();
        mock.expect_delete_all().never();
        mock.expect_flush().never();

        let result = service(mock).delete_all_requirements("invalid-key").await.unwrap();

        assert!(!result);
    }

    #[actix_web::test]
    async fn test_get_all_requirements_maps_each_entity() {
        let mut mock = MockRequirementsRepository::new();
        mock.expect_find_all()
            .times(1)
            .returning(|| Ok(vec![requirement_fixture()]));

        let result = service(mock).get_all_requirements().await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.requirements[0].title, "Test Requirement");
    }

    #[actix_web::test]
    async fn test_get_all_requirements_with_injected_mapper() {
        fn fixed_dto(_requirement: &Requirement, _target: RequirementsDto) -> RequirementsDto {
            RequirementsDto::new("Mapped", "By test")
        }

        let mut mock = MockRequirementsRepository::new();
        mock.expect_find_all()
            .returning(|| Ok(vec![requirement_fixture(), requirement_fixture()]));

        let mapper = RequirementMapper::new(map_to_requirement, fixed_dto);
        let result = RequirementsService::with_mapper(Arc::new(mock), mapper)
            .get_all_requirements()
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert!(result.requirements.iter().all(|dto| dto.title == "Mapped"));
    }

    #[actix_web::test]
    async fn test_get_all_requirements_when_empty_returns_empty_list() {
        let mut mock = MockRequirementsRepository::new();
        mock.expect_find_all().returning(|| Ok(Vec::new()));

        let result = service(mock).get_all_requirements().await.unwrap();

        assert!(result.is_empty());
    }

    #[actix_web::test]
    async fn test_repository_error_propagates() {
        let mut mock = MockRequirementsRepository::new();
        mock.expect_find_by_uuid()
            .returning(|_| Err(AppError::DatabaseError("connection reset".to_string())));

        let result = service(mock).fetch_requirement(UUID).await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }
}
