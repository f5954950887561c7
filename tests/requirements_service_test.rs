use std::sync::Arc;
use requirements_service_backend::core::errors::AppError;
use requirements_service_backend::domain::RequirementsDto;
use requirements_service_backend::repositories::requirements::{
    InMemoryRequirementsRepository, RequirementsRepository,
};
use requirements_service_backend::services::requirements::RequirementsService;

const DELETE_ALL_KEY: &str = "akaj3971y1aksjda";

fn setup() -> (Arc<InMemoryRequirementsRepository>, RequirementsService) {
    let repository = Arc::new(InMemoryRequirementsRepository::new());
    let service = RequirementsService::new(repository.clone());
    (repository, service)
}

#[actix_web::test]
async fn create_then_duplicate_title_is_rejected() {
    let (repository, service) = setup();

    let uuid = service
        .create_requirement(&RequirementsDto::new("Login", "User can log in"))
        .await
        .unwrap();
    let duplicate = service
        .create_requirement(&RequirementsDto::new("Login", "Another description"))
        .await;

    assert!(!uuid.is_empty());
    assert!(matches!(duplicate, Err(AppError::RequirementAlreadyExists(ref title)) if title == "Login"));
    assert_eq!(repository.count().unwrap(), 1);
}

#[actix_web::test]
async fn created_requirement_gets_req_id_and_is_fetchable() {
    let (repository, service) = setup();

    let uuid = service
        .create_requirement(&RequirementsDto::new("Login", "User can log in"))
        .await
        .unwrap();

    let stored = repository.find_by_uuid(&uuid).await.unwrap().unwrap();
    assert_eq!(stored.req_id, Some(1));

    let fetched = service.fetch_requirement(&uuid).await.unwrap();
    assert_eq!(fetched, RequirementsDto::new("Login", "User can log in"));
}

#[actix_web::test]
async fn fetch_unknown_uuid_reports_not_found_message() {
    let (_, service) = setup();

    let error = service.fetch_requirement("missing-uuid").await.unwrap_err();

    assert_eq!(
        error.to_string(),
        "Requirement not found with the given input data uuid : 'missing-uuid'"
    );
}

#[actix_web::test]
async fn list_reflects_number_of_created_requirements() {
    let (_, service) = setup();

    assert!(service.get_all_requirements().await.unwrap().is_empty());

    for title in ["First", "Second", "Third"] {
        service
            .create_requirement(&RequirementsDto::new(title, "desc"))
            .await
            .unwrap();
    }

    let list = service.get_all_requirements().await.unwrap();
    let titles: Vec<_> = list.requirements.iter().map(|dto| dto.title.as_str()).collect();

    assert_eq!(list.len(), 3);
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[actix_web::test]
async fn update_keeps_identity_and_allows_existing_title() {
    let (repository, service) = setup();
    let first = service
        .create_requirement(&RequirementsDto::new("First", "one"))
        .await
        .unwrap();
    service
        .create_requirement(&RequirementsDto::new("Second", "two"))
        .await
        .unwrap();
    let before = repository.find_by_uuid(&first).await.unwrap().unwrap();

    let updated = service
        .update_requirement(&first, &RequirementsDto::new("Second", "renamed"))
        .await
        .unwrap();

    let after = repository.find_by_uuid(&first).await.unwrap().unwrap();
    assert!(updated);
    assert_eq!(after.req_id, before.req_id);
    assert_eq!(after.uuid, before.uuid);
    assert_eq!(after.title, "Second");
    assert_eq!(after.description, "renamed");
    assert!(after.updated_at >= before.updated_at);
    assert_eq!(repository.count().unwrap(), 2);
}

#[actix_web::test]
async fn update_unknown_uuid_writes_nothing() {
    let (repository, service) = setup();

    let result = service
        .update_requirement("missing-uuid", &RequirementsDto::new("Title", "desc"))
        .await;

    assert!(matches!(result, Err(AppError::ResourceNotFound { .. })));
    assert_eq!(repository.count().unwrap(), 0);
}

#[actix_web::test]
async fn delete_removes_only_the_target() {
    let (repository, service) = setup();
    let first = service
        .create_requirement(&RequirementsDto::new("First", "one"))
        .await
        .unwrap();
    let second = service
        .create_requirement(&RequirementsDto::new("Second", "two"))
        .await
        .unwrap();

    assert!(service.delete_requirement(&first).await.unwrap());

    assert!(matches!(
        service.fetch_requirement(&first).await,
        Err(AppError::ResourceNotFound { .. })
    ));
    assert!(service.fetch_requirement(&second).await.is_ok());
    assert_eq!(repository.count().unwrap(), 1);
}

#[actix_web::test]
async fn delete_unknown_uuid_reports_not_found() {
    let (_, service) = setup();

    let result = service.delete_requirement("missing-uuid").await;

    assert!(matches!(result, Err(AppError::ResourceNotFound { .. })));
}

#[actix_web::test]
async fn delete_all_requires_the_exact_key() {
    let (repository, service) = setup();
    service
        .create_requirement(&RequirementsDto::new("First", "one"))
        .await
        .unwrap();

    assert!(!service.delete_all_requirements("").await.unwrap());
    assert!(!service.delete_all_requirements("AKAJ3971Y1AKSJDA").await.unwrap());
    assert_eq!(repository.count().unwrap(), 1);

    assert!(service.delete_all_requirements(DELETE_ALL_KEY).await.unwrap());
    assert_eq!(repository.count().unwrap(), 0);
    assert!(service.get_all_requirements().await.unwrap().is_empty());
}

#[actix_web::test]
async fn title_is_reusable_after_delete() {
    let (_, service) = setup();
    let uuid = service
        .create_requirement(&RequirementsDto::new("Login", "v1"))
        .await
        .unwrap();
    service.delete_requirement(&uuid).await.unwrap();

    let recreated = service
        .create_requirement(&RequirementsDto::new("Login", "v2"))
        .await
        .unwrap();

    assert_ne!(uuid, recreated);
    assert_eq!(service.fetch_requirement(&recreated).await.unwrap().description, "v2");
}
