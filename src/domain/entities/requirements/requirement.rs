//! Requirement Entity Implementation
//!
//! 요구사항 엔티티의 핵심 구현체입니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 요구사항 엔티티
///
/// `requirements` 컬렉션의 문서와 1:1로 매핑됩니다.
/// 외부에는 `uuid`만 노출되며, `req_id`는 삭제 등 내부 연산에서만 사용됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// 내부 숫자 식별자. 첫 저장 시 리포지토리가 할당합니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub req_id: Option<i64>,
    /// 외부 식별자 (생성 이후 불변)
    pub uuid: String,
    /// 제목 (생성 시점에만 유일성 검사)
    pub title: String,
    pub description: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Requirement {
    /// 주어진 uuid로 비어 있는 새 엔티티를 만듭니다.
    ///
    /// 제목과 설명은 매퍼를 통해 DTO에서 채워집니다.
    pub fn new(uuid: String) -> Self {
        let now = DateTime::now();

        Self {
            req_id: None,
            uuid,
            title: String::new(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 수정 시간 갱신
    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }
}
