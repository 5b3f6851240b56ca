//! Access code issuance against the in-memory roster store.

use std::sync::Arc;

use roster::domain::{
    AccessCode, AccessCodeError, AccessCodeService, CodeNamespace, GroupId, MAX_GENERATION_ATTEMPTS,
    MemberId,
};
use roster::test_support::{InMemoryRosterStore, StoreFailure};
use rstest::{fixture, rstest};

struct Codes {
    store: InMemoryRosterStore,
    service: AccessCodeService<InMemoryRosterStore>,
}

#[fixture]
fn codes() -> Codes {
    let store = InMemoryRosterStore::new();
    Codes {
        service: AccessCodeService::new(Arc::new(store.clone())),
        store,
    }
}

#[rstest]
#[tokio::test]
async fn stored_codes_are_taken_in_their_namespace_only(codes: Codes) {
    codes.store.set_member_code(MemberId::random(), "AB-12C");

    assert!(
        !codes
            .service
            .is_unique(CodeNamespace::Member, "ab-12c", None)
            .await
    );
    assert!(
        codes
            .service
            .is_unique(CodeNamespace::Group, "AB-12C", None)
            .await
    );
}

#[rstest]
#[tokio::test]
async fn a_record_does_not_collide_with_itself(codes: Codes) {
    let group = GroupId::random();
    codes.store.set_group_code(group, "ZZ@99");

    assert!(
        codes
            .service
            .is_unique(CodeNamespace::Group, " zz@99 ", Some(*group.as_uuid()))
            .await
    );
    assert!(
        !codes
            .service
            .is_unique(
                CodeNamespace::Group,
                "ZZ@99",
                Some(*GroupId::random().as_uuid())
            )
            .await
    );
}

#[rstest]
#[tokio::test]
async fn generated_codes_are_well_formed_and_free(codes: Codes) {
    let code = codes
        .service
        .generate_unique(CodeNamespace::Member, None)
        .await
        .expect("empty store has room");

    assert_eq!(AccessCode::parse(code.as_str()), Ok(code.clone()));
    assert!(
        codes
            .service
            .is_unique(CodeNamespace::Member, code.as_str(), None)
            .await
    );
    assert_eq!(codes.store.code_probes(), 2);
}

#[rstest]
#[tokio::test]
async fn outage_exhausts_after_ten_probes(codes: Codes) {
    codes.store.fail(StoreFailure::AccessCodes);

    let error = codes
        .service
        .generate_unique(CodeNamespace::Group, None)
        .await
        .expect_err("every probe fails");

    assert_eq!(
        error,
        AccessCodeError::Exhausted {
            namespace: CodeNamespace::Group,
            attempts: MAX_GENERATION_ATTEMPTS,
        }
    );
    assert_eq!(codes.store.code_probes(), MAX_GENERATION_ATTEMPTS);
}

#[rstest]
#[tokio::test]
async fn outage_reports_codes_as_taken(codes: Codes) {
    codes.store.fail(StoreFailure::AccessCodes);

    assert!(
        !codes
            .service
            .is_unique(CodeNamespace::Member, "AB-12C", None)
            .await
    );
}
