//! Integration tests for the Diesel roster adapters against embedded PostgreSQL.
//!
//! Seeds one group with a president and a vice-president, a locked and an
//! unlocked category, and both an active and a retired role assignment.

use std::sync::Arc;

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use roster::domain::ports::{
    AccessCodeRegistry, CategoryRoleRepository, FinancialCategoryRepository,
    GroupLeadershipRepository,
};
use roster::domain::{
    AccessCodeService, CategoryId, CategoryRole, CodeNamespace, GroupId, GroupLeadership,
    MemberId,
};
use roster::outbound::persistence::{
    DbPool, DieselAccessCodeRegistry, DieselCategoryRoleRepository,
    DieselFinancialCategoryRepository, DieselGroupLeadershipRepository, PoolConfig,
};
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;
use uuid::Uuid;

mod support;

use support::{
    format_postgres_error, handle_cluster_setup_failure, migrate_schema, reset_database,
    test_cluster,
};

const GROUP_CODE: &str = "GR@7K2";
const OTHER_GROUP_CODE: &str = "Q9-ZZ1";
const PRESIDENT_CODE: &str = "AB-12C";
const SECRETARY_CODE: &str = "X@4PQ7";

struct Seed {
    group: GroupId,
    other_group: GroupId,
    locked_category: CategoryId,
    open_category: CategoryId,
    president: MemberId,
    vice_president: MemberId,
    secretary: MemberId,
    retired_assistant: MemberId,
}

struct TestContext {
    runtime: Runtime,
    _cluster: TestCluster,
    groups: DieselGroupLeadershipRepository,
    roles: DieselCategoryRoleRepository,
    categories: DieselFinancialCategoryRepository,
    registry: DieselAccessCodeRegistry,
    seed: Seed,
}

fn seed_roster(url: &str) -> Result<Seed, String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    let seed = Seed {
        group: GroupId::random(),
        other_group: GroupId::random(),
        locked_category: CategoryId::random(),
        open_category: CategoryId::random(),
        president: MemberId::random(),
        vice_president: MemberId::random(),
        secretary: MemberId::random(),
        retired_assistant: MemberId::random(),
    };
    let group = *seed.group.as_uuid();
    let other_group = *seed.other_group.as_uuid();

    let mut run = |sql: &str, params: &[&(dyn postgres::types::ToSql + Sync)]| {
        client
            .execute(sql, params)
            .map(|_| ())
            .map_err(|err| format_postgres_error(&err))
    };

    run(
        "INSERT INTO groups (id, name, access_code) VALUES ($1, 'Banda Norte', $2), ($3, 'Coro Sur', $4)",
        &[&group, &GROUP_CODE, &other_group, &OTHER_GROUP_CODE],
    )?;
    for (member, name, code) in [
        (seed.president, "Ana", Some(PRESIDENT_CODE)),
        (seed.vice_president, "Bruno", None),
        (seed.secretary, "Carla", Some(SECRETARY_CODE)),
        (seed.retired_assistant, "Diego", None),
    ] {
        run(
            "INSERT INTO members (id, group_id, full_name, member_code) VALUES ($1, $2, $3, $4)",
            &[member.as_uuid(), &group, &name, &code],
        )?;
    }
    run(
        "UPDATE groups SET president_id = $2, vice_president_2_id = $3 WHERE id = $1",
        &[&group, seed.president.as_uuid(), seed.vice_president.as_uuid()],
    )?;
    run(
        "INSERT INTO financial_categories (id, group_id, name, is_locked) VALUES ($1, $3, 'Cuotas', TRUE), ($2, $3, 'Viajes', FALSE)",
        &[
            seed.locked_category.as_uuid(),
            seed.open_category.as_uuid(),
            &group,
        ],
    )?;
    run(
        "INSERT INTO category_roles (id, category_id, member_id, role, is_active) VALUES ($1, $3, $4, 'secretario', TRUE), ($2, $3, $5, 'asistente', FALSE)",
        &[
            &Uuid::new_v4(),
            &Uuid::new_v4(),
            seed.locked_category.as_uuid(),
            seed.secretary.as_uuid(),
            seed.retired_assistant.as_uuid(),
        ],
    )?;

    Ok(seed)
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    let database_url = reset_database(&cluster, "roster_repositories_test")?;
    migrate_schema(&database_url)?;
    let seed = seed_roster(&database_url)?;

    let config = PoolConfig::new(&database_url)
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(async { DbPool::new(config).await })
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        _cluster: cluster,
        groups: DieselGroupLeadershipRepository::new(pool.clone()),
        roles: DieselCategoryRoleRepository::new(pool.clone()),
        categories: DieselFinancialCategoryRepository::new(pool.clone()),
        registry: DieselAccessCodeRegistry::new(pool),
        seed,
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

#[rstest]
fn leadership_slots_are_read_from_the_group_row(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: leadership_slots_are_read_from_the_group_row skipped");
        return;
    };
    let seed = &context.seed;

    let leadership = context
        .runtime
        .block_on(context.groups.find_leadership(&seed.group))
        .expect("read leadership");
    let unknown = context
        .runtime
        .block_on(context.groups.find_leadership(&GroupId::random()))
        .expect("read unknown group");

    assert_eq!(
        leadership,
        Some(GroupLeadership {
            president: Some(seed.president),
            vice_president_1: None,
            vice_president_2: Some(seed.vice_president),
        })
    );
    assert_eq!(unknown, None);
}

#[rstest]
fn only_active_role_assignments_are_visible(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: only_active_role_assignments_are_visible skipped");
        return;
    };
    let seed = &context.seed;
    let role_of = |category: &CategoryId, member: &MemberId| {
        context
            .runtime
            .block_on(context.roles.find_active_role(category, member))
            .expect("read role")
    };

    assert_eq!(
        role_of(&seed.locked_category, &seed.secretary),
        Some(CategoryRole::Secretary)
    );
    assert_eq!(role_of(&seed.locked_category, &seed.retired_assistant), None);
    assert_eq!(role_of(&seed.open_category, &seed.secretary), None);
    assert_eq!(role_of(&seed.locked_category, &seed.president), None);
}

#[rstest]
fn lock_state_is_read_per_category(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: lock_state_is_read_per_category skipped");
        return;
    };
    let seed = &context.seed;
    let locked = |category: &CategoryId| {
        context
            .runtime
            .block_on(context.categories.find_lock_state(category))
            .expect("read lock state")
    };

    assert_eq!(locked(&seed.locked_category), Some(true));
    assert_eq!(locked(&seed.open_category), Some(false));
    assert_eq!(locked(&CategoryId::random()), None);
}

#[rstest]
#[case::member_code_taken(CodeNamespace::Member, PRESIDENT_CODE, true)]
#[case::group_code_taken(CodeNamespace::Group, GROUP_CODE, true)]
#[case::member_code_in_group_namespace(CodeNamespace::Group, PRESIDENT_CODE, false)]
#[case::group_code_in_member_namespace(CodeNamespace::Member, GROUP_CODE, false)]
#[case::unused_code(CodeNamespace::Member, "ZZ-999", false)]
fn codes_are_looked_up_per_namespace(
    repo_context: Option<TestContext>,
    #[case] namespace: CodeNamespace,
    #[case] code: &str,
    #[case] expected: bool,
) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: codes_are_looked_up_per_namespace skipped");
        return;
    };

    let exists = context
        .runtime
        .block_on(context.registry.code_exists(namespace, code, None))
        .expect("probe code");

    assert_eq!(exists, expected);
}

#[rstest]
fn excluded_record_does_not_count_as_holder(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: excluded_record_does_not_count_as_holder skipped");
        return;
    };
    let seed = &context.seed;
    let exists = |namespace: CodeNamespace, code: &str, exclude: Option<Uuid>| {
        context
            .runtime
            .block_on(context.registry.code_exists(namespace, code, exclude))
            .expect("probe code")
    };

    assert!(!exists(
        CodeNamespace::Member,
        PRESIDENT_CODE,
        Some(*seed.president.as_uuid())
    ));
    assert!(exists(
        CodeNamespace::Member,
        PRESIDENT_CODE,
        Some(*seed.secretary.as_uuid())
    ));
    assert!(!exists(
        CodeNamespace::Group,
        GROUP_CODE,
        Some(*seed.group.as_uuid())
    ));
    assert!(exists(
        CodeNamespace::Group,
        GROUP_CODE,
        Some(*seed.other_group.as_uuid())
    ));
}

#[rstest]
fn uniqueness_service_normalises_before_querying(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: uniqueness_service_normalises_before_querying skipped");
        return;
    };
    let service = AccessCodeService::new(Arc::new(context.registry.clone()));
    let secretary = *context.seed.secretary.as_uuid();

    let (taken, own, generated) = context.runtime.block_on(async {
        let taken = service
            .is_unique(CodeNamespace::Member, "  x@4pq7 ", None)
            .await;
        let own = service
            .is_unique(CodeNamespace::Member, "x@4pq7", Some(secretary))
            .await;
        let generated = service
            .generate_unique(CodeNamespace::Group, None)
            .await
            .expect("a free group code exists");
        (taken, own, generated)
    });

    assert!(!taken);
    assert!(own);
    assert_ne!(generated.as_str(), GROUP_CODE);
    assert_ne!(generated.as_str(), OTHER_GROUP_CODE);
}
