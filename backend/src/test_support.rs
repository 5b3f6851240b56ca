//! In-memory store for integration tests.
//!
//! [`InMemoryRosterStore`] implements every driven port over shared maps so
//! tests can seed groups, categories, roles and codes, then inject failures
//! per port. Compiled only with the `test-support` feature.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    AccessCodeRegistry, AccessCodeRegistryError, CategoryRoleRepository,
    CategoryRoleRepositoryError, FinancialCategoryRepository, FinancialCategoryRepositoryError,
    GroupLeadershipRepository, GroupRepositoryError,
};
use crate::domain::{
    CategoryId, CategoryRole, CodeNamespace, GroupId, GroupLeadership, MemberId, normalize_code,
};

/// Port whose reads can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreFailure {
    Groups,
    CategoryRoles,
    Categories,
    AccessCodes,
}

#[derive(Debug, Clone)]
struct RoleAssignment {
    category_id: CategoryId,
    member_id: MemberId,
    role: CategoryRole,
    active: bool,
}

#[derive(Debug, Default)]
struct StoreState {
    groups: HashMap<GroupId, GroupLeadership>,
    group_codes: HashMap<GroupId, String>,
    member_codes: HashMap<MemberId, String>,
    categories: HashMap<CategoryId, bool>,
    roles: Vec<RoleAssignment>,
    failures: HashSet<StoreFailure>,
    code_probes: usize,
}

/// Shared in-memory roster store. Clones share state.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRosterStore {
    state: Arc<Mutex<StoreState>>,
}

const POISONED: &str = "in-memory store lock poisoned";

impl InMemoryRosterStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Option<MutexGuard<'_, StoreState>> {
        self.state.lock().ok()
    }

    fn update(&self, apply: impl FnOnce(&mut StoreState)) {
        if let Some(mut state) = self.lock() {
            apply(&mut state);
        }
    }

    /// Insert or replace a group and its leadership slots.
    pub fn insert_group(&self, group_id: GroupId, leadership: GroupLeadership) {
        self.update(|state| {
            state.groups.insert(group_id, leadership);
        });
    }

    /// Insert or replace a financial category.
    pub fn insert_category(&self, category_id: CategoryId, locked: bool) {
        self.update(|state| {
            state.categories.insert(category_id, locked);
        });
    }

    /// Give `member_id` an active role in the category, retiring any
    /// previous active assignment for the pair.
    pub fn assign_role(&self, category_id: CategoryId, member_id: MemberId, role: CategoryRole) {
        self.update(|state| {
            retire(state, category_id, member_id);
            state.roles.push(RoleAssignment {
                category_id,
                member_id,
                role,
                active: true,
            });
        });
    }

    /// Mark the pair's active assignment inactive.
    pub fn revoke_role(&self, category_id: CategoryId, member_id: MemberId) {
        self.update(|state| retire(state, category_id, member_id));
    }

    /// Store a member code in canonical form.
    pub fn set_member_code(&self, member_id: MemberId, code: &str) {
        self.update(|state| {
            state.member_codes.insert(member_id, normalize_code(code));
        });
    }

    /// Store a group access code in canonical form.
    pub fn set_group_code(&self, group_id: GroupId, code: &str) {
        self.update(|state| {
            state.group_codes.insert(group_id, normalize_code(code));
        });
    }

    /// Make every read through `port` fail until [`Self::recover`].
    pub fn fail(&self, port: StoreFailure) {
        self.update(|state| {
            state.failures.insert(port);
        });
    }

    /// Undo [`Self::fail`].
    pub fn recover(&self, port: StoreFailure) {
        self.update(|state| {
            state.failures.remove(&port);
        });
    }

    /// Number of `code_exists` calls served so far, failures included.
    pub fn code_probes(&self) -> usize {
        self.lock().map_or(0, |state| state.code_probes)
    }
}

fn retire(state: &mut StoreState, category_id: CategoryId, member_id: MemberId) {
    state
        .roles
        .iter_mut()
        .filter(|assignment| {
            assignment.active
                && assignment.category_id == category_id
                && assignment.member_id == member_id
        })
        .for_each(|assignment| assignment.active = false);
}

#[async_trait]
impl GroupLeadershipRepository for InMemoryRosterStore {
    async fn find_leadership(
        &self,
        group_id: &GroupId,
    ) -> Result<Option<GroupLeadership>, GroupRepositoryError> {
        let state = self
            .lock()
            .ok_or_else(|| GroupRepositoryError::connection(POISONED))?;
        if state.failures.contains(&StoreFailure::Groups) {
            return Err(GroupRepositoryError::connection("injected failure"));
        }
        Ok(state.groups.get(group_id).copied())
    }
}

#[async_trait]
impl CategoryRoleRepository for InMemoryRosterStore {
    async fn find_active_role(
        &self,
        category_id: &CategoryId,
        member_id: &MemberId,
    ) -> Result<Option<CategoryRole>, CategoryRoleRepositoryError> {
        let state = self
            .lock()
            .ok_or_else(|| CategoryRoleRepositoryError::connection(POISONED))?;
        if state.failures.contains(&StoreFailure::CategoryRoles) {
            return Err(CategoryRoleRepositoryError::query("injected failure"));
        }
        Ok(state
            .roles
            .iter()
            .find(|assignment| {
                assignment.active
                    && assignment.category_id == *category_id
                    && assignment.member_id == *member_id
            })
            .map(|assignment| assignment.role))
    }
}

#[async_trait]
impl FinancialCategoryRepository for InMemoryRosterStore {
    async fn find_lock_state(
        &self,
        category_id: &CategoryId,
    ) -> Result<Option<bool>, FinancialCategoryRepositoryError> {
        let state = self
            .lock()
            .ok_or_else(|| FinancialCategoryRepositoryError::connection(POISONED))?;
        if state.failures.contains(&StoreFailure::Categories) {
            return Err(FinancialCategoryRepositoryError::query("injected failure"));
        }
        Ok(state.categories.get(category_id).copied())
    }
}

#[async_trait]
impl AccessCodeRegistry for InMemoryRosterStore {
    async fn code_exists(
        &self,
        namespace: CodeNamespace,
        code: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AccessCodeRegistryError> {
        let mut state = self
            .lock()
            .ok_or_else(|| AccessCodeRegistryError::connection(POISONED))?;
        state.code_probes += 1;
        if state.failures.contains(&StoreFailure::AccessCodes) {
            return Err(AccessCodeRegistryError::connection("injected failure"));
        }
        let holds = |holder: &Uuid, stored: &String| {
            stored == code && exclude_id.is_none_or(|excluded| excluded != *holder)
        };
        Ok(match namespace {
            CodeNamespace::Member => state
                .member_codes
                .iter()
                .any(|(id, stored)| holds(id.as_uuid(), stored)),
            CodeNamespace::Group => state
                .group_codes
                .iter()
                .any(|(id, stored)| holds(id.as_uuid(), stored)),
        })
    }
}
