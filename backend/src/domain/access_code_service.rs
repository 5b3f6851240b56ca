//! Issuing access codes that are unique within their namespace.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::ports::{AccessCodeCommand, AccessCodeRegistry};
use crate::domain::{AccessCode, AccessCodeError, CodeNamespace, DomainError, normalize_code};

/// Attempts made by [`AccessCodeService::generate_unique`] before giving up.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

impl From<AccessCodeError> for DomainError {
    fn from(value: AccessCodeError) -> Self {
        match value {
            AccessCodeError::Exhausted {
                namespace,
                attempts,
            } => DomainError::service_unavailable("could not generate a unique access code")
                .with_details(json!({
                    "namespace": namespace.as_str(),
                    "attempts": attempts,
                    "code": "access_code_exhausted",
                })),
        }
    }
}

/// Access code service implementing [`AccessCodeCommand`].
///
/// Collisions are retried up to [`MAX_GENERATION_ATTEMPTS`] times. Registry
/// failures count as collisions: an inconclusive probe never lets a code
/// through.
#[derive(Clone)]
pub struct AccessCodeService<R> {
    registry: Arc<R>,
}

impl<R> AccessCodeService<R> {
    /// Create a service over the given registry.
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }
}

impl<R> AccessCodeService<R>
where
    R: AccessCodeRegistry,
{
    /// Whether `code` is free in `namespace`, ignoring the record `exclude_id`.
    ///
    /// The code is trimmed and uppercased before the probe.
    pub async fn is_unique(
        &self,
        namespace: CodeNamespace,
        code: &str,
        exclude_id: Option<Uuid>,
    ) -> bool {
        let code = normalize_code(code);
        match self.registry.code_exists(namespace, &code, exclude_id).await {
            Ok(exists) => !exists,
            Err(error) => {
                warn!(
                    %error,
                    %namespace,
                    code = %code,
                    "access code uniqueness check failed; treating code as taken"
                );
                false
            }
        }
    }

    /// Generate a code that is free in `namespace`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessCodeError::Exhausted`] after
    /// [`MAX_GENERATION_ATTEMPTS`] consecutive collisions.
    pub async fn generate_unique(
        &self,
        namespace: CodeNamespace,
        exclude_id: Option<Uuid>,
    ) -> Result<AccessCode, AccessCodeError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let candidate = AccessCode::generate();
            if self
                .is_unique(namespace, candidate.as_str(), exclude_id)
                .await
            {
                return Ok(candidate);
            }
            debug!(%namespace, attempt, "generated access code collided");
        }

        warn!(
            %namespace,
            attempts = MAX_GENERATION_ATTEMPTS,
            "no unique access code found"
        );
        Err(AccessCodeError::Exhausted {
            namespace,
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }
}

#[async_trait]
impl<R> AccessCodeCommand for AccessCodeService<R>
where
    R: AccessCodeRegistry,
{
    async fn is_unique(
        &self,
        namespace: CodeNamespace,
        code: &str,
        exclude_id: Option<Uuid>,
    ) -> bool {
        AccessCodeService::is_unique(self, namespace, code, exclude_id).await
    }

    async fn generate_unique(
        &self,
        namespace: CodeNamespace,
        exclude_id: Option<Uuid>,
    ) -> Result<AccessCode, AccessCodeError> {
        AccessCodeService::generate_unique(self, namespace, exclude_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{AccessCodeRegistryError, MockAccessCodeRegistry};
    use rstest::rstest;

    fn service(registry: MockAccessCodeRegistry) -> AccessCodeService<MockAccessCodeRegistry> {
        AccessCodeService::new(Arc::new(registry))
    }

    #[tokio::test]
    async fn is_unique_normalises_before_probing() {
        let mut registry = MockAccessCodeRegistry::new();
        registry
            .expect_code_exists()
            .withf(|namespace, code, exclude| {
                *namespace == CodeNamespace::Member && code == "AB-12C" && exclude.is_none()
            })
            .times(1)
            .return_once(|_, _, _| Ok(false));

        assert!(
            service(registry)
                .is_unique(CodeNamespace::Member, "  ab-12c ", None)
                .await
        );
    }

    #[tokio::test]
    async fn is_unique_passes_the_excluded_record() {
        let own_id = Uuid::new_v4();
        let mut registry = MockAccessCodeRegistry::new();
        registry
            .expect_code_exists()
            .withf(move |_, _, exclude| *exclude == Some(own_id))
            .times(1)
            .return_once(|_, _, _| Ok(false));

        assert!(
            service(registry)
                .is_unique(CodeNamespace::Group, "ZZ@99", Some(own_id))
                .await
        );
    }

    #[tokio::test]
    async fn taken_codes_are_not_unique() {
        let mut registry = MockAccessCodeRegistry::new();
        registry
            .expect_code_exists()
            .return_once(|_, _, _| Ok(true));

        assert!(
            !service(registry)
                .is_unique(CodeNamespace::Group, "ZZ@99", None)
                .await
        );
    }

    #[rstest]
    #[case(AccessCodeRegistryError::connection("refused"))]
    #[case(AccessCodeRegistryError::query("timeout"))]
    #[tokio::test]
    async fn registry_failures_are_not_unique(#[case] error: AccessCodeRegistryError) {
        let mut registry = MockAccessCodeRegistry::new();
        registry
            .expect_code_exists()
            .return_once(move |_, _, _| Err(error));

        assert!(
            !service(registry)
                .is_unique(CodeNamespace::Member, "AB-12C", None)
                .await
        );
    }

    #[tokio::test]
    async fn generate_unique_returns_first_free_code() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut registry = MockAccessCodeRegistry::new();
        registry
            .expect_code_exists()
            .returning(move |_, _, _| Ok(counter.fetch_add(1, Ordering::SeqCst) < 3));

        let code = service(registry)
            .generate_unique(CodeNamespace::Group, None)
            .await
            .expect("fourth attempt is free");

        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert_eq!(AccessCode::parse(code.as_str()), Ok(code));
    }

    #[tokio::test]
    async fn generate_unique_stops_after_ten_collisions() {
        let mut registry = MockAccessCodeRegistry::new();
        registry
            .expect_code_exists()
            .times(MAX_GENERATION_ATTEMPTS)
            .returning(|_, _, _| Ok(true));

        let error = service(registry)
            .generate_unique(CodeNamespace::Member, None)
            .await
            .expect_err("every attempt collides");

        assert_eq!(
            error,
            AccessCodeError::Exhausted {
                namespace: CodeNamespace::Member,
                attempts: 10,
            }
        );
    }

    #[tokio::test]
    async fn generate_unique_retries_past_registry_failures() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut registry = MockAccessCodeRegistry::new();
        registry.expect_code_exists().returning(move |_, _, _| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(AccessCodeRegistryError::connection("refused"))
            } else {
                Ok(false)
            }
        });

        service(registry)
            .generate_unique(CodeNamespace::Group, None)
            .await
            .expect("second attempt is free");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    fn exhaustion_maps_to_service_unavailable() {
        let error = DomainError::from(AccessCodeError::Exhausted {
            namespace: CodeNamespace::Group,
            attempts: MAX_GENERATION_ATTEMPTS,
        });
        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
        let details = error.details().expect("details attached");
        assert_eq!(details["namespace"], "group");
        assert_eq!(details["attempts"], 10);
    }
}
