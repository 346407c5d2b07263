//! Test harness over the in-memory gateway.
//!
//! No external infrastructure: the gateway fakes live in-process, so every
//! test gets a fresh store, blob bucket, and identity service.

use storefront_core::kernel::test_dependencies::TestDependencies;
use storefront_core::kernel::{AuthSubject, StorefrontDeps};
use test_context::AsyncTestContext;

pub struct TestHarness {
    /// Concrete fakes, for seeding state and asserting on calls.
    pub gateway: TestDependencies,
    /// The container effects take.
    pub deps: StorefrontDeps,
    /// Signed-in dev subject.
    pub subject: AuthSubject,
}

impl TestHarness {
    pub fn new() -> Self {
        // Respect RUST_LOG when running tests with -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let gateway = TestDependencies::new();
        let subject = gateway.identity.sign_in_as("dev@motoradverts.test");
        let deps = gateway.deps();
        Self {
            gateway,
            deps,
            subject,
        }
    }
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new()
    }

    async fn teardown(self) {
        // In-memory state is simply dropped
    }
}
