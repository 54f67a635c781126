use rolodex::contact::ContactRepository;
use rolodex::errors::StoreResult;
use rolodex::store::{PersistenceContext, RecordStore};

/// Shared fixture for integration tests: one fresh in-memory persistence
/// context and accessors for the layers built on top of it.
#[derive(Clone)]
pub struct TestContext {
    context: PersistenceContext,
}

impl TestContext {
    pub fn new(context: PersistenceContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> PersistenceContext {
        self.context.clone()
    }

    pub fn store(&self) -> RecordStore {
        RecordStore::new(self.context.clone())
    }

    pub fn repository(&self) -> ContactRepository {
        ContactRepository::with_context(self.context.clone())
    }
}

pub fn create_test_context() -> StoreResult<TestContext> {
    Ok(TestContext::new(PersistenceContext::in_memory()))
}

pub fn cleanup(ctx: TestContext) -> StoreResult<()> {
    ctx.context().close();
    Ok(())
}

/// Runs a test between a before and an after step.
///
/// The after step runs whether or not the test step succeeded, so a failing
/// test still releases its context.
pub fn run_test<B, T, A>(before: B, test: T, after: A)
where
    B: Fn() -> StoreResult<TestContext>,
    T: Fn(TestContext) -> StoreResult<()>,
    A: Fn(TestContext) -> StoreResult<()>,
{
    let ctx = match before() {
        Ok(ctx) => ctx,
        Err(e) => panic!("Before run failed: {:?}", e),
    };

    let result = test(ctx.clone());
    let after_result = after(ctx);

    if let Err(e) = result {
        panic!("Test failed: {:?}", e);
    }
    if let Err(e) = after_result {
        panic!("After run failed: {:?}", e);
    }
}
