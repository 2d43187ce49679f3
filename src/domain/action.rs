use crate::domain::models::CommandArgs;
use anyhow::Result;
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::sync::Arc;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandAction: Send + Sync {
    // `args` is only present when the command declared a parameter
    async fn invoke(&self, args: Option<CommandArgs>) -> Result<()>;
}

struct FnAction<F>(F);

#[async_trait]
impl<F> CommandAction for FnAction<F>
where
    F: Fn(Option<&CommandArgs>) -> Result<()> + Send + Sync,
{
    async fn invoke(&self, args: Option<CommandArgs>) -> Result<()> {
        (self.0)(args.as_ref())
    }
}

struct AsyncFnAction<F>(F);

#[async_trait]
impl<F> CommandAction for AsyncFnAction<F>
where
    F: Fn(Option<CommandArgs>) -> BoxFuture<'static, Result<()>> + Send + Sync,
{
    async fn invoke(&self, args: Option<CommandArgs>) -> Result<()> {
        (self.0)(args).await
    }
}

/// Wraps a synchronous closure as an action.
pub fn from_fn<F>(f: F) -> Arc<dyn CommandAction>
where
    F: Fn(Option<&CommandArgs>) -> Result<()> + Send + Sync + 'static,
{
    Arc::new(FnAction(f))
}

/// Wraps a closure producing a deferred result as an action.
pub fn from_async<F>(f: F) -> Arc<dyn CommandAction>
where
    F: Fn(Option<CommandArgs>) -> BoxFuture<'static, Result<()>> + Send + Sync + 'static,
{
    Arc::new(AsyncFnAction(f))
}

pub fn noop() -> Arc<dyn CommandAction> {
    from_fn(|_| Ok(()))
}
