//! Mutations
//!
//! Tracks the state of a single write operation. The caller receives the
//! result and decides what to invalidate.

use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use leptos::prelude::*;
use tracing::{debug, warn};

type MutationFn<I, O> = Arc<dyn Fn(I) -> LocalBoxFuture<'static, Result<O, String>> + Send + Sync>;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum MutationState<O> {
    #[default]
    Idle,
    Pending,
    Success(O),
    Error(String),
}

impl<O> MutationState<O> {
    pub fn is_pending(&self) -> bool {
        matches!(self, MutationState::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            MutationState::Error(message) => Some(message),
            _ => None,
        }
    }
}

pub struct Mutation<I, O> {
    name: &'static str,
    run: MutationFn<I, O>,
    state: ArcRwSignal<MutationState<O>>,
    latest: Arc<AtomicU64>,
}

impl<I, O> Clone for Mutation<I, O> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            run: self.run.clone(),
            state: self.state.clone(),
            latest: self.latest.clone(),
        }
    }
}

impl<I, O> Mutation<I, O>
where
    I: 'static,
    O: Clone + Send + Sync + 'static,
{
    pub fn new<F, Fut, E>(name: &'static str, run: F) -> Self
    where
        F: Fn(I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<O, E>> + 'static,
        E: Display,
    {
        Self {
            name,
            run: Arc::new(move |input| {
                run(input)
                    .map(|result| result.map_err(|err| err.to_string()))
                    .boxed_local()
            }),
            state: ArcRwSignal::new(MutationState::Idle),
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Run one invocation. Only the most recent invocation writes the
    /// terminal state.
    pub async fn mutate(&self, input: I) -> Result<O, String> {
        let invocation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.set(MutationState::Pending);
        debug!(mutation = self.name, invocation, "mutation started");

        let result = (self.run)(input).await;

        if self.latest.load(Ordering::SeqCst) == invocation {
            self.state.set(match &result {
                Ok(value) => MutationState::Success(value.clone()),
                Err(message) => MutationState::Error(message.clone()),
            });
        }
        if let Err(message) = &result {
            warn!(mutation = self.name, %message, "mutation failed");
        }
        result
    }

    /// Current state; tracked inside a reactive scope
    pub fn state(&self) -> MutationState<O> {
        self.state.get()
    }

    pub fn reset(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
        self.state.set(MutationState::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use std::sync::Mutex;

    #[tokio::test]
    async fn test_success_state_and_result() {
        let mutation = Mutation::new("create", |name: String| async move {
            Ok::<_, String>(format!("created {name}"))
        });
        assert_eq!(mutation.state(), MutationState::Idle);

        let result = mutation.mutate("sprint".to_string()).await;

        assert_eq!(result, Ok("created sprint".to_string()));
        assert_eq!(mutation.state(), MutationState::Success("created sprint".to_string()));
    }

    #[tokio::test]
    async fn test_error_state_keeps_message() {
        let mutation = Mutation::new("delete", |_: String| async move {
            Err::<(), _>("Tag not found")
        });

        let result = mutation.mutate("a1".to_string()).await;

        assert_eq!(result, Err("Tag not found".to_string()));
        assert_eq!(mutation.state().error(), Some("Tag not found"));
    }

    #[tokio::test]
    async fn test_pending_while_running_then_terminal_error() {
        let (tx, rx) = oneshot::channel::<()>();
        let gate = Arc::new(Mutex::new(Some(rx)));
        let mutation = Mutation::new("restore", move |_: String| {
            let gate = gate.lock().unwrap().take();
            async move {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                Err::<(), _>("offline")
            }
        });

        let observer = mutation.clone();
        let (_, seen) = futures::join!(mutation.mutate("a1".to_string()), async move {
            let seen = observer.state();
            let _ = tx.send(());
            seen
        });
        assert!(seen.is_pending());
        assert_eq!(mutation.state().error(), Some("offline"));

        let _ = mutation.mutate("a1".to_string()).await;
        assert_eq!(mutation.state().error(), Some("offline"));
    }

    #[tokio::test]
    async fn test_stale_invocation_does_not_overwrite_latest() {
        let (tx, rx) = oneshot::channel::<()>();
        let gate = Arc::new(Mutex::new(Some(rx)));
        let mutation = Mutation::new("create", move |name: String| {
            let gate = gate.lock().unwrap().take();
            async move {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                Ok::<_, String>(name)
            }
        });

        let (first, second, _) = futures::join!(
            mutation.mutate("slow".to_string()),
            mutation.mutate("fast".to_string()),
            async move {
                let _ = tx.send(());
            }
        );

        assert_eq!(first, Ok("slow".to_string()));
        assert_eq!(second, Ok("fast".to_string()));
        assert_eq!(mutation.state(), MutationState::Success("fast".to_string()));
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle() {
        let mutation = Mutation::new("create", |_: ()| async { Ok::<_, String>(1u8) });
        let _ = mutation.mutate(()).await;
        mutation.reset();
        assert_eq!(mutation.state(), MutationState::Idle);
    }
}
