use tracing::{debug, warn};
use types::HandlerName;

use crate::error::ChainError;
use crate::handler::ActivationContext;
use crate::registry::HandlerRegistry;

/// What one chain dispatch did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Handlers that ran, in call order.
    pub activated: Vec<HandlerName>,
    /// The token that stopped the chain, if it was not a handler name.
    pub rejected: Option<String>,
}

impl DispatchOutcome {
    /// True when every token named a handler.
    pub fn is_complete(&self) -> bool {
        self.rejected.is_none()
    }
}

/// Drives a chain of handler names through the registry.
///
/// EDUCATIONAL NOTE: conceptually each handler calls the next one before it
/// returns, so the chain `foo-bar-boo` is the call stack
/// `foo -> bar -> boo`. Rather than recursing, the dispatcher walks the
/// tokens in a loop and leaves every activation's frame pushed until the
/// chain is exhausted, then pops them all. The addresses come out exactly
/// as nested calls would produce them, but chain length no longer costs
/// real call-stack depth.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'r> {
    registry: &'r HandlerRegistry,
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r HandlerRegistry) -> Self {
        Self { registry }
    }

    pub fn dispatch<'t, I>(
        &self,
        tokens: I,
        ctx: &mut ActivationContext<'_>,
    ) -> Result<DispatchOutcome, ChainError>
    where
        I: IntoIterator<Item = &'t str>,
    {
        let base_depth = ctx.space.depth();
        let result = self.run_chain(tokens, ctx);

        while ctx.space.depth() > base_depth {
            ctx.space.pop_frame();
        }
        result
    }

    fn run_chain<'t, I>(
        &self,
        tokens: I,
        ctx: &mut ActivationContext<'_>,
    ) -> Result<DispatchOutcome, ChainError>
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut outcome = DispatchOutcome::default();

        for token in tokens {
            let Some(handler) = self.registry.resolve(token) else {
                warn!(token, "invalid function name, chain stopped");
                writeln!(ctx.out, "Invalid function name: {}", token)?;
                outcome.rejected = Some(token.to_string());
                break;
            };

            handler.activate(ctx)?;
            outcome.activated.push(handler.name());
        }

        debug!(
            activated = outcome.activated.len(),
            complete = outcome.is_complete(),
            "chain finished"
        );
        Ok(outcome)
    }
}

/// Convenience wrapper: dispatch `tokens` against `registry` in one call.
pub fn dispatch<'t, I>(
    registry: &HandlerRegistry,
    tokens: I,
    ctx: &mut ActivationContext<'_>,
) -> Result<DispatchOutcome, ChainError>
where
    I: IntoIterator<Item = &'t str>,
{
    Dispatcher::new(registry).dispatch(tokens, ctx)
}
