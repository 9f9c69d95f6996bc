use super::{StandardUtility, UtilityCall, UtilityHook, UtilityHookRef};
use crate::error::Result;
use crate::policy::{PolicyDecision, PolicyEngine};
use gatekeeper_configs::PolicySettings;
use gatekeeper_session::ExecutionContext;

/// Utility hook that evaluates each statement before passing it down the chain.
pub struct Gatekeeper {
    settings: PolicySettings,
    previous: Option<UtilityHookRef>,
}

impl Gatekeeper {
    pub const NAME: &'static str = "gatekeeper";

    pub fn new(settings: PolicySettings, previous: Option<UtilityHookRef>) -> Self {
        Self { settings, previous }
    }

    pub fn settings(&self) -> &PolicySettings {
        &self.settings
    }

    /// The hook this one forwards to, if any.
    pub fn previous(&self) -> Option<&UtilityHookRef> {
        self.previous.as_ref()
    }

    /// Decision for a call, without executing anything.
    pub fn check(&self, call: &UtilityCall<'_>) -> PolicyDecision {
        let ctx = ExecutionContext::capture(call.session);
        PolicyEngine::new(&self.settings, call.catalog).evaluate(call.statement, &ctx)
    }
}

impl UtilityHook for Gatekeeper {
    fn process_utility(&self, call: &UtilityCall<'_>, standard: &dyn StandardUtility) -> Result<()> {
        self.check(call).into_result()?;

        match &self.previous {
            Some(previous) => {
                log::debug!(
                    target: "gatekeeper::hook",
                    "Forwarding {} to {}",
                    call.statement.name(),
                    previous.name()
                );
                previous.process_utility(call, standard)
            }
            None => standard.execute(call),
        }
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
