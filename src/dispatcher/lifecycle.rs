//! Handler lifecycle runner.
//!
//! Drives one handler instance through its fixed sequence of calls:
//!
//! ```text
//! instantiate → pre_execute → validate → execute → exclusions/wrap
//!     → (serialize, by the dispatcher) → post_execute
//! ```
//!
//! Every call into handler code is guarded with `catch_unwind`, so a panic
//! becomes an application error instead of unwinding into the transport.
//! `on_error` is called on the instance if and only if instantiation
//! succeeded and a later step failed. `post_execute` only runs once the
//! success body has been produced.

use crate::action::{Action, ActionRegistry};
use crate::error::DispatchError;
use crate::request::RequestContext;
use crate::response::ResponseEnvelope;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, error, warn};

/// Run `f`, turning a panic into [`DispatchError::Application`] carrying the
/// panic message.
pub(crate) fn guarded<T>(step: &'static str, f: impl FnOnce() -> T) -> Result<T, DispatchError> {
    catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = panic_message(payload.as_ref());
        error!(step, panic = %message, "Panic captured");
        DispatchError::Application(message)
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Panicked with a non-string payload".to_string()
    }
}

/// A handler that produced its result and is waiting for the outcome of
/// serialization.
///
/// Exactly one of [`Completed::finish`] or [`Completed::abort`] must be
/// called.
pub struct Completed {
    handler_id: String,
    action: Box<dyn Action>,
}

impl Completed {
    /// The response body was produced: run `post_execute`.
    ///
    /// # Errors
    ///
    /// A panic in `post_execute` is returned as an application error, after
    /// `on_error` has been called.
    pub fn finish(mut self) -> Result<(), DispatchError> {
        match guarded("post_execute", || self.action.post_execute()) {
            Ok(()) => Ok(()),
            Err(err) => {
                notify_error(self.action.as_mut(), &self.handler_id, &err);
                Err(err)
            }
        }
    }

    /// The response could not be produced: run `on_error` instead of
    /// `post_execute`.
    pub fn abort(mut self, err: &DispatchError) {
        notify_error(self.action.as_mut(), &self.handler_id, err);
    }
}

impl std::fmt::Debug for Completed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completed")
            .field("handler_id", &self.handler_id)
            .finish_non_exhaustive()
    }
}

fn notify_error(action: &mut dyn Action, handler_id: &str, err: &DispatchError) {
    debug!(handler_id = %handler_id, error = %err, "Invoking on_error");
    if guarded("on_error", || action.on_error()).is_err() {
        warn!(handler_id = %handler_id, "on_error callback panicked");
    }
}

/// Instantiate the handler for `handler_id` and run it up to the response
/// envelope.
///
/// Returns the success envelope and the live handler, whose final callback
/// depends on serialization. On failure `on_error` has already been called
/// when an instance existed.
pub fn run(
    registry: &ActionRegistry,
    handler_id: &str,
    ctx: &RequestContext,
    default_exclusions: &[String],
) -> Result<(ResponseEnvelope, Completed), DispatchError> {
    let mut action = guarded("instantiate", || registry.instantiate(handler_id, ctx))?
        .map_err(|e| DispatchError::Application(e.to_string()))?;
    debug!(handler_id = %handler_id, "Action instantiated");

    match drive(action.as_mut(), ctx, default_exclusions) {
        Ok(envelope) => Ok((
            envelope,
            Completed {
                handler_id: handler_id.to_string(),
                action,
            },
        )),
        Err(err) => {
            notify_error(action.as_mut(), handler_id, &err);
            Err(err)
        }
    }
}

fn drive(
    action: &mut dyn Action,
    ctx: &RequestContext,
    default_exclusions: &[String],
) -> Result<ResponseEnvelope, DispatchError> {
    guarded("pre_execute", || action.pre_execute())?;

    guarded("validate", || action.validate(&ctx.arguments, &ctx.parameters))??;

    let result = guarded("execute", || action.execute(&ctx.arguments, &ctx.parameters))?
        .map_err(|e| DispatchError::Application(e.to_string()))?;

    let exclusions = guarded("exclusions", || action.exclusions())?;
    Ok(ResponseEnvelope::success(result, default_exclusions, exclusions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionResult;
    use crate::error::ActionError;
    use crate::ids::RequestId;
    use crate::request::{ArgVec, ParameterMap};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    type Calls = Arc<Mutex<Vec<&'static str>>>;

    #[derive(Clone, Copy)]
    enum Fail {
        Never,
        Validate,
        Execute,
        Panic,
        PostPanic,
    }

    struct Scripted {
        calls: Calls,
        fail: Fail,
    }

    impl Scripted {
        fn record(&self, step: &'static str) {
            self.calls.lock().unwrap().push(step);
        }
    }

    impl Action for Scripted {
        fn pre_execute(&mut self) {
            self.record("pre_execute");
        }

        fn validate(&mut self, _a: &[String], _p: &ParameterMap) -> Result<(), ActionError> {
            self.record("validate");
            match self.fail {
                Fail::Validate => Err(ActionError::validation("bad input")),
                _ => Ok(()),
            }
        }

        fn execute(&mut self, args: &[String], _p: &ParameterMap) -> ActionResult {
            self.record("execute");
            match self.fail {
                Fail::Execute => Err(ActionError::validation("rejected in execute")),
                Fail::Panic => panic!("exploded"),
                _ => Ok(json!({ "args": args })),
            }
        }

        fn exclusions(&self) -> Vec<String> {
            vec!["secret".to_string()]
        }

        fn post_execute(&mut self) {
            self.record("post_execute");
            if matches!(self.fail, Fail::PostPanic) {
                panic!("post hook failed");
            }
        }

        fn on_error(&mut self) {
            self.record("on_error");
        }
    }

    fn ctx() -> RequestContext {
        let mut arguments = ArgVec::new();
        arguments.push("view".to_string());
        RequestContext {
            request_id: RequestId::new(),
            method: "GET".into(),
            raw_path: "/app/view".into(),
            base_path: "/app".into(),
            arguments,
            parameters: ParameterMap::new(),
        }
    }

    fn registry(fail: Fail) -> (ActionRegistry, Calls) {
        let calls: Calls = Arc::default();
        let mut registry = ActionRegistry::new();
        let shared = Arc::clone(&calls);
        registry.register("Scripted", move |_ctx| {
            Ok(Box::new(Scripted {
                calls: Arc::clone(&shared),
                fail,
            }) as Box<dyn Action>)
        });
        (registry, calls)
    }

    fn steps(calls: &Calls) -> Vec<&'static str> {
        calls.lock().unwrap().clone()
    }

    #[test]
    fn test_success_order() {
        let (reg, calls) = registry(Fail::Never);
        let (env, completed) = run(&reg, "Scripted", &ctx(), &["*.class".to_string()]).unwrap();
        assert_eq!(env.payload, json!({ "args": ["view"] }));
        assert_eq!(env.exclusions, vec!["*.class", "secret"]);
        assert_eq!(steps(&calls), vec!["pre_execute", "validate", "execute"]);

        completed.finish().unwrap();
        assert_eq!(steps(&calls), vec!["pre_execute", "validate", "execute", "post_execute"]);
    }

    #[test]
    fn test_abort_calls_on_error_instead_of_post_execute() {
        let (reg, calls) = registry(Fail::Never);
        let (_env, completed) = run(&reg, "Scripted", &ctx(), &[]).unwrap();
        completed.abort(&DispatchError::Application("serializer failed".into()));
        assert_eq!(steps(&calls), vec!["pre_execute", "validate", "execute", "on_error"]);
    }

    #[test]
    fn test_post_execute_panic_reports_error_and_notifies() {
        let (reg, calls) = registry(Fail::PostPanic);
        let (_env, completed) = run(&reg, "Scripted", &ctx(), &[]).unwrap();
        let err = completed.finish().unwrap_err();
        assert_eq!(err, DispatchError::Application("post hook failed".into()));
        assert_eq!(
            steps(&calls),
            vec!["pre_execute", "validate", "execute", "post_execute", "on_error"]
        );
    }

    #[test]
    fn test_validation_failure_skips_execute() {
        let (reg, calls) = registry(Fail::Validate);
        let err = run(&reg, "Scripted", &ctx(), &[]).unwrap_err();
        assert_eq!(err, DispatchError::Validation("bad input".into()));
        assert_eq!(steps(&calls), vec!["pre_execute", "validate", "on_error"]);
    }

    #[test]
    fn test_execute_failure_becomes_application_error() {
        let (reg, calls) = registry(Fail::Execute);
        let err = run(&reg, "Scripted", &ctx(), &[]).unwrap_err();
        assert_eq!(err, DispatchError::Application("rejected in execute".into()));
        assert_eq!(
            steps(&calls),
            vec!["pre_execute", "validate", "execute", "on_error"]
        );
    }

    #[test]
    fn test_panic_is_captured_with_message() {
        let (reg, calls) = registry(Fail::Panic);
        let err = run(&reg, "Scripted", &ctx(), &[]).unwrap_err();
        assert_eq!(err, DispatchError::Application("exploded".into()));
        assert!(!steps(&calls).contains(&"post_execute"));
        assert_eq!(steps(&calls).last(), Some(&"on_error"));
    }

    #[test]
    fn test_unknown_handler_has_no_instance_to_notify() {
        let (reg, calls) = registry(Fail::Never);
        let err = run(&reg, "Missing", &ctx(), &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No action registered for handler: 'Missing'"
        );
        assert!(steps(&calls).is_empty());
    }

    #[test]
    fn test_factory_failure_is_application_error() {
        let mut reg = ActionRegistry::new();
        reg.register("Broken", |_ctx| Err(ActionError::application("no database")));
        let err = run(&reg, "Broken", &ctx(), &[]).unwrap_err();
        assert_eq!(err, DispatchError::Application("no database".into()));
    }
}
