use tracing::warn;

use super::includer::FileIncluder;
use super::script::ScriptLoader;
use super::target::IncludeTarget;
use crate::utils::SelkieError;

/// The hosting application's event-registration facility.
///
/// Implemented by the host; selkie only defers work onto it. Hook name,
/// priority and argument count are passed through verbatim.
pub trait HookHost {
    fn add_action(
        &mut self,
        hook: &str,
        priority: i32,
        arg_count: usize,
        action: Box<dyn FnOnce() + Send>,
    );
}

/// Defer an include call until `hook` fires on the host.
///
/// The includer is moved into the deferred action. A failure at fire time is
/// reported through `on_error` when supplied and logged either way; it never
/// propagates into the host's event loop.
#[allow(clippy::too_many_arguments)]
pub fn include_on_hook<L, H>(
    host: &mut H,
    hook: &str,
    priority: i32,
    arg_count: usize,
    mut includer: FileIncluder<L>,
    target: IncludeTarget,
    recursive: bool,
    on_error: Option<Box<dyn Fn(&SelkieError) + Send>>,
) where
    L: ScriptLoader + 'static,
    H: HookHost + ?Sized,
{
    host.add_action(
        hook,
        priority,
        arg_count,
        Box::new(move || {
            if let Err(err) = includer.include(target, recursive) {
                warn!("deferred include failed: {err}");
                if let Some(handler) = &on_error {
                    handler(&err);
                }
            }
        }),
    );
}
