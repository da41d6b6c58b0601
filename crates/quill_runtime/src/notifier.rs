//! Notification surface collaborator.

/// Receives short user-facing strings for each distinct outcome.
///
/// `busy`/`idle` bracket the in-flight request, mirroring a persistent
/// "working" notice that is hidden once the call resolves. Both default to
/// no-ops for surfaces that have no progress affordance.
pub trait Notifier {
    fn notify(&self, message: &str);

    fn busy(&self, _message: &str) {}

    fn idle(&self) {}
}
