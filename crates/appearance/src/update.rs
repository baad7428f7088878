use crate::resolved::ResolvedAppearance;
use crate::schema::Appearance;

/// Implemented by every view component that owns appearance-dependent state.
///
/// `defaults` is fully populated by construction, so resolving a property as
/// `appearance.group.field.unwrap_or(defaults.group.field)` always
/// terminates; [`Appearance::resolve`] performs the same merge for every
/// field in one step.
///
/// Implementations must be idempotent — the same arguments twice produce the
/// same visual result — and must not fail.  If a resolved value is
/// semantically out of range for rendering (e.g. negative spacing), clamping
/// is the implementor's responsibility.
pub trait AppearanceUpdateable {
    /// Update the appearance of the component for a new configuration.
    ///
    /// Invoked whenever the distributed configuration changes; performs only
    /// local state/view updates.
    fn update_appearance(&mut self, appearance: &Appearance, defaults: &ResolvedAppearance);
}
