use crate::catalog::SelectedBody;

/// Outbound notifications for external collaborators (info panel,
/// comparison chart). Collected per frame and drained by the bridge;
/// the core never renders these itself.
#[derive(Debug, Clone)]
pub enum ViewerEvent {
    /// A body was selected (or its detail record arrived): full static
    /// record merged with whatever detail is cached.
    BodySelected(SelectedBody),
}
