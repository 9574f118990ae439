use provenance_core::Identity;

#[derive(Debug, Clone)]
pub enum SessionEvent {
    // Bootstrap
    BootstrapSettled { identity: Option<Identity> },
    BootstrapFailed { message: String },

    // Explicit auth actions
    SignedIn(Identity),
    SignedOut,
}
