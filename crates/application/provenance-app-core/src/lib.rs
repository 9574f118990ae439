pub mod context;
pub mod detail;
mod gateway;
pub mod list_view;
pub mod location;
pub mod ports;
pub mod session;

pub use context::ArchiveContext;
pub use detail::DetailView;
pub use list_view::{
    ArtworkList, ListCommand, ListEvent, ListSource, ListState, ListViewKernel, PersonList,
};
pub use location::{LocationPort, MemoryLocation};
pub use ports::*;
pub use session::{Access, BootState, Session, SessionEvent, SessionService, SessionStore};
