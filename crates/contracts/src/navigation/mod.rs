//! Navigation vocabulary shared by the dispatcher, the policy and the UI:
//! roles, pages, the four-level selection scope and the payload/crumb types.

pub mod crumb;
pub mod page;
pub mod payload;
pub mod role;
pub mod scope;

pub use crumb::{Crumb, CrumbLink};
pub use page::Page;
pub use payload::{FilterState, NavigationPayload, ScopeEntity, SlotPatch};
pub use role::Role;
pub use scope::Scope;
