pub mod company;
pub mod event;
pub mod lead;
pub mod organiser;
pub mod target_user;

pub use company::{Company, CompanyId};
pub use event::{Event, EventId};
pub use lead::{Lead, LeadId};
pub use organiser::{Organiser, OrganiserId};
pub use target_user::{TargetUser, TargetUserId};
