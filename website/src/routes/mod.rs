mod index;
pub use index::Index;
mod services;
pub use services::{SERVICE_NOT_FOUND, ServiceDetail, ServicesIndex};
mod career;
pub use career::Career;
pub(crate) mod about;
pub use about::About;
mod contact;
pub use contact::Contact;
mod join_us;
pub use join_us::JoinUs;

mod investor_relations;
pub use investor_relations::InvestorRelations;
mod sustainability;
pub use sustainability::Sustainability;
mod newsroom;
pub use newsroom::Newsroom;

#[path = "404.rs"]
mod not_found;
pub use not_found::NotFound;
