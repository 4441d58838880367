//! Per-resource entities, response wrappers and accessors.
//!
//! Each accessor is generic over a `Backend`, so the same methods drive the
//! production HTTP path and any test double that implements `Backend`.

pub mod actions;
pub mod billing;
pub mod isos;
pub mod locations;
pub mod placement_groups;
pub mod server_types;
pub mod ssh_keys;

pub use actions::Actions;
pub use billing::Billing;
pub use isos::Isos;
pub use locations::Locations;
pub use placement_groups::PlacementGroups;
pub use server_types::ServerTypes;
pub use ssh_keys::SshKeys;
