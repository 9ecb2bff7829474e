//! Organization handlers: departments and teams.

pub mod manage_org;
pub mod queries;

#[cfg(test)]
pub(crate) mod test_support;

pub use manage_org::{
    CreateDepartmentHandler, CreateTeamCommand, CreateTeamHandler, OrgCommandError,
};
pub use queries::{ListDepartmentsHandler, ListTeamsHandler, OrgQueryError};
