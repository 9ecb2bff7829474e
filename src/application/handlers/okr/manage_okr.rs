//! OKR write handlers: create, update progress, archive.

use std::sync::Arc;

use crate::application::Caller;
use crate::domain::authorization::{authorize, Action, Resource};
use crate::domain::foundation::{DomainError, OkrId, UserId};
use crate::domain::okr::{KeyResult, Okr, OkrType, ProgressSnapshot, ProgressUpdate};
use crate::ports::OkrRepository;

#[derive(Debug, thiserror::Error)]
pub enum OkrCommandError {
    #[error("OKR not found: {0}")]
    NotFound(OkrId),
    #[error("not permitted to modify this OKR")]
    NotOwner,
    #[error("{0}")]
    Validation(#[from] crate::domain::foundation::ValidationError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone)]
pub struct CreateOkrCommand {
    pub objective: String,
    pub okr_type: OkrType,
    pub parent_okr_id: Option<OkrId>,
    pub assigned_to: UserId,
    pub key_results: Vec<KeyResult>,
}

pub struct CreateOkrHandler {
    okrs: Arc<dyn OkrRepository>,
}

impl CreateOkrHandler {
    pub fn new(okrs: Arc<dyn OkrRepository>) -> Self {
        Self { okrs }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        cmd: CreateOkrCommand,
    ) -> Result<Okr, OkrCommandError> {
        // Company-level objectives carry a stricter policy than the rest.
        let resource = match cmd.okr_type {
            OkrType::Company => Resource::CompanyOkr,
            _ => Resource::Okr,
        };
        authorize(caller.role, resource, Action::Create)?;
        if matches!(cmd.okr_type, OkrType::Department | OkrType::Team)
            && !caller.role.is_managerial()
        {
            return Err(OkrCommandError::Domain(DomainError::new(
                crate::domain::foundation::ErrorCode::Forbidden,
                "department and team OKRs require a managerial role",
            )));
        }

        let okr = Okr::new(
            cmd.objective,
            cmd.okr_type,
            cmd.parent_okr_id,
            cmd.assigned_to,
            caller.user_id,
            cmd.key_results,
        )?;
        self.okrs.save(&okr).await?;
        tracing::info!(okr_id = %okr.id(), okr_type = %okr.okr_type(), "OKR created");
        Ok(okr)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UpdateProgressCommand {
    pub okr_id: OkrId,
    pub update: ProgressUpdate,
}

pub struct UpdateProgressHandler {
    okrs: Arc<dyn OkrRepository>,
}

impl UpdateProgressHandler {
    pub fn new(okrs: Arc<dyn OkrRepository>) -> Self {
        Self { okrs }
    }

    pub async fn handle(
        &self,
        caller: Caller,
        cmd: UpdateProgressCommand,
    ) -> Result<(Okr, ProgressSnapshot), OkrCommandError> {
        authorize(caller.role, Resource::Okr, Action::Update)?;

        let mut okr = self
            .okrs
            .find_by_id(cmd.okr_id)
            .await?
            .ok_or(OkrCommandError::NotFound(cmd.okr_id))?;
        if okr.assigned_to() != caller.user_id
            && okr.created_by() != caller.user_id
            && !caller.is_hr_or_admin()
        {
            return Err(OkrCommandError::NotOwner);
        }

        let snapshot = okr.update_progress(cmd.update, caller.user_id)?;
        self.okrs.update(&okr).await?;
        Ok((okr, snapshot))
    }
}

pub struct ArchiveOkrHandler {
    okrs: Arc<dyn OkrRepository>,
}

impl ArchiveOkrHandler {
    pub fn new(okrs: Arc<dyn OkrRepository>) -> Self {
        Self { okrs }
    }

    pub async fn handle(&self, caller: Caller, okr_id: OkrId) -> Result<Okr, OkrCommandError> {
        let mut okr = self
            .okrs
            .find_by_id(okr_id)
            .await?
            .ok_or(OkrCommandError::NotFound(okr_id))?;

        let resource = match okr.okr_type() {
            OkrType::Company => Resource::CompanyOkr,
            _ => Resource::Okr,
        };
        authorize(caller.role, resource, Action::Delete)?;

        okr.archive();
        self.okrs.update(&okr).await?;
        tracing::info!(okr_id = %okr_id, "OKR archived");
        Ok(okr)
    }
}
