use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DepartmentId, TeamId, Timestamp, UserId, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    id: DepartmentId,
    name: String,
    created_at: Timestamp,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: DepartmentId::new(),
            name,
            created_at: Timestamp::now(),
        })
    }

    pub fn reconstitute(id: DepartmentId, name: String, created_at: Timestamp) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }

    pub fn id(&self) -> DepartmentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    department_id: DepartmentId,
    lead_id: Option<UserId>,
    created_at: Timestamp,
}

impl Team {
    pub fn new(
        name: impl Into<String>,
        department_id: DepartmentId,
        lead_id: Option<UserId>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: TeamId::new(),
            name,
            department_id,
            lead_id,
            created_at: Timestamp::now(),
        })
    }

    pub fn reconstitute(
        id: TeamId,
        name: String,
        department_id: DepartmentId,
        lead_id: Option<UserId>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            department_id,
            lead_id,
            created_at,
        }
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department_id(&self) -> DepartmentId {
        self.department_id
    }

    pub fn lead_id(&self) -> Option<UserId> {
        self.lead_id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
