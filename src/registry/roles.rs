use chrono::NaiveDate;

use crate::domain::models::{Role, Worker};
use crate::errors::{ClubError, ClubResult};

/// Staff directory: roles in registration order, each owning its workers.
///
/// A worker belongs to exactly one role; re-registering a worker with a
/// different role moves them.
#[derive(Debug, Clone, Default)]
pub struct RoleDirectory {
    roles: Vec<Role>,
}

impl RoleDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a role, or update the description of an existing one
    pub fn add_role(&mut self, role_id: &str, description: &str) {
        match self.roles.iter_mut().find(|r| r.role_id == role_id) {
            Some(role) => role.description = description.to_string(),
            None => self.roles.push(Role::new(role_id, description)),
        }
    }

    pub fn get_role(&self, role_id: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.role_id == role_id)
    }

    /// Register a worker under `role_id`, updating or moving an existing
    /// record for the same dni
    pub fn add_worker(
        &mut self,
        dni: &str,
        name: &str,
        surname: &str,
        birthday: NaiveDate,
        role_id: &str,
    ) -> ClubResult<()> {
        if self.get_role(role_id).is_none() {
            return Err(ClubError::RoleNotFound);
        }
        let worker = Worker::new(dni, name, surname, birthday, role_id);

        match self.get_worker(dni).cloned() {
            None => {}
            Some(old) if old.role_id == role_id => {
                self.role_mut(role_id).replace_worker(worker);
                return Ok(());
            }
            Some(old) => {
                self.role_mut(&old.role_id).remove_worker(dni);
            }
        }
        self.role_mut(role_id).add_worker(worker);
        Ok(())
    }

    pub fn get_worker(&self, dni: &str) -> Option<&Worker> {
        self.roles.iter().find_map(|r| r.worker_by_dni(dni))
    }

    pub fn workers_by_role(&self, role_id: &str) -> ClubResult<&[Worker]> {
        let role = self.get_role(role_id).ok_or(ClubError::RoleNotFound)?;
        if role.num_workers() == 0 {
            return Err(ClubError::NoWorkers);
        }
        Ok(role.workers())
    }

    pub fn num_roles(&self) -> usize {
        self.roles.len()
    }

    pub fn num_workers(&self) -> usize {
        self.roles.iter().map(|r| r.num_workers()).sum()
    }

    pub fn num_workers_by_role(&self, role_id: &str) -> usize {
        self.get_role(role_id).map_or(0, |r| r.num_workers())
    }

    fn role_mut(&mut self, role_id: &str) -> &mut Role {
        self.roles
            .iter_mut()
            .find(|r| r.role_id == role_id)
            .expect("role existence checked before mutation")
    }
}
