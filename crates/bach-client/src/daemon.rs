//! Scheduler endpoints under `/api/daemon`.

use bach_core::entities::NewDaemonJob;
use bach_core::responses::{Created, JobList, RunList, Toggled};
use reqwest::Method;

use crate::{BachClient, ClientError, with_query};

impl BachClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn list_jobs(&self) -> Result<JobList, ClientError> {
        self.get_json("/api/daemon/jobs").await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the server rejects the job.
    pub async fn create_job(&self, job: &NewDaemonJob) -> Result<Created, ClientError> {
        self.send_json(Method::POST, "/api/daemon/jobs", Some(job))
            .await
    }

    /// Flip a job between active and paused.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the job does not exist.
    pub async fn toggle_job(&self, id: i64) -> Result<Toggled, ClientError> {
        self.send_json::<(), _>(Method::PUT, &format!("/api/daemon/jobs/{id}/toggle"), None)
            .await
    }

    /// Recent runs, optionally limited to one job.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn list_runs(&self, job_id: Option<i64>) -> Result<RunList, ClientError> {
        let job_id = job_id.map(|id| id.to_string());
        self.get_json(&with_query("/api/daemon/runs", &[("job_id", job_id.as_deref())]))
            .await
    }
}

#[cfg(test)]
mod tests {
    use bach_core::responses::{JobList, RunList, Toggled};

    #[test]
    fn parse_job_list_fixture() {
        let list: JobList = serde_json::from_str(
            r#"{"success": true, "jobs": [{"id": 1, "name": "backup", "job_type": "interval", "schedule": "1h", "is_active": 1}], "count": 1}"#,
        )
        .unwrap();
        assert!(list.jobs[0].is_active);
        assert_eq!(list.jobs[0].schedule.as_deref(), Some("1h"));
    }

    #[test]
    fn parse_runs_and_toggle() {
        let runs: RunList = serde_json::from_str(
            r#"{"success": true, "runs": [{"id": 8, "job_id": 1, "status": "success", "job_name": "backup"}], "count": 1}"#,
        )
        .unwrap();
        assert_eq!(runs.runs[0].job_id, Some(1));

        let toggled: Toggled = serde_json::from_str(r#"{"success": true, "is_active": false}"#).unwrap();
        assert!(!toggled.is_active);
    }
}
