use anyhow::Result;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::info;

use crate::config::Config;
use crate::refresher::ReferenceDataRefresher;

/// Starts the recurring reference data refresh.
///
/// Each tick runs one full refresh cycle. A failing fetch is absorbed inside
/// the refresher, so a bad day for the provider never stops the schedule or
/// leaks into request handling. The returned scheduler must be kept alive for
/// the jobs to keep firing.
pub async fn start_scheduler(
    config: &Config,
    refresher: Arc<ReferenceDataRefresher>,
) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    let cron_expr = config.refresh_schedule.clone();
    info!("Scheduling reference data refresh (cron: {})", cron_expr);

    let job = Job::new_async(cron_expr.as_str(), move |_uuid, _l| {
        let refresher = Arc::clone(&refresher);

        Box::pin(async move {
            info!("Scheduled reference data refresh triggered");
            refresher.refresh_all().await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;
    info!("Scheduler started");

    Ok(scheduler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceDataStore;

    #[tokio::test]
    async fn test_scheduler_accepts_default_cron_expression() {
        let config = Config {
            mt_api_url: "http://localhost:1".to_string(),
            refresh_schedule: crate::config::DEFAULT_REFRESH_SCHEDULE.to_string(),
            port: 8080,
        };
        let refresher = Arc::new(ReferenceDataRefresher::new(
            reqwest::Client::new(),
            config.mt_api_url.clone(),
            Arc::new(ReferenceDataStore::new()),
        ));

        let scheduler = start_scheduler(&config, refresher).await;
        assert!(scheduler.is_ok());
    }

    #[tokio::test]
    async fn test_scheduler_rejects_invalid_cron_expression() {
        let config = Config {
            mt_api_url: "http://localhost:1".to_string(),
            refresh_schedule: "not a cron".to_string(),
            port: 8080,
        };
        let refresher = Arc::new(ReferenceDataRefresher::new(
            reqwest::Client::new(),
            config.mt_api_url.clone(),
            Arc::new(ReferenceDataStore::new()),
        ));

        let scheduler = start_scheduler(&config, refresher).await;
        assert!(scheduler.is_err());
    }
}
