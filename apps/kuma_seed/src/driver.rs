use colored::Colorize;
use kuma_api_client::client::KumaClient;
use kuma_api_client::types::monitor::MonitorDefinition;
use kuma_api_client::types::SubmitOutcome;

/// Tally of a full seeding run.
#[derive(Debug, Default, PartialEq)]
pub struct SeedSummary {
    pub submitted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Submits every configured monitor in order, one request at a time, printing
/// a report block per definition. A failed submission never stops the run.
pub async fn seed_monitors(client: &KumaClient, monitors: &[MonitorDefinition]) -> SeedSummary {
    let mut summary = SeedSummary::default();

    for (i, monitor) in monitors.iter().enumerate() {
        println!("Test {}: Adding '{}'", i + 1, monitor.name);

        let outcome = client.submit(monitor).await;
        summary.submitted += 1;

        match &outcome {
            SubmitOutcome::Accepted {
                message,
                monitor_id,
                ..
            } => {
                summary.succeeded += 1;
                println!("{} {}", "Success:".green(), message);
                if let Some(id) = monitor_id {
                    println!("   Monitor ID: {}", id);
                }
            }
            SubmitOutcome::Rejected { status, body } => {
                summary.failed += 1;
                println!("{} HTTP {}", "Failed:".red(), status.as_u16());
                println!("   Error: {}", body.detail());
            }
            SubmitOutcome::Failed { cause } => {
                summary.failed += 1;
                println!("{} {}", "Failed:".red(), outcome.message());
                println!("   Error: {}", cause);
            }
        }

        println!();
    }

    summary
}
