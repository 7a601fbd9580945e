//! `intake retrieve`

use std::sync::Arc;

use anyhow::bail;

use intake_client::FeedbackBackend;
use intake_controller::{RetrievalController, SearchOutcome, LOAD_FAILURE_MESSAGE};

use crate::output::{self, OutputFormat};

pub async fn handle(
    field: &str,
    value: &str,
    backend: Arc<dyn FeedbackBackend>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let controller = RetrievalController::new(backend);

    match controller.search_for(field, value).await? {
        SearchOutcome::Loaded(records) => {
            output::print_records(&records, format);
            Ok(())
        }
        SearchOutcome::Failed => {
            bail!(controller
                .error_message()
                .unwrap_or_else(|| LOAD_FAILURE_MESSAGE.to_string()))
        }
        SearchOutcome::Superseded | SearchOutcome::Discarded => bail!("Search did not complete"),
    }
}
