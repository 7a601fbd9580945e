//! `intake submit`

use std::sync::Arc;

use anyhow::bail;
use clap::Args;

use intake_client::FeedbackBackend;
use intake_controller::{FormController, SubmitOutcome, STATUS_FAILURE};
use intake_core::{FormField, ValidationResult, Variant};

use crate::output::OutputFormat;
use crate::sink::TerminalSink;

#[derive(Args)]
pub struct SubmitArgs {
    /// Form variant: school or eng
    #[arg(long, default_value = "school")]
    variant: Variant,
    #[arg(long)]
    student_name: Option<String>,
    /// Father's name and profession
    #[arg(long)]
    father_details: Option<String>,
    /// Mother's name and profession
    #[arg(long)]
    mother_details: Option<String>,
    #[arg(long)]
    contact_number: Option<String>,
    #[arg(long)]
    address: Option<String>,
    /// School or college name
    #[arg(long)]
    school_name: Option<String>,
    /// yes or no; omit to leave unset
    #[arg(long)]
    interested_online: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    demo_date: Option<String>,
    #[arg(long)]
    sales_ref_name: Option<String>,
}

impl SubmitArgs {
    /// Fields given on the command line, in form order.
    fn entries(&self) -> Vec<(FormField, &str)> {
        [
            (FormField::StudentName, &self.student_name),
            (FormField::FatherDetails, &self.father_details),
            (FormField::MotherDetails, &self.mother_details),
            (FormField::ContactNumber, &self.contact_number),
            (FormField::Address, &self.address),
            (FormField::SchoolName, &self.school_name),
            (FormField::InterestedOnline, &self.interested_online),
            (FormField::DemoDate, &self.demo_date),
            (FormField::SalesRefName, &self.sales_ref_name),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

pub async fn handle(
    args: SubmitArgs,
    backend: Arc<dyn FeedbackBackend>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let sink = Arc::new(TerminalSink::new(format));
    let controller = FormController::for_variant(args.variant, backend, sink);

    for (field, value) in args.entries() {
        controller.set_field(field, value)?;
    }

    let outcome = controller.submit().await;
    controller.teardown();

    match outcome {
        SubmitOutcome::Succeeded(body) => {
            if let OutputFormat::Json = format {
                format.print(&body);
            }
            Ok(())
        }
        SubmitOutcome::Invalid(errors) => {
            print_errors(&errors, format);
            bail!("{} field(s) need attention", errors.len())
        }
        SubmitOutcome::Failed => bail!(STATUS_FAILURE),
        SubmitOutcome::Busy | SubmitOutcome::Discarded => bail!("Submission did not complete"),
    }
}

fn print_errors(errors: &ValidationResult, format: OutputFormat) {
    match format {
        OutputFormat::Json => format.print(errors),
        OutputFormat::Table => {
            for violation in errors.iter() {
                eprintln!("{}: {}", violation.field.label(), violation.message);
            }
        }
    }
}
