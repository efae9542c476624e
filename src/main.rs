use anyhow::{bail, Context};
use nexzap_careers::{
    config::{get_config, init_config},
    dto::application_dto::ApplicationFields,
    i18n::{check_consistency, Translator},
    models::resume::ResumeFile,
    services::job_catalog::{job_positions, mailto_link},
    ApplicationForm, ApplicationSubmitter, SubmitOutcome,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    init_config()?;
    let config = get_config()?;

    let report = check_consistency();
    for (language, keys) in report.missing() {
        for key in keys {
            warn!(%language, key, "Translation key missing");
        }
    }

    let translator = Translator::new(config.default_language);
    info!(language = %translator.language(), "Translator ready");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => print_catalog(&translator, &config.careers_email),
        [application, resume] => submit(&translator, application, resume).await,
        _ => bail!("usage: nexzap-careers [<application.json> <resume-file>]"),
    }
}

fn print_catalog(t: &Translator, careers_email: &str) -> anyhow::Result<()> {
    println!("{}", t.resolve("job.openPositions"));
    for job in job_positions() {
        println!();
        println!("{} ({} · {})", job.title, job.department, job.location_type);
        println!("{}", job.description);
        for (heading, items) in [
            ("job.requirements", job.requirements),
            ("job.responsibilities", job.responsibilities),
            ("job.benefits", job.benefits),
        ] {
            println!("  {}:", t.resolve(heading));
            for item in items {
                println!("    - {}", item);
            }
        }
        println!("  {}: {}", t.resolve("job.apply"), mailto_link(job, careers_email)?);
    }
    Ok(())
}

async fn submit(t: &Translator, application: &str, resume: &str) -> anyhow::Result<()> {
    let raw = tokio::fs::read_to_string(application)
        .await
        .with_context(|| format!("reading {}", application))?;
    let fields = ApplicationFields::from_json(&raw)?;
    let resume = ResumeFile::from_path(resume).await?;

    let config = get_config()?;
    let mut form = ApplicationForm::new(ApplicationSubmitter::from_config(config));
    form.set_fields(fields);
    if let Err(err) = form.attach_resume(resume) {
        eprintln!("{}", t.resolve(err.message_key()));
    }

    println!("{}", t.resolve("form.submitting"));
    let outcome = form.submit().await;
    if let Some(notice) = form.notice() {
        println!("{}", t.resolve(notice.message_key()));
    }

    match outcome {
        SubmitOutcome::Succeeded => Ok(()),
        SubmitOutcome::Invalid(errors) => {
            for key in errors.message_keys() {
                eprintln!("  - {}", t.resolve(key));
            }
            bail!("application is invalid")
        }
        SubmitOutcome::Failed { reason } => bail!("submission failed: {}", reason),
    }
}
