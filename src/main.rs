use std::io::Read;
use std::sync::Arc;

use ontbijtactie::config::ActionConfig;
use ontbijtactie::event::FormEvent;
use ontbijtactie::mailer::{SmtpConfig, SmtpMailer};
use ontbijtactie::processor::{Outcome, ReservationProcessor};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let smtp_config = SmtpConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("  export SMTP_HOST=smtp.example.com");
        std::process::exit(1);
    });

    // One event per invocation: the trigger payload arrives as JSON on stdin.
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let event: FormEvent = serde_json::from_str(&input)?;

    let processor = ReservationProcessor::new(
        ActionConfig::default(),
        Arc::new(SmtpMailer::new(smtp_config)),
    );

    match processor.process(&event)?.outcome {
        Outcome::Sent { to, total } => {
            eprintln!("Confirmation sent to {to} (total: {total} euro)");
        }
        Outcome::Empty => {
            eprintln!("No orders in registration, nothing sent");
        }
    }

    Ok(())
}
