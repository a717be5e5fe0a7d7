use std::io::{self, BufRead, Write};

use crate::domain::workflow::{RsvpState, RsvpWorkflow};
use crate::interface_adapters::client::GuestApiClient;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Terminal front-end for the confirmation workflow: takes the invitation
// URL, loads the guest and walks through the companion prompt and submit.
pub async fn run() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let Some(page_url) = std::env::args().nth(1) else {
        eprintln!("uso: rsvp_client <url-de-invitacion>");
        return;
    };

    let base_url =
        std::env::var("SITE_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    tracing::debug!(base_url = %base_url, "site api client configured.");

    let directory = GuestApiClient::new(base_url);
    let mut workflow = RsvpWorkflow::new(directory);
    workflow.on_confirmed(|| println!("¡Gracias! Nos vemos en la boda."));

    workflow.start(&page_url).await;

    if workflow.state() != RsvpState::Unconfirmed {
        if let Some(status) = workflow.status() {
            println!("{status}");
        }
        return;
    }

    if let Some(greeting) = workflow.greeting() {
        println!("{greeting}");
    }

    let max = workflow.allotted_companions();
    if max > 0 {
        print!("Acompañantes que asistirán (0-{max}): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_ok() {
            workflow.edit_companions(line.trim());
        }
    }

    workflow.confirm().await;

    if let Some(status) = workflow.status() {
        println!("{status}");
    }
}
