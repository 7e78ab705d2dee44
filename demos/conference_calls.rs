//! Lists live conferences and mutes every participant in them.
//!
//! Reads credentials from `TWILIO_ACCOUNT_SID` and `TWILIO_AUTH_TOKEN`.
//!
//! Run with: `cargo run --example conference_calls`

use callwire::rest::api::conference::{ConferenceStatus, ReadConferenceOptions};
use callwire::rest::api::participant::{ReadParticipantOptions, UpdateParticipantOptions};
use callwire::retry::{OrPredicate, RetryOnConnectionFailure, RetryOnTooManyRequests};
use callwire::{ClientBuilder, Error, RetryStrategy};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("callwire=debug,conference_calls=info")
        .init();

    let client = ClientBuilder::from_env()
        .timeout(Duration::from_secs(15))
        .retry_strategy(RetryStrategy::ExponentialBackoff {
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(5),
            max_retries: 3,
            jitter: true,
        })
        .retry_predicate(Box::new(OrPredicate::new(vec![
            Box::new(RetryOnConnectionFailure),
            Box::new(RetryOnTooManyRequests),
        ])))
        .build()?;

    let mut conferences = client
        .read(&ReadConferenceOptions::new().status(ConferenceStatus::InProgress).limit(20))
        .await?;

    while let Some(conference) = conferences.next().await? {
        let Some(conference_sid) = conference.sid else {
            continue;
        };
        println!("Conference {} ({:?})", conference_sid, conference.friendly_name);

        let participants = client
            .read(&ReadParticipantOptions::new(&conference_sid).muted(false))
            .await?
            .collect_all()
            .await?;

        for participant in participants {
            let Some(call_sid) = participant.call_sid else {
                continue;
            };
            let updated = client
                .update(&UpdateParticipantOptions::new(&conference_sid, &call_sid).muted(true))
                .await?;
            println!("  muted {} -> {:?}", call_sid, updated.muted);
        }
    }

    println!("Fetched {} page(s) of conferences", conferences.pages_fetched());
    Ok(())
}
