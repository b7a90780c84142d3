//! The polling task that owns all deposit fetching.

use std::time::Duration;

use dioxus::prelude::*;

use crate::compat;
use crate::feed::DepositFeed;
use crate::feed::FetchLedger;

/// Fixed poll spacing; the first fetch goes out without delay.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Starts polling the backend for deposits and returns the feed the screens
/// read from.
///
/// Fetches are issued on a fixed cadence and never awaited in-line, so a
/// slow response cannot delay the next poll. Each fetch carries a sequence
/// number from the feed's [`FetchLedger`]; a completion is applied only if
/// nothing issued later has been applied already, which keeps a straggling
/// response from overwriting newer data. The coroutine is cancelled with the
/// component; in-flight requests are left to resolve and get discarded.
pub fn use_deposit_poller() -> DepositFeed {
    let feed = DepositFeed {
        deposits: use_signal(Vec::new),
        is_loading: use_signal(|| true),
        error: use_signal(|| None),
        ledger: use_signal(FetchLedger::default),
    };

    use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        loop {
            issue_fetch(feed);
            compat::sleep(POLL_INTERVAL).await;
        }
    });

    feed
}

fn issue_fetch(mut feed: DepositFeed) {
    let seq = feed.ledger.write().begin();
    feed.is_loading.set(true);

    spawn(async move {
        let result = api::successful_deposits().await;
        feed.is_loading.set(false);

        if !feed.ledger.write().try_apply(seq) {
            dioxus_logger::tracing::debug!("discarding stale deposit response, seq {seq}");
            return;
        }

        match result {
            Ok(deposits) => feed.deposits.set(deposits),
            Err(e) => {
                dioxus_logger::tracing::warn!("deposit fetch failed: {e}");
                // Terminal for the session: the error screen takes over and
                // later poll results are never rendered.
                feed.error.set(Some(e.to_string()));
            }
        }
    });
}
