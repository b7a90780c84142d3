pub mod use_deposit_poller;
