pub mod account;
pub mod challenges;
pub mod champion;
pub mod clash;
pub mod client;
pub mod league;
pub mod match_v5;
pub mod metrics;
pub mod spectator;
pub mod status;
pub mod summoner;
pub mod tournament;
