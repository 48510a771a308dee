pub mod api;
pub mod cli;
pub mod coach;
pub mod config;
pub mod domain;
pub mod errors;
pub mod geo;
pub mod http;
pub mod matching;
pub mod services;
pub mod store;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::coach::CoachClient;
use crate::config::settings::AppConfig;
use crate::domain::models::SkillLevel;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_advice(skill: &str, opponent: Option<&str>, context: &str) -> Result<()> {
    let player_skill = SkillLevel::parse(skill)
        .ok_or_else(|| anyhow::anyhow!("Unknown skill level: {skill}"))?;
    let opponent_skill = opponent.and_then(SkillLevel::parse);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let mut coach = CoachClient::new(config.coach)?;
        let tip = coach.advice(player_skill, opponent_skill, context).await;
        println!("{tip}");
        Ok(())
    })
}
