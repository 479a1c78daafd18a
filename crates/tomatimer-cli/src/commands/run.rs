use clap::Args;
use tomatimer_core::{Config, Mode, TimerEngine};

use crate::sound::TerminalCuePlayer;
use crate::ui::{self, App};

#[derive(Args, Default)]
pub struct RunArgs {
    /// Mode to open in (focus, short-break, long-break)
    #[arg(long)]
    pub mode: Option<Mode>,
    /// Play no cues at all
    #[arg(long)]
    pub mute: bool,
    /// Skip the desktop notification when a countdown ends
    #[arg(long)]
    pub no_notify: bool,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let player = TerminalCuePlayer::from_config(&config, args.mute, args.no_notify);

    let mut engine = TimerEngine::new();
    if let Some(mode) = args.mode {
        engine.select_mode(mode);
    }

    tracing::info!(mode = engine.mode().id(), "starting interactive timer");
    let mut app = App::new(engine, player);
    ui::run(&mut app, &config.ui)?;
    Ok(())
}
