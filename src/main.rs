mod logging;

use crossterm::event;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;
use stepper::settings::{self, StepperSettings};
use stepper::tui::event::HostEvent;
use stepper::tui::terminal_guard::{TerminalGuard, TerminationSignal};
use stepper::ui::backend::terminal::RatatuiTerminal;
use stepper::ui::core::geom::{Pos, Rect};
use stepper::ui::core::painter::Painter;
use stepper::ui::core::style::{Mod, Style};
use stepper::ui::core::tree::UiTree;
use stepper::ui::core::widget::Ui;
use stepper::ui::widgets::stepper::centered_in;
use stepper::{Stepper, StepperConfig};

const HINT: &str = "+/- or click to step, q to quit";

fn main() -> io::Result<()> {
    let mut logging = logging::init();
    let log_rx = logging.as_mut().and_then(|guard| guard.take_log_rx());

    let settings = load_settings(std::env::args_os().nth(1).map(PathBuf::from));
    let config = settings.to_config().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid settings, using default appearance");
        StepperConfig::default()
    });

    let mut stepper = Stepper::with_counter(0, config, settings.counter());
    stepper.on_value_changed(|commit| {
        tracing::info!(
            previous = commit.previous,
            value = commit.value,
            step = ?commit.step,
            "value changed"
        );
    });

    let guard = TerminalGuard::new()?;
    let (sig_tx, sig_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    stepper::tui::terminal_guard::install_termination_signals(guard.restorer(), sig_tx)?;
    #[cfg(not(unix))]
    drop(sig_tx);

    let mut terminal = RatatuiTerminal::new(io::stdout())?;
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    let mut status = String::new();

    loop {
        if let Ok(signal) = sig_rx.try_recv() {
            tracing::info!(?signal, "termination signal");
            break;
        }
        if let Some(rx) = &log_rx {
            while let Ok(line) = rx.try_recv() {
                status = line;
            }
        }

        terminal.draw(|backend, area| {
            painter.clear();
            tree.clear();

            let footer_h = area.h.min(1);
            let body = Rect::new(area.x, area.y, area.w, area.h - footer_h);
            let footer = Rect::new(area.x, body.bottom(), area.w, footer_h);

            let mut ui = Ui::new(area, &mut painter, &mut tree);
            ui.add(centered_in(body, stepper.intrinsic_size()), &mut stepper);

            let footer_text = if status.is_empty() {
                HINT.to_string()
            } else {
                format!("{HINT} | {status}")
            };
            ui.painter.text_clipped(
                Pos::new(footer.x, footer.y),
                footer_text,
                Style::default().add_mod(Mod::DIM),
                footer,
            );

            backend.draw(area, painter.cmds());
        })?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match HostEvent::from_crossterm(event::read()?) {
            Some(HostEvent::Quit) => break,
            Some(HostEvent::Key(key)) => {
                stepper.handle_key(key);
            }
            Some(HostEvent::Click(pos)) => {
                stepper.handle_click(&tree, pos);
            }
            Some(HostEvent::Resize(..)) | None => {}
        }
    }

    drop(guard);
    tracing::info!(value = stepper.value(), "stepper exited");
    if let Some(guard) = &logging {
        tracing::debug!(log_dir = %guard.log_dir().display(), "log files");
    }
    Ok(())
}

fn load_settings(path: Option<PathBuf>) -> StepperSettings {
    let path = match path {
        Some(path) => path,
        None => match settings::ensure_settings_file() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(error = %e, "ensure_settings_file failed");
                return StepperSettings::default();
            }
        },
    };

    match settings::load_settings(&path) {
        Ok(loaded) => {
            tracing::info!(path = %path.display(), "settings loaded");
            loaded
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "load settings failed");
            StepperSettings::default()
        }
    }
}
