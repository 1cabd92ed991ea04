use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use ratatui::layout::Rect;

use crate::config::Config;
use crate::controller;
use crate::service::{HttpPackService, PackService};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::layout::body_rect;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const CONTROLLER_STOP_TIMEOUT: Duration = Duration::from_secs(1);

pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let service: Arc<dyn PackService> =
        Arc::new(HttpPackService::new(&config.service).context("Failed to build HTTP client")?);

    let (handle, mut controller_events, controller_task) = {
        let _enter = runtime.enter();
        controller::spawn(service, config.reveal, config.packs.default.clone())
    };

    let events = EventHandler::new(config.ui.tick_rate());
    let forward_tx = events.sender();
    runtime.spawn(async move {
        while let Some(event) = controller_events.recv().await {
            if forward_tx.send(AppEvent::Controller(event)).is_err() {
                break;
            }
        }
    });

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let mut app = App::new(&config);
    app.attach_controller(handle.clone());

    let mut body = Rect::default();
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        body = body_rect(Rect::new(0, 0, cols, rows));
        app.on_resize(body.width, body.height);
    }

    tracing::info!(
        service = %config.service.base_url,
        pack = %config.packs.default,
        "Pack opener started"
    );

    let tick_rate = config.ui.tick_rate();
    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse, body),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                body = body_rect(Rect::new(0, 0, cols, rows));
                app.on_resize(body.width, body.height);
            }
            Ok(AppEvent::Controller(event)) => app.on_controller_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    handle.shutdown();
    runtime.block_on(async {
        if tokio::time::timeout(CONTROLLER_STOP_TIMEOUT, controller_task)
            .await
            .is_err()
        {
            tracing::warn!("Pack controller did not stop in time");
        }
    });

    drop(events);
    drop(guard);
    runtime.shutdown_timeout(CONTROLLER_STOP_TIMEOUT);
    tracing::info!("Pack opener stopped");
    Ok(())
}
