//! Portfolio Example - Full-screen page with the custom cursor
//!
//! Paints the portfolio page and draws the reactive cursor over it. Hover a
//! link, button or form field and the ring turns indigo; click and it
//! shrinks; switch to another window and it disappears.
//!
//! Run with: cargo run --example portfolio
//!
//! Logs go to `$TMPDIR/folio-cursor.log` (filter with `RUST_LOG`).
//! Set `FOLIO_CURSOR_CONFIG` to a TOML file to restyle the cursor.
//! Press `q`, `Esc` or `Ctrl+C` to quit.

use std::cell::RefCell;
use std::fs::File;
use std::io::stdout;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use spark_signals::effect;
use tracing_subscriber::EnvFilter;

use folio_cursor::state::input::{self, HostEvent};
use folio_cursor::{
    paint_canvas, Canvas, CursorConfig, CustomCursor, HitTester, Indicator, OverlayRenderer, Page,
    Point, Scene, Target, Viewport,
};

fn init_logging() -> folio_cursor::Result<()> {
    let path = std::env::temp_dir().join("folio-cursor.log");
    let file = File::create(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn run(config: CursorConfig, viewport: Viewport) -> folio_cursor::Result<()> {
    let page = Page::portfolio();
    let layout = page.layout(viewport)?;

    let scene = Rc::new(RefCell::new(layout.scene()));
    let canvas = Rc::new(RefCell::new(Canvas::new(viewport)));
    let overlay = Rc::new(RefCell::new(OverlayRenderer::new()));

    layout.paint(&mut canvas.borrow_mut());
    paint_canvas(&mut stdout(), &canvas.borrow())?;

    let hit_scene: Rc<RefCell<Scene>> = scene.clone();
    let hit_tester: Rc<dyn HitTester> =
        Rc::new(move |point: Point| -> Option<Target> { hit_scene.borrow().hit_test(point) });
    let cursor = CustomCursor::mount(hit_tester, viewport);

    // The one render effect: re-runs whenever position or flags change
    let stop = {
        let pointer = cursor.pointer().clone();
        let flags = cursor.interaction_tracker().clone();
        let canvas = canvas.clone();
        let overlay = overlay.clone();
        let config = config.clone();
        effect(move || {
            let indicator = Indicator::derive(pointer.position(), flags.snapshot(), &config);
            let mut out = stdout().lock();
            if let Err(err) = overlay.borrow_mut().render(
                &mut out,
                &canvas.borrow(),
                indicator.as_ref(),
                &config.glyphs,
            ) {
                tracing::warn!(error = %err, "cursor render failed");
            }
        })
    };

    tracing::info!(width = viewport.width, height = viewport.height, "portfolio running");

    loop {
        let Some(event) = input::poll_event(Duration::from_millis(16))? else {
            continue;
        };

        match &event {
            HostEvent::Key(key) if is_quit(key) => break,
            HostEvent::Resize(new_viewport) => {
                // Relayout first so the re-render after routing sees the new page
                let layout = page.layout(*new_viewport)?;
                *scene.borrow_mut() = layout.scene();
                {
                    let mut canvas = canvas.borrow_mut();
                    canvas.resize(*new_viewport);
                    layout.paint(&mut canvas);
                    paint_canvas(&mut stdout(), &canvas)?;
                }
                overlay.borrow_mut().forget();
                tracing::info!(width = new_viewport.width, height = new_viewport.height, "resized");
            }
            _ => {}
        }

        input::route_event(event);
    }

    stop();
    cursor.unmount();
    Ok(())
}

fn main() -> folio_cursor::Result<()> {
    init_logging()?;
    let config = CursorConfig::from_env();

    let (width, height) = terminal::size()?;
    let viewport = Viewport::new(width, height);

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, Hide)?;
    input::enable_capture()?;

    let result = run(config, viewport);

    // Restore the terminal even when the run failed
    let _ = input::disable_capture();
    let _ = execute!(stdout(), Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();

    if let Err(err) = &result {
        tracing::error!(error = %err, "portfolio exited with error");
    }
    result
}
