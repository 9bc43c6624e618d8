// pixelscreen - Main entry point
//
// Demo binary: opens a window from pixelscreen.toml (written with defaults
// on first run), shows the built-in test patterns, and logs normalized
// events until the window is closed.

use log::{debug, info};
use pixelscreen::display::{DisplayConfig, DisplayWindow, FrameBuffer};
use pixelscreen::input::DisplayEvent;
use std::time::Duration;

const CONFIG_FILE: &str = "pixelscreen.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = DisplayConfig::load_or_default(CONFIG_FILE);
    info!(
        "starting {}x{} display (scale {}x{})",
        config.width, config.height, config.x_scale, config.y_scale
    );

    let mut window = DisplayWindow::open(config.clone())?;

    let mut frame = FrameBuffer::new(config.width, config.height);
    frame.test_pattern();
    let mut show_gradient = false;

    'running: loop {
        while let Some(event) = window.poll_event() {
            match event {
                DisplayEvent::Quit => break 'running,
                DisplayEvent::KeyDown { ref key, .. } if key == "Escape" => break 'running,
                DisplayEvent::KeyDown { ref key, .. } if key == "Space" => {
                    // Space toggles between the two demo patterns.
                    show_gradient = !show_gradient;
                    if show_gradient {
                        frame.gradient_pattern();
                    } else {
                        frame.test_pattern();
                    }
                }
                other => debug!("event: {:?}", other),
            }
        }

        window.show(frame.as_bytes())?;

        // Vsync paces the loop when enabled; otherwise do not spin.
        std::thread::sleep(Duration::from_millis(1));
    }

    window.close();
    info!("display closed");
    Ok(())
}
