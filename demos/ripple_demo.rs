//! Plays one click on an animated button and logs every frame.
//!
//! Run with `RUST_LOG=debug cargo run --example ripple_demo`.

use std::time::Duration;

use ripple_button::prelude::*;

fn describe(frame: &PaintContext) -> String {
    frame
        .commands()
        .iter()
        .map(|cmd| match cmd {
            DrawCommand::Clear { .. } => "clear".to_string(),
            DrawCommand::Rect { color, .. } => format!("rect(a={:.2})", color.a),
            DrawCommand::Circle { center, radius, .. } => {
                format!("circle({:.0},{:.0} r={:.1})", center.0, center.1, radius)
            }
            DrawCommand::Text { text, .. } => format!("text({text:?})"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> ripple_button::Result<()> {
    env_logger::init();

    let button = animated_button("Click me")
        .width(160.0)
        .height(40.0)
        .background(Color::from_hex(0x1E88E5))
        .ripple_fps(30);
    let mut app = App::new(button)?;

    let script = [
        Event::MouseEnter { x: 60.0, y: 20.0 },
        Event::MouseDown {
            x: 60.0,
            y: 20.0,
            button: MouseButton::Left,
        },
        Event::MouseUp {
            x: 60.0,
            y: 20.0,
            button: MouseButton::Left,
        },
    ];
    for event in &script {
        app.dispatch_event(event)?;
        if let Some(redraw) = app.take_redraw() {
            log::info!("{event:?}: {}", describe(&redraw.frame));
        }
    }

    let mut frame_no = 0;
    while app.is_animating() {
        app.pump(Some(Duration::from_millis(100)))?;
        if let Some(redraw) = app.take_redraw() {
            frame_no += 1;
            log::info!("frame {frame_no}: {}", describe(&redraw.frame));
        }
    }

    app.dispatch_event(&Event::MouseLeave)?;
    log::info!("done after {frame_no} frames");
    Ok(())
}
