mod script;

use anyhow::Context;
use sheetpose_animation::SheetAnimation;
use sheetpose_core::{Binding, MutableState};
use sheetpose_foundation::{Position, ScreenMetrics, TapTarget};
use sheetpose_ui::{ModalSheet, ScrimTap, SheetConfig, SheetEvent};
use sheetpose_ui_graphics::Point;

use script::{Player, Snapshot, Step};

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Sheetpose Modal Sheet Demo ===");
    println!("Replays scripted gestures against a headless sheet on a 390x844 screen.");
    println!();

    standard_session()?;
    dismissable_session()?;
    bound_session()?;
    Ok(())
}

fn standard_session() -> anyhow::Result<()> {
    let sheet = ModalSheet::new(SheetConfig::standard(), ScreenMetrics::default())
        .context("building standard sheet")?;
    let _subscription = sheet.subscribe(|event| match event {
        SheetEvent::OffsetChanged(_) => {}
        other => log::info!("standard sheet: {:?}", other),
    });

    let mut player = Player::new(sheet);
    print_session(
        "standard",
        &player.run(&[
            Step::Appear,
            Step::Drag { distance: 380.0 },
            Step::Drag { distance: 280.0 },
            Step::Fling {
                distance: -60.0,
                velocity: -3_000.0,
            },
            Step::TapAt(Point::new(195.0, 20.0)),
            Step::Tap(TapTarget::Handle),
        ]),
    );
    Ok(())
}

fn dismissable_session() -> anyhow::Result<()> {
    let config = SheetConfig::dismissable()
        .animation(SheetAnimation::Bounce)
        .scrim_tap(ScrimTap::Collapse);
    let sheet = ModalSheet::new(config, ScreenMetrics::default())
        .context("building dismissable sheet")?;

    let mut player = Player::new(sheet);
    print_session(
        "dismissable",
        &player.run(&[
            Step::Appear,
            Step::Tap(TapTarget::Scrim),
            Step::Fling {
                distance: 20.0,
                velocity: 400.0,
            },
            Step::Fling {
                distance: 40.0,
                velocity: 4_000.0,
            },
        ]),
    );
    Ok(())
}

fn bound_session() -> anyhow::Result<()> {
    let host = MutableState::new(Position::Middle);
    let _host_log = host.subscribe(|position| log::info!("host position is now {:?}", position));

    let sheet = ModalSheet::with_binding(
        SheetConfig::low().animation(SheetAnimation::Quick),
        ScreenMetrics::default(),
        Binding::from_state(&host),
    )
    .context("building bound sheet")?;

    let mut player = Player::new(sheet);
    print_session(
        "bound",
        &player.run(&[
            Step::Appear,
            Step::Drag { distance: 200.0 },
            Step::SetPosition(Position::Middle),
        ]),
    );
    println!("host ended at {:?}", host.get());
    Ok(())
}

fn print_session(name: &str, snapshots: &[Snapshot]) {
    println!("--- {name} ---");
    for snapshot in snapshots {
        println!(
            "{:<48} -> {:<14} offset {:>6.1}  open {:>5.1}%  frames {:>3}  primitives {}",
            format!("{:?}", snapshot.step),
            format!("{:?}", snapshot.position),
            snapshot.offset,
            snapshot.percentage * 100.0,
            snapshot.frames,
            snapshot.primitives,
        );
    }
    println!();
}
