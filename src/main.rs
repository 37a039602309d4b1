use std::time::Duration;

use bevy::app::{App, AppExit, PluginGroup, ScheduleRunnerPlugin, Update};
use bevy::ecs::event::{EventReader, EventWriter};
use bevy::ecs::system::{Local, Res};
use bevy::log::{info, LogPlugin};
use bevy::math::Vec2;
use bevy::MinimalPlugins;
use sandfall::entities::sandbox::{EditEvent, GridRepainted, SandboxPlugin, SandboxResource};
use sandfall::physics::fallingsand::editor::{Brush, EditCommand};
use sandfall::physics::fallingsand::elements::element::MaterialKind;
use sandfall::physics::fallingsand::sandbox::SandboxBuilder;
use sandfall::physics::fallingsand::util::errors::SandboxError;
use sandfall::physics::fallingsand::util::vectors::XyVector;

/// How long to keep pouring before letting everything settle
const POUR_FRAMES: u32 = 90;
/// Give up waiting for the pile to settle after this many frames
const MAX_FRAMES: u32 = 2000;

/// Headless run: pour sand and water into the middle of the grid and log until it settles.
/// A windowed shell would draw `SandboxResource` on every `GridRepainted` instead.
fn main() -> Result<(), SandboxError> {
    let builder = SandboxBuilder::new().viewport(Vec2::new(640.0, 360.0), 4.0);
    let sandbox = SandboxPlugin::new(builder)?;

    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(LogPlugin::default())
        .add_plugins(sandbox)
        .add_systems(Update, (pour_system, report_system))
        .run();
    Ok(())
}

fn pour_system(
    mut frame: Local<u32>,
    sandbox: Res<SandboxResource>,
    mut edits: EventWriter<EditEvent>,
) {
    *frame += 1;
    if *frame > POUR_FRAMES {
        return;
    }
    let grid = sandbox.0.grid();
    let top_center = XyVector::new(grid.width() as isize / 2, 2);
    let kind = if (*frame / 15) % 2 == 0 {
        MaterialKind::Sand
    } else {
        MaterialKind::Water
    };
    edits.send(EditEvent(EditCommand::Select(kind)));
    edits.send(EditEvent(EditCommand::Paint {
        center: top_center,
        brush: Brush::new(2.0),
    }));
}

fn report_system(
    sandbox: Res<SandboxResource>,
    mut repainted: EventReader<GridRepainted>,
    mut exit: EventWriter<AppExit>,
) {
    let repaints = repainted.read().count();
    let frame = sandbox.0.clock().get_current_frame();
    if frame <= POUR_FRAMES || (repaints > 0 && frame < MAX_FRAMES) {
        return;
    }
    let catalog = sandbox.0.catalog();
    for (kind, material) in catalog.all() {
        info!("{}: {} cells", material.get_name(), sandbox.0.grid().count(kind));
    }
    info!("stopped after {} frames, settled: {}", frame, sandbox.0.is_settled());
    exit.send(AppExit);
}
