use bevy::app::{App, Plugin, Update};
use bevy::ecs::event::{Event, EventReader, EventWriter};
use bevy::ecs::schedule::IntoSystemConfigs;
use bevy::ecs::system::{ResMut, Resource};
use bevy::log::debug;

use crate::physics::fallingsand::editor::EditCommand;
use crate::physics::fallingsand::sandbox::{Sandbox, SandboxBuilder};
use crate::physics::fallingsand::util::errors::SandboxError;

/// Runs a sandbox once per frame
/// Send `EditEvent`s to change it, listen for `GridRepainted` to know when to re-upload its colors
pub struct SandboxPlugin {
    sandbox: Sandbox,
}

impl SandboxPlugin {
    /// Builds the sandbox up front so a bad configuration fails here and not inside the app
    pub fn new(builder: SandboxBuilder) -> Result<Self, SandboxError> {
        Ok(Self {
            sandbox: builder.build()?,
        })
    }
}

impl Plugin for SandboxPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SandboxResource(self.sandbox.clone()));
        app.add_event::<EditEvent>();
        app.add_event::<GridRepainted>();
        app.add_systems(
            Update,
            (
                SandboxResource::queue_edits_system,
                SandboxResource::step_system,
            )
                .chain(),
        );
    }
}

/// The one simulation session in the app
#[derive(Resource, Debug)]
pub struct SandboxResource(pub Sandbox);

/// An edit coming from input handling
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct EditEvent(pub EditCommand);

/// Sent after a step that left the grid dirty
/// The dirty flag has already been taken, read the colors from `SandboxResource`
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRepainted {
    pub frame: u32,
}

/// Bevy Systems
impl SandboxResource {
    pub fn queue_edits_system(
        mut sandbox: ResMut<SandboxResource>,
        mut edits: EventReader<EditEvent>,
    ) {
        for edit in edits.read() {
            sandbox.0.submit(edit.0);
        }
    }

    pub fn step_system(
        mut sandbox: ResMut<SandboxResource>,
        mut repainted: EventWriter<GridRepainted>,
    ) {
        let report = sandbox.0.step();
        if report.edits_applied > 0 {
            debug!("applied {} edits on frame {}", report.edits_applied, report.frame);
        }
        if sandbox.0.grid_mut().take_dirty() {
            repainted.send(GridRepainted {
                frame: report.frame,
            });
        }
    }
}
