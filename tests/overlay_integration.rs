//! End-to-end tests driving a [`BubbleOverlay`] through host notifications,
//! update ticks and render passes.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;
use smallvec::smallvec;

use machinebubbles::components::location::Location;
use machinebubbles::components::machine::{CrabPot, MachineProgress};
use machinebubbles::components::placedobject::PlacedObject;
use machinebubbles::components::tileposition::TilePosition;
use machinebubbles::events::host::HostEvent;
use machinebubbles::overlay::BubbleOverlay;
use machinebubbles::resources::bubbleconfig::BubbleConfig;
use machinebubbles::resources::machinecatalog::MachineKind;
use machinebubbles::systems::readiness::ready_machines;
use machinebubbles::systems::render::{BubbleDraw, BubbleSurface};

/// Surface that records every draw instead of touching a GPU.
struct RecordingSurface {
    sheet: bool,
    draws: Vec<BubbleDraw>,
}

impl RecordingSurface {
    fn new() -> Self {
        Self {
            sheet: true,
            draws: Vec::new(),
        }
    }

    fn without_sheet() -> Self {
        Self {
            sheet: false,
            draws: Vec::new(),
        }
    }
}

impl BubbleSurface for RecordingSurface {
    fn world_to_screen(&self, world: Vector2) -> Vector2 {
        world
    }

    fn sheet_available(&self) -> bool {
        self.sheet
    }

    fn draw_sprite(&mut self, draw: &BubbleDraw) {
        self.draws.push(*draw);
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::temp_dir().join("machinebubbles_integration_unused.ini")
}

fn overlay_with(config: BubbleConfig) -> BubbleOverlay {
    BubbleOverlay::new(config)
}

fn overlay() -> BubbleOverlay {
    overlay_with(BubbleConfig::with_path(config_path()))
}

fn place(overlay: &mut BubbleOverlay, scene: &str, id: &str, x: f32, y: f32) -> Entity {
    overlay
        .world_mut()
        .spawn((
            PlacedObject::new(id),
            Location::new(scene),
            TilePosition::new(x, y),
        ))
        .id()
}

fn place_machine(
    overlay: &mut BubbleOverlay,
    scene: &str,
    id: &str,
    x: f32,
    y: f32,
    progress: MachineProgress,
) -> Entity {
    let entity = place(overlay, scene, id, x, y);
    overlay.world_mut().entity_mut(entity).insert(progress);
    entity
}

fn place_pot(overlay: &mut BubbleOverlay, scene: &str, x: f32, y: f32, pot: CrabPot) -> Entity {
    let entity = place(overlay, scene, "(O)710", x, y);
    overlay.world_mut().entity_mut(entity).insert(pot);
    entity
}

fn enter(overlay: &mut BubbleOverlay, scene: &str) {
    let tx = overlay.host_sender();
    tx.send(HostEvent::SaveLoaded).unwrap();
    tx.send(HostEvent::Warped {
        scene: scene.to_string(),
    })
    .unwrap();
    overlay.pump();
}

fn ready_entities(overlay: &mut BubbleOverlay) -> Vec<Entity> {
    ready_machines(overlay.world_mut())
        .iter()
        .map(|m| m.entity)
        .collect()
}

#[test]
fn idle_jar_is_ready_while_kegs_are_disabled() {
    let mut config = BubbleConfig::with_path(config_path());
    config.set_kind_enabled(MachineKind::Keg, false);
    let mut overlay = overlay_with(config);
    let jar = place_machine(&mut overlay, "Farm", "(BC)15", 1.0, 1.0, MachineProgress::new(-5, false));
    let keg = place_machine(&mut overlay, "Farm", "(BC)12", 2.0, 1.0, MachineProgress::idle());
    enter(&mut overlay, "Farm");

    assert!(!overlay.registry().contains(keg));
    assert_eq!(ready_entities(&mut overlay), vec![jar]);
}

#[test]
fn baited_crab_pot_is_not_ready() {
    let mut overlay = overlay();
    place_pot(&mut overlay, "Beach", 1.0, 1.0, CrabPot::empty().with_bait("Worm"));
    enter(&mut overlay, "Beach");

    assert_eq!(overlay.registry().len(), 1);
    assert!(ready_entities(&mut overlay).is_empty());
}

#[test]
fn empty_crab_pot_is_ready() {
    let mut overlay = overlay();
    let pot = place_pot(&mut overlay, "Beach", 1.0, 1.0, CrabPot::empty());
    enter(&mut overlay, "Beach");

    assert_eq!(ready_entities(&mut overlay), vec![pot]);
}

#[test]
fn master_switch_off_keeps_registry_empty_and_draws_nothing() {
    let mut config = BubbleConfig::with_path(config_path());
    config.enabled = false;
    let mut overlay = overlay_with(config);
    place_machine(&mut overlay, "Farm", "(BC)15", 1.0, 1.0, MachineProgress::idle());
    place_pot(&mut overlay, "Farm", 2.0, 1.0, CrabPot::empty());
    enter(&mut overlay, "Farm");

    assert!(overlay.registry().is_empty());
    let mut surface = RecordingSurface::new();
    assert_eq!(overlay.render(&mut surface), 0);
    assert!(surface.draws.is_empty());
}

#[test]
fn object_changes_patch_the_registry_in_order() {
    let mut overlay = overlay();
    let a = place_machine(&mut overlay, "Farm", "(BC)15", 1.0, 1.0, MachineProgress::idle());
    let c = place_machine(&mut overlay, "Farm", "(BC)16", 3.0, 1.0, MachineProgress::idle());
    enter(&mut overlay, "Farm");
    assert_eq!(overlay.registry().len(), 2);

    let b = place_machine(&mut overlay, "Farm", "(BC)17", 2.0, 1.0, MachineProgress::idle());
    overlay.world_mut().despawn(a);
    overlay
        .host_sender()
        .send(HostEvent::ObjectListChanged {
            scene: "Farm".to_string(),
            added: smallvec![b],
            removed: smallvec![a],
        })
        .unwrap();
    overlay.pump();

    let tracked: Vec<Entity> = overlay.registry().machines().iter().map(|m| m.entity).collect();
    assert_eq!(tracked, vec![c, b]);
}

#[test]
fn object_changes_in_other_scenes_are_ignored() {
    let mut overlay = overlay();
    enter(&mut overlay, "Farm");
    let shed_jar = place_machine(&mut overlay, "Shed", "(BC)15", 1.0, 1.0, MachineProgress::idle());
    overlay
        .host_sender()
        .send(HostEvent::ObjectListChanged {
            scene: "Shed".to_string(),
            added: smallvec![shed_jar],
            removed: smallvec![],
        })
        .unwrap();
    overlay.pump();

    assert!(overlay.registry().is_empty());
}

#[test]
fn added_objects_of_disabled_kinds_are_not_tracked() {
    let mut config = BubbleConfig::with_path(config_path());
    config.set_kind_enabled(MachineKind::Cask, false);
    let mut overlay = overlay_with(config);
    enter(&mut overlay, "Cellar");
    let cask = place_machine(&mut overlay, "Cellar", "(BC)163", 1.0, 1.0, MachineProgress::idle());
    let chest = place(&mut overlay, "Cellar", "(BC)130", 2.0, 1.0);
    overlay
        .host_sender()
        .send(HostEvent::ObjectListChanged {
            scene: "Cellar".to_string(),
            added: smallvec![cask, chest],
            removed: smallvec![],
        })
        .unwrap();
    overlay.pump();

    assert!(overlay.registry().is_empty());
}

#[test]
fn warping_rescans_the_new_scene() {
    let mut overlay = overlay();
    let farm_jar = place_machine(&mut overlay, "Farm", "(BC)15", 1.0, 1.0, MachineProgress::idle());
    let shed_keg = place_machine(&mut overlay, "Shed", "(BC)12", 1.0, 1.0, MachineProgress::idle());
    enter(&mut overlay, "Farm");
    assert!(overlay.registry().contains(farm_jar));

    overlay
        .host_sender()
        .send(HostEvent::Warped {
            scene: "Shed".to_string(),
        })
        .unwrap();
    overlay.pump();
    assert!(overlay.registry().contains(shed_keg));
    assert!(!overlay.registry().contains(farm_jar));
}

#[test]
fn menu_change_picks_up_newly_enabled_kinds() {
    let mut config = BubbleConfig::with_path(config_path());
    config.set_kind_enabled(MachineKind::Loom, false);
    let mut overlay = overlay_with(config);
    let loom = place_machine(&mut overlay, "Farm", "(BC)17", 1.0, 1.0, MachineProgress::idle());
    enter(&mut overlay, "Farm");
    assert!(overlay.registry().is_empty());

    overlay.config_mut().set_kind_enabled(MachineKind::Loom, true);
    overlay.host_sender().send(HostEvent::MenuChanged).unwrap();
    overlay.pump();
    assert!(overlay.registry().contains(loom));
}

#[test]
fn nothing_renders_before_a_save_is_loaded() {
    let mut overlay = overlay();
    place_machine(&mut overlay, "Farm", "(BC)15", 1.0, 1.0, MachineProgress::idle());
    let mut surface = RecordingSurface::new();
    assert_eq!(overlay.render(&mut surface), 0);

    enter(&mut overlay, "Farm");
    assert_eq!(overlay.render(&mut surface), 1);

    overlay
        .host_sender()
        .send(HostEvent::ReturnedToTitle)
        .unwrap();
    surface.draws.clear();
    assert_eq!(overlay.render(&mut surface), 0);
    assert!(surface.draws.is_empty());
}

#[test]
fn missing_sheet_skips_the_frame() {
    let mut overlay = overlay();
    place_machine(&mut overlay, "Farm", "(BC)15", 1.0, 1.0, MachineProgress::idle());
    enter(&mut overlay, "Farm");
    let mut surface = RecordingSurface::without_sheet();
    assert_eq!(overlay.render(&mut surface), 0);
    assert!(surface.draws.is_empty());
}

#[test]
fn busy_and_harvestable_machines_get_no_bubble() {
    let mut overlay = overlay();
    place_machine(&mut overlay, "Farm", "(BC)15", 1.0, 1.0, MachineProgress::new(30, false));
    place_machine(&mut overlay, "Farm", "(BC)12", 2.0, 1.0, MachineProgress::new(0, true));
    place_pot(&mut overlay, "Farm", 3.0, 1.0, CrabPot::empty().with_catch("(O)715"));
    let idle = place_machine(&mut overlay, "Farm", "(BC)13", 4.0, 1.0, MachineProgress::idle());
    enter(&mut overlay, "Farm");

    let mut surface = RecordingSurface::new();
    assert_eq!(overlay.render(&mut surface), 1);
    assert_eq!(surface.draws[0].entity, idle);
}

#[test]
fn draws_are_sorted_back_to_front() {
    let mut overlay = overlay();
    let low = place_machine(&mut overlay, "Farm", "(BC)15", 1.0, 5.0, MachineProgress::idle());
    let high = place_machine(&mut overlay, "Farm", "(BC)15", 2.0, 1.0, MachineProgress::idle());
    let mid = place_pot(&mut overlay, "Farm", 3.0, 3.0, CrabPot::empty());
    enter(&mut overlay, "Farm");

    let mut surface = RecordingSurface::new();
    overlay.render(&mut surface);
    let order: Vec<Entity> = surface.draws.iter().map(|d| d.entity).collect();
    assert_eq!(order, vec![high, mid, low]);
    assert!(surface.draws.windows(2).all(|w| w[0].depth <= w[1].depth));
}

#[test]
fn bubble_layout_follows_preferences() {
    let mut config = BubbleConfig::with_path(config_path());
    config.set_offset_y(40);
    config.set_size_percent(50);
    config.set_opacity_percent(50);
    let mut overlay = overlay_with(config);
    let jar = place_machine(&mut overlay, "Farm", "(BC)15", 2.0, 3.0, MachineProgress::idle());
    let pot = place_pot(
        &mut overlay,
        "Farm",
        4.0,
        3.0,
        CrabPot::empty()
            .with_bob(2.0)
            .with_direction_offset(Vector2 { x: 5.0, y: -4.0 }),
    );
    enter(&mut overlay, "Farm");

    let mut surface = RecordingSurface::new();
    overlay.render(&mut surface);
    assert_eq!(surface.draws.len(), 2);
    let find = |entity: Entity| surface.draws.iter().find(|d| d.entity == entity).copied();
    let jar = find(jar).unwrap();
    let pot = find(pot).unwrap();

    // 128 + (100 - 50) / 100 * 32, 192 - 40
    assert_eq!(jar.position.x, 144.0);
    assert_eq!(jar.position.y, 152.0);
    assert_eq!(jar.scale, 2.0);
    assert_eq!(jar.tint.a, 127);
    assert_eq!(jar.depth, (192.0 + 37.0) / 10000.0);

    // 256 + 16 + 5, 192 - 40 - 4 + 2 + 20
    assert_eq!(pot.position.x, 277.0);
    assert_eq!(pot.position.y, 170.0);
}

#[test]
fn clock_animates_only_while_enabled() {
    let mut overlay = overlay();
    overlay.update(250);
    assert_eq!(overlay.clock().frame, 1);
    overlay.update(100);
    overlay.update(150);
    assert_eq!(overlay.clock().frame, 2);

    overlay.config_mut().enabled = false;
    overlay.update(1000);
    assert_eq!(overlay.clock().frame, 2);

    overlay.config_mut().enabled = true;
    overlay.update(500);
    assert_eq!(overlay.clock().frame, 0);
}

#[test]
fn source_cell_follows_the_clock() {
    let mut overlay = overlay();
    place_machine(&mut overlay, "Farm", "(BC)15", 1.0, 1.0, MachineProgress::idle());
    enter(&mut overlay, "Farm");
    overlay.update(750);

    let mut surface = RecordingSurface::new();
    overlay.render(&mut surface);
    let source = surface.draws[0].source;
    assert_eq!(source.x, 48.0);
    assert_eq!(source.y, 64.0);
}

#[test]
fn stale_entities_are_skipped_at_render_time() {
    let mut overlay = overlay();
    let gone = place_machine(&mut overlay, "Farm", "(BC)15", 1.0, 1.0, MachineProgress::idle());
    let kept = place_machine(&mut overlay, "Farm", "(BC)15", 2.0, 1.0, MachineProgress::idle());
    enter(&mut overlay, "Farm");
    overlay.world_mut().despawn(gone);

    let mut surface = RecordingSurface::new();
    assert_eq!(overlay.render(&mut surface), 1);
    assert_eq!(surface.draws[0].entity, kept);
}

#[test]
fn loading_a_save_clears_the_previous_registry() {
    let mut overlay = overlay();
    place_machine(&mut overlay, "Farm", "(BC)15", 1.0, 1.0, MachineProgress::idle());
    enter(&mut overlay, "Farm");
    assert_eq!(overlay.registry().len(), 1);

    overlay.host_sender().send(HostEvent::SaveLoaded).unwrap();
    overlay.pump();
    assert!(overlay.registry().is_empty());
}

#[test]
fn switching_the_overlay_back_on_rescans_the_scene() {
    let mut config = BubbleConfig::with_path(config_path());
    config.enabled = false;
    let mut overlay = overlay_with(config);
    let jar = place_machine(&mut overlay, "Farm", "(BC)15", 1.0, 1.0, MachineProgress::idle());
    enter(&mut overlay, "Farm");
    assert!(overlay.registry().is_empty());

    overlay.set_enabled(true);
    assert!(overlay.registry().contains(jar));
    let mut surface = RecordingSurface::new();
    assert_eq!(overlay.render(&mut surface), 1);
    assert_eq!(surface.draws[0].entity, jar);
}

#[test]
fn objects_placed_while_off_show_up_after_switching_on() {
    let mut overlay = overlay();
    enter(&mut overlay, "Farm");
    overlay.set_enabled(false);

    let keg = place_machine(&mut overlay, "Farm", "(BC)12", 1.0, 1.0, MachineProgress::idle());
    overlay
        .host_sender()
        .send(HostEvent::ObjectListChanged {
            scene: "Farm".to_string(),
            added: smallvec![keg],
            removed: smallvec![],
        })
        .unwrap();
    overlay.pump();
    assert!(overlay.registry().is_empty());

    overlay.set_enabled(true);
    assert!(overlay.registry().contains(keg));
}

#[test]
fn readiness_follows_live_machine_state() {
    let mut overlay = overlay();
    let jar = place_machine(&mut overlay, "Farm", "(BC)15", 1.0, 1.0, MachineProgress::new(10, false));
    enter(&mut overlay, "Farm");
    let mut surface = RecordingSurface::new();
    assert_eq!(overlay.render(&mut surface), 0);

    overlay
        .world_mut()
        .get_mut::<MachineProgress>(jar)
        .unwrap()
        .minutes_until_ready = 0;
    assert_eq!(overlay.render(&mut surface), 1);

    overlay
        .world_mut()
        .get_mut::<MachineProgress>(jar)
        .unwrap()
        .ready_for_harvest = true;
    assert_eq!(overlay.render(&mut surface), 0);
}

#[test]
fn readiness_follows_live_crab_pot_state() {
    let mut overlay = overlay();
    let pot = place_pot(&mut overlay, "Beach", 1.0, 1.0, CrabPot::empty());
    enter(&mut overlay, "Beach");
    let mut surface = RecordingSurface::new();
    assert_eq!(overlay.render(&mut surface), 1);

    overlay.world_mut().get_mut::<CrabPot>(pot).unwrap().bait = Some("Worm".to_string());
    assert_eq!(overlay.render(&mut surface), 0);

    {
        let world = overlay.world_mut();
        let mut state = world.get_mut::<CrabPot>(pot).unwrap();
        state.bait = None;
        state.held_item = Some("(O)715".to_string());
    }
    assert_eq!(overlay.render(&mut surface), 0);

    overlay.world_mut().get_mut::<CrabPot>(pot).unwrap().held_item = None;
    assert_eq!(overlay.render(&mut surface), 1);
}
