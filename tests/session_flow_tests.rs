//! Integrationstests für den Session-Ablauf:
//! - Klick-Phasen, Bestätigung und Verkettung je Modus
//! - Warteschlange (belegt / ausgeführt)
//! - Schritt-Modus und stufenweises Zurücksetzen
//! - Optionen-Persistenz

use glam::Vec3;
use placement_curve_engine::app::PathPhase;
use placement_curve_engine::{
    apply_pending, FlatTerrain, Footprint, NoCollisions, PathTool, PlacementAction,
    PlacementMode, PlacementOptions, PlacementOutcome, PlacementSession, PlacementSink, Prefab,
    PrefabKind,
};

/// Zählt platzierte Prefabs.
#[derive(Default)]
struct CountingSink {
    positions: Vec<Vec3>,
    rotations: Vec<Option<f32>>,
}

impl PlacementSink for CountingSink {
    fn place(&mut self, _prefab: &Prefab, position: Vec3, rotation: Option<f32>) {
        self.positions.push(position);
        self.rotations.push(rotation);
    }
}

fn session_in(mode: PlacementMode) -> PlacementSession {
    let mut session = PlacementSession::new(PlacementOptions {
        mode,
        ..Default::default()
    });
    session.select_prefab(Some(Prefab::new(
        "zaunpfahl",
        PrefabKind::Prop,
        Footprint::new(0.5, 0.5),
    )));
    session
}

fn recompute(session: &mut PlacementSession, cursor: Vec3) -> usize {
    session
        .recompute(cursor, &FlatTerrain::new(0.0), &NoCollisions)
        .len()
}

// ── Linie ──

#[test]
fn test_line_commit_queues_points_and_chains() {
    let mut session = session_in(PlacementMode::Line);
    assert_eq!(session.on_click(Vec3::ZERO), PlacementOutcome::Continue);
    assert_eq!(recompute(&mut session, Vec3::new(30.0, 0.0, 0.0)), 3);

    let end = Vec3::new(30.0, 0.0, 0.0);
    assert_eq!(session.on_click(end), PlacementOutcome::Queued { count: 3 });
    assert_eq!(session.phase(), PathPhase::HasStart);

    // Nächste Linie beginnt am letzten Endpunkt
    recompute(&mut session, Vec3::new(30.0, 0.0, 20.0));
    let points = session.points();
    assert_eq!(points[0].position, end);

    let queue = session.pending_handle();
    let mut sink = CountingSink::default();
    let report = apply_pending(&queue, &mut sink).expect("Aktion erwartet");
    assert_eq!(report.placed, 3);
    assert_eq!(sink.positions[2], Vec3::new(20.0, 0.0, 0.0));
    assert!(sink.rotations.iter().all(|r| *r == Some(0.0)));
}

#[test]
fn test_busy_queue_refuses_and_keeps_state() {
    let mut session = session_in(PlacementMode::Line);
    session.on_click(Vec3::ZERO);
    recompute(&mut session, Vec3::new(20.0, 0.0, 0.0));
    assert_eq!(
        session.on_click(Vec3::new(20.0, 0.0, 0.0)),
        PlacementOutcome::Queued { count: 2 }
    );

    recompute(&mut session, Vec3::new(20.0, 0.0, 30.0));
    assert_eq!(
        session.on_click(Vec3::new(20.0, 0.0, 30.0)),
        PlacementOutcome::QueueBusy
    );
    // Start bleibt am alten Endpunkt
    assert_eq!(session.points()[0].position, Vec3::new(20.0, 0.0, 0.0));

    let queue = session.pending_handle();
    let first = queue.take().expect("erste Aktion wartet");
    assert_eq!(first.points().len(), 2);
    assert_eq!(
        session.on_click(Vec3::new(20.0, 0.0, 30.0)),
        PlacementOutcome::Queued { count: 3 }
    );
}

#[test]
fn test_snapshot_handle_sees_recompute() {
    let mut session = session_in(PlacementMode::Line);
    let snapshot = session.snapshot_handle();
    session.on_click(Vec3::ZERO);
    recompute(&mut session, Vec3::new(0.0, 0.0, 55.0));
    assert_eq!(snapshot.load().len(), 6);

    session.on_right_click();
    assert!(snapshot.load().is_empty());
    assert_eq!(session.phase(), PathPhase::Idle);
}

#[test]
fn test_clicks_without_prefab_are_ignored() {
    let mut session = PlacementSession::default();
    assert_eq!(session.on_click(Vec3::ZERO), PlacementOutcome::Ignored);
    assert_eq!(session.on_click(Vec3::X), PlacementOutcome::Ignored);
    assert_eq!(session.phase(), PathPhase::Idle);
}

// ── Punkt ──

#[test]
fn test_point_mode_commits_on_first_click() {
    let mut session = session_in(PlacementMode::Point);
    recompute(&mut session, Vec3::new(3.0, 0.0, 4.0));
    assert_eq!(
        session.on_click(Vec3::new(3.0, 0.0, 4.0)),
        PlacementOutcome::Queued { count: 1 }
    );
}

// ── Kurven ──

#[test]
fn test_curve_reset_is_two_stage() {
    let mut session = session_in(PlacementMode::Curve);
    session.on_click(Vec3::ZERO);
    session.on_click(Vec3::new(20.0, 0.0, 0.0));
    assert!(recompute(&mut session, Vec3::new(20.0, 0.0, 20.0)) > 0);
    assert!(session.preview_curve().is_some());

    session.on_right_click();
    assert_eq!(session.phase(), PathPhase::HasStart);
    assert!(session.preview_curve().is_none());
    assert_eq!(recompute(&mut session, Vec3::new(20.0, 0.0, 20.0)), 0);

    session.on_right_click();
    assert_eq!(session.phase(), PathPhase::Idle);
}

#[test]
fn test_curve_commit_restarts_without_elbow() {
    let mut session = session_in(PlacementMode::Curve);
    session.on_click(Vec3::ZERO);
    session.on_click(Vec3::new(20.0, 0.0, 0.0));
    let count = recompute(&mut session, Vec3::new(20.0, 0.0, 20.0));
    assert_eq!(
        session.on_click(Vec3::new(20.0, 0.0, 20.0)),
        PlacementOutcome::Queued { count }
    );
    assert_eq!(session.phase(), PathPhase::HasStart);
    assert!(session.preview_curve().is_none());
}

#[test]
fn test_freeform_commit_keeps_tangent() {
    let mut session = session_in(PlacementMode::Freeform);
    session.on_click(Vec3::ZERO);
    session.on_click(Vec3::new(20.0, 0.0, 0.0));
    recompute(&mut session, Vec3::new(20.0, 0.0, 20.0));
    session.on_click(Vec3::new(20.0, 0.0, 20.0));
    assert_eq!(session.phase(), PathPhase::HasElbow);

    // Gespiegelter Knick bei (20, 0, 40): nächste Kurve startet in +Z
    recompute(&mut session, Vec3::new(40.0, 0.0, 40.0));
    let curve = session.preview_curve().expect("Kurve erwartet");
    assert_eq!(curve.a, Vec3::new(20.0, 0.0, 20.0));
    let tangent = curve.tangent(0.0);
    assert!(tangent.x.abs() < 1e-4 && tangent.z > 0.0);
}

// ── Kreis ──

#[test]
fn test_circle_keeps_centre_after_commit() {
    let mut session = session_in(PlacementMode::Circle);
    session.on_click(Vec3::new(5.0, 0.0, 5.0));
    let count = recompute(&mut session, Vec3::new(15.0, 0.0, 5.0));
    assert_eq!(count, 6);
    session.on_click(Vec3::new(15.0, 0.0, 5.0));
    assert_eq!(session.phase(), PathPhase::HasStart);
    assert_eq!(recompute(&mut session, Vec3::new(25.0, 0.0, 5.0)), 12);
}

// ── Schritt-Modus ──

#[test]
fn test_step_mode_places_one_point_at_a_time() {
    let mut session = session_in(PlacementMode::Line);
    session.set_step_mode(true);
    session.on_click(Vec3::ZERO);
    recompute(&mut session, Vec3::new(25.0, 0.0, 0.0));
    assert_eq!(
        session.on_click(Vec3::new(25.0, 0.0, 0.0)),
        PlacementOutcome::Stepping { remaining: 3 }
    );
    assert!(session.is_stepping());

    // Eingefroren: Cursor-Bewegung ändert nichts
    assert_eq!(recompute(&mut session, Vec3::new(90.0, 0.0, 0.0)), 3);

    let queue = session.pending_handle();
    let mut sink = CountingSink::default();
    assert_eq!(session.step(), PlacementOutcome::Stepping { remaining: 2 });
    assert_eq!(session.step(), PlacementOutcome::QueueBusy);
    apply_pending(&queue, &mut sink);
    assert_eq!(session.step(), PlacementOutcome::Stepping { remaining: 1 });
    apply_pending(&queue, &mut sink);
    assert_eq!(session.step(), PlacementOutcome::Stepping { remaining: 0 });
    apply_pending(&queue, &mut sink);

    assert_eq!(
        sink.positions,
        vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), Vec3::new(20.0, 0.0, 0.0)]
    );
    assert!(!session.is_stepping());
    assert_eq!(session.step(), PlacementOutcome::Ignored);

    // Verkettung nach dem letzten Schritt
    recompute(&mut session, Vec3::new(25.0, 0.0, 30.0));
    assert_eq!(session.points()[0].position, Vec3::new(25.0, 0.0, 0.0));
}

#[test]
fn test_step_action_is_single() {
    let mut session = session_in(PlacementMode::Line);
    session.set_step_mode(true);
    session.on_click(Vec3::ZERO);
    recompute(&mut session, Vec3::new(15.0, 0.0, 0.0));
    session.on_click(Vec3::new(15.0, 0.0, 0.0));
    session.step();
    let action = session.pending_handle().take().expect("Aktion erwartet");
    assert!(matches!(action, PlacementAction::Single { .. }));
}

#[test]
fn test_right_click_and_disable_cancel_stepping() {
    let mut session = session_in(PlacementMode::Line);
    session.set_step_mode(true);
    session.on_click(Vec3::ZERO);
    recompute(&mut session, Vec3::new(30.0, 0.0, 0.0));
    session.on_click(Vec3::new(30.0, 0.0, 0.0));
    assert!(session.is_stepping());

    session.on_right_click();
    assert!(!session.is_stepping());
    // Rechtsklick setzt die Linie wie außerhalb des Schritt-Modus zurück
    assert_eq!(session.phase(), PathPhase::Idle);
    assert!(session.points().is_empty());
    assert_eq!(recompute(&mut session, Vec3::new(50.0, 0.0, 0.0)), 0);

    session.on_click(Vec3::ZERO);
    assert_eq!(recompute(&mut session, Vec3::new(50.0, 0.0, 0.0)), 5);
    session.on_click(Vec3::new(50.0, 0.0, 0.0));
    assert!(session.is_stepping());
    session.set_step_mode(false);
    assert!(!session.is_stepping());
    assert!(!session.pending_handle().is_pending());
}

#[test]
fn test_right_click_while_stepping_drops_only_curve_elbow() {
    let mut session = session_in(PlacementMode::Curve);
    session.set_step_mode(true);
    session.on_click(Vec3::ZERO);
    session.on_click(Vec3::new(20.0, 0.0, 0.0));
    assert_eq!(session.phase(), PathPhase::HasElbow);
    assert!(recompute(&mut session, Vec3::new(20.0, 0.0, 20.0)) > 0);
    session.on_click(Vec3::new(20.0, 0.0, 20.0));
    assert!(session.is_stepping());

    session.on_right_click();
    assert!(!session.is_stepping());
    assert_eq!(session.phase(), PathPhase::HasStart);
    assert!(session.preview_curve().is_none());
    assert!(!session.pending_handle().is_pending());
}

#[test]
fn test_prefab_change_discards_published_points() {
    let mut session = session_in(PlacementMode::Line);
    session.on_click(Vec3::ZERO);
    assert_eq!(recompute(&mut session, Vec3::new(30.0, 0.0, 0.0)), 3);

    session.select_prefab(Some(Prefab::new(
        "laterne",
        PrefabKind::Building,
        Footprint::new(4.0, 4.0),
    )));
    assert!(session.points().is_empty());
    // Bestätigung vor der nächsten Neuberechnung stellt nichts ein
    assert_eq!(
        session.on_click(Vec3::new(30.0, 0.0, 0.0)),
        PlacementOutcome::Ignored
    );
    assert!(!session.pending_handle().is_pending());
    assert_eq!(session.phase(), PathPhase::HasStart);
}

#[test]
fn test_option_change_discards_points_and_frozen_steps() {
    let mut session = session_in(PlacementMode::Line);
    session.set_step_mode(true);
    session.on_click(Vec3::ZERO);
    assert_eq!(recompute(&mut session, Vec3::new(30.0, 0.0, 0.0)), 3);

    // Gleiche Optionen lassen die Liste stehen
    session.set_options(session.options().clone());
    assert_eq!(session.points().len(), 3);

    session.on_click(Vec3::new(30.0, 0.0, 0.0));
    assert!(session.is_stepping());

    session.set_options(PlacementOptions {
        spacing: 5.0,
        ..session.options().clone()
    });
    assert!(!session.is_stepping());
    assert!(session.points().is_empty());
    assert_eq!(session.phase(), PathPhase::HasStart);
    assert_eq!(recompute(&mut session, Vec3::new(30.0, 0.0, 0.0)), 6);
}

// ── Zaun ──

#[test]
fn test_fence_mode_uses_prefab_length() {
    let mut session = PlacementSession::new(PlacementOptions {
        fence_mode: true,
        ..Default::default()
    });
    session.select_prefab(Some(Prefab::new(
        "zaunfeld",
        PrefabKind::Prop,
        Footprint::from_extents(Vec3::new(2.5, 1.0, 0.1)),
    )));
    session.on_click(Vec3::ZERO);
    let count = recompute(&mut session, Vec3::new(20.0, 0.0, 0.0));
    assert_eq!(count, 4);
    let points = session.points();
    assert!((points[0].position.x - 2.5).abs() < 1e-4);
    assert!((points[3].position.x - 17.5).abs() < 1e-4);
    assert!(points.iter().all(|p| p.rotation == 0.0));
}

// ── Optionen ──

#[test]
fn test_options_roundtrip_through_toml_file() {
    let path = std::env::temp_dir().join(format!(
        "placement_curve_engine_roundtrip_{}.toml",
        std::process::id()
    ));
    let options = PlacementOptions {
        spacing: 12.5,
        rotation_degrees: 45.0,
        relative_rotation: false,
        fence_mode: true,
        step_mode: true,
        mode: PlacementMode::Freeform,
    };
    options.save_to_file(&path).expect("Optionen speicherbar");
    let loaded = PlacementOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, options);
    let session = PlacementSession::new(loaded);
    assert_eq!(session.mode(), PlacementMode::Freeform);
    assert_eq!(session.shape().status_text(), "Startpunkt klicken");
}
