//! Integration tests for seaworthy-solver.

use seaworthy_material::{MaterialDatabase, StructuralMaterial};
use seaworthy_math::{RandomEngine, Vec2};
use seaworthy_solver::coefficients::{
    self, filter_stiffness, iterations_correction, mass_factor, melted_rest_length,
    SpringCoefficients,
};
use seaworthy_solver::{Points, Ship, SimulationParameters, Springs, StrainState, Triangles};
use seaworthy_structure::generators::{raft, rope};
use seaworthy_structure::StructureLayer;
use seaworthy_telemetry::{EventBus, EventLog, VecSink};
use seaworthy_types::surface::FlatSea;
use seaworthy_types::{MaterialId, PointId, SeaworthyError, SpringId};

fn test_material(name: &str, strength: f32) -> StructuralMaterial {
    StructuralMaterial {
        name: name.into(),
        mass: 1000.0,
        strength,
        stiffness: 1.0,
        melting_temperature: 1000.0,
        thermal_conductivity: 2.0,
        strain_threshold_fraction: 0.5,
        buoyancy_volume_fill: 0.5,
        is_hull: false,
        is_rope: false,
    }
}

fn bus_with_log() -> (EventBus, EventLog) {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let log = sink.log();
    bus.add_sink(Box::new(sink));
    (bus, log)
}

/// Two points one metre apart, joined by one spring.
struct Pair {
    materials: MaterialDatabase,
    params: SimulationParameters,
    points: Points,
    springs: Springs,
    triangles: Triangles,
    spring: SpringId,
}

impl Pair {
    fn new(strength: f32) -> Self {
        let mut materials = MaterialDatabase::empty();
        let m = materials.register(test_material("test", strength));
        let params = SimulationParameters::default();
        let mut rng = RandomEngine::seeded(7);

        let mut points = Points::with_capacity(2);
        let a = points.add(Vec2::new(0.0, 0.0), m, materials.get(m), &mut rng);
        let b = points.add(Vec2::new(1.0, 0.0), m, materials.get(m), &mut rng);

        let mut springs = Springs::with_capacity(1);
        let spring = springs.add(a, b, &mut points, &materials, &params);

        Self {
            materials,
            params,
            points,
            springs,
            triangles: Triangles::default(),
            spring,
        }
    }

    fn stretch_to(&mut self, length: f32) {
        self.points.set_position(PointId(1), Vec2::new(length, 0.0));
        self.springs.update_lengths(&self.points);
    }

    fn strain_pass(&mut self, bus: &EventBus) {
        self.springs.update_for_strain(
            &mut self.points,
            &mut self.triangles,
            &self.materials,
            bus,
        );
    }
}

// ─── Coefficient Tests ────────────────────────────────────────

#[test]
fn mass_factor_is_reduced_mass() {
    assert_eq!(mass_factor(2.0, 2.0), 1.0);
    assert!((mass_factor(1000.0, 3000.0) - 750.0).abs() < 1e-3);
}

#[test]
fn iterations_correction_is_one_at_base() {
    assert_eq!(iterations_correction(24), 1.0);
    assert!(iterations_correction(48) < 1.0);
    assert!(iterations_correction(12) > 1.0);
}

#[test]
fn melting_softens_and_toughens() {
    let solid = coefficients::melt_progress(900.0, 1000.0, 1.0);
    let molten = coefficients::melt_progress(1300.0, 1000.0, 1.0);
    assert_eq!(solid, 0.0);
    assert_eq!(molten, 1.0);
    assert_eq!(coefficients::melting_factor(solid), 1.0);
    assert!(coefficients::melting_factor(molten) > 0.0);
    assert!(coefficients::melting_factor(molten) < 0.1);
    assert_eq!(coefficients::melting_tolerance(molten), 10.0);
}

#[test]
fn melting_temperature_adjustment_shifts_onset() {
    // Melting point halved: 600 K is 100 K past it
    let progress = coefficients::melt_progress(600.0, 1000.0, 0.5);
    assert!((progress - 0.5).abs() < 1e-6);
}

#[test]
fn stiffness_filter_is_asymmetric() {
    assert!((filter_stiffness(100.0, 200.0) - 103.0).abs() < 1e-4);
    assert_eq!(filter_stiffness(200.0, 100.0), 100.0);
}

#[test]
fn rest_length_clamped_between_previous_and_twice_factory() {
    assert_eq!(melted_rest_length(1.0, 1.5, 1.0), 1.5);
    assert_eq!(melted_rest_length(1.5, 3.0, 1.0), 2.0);
    assert_eq!(melted_rest_length(2.0, 1.2, 1.0), 2.0);
}

#[test]
fn breaking_elongation_scales_with_strength_and_rest() {
    let pair = Pair::new(0.5);
    let b = pair.springs.breaking_elongation(pair.spring);
    // ±5% personality jitter around strength × rest length
    assert!(b > 0.5 * 0.95 - 1e-6 && b < 0.5 * 1.05 + 1e-6, "B = {b}");
}

#[test]
fn damping_and_stiffness_follow_mechanical_dt() {
    let pair = Pair::new(1.0);
    let dt = pair.params.mechanical_dt();
    let mf = mass_factor(1000.0, 1000.0);
    let c = pair.springs.coefficients(pair.spring);
    let expected_k = 0.5 * mf / (dt * dt);
    let expected_c = 0.03 * mf / dt;
    assert!((c.stiffness - expected_k).abs() / expected_k < 1e-5);
    assert!((c.damping - expected_c).abs() / expected_c < 1e-5);
}

// ─── Spring Construction Tests ───────────────────────────────

#[test]
fn base_material_is_weaker_endpoint() {
    let mut materials = MaterialDatabase::empty();
    let strong = materials.register(test_material("strong", 2.0));
    let weak = materials.register(test_material("weak", 0.2));
    let params = SimulationParameters::default();
    let mut rng = RandomEngine::seeded(1);

    let mut points = Points::with_capacity(2);
    let a = points.add(Vec2::ZERO, strong, materials.get(strong), &mut rng);
    let b = points.add(Vec2::X, weak, materials.get(weak), &mut rng);
    let mut springs = Springs::with_capacity(1);
    let s = springs.add(a, b, &mut points, &materials, &params);

    assert_eq!(springs.base_material(s), weak);
    assert_eq!(springs.other_endpoint(s, a), b);
    assert_eq!(points.connected_springs(a), &[s]);
}

#[test]
fn hull_endpoint_makes_spring_watertight() {
    let mut materials = MaterialDatabase::empty();
    let mut hull = test_material("hull", 1.0);
    hull.is_hull = true;
    hull.thermal_conductivity = 4.0;
    let hull = materials.register(hull);
    let plain = materials.register(test_material("plain", 1.0));
    let params = SimulationParameters::default();
    let mut rng = RandomEngine::seeded(1);

    let mut points = Points::with_capacity(3);
    let a = points.add(Vec2::ZERO, hull, materials.get(hull), &mut rng);
    let b = points.add(Vec2::X, plain, materials.get(plain), &mut rng);
    let c = points.add(Vec2::new(2.0, 0.0), plain, materials.get(plain), &mut rng);
    let mut springs = Springs::with_capacity(2);
    let ab = springs.add(a, b, &mut points, &materials, &params);
    let bc = springs.add(b, c, &mut points, &materials, &params);

    assert_eq!(springs.water_permeability(ab), 0.0);
    assert_eq!(springs.water_permeability(bc), 1.0);
    assert_eq!(springs.thermal_conductivity(ab), 3.0);
}

#[test]
fn rope_requires_both_endpoints() {
    let mut materials = MaterialDatabase::empty();
    let mut rope_material = test_material("rope", 3.0);
    rope_material.is_rope = true;
    let rope_id = materials.register(rope_material);
    let plain = materials.register(test_material("plain", 1.0));
    let params = SimulationParameters::default();
    let mut rng = RandomEngine::seeded(1);

    let mut points = Points::with_capacity(3);
    let a = points.add(Vec2::ZERO, rope_id, materials.get(rope_id), &mut rng);
    let b = points.add(Vec2::X, rope_id, materials.get(rope_id), &mut rng);
    let c = points.add(Vec2::new(2.0, 0.0), plain, materials.get(plain), &mut rng);
    let mut springs = Springs::with_capacity(2);
    let ab = springs.add(a, b, &mut points, &materials, &params);
    let bc = springs.add(b, c, &mut points, &materials, &params);

    assert!(springs.is_rope(ab));
    assert!(!springs.is_rope(bc));
}

// ─── Strain State Machine Tests ──────────────────────────────

#[test]
fn strain_hysteresis() {
    let mut pair = Pair::new(0.5);
    let (mut bus, log) = bus_with_log();
    let b = pair.springs.breaking_elongation(pair.spring);

    // Above T·B: becomes stressed
    pair.stretch_to(1.0 + 0.6 * b);
    pair.strain_pass(&bus);
    assert_eq!(pair.springs.strain_state(pair.spring), StrainState::Stressed);

    // Between 0.08·B and T·B: stays stressed
    pair.stretch_to(1.0 + 0.3 * b);
    pair.strain_pass(&bus);
    assert_eq!(pair.springs.strain_state(pair.spring), StrainState::Stressed);

    // Below 0.08·B: relaxes
    pair.stretch_to(1.0 + 0.05 * b);
    pair.strain_pass(&bus);
    assert_eq!(pair.springs.strain_state(pair.spring), StrainState::Unstressed);

    // Back between the thresholds: stays unstressed
    pair.stretch_to(1.0 + 0.3 * b);
    pair.strain_pass(&bus);
    assert_eq!(pair.springs.strain_state(pair.spring), StrainState::Unstressed);

    bus.flush();
    assert_eq!(log.count("spring_stressed"), 1);
    assert_eq!(log.count("spring_broken"), 0);
}

#[test]
fn compression_counts_as_strain() {
    let mut pair = Pair::new(0.5);
    let (bus, _log) = bus_with_log();
    let b = pair.springs.breaking_elongation(pair.spring);

    pair.stretch_to(1.0 - 0.7 * b);
    pair.strain_pass(&bus);
    assert!(pair.springs.is_stressed(pair.spring));
    assert!(pair.points.stress(PointId(0)) < -0.69);
}

#[test]
fn point_stress_is_signed_strain_ratio() {
    let mut pair = Pair::new(0.5);
    let (bus, _log) = bus_with_log();
    let b = pair.springs.breaking_elongation(pair.spring);

    pair.stretch_to(1.0 + 0.25 * b);
    pair.strain_pass(&bus);
    assert!((pair.points.stress(PointId(0)) - 0.25).abs() < 1e-3);
    assert!((pair.points.stress(PointId(1)) - 0.25).abs() < 1e-3);

    // Reset each pass
    pair.stretch_to(1.0);
    pair.strain_pass(&bus);
    assert_eq!(pair.points.stress(PointId(0)), 0.0);
}

#[test]
fn pulled_pair_breaks_with_one_event() {
    let mut pair = Pair::new(0.5);
    let (mut bus, log) = bus_with_log();

    pair.stretch_to(1.6);
    pair.strain_pass(&bus);
    // A second pass must not report the same break again
    pair.strain_pass(&bus);
    bus.flush();

    assert_eq!(pair.springs.strain_state(pair.spring), StrainState::Destroyed);
    assert_eq!(log.count("spring_broken"), 1);
    assert!(pair.points.connected_springs(PointId(0)).is_empty());
    assert!(pair.points.connected_springs(PointId(1)).is_empty());
}

#[test]
fn breakage_is_terminal_until_restore() {
    let mut pair = Pair::new(0.5);
    let (mut bus, log) = bus_with_log();
    let original = pair.springs.coefficients(pair.spring);

    pair.stretch_to(1.6);
    pair.strain_pass(&bus);
    assert_eq!(pair.springs.coefficients(pair.spring), SpringCoefficients::ZERO);

    // Back at rest: still destroyed, coefficients still exactly zero
    pair.stretch_to(1.0);
    pair.strain_pass(&bus);
    assert_eq!(pair.springs.strain_state(pair.spring), StrainState::Destroyed);
    assert_eq!(pair.springs.stiffness(pair.spring), 0.0);
    assert_eq!(pair.springs.damping(pair.spring), 0.0);
    assert_eq!(pair.springs.breaking_elongation(pair.spring), 0.0);

    pair.springs
        .restore(pair.spring, &mut pair.points, &pair.params, &bus);
    assert_eq!(pair.springs.strain_state(pair.spring), StrainState::Unstressed);
    assert_eq!(pair.springs.coefficients(pair.spring), original);
    assert_eq!(pair.points.connected_springs(PointId(0)), &[pair.spring]);

    bus.flush();
    assert_eq!(log.count("spring_broken"), 1);
    assert_eq!(log.count("spring_restored"), 1);
}

#[test]
fn break_cascades_to_triangles() {
    let materials = MaterialDatabase::with_defaults();
    let params = SimulationParameters::default();
    let mut rng = RandomEngine::seeded(3);
    let mut ship = Ship::build(
        &raft(2, 2, materials.find("oak_wood").unwrap()),
        &materials,
        &params,
        &mut rng,
    )
    .unwrap();
    let (mut bus, log) = bus_with_log();

    // The rising diagonal is shared by both triangles
    let diagonal = ship
        .springs()
        .live()
        .find(|&s| ship.springs().triangles(s).len() == 2)
        .unwrap();
    assert!(ship.destroy_spring(diagonal, &bus));
    assert!(!ship.destroy_spring(diagonal, &bus));
    bus.flush();

    assert_eq!(ship.destroyed_triangle_count(), 2);
    assert_eq!(ship.live_triangles().count(), 0);
    assert_eq!(log.count("triangle_destroyed"), 2);
    assert_eq!(log.count("spring_broken"), 1);
}

// ─── Coefficient Update Tests ────────────────────────────────

#[test]
fn stiffness_increase_converges_decrease_is_immediate() {
    let mut pair = Pair::new(0.5);
    let original = pair.springs.stiffness(pair.spring);

    let stiffer = SimulationParameters {
        spring_stiffness_adjustment: 2.0,
        ..Default::default()
    };

    let converging = pair
        .springs
        .recalculate_coefficients(&pair.points, &stiffer, true);
    assert!(converging);
    let first = pair.springs.stiffness(pair.spring);
    assert!((first / original - 1.03).abs() < 1e-4);

    for _ in 0..600 {
        pair.springs
            .recalculate_coefficients(&pair.points, &stiffer, true);
    }
    let converged = pair.springs.stiffness(pair.spring);
    assert!((converged / original - 2.0).abs() < 1e-3);

    // Back to the original adjustment: immediate
    pair.springs
        .recalculate_coefficients(&pair.points, &pair.params, true);
    assert_eq!(pair.springs.stiffness(pair.spring), original);
}

#[test]
fn unsmoothed_recalculation_jumps_to_target() {
    let mut pair = Pair::new(0.5);
    let original = pair.springs.stiffness(pair.spring);
    let stiffer = SimulationParameters {
        spring_stiffness_adjustment: 2.0,
        ..Default::default()
    };
    pair.springs
        .recalculate_coefficients(&pair.points, &stiffer, false);
    assert!((pair.springs.stiffness(pair.spring) / original - 2.0).abs() < 1e-5);
}

#[test]
fn decay_weakens_springs() {
    let mut pair = Pair::new(0.5);
    let before = pair.springs.breaking_elongation(pair.spring);
    pair.points.set_decay(PointId(0), 0.5);
    pair.points.set_decay(PointId(1), 0.5);
    pair.springs
        .recalculate_coefficients(&pair.points, &pair.params, true);
    let after = pair.springs.breaking_elongation(pair.spring);
    assert!((after / before - 0.5).abs() < 1e-5);
}

#[test]
fn mass_augmentation_stiffens_springs() {
    let mut pair = Pair::new(0.5);
    let before = pair.springs.damping(pair.spring);
    pair.points.set_mass_augmentation(PointId(0), 1000.0);
    pair.points.set_mass_augmentation(PointId(1), 1000.0);
    assert_eq!(pair.points.mass(PointId(0)), 2000.0);
    pair.springs
        .recalculate_coefficients(&pair.points, &pair.params, false);
    assert!((pair.springs.damping(pair.spring) / before - 2.0).abs() < 1e-5);
}

// ─── Melting Tests ───────────────────────────────────────────

#[test]
fn melting_grows_rest_length_up_to_twice_factory() {
    let mut pair = Pair::new(0.5);
    pair.points.set_temperature(PointId(0), 1300.0);
    pair.points.set_temperature(PointId(1), 1300.0);

    pair.stretch_to(1.5);
    assert!(pair.springs.update_for_melting(&pair.points, &pair.params));
    assert!((pair.springs.rest_length(pair.spring) - 1.5).abs() < 1e-6);

    pair.stretch_to(3.0);
    pair.springs.update_for_melting(&pair.points, &pair.params);
    assert!((pair.springs.rest_length(pair.spring) - 2.0).abs() < 1e-6);

    // Never shrinks
    pair.stretch_to(1.2);
    assert!(!pair.springs.update_for_melting(&pair.points, &pair.params));
    assert!((pair.springs.rest_length(pair.spring) - 2.0).abs() < 1e-6);
    assert!((pair.springs.factory_rest_length(pair.spring) - 1.0).abs() < 1e-6);
}

#[test]
fn cold_springs_keep_rest_length() {
    let mut pair = Pair::new(0.5);
    pair.stretch_to(1.3);
    assert!(!pair.springs.update_for_melting(&pair.points, &pair.params));
    assert!((pair.springs.rest_length(pair.spring) - 1.0).abs() < 1e-6);
}

// ─── Ship Tests ──────────────────────────────────────────────

#[test]
fn ship_build_counts() {
    let materials = MaterialDatabase::with_defaults();
    let wood = materials.find("oak_wood").unwrap();
    let mut rng = RandomEngine::seeded(1);
    let ship = Ship::build(
        &raft(3, 2, wood),
        &materials,
        &SimulationParameters::default(),
        &mut rng,
    )
    .unwrap();

    assert_eq!(ship.points().count(), 6);
    assert_eq!(ship.springs().count(), 11);
    assert_eq!(ship.triangles().count(), 4);
    assert_eq!(ship.broken_spring_count(), 0);
    assert!((ship.total_mass() - 6.0 * 750.0).abs() < 1e-2);
}

#[test]
fn ship_rejects_unknown_material() {
    let materials = MaterialDatabase::with_defaults();
    let mut rng = RandomEngine::seeded(1);
    let result = Ship::build(
        &raft(2, 1, MaterialId(200)),
        &materials,
        &SimulationParameters::default(),
        &mut rng,
    );
    assert!(matches!(result, Err(SeaworthyError::UnknownMaterial(_))));
}

#[test]
fn ship_rejects_invalid_parameters() {
    let materials = MaterialDatabase::with_defaults();
    let mut rng = RandomEngine::seeded(1);
    let params = SimulationParameters {
        simulation_step_duration: 0.0,
        ..Default::default()
    };
    let result = Ship::build(
        &raft(2, 1, MaterialId(0)),
        &materials,
        &params,
        &mut rng,
    );
    assert!(matches!(result, Err(SeaworthyError::InvalidConfig(_))));
}

#[test]
fn wooden_raft_floats() {
    let materials = MaterialDatabase::with_defaults();
    let params = SimulationParameters::default();
    let mut rng = RandomEngine::seeded(5);
    let mut ship = Ship::build(
        &raft(4, 2, materials.find("oak_wood").unwrap()),
        &materials,
        &params,
        &mut rng,
    )
    .unwrap();
    let bus = EventBus::new();

    for _ in 0..640 {
        ship.update(&params, &FlatSea(0.0), &bus);
    }

    let com = ship.centre_of_mass().unwrap();
    assert!(com.y.is_finite());
    assert!(com.y > -3.0 && com.y < 1.5, "centre of mass at {com}");
    assert_eq!(ship.broken_spring_count(), 0);
}

#[test]
fn iron_raft_sinks() {
    let materials = MaterialDatabase::with_defaults();
    let params = SimulationParameters::default();
    let mut rng = RandomEngine::seeded(5);
    let mut ship = Ship::build(
        &raft(3, 1, materials.find("iron_hull").unwrap()),
        &materials,
        &params,
        &mut rng,
    )
    .unwrap();
    let bus = EventBus::new();

    for _ in 0..640 {
        ship.update(&params, &FlatSea(0.0), &bus);
    }

    assert!(ship.centre_of_mass().unwrap().y < -5.0);
}

#[test]
fn pinned_point_does_not_move() {
    let materials = MaterialDatabase::with_defaults();
    let params = SimulationParameters::default();
    let mut rng = RandomEngine::seeded(5);
    let layer = rope(3, materials.find("hemp_rope").unwrap())
        .placed_at(Vec2::new(0.0, 50.0), 1.0);
    let mut ship = Ship::build(&layer, &materials, &params, &mut rng).unwrap();
    ship.points_mut().set_pinned(PointId(0), true);
    let bus = EventBus::new();

    for _ in 0..64 {
        ship.update(&params, &FlatSea(0.0), &bus);
    }

    assert_eq!(ship.points().position(PointId(0)), Vec2::new(0.0, 50.0));
    assert!(ship.points().position(PointId(2)).y < 50.0);
}

#[test]
fn destroy_point_detaches_springs() {
    let materials = MaterialDatabase::with_defaults();
    let mut rng = RandomEngine::seeded(2);
    let mut ship = Ship::build(
        &raft(3, 3, materials.find("steel_beam").unwrap()),
        &materials,
        &SimulationParameters::default(),
        &mut rng,
    )
    .unwrap();
    let (mut bus, log) = bus_with_log();

    // Centre point of a 3×3 raft has all 8 neighbours
    let centre = PointId(4);
    assert_eq!(ship.points().connected_springs(centre).len(), 8);
    ship.destroy_point(centre, &bus);
    bus.flush();

    assert!(ship.points().is_deleted(centre));
    assert!(ship.points().connected_springs(centre).is_empty());
    assert_eq!(ship.broken_spring_count(), 8);
    assert_eq!(log.count("spring_broken"), 8);
    assert_eq!(log.count("point_destroyed"), 1);
    assert_eq!(ship.points().live().count(), 8);
}

#[test]
fn surface_crossing_displaces_ocean() {
    let materials = MaterialDatabase::with_defaults();
    let params = SimulationParameters::default();
    let mut rng = RandomEngine::seeded(9);
    let layer = raft(1, 1, materials.find("iron_hull").unwrap())
        .placed_at(Vec2::new(10.0, 0.5), 1.0);
    let mut ship = Ship::build(&layer, &materials, &params, &mut rng).unwrap();
    let bus = EventBus::new();

    let mut displacements = Vec::new();
    for _ in 0..64 {
        ship.update(&params, &FlatSea(0.0), &bus);
        displacements.extend(ship.take_ocean_displacements());
    }

    assert!(!displacements.is_empty());
    assert!(displacements[0].dy < 0.0);
    assert!((displacements[0].x - 10.0).abs() < 1e-3);
    assert!(ship.take_ocean_displacements().is_empty());
}

#[test]
fn parameter_change_is_picked_up() {
    let materials = MaterialDatabase::with_defaults();
    let params = SimulationParameters::default();
    let mut rng = RandomEngine::seeded(4);
    let layer = StructureLayer::from_ascii("##", &[('#', materials.find("oak_wood").unwrap())])
        .unwrap()
        .placed_at(Vec2::new(0.0, 100.0), 1.0);
    let mut ship = Ship::build(&layer, &materials, &params, &mut rng).unwrap();
    let bus = EventBus::new();
    let spring = SpringId(0);
    let before = ship.springs().damping(spring);

    let softer = SimulationParameters {
        spring_damping_adjustment: 0.5,
        ..Default::default()
    };
    ship.update(&softer, &FlatSea(0.0), &bus);
    assert!((ship.springs().damping(spring) / before - 0.5).abs() < 1e-5);
}

#[test]
fn stiffness_filters_once_per_step() {
    let materials = MaterialDatabase::with_defaults();
    let params = SimulationParameters::default();
    let mut rng = RandomEngine::seeded(4);
    let layer = StructureLayer::from_ascii("##", &[('#', materials.find("oak_wood").unwrap())])
        .unwrap()
        .placed_at(Vec2::new(0.0, 100.0), 1.0);
    let mut ship = Ship::build(&layer, &materials, &params, &mut rng).unwrap();
    let bus = EventBus::new();
    let spring = SpringId(0);
    let before = ship.springs().stiffness(spring);

    // Parameter change and a thermal write land in the same step
    let stiffer = SimulationParameters {
        spring_stiffness_adjustment: 2.0,
        ..Default::default()
    };
    ship.points_mut().set_temperature(PointId(0), 300.0);
    ship.update(&stiffer, &FlatSea(0.0), &bus);

    let ratio = ship.springs().stiffness(spring) / before;
    assert!((ratio - 1.03).abs() < 1e-4, "ratio {ratio}");

    ship.update(&stiffer, &FlatSea(0.0), &bus);
    let ratio = ship.springs().stiffness(spring) / before;
    assert!((ratio - (1.03 + 0.03 * 0.97)).abs() < 1e-4, "ratio {ratio}");
}
