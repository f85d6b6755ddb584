#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use approx::assert_abs_diff_eq;
    use glam::{Quat, Vec3};

    use warden_core::constants::*;
    use warden_core::enums::{AgentState, BodyTag, DestinationSource, TurnDirection};
    use warden_core::events::AgentEvent;
    use warden_core::types::EntityId;

    use crate::agent::{AgentController, AgentSettings};
    use crate::collaborators::*;
    use crate::engagement::{evaluate, FireCooldown};
    use crate::geometry::{rotation_from_yaw, yaw_degrees};
    use crate::locomotion::{plan_turn, FacingSkip, LocomotionController, TurnOutcome};
    use crate::navigator::{Advance, NavigationMode, Navigator};
    use crate::perception::{fov_check, perceive, FovCheck, Perception, Sighting};

    const SELF_ID: EntityId = EntityId(1);
    const TARGET_ID: EntityId = EntityId(2);
    const WALL_ID: EntityId = EntityId(3);
    const PROJECTILE_ID: EntityId = EntityId(4);

    // --- Host mocks ---

    struct ScriptedTrace {
        hits: Vec<TraceHit>,
        calls: Cell<usize>,
    }

    impl ScriptedTrace {
        fn new(hits: Vec<TraceHit>) -> Self {
            Self {
                hits,
                calls: Cell::new(0),
            }
        }
    }

    impl LineTrace for ScriptedTrace {
        fn trace(&self, _origin: Vec3, _dir: Vec3, _max: f32, _mask: u32) -> Vec<TraceHit> {
            self.calls.set(self.calls.get() + 1);
            self.hits.clone()
        }
    }

    struct MockFacing {
        position: Vec3,
        rotation: Quat,
        head_target: Option<Vec3>,
    }

    impl MockFacing {
        fn at(position: Vec3, yaw: f32) -> Self {
            Self {
                position,
                rotation: rotation_from_yaw(yaw),
                head_target: None,
            }
        }
    }

    impl FacingController for MockFacing {
        fn position(&self) -> Vec3 {
            self.position
        }
        fn rotation(&self) -> Quat {
            self.rotation
        }
        fn yaw(&mut self, degrees: f32) {
            self.rotation = Quat::from_rotation_y(degrees.to_radians()) * self.rotation;
        }
        fn look_head_at(&mut self, point: Vec3) {
            self.head_target = Some(point);
        }
    }

    #[derive(Default)]
    struct MockBody {
        velocity: Vec3,
    }

    impl PhysicsBody for MockBody {
        fn linear_velocity(&self) -> Vec3 {
            self.velocity
        }
        fn set_linear_velocity(&mut self, velocity: Vec3) {
            self.velocity = velocity;
        }
    }

    #[derive(Default)]
    struct MockAnimation {
        playing: bool,
        speed: f32,
    }

    impl AnimationDriver for MockAnimation {
        fn play_walk(&mut self, _fade_secs: f32) {
            self.playing = true;
        }
        fn stop_walk(&mut self) {
            self.playing = false;
        }
        fn set_walk_speed(&mut self, speed: f32) {
            self.speed = speed;
        }
    }

    fn hit(entity: EntityId, tag: BodyTag, distance: f32) -> TraceHit {
        TraceHit {
            entity,
            tag,
            point: Vec3::new(0.0, EYE_HEIGHT, distance),
            normal: -Vec3::Z,
            distance,
        }
    }

    fn target_at(position: Vec3) -> TargetView {
        TargetView {
            id: TARGET_ID,
            position,
        }
    }

    fn stationary_agent() -> AgentController {
        let navigator = Navigator::new(NavigationMode::Stationary, Vec3::ZERO, 0);
        AgentController::new(SELF_ID, AgentSettings::default(), navigator)
    }

    // --- Navigator ---

    #[test]
    fn test_wander_destination_within_range() {
        let start = Vec3::new(3.0, 0.5, -2.0);
        let mut nav = Navigator::new(NavigationMode::Wander, start, 7);

        let mut agent_pos = start;
        for _ in 0..50 {
            let dest = nav.current_destination().unwrap();
            agent_pos = Vec3::new(dest.position.x, agent_pos.y, dest.position.z);
            let Advance::Arrived { next: Some(next) } = nav.advance(agent_pos, false) else {
                panic!("standing on the destination must count as arrival");
            };
            assert_eq!(next.source, DestinationSource::Wander);
            let offset = next.position - agent_pos;
            assert!(offset.x.abs() <= WANDER_RANGE, "x offset {}", offset.x);
            assert!(offset.z.abs() <= WANDER_RANGE, "z offset {}", offset.z);
            assert_eq!(next.position.y, agent_pos.y);
        }
    }

    #[test]
    fn test_wander_same_seed_same_destinations() {
        let mut a = Navigator::new(NavigationMode::Wander, Vec3::ZERO, 99);
        let mut b = Navigator::new(NavigationMode::Wander, Vec3::ZERO, 99);
        for _ in 0..10 {
            assert_eq!(a.current_destination(), b.current_destination());
            let pos = a.current_destination().unwrap().position;
            a.advance(pos, false);
            b.advance(pos, false);
        }
    }

    #[test]
    fn test_path_cursor_wraps() {
        let waypoints = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 10.0),
        ];
        let mut nav = Navigator::new(NavigationMode::FixedPath(waypoints.clone()), Vec3::ZERO, 0);
        assert_eq!(nav.cursor(), Some(0));

        let mut visited = Vec::new();
        for _ in 0..5 {
            let cursor = nav.cursor().unwrap();
            nav.advance(waypoints[cursor], false);
            visited.push(nav.cursor().unwrap());
        }
        assert_eq!(visited, vec![1, 2, 0, 1, 2]);
        assert_eq!(
            nav.current_destination().unwrap().source,
            DestinationSource::PathNode(2)
        );
    }

    #[test]
    fn test_path_not_reached_stays_en_route() {
        let waypoints = vec![Vec3::new(0.0, 0.0, 5.0), Vec3::new(5.0, 0.0, 5.0)];
        let mut nav = Navigator::new(NavigationMode::FixedPath(waypoints), Vec3::ZERO, 0);
        match nav.advance(Vec3::new(0.0, 0.0, 3.9), false) {
            Advance::EnRoute { remaining } => assert_abs_diff_eq!(remaining, 1.1, epsilon = 1e-4),
            other => panic!("expected EnRoute, got {other:?}"),
        }
        assert_eq!(nav.cursor(), Some(0));
    }

    #[test]
    fn test_arrival_suspended_while_chasing() {
        let mut nav = Navigator::new(NavigationMode::Wander, Vec3::ZERO, 3);
        let dest = nav.current_destination().unwrap();
        assert_eq!(nav.advance(dest.position, true), Advance::Suspended);
        assert_eq!(nav.current_destination(), Some(dest));
    }

    #[test]
    fn test_path_resumes_after_chase() {
        let waypoints = vec![Vec3::new(0.0, 0.0, 20.0), Vec3::new(20.0, 0.0, 20.0)];
        let mut nav = Navigator::new(NavigationMode::FixedPath(waypoints), Vec3::ZERO, 0);
        let chase_point = Vec3::new(-4.0, 0.0, 4.0);
        nav.override_destination(chase_point);

        let advance = nav.advance(chase_point, false);
        let Advance::Arrived { next: Some(next) } = advance else {
            panic!("expected arrival at the chase point, got {advance:?}");
        };
        assert_eq!(next.source, DestinationSource::PathNode(0));
        assert_eq!(nav.cursor(), Some(0));
    }

    #[test]
    fn test_stationary_idles_and_drops_chase_point() {
        let mut nav = Navigator::new(NavigationMode::Stationary, Vec3::ZERO, 0);
        assert!(nav.current_destination().is_none());
        assert_eq!(nav.advance(Vec3::ZERO, false), Advance::Idle);

        nav.override_destination(Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(nav.advance(Vec3::ZERO, false), Advance::Arrived { next: None });
        assert!(nav.current_destination().is_none());
    }

    #[test]
    fn test_empty_path_degrades_to_stationary() {
        let nav = Navigator::new(NavigationMode::FixedPath(Vec::new()), Vec3::ZERO, 0);
        assert_eq!(nav.mode(), &NavigationMode::Stationary);
        assert!(nav.current_destination().is_none());
        assert!(nav.cursor().is_none());
    }

    // --- Locomotion ---

    #[test]
    fn test_turn_takes_shorter_direction() {
        // 10 -> 200 is a 190 degree difference: turn right.
        let plan = plan_turn(10.0, 200.0, 2.0).unwrap();
        assert_eq!(plan.direction, TurnDirection::Right);
        assert_abs_diff_eq!(plan.delta_degrees, -2.0, epsilon = 1e-5);

        let plan = plan_turn(10.0, 100.0, 2.0).unwrap();
        assert_eq!(plan.direction, TurnDirection::Left);
        assert_abs_diff_eq!(plan.delta_degrees, 2.0, epsilon = 1e-5);

        // Wraps across zero.
        let plan = plan_turn(350.0, 20.0, 2.0).unwrap();
        assert_eq!(plan.direction, TurnDirection::Left);
    }

    #[test]
    fn test_turn_dead_zone() {
        assert!(plan_turn(45.0, 45.0, 2.0).is_none());
        assert!(plan_turn(45.0, 45.5, 2.0).is_none());
        assert!(plan_turn(45.0, 44.5, 2.0).is_none());
        assert!(plan_turn(0.0, 1.5, 2.0).is_some());
    }

    #[test]
    fn test_turn_exactly_opposite_turns_left() {
        let plan = plan_turn(0.0, 180.0, 2.0).unwrap();
        assert_eq!(plan.direction, TurnDirection::Left);
    }

    #[test]
    fn test_turn_step_clamped_to_remaining() {
        let plan = plan_turn(0.0, 1.5, 2.0).unwrap();
        assert_abs_diff_eq!(plan.delta_degrees, 1.5, epsilon = 1e-5);
        let plan = plan_turn(0.0, 358.0, 5.0).unwrap();
        assert_abs_diff_eq!(plan.delta_degrees, -2.0, epsilon = 1e-4);
    }

    #[test]
    fn test_max_turn_step_frame_rate_fallback() {
        let loco = LocomotionController::default();
        assert_abs_diff_eq!(loco.max_turn_step(1.0 / 60.0, None), 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(loco.max_turn_step(1.0 / 60.0, Some(0)), 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(loco.max_turn_step(1.0 / 30.0, Some(30)), 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(loco.max_turn_step(1.0 / 60.0, Some(120)), 4.0, epsilon = 1e-5);
    }

    #[test]
    fn test_turn_toward_converges_without_overshoot() {
        let loco = LocomotionController::default();
        let mut facing = MockFacing::at(Vec3::ZERO, 0.0);
        let point = Vec3::new(10.0, 0.0, 0.0); // yaw 90

        let mut turned = 0;
        loop {
            match loco.turn_toward(&mut facing, point, DT, None) {
                TurnOutcome::Turned(plan) => {
                    assert_eq!(plan.direction, TurnDirection::Left);
                    turned += 1;
                    assert!(turned < 100, "turn did not converge");
                }
                TurnOutcome::Facing => break,
                TurnOutcome::Skipped(skip) => panic!("unexpected skip {skip:?}"),
            }
        }
        let yaw = yaw_degrees(facing.rotation);
        assert!((yaw - 90.0).abs() < TURN_DEAD_ZONE_DEGREES, "yaw {yaw}");
    }

    #[test]
    fn test_turn_toward_degenerate_skips() {
        let loco = LocomotionController::default();
        let mut facing = MockFacing::at(Vec3::new(1.0, 0.0, 1.0), 30.0);
        let before = facing.rotation;

        assert_eq!(
            loco.turn_toward(&mut facing, Vec3::new(1.0, 0.0, 1.0), DT, None),
            TurnOutcome::Skipped(FacingSkip::CoincidentTarget)
        );
        assert_eq!(
            loco.turn_toward(&mut facing, Vec3::new(1.0, 5.0, 1.0), DT, None),
            TurnOutcome::Skipped(FacingSkip::VerticalTarget)
        );
        assert_eq!(facing.rotation, before);
    }

    #[test]
    fn test_drive_forward_and_halt() {
        let loco = LocomotionController::default();
        let mut body = MockBody {
            velocity: Vec3::new(0.0, -2.0, 0.0),
        };

        let v = loco.drive(&mut body, rotation_from_yaw(90.0), true);
        assert_abs_diff_eq!(v.x, MOVE_FORCE, epsilon = 1e-5);
        assert_abs_diff_eq!(v.z, 0.0, epsilon = 1e-5);
        assert_eq!(v.y, -2.0);
        assert_eq!(body.velocity, v);

        let v = loco.drive(&mut body, rotation_from_yaw(90.0), false);
        assert_eq!(v, Vec3::new(0.0, -2.0, 0.0));
    }

    // --- Perception ---

    #[test]
    fn test_fov_gate_boundary() {
        let at = |deg: f32| Vec3::new(deg.to_radians().sin(), 0.0, deg.to_radians().cos()) * 10.0;

        assert!(matches!(fov_check(Vec3::Z, Vec3::ZERO, at(44.0), 90.0), FovCheck::Inside(_)));
        assert!(matches!(fov_check(Vec3::Z, Vec3::ZERO, at(46.0), 90.0), FovCheck::Outside(_)));
        assert!(matches!(fov_check(Vec3::Z, Vec3::ZERO, at(-44.0), 90.0), FovCheck::Inside(_)));
        assert!(matches!(fov_check(Vec3::ZERO, Vec3::ZERO, at(0.0), 90.0), FovCheck::Degenerate));
    }

    #[test]
    fn test_outside_fov_performs_no_trace() {
        let tracer = ScriptedTrace::new(vec![hit(TARGET_ID, BodyTag::Player, 10.0)]);
        let off = 46.0_f32.to_radians();
        let target = target_at(Vec3::new(off.sin(), 0.0, off.cos()) * 10.0);

        let result = perceive(SELF_ID, Vec3::ZERO, Vec3::Z, Some(&target), 90.0, &tracer);
        assert!(matches!(result, Perception::OutsideFov { .. }));
        assert_eq!(tracer.calls.get(), 0);

        let off = 44.0_f32.to_radians();
        let target = target_at(Vec3::new(off.sin(), 0.0, off.cos()) * 10.0);
        let result = perceive(SELF_ID, Vec3::ZERO, Vec3::Z, Some(&target), 90.0, &tracer);
        assert!(result.target_seen());
        assert_eq!(tracer.calls.get(), 1);
    }

    #[test]
    fn test_zero_forward_is_never_visible() {
        let tracer = ScriptedTrace::new(vec![hit(TARGET_ID, BodyTag::Player, 5.0)]);
        let target = target_at(Vec3::new(0.0, 0.0, 5.0));
        let result = perceive(SELF_ID, Vec3::ZERO, Vec3::ZERO, Some(&target), 90.0, &tracer);
        assert_eq!(result, Perception::DegenerateFacing);
        assert_eq!(tracer.calls.get(), 0);
    }

    #[test]
    fn test_missing_target_skips_perception() {
        let tracer = ScriptedTrace::new(Vec::new());
        let result = perceive(SELF_ID, Vec3::ZERO, Vec3::Z, None, 90.0, &tracer);
        assert_eq!(result, Perception::NoTarget);
        assert_eq!(tracer.calls.get(), 0);
    }

    #[test]
    fn test_trace_scan_skips_self_and_projectiles() {
        let tracer = ScriptedTrace::new(vec![
            hit(SELF_ID, BodyTag::Agent, 0.0),
            hit(PROJECTILE_ID, BodyTag::Projectile, 1.0),
            hit(WALL_ID, BodyTag::Obstacle, 3.0),
            hit(TARGET_ID, BodyTag::Player, 8.0),
        ]);
        let target = target_at(Vec3::new(0.0, 0.0, 8.0));
        let result = perceive(SELF_ID, Vec3::ZERO, Vec3::Z, Some(&target), 90.0, &tracer);
        let Perception::Traced(Sighting::Obstructed { entity, .. }) = result else {
            panic!("expected obstruction, got {result:?}");
        };
        assert_eq!(entity, WALL_ID);

        let chasing = AgentState::Chasing {
            last_seen: Vec3::new(0.0, 0.0, 8.0),
        };
        let update = evaluate(chasing, &result, &FireCooldown::default());
        assert_eq!(update.new_state, AgentState::Patrol);
        assert!(update.state_changed);
        assert!(!update.fire);
    }

    #[test]
    fn test_target_sighting_pins_to_ground() {
        let tracer = ScriptedTrace::new(vec![
            hit(PROJECTILE_ID, BodyTag::Projectile, 0.5),
            hit(TARGET_ID, BodyTag::Player, 6.0),
        ]);
        let target = target_at(Vec3::new(0.0, 1.7, 6.0));
        let result = perceive(SELF_ID, Vec3::ZERO, Vec3::Z, Some(&target), 90.0, &tracer);
        assert_eq!(
            result,
            Perception::Traced(Sighting::Target {
                position: Vec3::new(0.0, GROUND_HEIGHT, 6.0)
            })
        );
    }

    #[test]
    fn test_clear_trace_keeps_state() {
        let tracer = ScriptedTrace::new(vec![hit(SELF_ID, BodyTag::Agent, 0.0)]);
        let target = target_at(Vec3::new(0.0, 0.0, 30.0));
        let result = perceive(SELF_ID, Vec3::ZERO, Vec3::Z, Some(&target), 90.0, &tracer);
        assert_eq!(result, Perception::Traced(Sighting::Clear));

        let update = evaluate(AgentState::Patrol, &result, &FireCooldown::default());
        assert_eq!(update.new_state, AgentState::Patrol);
        assert!(!update.state_changed);
    }

    // --- Engagement ---

    #[test]
    fn test_cooldown_counts_down_and_saturates() {
        let mut cooldown = FireCooldown::default();
        assert!(cooldown.is_ready());
        cooldown.arm();
        assert_eq!(cooldown.remaining(), FIRE_COOLDOWN_TICKS);
        for _ in 0..FIRE_COOLDOWN_TICKS + 5 {
            cooldown.tick();
        }
        assert!(cooldown.is_ready());
        assert_eq!(cooldown.remaining(), 0);
    }

    #[test]
    fn test_ragdoll_is_terminal() {
        let seen = Perception::Traced(Sighting::Target {
            position: Vec3::ZERO,
        });
        let update = evaluate(AgentState::Ragdoll, &seen, &FireCooldown::default());
        assert_eq!(update.new_state, AgentState::Ragdoll);
        assert!(!update.fire);
    }

    // --- Agent controller ---

    #[test]
    fn test_fire_gated_by_cooldown() {
        let mut agent = stationary_agent();
        let tracer = ScriptedTrace::new(vec![hit(TARGET_ID, BodyTag::Player, 10.0)]);
        let target = target_at(Vec3::new(0.0, 0.0, 10.0));

        let mut fired_on = Vec::new();
        for frame in 0..=FIRE_COOLDOWN_TICKS + 1 {
            let report = agent.on_frame(Vec3::ZERO, Quat::IDENTITY, Some(target), &tracer);
            if report.fire.is_some() {
                fired_on.push(frame);
            }
        }
        assert_eq!(fired_on, vec![0, FIRE_COOLDOWN_TICKS]);
    }

    #[test]
    fn test_sighting_starts_chase_and_fires() {
        let mut agent = stationary_agent();
        let tracer = ScriptedTrace::new(vec![hit(TARGET_ID, BodyTag::Player, 10.0)]);
        let target = target_at(Vec3::new(0.0, 0.0, 10.0));

        let report = agent.on_frame(Vec3::ZERO, Quat::IDENTITY, Some(target), &tracer);
        let last_seen = Vec3::new(0.0, 0.0, 10.0);
        assert_eq!(agent.state(), AgentState::Chasing { last_seen });
        assert_eq!(agent.destination().unwrap().position, last_seen);
        assert_eq!(
            agent.destination().unwrap().source,
            DestinationSource::ChaseOverride
        );
        assert_eq!(agent.cooldown().remaining(), FIRE_COOLDOWN_TICKS);

        let fire = report.fire.unwrap();
        assert_abs_diff_eq!(fire.origin.y, EYE_HEIGHT, epsilon = 1e-6);
        assert!(matches!(report.events[0], AgentEvent::StateChanged { .. }));
        assert!(matches!(report.events[1], AgentEvent::Fired { agent, .. } if agent == SELF_ID));
    }

    #[test]
    fn test_non_hostile_never_perceives() {
        let navigator = Navigator::new(NavigationMode::Stationary, Vec3::ZERO, 0);
        let settings = AgentSettings {
            hostile: false,
            ..AgentSettings::default()
        };
        let mut agent = AgentController::new(SELF_ID, settings, navigator);
        let tracer = ScriptedTrace::new(vec![hit(TARGET_ID, BodyTag::Player, 10.0)]);
        let target = target_at(Vec3::new(0.0, 0.0, 10.0));

        let report = agent.on_frame(Vec3::ZERO, Quat::IDENTITY, Some(target), &tracer);
        assert!(report.perception.is_none());
        assert!(report.fire.is_none());
        assert_eq!(tracer.calls.get(), 0);
        assert_eq!(agent.state(), AgentState::Patrol);
    }

    #[test]
    fn test_missing_body_ragdolls_and_stops_commands() {
        let mut agent = stationary_agent();
        let mut facing = MockFacing::at(Vec3::ZERO, 0.0);

        let report = agent.on_physics_tick::<_, MockBody, MockAnimation>(
            DT, None, &mut facing, None, None,
        );
        assert_eq!(agent.state(), AgentState::Ragdoll);
        assert!(report
            .events
            .iter()
            .any(|e| matches!(e, AgentEvent::Ragdolled { agent } if *agent == SELF_ID)));

        let tracer = ScriptedTrace::new(vec![hit(TARGET_ID, BodyTag::Player, 10.0)]);
        let target = target_at(Vec3::new(0.0, 0.0, 10.0));
        let frame = agent.on_frame(Vec3::ZERO, Quat::IDENTITY, Some(target), &tracer);
        assert!(frame.fire.is_none());
        assert!(frame.events.is_empty());
        assert_eq!(tracer.calls.get(), 0);

        let mut body = MockBody::default();
        let tick = agent.on_physics_tick::<_, _, MockAnimation>(
            DT,
            None,
            &mut facing,
            Some(&mut body),
            None,
        );
        assert!(tick.velocity.is_none());
        assert!(tick.events.is_empty());
        assert!(agent.go_limp().is_empty());
    }

    #[test]
    fn test_physics_tick_turns_and_drives_toward_waypoint() {
        let waypoint = Vec3::new(10.0, 0.0, 0.0);
        let navigator = Navigator::new(NavigationMode::FixedPath(vec![waypoint]), Vec3::ZERO, 0);
        let mut agent = AgentController::new(SELF_ID, AgentSettings::default(), navigator);
        let mut facing = MockFacing::at(Vec3::ZERO, 0.0);
        let mut body = MockBody::default();
        let mut anim = MockAnimation::default();

        let report =
            agent.on_physics_tick(DT, None, &mut facing, Some(&mut body), Some(&mut anim));
        match report.turn {
            Some(TurnOutcome::Turned(plan)) => {
                assert_eq!(plan.direction, TurnDirection::Left);
                assert_abs_diff_eq!(plan.delta_degrees, TURN_SPEED, epsilon = 1e-4);
            }
            other => panic!("expected a turn, got {other:?}"),
        }
        assert_abs_diff_eq!(yaw_degrees(facing.rotation), TURN_SPEED, epsilon = 1e-3);
        assert_eq!(facing.head_target, Some(waypoint));
        assert_abs_diff_eq!(body.velocity.length(), MOVE_FORCE, epsilon = 1e-4);
        // Not grounded yet.
        assert!(!anim.playing);
    }

    #[test]
    fn test_walk_animation_needs_ground_contact() {
        let waypoint = Vec3::new(0.0, 0.0, 10.0);
        let navigator = Navigator::new(NavigationMode::FixedPath(vec![waypoint]), Vec3::ZERO, 0);
        let mut agent = AgentController::new(SELF_ID, AgentSettings::default(), navigator);
        let mut facing = MockFacing::at(Vec3::ZERO, 0.0);
        let mut body = MockBody {
            velocity: Vec3::new(0.0, 0.0, MOVE_FORCE),
        };
        let mut anim = MockAnimation::default();

        let ground = CollisionNotification {
            other: None,
            contacts: vec![ContactPoint {
                position: Vec3::ZERO,
                normal: Vec3::Y,
            }],
        };
        agent.on_collision(&ground, facing.position);
        assert!(agent.is_grounded());

        agent.on_physics_tick(DT, None, &mut facing, Some(&mut body), Some(&mut anim));
        assert!(anim.playing);
        assert_abs_diff_eq!(anim.speed, MOVE_FORCE * WALK_ANIMATION_SPEED_FACTOR, epsilon = 1e-5);
        assert!(!agent.is_grounded(), "grounded must be re-established each tick");

        agent.on_physics_tick(DT, None, &mut facing, Some(&mut body), Some(&mut anim));
        assert!(!anim.playing);
    }

    #[test]
    fn test_ground_contact_filter() {
        let mut agent = stationary_agent();
        let body_position = Vec3::new(0.0, 2.0, 0.0);

        let wall = CollisionNotification {
            other: Some(WALL_ID),
            contacts: vec![ContactPoint {
                position: Vec3::new(0.5, 2.5, 0.0),
                normal: Vec3::new(-1.0, 0.0, 0.0),
            }],
        };
        agent.on_collision(&wall, body_position);
        assert!(!agent.is_grounded());

        let too_low = CollisionNotification {
            other: None,
            contacts: vec![ContactPoint {
                position: Vec3::new(0.0, 0.5, 0.0),
                normal: Vec3::Y,
            }],
        };
        agent.on_collision(&too_low, body_position);
        assert!(!agent.is_grounded());

        let floor = CollisionNotification {
            other: None,
            contacts: vec![ContactPoint {
                position: Vec3::new(0.0, 1.9, 0.0),
                normal: Vec3::new(0.0, 0.8, 0.6),
            }],
        };
        agent.on_collision(&floor, body_position);
        assert!(agent.is_grounded());
    }
}
