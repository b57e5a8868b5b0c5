//! Integration tests for the zone geometry core and the zone host
//!
//! These tests validate behavior across crate boundaries: presets loaded as
//! JSON, built into zones, and queried by the rotation and occupancy tracker.

use assert_approx_eq::assert_approx_eq;
use server::config::{default_presets, parse_presets, validate_map_scale, ZoneUseCase};
use server::game::{Player, Team};
use server::host::ZoneHost;
use server::occupancy::{OccupancyEvent, OccupancyTracker};
use server::rotation::{FlatTerrain, ZoneRotation};
use zones::{normalize_spacing, Line, MapScale, Point2, Point3, Zone, ZoneData, ZoneDataError};

fn unscaled(data: ZoneData) -> Zone {
    Zone::new("zone", Point2::new(0.0, 0.0), data, false, MapScale::default())
}

/// GEOMETRY CONTRACT TESTS
mod geometry_tests {
    use super::*;

    #[test]
    fn rectangle_boundary_is_exclusive() {
        let zone = unscaled(ZoneData::rectangle(10.0, 10.0));
        assert!(zone.is_inside(Point2::new(4.999, -4.999)));
        assert!(!zone.is_inside(Point2::new(5.0, 0.0)));
        assert!(!zone.is_inside(Point2::new(0.0, -5.0)));
        assert!(!zone.is_inside(Point2::new(5.0, 5.0)));
    }

    #[test]
    fn circle_boundary_is_inclusive() {
        let zone = unscaled(ZoneData::circle(5.0));
        assert!(zone.is_inside(Point2::new(5.0, 0.0)));
        assert!(zone.is_inside(Point2::new(0.0, -5.0)));
        assert!(zone.is_inside(Point2::new(3.0, 4.0)));
        assert!(!zone.is_inside(Point2::new(3.0, 4.01)));
    }

    #[test]
    fn rectangle_round_trip_from_preset_string() {
        let mut zone = unscaled(ZoneData::new("rectangle", "40,20"));
        assert_eq!(zone.bounds().area, 800.0);

        let spawn = zone.particle_spawn_points(5, 15.0);
        assert_eq!(
            spawn.corners,
            &[
                Point2::new(-20.0, -10.0),
                Point2::new(20.0, -10.0),
                Point2::new(20.0, 10.0),
                Point2::new(-20.0, 10.0),
            ]
        );
        assert_eq!(spawn.center, Point2::new(0.0, 0.0));
    }

    #[test]
    fn polygon_with_odd_coordinates_is_inert() {
        assert_eq!(
            ZoneData::new("polygon", "1,2,3").parse(),
            Err(ZoneDataError::OddCoordinateCount(3))
        );

        let mut zone = unscaled(ZoneData::new("polygon", "1,2,3"));
        assert!(!zone.parsed_successfully());
        assert!(!zone.is_inside(Point2::new(1.0, 2.0)));
        assert_eq!(zone.bounds().area, 0.0);

        let spawn = zone.particle_spawn_points(5, 15.0);
        assert!(spawn.points.is_empty());
        assert!(spawn.corners.is_empty());
    }

    #[test]
    fn spacing_normalizes_to_whole_gaps() {
        assert_approx_eq!(normalize_spacing(100.0, 30.0), 100.0 / 3.0);

        let line = Line::new(Point2::new(0.0, 0.0), Point2::new(100.0, 0.0));
        assert_approx_eq!(line.normalize_spacing(30.0), 100.0 / 3.0);
    }

    #[test]
    fn sample_cache_is_idempotent_and_recomputes_on_revert() {
        let mut zone = unscaled(ZoneData::circle(50.0));

        let first = zone.particle_spawn_points(10, 0.0).points.to_vec();
        assert!(!zone.refresh_samples(10, 0.0));

        let other = zone.particle_spawn_points(0, 20.0).points.to_vec();
        assert_ne!(first, other);

        assert!(zone.refresh_samples(10, 0.0));
        assert_eq!(zone.particle_spawn_points(10, 0.0).points, first.as_slice());
    }

    #[test]
    fn world_positions_use_the_horizontal_plane() {
        let zone = Zone::new(
            "flag",
            Point2::new(100.0, -50.0),
            ZoneData::circle(10.0),
            false,
            MapScale::default(),
        );
        assert!(zone.is_inside(Point3::new(105.0, 900.0, -45.0)));
        assert!(!zone.is_inside(Point3::new(100.0, -50.0, 0.0)));
    }
}

/// PRESET AND ROTATION TESTS
mod rotation_tests {
    use super::*;

    const ROTATION_JSON: &str = r#"[
        {
            "id": 1,
            "name": "North Base",
            "centerX": 0.0,
            "centerZ": -300.0,
            "shapeType": "rectangle",
            "rawShapeParameters": "100,60",
            "useCase": "team1Main"
        },
        {
            "id": 2,
            "name": "South Base",
            "centerX": 0.0,
            "centerZ": 300.0,
            "shapeType": "rectangle",
            "rawShapeParameters": "100,60",
            "useCase": "team2Main"
        },
        {
            "id": 3,
            "name": "Mill",
            "shortName": "M",
            "centerX": 0.0,
            "centerZ": 0.0,
            "shapeType": "Circle",
            "rawShapeParameters": " 40 ",
            "useCase": "flag"
        },
        {
            "id": 4,
            "name": "Broken",
            "centerX": 0.0,
            "centerZ": 0.0,
            "shapeType": "hexagon",
            "rawShapeParameters": "10"
        },
        {
            "id": 5,
            "name": "Ridge",
            "centerX": 0.0,
            "centerZ": 0.0,
            "shapeType": "polygon",
            "rawShapeParameters": "200,0,300,0,300,100,200,100",
            "useMapCoordinates": true,
            "useCase": "flag"
        }
    ]"#;

    fn rotation(scale: MapScale) -> ZoneRotation {
        let presets = parse_presets(ROTATION_JSON).unwrap();
        ZoneRotation::from_presets(&presets, scale)
    }

    #[test]
    fn presets_build_into_zones() {
        let rotation = rotation(MapScale::default());
        assert_eq!(rotation.len(), 5);

        let mill = rotation.find_by_name("m").unwrap();
        assert!(mill.zone().parsed_successfully());
        assert_approx_eq!(mill.zone().bounds().size.x, 80.0);

        let broken = rotation.get(4).unwrap();
        assert!(!broken.zone().parsed_successfully());
        assert_eq!(broken.use_case(), ZoneUseCase::Other);
        assert_eq!(
            broken.preset().data().parse(),
            Err(ZoneDataError::UnknownShape("hexagon".to_string()))
        );
    }

    #[test]
    fn map_coordinates_shrink_with_the_border() {
        let scale = validate_map_scale(1000.0, 100.0).unwrap();
        let mut rotation = rotation(scale);
        let ridge = rotation.get_mut(5).unwrap();

        // multiplier 0.8: x spans 160..240
        assert!(ridge.zone().is_inside(Point2::new(170.0, 40.0)));
        assert!(!ridge.zone().is_inside(Point2::new(250.0, 40.0)));
        assert_approx_eq!(ridge.zone().bounds().area, 6_400.0, 1e-2);

        let inverse = ridge.inverse().unwrap();
        assert!(inverse.is_inverse());
        assert!(inverse.is_inside(Point2::new(250.0, 40.0)));
        assert_approx_eq!(inverse.bounds().area, 10_000.0, 1e-2);
        assert!(inverse.inverse().is_none());
    }

    #[test]
    fn zones_containing_respects_exact_shape() {
        let rotation = rotation(MapScale::default());

        assert_eq!(rotation.zones_containing(Point2::new(0.0, 0.0)), vec![3]);
        assert_eq!(
            rotation.zones_containing(Point3::new(30.0, 5.0, -290.0)),
            vec![1]
        );
        // inside the Mill's bounding square but outside the circle
        let corner = Point2::new(38.0, 38.0);
        assert_eq!(rotation.candidates(corner).count(), 1);
        assert!(rotation.zones_containing(corner).is_empty());
    }

    #[test]
    fn spawn_positions_follow_terrain() {
        let mut rotation = rotation(MapScale::default());
        let mill = rotation.get_mut(3).unwrap();
        let positions = mill.spawn_positions(0, 0.0, &FlatTerrain(7.0));
        assert!(positions.is_empty());

        let positions = mill.spawn_positions(8, 0.0, &FlatTerrain(7.0));
        assert_eq!(positions.len(), 8);
        assert_approx_eq!(positions[0].x, 40.0);
        assert_approx_eq!(positions[0].y, 7.0);
        assert_approx_eq!(positions[0].z, 0.0);
    }
}

/// OCCUPANCY AND HOST TESTS
mod host_tests {
    use super::*;

    #[test]
    fn occupancy_follows_player_movement() {
        let rotation = ZoneRotation::from_presets(&default_presets(), MapScale::default());
        let mut tracker = OccupancyTracker::new();

        let mut attacker = Player::new(1, Team::Team1, Point3::new(-400.0, 0.0, -400.0));
        let defender = Player::new(2, Team::Team2, Point3::new(-150.0, 0.0, 30.0));

        let events = tracker.update(&rotation, [&attacker, &defender]);
        assert_eq!(
            events,
            vec![
                OccupancyEvent::Entered {
                    player_id: 1,
                    zone_id: 1
                },
                OccupancyEvent::Entered {
                    player_id: 2,
                    zone_id: 3
                },
            ]
        );

        attacker.position = Point3::new(-160.0, 0.0, -20.0);
        let events = tracker.update(&rotation, [&attacker, &defender]);
        assert_eq!(
            events,
            vec![
                OccupancyEvent::Left {
                    player_id: 1,
                    zone_id: 1
                },
                OccupancyEvent::Entered {
                    player_id: 1,
                    zone_id: 3
                },
            ]
        );

        let crossroads = tracker.occupancy(3).unwrap();
        assert!(crossroads.is_contested());
        assert_eq!(crossroads.leading_team(), None);
        assert_eq!(tracker.zones_of_player(1), vec![3]);
    }

    #[test]
    fn host_keeps_players_in_the_world() {
        let rotation = ZoneRotation::from_presets(&default_presets(), MapScale::default());
        let mut host = ZoneHost::new(rotation, 2024);
        host.spawn_players(6);

        for _ in 0..100 {
            host.tick();
        }

        let world = host.game_state().world();
        assert_eq!(host.game_state().tick, 100);
        for player in host.game_state().players.values() {
            assert!(world.contains(player.planar_position()));
        }
    }

    #[test]
    fn same_seed_gives_same_events() {
        let run = |seed: u64| {
            let rotation = ZoneRotation::from_presets(&default_presets(), MapScale::default());
            let mut host = ZoneHost::new(rotation, seed);
            host.spawn_players(4);
            (0..50).flat_map(|_| host.tick()).collect::<Vec<_>>()
        };
        assert_eq!(run(9), run(9));
    }

    #[tokio::test]
    async fn run_loop_honors_tick_limit() {
        let rotation = ZoneRotation::from_presets(&default_presets(), MapScale::default());
        let mut host = ZoneHost::new(rotation, 1);
        host.spawn_players(2);

        host.run(tokio::time::Duration::from_millis(2), 3).await;
        assert_eq!(host.game_state().tick, 3);
    }
}
