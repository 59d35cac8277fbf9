use bevy::prelude::*;
use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowResolution;

use crate::error::{Result, SimError};
use crate::simulation::scenario::{Mode, Scenario};
use crate::simulation::states::Trajectory;

/// Window edge length in pixels (square window)
const WINDOW_SIZE: f32 = 600.0;

/// Fraction of the half-window a fitted trajectory may use
const FIT_MARGIN: f32 = 0.9;

/// Axis half-range of the animation, in meters
const ANIMATION_LIMIT: f64 = 1.2e10;

/// Drawn radius of the black hole disc in the animation, in meters
const HORIZON_RADIUS: f64 = 2e9;

/// Seconds between animation frames
const FRAME_INTERVAL: f32 = 0.02;

/// Screen radius of the black-hole marker on the static plots
const MARKER_RADIUS: f32 = 8.0;

const PARTICLE_RADIUS: f32 = 4.0;

#[derive(Component)]
struct Particle;

/// Screen-space copy of a trajectory plus the scale used to build it
#[derive(Resource)]
struct TrajectoryView {
    mode: Mode,
    points: Vec<Option<Vec2>>, // None where the sample is non-finite
    scale: f64,                // pixels per meter
}

impl TrajectoryView {
    fn new(mode: Mode, trajectory: &Trajectory) -> Self {
        let half_window = 0.5 * WINDOW_SIZE as f64;

        // Fixed limits for the animation, otherwise fit around the origin
        let scale = if mode.is_animated() {
            half_window / ANIMATION_LIMIT
        } else {
            match trajectory.bounds().map(|b| b.half_extent()) {
                Some(extent) if extent > 0.0 => FIT_MARGIN as f64 * half_window / extent,
                _ => 1.0,
            }
        };

        let points = trajectory
            .iter()
            .map(|p| {
                let s = Vec2::new((p.x * scale) as f32, (p.y * scale) as f32);
                s.is_finite().then_some(s)
            })
            .collect();

        Self { mode, points, scale }
    }
}

/// Frame cursor for the animated replay
#[derive(Resource)]
struct Playback {
    timer: Timer,
    frame: usize,
}

/// Open a window for one precomputed trajectory and block until it closes
pub fn run_2d(scenario: &Scenario, trajectory: &Trajectory) -> Result<()> {
    info!("run_2d: opening {} viewer with {} points", scenario.mode, trajectory.len());

    let animated = scenario.mode.is_animated();
    let background = if animated { Color::BLACK } else { Color::WHITE };

    let mut app = App::new();
    app.insert_resource(ClearColor(background))
        .insert_resource(TrajectoryView::new(scenario.mode, trajectory))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: scenario.mode.title().to_string(),
                        resolution: WindowResolution::new(WINDOW_SIZE, WINDOW_SIZE),
                        resizable: false,
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                // the binary already installed a tracing subscriber
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_view_system);

    if animated {
        app.insert_resource(Playback {
            timer: Timer::from_seconds(FRAME_INTERVAL, TimerMode::Repeating),
            frame: 0,
        })
        .add_systems(Update, playback_system);
    } else {
        app.add_systems(Update, draw_trajectory_system);
    }

    let exit = app.run();
    if exit.is_error() {
        return Err(SimError::Viewer(format!("{} viewer exited with {:?}", scenario.mode, exit)));
    }
    Ok(())
}

fn setup_view_system(mut commands: Commands, view: Res<TrajectoryView>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    if view.mode.is_animated() {
        // Black hole drawn to scale
        let horizon = (HORIZON_RADIUS * view.scale) as f32;
        commands.spawn(MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(horizon))),
            material: materials.add(ColorMaterial::from(Color::srgb(0.5, 0.5, 0.5))),
            transform: Transform::from_xyz(0.0, 0.0, 0.0),
            ..Default::default()
        });

        let start = view.points.first().copied().flatten().unwrap_or(Vec2::ZERO);
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(PARTICLE_RADIUS))),
                material: materials.add(ColorMaterial::from(Color::srgb(0.0, 1.0, 1.0))),
                transform: Transform::from_xyz(start.x, start.y, 1.0),
                ..Default::default()
            },
            Particle,
        ));
    } else {
        // Fixed-size marker at the origin
        commands.spawn(MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(MARKER_RADIUS))),
            material: materials.add(ColorMaterial::from(Color::BLACK)),
            transform: Transform::from_xyz(0.0, 0.0, 1.0),
            ..Default::default()
        });
    }
}

fn draw_trajectory_system(mut gizmos: Gizmos, view: Res<TrajectoryView>) {
    let color = match view.mode {
        Mode::Relativistic => Color::srgb(1.0, 0.65, 0.0),
        _ => Color::srgb(0.0, 0.8, 0.8),
    };

    // Break the curve wherever a sample is non-finite
    let mut segment: Vec<Vec2> = Vec::new();
    for p in &view.points {
        match p {
            Some(p) => segment.push(*p),
            None if !segment.is_empty() => {
                gizmos.linestrip_2d(segment.drain(..), color);
            }
            None => {}
        }
    }
    if !segment.is_empty() {
        gizmos.linestrip_2d(segment, color);
    }
}

fn playback_system(time: Res<Time>, view: Res<TrajectoryView>, mut playback: ResMut<Playback>, mut query: Query<(&mut Transform, &mut Visibility), With<Particle>>) {
    // Plays once and holds the last frame
    if playback.frame + 1 >= view.points.len() {
        return;
    }

    playback.timer.tick(time.delta());
    if !playback.timer.just_finished() {
        return;
    }
    playback.frame += 1;

    let point = view.points[playback.frame];
    for (mut transform, mut visibility) in &mut query {
        match point {
            Some(p) => {
                transform.translation.x = p.x;
                transform.translation.y = p.y;
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::NVec2;

    fn trajectory(points: &[(f64, f64)]) -> Trajectory {
        points.iter().map(|&(x, y)| NVec2::new(x, y)).collect()
    }

    #[test]
    fn animation_uses_fixed_limits() {
        let traj = trajectory(&[(1.2e10, 0.0), (0.0, -1.2e10), (3e9, 0.0)]);
        let view = TrajectoryView::new(Mode::NewtonianAnimated, &traj);

        let edge = 0.5 * WINDOW_SIZE;
        assert_eq!(view.scale, edge as f64 / ANIMATION_LIMIT);
        assert!((view.points[0].unwrap().x - edge).abs() < 1e-3);
        assert!((view.points[1].unwrap().y + edge).abs() < 1e-3);
        assert!((view.points[2].unwrap().x - 75.0).abs() < 1e-3);
    }

    #[test]
    fn static_views_fit_the_largest_coordinate() {
        let traj = trajectory(&[(5e9, 3e9), (-2e10, 1e10), (1e9, -4e9)]);
        let fitted = FIT_MARGIN * 0.5 * WINDOW_SIZE;

        for mode in [Mode::NewtonianStatic, Mode::Relativistic] {
            let view = TrajectoryView::new(mode, &traj);
            let p = view.points[1].unwrap();
            assert!((p.x + fitted).abs() < 1e-3, "{}: x = {}", mode, p.x);
            // same scale on both axes
            assert!((p.y - 0.5 * fitted).abs() < 1e-3, "{}: y = {}", mode, p.y);
        }
    }

    #[test]
    fn non_finite_samples_are_dropped() {
        let traj = trajectory(&[(1e10, 0.0), (f64::NAN, 0.0), (0.0, f64::INFINITY), (f64::NEG_INFINITY, 1.0), (0.0, 1e10)]);
        let view = TrajectoryView::new(Mode::NewtonianStatic, &traj);

        assert_eq!(view.points.len(), 5);
        assert!(view.points[0].is_some());
        assert!(view.points[1].is_none());
        assert!(view.points[2].is_none());
        assert!(view.points[3].is_none());
        assert!(view.points[4].is_some());

        // the extent ignores the non-finite samples
        let fitted = FIT_MARGIN * 0.5 * WINDOW_SIZE;
        assert!((view.points[0].unwrap().x - fitted).abs() < 1e-3);
    }

    #[test]
    fn empty_trajectory_keeps_unit_scale() {
        let view = TrajectoryView::new(Mode::Relativistic, &Trajectory::default());
        assert!(view.points.is_empty());
        assert_eq!(view.scale, 1.0);
    }
}
