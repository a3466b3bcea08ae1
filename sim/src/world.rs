//! Shared simulation world.
//!
//! Owns every live droplet and particle by value and steps them once
//! per frame. Droplets never own the particles they spawn; splash
//! emission appends into the world's particle collection, and the world
//! alone decides removal timing.

use bevy::prelude::*;
use bevy_log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::constants::{SPAWN_HALF_EXTENT, SPAWN_HEIGHT, SPAWN_VELOCITY};
use crate::droplet::Droplet;
use crate::particle::Particle;
use crate::splash::SplashConfig;

/// Simulation world resource.
#[derive(Resource)]
pub struct SplashWorld {
    droplets: Vec<Droplet>,
    particles: Vec<Particle>,
    rng: StdRng,
    spawn_timer: f32,
}

impl SplashWorld {
    /// Create a world seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a deterministic world for tests and replayable runs.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            droplets: Vec::new(),
            particles: Vec::new(),
            rng,
            spawn_timer: 0.0,
        }
    }

    /// Spawn a droplet with explicit initial state.
    pub fn spawn_droplet(&mut self, position: Vec3, velocity: Vec3, size: f32) {
        self.droplets.push(Droplet::new(position, velocity, size));
    }

    /// Spawn a droplet at rest at a random point of the spawn area.
    fn spawn_random_droplet(&mut self, size: f32, log_events: bool) {
        let x = self.rng.gen_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT);
        let z = self.rng.gen_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT);
        let position = Vec3::new(x, SPAWN_HEIGHT, z);

        if log_events {
            debug!("Spawning droplet at {:?}", position);
        }

        self.spawn_droplet(position, SPAWN_VELOCITY, size);
    }

    /// Advance the whole world by `dt` seconds.
    ///
    /// Frame order: spawn due droplets, update every droplet (which may
    /// splash into the particle collection), then update particles and
    /// drop settled droplets and expired particles. Renderers must read
    /// state only after this returns. Non-positive `dt` is a no-op.
    pub fn step(&mut self, dt: f32, config: &SplashConfig) {
        if dt <= 0.0 {
            return;
        }

        self.spawn_timer += dt;
        while self.spawn_timer >= config.spawn_interval {
            self.spawn_timer -= config.spawn_interval;
            self.spawn_random_droplet(config.droplet_size, config.log_events);
        }

        let particles = &mut self.particles;
        let rng = &mut self.rng;
        for droplet in &mut self.droplets {
            droplet.update(dt, particles, rng);
        }

        // Survivor filtering is index-stable; never erase mid-iteration.
        self.droplets.retain(|droplet| !droplet.is_settled());
        self.particles.retain_mut(|particle| particle.update(dt));
    }

    /// Remove every droplet and particle and restart the spawn timer.
    /// The RNG stream is kept.
    pub fn clear(&mut self) {
        self.droplets.clear();
        self.particles.clear();
        self.spawn_timer = 0.0;
    }

    /// Live droplets, for the rendering layer.
    pub fn droplets(&self) -> &[Droplet] {
        &self.droplets
    }

    /// Live particles, for the rendering layer.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Copy of everything the rendering layer needs for one frame.
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            droplets: self
                .droplets
                .iter()
                .map(|droplet| DropletSprite {
                    position: droplet.position,
                    size: droplet.size,
                    deform_factor: droplet.deform_factor,
                    has_collided: droplet.has_collided,
                })
                .collect(),
            particles: self
                .particles
                .iter()
                .map(|particle| ParticleSprite {
                    position: particle.position,
                    size: particle.size,
                    alpha: particle.alpha,
                })
                .collect(),
        }
    }
}

impl Default for SplashWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-frame state snapshot consumed by the (external) rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub droplets: Vec<DropletSprite>,
    pub particles: Vec<ParticleSprite>,
}

/// Render state of one droplet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropletSprite {
    /// Model-transform translation.
    pub position: Vec3,
    /// Model-transform scale.
    pub size: f32,
    /// Optional mesh-shape modulation.
    pub deform_factor: f32,
    /// Collided droplets are not drawn as droplets.
    pub has_collided: bool,
}

/// Render state of one particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleSprite {
    pub position: Vec3,
    pub size: f32,
    /// Blend-mode transparency in [0, 0.9].
    pub alpha: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GROUND_Y;

    fn manual_config() -> SplashConfig {
        // Effectively disables automatic spawning so tests control the
        // droplet population explicitly.
        SplashConfig {
            spawn_interval: f32::MAX,
            ..Default::default()
        }
    }

    #[test]
    fn test_spawn_interval_accounting() {
        let mut world = SplashWorld::with_seed(1);
        let config = SplashConfig {
            spawn_interval: 0.1,
            ..Default::default()
        };

        world.step(0.25, &config);
        assert_eq!(world.droplets().len(), 2);

        // The leftover 0.05 carries into the next frame.
        world.step(0.05, &config);
        assert_eq!(world.droplets().len(), 3);

        for droplet in world.droplets() {
            assert!(droplet.position.y <= SPAWN_HEIGHT);
            assert!(droplet.position.x.abs() <= SPAWN_HALF_EXTENT);
            assert!(droplet.position.z.abs() <= SPAWN_HALF_EXTENT);
        }
    }

    #[test]
    fn test_droplet_lifecycle_through_the_world() {
        let mut world = SplashWorld::with_seed(7);
        let config = manual_config();
        world.spawn_droplet(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, 0.3);

        // Fall until impact: the droplet disappears the frame it
        // settles, leaving exactly one burst of 70 particles.
        let mut saw_impact = false;
        for _ in 0..200 {
            world.step(0.05, &config);
            if world.droplets().is_empty() {
                saw_impact = true;
                break;
            }
            assert!(world.particles().is_empty());
        }
        assert!(saw_impact, "droplet never settled");
        assert_eq!(world.particles().len(), 70);

        // Particle lifespans cap at 2 seconds; step well past that.
        for _ in 0..100 {
            world.step(0.05, &config);
        }
        assert!(world.particles().is_empty());
    }

    #[test]
    fn test_particles_decay_while_stepping() {
        let mut world = SplashWorld::with_seed(11);
        let config = manual_config();
        world.spawn_droplet(Vec3::new(0.0, GROUND_Y + 0.4, 0.0), Vec3::new(0.0, -3.0, 0.0), 0.3);

        world.step(0.1, &config);
        assert_eq!(world.particles().len(), 70);

        let before: Vec<f32> = world.particles().iter().map(|p| p.life).collect();
        world.step(0.1, &config);
        for (particle, previous_life) in world.particles().iter().zip(before) {
            assert!(particle.life < previous_life);
        }
    }

    #[test]
    fn test_clear_empties_the_world() {
        let mut world = SplashWorld::with_seed(3);
        let config = SplashConfig {
            spawn_interval: 0.01,
            ..Default::default()
        };

        world.step(0.05, &config);
        assert!(!world.droplets().is_empty());

        world.clear();
        assert!(world.droplets().is_empty());
        assert!(world.particles().is_empty());
    }

    #[test]
    fn test_zero_dt_is_a_noop() {
        let mut world = SplashWorld::with_seed(5);
        let config = SplashConfig {
            spawn_interval: 0.001,
            ..Default::default()
        };

        world.step(0.0, &config);
        world.step(-1.0, &config);
        assert!(world.droplets().is_empty());
        assert!(world.particles().is_empty());
    }

    #[test]
    fn test_same_seed_reproduces_the_run() {
        let config = SplashConfig {
            spawn_interval: 0.02,
            ..Default::default()
        };

        let mut first = SplashWorld::with_seed(42);
        let mut second = SplashWorld::with_seed(42);

        for _ in 0..100 {
            first.step(0.03, &config);
            second.step(0.03, &config);
        }

        assert_eq!(first.snapshot(), second.snapshot());
    }
}
