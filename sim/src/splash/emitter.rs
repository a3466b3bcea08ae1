//! Stochastic splash burst generation.
//!
//! Emits particles into a collection owned by the caller; the emitting
//! droplet keeps no ownership of its spray.

use std::f32::consts::{PI, TAU};

use bevy::math::Vec3;
use bevy_log::debug;
use rand::Rng;
use rand_distr::{Distribution, LogNormal, Normal};

use super::config::constants::*;
use crate::particle::Particle;

/// Splash energy derived from the vertical impact speed.
fn impact_energy(impact_speed_y: f32) -> f32 {
    (impact_speed_y.abs() * IMPACT_ENERGY_FACTOR).min(IMPACT_ENERGY_CAP)
}

/// Emit one full splash burst into `sink`.
///
/// `impact_speed_y` is the droplet's vertical velocity at the moment of
/// impact, before the collision response zeroes it. Appends exactly
/// `CROWN_PARTICLE_COUNT + VERTICAL_PARTICLE_COUNT` particles per call.
pub fn emit_splash(
    impact_point: Vec3,
    impact_speed_y: f32,
    sink: &mut Vec<Particle>,
    rng: &mut impl Rng,
) {
    let jitter = Normal::new(0.0, 1.0).expect("unit normal parameters are valid");
    let speed = LogNormal::new(SPEED_MEDIAN_BIAS, SPEED_SPREAD)
        .expect("log-normal speed parameters are valid");

    let energy = impact_energy(impact_speed_y);

    // Crown burst: evenly spaced base angles around a ring, each
    // jittered so the crown looks irregular.
    for i in 0..CROWN_PARTICLE_COUNT {
        let base_angle = i as f32 / CROWN_PARTICLE_COUNT as f32 * TAU;
        let angle = base_angle + jitter.sample(rng) * ANGLE_JITTER_SPREAD;

        let horizontal_speed = speed.sample(rng) * energy;
        let upward = CROWN_UPWARD_BASE + jitter.sample(rng).abs() * CROWN_UPWARD_JITTER;

        let velocity = Vec3::new(
            angle.cos() * horizontal_speed,
            upward,
            angle.sin() * horizontal_speed,
        );
        let position = impact_point
            + Vec3::new(
                angle.cos() * CROWN_RADIAL_OFFSET,
                0.0,
                angle.sin() * CROWN_RADIAL_OFFSET,
            );

        sink.push(Particle::new(
            position,
            velocity,
            rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
            rng.gen_range(LIFESPAN_MIN..LIFESPAN_MAX),
        ));
    }

    // Vertical burst: a handful of slower jets thrown almost straight
    // up from the exact impact point.
    for _ in 0..VERTICAL_PARTICLE_COUNT {
        let angle = jitter.sample(rng) * PI;
        let burst_speed = speed.sample(rng) * energy * VERTICAL_BURST_SCALE;

        let velocity = Vec3::new(
            angle.cos() * burst_speed * VERTICAL_LATERAL_SCALE,
            VERTICAL_UPWARD_BASE + jitter.sample(rng).abs(),
            angle.sin() * burst_speed * VERTICAL_LATERAL_SCALE,
        );

        sink.push(Particle::new(
            impact_point,
            velocity,
            rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX) * VERTICAL_BURST_SCALE,
            rng.gen_range(LIFESPAN_MIN..LIFESPAN_MAX) * VERTICAL_BURST_SCALE,
        ));
    }

    debug!(
        "Splash at {:?}: {} particles, energy {:.2}",
        impact_point,
        CROWN_PARTICLE_COUNT + VERTICAL_PARTICLE_COUNT,
        energy
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn emit(seed: u64, impact_speed_y: f32) -> Vec<Particle> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut sink = Vec::new();
        emit_splash(Vec3::new(0.0, -1.7, 0.0), impact_speed_y, &mut sink, &mut rng);
        sink
    }

    #[test]
    fn test_emits_exactly_seventy_particles() {
        let sink = emit(1, -5.0);
        assert_eq!(sink.len(), CROWN_PARTICLE_COUNT + VERTICAL_PARTICLE_COUNT);
        assert_eq!(sink.len(), 70);
    }

    #[test]
    fn test_impact_energy_is_capped() {
        assert!((impact_energy(-5.0) - 1.0).abs() < 1e-6);
        assert_eq!(impact_energy(-100.0), IMPACT_ENERGY_CAP);
        assert_eq!(impact_energy(-10.0), IMPACT_ENERGY_CAP);
        assert_eq!(impact_energy(0.0), 0.0);
    }

    #[test]
    fn test_crown_particles_spread_outward() {
        let sink = emit(2, -8.0);

        for particle in &sink[..CROWN_PARTICLE_COUNT] {
            let horizontal = Vec3::new(particle.velocity.x, 0.0, particle.velocity.z).length();
            assert!(horizontal > 0.0, "log-normal speeds are strictly positive");
            assert!(particle.velocity.y >= CROWN_UPWARD_BASE);

            // Offset radially from the impact point, still on the ground.
            let offset = particle.position - Vec3::new(0.0, -1.7, 0.0);
            assert!((offset.length() - CROWN_RADIAL_OFFSET).abs() < 1e-6);
            assert_eq!(offset.y, 0.0);
        }
    }

    #[test]
    fn test_vertical_burst_is_slower_and_steeper() {
        let sink = emit(3, -8.0);

        for particle in &sink[CROWN_PARTICLE_COUNT..] {
            assert!(particle.velocity.y >= VERTICAL_UPWARD_BASE);
            assert_eq!(particle.position, Vec3::new(0.0, -1.7, 0.0));
            assert!(particle.size < PARTICLE_SIZE_MAX * VERTICAL_BURST_SCALE);
            assert!(particle.max_life <= LIFESPAN_MAX * VERTICAL_BURST_SCALE);
        }
    }

    #[test]
    fn test_sizes_and_lifespans_stay_in_range() {
        let sink = emit(4, -6.0);

        for particle in &sink[..CROWN_PARTICLE_COUNT] {
            assert!(particle.size >= PARTICLE_SIZE_MIN && particle.size < PARTICLE_SIZE_MAX);
            assert!(particle.max_life >= LIFESPAN_MIN && particle.max_life < LIFESPAN_MAX);
            assert_eq!(particle.life, particle.max_life);
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_burst() {
        let first = emit(42, -7.5);
        let second = emit(42, -7.5);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.velocity, b.velocity);
            assert_eq!(a.size, b.size);
            assert_eq!(a.max_life, b.max_life);
        }
    }
}
