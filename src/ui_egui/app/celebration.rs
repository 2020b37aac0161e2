//! Confetti burst shown when the selected countdown completes.
//!
//! Particles fall linearly from just above the viewport to its bottom edge
//! while fading out, then the whole burst is dropped.

use std::time::{Duration, Instant};

use egui::{Color32, Context, Pos2, Rect};
use rand::Rng;

use crate::models::countdown::HslColor;
use crate::models::settings::CelebrationSettings;

const PARTICLE_SIZE: f32 = 10.0;
const START_OPACITY: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiParticle {
    /// Horizontal position as a fraction of the viewport width
    pub x_fraction: f32,
    pub color: Color32,
}

#[derive(Debug, Clone)]
pub struct ConfettiBurst {
    started_at: Instant,
    duration: Duration,
    particles: Vec<ConfettiParticle>,
}

impl ConfettiBurst {
    pub fn spawn<R: Rng>(rng: &mut R, count: usize, duration: Duration, now: Instant) -> Self {
        let particles = (0..count)
            .map(|_| {
                let hue = rng.gen_range(0..360u16);
                let rgba = HslColor::new(hue, 100, 70).to_rgba();
                ConfettiParticle {
                    x_fraction: rng.gen_range(0.0..1.0),
                    color: Color32::from_rgb(rgba.r, rgba.g, rgba.b),
                }
            })
            .collect();
        Self {
            started_at: now,
            duration,
            particles,
        }
    }

    pub fn particles(&self) -> &[ConfettiParticle] {
        &self.particles
    }

    /// Animation progress in [0, 1].
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        START_OPACITY * (1.0 - self.progress(now))
    }

    /// Centre of `particle` inside `viewport` at `now`.
    pub fn particle_center(&self, particle: &ConfettiParticle, viewport: Rect, now: Instant) -> Pos2 {
        let start_y = viewport.top() - PARTICLE_SIZE / 2.0;
        let fall = viewport.height() * self.progress(now);
        Pos2::new(
            viewport.left() + viewport.width() * particle.x_fraction,
            start_y + fall,
        )
    }
}

/// All bursts currently on screen.
#[derive(Debug, Clone)]
pub struct ConfettiLayer {
    bursts: Vec<ConfettiBurst>,
    particle_count: usize,
    duration: Duration,
}

impl ConfettiLayer {
    pub fn new(settings: &CelebrationSettings) -> Self {
        Self {
            bursts: Vec::new(),
            particle_count: settings.particle_count,
            duration: burst_duration(settings.duration_secs),
        }
    }

    pub fn fire(&mut self, now: Instant) {
        let burst = ConfettiBurst::spawn(
            &mut rand::thread_rng(),
            self.particle_count,
            self.duration,
            now,
        );
        self.bursts.push(burst);
    }

    #[cfg(test)]
    pub fn active_bursts(&self) -> usize {
        self.bursts.len()
    }

    pub fn prune(&mut self, now: Instant) {
        self.bursts.retain(|burst| !burst.is_finished(now));
    }

    pub fn paint(&mut self, ctx: &Context, now: Instant) {
        self.prune(now);
        if self.bursts.is_empty() {
            return;
        }

        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("confetti"),
        ));
        let viewport = ctx.screen_rect();
        for burst in &self.bursts {
            let opacity = burst.opacity(now);
            for particle in burst.particles() {
                let center = burst.particle_center(particle, viewport, now);
                painter.circle_filled(
                    center,
                    PARTICLE_SIZE / 2.0,
                    particle.color.gamma_multiply(opacity),
                );
            }
        }
        ctx.request_repaint();
    }
}

/// Burst length for `secs`, falling back to the default when `secs` is not
/// a usable duration.
fn burst_duration(secs: f32) -> Duration {
    Duration::try_from_secs_f32(secs).unwrap_or_else(|_| {
        log::warn!("Ignoring unusable confetti duration {secs}s");
        Duration::from_secs_f32(CelebrationSettings::default().duration_secs)
    })
}
