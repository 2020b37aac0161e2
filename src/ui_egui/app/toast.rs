//! Toast notifications for brief feedback messages.
//!
//! Toasts appear in the bottom-right corner, stack upward and fade out.

use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

const FADE_OUT: Duration = Duration::from_millis(500);

/// Types of toast notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Countdown added (green)
    Success,
    /// Rejected submission or unreadable file (red)
    Error,
}

impl ToastLevel {
    /// Icon shown before the message
    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Error => "✗",
        }
    }

    /// Background colour for this level
    pub fn background_color(&self, is_dark_theme: bool) -> Color32 {
        match (self, is_dark_theme) {
            (ToastLevel::Success, true) => Color32::from_rgb(30, 70, 40),
            (ToastLevel::Error, true) => Color32::from_rgb(80, 30, 30),
            (ToastLevel::Success, false) => Color32::from_rgb(220, 255, 220),
            (ToastLevel::Error, false) => Color32::from_rgb(255, 220, 220),
        }
    }

    /// Text and icon colour for this level
    pub fn text_color(&self, is_dark_theme: bool) -> Color32 {
        match (self, is_dark_theme) {
            (ToastLevel::Success, true) => Color32::from_rgb(100, 220, 120),
            (ToastLevel::Error, true) => Color32::from_rgb(255, 120, 120),
            (ToastLevel::Success, false) => Color32::from_rgb(30, 120, 50),
            (ToastLevel::Error, false) => Color32::from_rgb(180, 40, 40),
        }
    }
}

/// A single toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    /// The message to display
    pub message: String,
    /// The severity level
    pub level: ToastLevel,
    /// When the toast was created
    pub created_at: Instant,
    /// How long the toast stays on screen
    pub duration: Duration,
}

impl Toast {
    /// Create a toast that lasts three seconds
    pub fn new(message: impl Into<String>, level: ToastLevel, created_at: Instant) -> Self {
        Self {
            message: message.into(),
            level,
            created_at,
            duration: Duration::from_secs(3),
        }
    }

    /// Whether the toast has outlived its duration
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// 1 while fully visible, ramping down to 0 over the last half second.
    pub fn opacity(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.created_at);
        if elapsed >= self.duration {
            return 0.0;
        }
        let left = self.duration - elapsed;
        if left < FADE_OUT {
            (left.as_secs_f32() / FADE_OUT.as_secs_f32()).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Holds the active toasts and draws them
#[derive(Debug, Default)]
pub struct ToastManager {
    /// Oldest first
    toasts: Vec<Toast>,
}

impl ToastManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a success toast
    pub fn success(&mut self, message: impl Into<String>) {
        self.toasts
            .push(Toast::new(message, ToastLevel::Success, Instant::now()));
    }

    /// Queue an error toast
    pub fn error(&mut self, message: impl Into<String>) {
        self.toasts
            .push(Toast::new(message, ToastLevel::Error, Instant::now()));
    }

    /// Drop expired toasts
    pub fn cleanup(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired(now));
    }

    /// Number of live toasts
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Draw all live toasts in the bottom-right corner
    pub fn render(&mut self, ctx: &Context, is_dark_theme: bool) {
        let now = Instant::now();
        self.cleanup(now);
        if self.toasts.is_empty() {
            return;
        }

        ctx.request_repaint();

        let screen_rect = ctx.screen_rect();
        let toast_width = 300.0;
        let toast_height = 40.0;
        let margin = 10.0;
        let spacing = 5.0;

        for (i, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity(now);
            if opacity <= 0.0 {
                continue;
            }

            let y_offset = (i as f32) * (toast_height + spacing);
            let pos = Pos2::new(
                screen_rect.right() - toast_width - margin,
                screen_rect.bottom() - toast_height - margin - y_offset,
            );

            egui::Area::new(egui::Id::new(("toast", i)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    let bg_color = toast.level.background_color(is_dark_theme);
                    let text_color = toast.level.text_color(is_dark_theme);
                    let bg_color = bg_color.gamma_multiply(0.9 * opacity);
                    let text_color = text_color.gamma_multiply(opacity);

                    egui::Frame::none()
                        .fill(bg_color)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .stroke(egui::Stroke::new(1.0, text_color.gamma_multiply(0.3)))
                        .show(ui, |ui| {
                            ui.set_min_width(toast_width - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(toast.level.icon()).color(text_color).strong());
                                ui.label(RichText::new(&toast.message).color(text_color));
                            });
                        });
                });
        }
    }
}
