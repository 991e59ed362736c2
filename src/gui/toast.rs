use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use crate::gui::theme::Theme;

pub const DEFAULT_TOAST_MILLIS: u64 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
}

impl Severity {
    fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Error => "✖",
            Severity::Warning => "⚠",
        }
    }
}

#[derive(Debug, Clone)]
struct Toast {
    severity: Severity,
    message: String,
    // None = sticky until dismissed
    deadline: Option<Instant>,
}

/// Transient status banner in the top-right corner. Newest replaces
/// current; auto-dismisses at its deadline unless the duration was zero,
/// and is always dismissible by hand.
pub struct ToastOverlay {
    current: Option<Toast>,
}

impl ToastOverlay {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Severity::Success, message, DEFAULT_TOAST_MILLIS);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message, DEFAULT_TOAST_MILLIS);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message, DEFAULT_TOAST_MILLIS);
    }

    pub fn push(&mut self, severity: Severity, message: impl Into<String>, duration_ms: u64) {
        let deadline =
            (duration_ms > 0).then(|| Instant::now() + Duration::from_millis(duration_ms));
        self.current = Some(Toast { severity, message: message.into(), deadline });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|toast| toast.message.as_str())
    }

    pub fn severity(&self) -> Option<Severity> {
        self.current.as_ref().map(|toast| toast.severity)
    }

    /// Drop the current toast once its deadline has passed.
    pub fn prune(&mut self, now: Instant) {
        if let Some(toast) = &self.current {
            if toast.deadline.is_some_and(|deadline| now >= deadline) {
                self.current = None;
            }
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        self.prune(Instant::now());

        let (severity, message, deadline) = match &self.current {
            Some(toast) => (toast.severity, toast.message.clone(), toast.deadline),
            None => return,
        };

        let accent = match severity {
            Severity::Success => theme.green(ctx),
            Severity::Error => theme.red(ctx),
            Severity::Warning => theme.yellow(ctx),
        };

        let mut dismissed = false;
        egui::Area::new(egui::Id::new("toast_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_TOP, egui::Vec2::new(-12.0, 12.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).stroke(egui::Stroke::new(1.5, accent)).show(
                    ui,
                    |ui| {
                        ui.horizontal(|ui| {
                            ui.colored_label(accent, severity.icon());
                            ui.label(&message);
                            if ui.small_button("✕").clicked() {
                                dismissed = true;
                            }
                        });
                    },
                );
            });

        if dismissed {
            self.dismiss();
        } else if let Some(deadline) = deadline {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }
}

impl Default for ToastOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_duration() {
        let mut overlay = ToastOverlay::new();
        overlay.push(Severity::Success, "saved", 3000);
        assert!(overlay.is_visible());

        overlay.prune(Instant::now());
        assert!(overlay.is_visible());

        overlay.prune(Instant::now() + Duration::from_millis(3001));
        assert!(!overlay.is_visible());
    }

    #[test]
    fn zero_duration_persists_until_dismissed() {
        let mut overlay = ToastOverlay::new();
        overlay.push(Severity::Error, "broken", 0);

        overlay.prune(Instant::now() + Duration::from_secs(3600));
        assert!(overlay.is_visible());

        overlay.dismiss();
        assert!(!overlay.is_visible());
    }

    #[test]
    fn newest_replaces_current() {
        let mut overlay = ToastOverlay::new();
        overlay.success("first");
        overlay.error("second");

        assert_eq!(overlay.message(), Some("second"));
        assert_eq!(overlay.severity(), Some(Severity::Error));
    }
}
