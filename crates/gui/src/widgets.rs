//! Small UI helpers: toast notifications shown after export actions.

use eframe::egui;

/// Severity of a toast notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn color(&self) -> egui::Color32 {
        match self {
            ToastKind::Success => egui::Color32::from_rgb(80, 180, 80),
            ToastKind::Error => egui::Color32::from_rgb(200, 80, 80),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
        }
    }
}

/// State for a toast notification.
#[derive(Clone, Debug)]
pub struct ToastState {
    pub message: String,
    pub kind: ToastKind,
    /// Frames remaining before the toast disappears (~60 frames/sec).
    pub frames_remaining: u32,
}

impl ToastState {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            frames_remaining: 120,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }
}

/// Renders the active toast in the bottom-right corner, fading it out over
/// its last 30 frames. Call at the end of the frame so it draws on top.
pub fn render_toast(ctx: &egui::Context, toast: &mut Option<ToastState>) {
    let Some(t) = toast else {
        return;
    };

    if t.frames_remaining > 0 {
        t.frames_remaining -= 1;
    }
    if t.frames_remaining == 0 {
        *toast = None;
        return;
    }

    let alpha = if t.frames_remaining < 30 {
        (t.frames_remaining as f32 / 30.0 * 255.0) as u8
    } else {
        255
    };

    let screen_rect = ctx.screen_rect();
    let toast_pos = egui::pos2(screen_rect.max.x - 20.0, screen_rect.max.y - 40.0);

    egui::Area::new(egui::Id::new("toast_notification"))
        .fixed_pos(toast_pos)
        .pivot(egui::Align2::RIGHT_BOTTOM)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let bg = t.kind.color();
            let bg = egui::Color32::from_rgba_unmultiplied(bg.r(), bg.g(), bg.b(), alpha);
            egui::Frame::none()
                .fill(bg)
                .rounding(8.0)
                .inner_margin(egui::Margin::symmetric(16.0, 10.0))
                .show(ui, |ui| {
                    let text_color = egui::Color32::from_rgba_unmultiplied(255, 255, 255, alpha);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(t.kind.icon()).color(text_color));
                        ui.label(egui::RichText::new(&t.message).color(text_color));
                    });
                });
        });

    // Request repaint to animate
    ctx.request_repaint();
}
