//! Splash screen drawn while the vault loads.

use crate::boot::BootScreen;
use crate::theme::StyleTag;
use crate::ui::constants::{BANNER_MIN_HEIGHT, BANNER_MIN_WIDTH};
use crate::ui::frame::{fit_width, RenderFrame};

pub const BANNER: &[&str] = &[
    r"               _",
    r" _ __    ___  | |_    ___ __      __   ___   __ _  __   __   ___",
    r"| '_ \  / _ \ | __|  / _ \\ \ /\ / /  / _ \ / _` | \ \ / /  / _ \",
    r"| | | || (_) || |_  |  __/ \ V  V /  |  __/| (_| |  \ V /  |  __/",
    r"|_| |_| \___/  \__|  \___|  \_/\_/    \___| \__,_|   \_/    \___|",
];

pub struct BootRenderer;

impl BootRenderer {
    pub fn render(frame: &mut RenderFrame, boot: &BootScreen) {
        let limit = usize::from(frame.width).saturating_sub(1);
        let line = |frame: &mut RenderFrame, row: usize, text: &str| {
            frame.draw(row, 0, &fit_width(text, limit), StyleTag::Primary);
        };

        let roomy = frame.width >= BANNER_MIN_WIDTH && frame.height >= BANNER_MIN_HEIGHT;
        let loading_row = if roomy {
            for (row, banner_line) in BANNER.iter().enumerate() {
                line(frame, row, banner_line);
            }
            line(frame, BANNER.len() + 1, boot.tip);
            BANNER.len() + 2
        } else {
            line(frame, 1, boot.tip);
            2
        };

        let status = format!("{}{}", boot.label, ".".repeat(boot.dots));
        line(frame, loading_row, &status);
    }
}
