//! Neon ASCII banner (STOREFRONT) with the provider mode as its last gradient line.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Neon Purple (#bc13fe).
const NEON_PURPLE: [u8; 3] = [0xbc, 0x13, 0xfe];
/// Cyber Green (#0ff0fc).
const CYBER_GREEN: [u8; 3] = [0x0f, 0xf0, 0xfc];

const TITLE: &str = "STOREFRONT";

/// `steps` colors evenly spaced from Neon Purple to Cyber Green, both ends included.
fn gradient(steps: usize) -> Vec<[u8; 3]> {
    let last = steps.saturating_sub(1).max(1) as f64;
    (0..steps)
        .map(|i| {
            let t = i as f64 / last;
            let mut rgb = [0u8; 3];
            for (c, (from, to)) in rgb.iter_mut().zip(NEON_PURPLE.iter().zip(CYBER_GREEN)) {
                *c = (f64::from(*from) + (f64::from(to) - f64::from(*from)) * t).round() as u8;
            }
            rgb
        })
        .collect()
}

/// Title art, or the plain title when the bundled font cannot render it.
fn banner_lines(provider_enabled: bool) -> Vec<String> {
    let art = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(TITLE).map(|figure| figure.to_string()))
        .unwrap_or_else(|| TITLE.to_string());

    let mode = if provider_enabled {
        "AI provider: enabled"
    } else {
        "AI provider: offline (rule-based insights)"
    };

    art.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .chain([
            format!("v{}", env!("CARGO_PKG_VERSION")),
            mode.to_string(),
        ])
        .collect()
}

/// Prints the welcome banner, each line one step along the gradient.
pub fn print_welcome(provider_enabled: bool) {
    let lines = banner_lines(provider_enabled);
    let mut out = stdout();
    for (line, [r, g, b]) in lines.iter().zip(gradient(lines.len())) {
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(format!("{}\r\n", line)));
    }
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
