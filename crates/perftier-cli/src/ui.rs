//! Perftier CLI UI primitives.
//!
//! Styled terminal output for tiers, settings and derived views.

use console::{measure_text_width, style, Color, StyledObject};

use perftier::{AnimationConfig, Classification, PerformanceSettings, PerformanceTier, Signals};

/// Orbit color palette
pub mod colors {
    use console::Color;

    pub const CYAN: Color = Color::Color256(51);       // Electric cyan
    pub const MAGENTA: Color = Color::Color256(201);   // Hot magenta
    pub const AMBER: Color = Color::Color256(214);     // Amber
    pub const NEON_GREEN: Color = Color::Color256(82); // Neon green
    pub const DIM: Color = Color::Color256(240);       // Dim gray
}

pub mod symbols {
    pub const DIAMOND: &str = "\u{25C6}";          // ◆
    pub const TARGET_FILLED: &str = "\u{25C9}";    // ◉
    pub const TARGET_EMPTY: &str = "\u{25CE}";     // ◎
    pub const TRIANGLE: &str = "\u{25B8}";         // ▸
    pub const DOT: &str = "\u{00B7}";              // ·
}

/// Columns between the left and right box borders.
const BOX_INNER: usize = 55;

fn tier_color(tier: PerformanceTier) -> Color {
    match tier {
        PerformanceTier::High => colors::NEON_GREEN,
        PerformanceTier::Medium => colors::AMBER,
        PerformanceTier::Low => colors::MAGENTA,
    }
}

/// Tier name colored by severity.
pub fn tier_label(tier: PerformanceTier) -> StyledObject<String> {
    style(tier.to_string().to_uppercase()).fg(tier_color(tier)).bold()
}

fn flag(on: bool) -> String {
    if on {
        format!("{}", style(symbols::TARGET_FILLED).fg(colors::NEON_GREEN))
    } else {
        format!("{}", style(symbols::TARGET_EMPTY).fg(colors::DIM))
    }
}

/// Print compact version header
pub fn print_compact_header(version: &str) {
    println!(
        "  {} {} {}",
        style(symbols::DIAMOND).fg(colors::CYAN),
        style("perftier").fg(colors::CYAN).bold(),
        style(version).dim()
    );
}

/// Print the detected tier and the rule that decided it
pub fn classification(c: &Classification) {
    println!();
    println!(
        "  {} {}   {}",
        style(symbols::DIAMOND).fg(colors::CYAN),
        tier_label(c.tier),
        style(format!("({})", c.rule)).fg(colors::DIM)
    );
    println!();
}

/// Print the tier that an override forced
pub fn forced(tier: PerformanceTier) {
    println!();
    println!(
        "  {} {}   {}",
        style(symbols::DIAMOND).fg(colors::CYAN),
        tier_label(tier),
        style("(override)").fg(colors::DIM)
    );
    println!();
}

/// Print the signals that were fed to the classifier
pub fn signals(signals: &Signals) {
    box_header("signals");
    if signals.is_empty() {
        box_line("none reported");
    }
    if let Some(v) = signals.reduced_motion {
        box_line(&format!("reduced motion      {}", v));
    }
    if let Some(v) = signals.device_memory_gb {
        box_line(&format!("device memory       {:.2} GB", v));
    }
    if let Some(v) = signals.hardware_concurrency {
        box_line(&format!("cpu cores           {}", v));
    }
    if let Some(v) = signals.effective_type {
        box_line(&format!("connection          {}", v));
    }
    if let Some(v) = &signals.user_agent {
        box_line(&format!("user agent          {}", truncate(v, BOX_INNER - 21)));
    }
    if let Some(v) = signals.viewport_width {
        box_line(&format!("viewport            {}px", v));
    }
    box_footer();
}

/// Print a settings record
pub fn settings(s: &PerformanceSettings) {
    box_header(&format!("settings {} {}", symbols::DOT, s.tier));
    flag_line("reduce motion", s.reduce_motion);
    flag_line("blur", s.enable_blur);
    flag_line("shadows", s.enable_shadows);
    flag_line("particles", s.enable_particles);
    flag_line("3d transforms", s.enable_3d_transforms);
    box_line(&format!("duration x          {}", s.animation_duration_multiplier));
    box_line(&format!("max animated        {}", s.max_animated_elements));
    box_footer();
}

fn flag_line(label: &str, on: bool) {
    println!("{}", flag_row(label, on));
}

fn flag_row(label: &str, on: bool) -> String {
    let text = format!("{:<20}", label);
    let padding = BOX_INNER.saturating_sub(1 + measure_text_width(&text) + 1);
    format!(
        "  {} {}{}{}{}",
        style("\u{2502}").fg(colors::CYAN),
        text,
        flag(on),
        " ".repeat(padding),
        style("\u{2502}").fg(colors::CYAN)
    )
}

/// Print the style classes and animation adapter
pub fn derived(classes: &str, css: &str, animation: &AnimationConfig) {
    println!(
        "  {} class      {}",
        style(symbols::TRIANGLE).fg(colors::CYAN),
        style(classes).bold()
    );
    println!(
        "  {} style      {}",
        style(symbols::TRIANGLE).fg(colors::CYAN),
        css
    );
    println!(
        "  {} ease       {}   force3D {}   will-change {}",
        style(symbols::TRIANGLE).fg(colors::CYAN),
        animation.ease,
        animation.force_3d,
        animation.will_change
    );
    println!(
        "  {} 1.0s       {} {:.2}s",
        style(symbols::TRIANGLE).fg(colors::CYAN),
        style("\u{2500}\u{25B8}").fg(colors::DIM),
        animation.scale(1.0)
    );
}

/// Print one compact row of the settings table
pub fn table_row(s: &PerformanceSettings) {
    println!(
        "  {} {}  {}  {}  {}  {}  {:>4.1}  {:>4}",
        style(format!("{:<8}", s.tier.to_string().to_uppercase())).fg(tier_color(s.tier)).bold(),
        flag(s.reduce_motion),
        flag(s.enable_blur),
        flag(s.enable_shadows),
        flag(s.enable_particles),
        flag(s.enable_3d_transforms),
        s.animation_duration_multiplier,
        s.max_animated_elements
    );
}

/// Print the table legend
pub fn table_header() {
    println!(
        "  {}",
        style("tier     rm bl sh pa 3d   dur   max").fg(colors::DIM)
    );
}

/// Print a dim/secondary message
pub fn dim(msg: &str) {
    println!("  {}", style(msg).fg(colors::DIM));
}

/// Print a box header
pub fn box_header(title: &str) {
    println!("{}", header_row(title));
}

/// Print a box line
pub fn box_line(content: &str) {
    println!("{}", body_row(content));
}

/// Print a box footer
pub fn box_footer() {
    println!("{}", footer_row());
}

fn header_row(title: &str) -> String {
    let title_padded = format!(" {} ", title);
    let dashes = BOX_INNER.saturating_sub(1 + measure_text_width(&title_padded));
    format!(
        "  {}{}{}{}",
        style("\u{256D}\u{2500}").fg(colors::CYAN), // ╭─
        style(title_padded).fg(colors::CYAN).bold(),
        style("\u{2500}".repeat(dashes)).fg(colors::CYAN),
        style("\u{256E}").fg(colors::CYAN) // ╮
    )
}

fn body_row(content: &str) -> String {
    let padding = BOX_INNER.saturating_sub(1 + measure_text_width(content));
    format!(
        "  {} {}{}{}",
        style("\u{2502}").fg(colors::CYAN), // │
        content,
        " ".repeat(padding),
        style("\u{2502}").fg(colors::CYAN)
    )
}

fn footer_row() -> String {
    format!(
        "  {}{}{}",
        style("\u{2570}").fg(colors::CYAN), // ╰
        style("\u{2500}".repeat(BOX_INNER)).fg(colors::CYAN),
        style("\u{256F}").fg(colors::CYAN) // ╯
    )
}

/// Shorten to `max` characters with an ellipsis.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}\u{2026}", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd\u{2026}");
        assert_eq!(truncate("abcdefghij", 5).chars().count(), 5);
    }

    #[test]
    fn test_box_borders_align() {
        let rows = [
            header_row("settings \u{00B7} medium"),
            body_row("duration x          0.8"),
            body_row(""),
            flag_row("particles", true),
            flag_row("blur", false),
            footer_row(),
        ];
        let widths: Vec<usize> = rows.iter().map(|r| measure_text_width(r)).collect();
        assert!(widths.iter().all(|w| *w == BOX_INNER + 4), "{:?}", widths);
    }

    #[test]
    fn test_user_agent_fits_box() {
        let ua = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko)";
        let line = format!("user agent          {}", truncate(ua, BOX_INNER - 21));
        assert_eq!(measure_text_width(&body_row(&line)), BOX_INNER + 4);
    }

    #[test]
    fn test_tier_label_text() {
        console::set_colors_enabled(false);
        assert_eq!(tier_label(PerformanceTier::Medium).to_string(), "MEDIUM");
    }
}
